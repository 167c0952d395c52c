//! The graph layer: the PDAG manager.
//!
//! A [`Pdag`] owns the root gate, the unique constant node, and the
//! variable-index table mapping back to the model's basic events. It hands
//! out monotonically increasing node indices: index 1 is the constant,
//! variables occupy the contiguous block starting at 2, and every gate index
//! exceeds the last variable index. Downstream algorithms rely on
//! `index < 2 + V` as an O(1) leaf test, so the two-pass construction from a
//! model (variables first, gates second) is load-bearing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hashbrown::{HashMap, HashSet};
use log::debug;

use crate::gate::{Gate, Operator};
use crate::model::{Arg, BasicEvent, Formula};
use crate::node::{Constant, ConstantPtr, GatePtr, GateWeak, Node, NodePtr, Variable, VariablePtr};
use crate::reference::Ref;

/// Per-graph state shared with every node: the index allocator and the
/// registrar of pass-through and constant gates.
pub(crate) struct GraphCore {
    node_index: Cell<u32>,
    register_null_gates: Cell<bool>,
    null_gates: RefCell<Vec<GateWeak>>,
    const_gates: RefCell<Vec<GateWeak>>,
}

impl GraphCore {
    fn new() -> Rc<Self> {
        Rc::new(GraphCore {
            node_index: Cell::new(0),
            register_null_gates: Cell::new(true),
            null_gates: RefCell::new(Vec::new()),
            const_gates: RefCell::new(Vec::new()),
        })
    }

    /// Hands out the next unique node index of this graph.
    pub(crate) fn next_index(&self) -> u32 {
        let index = self.node_index.get() + 1;
        self.node_index.set(index);
        index
    }

    pub(crate) fn register_null_gates(&self) -> bool {
        self.register_null_gates.get()
    }

    pub(crate) fn set_register_null_gates(&self, flag: bool) {
        self.register_null_gates.set(flag);
    }

    pub(crate) fn enqueue_null_gate(&self, gate: GateWeak) {
        self.null_gates.borrow_mut().push(gate);
    }

    pub(crate) fn enqueue_const_gate(&self, gate: GateWeak) {
        self.const_gates.borrow_mut().push(gate);
    }

    fn take_null_gates(&self) -> Vec<GateWeak> {
        std::mem::take(&mut self.null_gates.borrow_mut())
    }

    fn take_const_gates(&self) -> Vec<GateWeak> {
        std::mem::take(&mut self.const_gates.borrow_mut())
    }
}

/// Nodes created from model events during translation, keyed by the identity
/// of the model object so that shared events and formulas deduplicate.
#[derive(Default)]
struct ProcessedNodes {
    gathered: HashSet<*const Formula>,
    gates: HashMap<*const Formula, GatePtr>,
    variables: HashMap<*const BasicEvent, VariablePtr>,
}

/// A propositional directed acyclic graph.
///
/// The PDAG is the indexed, mutable Boolean circuit used as the analysis IR:
/// a simpler representation of a fault tree in terms of node indices instead
/// of names and pointers. Gates own their arguments; the graph owns only the
/// root gate and the constant, so a sub-graph dies as soon as the last gate
/// referencing it lets go.
pub struct Pdag {
    core: Rc<GraphCore>,
    root: Option<GatePtr>,
    constant: ConstantPtr,
    basic_events: Vec<Rc<BasicEvent>>,
    coherent: bool,
    normal: bool,
    complement: bool,
}

impl Pdag {
    /// The reserved index of the constant TRUE node.
    pub const CONSTANT_INDEX: u32 = 1;
    /// The first index of the contiguous variable block.
    pub const VARIABLE_START_INDEX: u32 = 2;

    /// Constructs a root-less graph ready for general purpose Boolean
    /// formulas, e.g. in tests. The constant node takes index 1.
    pub fn new() -> Self {
        let core = GraphCore::new();
        let constant = Constant::new(&core);
        debug_assert_eq!(constant.borrow().index(), Self::CONSTANT_INDEX);
        Pdag {
            core,
            root: None,
            constant,
            basic_events: Vec::new(),
            coherent: true,
            normal: true,
            complement: false,
        }
    }

    /// Constructs a PDAG from the root formula of a fault tree.
    ///
    /// The model is walked twice: first to enumerate all basic events and
    /// assign them the contiguous variable indices starting at 2, then to
    /// build one gate per formula. House events become literals against the
    /// graph constant and are folded away immediately; the worklist registrar
    /// stays off during construction so that construction-time pass-through
    /// gates are not spuriously enqueued.
    pub fn from_model(root_formula: &Rc<Formula>) -> Self {
        let mut graph = Pdag::new();
        graph.core.set_register_null_gates(false);
        let mut nodes = ProcessedNodes::default();
        graph.gather_variables(root_formula, &mut nodes);
        debug!(
            "constructing a PDAG over {} variables",
            graph.basic_events.len()
        );
        let root = graph.construct_gate(root_formula, &mut nodes);
        graph.root = Some(root);
        graph.update_graph_flags();
        graph.core.set_register_null_gates(true);
        graph
    }

    /// The current root gate, or `None` for a root-less graph.
    pub fn root(&self) -> Option<&GatePtr> {
        self.root.as_ref()
    }

    /// Replaces the root gate. Helpful for graph transformations.
    ///
    /// # Preconditions
    ///
    /// The gate belongs to this graph.
    pub fn set_root(&mut self, gate: &GatePtr) {
        debug_assert!(
            Rc::ptr_eq(&self.core, gate.borrow().base().core()),
            "The gate is from a different graph"
        );
        self.root = Some(Rc::clone(gate));
    }

    /// The unique constant TRUE node of this graph.
    pub fn constant(&self) -> &ConstantPtr {
        &self.constant
    }

    /// True if the graph contains no negation.
    pub fn coherent(&self) -> bool {
        self.coherent
    }

    /// True if the only gate types are AND and OR.
    pub fn normal(&self) -> bool {
        self.normal
    }

    /// True if the graph represents the complement of its root.
    pub fn complement(&self) -> bool {
        self.complement
    }

    pub fn set_complement(&mut self, flag: bool) {
        self.complement = flag;
    }

    /// The basic events behind the variable indices, in index order:
    /// slot `i` corresponds to variable index `i + 2`.
    pub fn basic_events(&self) -> &[Rc<BasicEvent>] {
        &self.basic_events
    }

    /// The basic event behind the given variable index.
    pub fn basic_event(&self, index: u32) -> &Rc<BasicEvent> {
        debug_assert!(self.is_variable_index(index), "Not a variable index");
        &self.basic_events[(index - Self::VARIABLE_START_INDEX) as usize]
    }

    /// The number of variables of this graph.
    pub fn num_variables(&self) -> usize {
        self.basic_events.len()
    }

    /// True if the index falls into the variable block `[2, 2 + V)`.
    pub fn is_variable_index(&self, index: u32) -> bool {
        index >= Self::VARIABLE_START_INDEX
            && index < Self::VARIABLE_START_INDEX + self.basic_events.len() as u32
    }

    /// Creates a new gate belonging to this graph.
    pub fn new_gate(&self, operator: Operator) -> GatePtr {
        Gate::new(operator, &self.core)
    }

    /// Creates a new variable belonging to this graph.
    ///
    /// This is for building graphs by hand; graphs constructed from a model
    /// never introduce variables after translation.
    pub fn new_variable(&self) -> VariablePtr {
        Variable::new(&self.core)
    }

    /// Whether local rewrites register pass-through and constant gates
    /// on the worklists.
    pub fn register_null_gates(&self) -> bool {
        self.core.register_null_gates()
    }

    pub fn set_register_null_gates(&self, flag: bool) {
        self.core.set_register_null_gates(flag);
    }

    /// Drains the worklist of pass-through gates recorded by local rewrites.
    ///
    /// Entries are weak: a gate that lost its last parent before the drain
    /// fails to upgrade and must be skipped.
    pub fn drain_null_gates(&self) -> Vec<GateWeak> {
        self.core.take_null_gates()
    }

    /// Drains the worklist of gates that have collapsed into constants.
    pub fn drain_const_gates(&self) -> Vec<GateWeak> {
        self.core.take_const_gates()
    }

    fn gather_variables(&mut self, formula: &Rc<Formula>, nodes: &mut ProcessedNodes) {
        if !nodes.gathered.insert(Rc::as_ptr(formula)) {
            return;
        }
        for arg in formula.args() {
            match arg {
                Arg::Basic(event) => {
                    let key = Rc::as_ptr(event);
                    if !nodes.variables.contains_key(&key) {
                        let variable = Variable::new(&self.core);
                        debug_assert_eq!(
                            variable.borrow().index() as usize,
                            self.basic_events.len() + Self::VARIABLE_START_INDEX as usize,
                            "Non-contiguous variable indices"
                        );
                        self.basic_events.push(Rc::clone(event));
                        nodes.variables.insert(key, variable);
                    }
                }
                Arg::House(_) => {}
                Arg::Formula(sub) | Arg::Complement(sub) => self.gather_variables(sub, nodes),
            }
        }
    }

    fn construct_gate(&mut self, formula: &Rc<Formula>, nodes: &mut ProcessedNodes) -> GatePtr {
        if let Some(gate) = nodes.gates.get(&Rc::as_ptr(formula)) {
            return Rc::clone(gate);
        }
        let gate = Gate::new(formula.operator(), &self.core);
        if let Some(number) = formula.vote_number() {
            gate.borrow_mut().set_vote_number(number);
        }
        nodes.gates.insert(Rc::as_ptr(formula), Rc::clone(&gate));
        // The K/N duplicate and complement rewrites read the remaining
        // argument count, which is meaningless for a partially built gate;
        // a repeated VOTE literal waits until the rest of the list is in.
        let defer_repeats = formula.operator() == Operator::Vote;
        let mut repeats: Vec<(Ref, NodePtr)> = Vec::new();
        for arg in formula.args() {
            // A collapsed gate absorbs whatever arguments remain.
            if gate.borrow().is_constant() {
                break;
            }
            let (index, node) = match arg {
                Arg::Basic(event) => {
                    let variable = Rc::clone(&nodes.variables[&Rc::as_ptr(event)]);
                    let index = variable.borrow().index();
                    (Ref::positive(index), NodePtr::Variable(variable))
                }
                Arg::House(event) => {
                    let index = if event.state() {
                        Ref::positive(Self::CONSTANT_INDEX)
                    } else {
                        Ref::negative(Self::CONSTANT_INDEX)
                    };
                    (index, NodePtr::Constant(Rc::clone(&self.constant)))
                }
                Arg::Formula(sub) => {
                    let sub_gate = self.construct_gate(sub, nodes);
                    let index = sub_gate.borrow().index();
                    (Ref::positive(index), NodePtr::Gate(sub_gate))
                }
                Arg::Complement(sub) => {
                    let sub_gate = self.construct_gate(sub, nodes);
                    let index = sub_gate.borrow().index();
                    (Ref::negative(index), NodePtr::Gate(sub_gate))
                }
            };
            let repeated = defer_repeats && {
                let g = gate.borrow();
                g.args().contains(&index) || g.args().contains(&-index)
            };
            if repeated {
                repeats.push((index, node));
            } else {
                gate.borrow_mut().add_arg(index, &node);
            }
        }
        for (index, node) in repeats {
            // A repeat may have collapsed the gate into a constant or reduced
            // it to a single-argument pass-through; both end the additions.
            let closed = {
                let g = gate.borrow();
                g.is_constant() || g.operator() == Operator::Null
            };
            if closed {
                break;
            }
            gate.borrow_mut().add_arg(index, &node);
        }
        // House-event constants fold only once the argument list is
        // complete; the collapse tables read remaining-argument counts.
        loop {
            if gate.borrow().is_constant() {
                break;
            }
            let constant_arg = gate
                .borrow()
                .constant_args()
                .first()
                .map(|(_, constant)| Rc::clone(constant));
            match constant_arg {
                Some(constant) => gate
                    .borrow_mut()
                    .process_constant_arg(&NodePtr::Constant(constant), true),
                None => break,
            }
        }
        gate
    }

    /// Recomputes the `coherent` and `normal` flags from the graph state
    /// left after the eager local rewrites.
    fn update_graph_flags(&mut self) {
        self.coherent = true;
        self.normal = true;
        let Some(root) = self.root.clone() else { return };
        debug_assert!(!root.borrow().mark(), "Dirty gate marks");
        let mut coherent = true;
        let mut normal = true;
        Self::flag_sweep(&root, &mut coherent, &mut normal);
        Self::clear_gate_marks_in(&root);
        self.coherent = coherent;
        self.normal = normal;
    }

    fn flag_sweep(gate: &GatePtr, coherent: &mut bool, normal: &mut bool) {
        let mut g = gate.borrow_mut();
        if g.mark() {
            return;
        }
        g.set_mark(true);
        if g.is_constant() {
            return;
        }
        match g.operator() {
            Operator::And | Operator::Or => {}
            Operator::Not | Operator::Nand | Operator::Nor | Operator::Xor => {
                *coherent = false;
                *normal = false;
            }
            Operator::Vote | Operator::Null => *normal = false,
        }
        if g.args().iter().any(|r| r.is_negated()) {
            *coherent = false;
        }
        for (_, sub) in g.gate_args() {
            Self::flag_sweep(sub, coherent, normal);
        }
    }

    /// Clears the traversal marks of all gates reachable from the root.
    ///
    /// Every algorithm that sets marks must leave them false afterwards;
    /// this sweep clears along marked paths only, so it assumes the marks
    /// were assigned in a top-down traversal.
    pub fn clear_gate_marks(&self) {
        debug!("Clearing gate marks...");
        if let Some(root) = &self.root {
            Self::clear_gate_marks_in(root);
        }
    }

    /// Clears the traversal marks of the sub-graph rooted at the given gate.
    pub fn clear_gate_marks_in(gate: &GatePtr) {
        let mut g = gate.borrow_mut();
        if !g.mark() {
            return;
        }
        g.set_mark(false);
        for (_, sub) in g.gate_args() {
            Self::clear_gate_marks_in(sub);
        }
    }

    /// Clears the visit times of all nodes reachable from the root.
    pub fn clear_node_visits(&self) {
        debug!("Clearing node visit times...");
        if let Some(root) = &self.root {
            Self::clear_node_visits_in(root);
        }
    }

    /// Clears the visit times of the sub-graph rooted at the given gate.
    pub fn clear_node_visits_in(gate: &GatePtr) {
        debug_assert!(!gate.borrow().mark(), "Dirty gate marks");
        Self::visit_sweep(gate, &mut |node| node.clear_visits());
        Self::clear_gate_marks_in(gate);
    }

    /// Clears the optimization values of all nodes reachable from the root.
    pub fn clear_opti_values(&self) {
        debug!("Clearing node optimization values...");
        if let Some(root) = &self.root {
            Self::clear_opti_values_in(root);
        }
    }

    /// Clears the optimization values of the sub-graph rooted at the given gate.
    pub fn clear_opti_values_in(gate: &GatePtr) {
        debug_assert!(!gate.borrow().mark(), "Dirty gate marks");
        Self::visit_sweep(gate, &mut |node| node.set_opti_value(0));
        Self::clear_gate_marks_in(gate);
    }

    /// Clears the occurrence counts of all nodes reachable from the root.
    pub fn clear_node_counts(&self) {
        debug!("Clearing node counts...");
        if let Some(root) = &self.root {
            Self::clear_node_counts_in(root);
        }
    }

    /// Clears the occurrence counts of the sub-graph rooted at the given gate.
    pub fn clear_node_counts_in(gate: &GatePtr) {
        debug_assert!(!gate.borrow().mark(), "Dirty gate marks");
        Self::visit_sweep(gate, &mut |node| node.reset_count());
        Self::clear_gate_marks_in(gate);
    }

    /// Clears the node orders of all nodes reachable from the root.
    pub fn clear_node_orders(&self) {
        debug!("Clearing node order marks...");
        if let Some(root) = &self.root {
            Self::clear_node_orders_in(root);
        }
    }

    /// Clears the node orders of the sub-graph rooted at the given gate.
    pub fn clear_node_orders_in(gate: &GatePtr) {
        debug_assert!(!gate.borrow().mark(), "Dirty gate marks");
        Self::visit_sweep(gate, &mut |node| node.set_order(0));
        Self::clear_gate_marks_in(gate);
    }

    /// Clears the descendant indices of all gates reachable from the root.
    pub fn clear_descendant_marks(&self) {
        debug!("Clearing gate descendant marks...");
        if let Some(root) = &self.root {
            Self::clear_descendant_marks_in(root);
        }
    }

    /// Clears the descendant indices of the sub-graph rooted at the given gate.
    pub fn clear_descendant_marks_in(gate: &GatePtr) {
        debug_assert!(!gate.borrow().mark(), "Dirty gate marks");
        Self::gate_sweep(gate, &mut |g| g.set_descendant(0));
        Self::clear_gate_marks_in(gate);
    }

    /// Clears the ancestor indices of all gates reachable from the root.
    pub fn clear_ancestor_marks(&self) {
        debug!("Clearing gate ancestor marks...");
        if let Some(root) = &self.root {
            Self::clear_ancestor_marks_in(root);
        }
    }

    /// Clears the ancestor indices of the sub-graph rooted at the given gate.
    pub fn clear_ancestor_marks_in(gate: &GatePtr) {
        debug_assert!(!gate.borrow().mark(), "Dirty gate marks");
        Self::gate_sweep(gate, &mut |g| g.set_ancestor(0));
        Self::clear_gate_marks_in(gate);
    }

    /// Linear traversal applying an action to the base of every node,
    /// marking gates as it goes.
    fn visit_sweep(gate: &GatePtr, action: &mut dyn FnMut(&mut crate::node::NodeBase)) {
        let mut g = gate.borrow_mut();
        if g.mark() {
            return;
        }
        g.set_mark(true);
        action(g.base_mut());
        for (_, constant) in g.constant_args() {
            action(&mut constant.borrow_mut().base);
        }
        for (_, variable) in g.variable_args() {
            action(&mut variable.borrow_mut().base);
        }
        for (_, sub) in g.gate_args() {
            Self::visit_sweep(sub, action);
        }
    }

    /// Linear traversal applying an action to every gate.
    fn gate_sweep(gate: &GatePtr, action: &mut dyn FnMut(&mut Gate)) {
        let mut g = gate.borrow_mut();
        if g.mark() {
            return;
        }
        g.set_mark(true);
        action(&mut g);
        for (_, sub) in g.gate_args() {
            Self::gate_sweep(sub, action);
        }
    }

    /// Writes the structural properties of the graph into the debug log.
    pub fn log(&self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        let Some(root) = &self.root else {
            debug!("PDAG: root-less graph with {} variables", self.num_variables());
            return;
        };
        debug_assert!(!root.borrow().mark(), "Dirty gate marks");
        let mut gates = 0usize;
        let mut edges = 0usize;
        let mut variables = HashSet::new();
        Self::count_sweep(root, &mut gates, &mut edges, &mut variables);
        Self::clear_gate_marks_in(root);
        debug!(
            "PDAG: {} gates, {} reachable variables of {}, {} argument edges",
            gates,
            variables.len(),
            self.num_variables(),
            edges
        );
        debug!(
            "PDAG: coherent = {}, normal = {}, complement = {}",
            self.coherent, self.normal, self.complement
        );
    }

    fn count_sweep(gate: &GatePtr, gates: &mut usize, edges: &mut usize, variables: &mut HashSet<u32>) {
        let mut g = gate.borrow_mut();
        if g.mark() {
            return;
        }
        g.set_mark(true);
        *gates += 1;
        *edges += g.args().len();
        for (r, _) in g.variable_args() {
            variables.insert(r.index());
        }
        for (_, sub) in g.gate_args() {
            Self::count_sweep(sub, gates, edges, variables);
        }
    }
}

impl Default for Pdag {
    fn default() -> Self {
        Pdag::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::State;
    use crate::model::HouseEvent;
    use test_log::test;

    #[test]
    fn test_two_pass_index_blocks() {
        // top = (a | b) & (b | c): variables take 2..5, gates follow.
        let a = BasicEvent::new("a");
        let b = BasicEvent::new("b");
        let c = BasicEvent::new("c");
        let left = Formula::new(Operator::Or, vec![Arg::Basic(Rc::clone(&a)), Arg::Basic(Rc::clone(&b))]);
        let right = Formula::new(Operator::Or, vec![Arg::Basic(b), Arg::Basic(c)]);
        let top = Formula::new(Operator::And, vec![Arg::Formula(left), Arg::Formula(right)]);

        let graph = Pdag::from_model(&top);
        assert_eq!(graph.num_variables(), 3);
        assert_eq!(graph.constant().borrow().index(), 1);
        for index in 2..5 {
            assert!(graph.is_variable_index(index));
        }
        assert!(!graph.is_variable_index(5));

        let root = graph.root().unwrap().borrow();
        assert!(root.index() >= 5);
        for (r, _) in root.gate_args() {
            assert!(r.index() >= 5);
        }
        // The shared event b maps to one variable.
        assert_eq!(graph.basic_events().iter().filter(|e| e.name() == "b").count(), 1);
    }

    #[test]
    fn test_shared_formula_translates_once() {
        let a = BasicEvent::new("a");
        let shared = Formula::new(Operator::Or, vec![Arg::Basic(Rc::clone(&a)), Arg::Basic(BasicEvent::new("b"))]);
        let top = Formula::new(
            Operator::And,
            vec![Arg::Formula(Rc::clone(&shared)), Arg::Complement(shared), Arg::Basic(a)],
        );

        let graph = Pdag::from_model(&top);
        // +G and ~G of the same sub-formula collapse the AND.
        assert_eq!(graph.root().unwrap().borrow().state(), State::Null);
    }

    #[test]
    fn test_register_flag_after_translation() {
        let top = Formula::new(Operator::Null, vec![Arg::Basic(BasicEvent::new("a"))]);
        let graph = Pdag::from_model(&top);
        assert!(graph.register_null_gates());
        // The construction-time pass-through root is not enqueued.
        assert!(graph.drain_null_gates().is_empty());
    }

    #[test]
    fn test_house_event_folding() {
        let a = BasicEvent::new("a");
        let b = BasicEvent::new("b");
        let h = HouseEvent::new("h", true);
        let top = Formula::new(
            Operator::And,
            vec![Arg::Basic(a), Arg::Basic(b), Arg::House(h)],
        );

        let graph = Pdag::from_model(&top);
        let root = graph.root().unwrap().borrow();
        assert_eq!(root.state(), State::Normal);
        assert_eq!(root.operator(), Operator::And);
        assert_eq!(root.args().len(), 2);
        assert!(root.constant_args().is_empty());
        assert!(graph.constant().borrow().base().parents().is_empty());
    }

    #[test]
    fn test_false_house_event_nulls_and() {
        let top = Formula::new(
            Operator::And,
            vec![
                Arg::Basic(BasicEvent::new("a")),
                Arg::House(HouseEvent::new("h", false)),
            ],
        );
        let graph = Pdag::from_model(&top);
        assert_eq!(graph.root().unwrap().borrow().state(), State::Null);
    }

    #[test]
    fn test_graph_flags() {
        let a = BasicEvent::new("a");
        let b = BasicEvent::new("b");
        let coherent = Formula::new(
            Operator::And,
            vec![
                Arg::Basic(Rc::clone(&a)),
                Arg::Formula(Formula::new(Operator::Or, vec![Arg::Basic(Rc::clone(&b))])),
            ],
        );
        let graph = Pdag::from_model(&coherent);
        assert!(graph.coherent());
        assert!(!graph.complement());

        let negated = Formula::new(
            Operator::And,
            vec![
                Arg::Basic(Rc::clone(&a)),
                Arg::Complement(Formula::new(Operator::Or, vec![Arg::Basic(Rc::clone(&b))])),
            ],
        );
        let graph = Pdag::from_model(&negated);
        assert!(!graph.coherent());

        let vote = Formula::vote(
            2,
            vec![Arg::Basic(a), Arg::Basic(b), Arg::Basic(BasicEvent::new("c"))],
        );
        let graph = Pdag::from_model(&vote);
        assert!(graph.coherent());
        assert!(!graph.normal());
    }

    #[test]
    fn test_stale_worklist_entry() {
        let graph = Pdag::new();
        let pass = graph.new_gate(Operator::Null);
        let v = graph.new_variable();
        let index = v.borrow().index();
        pass.borrow_mut().add_arg(Ref::positive(index), &NodePtr::Variable(v));
        drop(pass);

        let entries = graph.drain_null_gates();
        assert_eq!(entries.len(), 1);
        // The referent died with its last owner; the drainer skips it.
        assert!(entries[0].upgrade().is_none());
    }

    #[test]
    fn test_sweeps_restore_marks() {
        let a = BasicEvent::new("a");
        let sub = Formula::new(Operator::Or, vec![Arg::Basic(Rc::clone(&a)), Arg::Basic(BasicEvent::new("b"))]);
        let top = Formula::new(Operator::And, vec![Arg::Basic(a), Arg::Formula(sub)]);
        let graph = Pdag::from_model(&top);

        let root = Rc::clone(graph.root().unwrap());
        root.borrow_mut().base_mut().visit(1);
        root.borrow_mut().base_mut().visit(2);
        graph.clear_node_visits();
        assert!(!root.borrow().base().visited());
        assert!(!root.borrow().mark());

        root.borrow_mut().base_mut().set_opti_value(7);
        graph.clear_opti_values();
        assert_eq!(root.borrow().base().opti_value(), 0);

        root.borrow_mut().base_mut().add_count(true);
        graph.clear_node_counts();
        assert_eq!(root.borrow().base().pos_count(), 0);

        root.borrow_mut().base_mut().set_order(3);
        graph.clear_node_orders();
        assert_eq!(root.borrow().base().order(), 0);

        root.borrow_mut().set_descendant(4);
        root.borrow_mut().set_ancestor(5);
        graph.clear_descendant_marks();
        graph.clear_ancestor_marks();
        assert_eq!(root.borrow().descendant(), 0);
        assert_eq!(root.borrow().ancestor(), 0);
    }

    #[test]
    fn test_log_leaves_marks_clear() {
        let top = Formula::new(
            Operator::And,
            vec![Arg::Basic(BasicEvent::new("a")), Arg::Basic(BasicEvent::new("b"))],
        );
        let graph = Pdag::from_model(&top);
        graph.log();
        assert!(!graph.root().unwrap().borrow().mark());
    }
}
