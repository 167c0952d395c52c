//! The gate layer of a PDAG.
//!
//! A gate carries a Boolean [`Operator`], an optional vote threshold, a
//! [`State`], and three typed argument containers keyed by signed [`Ref`].
//! Every argument mutation is routed through the gate so that the parent
//! back-reference on the child stays in sync and the local Boolean-algebra
//! simplifications fire eagerly:
//!
//! - duplicate arguments are absorbed or rewritten per operator,
//! - complement pairs collapse the gate to a constant state or reduce a VOTE,
//! - constant arguments are folded through [`Gate::process_constant_arg`].
//!
//! Callers must treat every mutating operation as potentially state-changing:
//! the gate may transition to the Null/Unity state or change its operator as
//! a side effect. These outcomes are not errors; they are inspected through
//! [`Gate::state`] and [`Gate::operator`] afterwards.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use log::debug;

use crate::node::{ConstantPtr, GatePtr, GateWeak, Node, NodeBase, NodePtr, VariablePtr};
use crate::pdag::GraphCore;
use crate::reference::Ref;

/// Boolean operators of gates.
///
/// A gate can start as any of these; after preprocessing and normalization
/// only AND and OR remain. Analysis algorithms may assume these are the only
/// possible operators.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    And,
    Or,
    /// Combination, K/N, or Vote gate.
    Vote,
    /// Exclusive OR with exactly two arguments.
    Xor,
    Not,
    Nand,
    Nor,
    /// Pass-through gate with a single argument.
    Null,
}

/// State of a gate as a Boolean set.
///
/// A gate falls out of the `Normal` state when its arguments collapse it into
/// a constant: `Null` guarantees no failure, `Unity` guarantees failure.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum State {
    Normal,
    Null,
    Unity,
}

/// An indexed gate of a PDAG.
pub struct Gate {
    base: NodeBase,
    operator: Operator,
    state: State,
    vote_number: Option<u32>,
    mark: bool,
    module: bool,
    coherent: bool,
    descendant: i32,
    ancestor: i32,
    min_time: i32,
    max_time: i32,
    args: BTreeSet<Ref>,
    gate_args: Vec<(Ref, GatePtr)>,
    variable_args: Vec<(Ref, VariablePtr)>,
    constant_args: Vec<(Ref, ConstantPtr)>,
    self_weak: GateWeak,
}

impl Gate {
    pub(crate) fn new(operator: Operator, core: &Rc<GraphCore>) -> GatePtr {
        let gate = Rc::new_cyclic(|weak: &GateWeak| {
            RefCell::new(Gate {
                base: NodeBase::new(Rc::clone(core)),
                operator,
                state: State::Normal,
                vote_number: None,
                mark: false,
                module: false,
                coherent: false,
                descendant: 0,
                ancestor: 0,
                min_time: 0,
                max_time: 0,
                args: BTreeSet::new(),
                gate_args: Vec::new(),
                variable_args: Vec::new(),
                constant_args: Vec::new(),
                self_weak: weak.clone(),
            })
        });
        if operator == Operator::Null {
            gate.borrow().register_null_gate();
        }
        gate
    }

    pub(crate) fn self_weak(&self) -> GateWeak {
        self.self_weak.clone()
    }

    /// The operator of this gate.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Changes the logic of the gate.
    ///
    /// A gate retyped to NULL registers itself with the graph's pass-through
    /// worklist; any retyping away from VOTE drops the vote threshold.
    ///
    /// # Preconditions
    ///
    /// The new operator differs from the current one and is compatible with
    /// the existing arguments.
    pub fn set_operator(&mut self, operator: Operator) {
        debug_assert_ne!(self.operator, operator, "Retyping a gate with its own operator");
        debug!("G{}: {:?} becomes {:?}", self.index(), self.operator, operator);
        self.operator = operator;
        if operator != Operator::Vote {
            self.vote_number = None;
        }
        if operator == Operator::Null {
            self.register_null_gate();
        }
    }

    /// The vote threshold of a VOTE gate.
    pub fn vote_number(&self) -> Option<u32> {
        self.vote_number
    }

    /// Sets the vote threshold for a K/N gate.
    ///
    /// # Preconditions
    ///
    /// The threshold is appropriate for the gate logic and arguments.
    pub fn set_vote_number(&mut self, number: u32) {
        debug_assert_eq!(self.operator, Operator::Vote, "Only VOTE gates take a threshold");
        self.vote_number = Some(number);
    }

    /// The state of this gate.
    pub fn state(&self) -> State {
        self.state
    }

    /// True if this gate has collapsed into a constant.
    pub fn is_constant(&self) -> bool {
        self.state != State::Normal
    }

    /// The ordered set of signed argument indices of this gate.
    pub fn args(&self) -> &BTreeSet<Ref> {
        &self.args
    }

    /// The gate-type arguments, in insertion order.
    pub fn gate_args(&self) -> &[(Ref, GatePtr)] {
        &self.gate_args
    }

    /// The variable-type arguments, in insertion order.
    pub fn variable_args(&self) -> &[(Ref, VariablePtr)] {
        &self.variable_args
    }

    /// The constant-type arguments, in insertion order.
    pub fn constant_args(&self) -> &[(Ref, ConstantPtr)] {
        &self.constant_args
    }

    /// The registered parents of this gate.
    pub fn parents(&self) -> &[(u32, GateWeak)] {
        self.base.parents()
    }

    /// The traversal mark of this gate.
    pub fn mark(&self) -> bool {
        self.mark
    }

    pub fn set_mark(&mut self, flag: bool) {
        self.mark = flag;
    }

    /// True if this gate is an independent module.
    pub fn module(&self) -> bool {
        self.module
    }

    /// Sets the module flag.
    ///
    /// # Preconditions
    ///
    /// The gate currently carries the opposite flag.
    pub fn set_module(&mut self, flag: bool) {
        debug_assert_ne!(self.module, flag, "Redundant module flag assignment");
        self.module = flag;
    }

    /// True if the sub-graph rooted by this gate is coherent.
    pub fn coherent(&self) -> bool {
        self.coherent
    }

    pub fn set_coherent(&mut self, flag: bool) {
        self.coherent = flag;
    }

    /// Pre-assigned index of one of this gate's descendants.
    pub fn descendant(&self) -> i32 {
        self.descendant
    }

    pub fn set_descendant(&mut self, index: i32) {
        self.descendant = index;
    }

    /// Pre-assigned index of one of this gate's ancestors.
    pub fn ancestor(&self) -> i32 {
        self.ancestor
    }

    pub fn set_ancestor(&mut self, index: i32) {
        self.ancestor = index;
    }

    pub fn set_min_time(&mut self, time: i32) {
        debug_assert!(time > 0, "Visit times must be positive");
        self.min_time = time;
    }

    pub fn set_max_time(&mut self, time: i32) {
        debug_assert!(time > 0, "Visit times must be positive");
        self.max_time = time;
    }

    /// The sign under which the given node appears among the arguments.
    ///
    /// Returns `1` for a direct argument and `-1` for a complement.
    ///
    /// # Preconditions
    ///
    /// The node is an argument of this gate.
    pub fn get_arg_sign(&self, arg: &NodePtr) -> i32 {
        debug_assert!(
            self.args.contains(&Ref::positive(arg.index())) || self.args.contains(&Ref::negative(arg.index())),
            "The node is not an argument of this gate"
        );
        if self.args.contains(&Ref::positive(arg.index())) {
            1
        } else {
            -1
        }
    }

    /// The signed reference under which the node with the given index appears.
    pub fn arg_literal(&self, index: u32) -> Ref {
        let pos = Ref::positive(index);
        if self.args.contains(&pos) {
            pos
        } else {
            debug_assert!(self.args.contains(&-pos), "The node is not an argument of this gate");
            -pos
        }
    }

    /// Retrieves an argument node by its signed index.
    ///
    /// # Panics
    ///
    /// Panics if no such argument exists.
    pub fn get_arg(&self, index: Ref) -> NodePtr {
        debug_assert!(self.args.contains(&index), "No argument with the given index");
        if let Some((_, g)) = self.gate_args.iter().find(|(r, _)| *r == index) {
            return NodePtr::Gate(Rc::clone(g));
        }
        if let Some((_, v)) = self.variable_args.iter().find(|(r, _)| *r == index) {
            return NodePtr::Variable(Rc::clone(v));
        }
        let (_, c) = self
            .constant_args
            .iter()
            .find(|(r, _)| *r == index)
            .expect("No argument with the given index");
        NodePtr::Constant(Rc::clone(c))
    }

    /// Adds an argument node to this gate.
    ///
    /// The existing arguments are checked for duplicates and complements
    /// first; depending on the operator, the gate may absorb the addition,
    /// collapse into a constant state, or rewrite itself (VOTE gates may
    /// introduce fresh helper gates). No error is reported for these
    /// transitions; inspect [`Gate::state`] and [`Gate::operator`] afterwards.
    ///
    /// # Preconditions
    ///
    /// The gate is in the `Normal` state; NOT/NULL gates are empty; an XOR
    /// gate has fewer than two arguments; a VOTE gate has its threshold set;
    /// the argument belongs to the same graph and is not the gate itself.
    pub fn add_arg(&mut self, index: Ref, arg: &NodePtr) {
        debug_assert_eq!(index.index(), arg.index(), "Argument index mismatch");
        debug_assert_eq!(self.state, State::Normal, "Only normal gates accept arguments");
        debug_assert!(
            !((self.operator == Operator::Not || self.operator == Operator::Null) && !self.args.is_empty()),
            "Single-argument gates cannot take more arguments"
        );
        debug_assert!(
            !(self.operator == Operator::Xor && self.args.len() > 1),
            "XOR gates take exactly two arguments"
        );
        debug_assert!(
            self.operator != Operator::Vote || self.vote_number.is_some(),
            "VOTE gates need a threshold"
        );
        debug_assert!(
            Rc::ptr_eq(self.base.core(), &arg.core()),
            "The argument belongs to a different graph"
        );
        debug_assert_ne!(arg.index(), self.index(), "A gate cannot be its own argument");

        if self.args.contains(&index) {
            return self.process_duplicate_arg(index);
        }
        if self.args.contains(&-index) {
            return self.process_complement_arg(index);
        }

        self.args.insert(index);
        match arg {
            NodePtr::Gate(g) => self.gate_args.push((index, Rc::clone(g))),
            NodePtr::Variable(v) => self.variable_args.push((index, Rc::clone(v))),
            NodePtr::Constant(c) => self.constant_args.push((index, Rc::clone(c))),
        }
        arg.add_parent(self);
    }

    /// Removes an argument from this gate.
    ///
    /// The gate may be left violating its operator's arity rules;
    /// the caller is responsible for fixing that.
    ///
    /// # Preconditions
    ///
    /// The argument with the given signed index exists.
    pub fn erase_arg(&mut self, index: Ref) {
        debug_assert!(self.args.contains(&index), "No argument with the given index");
        self.args.remove(&index);
        let parent_index = self.index();
        if let Some(pos) = self.gate_args.iter().position(|(r, _)| *r == index) {
            let (_, child) = self.gate_args.swap_remove(pos);
            child.borrow_mut().base_mut().erase_parent(parent_index);
        } else if let Some(pos) = self.variable_args.iter().position(|(r, _)| *r == index) {
            let (_, child) = self.variable_args.swap_remove(pos);
            child.borrow_mut().base.erase_parent(parent_index);
        } else if let Some(pos) = self.constant_args.iter().position(|(r, _)| *r == index) {
            let (_, child) = self.constant_args.swap_remove(pos);
            child.borrow_mut().base.erase_parent(parent_index);
        }
    }

    /// Removes all arguments of this gate.
    pub fn erase_all_args(&mut self) {
        let parent_index = self.index();
        self.args.clear();
        for (_, child) in self.gate_args.drain(..) {
            child.borrow_mut().base_mut().erase_parent(parent_index);
        }
        for (_, child) in self.variable_args.drain(..) {
            child.borrow_mut().base.erase_parent(parent_index);
        }
        for (_, child) in self.constant_args.drain(..) {
            child.borrow_mut().base.erase_parent(parent_index);
        }
    }

    /// Forces the gate into the Unity (`true`) or Null (`false`) state
    /// and clears all its arguments. One-shot: a constant gate cannot
    /// accept further mutations.
    pub fn make_constant(&mut self, state: bool) {
        debug_assert_eq!(self.state, State::Normal, "Gates turn constant only once");
        self.state = if state { State::Unity } else { State::Null };
        debug!("G{} becomes constant {}", self.index(), state);
        self.erase_all_args();
        let core = Rc::clone(self.base.core());
        if core.register_null_gates() {
            core.enqueue_const_gate(self.self_weak.clone());
        }
    }

    /// Handles a constant TRUE/FALSE argument of this gate.
    ///
    /// `state` is the Boolean value of the argument node itself; the sign of
    /// the argument index folds into the effective value, so a complemented
    /// TRUE counts as a false argument. The gate may change state, operator,
    /// and threshold as a result.
    pub fn process_constant_arg(&mut self, arg: &NodePtr, state: bool) {
        let pos = Ref::positive(arg.index());
        let (index, state) = if self.args.contains(&pos) { (pos, state) } else { (-pos, !state) };
        debug_assert!(self.args.contains(&index), "The constant is not an argument of this gate");
        debug!("G{}: folding constant argument {} valued {}", self.index(), index, state);
        if state {
            self.process_true_arg(index);
        } else {
            self.process_false_arg(index);
        }
    }

    /// Flips the sign of every argument index (De Morgan propagation).
    ///
    /// Parent back-references are unaffected; they are keyed by magnitude.
    pub fn invert_args(&mut self) {
        self.args = self.args.iter().map(|r| -*r).collect();
        for (r, _) in &mut self.gate_args {
            *r = -*r;
        }
        for (r, _) in &mut self.variable_args {
            *r = -*r;
        }
        for (r, _) in &mut self.constant_args {
            *r = -*r;
        }
    }

    /// Replaces the argument at the given signed index with its complement.
    ///
    /// Routed through [`Gate::add_arg`] so that the local rewrite rules fire.
    pub fn invert_arg(&mut self, existing: Ref) {
        debug_assert!(self.args.contains(&existing), "No argument with the given index");
        let arg = self.get_arg(existing);
        self.erase_arg(existing);
        self.add_arg(-existing, &arg);
    }

    /// Absorbs the arguments of a same-logic, positively-referenced argument
    /// gate into this gate, then erases the argument gate.
    ///
    /// Each absorbed argument goes through [`Gate::add_arg`], so further
    /// rewrites may fire; if this gate collapses into a constant state
    /// mid-way, the coalescing stops there.
    ///
    /// # Preconditions
    ///
    /// `arg_gate` appears with a positive sign, is in the `Normal` state,
    /// and its logic coalesces into this gate's logic.
    pub fn coalesce(&mut self, arg_gate: &GatePtr) {
        let arg_index = arg_gate.borrow().index();
        debug_assert!(
            self.args.contains(&Ref::positive(arg_index)),
            "Only positively-referenced gates coalesce"
        );
        debug_assert_eq!(arg_gate.borrow().state(), State::Normal, "Cannot coalesce a constant gate");
        debug_assert!(!arg_gate.borrow().args().is_empty(), "Corrupted argument gate");
        debug!("coalescing G{} into G{}", arg_index, self.index());
        let absorbed: Vec<(Ref, NodePtr)> = {
            let sub = arg_gate.borrow();
            sub.args().iter().map(|&r| (r, sub.get_arg(r))).collect()
        };
        for (r, child) in absorbed {
            self.add_arg(r, &child);
            if self.state != State::Normal {
                return;
            }
        }
        self.erase_arg(Ref::positive(arg_index));
    }

    /// Replaces a NULL-type argument gate with that gate's single argument,
    /// combining the signs of the two edges.
    pub fn join_null(&mut self, index: Ref) {
        let arg = self.get_arg(index);
        let null_gate = arg.as_gate().expect("Only gates can be pass-through").clone();
        let (sub, sub_node) = {
            let gate = null_gate.borrow();
            debug_assert_eq!(gate.operator(), Operator::Null, "Only NULL type gates can be joined");
            debug_assert_eq!(gate.args().len(), 1, "Corrupted pass-through gate");
            let sub = *gate.args().iter().next().expect("Corrupted pass-through gate");
            (sub, gate.get_arg(sub))
        };
        debug!("G{}: joining pass-through G{}", self.index(), index.index());
        self.erase_arg(index);
        let combined = if index.is_negated() { -sub } else { sub };
        self.add_arg(combined, &sub_node);
    }

    /// Moves the argument at the given signed index to another gate.
    pub fn transfer_arg(&mut self, index: Ref, recipient: &GatePtr) {
        debug_assert_ne!(self.index(), recipient.borrow().index(), "Self-transfer of an argument");
        let arg = self.get_arg(index);
        self.erase_arg(index);
        recipient.borrow_mut().add_arg(index, &arg);
    }

    /// Copies the argument at the given signed index to another gate.
    pub fn share_arg(&self, index: Ref, recipient: &GatePtr) {
        debug_assert_ne!(self.index(), recipient.borrow().index(), "Self-share of an argument");
        let arg = self.get_arg(index);
        recipient.borrow_mut().add_arg(index, &arg);
    }

    /// Clones the semantics of this gate into a fresh-index gate:
    /// operator, threshold, and argument edges. Data fields like parents,
    /// marks, and visit times are not cloned.
    pub fn clone_gate(&self) -> GatePtr {
        debug!("cloning G{}", self.index());
        let clone = Gate::new(self.operator, self.base.core());
        {
            let mut gate = clone.borrow_mut();
            gate.vote_number = self.vote_number;
            for &r in &self.args {
                gate.add_arg(r, &self.get_arg(r));
            }
        }
        clone
    }

    fn register_null_gate(&self) {
        debug_assert_eq!(self.operator, Operator::Null, "Only pass-through gates are registered");
        let core = self.base.core();
        if !core.register_null_gates() {
            return;
        }
        debug!("registering pass-through gate G{}", self.index());
        if self.constant_args.is_empty() {
            core.enqueue_null_gate(self.self_weak.clone());
        } else {
            core.enqueue_const_gate(self.self_weak.clone());
        }
    }

    fn process_duplicate_arg(&mut self, index: Ref) {
        debug_assert!(
            self.operator != Operator::Not && self.operator != Operator::Null,
            "Single-argument gates cannot have duplicates"
        );
        debug!("G{}: duplicate argument {}", self.index(), index);
        match self.operator {
            // x ^ x = 0
            Operator::Xor => self.make_constant(false),
            Operator::Vote => self.process_vote_duplicate_arg(index),
            _ => {} // Absorbed.
        }
    }

    /// The K/N duplicate rewrite: a second copy of literal `l` in a k-of-n
    /// VOTE over S replaces the gate with OR{l, H}, where H is a fresh
    /// helper gate VOTE(k-1) over S without `l`.
    fn process_vote_duplicate_arg(&mut self, index: Ref) {
        let k = self.vote_number.expect("VOTE gates need a threshold");
        if k == 1 {
            return; // Plain OR semantics; the duplicate is absorbed.
        }
        let n = self.args.len() as u32;
        if n == 1 {
            // @(2, [x, x]) = x
            if k == 2 {
                self.set_operator(Operator::Null);
            } else {
                self.make_constant(false);
            }
            return;
        }
        if k == n {
            // @(n, [x, x, rest]) = x & rest
            self.set_operator(Operator::And);
            return;
        }
        let survivors: Vec<Ref> = self.args.iter().copied().filter(|&r| r != index).collect();
        let helper_operator = if k - 1 == 1 {
            Operator::Or
        } else if (k - 1) as usize == survivors.len() {
            Operator::And
        } else {
            Operator::Vote
        };
        let helper = Gate::new(helper_operator, self.base.core());
        debug!(
            "G{}: duplicate {} in {}-of-{} VOTE; helper G{}",
            self.index(),
            index,
            k,
            n,
            helper.borrow().index()
        );
        {
            let mut gate = helper.borrow_mut();
            if helper_operator == Operator::Vote {
                gate.vote_number = Some(k - 1);
            }
            for &r in &survivors {
                gate.add_arg(r, &self.get_arg(r));
            }
        }
        for r in survivors {
            self.erase_arg(r);
        }
        self.set_operator(Operator::Or);
        let helper_index = helper.borrow().index();
        self.add_arg(Ref::positive(helper_index), &NodePtr::Gate(helper));
    }

    fn process_complement_arg(&mut self, index: Ref) {
        debug_assert!(self.args.contains(&-index), "The complement is not an argument");
        debug!("G{}: complement argument {}", self.index(), index);
        match self.operator {
            // x & ~x = 0
            Operator::And | Operator::Nor => self.make_constant(false),
            // x | ~x = 1, and x ^ ~x = 1
            Operator::Or | Operator::Nand | Operator::Xor => self.make_constant(true),
            Operator::Vote => {
                // Exactly one of x, ~x is true: @(k, [x, ~x, S]) = @(k-1, [S])
                let k = self.vote_number.expect("VOTE gates need a threshold");
                self.erase_arg(-index);
                self.reduce_vote(k - 1);
            }
            Operator::Not | Operator::Null => {
                unreachable!("Single-argument gates cannot see complements")
            }
        }
    }

    fn process_true_arg(&mut self, index: Ref) {
        match self.operator {
            Operator::Or => self.make_constant(true),
            Operator::Nor | Operator::Not => self.make_constant(false),
            Operator::And | Operator::Nand => self.remove_constant_arg(index),
            Operator::Null => self.make_constant(true),
            Operator::Xor => self.process_xor_constant_arg(index, true),
            Operator::Vote => {
                let k = self.vote_number.expect("VOTE gates need a threshold");
                self.erase_arg(index);
                self.reduce_vote(k - 1);
            }
        }
    }

    fn process_false_arg(&mut self, index: Ref) {
        match self.operator {
            Operator::And => self.make_constant(false),
            Operator::Nand | Operator::Not => self.make_constant(true),
            Operator::Or | Operator::Nor => self.remove_constant_arg(index),
            Operator::Null => self.make_constant(false),
            Operator::Xor => self.process_xor_constant_arg(index, false),
            Operator::Vote => {
                let k = self.vote_number.expect("VOTE gates need a threshold");
                self.erase_arg(index);
                self.reduce_vote(k);
            }
        }
    }

    /// Renormalizes a VOTE gate after an argument removal.
    ///
    /// The threshold drives the outcome: 0 is always satisfied, a threshold
    /// above the argument count never is, threshold 1 is OR, a threshold
    /// equal to the argument count is AND, and a single remaining argument
    /// makes the gate a pass-through.
    fn reduce_vote(&mut self, threshold: u32) {
        debug_assert_eq!(self.operator, Operator::Vote, "Only VOTE gates renormalize");
        let n = self.args.len() as u32;
        if threshold == 0 {
            return self.make_constant(true);
        }
        if threshold > n {
            return self.make_constant(false);
        }
        if n == 1 {
            self.set_operator(Operator::Null);
        } else if threshold == 1 {
            self.set_operator(Operator::Or);
        } else if threshold == n {
            self.set_operator(Operator::And);
        } else {
            self.vote_number = Some(threshold);
        }
    }

    fn remove_constant_arg(&mut self, index: Ref) {
        self.erase_arg(index);
        if self.args.is_empty() {
            match self.operator {
                Operator::And | Operator::Nor => self.make_constant(true),
                Operator::Or | Operator::Nand => self.make_constant(false),
                _ => unreachable!("Constant removal outside simple gates"),
            }
        } else if self.args.len() == 1 {
            match self.operator {
                Operator::And | Operator::Or => self.set_operator(Operator::Null),
                Operator::Nand | Operator::Nor => self.set_operator(Operator::Not),
                _ => unreachable!("Constant removal outside simple gates"),
            }
        }
    }

    /// XOR against a constant: the gate becomes a pass-through of the
    /// surviving literal or its negation. The survivor is normalized to a
    /// positive edge, so the outcome is NULL for a positive result and NOT
    /// for a negated one.
    fn process_xor_constant_arg(&mut self, index: Ref, state: bool) {
        debug_assert_eq!(self.operator, Operator::Xor, "XOR constant folding on a non-XOR gate");
        self.erase_arg(index);
        debug_assert_eq!(self.args.len(), 1, "XOR gates carry exactly two arguments");
        let survivor = *self.args.iter().next().expect("XOR gates carry exactly two arguments");
        let negated = state ^ survivor.is_negated();
        if survivor.is_negated() {
            self.invert_arg(survivor);
        }
        self.set_operator(if negated { Operator::Not } else { Operator::Null });
    }
}

impl Node for Gate {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn min_time(&self) -> i32 {
        self.min_time
    }

    fn max_time(&self) -> i32 {
        self.max_time
    }
}

impl Drop for Gate {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        debug_assert!(
            self.base.parents().is_empty(),
            "Dangling parent references at gate destruction"
        );
        self.erase_all_args();
    }
}
