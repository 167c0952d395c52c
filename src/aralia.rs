//! Aralia-format textual dump of a PDAG.
//!
//! One Boolean equation per reachable gate, children before parents:
//!
//! ```text
//! G6 := or(B2, ~B3)
//! G7 := atleast 2(B2, B4, G6)
//! ```
//!
//! Variables print as `B<index>`, gates as `G<index>`, the graph constant as
//! `1`, and a complemented argument carries a `~` prefix. A pass-through gate
//! prints its single argument bare; a gate collapsed into a constant state
//! prints `1` (Unity) or `~1` (Null). This is a debugging aid, not a
//! persistence format.

use std::collections::HashSet;
use std::fmt;

use crate::gate::{Gate, Operator, State};
use crate::node::{GatePtr, Node, NodePtr};
use crate::pdag::Pdag;
use crate::reference::Ref;

impl fmt::Display for NodePtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodePtr::Constant(_) => write!(f, "1"),
            NodePtr::Variable(v) => write!(f, "B{}", v.borrow().index()),
            NodePtr::Gate(g) => write!(f, "G{}", g.borrow().index()),
        }
    }
}

fn write_literal(gate: &Gate, index: Ref, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if index.is_negated() {
        write!(f, "~")?;
    }
    write!(f, "{}", gate.get_arg(index))
}

fn write_equation(gate: &GatePtr, f: &mut fmt::Formatter<'_>, visited: &mut HashSet<u32>) -> fmt::Result {
    let g = gate.borrow();
    if !visited.insert(g.index()) {
        return Ok(());
    }
    for (_, sub) in g.gate_args() {
        write_equation(sub, f, visited)?;
    }
    write!(f, "G{} := ", g.index())?;
    match g.state() {
        State::Unity => return writeln!(f, "1"),
        State::Null => return writeln!(f, "~1"),
        State::Normal => {}
    }
    if g.operator() == Operator::Null {
        let index = *g.args().iter().next().expect("Corrupted pass-through gate");
        write_literal(&g, index, f)?;
        return writeln!(f);
    }
    match g.operator() {
        Operator::And => write!(f, "and(")?,
        Operator::Or => write!(f, "or(")?,
        Operator::Vote => write!(f, "atleast {}(", g.vote_number().expect("VOTE gates need a threshold"))?,
        Operator::Xor => write!(f, "xor(")?,
        Operator::Not => write!(f, "not(")?,
        Operator::Nand => write!(f, "nand(")?,
        Operator::Nor => write!(f, "nor(")?,
        Operator::Null => unreachable!(),
    }
    for (i, &index) in g.args().iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_literal(&g, index, f)?;
    }
    writeln!(f, ")")
}

impl fmt::Display for Pdag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root() else {
            return Ok(());
        };
        let mut visited = HashSet::new();
        write_equation(root, f, &mut visited)
    }
}

impl Pdag {
    /// Prints the graph to standard error in the Aralia format.
    pub fn print(&self) {
        eprint!("{}", self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Arg, BasicEvent, Formula};
    use std::rc::Rc;

    #[test]
    fn test_dump_two_gates() {
        let a = BasicEvent::new("a");
        let b = BasicEvent::new("b");
        let sub = Formula::new(Operator::Or, vec![Arg::Basic(Rc::clone(&a)), Arg::Basic(b)]);
        let top = Formula::new(Operator::And, vec![Arg::Basic(a), Arg::Complement(sub)]);
        let graph = Pdag::from_model(&top);

        let dump = graph.to_string();
        // Variables a -> B2, b -> B3; the root gate gets index 4 before
        // its sub-formula gate, and the dump lists children first.
        assert_eq!(dump, "G5 := or(B2, B3)\nG4 := and(B2, ~G5)\n");
    }

    #[test]
    fn test_dump_vote() {
        let args: Vec<Arg> = (0..3).map(|i| Arg::Basic(BasicEvent::new(format!("e{}", i)))).collect();
        let top = Formula::vote(2, args);
        let graph = Pdag::from_model(&top);
        assert_eq!(graph.to_string(), "G5 := atleast 2(B2, B3, B4)\n");
    }

    #[test]
    fn test_dump_pass_through_and_constant_state() {
        let a = BasicEvent::new("a");
        let top = Formula::new(
            Operator::And,
            vec![Arg::Basic(Rc::clone(&a)), Arg::Complement(Formula::new(Operator::Null, vec![Arg::Basic(a)]))],
        );
        let graph = Pdag::from_model(&top);
        let dump = graph.to_string();
        assert!(dump.contains(":= B2\n"), "pass-through equation in: {}", dump);

        use crate::model::HouseEvent;
        let top = Formula::new(
            Operator::Or,
            vec![Arg::Basic(BasicEvent::new("a")), Arg::House(HouseEvent::new("h", true))],
        );
        let graph = Pdag::from_model(&top);
        assert_eq!(graph.to_string(), "G3 := 1\n");
    }

    #[test]
    fn test_display_node_ptr() {
        let graph = Pdag::new();
        let v = graph.new_variable();
        assert_eq!(NodePtr::Variable(v).to_string(), "B2");
        assert_eq!(NodePtr::Constant(graph.constant().clone()).to_string(), "1");
    }
}
