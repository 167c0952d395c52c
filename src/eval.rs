//! Assignment evaluation of a PDAG.
//!
//! Evaluation is the semantic ground truth for the local rewrites: a rewrite
//! is correct exactly when it leaves the evaluated function unchanged. Tests
//! lean on this module to compare graphs against reference truth tables.

use crate::gate::{Operator, State};
use crate::node::{GatePtr, NodePtr};
use crate::pdag::Pdag;

impl Pdag {
    /// Evaluates the graph under the given variable assignment.
    ///
    /// Slot `i` of the assignment corresponds to the variable with index
    /// `i + 2`. The graph `complement` flag folds into the result.
    ///
    /// # Panics
    ///
    /// Panics if the graph is root-less.
    pub fn evaluate(&self, assignment: &[bool]) -> bool {
        let root = self.root().expect("Cannot evaluate a root-less graph");
        let value = evaluate_gate(root, assignment);
        if self.complement() {
            !value
        } else {
            value
        }
    }
}

fn evaluate_gate(gate: &GatePtr, assignment: &[bool]) -> bool {
    let g = gate.borrow();
    match g.state() {
        State::Null => return false,
        State::Unity => return true,
        State::Normal => {}
    }
    let mut values = Vec::with_capacity(g.args().len());
    for &r in g.args() {
        let value = match g.get_arg(r) {
            NodePtr::Constant(_) => true,
            NodePtr::Variable(_) => {
                let slot = (r.index() - Pdag::VARIABLE_START_INDEX) as usize;
                debug_assert!(slot < assignment.len(), "Assignment is too short");
                assignment[slot]
            }
            NodePtr::Gate(sub) => evaluate_gate(&sub, assignment),
        };
        values.push(value ^ r.is_negated());
    }
    match g.operator() {
        Operator::And => values.iter().all(|&v| v),
        Operator::Or => values.iter().any(|&v| v),
        Operator::Vote => {
            let threshold = g.vote_number().expect("VOTE gates need a threshold") as usize;
            values.iter().filter(|&&v| v).count() >= threshold
        }
        Operator::Xor => {
            debug_assert_eq!(values.len(), 2, "XOR gates carry exactly two arguments");
            values[0] ^ values[1]
        }
        Operator::Not => !values[0],
        Operator::Null => values[0],
        Operator::Nand => !values.iter().all(|&v| v),
        Operator::Nor => !values.iter().any(|&v| v),
    }
}
