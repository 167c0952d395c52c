//! # pdag-rs: Propositional DAGs for fault-tree analysis
//!
//! **`pdag-rs`** implements the indexed, self-normalizing Boolean circuit that
//! fault-tree analysis engines use as their intermediate representation: the
//! **propositional directed acyclic graph (PDAG)**. A user-level fault tree
//! (named formulas over named events) translates into a graph of small signed
//! integers, and every later preprocessing and analysis pass works on those
//! indices instead of names and pointers.
//!
//! ## What makes the structure self-normalizing?
//!
//! Local Boolean-algebra simplifications run eagerly during every mutation:
//!
//! - a duplicate argument is absorbed or rewritten according to the gate logic,
//! - a complement pair `{x, ~x}` collapses the gate to a constant state or
//!   reduces a VOTE threshold,
//! - constant arguments propagate through the operator-specific collapse table,
//! - pass-through (single-argument NULL type) gates are queued on a worklist
//!   for the preprocessor to splice out.
//!
//! Downstream algorithms therefore never see a gate holding `{+i, -i}`, a
//! live gate in a constant state, or a stale vote threshold.
//!
//! ## Key invariants
//!
//! - Node indices are unique within a graph: the constant TRUE is always 1,
//!   variables occupy the contiguous block `[2, 2 + V)`, and every gate index
//!   is larger. `index < 2 + V` is the O(1) leaf test.
//! - The parent relation mirrors the argument relation exactly: every
//!   argument edge has one parent back-reference and vice versa.
//! - Parent back-references are weak; only argument edges keep nodes alive.
//!
//! ## Basic Usage
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use pdag_rs::gate::Operator;
//! use pdag_rs::model::{Arg, BasicEvent, Formula};
//! use pdag_rs::pdag::Pdag;
//!
//! // top = (pump-1 | valve-1) & pump-2
//! let pump1 = BasicEvent::new("pump-1");
//! let valve1 = BasicEvent::new("valve-1");
//! let train = Formula::new(Operator::Or, vec![Arg::Basic(pump1), Arg::Basic(valve1)]);
//! let top = Formula::new(
//!     Operator::And,
//!     vec![Arg::Formula(train), Arg::Basic(BasicEvent::new("pump-2"))],
//! );
//!
//! let graph = Pdag::from_model(&top);
//! assert_eq!(graph.num_variables(), 3);
//! assert!(graph.coherent());
//!
//! // Variable indices 2, 3, 4 map to slots 0, 1, 2 of an assignment.
//! assert!(graph.evaluate(&[true, false, true]));
//! assert!(!graph.evaluate(&[true, false, false]));
//! ```
//!
//! ## Core Components
//!
//! - **[`pdag`]**: The graph manager: index allocation, translation from a
//!   model, worklists, and graph-wide sweeps.
//! - **[`gate`]**: The gate layer with the eager local rewrites.
//! - **[`model`]**: The user-level fault-tree model the translator consumes.
//! - **[`aralia`]**: Aralia-format debug dumps.

pub mod aralia;
pub mod eval;
pub mod gate;
pub mod model;
pub mod node;
pub mod pdag;
pub mod reference;
