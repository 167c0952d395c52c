//! The user-level fault-tree model consumed by the graph translator.
//!
//! A model is a tree of [`Formula`] nodes over named events. Basic events
//! have stable identity (the shared pointer), so an event appearing in
//! several formulas maps to a single graph variable. House events are
//! constant-valued and never receive variable indices; the translator folds
//! them against the graph constant.

use std::rc::Rc;

use crate::gate::Operator;

/// A basic event of a fault tree: an equipment failure, a human error,
/// or any other primary failure mode.
pub struct BasicEvent {
    name: String,
}

impl BasicEvent {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(BasicEvent { name: name.into() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A house event: a user-level event with a constant Boolean state.
pub struct HouseEvent {
    name: String,
    state: bool,
}

impl HouseEvent {
    pub fn new(name: impl Into<String>, state: bool) -> Rc<Self> {
        Rc::new(HouseEvent {
            name: name.into(),
            state,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The constant state of this event.
    pub fn state(&self) -> bool {
        self.state
    }
}

/// An argument of a formula.
#[derive(Clone)]
pub enum Arg {
    Basic(Rc<BasicEvent>),
    House(Rc<HouseEvent>),
    Formula(Rc<Formula>),
    /// A complemented sub-formula.
    Complement(Rc<Formula>),
}

/// A Boolean formula over events and sub-formulas.
///
/// The operator set is shared with the graph layer; a VOTE formula carries
/// its threshold. Formulas are shared by pointer: the same `Rc<Formula>`
/// appearing as several arguments translates into one shared gate.
pub struct Formula {
    operator: Operator,
    vote_number: Option<u32>,
    args: Vec<Arg>,
}

impl Formula {
    /// Creates a formula with the given operator.
    ///
    /// # Preconditions
    ///
    /// The argument count fits the operator: NOT and NULL take exactly one
    /// argument, XOR takes exactly two, the rest take at least one.
    /// Use [`Formula::vote`] for VOTE formulas.
    pub fn new(operator: Operator, args: Vec<Arg>) -> Rc<Self> {
        debug_assert!(operator != Operator::Vote, "VOTE formulas take a threshold");
        match operator {
            Operator::Not | Operator::Null => {
                debug_assert_eq!(args.len(), 1, "Single-argument formula arity")
            }
            Operator::Xor => debug_assert_eq!(args.len(), 2, "XOR formula arity"),
            _ => debug_assert!(!args.is_empty(), "Empty formula"),
        }
        Rc::new(Formula {
            operator,
            vote_number: None,
            args,
        })
    }

    /// Creates a K/N VOTE formula.
    ///
    /// # Preconditions
    ///
    /// `1 < vote_number < args.len()`.
    pub fn vote(vote_number: u32, args: Vec<Arg>) -> Rc<Self> {
        debug_assert!(
            vote_number > 1 && (vote_number as usize) < args.len(),
            "VOTE threshold out of range"
        );
        Rc::new(Formula {
            operator: Operator::Vote,
            vote_number: Some(vote_number),
            args,
        })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn vote_number(&self) -> Option<u32> {
        self.vote_number
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_event_identity() {
        let event = BasicEvent::new("pump");
        let alias = Rc::clone(&event);
        assert!(Rc::ptr_eq(&event, &alias));
        assert_eq!(event.name(), "pump");

        let other = BasicEvent::new("pump");
        assert!(!Rc::ptr_eq(&event, &other));
    }

    #[test]
    fn test_formula_accessors() {
        let a = BasicEvent::new("a");
        let h = HouseEvent::new("h", true);
        let sub = Formula::new(Operator::Or, vec![Arg::Basic(Rc::clone(&a))]);
        let top = Formula::new(
            Operator::And,
            vec![Arg::Basic(a), Arg::House(h), Arg::Complement(sub)],
        );

        assert_eq!(top.operator(), Operator::And);
        assert_eq!(top.args().len(), 3);
        assert_eq!(top.vote_number(), None);
    }

    #[test]
    fn test_vote_formula() {
        let args: Vec<Arg> = (0..4).map(|i| Arg::Basic(BasicEvent::new(format!("e{}", i)))).collect();
        let formula = Formula::vote(2, args);
        assert_eq!(formula.operator(), Operator::Vote);
        assert_eq!(formula.vote_number(), Some(2));
    }
}
