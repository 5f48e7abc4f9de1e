//! Textual literal grammar.
//!
//! A state string is predicate literals joined by [`STATE_SEPARATOR`]; each
//! literal is whitespace-separated tokens `<kind> <arg...>`. Action literals
//! use the same token grammar, so every plan line reparses to the action
//! that produced it.

use std::str::FromStr;

use thiserror::Error;

use crate::vocab::{Action, Block, Predicate};
use crate::world::World;

/// Separator between predicate literals in a state string.
pub const STATE_SEPARATOR: char = '^';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty literal")]
    EmptyLiteral,
    #[error("unknown kind `{kind}` in literal `{literal}`, expected one of {expected:?}")]
    UnknownKind {
        kind: String,
        literal: String,
        expected: &'static [&'static str],
    },
    #[error("`{kind}` takes {expected} argument(s), got {got} in literal `{literal}`")]
    WrongArity {
        kind: &'static str,
        expected: usize,
        got: usize,
        literal: String,
    },
}

fn expect_args<const N: usize>(
    kind: &'static str,
    args: &[&str],
    literal: &str,
) -> Result<[Block; N], ParseError> {
    if args.len() != N {
        return Err(ParseError::WrongArity {
            kind,
            expected: N,
            got: args.len(),
            literal: literal.to_string(),
        });
    }
    Ok(core::array::from_fn(|i| Block::new(args[i])))
}

impl FromStr for Predicate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut tokens = s.split_whitespace();
        let kind = tokens.next().ok_or(ParseError::EmptyLiteral)?;
        let args: Vec<&str> = tokens.collect();
        match kind {
            "on" => {
                let [x, y] = expect_args("on", &args, s)?;
                Ok(Predicate::On(x, y))
            }
            "clear" => {
                let [x] = expect_args("clear", &args, s)?;
                Ok(Predicate::Clear(x))
            }
            "on_table" => {
                let [x] = expect_args("on_table", &args, s)?;
                Ok(Predicate::OnTable(x))
            }
            "holding" => {
                let [x] = expect_args("holding", &args, s)?;
                Ok(Predicate::Holding(x))
            }
            "arm_empty" => {
                let [] = expect_args("arm_empty", &args, s)?;
                Ok(Predicate::ArmEmpty)
            }
            other => Err(ParseError::UnknownKind {
                kind: other.to_string(),
                literal: s.to_string(),
                expected: &Predicate::KINDS,
            }),
        }
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut tokens = s.split_whitespace();
        let kind = tokens.next().ok_or(ParseError::EmptyLiteral)?;
        let args: Vec<&str> = tokens.collect();
        match kind {
            "stack" => {
                let [x, y] = expect_args("stack", &args, s)?;
                Ok(Action::Stack(x, y))
            }
            "unstack" => {
                let [x, y] = expect_args("unstack", &args, s)?;
                Ok(Action::Unstack(x, y))
            }
            "pickup" => {
                let [x] = expect_args("pickup", &args, s)?;
                Ok(Action::Pickup(x))
            }
            "putdown" => {
                let [x] = expect_args("putdown", &args, s)?;
                Ok(Action::Putdown(x))
            }
            other => Err(ParseError::UnknownKind {
                kind: other.to_string(),
                literal: s.to_string(),
                expected: &Action::KINDS,
            }),
        }
    }
}

/// Parse a `^`-separated state string into predicates, preserving input
/// order. Order matters for goal states: it determines how subgoals
/// interleave on the planning stack.
pub fn parse_state(s: &str) -> Result<Vec<Predicate>, ParseError> {
    s.split(STATE_SEPARATOR)
        .map(|literal| literal.trim().parse())
        .collect()
}

impl FromStr for World {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Ok(World::from_facts(parse_state(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(name: &str) -> Block {
        Block::new(name)
    }

    #[test]
    fn parses_every_predicate_kind() {
        assert_eq!(
            "on a b".parse::<Predicate>().unwrap(),
            Predicate::On(block("a"), block("b"))
        );
        assert_eq!(
            "clear a".parse::<Predicate>().unwrap(),
            Predicate::Clear(block("a"))
        );
        assert_eq!(
            "on_table a".parse::<Predicate>().unwrap(),
            Predicate::OnTable(block("a"))
        );
        assert_eq!(
            "holding a".parse::<Predicate>().unwrap(),
            Predicate::Holding(block("a"))
        );
        assert_eq!("arm_empty".parse::<Predicate>().unwrap(), Predicate::ArmEmpty);
    }

    #[test]
    fn parses_every_action_kind() {
        assert_eq!(
            "stack a b".parse::<Action>().unwrap(),
            Action::Stack(block("a"), block("b"))
        );
        assert_eq!(
            "unstack a b".parse::<Action>().unwrap(),
            Action::Unstack(block("a"), block("b"))
        );
        assert_eq!("pickup a".parse::<Action>().unwrap(), Action::Pickup(block("a")));
        assert_eq!("putdown a".parse::<Action>().unwrap(), Action::Putdown(block("a")));
    }

    #[test]
    fn literals_round_trip_through_display() {
        for literal in ["on a b", "clear a", "on_table a", "holding a", "arm_empty"] {
            let predicate: Predicate = literal.parse().unwrap();
            assert_eq!(predicate.to_string(), literal);
        }
        for literal in ["stack a b", "unstack b a", "pickup a", "putdown a"] {
            let action: Action = literal.parse().unwrap();
            assert_eq!(action.to_string(), literal);
        }
    }

    #[test]
    fn rejects_unknown_kinds() {
        let err = "fly a".parse::<Predicate>().unwrap_err();
        assert!(matches!(err, ParseError::UnknownKind { .. }), "got {err:?}");

        let err = "teleport a b".parse::<Action>().unwrap_err();
        assert!(matches!(err, ParseError::UnknownKind { .. }), "got {err:?}");
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(matches!(
            "on a".parse::<Predicate>().unwrap_err(),
            ParseError::WrongArity {
                expected: 2,
                got: 1,
                ..
            }
        ));
        assert!(matches!(
            "arm_empty a".parse::<Predicate>().unwrap_err(),
            ParseError::WrongArity { expected: 0, .. }
        ));
        assert!(matches!(
            "pickup a b".parse::<Action>().unwrap_err(),
            ParseError::WrongArity {
                expected: 1,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_literals() {
        assert!(matches!(
            "".parse::<Predicate>().unwrap_err(),
            ParseError::EmptyLiteral
        ));
        assert!(matches!(
            parse_state("on a b^^clear a").unwrap_err(),
            ParseError::EmptyLiteral
        ));
    }

    #[test]
    fn splits_states_on_the_separator() {
        let facts = parse_state("on_table a^clear a^arm_empty").unwrap();
        assert_eq!(
            facts,
            vec![
                Predicate::OnTable(block("a")),
                Predicate::Clear(block("a")),
                Predicate::ArmEmpty,
            ]
        );
    }

    #[test]
    fn world_from_str_deduplicates() {
        let world: World = "arm_empty^arm_empty^clear a".parse().unwrap();
        assert_eq!(world.len(), 2);
    }
}
