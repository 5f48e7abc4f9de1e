//! The closed predicate/action vocabulary.
//!
//! Both enumerations are tagged sum types with order-significant block
//! arguments and structural equality, which the world state relies on for
//! membership tests and exact removal. `Display` emits the space-separated
//! token grammar; the inverse lives in [`crate::parse`].

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque block identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Block(pub String);

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A ground fact about the world.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Predicate {
    /// First block rests on the second.
    On(Block, Block),
    /// Nothing rests on the block.
    Clear(Block),
    /// The block rests directly on the table.
    OnTable(Block),
    /// The arm grips the block.
    Holding(Block),
    /// The arm grips nothing.
    ArmEmpty,
}

impl Predicate {
    /// Kind names recognized by the literal grammar.
    pub const KINDS: [&'static str; 5] = ["on", "clear", "on_table", "holding", "arm_empty"];

    pub fn kind(&self) -> &'static str {
        match self {
            Predicate::On(..) => "on",
            Predicate::Clear(..) => "clear",
            Predicate::OnTable(..) => "on_table",
            Predicate::Holding(..) => "holding",
            Predicate::ArmEmpty => "arm_empty",
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::On(x, y) => write!(f, "on {x} {y}"),
            Predicate::Clear(x) => write!(f, "clear {x}"),
            Predicate::OnTable(x) => write!(f, "on_table {x}"),
            Predicate::Holding(x) => write!(f, "holding {x}"),
            Predicate::ArmEmpty => f.write_str("arm_empty"),
        }
    }
}

// Debug output is the literal itself.
impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A primitive operator with fixed arity.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// Place the held first block onto the second.
    Stack(Block, Block),
    /// Grip the first block, which rested on the second.
    Unstack(Block, Block),
    /// Grip the block from the table.
    Pickup(Block),
    /// Place the held block onto the table.
    Putdown(Block),
}

impl Action {
    /// Kind names recognized by the literal grammar.
    pub const KINDS: [&'static str; 4] = ["stack", "unstack", "pickup", "putdown"];

    pub fn kind(&self) -> &'static str {
        match self {
            Action::Stack(..) => "stack",
            Action::Unstack(..) => "unstack",
            Action::Pickup(..) => "pickup",
            Action::Putdown(..) => "putdown",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Stack(x, y) => write!(f, "stack {x} {y}"),
            Action::Unstack(x, y) => write!(f, "unstack {x} {y}"),
            Action::Pickup(x) => write!(f, "pickup {x}"),
            Action::Putdown(x) => write!(f, "putdown {x}"),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_render_the_token_grammar() {
        let a = Block::new("a");
        let b = Block::new("b");
        assert_eq!(Predicate::On(a.clone(), b.clone()).to_string(), "on a b");
        assert_eq!(Predicate::OnTable(a.clone()).to_string(), "on_table a");
        assert_eq!(Predicate::ArmEmpty.to_string(), "arm_empty");
        assert_eq!(Action::Unstack(b, a).to_string(), "unstack b a");
    }

    #[test]
    fn kind_names_match_the_kind_tables() {
        let a = Block::new("a");
        assert_eq!(a.as_str(), "a");
        assert!(Predicate::KINDS.contains(&Predicate::Holding(a.clone()).kind()));
        assert!(Action::KINDS.contains(&Action::Putdown(a).kind()));
    }
}
