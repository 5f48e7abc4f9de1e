//! Blocks-world vocabulary and world model.
//!
//! The static predicate/action vocabulary, the mutable world state the
//! effect rules operate on, and the textual literal grammar used at the
//! input/output boundary. Planning itself lives in `blocks-planner`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod parse;
pub mod plan;
pub mod vocab;
pub mod world;

pub use parse::{parse_state, ParseError, STATE_SEPARATOR};
pub use plan::Plan;
pub use vocab::{Action, Block, Predicate};
pub use world::{EffectError, World};
