//! Goal-stack planning for the blocks world.
//!
//! The planner drives a LIFO stack mixing pending predicate goals and
//! committed-but-unapplied actions. Popping a satisfied goal discards it;
//! popping an unsatisfied goal commits the operator that establishes it and
//! pushes that operator's own preconditions above it; popping an action
//! applies its effect rule to the working world state and appends it to the
//! output plan. The stack draining to empty is success.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod planner;

pub use planner::{GoalStackConfig, GoalStackPlanner};

use blocks_core::{EffectError, Predicate};
use thiserror::Error;

/// Errors during planning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The goal was popped unsatisfied and no operator in the vocabulary
    /// establishes it from scratch. Only `arm_empty` can reach this arm.
    #[error("no operator can establish `{goal}` from scratch")]
    UnsatisfiableGoal { goal: Predicate },

    /// Expanding the goal required a supporting `on` fact that the world
    /// does not contain (e.g. `clear x` for a block nothing rests on and
    /// that is not on the table).
    #[error("no supporting `on` fact found while expanding `{goal}`")]
    NoSupportingFact { goal: Predicate },

    /// Loop protection: the expansion budget ran out before the goal stack
    /// emptied.
    #[error("expansion limit of {limit} reached before the goal stack emptied")]
    ExpansionLimit { limit: usize },

    #[error(transparent)]
    Effect(#[from] EffectError),
}

pub type Result<T> = std::result::Result<T, PlanError>;
