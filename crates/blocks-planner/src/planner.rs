//! The goal-stack planning loop.

use blocks_core::{Action, Block, Plan, Predicate, World};

use crate::{PlanError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalStackConfig {
    /// Max number of stack pops before giving up (loop protection).
    pub max_expansions: usize,
}

impl Default for GoalStackConfig {
    fn default() -> Self {
        Self { max_expansions: 1024 }
    }
}

/// Entries on the planning stack: subgoals still to satisfy, and actions
/// committed but not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Goal(Predicate),
    Apply(Action),
}

/// Deterministic goal-stack planner.
///
/// All working state (planning stack, world copy, output plan) is local to
/// each [`plan`](GoalStackPlanner::plan) call, so one planner value can be
/// shared freely and independent runs never observe each other.
#[derive(Debug, Clone, Default)]
pub struct GoalStackPlanner {
    config: GoalStackConfig,
}

impl GoalStackPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: GoalStackConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> GoalStackConfig {
        self.config
    }

    /// Derive an ordered action sequence transforming `start` into a state
    /// satisfying every predicate in `goals`.
    ///
    /// Goals are pushed in input order, so the first-listed goal ends up
    /// deepest on the stack and is processed last.
    pub fn plan(&self, start: &World, goals: &[Predicate]) -> Result<Plan> {
        let mut world = start.clone();
        let mut stack: Vec<Entry> = goals.iter().cloned().map(Entry::Goal).collect();
        let mut out: Vec<Action> = Vec::new();

        let mut expansions: usize = 0;

        while let Some(entry) = stack.pop() {
            expansions = expansions.saturating_add(1);
            if expansions > self.config.max_expansions {
                return Err(PlanError::ExpansionLimit {
                    limit: self.config.max_expansions,
                });
            }

            tracing::debug!(top = ?entry, stack = ?stack, world = ?world, "planning step");

            match entry {
                Entry::Goal(goal) => {
                    if world.holds(&goal) {
                        continue;
                    }
                    expand(&goal, &world, &mut stack)?;
                }
                Entry::Apply(action) => {
                    world.apply(&action)?;
                    out.push(action);
                }
            }
        }

        tracing::debug!(world = ?world, "goal stack drained");
        Ok(Plan::new(out))
    }
}

/// Commit the operator that establishes an unsatisfied goal: push the
/// operator entry, then its precondition goals above it, so the
/// preconditions are popped and established before the operator applies.
fn expand(goal: &Predicate, world: &World, stack: &mut Vec<Entry>) -> Result<()> {
    match goal {
        Predicate::On(x, y) => {
            stack.push(Entry::Apply(Action::Stack(x.clone(), y.clone())));
            stack.push(Entry::Goal(Predicate::Clear(y.clone())));
        }
        Predicate::OnTable(x) => {
            stack.push(Entry::Apply(Action::Putdown(x.clone())));
            stack.push(Entry::Goal(Predicate::Holding(x.clone())));
        }
        Predicate::Clear(x) => {
            if world.holds(&Predicate::OnTable(x.clone())) {
                stack.push(Entry::Apply(Action::Putdown(x.clone())));
                stack.push(Entry::Goal(Predicate::Holding(x.clone())));
            } else {
                let y = block_resting_on(world, x)
                    .ok_or_else(|| PlanError::NoSupportingFact { goal: goal.clone() })?;
                push_unstack(stack, y, x.clone());
            }
        }
        Predicate::Holding(x) => {
            if world.holds(&Predicate::OnTable(x.clone())) {
                stack.push(Entry::Apply(Action::Pickup(x.clone())));
                stack.push(Entry::Goal(Predicate::ArmEmpty));
                stack.push(Entry::Goal(Predicate::OnTable(x.clone())));
            } else {
                let y = block_underneath(world, x)
                    .ok_or_else(|| PlanError::NoSupportingFact { goal: goal.clone() })?;
                // The committed unstack grips the supporting block, not
                // `x`; see DESIGN.md.
                push_unstack(stack, y, x.clone());
            }
        }
        Predicate::ArmEmpty => {
            return Err(PlanError::UnsatisfiableGoal { goal: goal.clone() });
        }
    }
    Ok(())
}

fn push_unstack(stack: &mut Vec<Entry>, y: Block, x: Block) {
    stack.push(Entry::Apply(Action::Unstack(y.clone(), x.clone())));
    stack.push(Entry::Goal(Predicate::On(y.clone(), x)));
    stack.push(Entry::Goal(Predicate::Clear(y)));
}

/// First block found resting on `x`, scanning the world in iteration order.
/// Single-tower states never have more than one match; the first-match rule
/// is a documented simplification, not a tie-break policy.
fn block_resting_on(world: &World, x: &Block) -> Option<Block> {
    world.iter().find_map(|fact| match fact {
        Predicate::On(above, below) if below == x => Some(above.clone()),
        _ => None,
    })
}

/// First block found underneath `x`, scanning the world in iteration order.
fn block_underneath(world: &World, x: &Block) -> Option<Block> {
    world.iter().find_map(|fact| match fact {
        Predicate::On(above, below) if above == x => Some(below.clone()),
        _ => None,
    })
}
