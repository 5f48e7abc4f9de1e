//! Mutable world state and the action effect rules.

use core::fmt;

use thiserror::Error;

use crate::vocab::{Action, Predicate};

/// An effect rule tried to remove a fact that does not hold. Surfaced as a
/// hard error rather than a no-op, so inconsistent start/goal descriptions
/// fail at the first bad removal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("applying `{action}` requires removing `{predicate}`, which does not hold")]
pub struct EffectError {
    pub action: Action,
    pub predicate: Predicate,
}

/// The set of currently-true predicates.
///
/// Duplicate-free, but iteration follows insertion order: goal expansion
/// resolves "find the block resting on x" by taking the first match in
/// iteration order, so the backing store is a vector rather than a hashed
/// or ordered set.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct World {
    facts: Vec<Predicate>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a world from facts in order, skipping duplicates.
    pub fn from_facts(facts: impl IntoIterator<Item = Predicate>) -> Self {
        let mut world = Self::new();
        for fact in facts {
            world.insert(fact);
        }
        world
    }

    pub fn holds(&self, predicate: &Predicate) -> bool {
        self.facts.contains(predicate)
    }

    /// Insert a fact at the end of the iteration order. Returns `false`
    /// (and leaves the world unchanged) when the fact already holds.
    pub fn insert(&mut self, predicate: Predicate) -> bool {
        if self.holds(&predicate) {
            return false;
        }
        self.facts.push(predicate);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Predicate> {
        self.facts.iter()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Apply an action's effect rule: remove the facts it falsifies, then
    /// add the facts it establishes.
    pub fn apply(&mut self, action: &Action) -> Result<(), EffectError> {
        match action {
            Action::Stack(x, y) => {
                self.remove_for(action, Predicate::Clear(y.clone()))?;
                self.insert(Predicate::On(x.clone(), y.clone()));
                self.insert(Predicate::Clear(x.clone()));
                self.insert(Predicate::ArmEmpty);
            }
            Action::Unstack(x, y) => {
                self.remove_for(action, Predicate::On(x.clone(), y.clone()))?;
                self.remove_for(action, Predicate::Clear(x.clone()))?;
                self.remove_for(action, Predicate::ArmEmpty)?;
                self.insert(Predicate::Holding(x.clone()));
                self.insert(Predicate::Clear(y.clone()));
            }
            Action::Pickup(x) => {
                self.remove_for(action, Predicate::ArmEmpty)?;
                self.remove_for(action, Predicate::OnTable(x.clone()))?;
                self.insert(Predicate::Holding(x.clone()));
            }
            Action::Putdown(x) => {
                // Putdown removes nothing: the holding fact stays behind.
                // Known quirk, kept for trace compatibility; see DESIGN.md.
                self.insert(Predicate::ArmEmpty);
                self.insert(Predicate::OnTable(x.clone()));
                self.insert(Predicate::Clear(x.clone()));
            }
        }
        Ok(())
    }

    fn remove_for(&mut self, action: &Action, predicate: Predicate) -> Result<(), EffectError> {
        match self.facts.iter().position(|fact| *fact == predicate) {
            Some(index) => {
                self.facts.remove(index);
                Ok(())
            }
            None => Err(EffectError {
                action: action.clone(),
                predicate,
            }),
        }
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.facts).finish()
    }
}
