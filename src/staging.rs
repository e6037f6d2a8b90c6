//! Current-scope staging (C5).
//!
//! Grounded in `examples/original_source/src/parser/grammar.py`'s
//! `CurrentScope` classmethod trio (`append`, `get`, `clean`). The original
//! only stages actions; this translation generalizes the buffer to also
//! stage identifiers declared inside a compound statement that is still
//! being reduced, per `spec.md` §4.5 ("a tuple of two ordered sequences —
//! actions and identifiers").

use crate::model::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagingKind {
    Action,
    Identifier,
}

#[derive(Debug, Clone, Default)]
pub struct CurrentScopeStaging {
    actions: Vec<Action>,
    identifiers: Vec<String>,
}

impl CurrentScopeStaging {
    pub fn append_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn append_identifier(&mut self, identifier: impl Into<String>) {
        self.identifiers.push(identifier.into());
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Drains and returns the staged actions, leaving the buffer empty —
    /// the shape the grammar needs when a `configuration` block's reduction
    /// completes.
    pub fn take_actions(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.actions)
    }

    pub fn clean(&mut self, kind: StagingKind) {
        match kind {
            StagingKind::Action => self.actions.clear(),
            StagingKind::Identifier => self.identifiers.clear(),
        }
    }
}
