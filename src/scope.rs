//! The scope handler (C3).
//!
//! Grounded in the teacher's `typechecker::scope::Scope` (a `Vec` of
//! per-depth maps with `enter_scope`/`exit_scope`), generalized to expose the
//! scope *identifier* itself rather than only a lookup stack — the grammar
//! (C7) and symbol table (C4) both need the id, not just the ability to
//! resolve a name through it. Per the Design Notes, the identifier is a
//! `Vec<u32>` with a total order rather than the original's concatenated
//! decimal-digit string, which becomes ambiguous once a counter exceeds 9.

/// A scope identifier: one counter per nesting depth, root first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct ScopeId(pub Vec<u32>);

impl ScopeId {
    /// The scope literals are interned into, regardless of where in the
    /// source they are written.
    pub fn global() -> ScopeId {
        ScopeId(Vec::new())
    }
}

impl std::fmt::Display for ScopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for counter in &self.0 {
            write!(f, "{counter}")?;
        }
        Ok(())
    }
}

/// Tracks the current nesting depth and a per-depth counter, so that
/// re-entering a sibling block at the same depth yields a distinct id.
#[derive(Debug, Clone, Default)]
pub struct ScopeHandler {
    counters: Vec<i64>,
    depth: i64,
}

impl ScopeHandler {
    pub fn new() -> ScopeHandler {
        ScopeHandler { counters: Vec::new(), depth: -1 }
    }

    /// Advances to a new child scope one level deeper than the current one.
    pub fn open_scope(&mut self) {
        let new_depth = (self.depth + 1) as usize;
        if self.counters.len() <= new_depth {
            self.counters.push(-1);
        }
        self.depth += 1;
        self.counters[new_depth] += 1;
    }

    /// Leaves the current scope. Counters at deeper positions are retained
    /// so a later sibling at that depth still gets a distinct identifier.
    pub fn close_scope(&mut self) {
        self.depth -= 1;
    }

    pub fn depth(&self) -> i64 {
        self.depth
    }

    /// Panics if no scope is currently open — callers only ask for the
    /// current scope id from within a production that has already opened one.
    pub fn current_scope_id(&self) -> ScopeId {
        assert!(self.depth >= 0, "current_scope_id() called with no scope open");
        ScopeId(self.counters[..=self.depth as usize].iter().map(|&c| c as u32).collect())
    }

    /// Root-to-current ordered list of scope ids, used for shadowing checks.
    pub fn enclosing_scope_ids(&self) -> Vec<ScopeId> {
        if self.depth < 0 {
            return Vec::new();
        }
        (0..=self.depth as usize)
            .map(|d| ScopeId(self.counters[..=d].iter().map(|&c| c as u32).collect()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_depth_is_negative_one() {
        let scope = ScopeHandler::new();
        assert_eq!(scope.depth(), -1);
    }

    #[test]
    fn root_scope_after_first_open_is_zero() {
        let mut scope = ScopeHandler::new();
        scope.open_scope();
        assert_eq!(scope.current_scope_id(), ScopeId(vec![0]));
    }

    #[test]
    fn balanced_open_close_restores_depth() {
        let mut scope = ScopeHandler::new();
        scope.open_scope();
        scope.open_scope();
        scope.close_scope();
        scope.close_scope();
        assert_eq!(scope.depth(), -1);
    }

    #[test]
    fn sibling_scopes_get_distinct_ids_differing_in_last_digit() {
        let mut scope = ScopeHandler::new();
        scope.open_scope(); // root "0"
        scope.open_scope(); // first child
        let first = scope.current_scope_id();
        scope.close_scope();
        scope.open_scope(); // second child, same depth
        let second = scope.current_scope_id();

        assert_ne!(first, second);
        assert_eq!(first.0.len(), second.0.len());
        assert_eq!(first.0[0], second.0[0]);
        assert_ne!(first.0[1], second.0[1]);
    }

    #[test]
    fn enclosing_scope_ids_includes_current() {
        let mut scope = ScopeHandler::new();
        scope.open_scope();
        scope.open_scope();
        let enclosing = scope.enclosing_scope_ids();
        assert_eq!(enclosing.len(), 2);
        assert_eq!(enclosing.last().unwrap(), &scope.current_scope_id());
    }

    #[test]
    fn global_scope_is_distinct_from_root() {
        let mut scope = ScopeHandler::new();
        scope.open_scope();
        assert_ne!(ScopeId::global(), scope.current_scope_id());
    }
}
