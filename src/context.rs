//! `ParserContext`: the single value the grammar (C7) threads by `&mut`
//! reference through a parse, bundling the scope handler (C3), symbol table
//! (C4) and current-scope staging (C5).
//!
//! Grounded in the teacher's `typechecker::context::Context` (which bundles
//! only a `Scope`); generalized here to bundle all three collaborators the
//! original keeps as module-level mutable classmethod state
//! (`SymbolTable`/`CurrentScope` in
//! `examples/original_source/src/parser/grammar.py`), per the Design Notes'
//! "module-level mutable registries → a single `ParserContext` value"
//! migration.

use crate::grammar::error::GrammarError;
use crate::scope::ScopeHandler;
use crate::staging::CurrentScopeStaging;
use crate::symbol::{Symbol, SymbolTable};

#[derive(Debug, Default)]
pub struct ParserContext {
    pub scope: ScopeHandler,
    pub symbols: SymbolTable,
    pub staging: CurrentScopeStaging,
}

impl ParserContext {
    pub fn new() -> ParserContext {
        ParserContext { scope: ScopeHandler::new(), symbols: SymbolTable::new(), staging: CurrentScopeStaging::default() }
    }

    /// Raises *duplicate-identifier* if `identifier` is already staged in
    /// the block currently being reduced, or already declared in the
    /// current scope or any enclosing one.
    pub fn assert_not_shadowed(&self, identifier: &str, line: usize) -> Result<(), GrammarError> {
        if self.staging.identifiers().iter().any(|staged| staged == identifier) {
            return Err(GrammarError::DuplicateIdentifier { identifier: identifier.to_string(), line });
        }
        for scope_id in self.scope.enclosing_scope_ids() {
            if let Some(Symbol::Variable(_)) = self.symbols.retrieve(&scope_id, identifier) {
                return Err(GrammarError::DuplicateIdentifier { identifier: identifier.to_string(), line });
            }
        }
        Ok(())
    }
}
