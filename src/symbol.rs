//! The symbol table (C4).
//!
//! Grounded in `examples/original_source/src/parser/grammar.py`'s
//! `SymbolTable` classmethods (`store`, `retrieve`) — generalized from a
//! single flat `dict` into the two-level, scope-keyed structure `spec.md`
//! §4.4 requires — and in the teacher's `typechecker::scope::Scope` for the
//! nested-map shape itself.

use std::collections::HashMap;

use crate::lexeme::{Keyword, LexemeSet};
use crate::model::{Literal, Variable};
use crate::scope::ScopeId;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Symbol {
    Literal(Literal),
    Variable(Variable),
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    scopes: HashMap<ScopeId, HashMap<String, Symbol>>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    /// Interns a literal into the global scope. Idempotent on `(type, value)`:
    /// two textually identical literals of the same type share one identifier.
    pub fn store_literal(&mut self, type_keyword: Keyword, value: impl Into<String>) -> Literal {
        let value = value.into();
        let identifier = format!("_{value}");
        let global = self.scopes.entry(ScopeId::global()).or_default();
        if let Some(Symbol::Literal(existing)) = global.get(&identifier) {
            return existing.clone();
        }
        let literal = Literal { identifier: identifier.clone(), type_name: type_keyword.lexeme().to_string(), value };
        global.insert(identifier, Symbol::Literal(literal.clone()));
        literal
    }

    /// Declares a variable in the given scope. Callers must run the
    /// shadowing assertion first; this method does not re-check it.
    pub fn store_variable(
        &mut self,
        scope_id: ScopeId,
        identifier: impl Into<String>,
        type_keyword: Keyword,
        reference: Option<String>,
    ) -> Variable {
        let identifier = identifier.into();
        let variable = Variable { identifier: identifier.clone(), type_name: type_keyword.lexeme().to_string(), reference };
        self.scopes.entry(scope_id).or_default().insert(identifier, Symbol::Variable(variable.clone()));
        variable
    }

    /// Exact match only — no walk up enclosing scopes.
    pub fn retrieve(&self, scope_id: &ScopeId, identifier: &str) -> Option<&Symbol> {
        self.scopes.get(scope_id)?.get(identifier)
    }
}
