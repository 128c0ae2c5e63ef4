//! Flat symbol table
//!
//! Maps identifier names to the primitive type of their first typed
//! declaration. There is no scoping: a declaration inside a nested block is
//! visible everywhere after it. The table only steers how `read` converts
//! its input.
//!
//! One table belongs to one compilation; [`crate::compile`] creates a fresh
//! instance per call.

use crate::parser::ast::PrimitiveType;
use rustc_hash::FxHashMap;

/// Type label used when an identifier was never declared with a type
pub const DEFAULT_TYPE_NAME: &str = "string";

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    types: FxHashMap<String, PrimitiveType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` with `ty` unless `ty` is absent or `name` already has an entry.
    ///
    /// Returns `true` if a new entry was written.
    pub fn declare(&mut self, name: &str, ty: Option<PrimitiveType>) -> bool {
        let Some(ty) = ty else {
            return false;
        };
        if self.types.contains_key(name) {
            return false;
        }
        self.types.insert(name.to_string(), ty);
        true
    }

    /// Recorded type of `name`, if any
    pub fn get(&self, name: &str) -> Option<PrimitiveType> {
        self.types.get(name).copied()
    }

    /// Recorded type name of `name`, or `"string"` when undeclared
    pub fn lookup_type(&self, name: &str) -> &'static str {
        self.get(name).map_or(DEFAULT_TYPE_NAME, PrimitiveType::name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Entries sorted by name
    pub fn entries(&self) -> Vec<(&str, PrimitiveType)> {
        let mut entries: Vec<_> = self
            .types
            .iter()
            .map(|(name, ty)| (name.as_str(), *ty))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
