//! Tracking of file-scope declarations required by generated code.

use indexmap::IndexSet;
use serde::Serialize;

/// Categories of symbols the generated file may need to import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// Symbols from the ORM package
    TypeOrm,
    /// Symbols from the GraphQL framework package
    GraphQl,
    /// Sibling entity classes
    Entities,
    /// Project-wide decorator helpers
    Decorators,
    /// Entire raw `import` statements
    Statements,
}

/// Accumulator for the symbols each synthesized declaration needs at
/// file scope.
///
/// Created once per generation run and passed by mutable reference into
/// the synthesis calls, then read exactly once via
/// [`Imports::for_template`]. Insertion order is preserved so the
/// emitted import lists are deterministic.
#[derive(Debug, Default)]
pub struct Imports {
    type_orm: IndexSet<String>,
    graph_ql: IndexSet<String>,
    entities: IndexSet<String>,
    decorators: IndexSet<String>,
    statements: IndexSet<String>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the generated file needs `symbol` at file scope.
    pub fn add(&mut self, kind: ImportKind, symbol: impl Into<String>) {
        let set = match kind {
            ImportKind::TypeOrm => &mut self.type_orm,
            ImportKind::GraphQl => &mut self.graph_ql,
            ImportKind::Entities => &mut self.entities,
            ImportKind::Decorators => &mut self.decorators,
            ImportKind::Statements => &mut self.statements,
        };
        set.insert(symbol.into());
    }

    /// Collapse each category into the string form the templates splice
    /// into `import` lines. Raw statements join on newlines; everything
    /// else becomes a comma-separated symbol list.
    pub fn for_template(&self) -> ImportBlock {
        ImportBlock {
            type_orm: join(&self.type_orm, ", "),
            graph_ql: join(&self.graph_ql, ", "),
            entities: join(&self.entities, ", "),
            decorators: join(&self.decorators, ", "),
            statements: join(&self.statements, "\n"),
        }
    }
}

fn join(set: &IndexSet<String>, sep: &str) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join(sep)
}

/// Per-category import lists, ready for splicing into a template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBlock {
    pub type_orm: String,
    pub graph_ql: String,
    pub entities: String,
    pub decorators: String,
    pub statements: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicates_symbols() {
        let mut imports = Imports::new();
        imports.add(ImportKind::GraphQl, "Field");
        imports.add(ImportKind::GraphQl, "Int");
        imports.add(ImportKind::GraphQl, "Field");

        assert_eq!(imports.for_template().graph_ql, "Field, Int");
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut imports = Imports::new();
        imports.add(ImportKind::TypeOrm, "Entity");
        imports.add(ImportKind::TypeOrm, "Column");
        imports.add(ImportKind::TypeOrm, "PrimaryGeneratedColumn");

        assert_eq!(
            imports.for_template().type_orm,
            "Entity, Column, PrimaryGeneratedColumn"
        );
    }

    #[test]
    fn test_statements_join_on_newlines() {
        let mut imports = Imports::new();
        imports.add(ImportKind::Statements, "import a from 'a';");
        imports.add(ImportKind::Statements, "import b from 'b';");

        assert_eq!(
            imports.for_template().statements,
            "import a from 'a';\nimport b from 'b';"
        );
    }

    #[test]
    fn test_empty_categories_are_empty_strings() {
        let imports = Imports::new();
        let block = imports.for_template();
        assert_eq!(block.entities, "");
        assert_eq!(block.decorators, "");
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let block = Imports::new().for_template();
        let value = serde_json::to_value(&block).unwrap();
        assert!(value.get("typeOrm").is_some());
        assert!(value.get("graphQl").is_some());
        assert!(value.get("statements").is_some());
    }
}
