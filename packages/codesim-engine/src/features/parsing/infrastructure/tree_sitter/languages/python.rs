//! Python-specific tree-sitter configuration

/// Python grammar
pub fn language() -> tree_sitter::Language {
    tree_sitter_python::language()
}

/// Python node kinds for quick lookup
pub mod node_kinds {
    pub const MODULE: &str = "module";
    pub const FUNCTION_DEF: &str = "function_definition";
    pub const CLASS_DEF: &str = "class_definition";
    pub const FOR_STATEMENT: &str = "for_statement";
    pub const WHILE_STATEMENT: &str = "while_statement";
    pub const IF_STATEMENT: &str = "if_statement";
    pub const RETURN_STATEMENT: &str = "return_statement";
    pub const CALL: &str = "call";
    pub const IDENTIFIER: &str = "identifier";
    pub const COMMENT: &str = "comment";
}
