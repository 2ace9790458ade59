//! Java-specific tree-sitter configuration

/// Java grammar
pub fn language() -> tree_sitter::Language {
    tree_sitter_java::language()
}

/// Java node kinds for quick lookup
pub mod node_kinds {
    pub const PROGRAM: &str = "program";
    pub const CLASS_DECLARATION: &str = "class_declaration";
    pub const METHOD_DECLARATION: &str = "method_declaration";
    pub const FOR_STATEMENT: &str = "for_statement";
    pub const WHILE_STATEMENT: &str = "while_statement";
    pub const IF_STATEMENT: &str = "if_statement";
    pub const METHOD_INVOCATION: &str = "method_invocation";
    pub const LINE_COMMENT: &str = "line_comment";
    pub const BLOCK_COMMENT: &str = "block_comment";
}
