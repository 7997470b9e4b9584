//! Java declaration model consumed by the header translator
//!
//! This module defines the read-only object model of an already-parsed Java
//! class. The parser that produces it is an external collaborator; the
//! translator only walks it.

mod nodes;

pub use nodes::*;

/// Source location information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Location {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

/// Span of source code (start and end locations), used only for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    pub fn from_to(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Self {
        Self {
            start: Location::new(start_line, start_col, 0),
            end: Location::new(end_line, end_col, 0),
        }
    }
}

/// AST node trait implemented by every declaration node
pub trait AstNode {
    /// Get the source span of this node
    fn span(&self) -> Span;
}
