//! Specific error types for header emission
//!
//! Every variant is a fatal structural-precondition violation: the input has
//! a shape the translator does not know how to render, and emitting anything
//! would silently produce incorrect code. The first violation aborts the run.

use thiserror::Error;

/// Errors that can occur during member emission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("only int constant #defines supported: {class}.{field} ({detail})")]
    UnsupportedConstantType {
        class: String,
        field: String,
        detail: String,
    },

    #[error("more than one variable declared by one declarator: {class}.{field}")]
    UnsupportedMultiDeclarator { class: String, field: String },

    #[error("duplicate #define constant local name: {name}")]
    DuplicateConstantName { name: String },

    #[error("non-static array case not supported: {class}.{field}")]
    UnsupportedInstanceArray { class: String, field: String },
}

/// Generic result type for member emission operations
pub type TranslateResult<T> = Result<T, TranslateError>;
