//! Header emission module
//!
//! This module converts parsed Java class declarations into C++ header text.

pub mod cpp_types;
pub mod error;
pub mod header_writer;
pub mod printer;
pub mod symtab;

// Re-export commonly used types
pub use cpp_types::{CppTypes, TypeRenderer};
pub use error::{TranslateError, TranslateResult};
pub use header_writer::{HeaderWriter, Visibility};
pub use printer::{OutputBuffers, SourcePrinter, Stream};
pub use symtab::DefineTable;

use crate::ast::ClassDecl;

/// Generate header text for one class declaration
///
/// The symbol table is shared across the whole translation run; the writer
/// and its output buffers live for this class only.
pub fn generate_header(
    class: &ClassDecl,
    types: &dyn TypeRenderer,
    symtab: &mut DefineTable,
) -> TranslateResult<String> {
    let mut writer = HeaderWriter::new(types, symtab);
    writer.generate_class(class)
}
