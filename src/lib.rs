//! Java to C++ Header Translator (j2cpp)
//!
//! Translates already-parsed Java class declarations into C++ header text
//! for a hand-maintained native port of a reference implementation.
//!
//! ## Architecture
//!
//! - **ast**: read-only Java declaration model, produced by an external parser
//! - **codegen**: header-mode member emission (printer, symbol table,
//!   type/expression renderer, header writer)
//!
//! ## Translation Flow
//!
//! ```text
//! Parsed class → Field classifier → main / array-init / #define streams → header text
//! ```
//!
//! One [`codegen::DefineTable`] lives for a whole run so duplicate constant
//! names are caught across classes, not just within one.

pub mod ast;
pub mod codegen;
pub mod config;
pub mod consts;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

use ast::ClassDecl;
use codegen::{generate_header, CppTypes, DefineTable};
use std::path::Path;

/// Translate a single class using a caller-owned symbol table
///
/// Useful when the caller drives the run itself and wants to keep the table
/// alive across several calls.
pub fn translate_header(
    class: &ClassDecl,
    config: &Config,
    symtab: &mut DefineTable,
) -> Result<String> {
    let types = CppTypes::new(config);
    Ok(generate_header(class, &types, symtab)?)
}

/// Translate a whole run of classes
///
/// Classes are translated sequentially; the first structural violation
/// aborts the run. Headers already produced for prior classes remain valid.
pub fn translate_headers(classes: &[ClassDecl], config: &Config) -> Result<Vec<String>> {
    eprintln!("🔧 J2CPP: Starting header translation run");

    let types = CppTypes::new(config);
    let mut symtab = DefineTable::new();
    let mut headers = Vec::with_capacity(classes.len());

    for (index, class) in classes.iter().enumerate() {
        eprintln!(
            "📝 J2CPP: [{}/{}] Translating {}",
            index + 1,
            classes.len(),
            class.name
        );
        headers.push(generate_header(class, &types, &mut symtab)?);
    }

    eprintln!("✅ J2CPP: Header translation complete");
    Ok(headers)
}

/// Translate classes and write one `<Class>.h` file per class
pub fn translate_headers_to_dir(
    classes: &[ClassDecl],
    output_dir: &str,
    config: &Config,
) -> Result<()> {
    let headers = translate_headers(classes, config)?;

    let dir = Path::new(output_dir);
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    for (class, header) in classes.iter().zip(&headers) {
        let path = dir.join(format!("{}.h", class.name));
        std::fs::write(&path, header)?;
    }

    Ok(())
}
