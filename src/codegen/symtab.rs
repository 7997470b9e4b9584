//! Symbol table of generated #define constants
//!
//! Maps fully-qualified Java constant names (`Class.field`) to the C++ macro
//! names generated for them. One table lives for a whole translation run so
//! that name collisions are caught across classes, not just within one.

use super::error::{TranslateError, TranslateResult};
use std::collections::HashMap;

/// Process-wide table of constant names generated during one run
#[derive(Debug, Clone, Default)]
pub struct DefineTable {
    defines_by_java_name: HashMap<String, String>,
}

impl DefineTable {
    pub fn new() -> Self {
        Self {
            defines_by_java_name: HashMap::new(),
        }
    }

    /// Build the qualified key for a class member constant
    pub fn qualified_name(class: &str, field: &str) -> String {
        format!("{}.{}", class, field)
    }

    /// Register a constant mapping; re-registration is fatal, never an overwrite
    pub fn register(&mut self, qualified: &str, define: &str) -> TranslateResult<()> {
        if self.defines_by_java_name.contains_key(qualified) {
            return Err(TranslateError::DuplicateConstantName {
                name: qualified.to_string(),
            });
        }
        self.defines_by_java_name
            .insert(qualified.to_string(), define.to_string());
        Ok(())
    }

    /// Look up the macro name generated for a qualified constant
    pub fn lookup(&self, qualified: &str) -> Option<&str> {
        self.defines_by_java_name.get(qualified).map(String::as_str)
    }

    pub fn contains(&self, qualified: &str) -> bool {
        self.defines_by_java_name.contains_key(qualified)
    }

    pub fn len(&self) -> usize {
        self.defines_by_java_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defines_by_java_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut table = DefineTable::new();
        let key = DefineTable::qualified_name("Tokenizer", "DATA");
        table.register(&key, "NS_DATA").unwrap();

        assert_eq!(table.lookup("Tokenizer.DATA"), Some("NS_DATA"));
        assert!(table.contains("Tokenizer.DATA"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_is_fatal() {
        let mut table = DefineTable::new();
        table.register("Tokenizer.DATA", "NS_DATA").unwrap();

        let err = table.register("Tokenizer.DATA", "OTHER_DATA").unwrap_err();
        assert_eq!(
            err,
            TranslateError::DuplicateConstantName {
                name: "Tokenizer.DATA".to_string()
            }
        );
        // the original mapping survives
        assert_eq!(table.lookup("Tokenizer.DATA"), Some("NS_DATA"));
    }

    #[test]
    fn test_same_field_name_in_different_classes_is_allowed() {
        let mut table = DefineTable::new();
        table.register("Tokenizer.DATA", "NS_DATA").unwrap();
        table.register("TreeBuilder.DATA", "NS_DATA").unwrap();
        assert_eq!(table.len(), 2);
    }
}
