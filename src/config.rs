//! Translator configuration

/// Configuration for a header translation run
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Prefix prepended to generated #define macro names
    pub define_prefix: String,
    /// Prefix prepended to translated reference type names
    pub class_prefix: String,
}

impl Config {
    pub fn new(define_prefix: impl Into<String>, class_prefix: impl Into<String>) -> Self {
        Self {
            define_prefix: define_prefix.into(),
            class_prefix: class_prefix.into(),
        }
    }
}
