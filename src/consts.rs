// Shared constant tables for the translator

// Printer: spaces per indentation level in emitted headers
pub const INDENT_WIDTH: usize = 2;

// Java primitive type names recognized by TypeRef classification
pub const JAVA_PRIMITIVE_TYPES: &[&str] = &[
    "boolean", "byte", "short", "int", "long", "char", "float", "double",
];
