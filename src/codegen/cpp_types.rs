//! C++ type and expression rendering
//!
//! The member emitter never interprets types or initializer expressions
//! itself; it asks a [`TypeRenderer`] for their target-language text. The
//! trait is the seam to the expression-translation collaborator, and
//! [`CppTypes`] is the default implementation driven by the run
//! configuration.

use crate::ast::{Expr, Literal, PrimitiveType, TypeRef, VariableDeclarator};
use crate::config::Config;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Java primitive kind → C++ spelling used in emitted headers
static PRIMITIVE_CPP_NAMES: Lazy<HashMap<PrimitiveType, &'static str>> = Lazy::new(|| {
    let mut names = HashMap::new();
    names.insert(PrimitiveType::Boolean, "bool");
    names.insert(PrimitiveType::Byte, "int8_t");
    names.insert(PrimitiveType::Short, "int16_t");
    names.insert(PrimitiveType::Int, "int32_t");
    names.insert(PrimitiveType::Long, "int64_t");
    names.insert(PrimitiveType::Char, "char16_t");
    names.insert(PrimitiveType::Float, "float");
    names.insert(PrimitiveType::Double, "double");
    names
});

/// Rendering seam between the member emitter and the expression translator
pub trait TypeRenderer {
    /// C++ text of a declared type
    fn type_text(&self, ty: &TypeRef) -> String;

    /// C++ text of an array type's element type
    fn element_text(&self, ty: &TypeRef) -> String;

    /// C++ text of an initializer expression
    fn expr_text(&self, expr: &Expr) -> String;

    /// Macro name generated for a constant field
    fn define_name(&self, field: &str) -> String;

    /// Whether the declarator carries an explicit array length.
    ///
    /// Arrays with an explicit length are not eligible for deferred
    /// brace-initializer emission. The default predicate treats the
    /// `new T[len]` creation form as explicit and everything else as not.
    fn has_explicit_length(&self, declarator: &VariableDeclarator) -> bool {
        matches!(declarator.initializer, Some(Expr::NewArray { .. }))
    }
}

/// Default renderer configured by prefix settings
#[derive(Debug, Clone)]
pub struct CppTypes {
    define_prefix: String,
    class_prefix: String,
}

impl CppTypes {
    pub fn new(config: &Config) -> Self {
        Self {
            define_prefix: config.define_prefix.clone(),
            class_prefix: config.class_prefix.clone(),
        }
    }

    fn scalar_text(&self, ty: &TypeRef) -> String {
        match ty.primitive_kind() {
            Some(kind) => PRIMITIVE_CPP_NAMES[&kind].to_string(),
            // reference types are held by pointer in the translated port
            None => format!("{}{}*", self.class_prefix, ty.name),
        }
    }

    /// Nested binary operands keep their own parentheses
    fn paren_text(&self, expr: &Expr) -> String {
        match expr {
            Expr::Binary(_, _, _) => format!("({})", self.expr_text(expr)),
            _ => self.expr_text(expr),
        }
    }
}

impl TypeRenderer for CppTypes {
    fn type_text(&self, ty: &TypeRef) -> String {
        let mut text = self.scalar_text(ty);
        for _ in 0..ty.array_dims {
            text.push('*');
        }
        text
    }

    fn element_text(&self, ty: &TypeRef) -> String {
        self.scalar_text(ty)
    }

    fn expr_text(&self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(Literal::Int(value)) => value.to_string(),
            Expr::Literal(Literal::Char(value)) => format!("'{}'", value),
            Expr::Literal(Literal::Bool(value)) => value.to_string(),
            Expr::Literal(Literal::Str(value)) => format!("\"{}\"", value),
            Expr::Name(name) => name.clone(),
            Expr::Unary(op, operand) => format!("{}{}", op, self.expr_text(operand)),
            Expr::Binary(left, op, right) => {
                let left_text = self.paren_text(left);
                let right_text = self.paren_text(right);
                format!("{} {} {}", left_text, op, right_text)
            }
            Expr::ArrayInit(elements) => {
                if elements.is_empty() {
                    return "{ }".to_string();
                }
                let rendered: Vec<String> =
                    elements.iter().map(|e| self.expr_text(e)).collect();
                format!("{{ {} }}", rendered.join(", "))
            }
            Expr::NewArray { elem, length } => {
                format!("new {}[{}]", self.scalar_text(elem), self.expr_text(length))
            }
        }
    }

    fn define_name(&self, field: &str) -> String {
        format!("{}{}", self.define_prefix, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Span, UnaryOp};

    fn types() -> CppTypes {
        CppTypes::new(&Config::new("NS_HTML5_", "nsHtml5"))
    }

    #[test]
    fn test_primitive_type_text() {
        assert_eq!(types().type_text(&TypeRef::new("int", 0)), "int32_t");
        assert_eq!(types().type_text(&TypeRef::new("boolean", 0)), "bool");
        assert_eq!(types().type_text(&TypeRef::new("char", 0)), "char16_t");
    }

    #[test]
    fn test_array_type_text_is_pointer_form() {
        assert_eq!(types().type_text(&TypeRef::new("int", 1)), "int32_t*");
        assert_eq!(types().type_text(&TypeRef::new("byte", 2)), "int8_t**");
        assert_eq!(types().element_text(&TypeRef::new("int", 1)), "int32_t");
    }

    #[test]
    fn test_reference_type_text_is_prefixed_pointer() {
        assert_eq!(
            types().type_text(&TypeRef::new("Tokenizer", 0)),
            "nsHtml5Tokenizer*"
        );
    }

    #[test]
    fn test_expr_text() {
        let t = types();
        assert_eq!(t.expr_text(&Expr::Literal(Literal::Int(5))), "5");
        assert_eq!(
            t.expr_text(&Expr::Unary(
                UnaryOp::Minus,
                Box::new(Expr::Literal(Literal::Int(1)))
            )),
            "-1"
        );
        assert_eq!(
            t.expr_text(&Expr::ArrayInit(vec![
                Expr::Literal(Literal::Int(1)),
                Expr::Literal(Literal::Int(2)),
            ])),
            "{ 1, 2 }"
        );
    }

    #[test]
    fn test_define_name_uses_prefix() {
        assert_eq!(types().define_name("DATA"), "NS_HTML5_DATA");
    }

    #[test]
    fn test_explicit_length_predicate() {
        let t = types();
        let brace = VariableDeclarator {
            name: "a".to_string(),
            initializer: Some(Expr::ArrayInit(vec![])),
            span: Span::default(),
        };
        let sized = VariableDeclarator {
            name: "b".to_string(),
            initializer: Some(Expr::NewArray {
                elem: TypeRef::new("int", 0),
                length: Box::new(Expr::Literal(Literal::Int(4))),
            }),
            span: Span::default(),
        };
        assert!(!t.has_explicit_length(&brace));
        assert!(t.has_explicit_length(&sized));
    }
}
