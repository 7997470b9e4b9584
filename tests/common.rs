// Common test utilities for building parsed class models
#![allow(dead_code)]

use j2cpp::ast::*;

pub fn ty(name: &str) -> TypeRef {
    TypeRef::new(name, 0)
}

pub fn array_ty(name: &str, dims: usize) -> TypeRef {
    TypeRef::new(name, dims)
}

pub fn int_lit(value: i64) -> Expr {
    Expr::Literal(Literal::Int(value))
}

pub fn array_init(values: &[i64]) -> Expr {
    Expr::ArrayInit(values.iter().map(|v| int_lit(*v)).collect())
}

pub fn new_array(elem: &str, length: i64) -> Expr {
    Expr::NewArray {
        elem: ty(elem),
        length: Box::new(int_lit(length)),
    }
}

pub fn declarator(name: &str, initializer: Option<Expr>) -> VariableDeclarator {
    VariableDeclarator {
        name: name.to_string(),
        initializer,
        span: Span::default(),
    }
}

pub fn field(
    modifiers: Vec<Modifier>,
    type_ref: TypeRef,
    name: &str,
    initializer: Option<Expr>,
) -> ClassMember {
    ClassMember::Field(FieldDecl {
        modifiers,
        type_ref,
        variables: vec![declarator(name, initializer)],
        span: Span::default(),
    })
}

pub fn multi_field(
    modifiers: Vec<Modifier>,
    type_ref: TypeRef,
    variables: Vec<VariableDeclarator>,
) -> ClassMember {
    ClassMember::Field(FieldDecl {
        modifiers,
        type_ref,
        variables,
        span: Span::default(),
    })
}

pub fn method(
    modifiers: Vec<Modifier>,
    return_type: Option<TypeRef>,
    name: &str,
    parameters: Vec<(TypeRef, &str)>,
) -> ClassMember {
    ClassMember::Method(MethodDecl {
        modifiers,
        return_type,
        name: name.to_string(),
        parameters: parameters
            .into_iter()
            .map(|(type_ref, name)| Parameter {
                type_ref,
                name: name.to_string(),
                span: Span::default(),
            })
            .collect(),
        span: Span::default(),
    })
}

pub fn class(name: &str, body: Vec<ClassMember>) -> ClassDecl {
    ClassDecl {
        modifiers: vec![Modifier::Public],
        name: name.to_string(),
        body,
        span: Span::default(),
    }
}
