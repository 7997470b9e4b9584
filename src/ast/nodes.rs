use super::{AstNode, Span};
use crate::consts::JAVA_PRIMITIVE_TYPES;
use std::fmt;

// Modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Native,
    Synchronized,
    Transient,
    Volatile,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Native => "native",
            Modifier::Synchronized => "synchronized",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
        };
        write!(f, "{}", text)
    }
}

// Type References
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub name: String,
    pub array_dims: usize,
    pub span: Span,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, array_dims: usize) -> Self {
        Self {
            name: name.into(),
            array_dims,
            span: Span::default(),
        }
    }

    /// Primitive kind of the base type name, ignoring array dimensions
    pub fn primitive_kind(&self) -> Option<PrimitiveType> {
        PrimitiveType::from_name(&self.name)
    }

    pub fn is_array(&self) -> bool {
        self.array_dims > 0
    }

    /// Classify this type reference as a closed type variant
    pub fn as_type_enum(&self) -> TypeEnum {
        if self.array_dims > 0 {
            let elem = TypeRef::new(self.name.clone(), 0);
            TypeEnum::Array {
                elem: Box::new(elem.as_type_enum()),
                dims: self.array_dims,
            }
        } else if let Some(kind) = self.primitive_kind() {
            TypeEnum::Primitive(kind)
        } else {
            TypeEnum::Reference(self.name.clone())
        }
    }
}

impl AstNode for TypeRef {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for _ in 0..self.array_dims {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

/// Java primitive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub fn from_name(name: &str) -> Option<Self> {
        if !JAVA_PRIMITIVE_TYPES.contains(&name) {
            return None;
        }
        match name {
            "boolean" => Some(PrimitiveType::Boolean),
            "char" => Some(PrimitiveType::Char),
            "byte" => Some(PrimitiveType::Byte),
            "short" => Some(PrimitiveType::Short),
            "int" => Some(PrimitiveType::Int),
            "long" => Some(PrimitiveType::Long),
            "float" => Some(PrimitiveType::Float),
            "double" => Some(PrimitiveType::Double),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Char => "char",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Closed classification of a declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeEnum {
    Primitive(PrimitiveType),
    Reference(String),
    Array { elem: Box<TypeEnum>, dims: usize },
}

// Class Members
#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub body: Vec<ClassMember>,
    pub span: Span,
}

impl AstNode for ClassDecl {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for ClassDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.name)
    }
}

#[derive(Debug, Clone)]
pub enum ClassMember {
    Field(FieldDecl),
    Method(MethodDecl),
}

impl AstNode for ClassMember {
    fn span(&self) -> Span {
        match self {
            ClassMember::Field(field) => field.span(),
            ClassMember::Method(method) => method.span(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub modifiers: Vec<Modifier>,
    pub type_ref: TypeRef,
    pub variables: Vec<VariableDeclarator>,
    pub span: Span,
}

impl FieldDecl {
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(&Modifier::Static)
    }

    pub fn is_final(&self) -> bool {
        self.modifiers.contains(&Modifier::Final)
    }
}

impl AstNode for FieldDecl {
    fn span(&self) -> Span {
        self.span
    }
}

/// One `name [= initializer]` pair within a field declaration
#[derive(Debug, Clone)]
pub struct VariableDeclarator {
    pub name: String,
    pub initializer: Option<Expr>,
    pub span: Span,
}

impl AstNode for VariableDeclarator {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub modifiers: Vec<Modifier>,
    /// None means void
    pub return_type: Option<TypeRef>,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub span: Span,
}

impl MethodDecl {
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(&Modifier::Static)
    }
}

impl AstNode for MethodDecl {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub type_ref: TypeRef,
    pub name: String,
    pub span: Span,
}

impl AstNode for Parameter {
    fn span(&self) -> Span {
        self.span
    }
}

// Initializer Expressions
//
// The subset of Java expressions that appears in field initializers the
// translator must render: constant values, array initializers, and the
// explicit-length array creation form.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Name(String),
    Unary(UnaryOp, Box<Expr>),
    Binary(Box<Expr>, BinaryOp, Box<Expr>),
    ArrayInit(Vec<Expr>),
    NewArray { elem: TypeRef, length: Box<Expr> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Char(char),
    Bool(bool),
    Str(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Minus,
    BitNot,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Minus => write!(f, "-"),
            UnaryOp::BitNot => write!(f, "~"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Or,
    And,
    Xor,
    Shl,
    Shr,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Or => "|",
            BinaryOp::And => "&",
            BinaryOp::Xor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
        };
        write!(f, "{}", text)
    }
}
