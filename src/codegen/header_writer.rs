//! Header-mode member emission
//!
//! Walks a class's field and method declarations in source order and prints
//! C++ header declarations. Three field shapes are handled differently:
//!
//! - static final int constants become `#define` lines appended after the
//!   class, registered in the run-wide [`DefineTable`]
//! - static primitive arrays with a brace initializer and no explicit length
//!   are declared as pointers in the class body, with the real definition
//!   deferred to the array-initializer stream spliced in after the class
//! - everything else prints as an ordinary in-class declaration
//!
//! Method bodies are never rendered in this mode; a `;` stands in for them.

use super::cpp_types::TypeRenderer;
use super::error::{TranslateError, TranslateResult};
use super::printer::{OutputBuffers, Stream};
use super::symtab::DefineTable;
use crate::ast::{
    ClassDecl, ClassMember, FieldDecl, MethodDecl, Modifier, PrimitiveType, TypeEnum,
    VariableDeclarator,
};

/// Visibility section of a C++ class body
///
/// `None` is the state before any member has been emitted; it is never
/// re-entered, so the first member always opens a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    None,
    Private,
    Protected,
    Public,
}

impl Visibility {
    /// Section visibility of a member. Package-default maps to public
    /// because the C++ side has no package-private equivalent.
    pub fn of(modifiers: &[Modifier]) -> Visibility {
        if modifiers.contains(&Modifier::Private) {
            Visibility::Private
        } else if modifiers.contains(&Modifier::Protected) {
            Visibility::Protected
        } else {
            Visibility::Public
        }
    }
}

/// Header writer for one class at a time
///
/// The type renderer and the symbol table are shared across the run; the
/// output buffers belong to the in-progress class alone.
pub struct HeaderWriter<'a> {
    types: &'a dyn TypeRenderer,
    symtab: &'a mut DefineTable,
    buffers: OutputBuffers,
    previous_visibility: Visibility,
    class_name: String,
}

impl<'a> HeaderWriter<'a> {
    pub fn new(types: &'a dyn TypeRenderer, symtab: &'a mut DefineTable) -> Self {
        Self {
            types,
            symtab,
            buffers: OutputBuffers::new(),
            previous_visibility: Visibility::None,
            class_name: String::new(),
        }
    }

    /// Translate one class declaration into header text
    pub fn generate_class(&mut self, class: &ClassDecl) -> TranslateResult<String> {
        self.open_class(&class.name);
        for member in &class.body {
            match member {
                ClassMember::Field(field) => self.field_declaration(field)?,
                ClassMember::Method(method) => self.method_declaration(method),
            }
        }
        Ok(self.close_class())
    }

    fn open_class(&mut self, name: &str) {
        self.class_name = name.to_string();
        self.previous_visibility = Visibility::None;
        self.buffers.reset();

        let printer = self.buffers.main();
        printer.print("class ");
        printer.print_ln(name);
        printer.print_ln("{");
        printer.indent();
        printer.indent();
    }

    /// Compose the final text: class body, then deferred array definitions,
    /// then #define lines. Consumers rely on this ordering so the macros
    /// textually follow the class.
    fn close_class(&mut self) -> String {
        let printer = self.buffers.main();
        printer.unindent();
        printer.unindent();
        printer.print_ln("};");
        printer.newline();

        let mut out = String::from(self.buffers.main_source());
        out.push_str(self.buffers.array_init_source());
        out.push('\n');
        for define in self.buffers.defines() {
            out.push_str(define);
            out.push('\n');
        }
        out
    }

    /// Classify a field and emit it. Exactly one of the three rules applies.
    fn field_declaration(&mut self, field: &FieldDecl) -> TranslateResult<()> {
        let Some(declarator) = field.variables.first() else {
            // a field with no declarator carries nothing to emit
            return Ok(());
        };

        if field.is_static() && field.is_final() {
            if let Some(kind) = scalar_primitive_kind(field) {
                return self.constant_field(field, declarator, kind);
            }
        }

        if self.is_deferred_array(field, declarator) {
            if !field.is_static() {
                return Err(TranslateError::UnsupportedInstanceArray {
                    class: self.class_name.clone(),
                    field: declarator.name.clone(),
                });
            }
            self.deferred_array_field(field, declarator);
            return Ok(());
        }

        self.default_field(field, declarator);
        Ok(())
    }

    /// Scalar constant rule: emit nothing to the class body, register the
    /// qualified name, and queue one `#define` line.
    fn constant_field(
        &mut self,
        field: &FieldDecl,
        declarator: &VariableDeclarator,
        kind: PrimitiveType,
    ) -> TranslateResult<()> {
        if kind != PrimitiveType::Int {
            return Err(TranslateError::UnsupportedConstantType {
                class: self.class_name.clone(),
                field: declarator.name.clone(),
                detail: kind.to_string(),
            });
        }
        if field.variables.len() != 1 {
            return Err(TranslateError::UnsupportedMultiDeclarator {
                class: self.class_name.clone(),
                field: declarator.name.clone(),
            });
        }
        let Some(init) = declarator.initializer.as_ref() else {
            return Err(TranslateError::UnsupportedConstantType {
                class: self.class_name.clone(),
                field: declarator.name.clone(),
                detail: "missing initializer".to_string(),
            });
        };

        let qualified = DefineTable::qualified_name(&self.class_name, &declarator.name);
        let define = self.types.define_name(&declarator.name);
        self.symtab.register(&qualified, &define)?;
        self.buffers
            .push_define(format!("#define {} {}", define, self.types.expr_text(init)));
        Ok(())
    }

    /// Static primitive-array rule, precondition already checked: the class
    /// body gets a const pointer declaration, the array-initializer stream
    /// gets the full out-of-class definition.
    fn deferred_array_field(&mut self, field: &FieldDecl, declarator: &VariableDeclarator) {
        self.buffers.select(Stream::ArrayInit);
        let element = self.types.element_text(&field.type_ref);
        let printer = self.buffers.printer();
        printer.print(&element);
        printer.print(" const ");
        printer.print(&self.class_name);
        printer.print("::");
        printer.print(&declarator.name);
        printer.print(" = ");
        if let Some(init) = declarator.initializer.as_ref() {
            printer.print(&self.types.expr_text(init));
        }
        printer.print_ln(";");
        self.buffers.select(Stream::Main);

        self.print_section(Visibility::of(&field.modifiers));
        let pointer = self.types.type_text(&field.type_ref);
        let printer = self.buffers.main();
        printer.print("static const ");
        printer.print(&pointer);
        printer.print(" ");
        printer.print(&declarator.name);
        printer.print_ln(";");
    }

    /// Default rule: ordinary in-class declaration
    fn default_field(&mut self, field: &FieldDecl, declarator: &VariableDeclarator) {
        self.print_section(Visibility::of(&field.modifiers));
        let type_text = self.types.type_text(&field.type_ref);
        let printer = self.buffers.main();
        if field.is_static() {
            printer.print("static ");
        }
        printer.print(&type_text);
        printer.print(" ");
        printer.print(&declarator.name);
        printer.print_ln(";");
    }

    /// Header mode prints the signature and a `;` in place of the body
    fn method_declaration(&mut self, method: &MethodDecl) {
        self.print_section(Visibility::of(&method.modifiers));
        let return_text = match &method.return_type {
            Some(ty) => self.types.type_text(ty),
            None => "void".to_string(),
        };
        let params: Vec<String> = method
            .parameters
            .iter()
            .map(|p| format!("{} {}", self.types.type_text(&p.type_ref), p.name))
            .collect();

        let printer = self.buffers.main();
        if method.is_static() {
            printer.print("static ");
        }
        printer.print(&return_text);
        printer.print(" ");
        printer.print(&method.name);
        printer.print("(");
        printer.print(&params.join(", "));
        printer.print(")");
        printer.print_ln(";");
    }

    /// Emit a visibility section label only when the section changes
    fn print_section(&mut self, visibility: Visibility) {
        if visibility == self.previous_visibility {
            return;
        }
        let label = match visibility {
            Visibility::Private => "private:",
            Visibility::Protected => "protected:",
            _ => "public:",
        };
        let printer = self.buffers.main();
        printer.unindent();
        printer.print_ln(label);
        printer.indent();
        self.previous_visibility = visibility;
    }

    fn is_deferred_array(&self, field: &FieldDecl, declarator: &VariableDeclarator) -> bool {
        field.type_ref.is_array()
            && field.type_ref.primitive_kind().is_some()
            && declarator.initializer.is_some()
            && !self.types.has_explicit_length(declarator)
    }
}

/// Primitive kind of a non-array declared type
fn scalar_primitive_kind(field: &FieldDecl) -> Option<PrimitiveType> {
    match field.type_ref.as_type_enum() {
        TypeEnum::Primitive(kind) => Some(kind),
        TypeEnum::Reference(_) | TypeEnum::Array { .. } => None,
    }
}
