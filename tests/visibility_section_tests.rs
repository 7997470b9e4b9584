use j2cpp::codegen::{generate_header, CppTypes, DefineTable};
use j2cpp::Config;
use j2cpp::ast::Modifier;

mod common;
use common::*;

fn translate(class: &j2cpp::ast::ClassDecl) -> String {
    let types = CppTypes::new(&Config::default());
    let mut symtab = DefineTable::new();
    generate_header(class, &types, &mut symtab).expect("translation failed")
}

#[test]
fn test_first_member_always_opens_a_section() {
    let header = translate(&class(
        "Tokenizer",
        vec![field(vec![], ty("int"), "state", None)],
    ));
    assert!(header.contains("  public:\n    int32_t state;\n"));
}

#[test]
fn test_label_emitted_only_when_section_changes() {
    // visibility sequence public, public, private, public: three labels, not four
    let header = translate(&class(
        "Tokenizer",
        vec![
            field(vec![Modifier::Public], ty("int"), "a", None),
            field(vec![Modifier::Public], ty("int"), "b", None),
            field(vec![Modifier::Private], ty("int"), "c", None),
            field(vec![Modifier::Public], ty("int"), "d", None),
        ],
    ));

    assert_eq!(header.matches("public:").count(), 2);
    assert_eq!(header.matches("private:").count(), 1);
}

#[test]
fn test_package_default_maps_to_public() {
    let header = translate(&class(
        "Tokenizer",
        vec![
            field(vec![Modifier::Public], ty("int"), "a", None),
            field(vec![], ty("int"), "b", None),
        ],
    ));
    // no section change between explicit public and package-default
    assert_eq!(header.matches("public:").count(), 1);
}

#[test]
fn test_protected_section_label() {
    let header = translate(&class(
        "Tokenizer",
        vec![field(vec![Modifier::Protected], ty("int"), "a", None)],
    ));
    assert!(header.contains("  protected:\n"));
}

#[test]
fn test_constant_field_leaves_section_state_untouched() {
    // the #define constant emits nothing to the class body, so the two
    // public fields around it share one label
    let header = translate(&class(
        "Tokenizer",
        vec![
            field(vec![Modifier::Public], ty("int"), "a", None),
            field(
                vec![Modifier::Private, Modifier::Static, Modifier::Final],
                ty("int"),
                "LIMIT",
                Some(int_lit(9)),
            ),
            field(vec![Modifier::Public], ty("int"), "b", None),
        ],
    ));

    assert_eq!(header.matches("public:").count(), 1);
    assert_eq!(header.matches("private:").count(), 0);
}

#[test]
fn test_labels_sit_one_level_out_from_members() {
    let header = translate(&class(
        "Tokenizer",
        vec![
            field(vec![Modifier::Private], ty("int"), "a", None),
            method(vec![Modifier::Public], None, "reset", vec![]),
        ],
    ));
    assert!(header.contains("  private:\n    int32_t a;\n"));
    assert!(header.contains("  public:\n    void reset();\n"));
}
