use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn ns(s: &str) -> Namespace {
    Namespace::parse(s).unwrap()
}

fn module(s: &str) -> ModuleName {
    ModuleName::parse(s).unwrap()
}

#[test]
fn parse_absolute_module_name() {
    let name = module("::A::B::C");
    assert!(name.is_absolute());
    assert_eq!(name.namespace(), &ns("::A::B"));
    assert_eq!(name.name(), &Symbol::from("C"));
}

#[test]
fn parse_relative_module_name() {
    let name = module("B::C");
    assert!(name.is_relative());
    assert_eq!(name.namespace(), &ns("B"));

    let bare = module("Object");
    assert!(bare.is_relative());
    assert_eq!(bare.namespace(), &Namespace::empty());
}

#[test]
fn parse_top_level_absolute() {
    let name = module("::Object");
    assert_eq!(name.namespace(), &Namespace::root());
    assert_eq!(name.to_string(), "::Object");
}

#[test]
fn parse_rejects_empty_name() {
    assert_eq!(
        ModuleName::parse("A::"),
        Err(NameParseError::EmptyName {
            input: "A::".to_owned()
        })
    );
    assert!(ModuleName::parse("").is_err());
    assert!(ModuleName::parse("::").is_err());
    assert!(ModuleName::parse("A::::B").is_err());
}

#[test]
fn parse_rejects_stray_colons() {
    assert_eq!(
        ModuleName::parse("A:::B"),
        Err(NameParseError::EmptySegment {
            input: "A:::B".to_owned()
        })
    );
    assert!(ModuleName::parse(":::A").is_err());
    assert!(ModuleName::parse("::A:").is_err());
    assert!(InterfaceName::parse("::S:::_I").is_err());
}

#[test]
fn identity_is_structural() {
    assert_eq!(module("::A::B"), ModuleName::new(ns("::A"), "B"));
    assert_ne!(module("::A::B"), module("A::B"));
    assert_ne!(module("::A::B"), module("::A::C"));
    assert_ne!(module("::A::B"), module("::X::B"));
}

#[test]
fn to_absolute_anchors_at_root() {
    assert_eq!(module("A::B").to_absolute(), module("::A::B"));
    assert_eq!(module("::A::B").to_absolute(), module("::A::B"));
}

#[test]
fn in_namespace_qualifies_relative_names() {
    assert_eq!(module("C").in_namespace(&ns("::A::B")), module("::A::B::C"));
    assert_eq!(module("B::C").in_namespace(&ns("::A")), module("::A::B::C"));
    assert_eq!(module("::C").in_namespace(&ns("::A::B")), module("::C"));
    assert_eq!(module("C").in_namespace(&Namespace::root()), module("::C"));
}

#[test]
fn module_name_to_namespace() {
    assert_eq!(module("::A::B").to_namespace(), ns("::A::B"));
    assert_eq!(module("::Object").to_namespace(), ns("::Object"));
}

#[test]
fn interface_names() {
    let name = InterfaceName::parse("::StrongJSON::_A").unwrap();
    assert_eq!(name.namespace(), &ns("::StrongJSON"));
    assert!(name.is_conventional());

    let name = InterfaceName::new(Namespace::empty(), "ToS");
    assert!(!name.is_conventional());
}

#[test]
fn debug_carries_family_label() {
    assert_eq!(format!("{:?}", module("::A")), "ModuleName(::A)");
    assert_eq!(
        format!("{:?}", InterfaceName::parse("_A").unwrap()),
        "InterfaceName(_A)"
    );
    assert_eq!(
        format!("{:?}", AliasName::parse("foo").unwrap()),
        "AliasName(foo)"
    );
}

fn segment() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9_]{0,6}"
}

proptest! {
    #[test]
    fn display_round_trips(
        segments in prop::collection::vec(segment(), 0..4),
        last in segment(),
        absolute in any::<bool>()
    ) {
        let name = ModuleName::new(
            Namespace::new(segments.into_iter().map(Symbol::from), absolute),
            last,
        );
        prop_assert_eq!(ModuleName::parse(&name.to_string()), Ok(name));
    }
}
