use super::*;
use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;
use sig_ir::InterfaceName;

fn module(s: &str) -> ModuleName {
    ModuleName::parse(s).unwrap()
}

fn ns(s: &str) -> Namespace {
    Namespace::parse(s).unwrap()
}

fn table(keys: &[&str]) -> FxHashMap<ModuleName, String> {
    keys.iter()
        .map(|key| (module(key), (*key).to_owned()))
        .collect()
}

#[test]
fn lexical_innermost_wins() {
    let table = table(&["::A::B::C::Object", "::A::B::Object", "::Object"]);
    let lookup = |current: &str| {
        lexical_lookup(&module("Object"), &ns(current), |key| {
            table.get(key).map(String::as_str)
        })
    };

    assert_eq!(lookup("::A::B::C"), Some("::A::B::C::Object"));
    assert_eq!(lookup("::A::B"), Some("::A::B::Object"));
    assert_eq!(lookup("::A"), Some("::Object"));
    assert_eq!(lookup("::"), Some("::Object"));
}

#[test]
fn lexical_probes_innermost_first_and_stops() {
    let table = table(&["::A::X"]);
    let mut probed = Vec::new();
    let found = lexical_lookup(&module("X"), &ns("::A::B::C"), |key| {
        probed.push(key.to_string());
        table.get(key).map(String::as_str)
    });

    assert_eq!(found, Some("::A::X"));
    assert_eq!(probed, vec!["::A::B::C::X", "::A::B::X", "::A::X"]);
}

#[test]
fn lexical_absolute_skips_search() {
    let table = table(&["::A::Object"]);
    let mut probes = 0;
    let found = lexical_lookup(&module("::Object"), &ns("::A"), |key| {
        probes += 1;
        table.get(key).map(String::as_str)
    });

    assert_eq!(found, None);
    assert_eq!(probes, 1);
}

#[test]
fn lexical_relative_path_name() {
    let table = table(&["::A::B::C"]);
    let found = lexical_lookup(&module("B::C"), &ns("::A::Z"), |key| {
        table.get(key).map(String::as_str)
    });
    assert_eq!(found, Some("::A::B::C"));
}

#[test]
fn lexical_relative_current_module_is_anchored() {
    let table = table(&["::A::Object"]);
    let found = lexical_lookup(&module("Object"), &ns("A"), |key| {
        table.get(key).map(String::as_str)
    });
    assert_eq!(found, Some("::A::Object"));
}

#[test]
fn qualified_has_no_outward_search() {
    let mut table: FxHashMap<InterfaceName, &str> = FxHashMap::default();
    table.insert(InterfaceName::parse("::A::B::_I").unwrap(), "deep");

    let name = InterfaceName::parse("_I").unwrap();
    let (key, found) = qualified_lookup(&name, &ns("::A::B"), |key| table.get(key).copied());
    assert_eq!(key.to_string(), "::A::B::_I");
    assert_eq!(found, Some("deep"));

    let (key, found) = qualified_lookup(&name, &ns("::A::B::C"), |key| table.get(key).copied());
    assert_eq!(key.to_string(), "::A::B::C::_I");
    assert_eq!(found, None);

    let (_, found) = qualified_lookup(&name, &ns("::A"), |key| table.get(key).copied());
    assert_eq!(found, None);
}

#[test]
fn qualified_absolute_and_relative_namespace() {
    let mut table: FxHashMap<InterfaceName, &str> = FxHashMap::default();
    table.insert(InterfaceName::parse("::S::_A").unwrap(), "s");

    let absolute = InterfaceName::parse("::S::_A").unwrap();
    let (_, found) = qualified_lookup(&absolute, &ns("::Other"), |key| table.get(key).copied());
    assert_eq!(found, Some("s"));

    // A relative lookup namespace is anchored at the root.
    let relative = InterfaceName::parse("_A").unwrap();
    let (key, found) = qualified_lookup(&relative, &ns("S"), |key| table.get(key).copied());
    assert_eq!(key, absolute);
    assert_eq!(found, Some("s"));
}
