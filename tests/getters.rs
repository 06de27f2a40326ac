//! Integration tests for the typed accessor layer: conversions and
//! fallback-to-default semantics.

use cfgp::cfg::testing::parse_str;

const SOURCE: &str = "\
[numbers]
int = 42
negative = -7
float = 3.5
not_a_number = forty-two

[flags]
on = on
yes = yes
one = 1
off = off
no = no
zero = 0
maybe = maybe

[text]
plain = hello
quoted = \"two words\"

[vectors]
pair = 640,480
triple = 0.1, 0.2, 0.3
bad_arity = 1,2
bad_component = 1,x,3
";

#[test]
fn numeric_conversions() {
    let parser = parse_str(SOURCE);
    assert_eq!(parser.get::<i32>("numbers", "int", 0), 42);
    assert_eq!(parser.get::<i64>("numbers", "negative", 0), -7);
    assert_eq!(parser.get::<u8>("numbers", "int", 0), 42);
    assert_eq!(parser.get::<f64>("numbers", "float", 0.0), 3.5);
}

#[test]
fn conversion_failure_returns_the_default() {
    let parser = parse_str(SOURCE);
    assert_eq!(parser.get::<i32>("numbers", "not_a_number", -1), -1);
    // A negative value does not fit an unsigned type.
    assert_eq!(parser.get::<u32>("numbers", "negative", 9), 9);
}

#[test]
fn missing_entries_return_the_default() {
    let parser = parse_str(SOURCE);
    assert_eq!(parser.get::<i32>("numbers", "absent", 5), 5);
    assert_eq!(parser.get::<i32>("no_such_section", "int", 5), 5);
    assert_eq!(parser.get_str("text", "absent", "fallback"), "fallback");
    assert!(parser.get_bool("flags", "absent", true));
}

#[test]
fn boolean_spellings() {
    let parser = parse_str(SOURCE);
    for key in ["on", "yes", "one"] {
        assert!(parser.get_bool("flags", key, false), "key {}", key);
    }
    for key in ["off", "no", "zero"] {
        assert!(!parser.get_bool("flags", key, true), "key {}", key);
    }
    // Unknown spelling falls back to the default.
    assert!(parser.get_bool("flags", "maybe", true));
    assert!(!parser.get_bool("flags", "maybe", false));
}

#[test]
fn string_values() {
    let parser = parse_str(SOURCE);
    assert_eq!(parser.get_str("text", "plain", ""), "hello");
    assert_eq!(parser.get_str("text", "quoted", ""), "two words");
}

#[test]
fn vector_conversions() {
    let parser = parse_str(SOURCE);
    assert_eq!(
        parser.get_vec::<u32, 2>("vectors", "pair", [0, 0]),
        [640, 480]
    );
    // Spaces after the commas are dropped by the scanner, not the getter.
    assert_eq!(
        parser.get_vec::<f32, 3>("vectors", "triple", [0.0; 3]),
        [0.1, 0.2, 0.3]
    );
}

#[test]
fn vector_arity_mismatch_returns_the_default() {
    let parser = parse_str(SOURCE);
    assert_eq!(
        parser.get_vec::<i32, 3>("vectors", "bad_arity", [7, 8, 9]),
        [7, 8, 9]
    );
    assert_eq!(
        parser.get_vec::<i32, 2>("vectors", "triple", [1, 2]),
        [1, 2]
    );
}

#[test]
fn vector_component_failure_returns_the_default() {
    let parser = parse_str(SOURCE);
    assert_eq!(
        parser.get_vec::<i32, 3>("vectors", "bad_component", [4, 5, 6]),
        [4, 5, 6]
    );
}
