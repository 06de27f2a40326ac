//! Integration tests for single-level section inheritance.

use cfgp::cfg::testing::{assert_doc, parse_str};
use cfgp::cfg::Diagnostic;

#[test]
fn child_receives_parent_entries() {
    let parser = parse_str("[parent]\na = 1\nb = 2\n[child] : parent\n");
    assert_doc(parser.document())
        .section("child", |s| {
            s.key_count(2).has("a", "1").has("b", "2");
        })
        .section("parent", |s| {
            s.key_count(2);
        });
}

#[test]
fn child_overrides_after_inheriting() {
    let parser = parse_str("[parent]\na = 1\n[child] : parent\na = 2\n");
    assert_doc(parser.document())
        .has("parent", "a", "1")
        .has("child", "a", "2");
}

#[test]
fn inheritance_is_a_snapshot_not_a_live_reference() {
    // [A] keyX=1, [B]:A, then [A] keyX=2: B keeps "1".
    let parser = parse_str("[A]\nkeyX = 1\n[B] : A\n[A]\nkeyX = 2\n");
    assert_doc(parser.document())
        .has("A", "keyX", "2")
        .has("B", "keyX", "1");
}

#[test]
fn inherited_values_get_fresh_provenance_lines() {
    let parser = parse_str("[parent]\na = 1\n[child] : parent\n");
    assert_doc(parser.document())
        .has_at_line("parent", "a", "1", 2)
        .has_at_line("child", "a", "1", 3);
}

#[test]
fn missing_parent_still_creates_the_section_context() {
    let parser = parse_str("[B] : Unknown\n");
    assert!(parser.section_exists("B"));
    assert_eq!(parser.key_count("B"), 0);
    assert_eq!(
        parser.diagnostics(),
        &[Diagnostic::MissingParent {
            parent: "Unknown".to_string(),
            line: 1
        }]
    );
}

#[test]
fn forward_reference_to_a_later_parent_is_an_error() {
    // The parent must already exist when the inherit clause is processed.
    let parser = parse_str("[child] : parent\n[parent]\na = 1\n");
    assert_doc(parser.document()).section("child", |s| {
        s.key_count(0);
    });
    assert!(matches!(
        parser.diagnostics(),
        [Diagnostic::MissingParent { .. }]
    ));
}

#[test]
fn spaces_around_inherit_clause_are_irrelevant() {
    let parser = parse_str("[parent]\na = 1\n[child]:parent\n");
    assert_doc(parser.document()).has("child", "a", "1");
}

#[test]
fn inherit_then_extend() {
    let parser = parse_str("[base]\nx = 1\n[full] : base\ny = 2\n");
    assert_doc(parser.document()).section("full", |s| {
        s.key_count(2).has("x", "1").has("y", "2");
    });
}
