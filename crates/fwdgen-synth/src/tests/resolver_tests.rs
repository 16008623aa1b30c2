use fwdgen_model::{Directive, SourceMember, TypeArena};

use super::fixtures::type_b;
use crate::collector::collect_surface;
use crate::resolver::resolve_directives;

fn b_surface(arena: &mut TypeArena) -> Vec<&fwdgen_model::Member> {
    let b = type_b(arena);
    collect_surface(arena, b).unwrap()
}

#[test]
fn test_empty_whitelist_applies_blacklist() {
    let mut arena = TypeArena::new();
    let surface = b_surface(&mut arena);
    let source = SourceMember::new("b", "B", vec![Directive::forward_all(&[])]);

    let candidates = resolve_directives(&source, &surface);
    assert!(
        !candidates.iter().any(|c| c.member.name == "GetType"),
        "blacklisted member selected"
    );
    assert!(candidates.iter().any(|c| c.member.name == "Foo"));
    assert!(candidates.iter().any(|c| c.member.name == "Bar"));
}

#[test]
fn test_explicit_whitelist_bypasses_blacklist() {
    let mut arena = TypeArena::new();
    let surface = b_surface(&mut arena);
    let source = SourceMember::new("b", "B", vec![Directive::forward_methods(&["GetType"])]);

    let candidates = resolve_directives(&source, &surface);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].member.name, "GetType");
}

#[test]
fn test_whitelist_selects_all_overloads_by_name() {
    let mut arena = TypeArena::new();
    let surface = b_surface(&mut arena);
    let source = SourceMember::new("b", "B", vec![Directive::forward_all(&["Foo", "Bar"])]);

    let candidates = resolve_directives(&source, &surface);
    let foo_count = candidates.iter().filter(|c| c.member.name == "Foo").count();
    assert_eq!(foo_count, 2, "name-based whitelist must select every overload");
    assert!(candidates.iter().any(|c| c.member.name == "Bar"));
    assert_eq!(candidates.len(), 3);
}

#[test]
fn test_methods_only_excludes_properties() {
    let mut arena = TypeArena::new();
    let surface = b_surface(&mut arena);
    let source = SourceMember::new("b", "B", vec![Directive::forward_methods(&[])]);

    let candidates = resolve_directives(&source, &surface);
    assert!(candidates.iter().all(|c| c.member.is_method()));
}

#[test]
fn test_properties_only_excludes_methods() {
    let mut arena = TypeArena::new();
    let surface = b_surface(&mut arena);
    let source = SourceMember::new("b", "B", vec![Directive::forward_properties(true, &[])]);

    let candidates = resolve_directives(&source, &surface);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].member.name, "Bar");
    assert!(candidates[0].include_setter);
}

#[test]
fn test_duplicate_name_across_levels_resolves_to_first_occurrence() {
    // B.ToString and object.ToString share a signature key; the derived
    // occurrence is the authoritative candidate.
    let mut arena = TypeArena::new();
    let surface = b_surface(&mut arena);
    let source = SourceMember::new("b", "B", vec![Directive::forward_methods(&["ToString"])]);

    let candidates = resolve_directives(&source, &surface);
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].member.flags.contains(fwdgen_model::MemberFlags::OVERRIDE));
}

#[test]
fn test_setter_flag_is_ored_across_directives() {
    let mut arena = TypeArena::new();
    let surface = b_surface(&mut arena);
    let source = SourceMember::new(
        "b",
        "B",
        vec![
            Directive::forward_properties(false, &["Bar"]),
            Directive::forward_properties(true, &["Bar"]),
        ],
    );

    let candidates = resolve_directives(&source, &surface);
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].include_setter);
}

#[test]
fn test_forward_all_does_not_request_setters() {
    let mut arena = TypeArena::new();
    let surface = b_surface(&mut arena);
    let source = SourceMember::new("b", "B", vec![Directive::forward_all(&["Bar"])]);

    let candidates = resolve_directives(&source, &surface);
    assert_eq!(candidates.len(), 1);
    assert!(!candidates[0].include_setter);
}
