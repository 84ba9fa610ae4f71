use super::*;

fn atom(name: &str) -> TypeExpr {
    TypeExpr::atom(name)
}

#[test]
fn atom_is_not_union() {
    assert!(atom("int").is_atom());
    assert!(!atom("int").is_union());
    // Builtin identifiers are atoms like any other.
    assert!(!atom("str").is_union());
    assert!(!atom("NoneType").is_union());
}

#[test]
fn union_is_union() {
    let u = TypeExpr::union(vec![atom("int"), atom("str")]);
    assert!(u.is_union());
    assert!(!u.is_atom());
}

#[test]
#[should_panic(expected = "at least one alternative")]
fn empty_union_panics() {
    TypeExpr::union(vec![]);
}

#[test]
fn builtin_atoms() {
    assert!(atom("int").is_builtin());
    assert!(atom("frozenset").is_builtin());
    assert!(atom("NoneType").is_builtin());
    assert!(!atom("MyClass").is_builtin());
    // Exact match only: no case folding, no aliases.
    assert!(!atom("Int").is_builtin());
    assert!(!atom("string").is_builtin());
}

#[test]
fn unions_are_never_builtin() {
    let u = TypeExpr::union(vec![atom("int"), atom("str")]);
    assert!(!u.is_builtin());
}

#[test]
fn optional_unions() {
    let opt = TypeExpr::union(vec![atom("int"), Builtin::NoneType.into()]);
    assert!(opt.is_optional());

    let not_opt = TypeExpr::union(vec![atom("int"), atom("str")]);
    assert!(!not_opt.is_optional());

    // A bare NoneType atom is not optional, and neither is a union whose
    // NoneType sits below a nested union (direct alternatives only).
    assert!(!atom("NoneType").is_optional());
    let nested = TypeExpr::union(vec![
        TypeExpr::union(vec![atom("int"), atom("NoneType")]),
        atom("str"),
    ]);
    assert!(!nested.is_optional());
}

#[test]
fn from_builtin() {
    assert_eq!(TypeExpr::from(Builtin::Int), atom("int"));
    assert_eq!(TypeExpr::from(Builtin::NoneType), atom("NoneType"));
}

#[test]
fn equality_is_structural() {
    assert_eq!(atom("int"), atom("int"));
    assert_ne!(atom("int"), atom("str"));

    let a = TypeExpr::union(vec![atom("int"), atom("str")]);
    let b = TypeExpr::union(vec![atom("int"), atom("str")]);
    let c = TypeExpr::union(vec![atom("str"), atom("int")]);
    assert_eq!(a, b);
    assert_ne!(a, c); // insertion order is part of the tree
    assert_ne!(atom("int"), TypeExpr::union(vec![atom("int")]));
}

#[test]
fn type_expressions_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TypeExpr>();
}

#[test]
fn display_atom() {
    insta::assert_snapshot!(atom("int"), @"int");
}

#[test]
fn display_flat_union() {
    let u = TypeExpr::union(vec![atom("int"), atom("str"), atom("bool")]);
    insta::assert_snapshot!(u, @"int | str | bool");
}

#[test]
fn display_nested_union() {
    let u = TypeExpr::union(vec![
        TypeExpr::union(vec![atom("int"), atom("str")]),
        atom("bool"),
    ]);
    insta::assert_snapshot!(u, @"(int | str) | bool");
}
