use super::*;
use crate::{Error, TypeExpr};

fn atom(name: &str) -> TypeExpr {
    TypeExpr::atom(name)
}

fn union(alternatives: Vec<TypeExpr>) -> TypeExpr {
    TypeExpr::union(alternatives)
}

#[test]
fn strip_requires_a_union() {
    let err = strip(&atom("int"), vec![atom("str")]).unwrap_err();
    assert_eq!(err, Error::InvalidType(atom("int")));
}

#[test]
fn strip_one_listed_alternative() {
    let u = union(vec![atom("int"), atom("str"), atom("bool")]);
    let stripped = strip(&u, vec![atom("str")]).unwrap();
    assert_eq!(stripped, union(vec![atom("int"), atom("bool")]));
}

#[test]
fn single_survivor_collapses() {
    let u = union(vec![atom("int"), atom("str")]);
    let stripped = strip(&u, vec![atom("str")]).unwrap();
    assert_eq!(stripped, atom("int"));
}

#[test]
fn strip_with_a_single_expression() {
    // A bare atom routes to StripSet::One.
    let u = union(vec![atom("int"), atom("str"), atom("bool")]);
    let stripped = strip(&u, atom("bool")).unwrap();
    assert_eq!(stripped, union(vec![atom("int"), atom("str")]));
}

#[test]
fn strip_with_a_union_removal_set() {
    // A union routes to StripSet::Union and contributes its alternatives.
    let u = union(vec![atom("int"), atom("str"), atom("bool")]);
    let removal = union(vec![atom("str"), atom("bool")]);
    assert_eq!(strip(&u, removal).unwrap(), atom("int"));
}

#[test]
fn union_removal_set_must_be_a_union() {
    let u = union(vec![atom("int"), atom("str")]);
    let err = strip(&u, StripSet::Union(atom("str"))).unwrap_err();
    assert_eq!(err, Error::InvalidStripSet(atom("str")));
}

#[test]
fn empty_removal_set_keeps_everything() {
    let u = union(vec![atom("int"), atom("str")]);
    assert_eq!(strip(&u, vec![]).unwrap(), u);
}

#[test]
fn singleton_union_with_empty_set_collapses() {
    // The sole alternative is exposed directly, not wrapped again.
    let u = union(vec![atom("MyClass")]);
    assert_eq!(strip(&u, vec![]).unwrap(), atom("MyClass"));
}

#[test]
fn stripping_every_alternative_fails() {
    let u = union(vec![atom("int"), atom("str")]);
    let all = flatten(&u, FlattenMode::Shallow).unwrap();
    let err = strip(&u, all).unwrap_err();
    assert_eq!(err, Error::EmptyStrip(u));
}

#[test]
fn stripping_is_shallow() {
    // `int` inside the nested union is out of reach.
    let nested = union(vec![atom("int"), atom("str")]);
    let u = union(vec![nested.clone(), atom("bool")]);
    assert_eq!(strip(&u, vec![atom("int")]).unwrap(), u);

    // The nested union itself is a direct alternative, compared whole.
    assert_eq!(strip(&u, vec![nested]).unwrap(), atom("bool"));
}

#[test]
fn duplicates_survive_together() {
    let u = union(vec![atom("int"), atom("int"), atom("str")]);
    let stripped = strip(&u, vec![atom("str")]).unwrap();
    assert_eq!(stripped, union(vec![atom("int"), atom("int")]));
}

#[test]
fn survivors_keep_their_order() {
    let u = union(vec![atom("bool"), atom("int"), atom("str"), atom("float")]);
    let stripped = strip(&u, vec![atom("int")]).unwrap();
    assert_eq!(
        stripped,
        union(vec![atom("bool"), atom("str"), atom("float")])
    );
}

#[test]
fn strip_optional_unwraps() {
    let u = union(vec![atom("int"), atom("NoneType")]);
    assert_eq!(strip_optional(&u).unwrap(), atom("int"));
}

#[test]
fn strip_optional_without_none_is_identity() {
    let u = union(vec![atom("int"), atom("str")]);
    assert_eq!(strip_optional(&u).unwrap(), u);
}

#[test]
fn strip_optional_keeps_wide_unions_together() {
    let u = union(vec![atom("int"), atom("str"), atom("NoneType")]);
    assert_eq!(
        strip_optional(&u).unwrap(),
        union(vec![atom("int"), atom("str")])
    );
}
