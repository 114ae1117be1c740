use super::*;
use ingr_ir::LitValue;
use pretty_assertions::assert_eq;

struct Fixture {
    interner: StringInterner,
    pool: TypePool,
    object: Idx,
    a: Idx,
}

/// `class A extends java.lang.Object`
fn fixture() -> Fixture {
    let interner = StringInterner::new();
    let mut pool = TypePool::new();
    let object = pool
        .declare_class(interner.intern("java.lang.Object"), &interner)
        .unwrap();
    let a = pool.declare_class(interner.intern("demo.A"), &interner).unwrap();
    pool.add_supertype(a, object).unwrap();
    Fixture {
        interner,
        pool,
        object,
        a,
    }
}

fn method(f: &mut Fixture, owner: Idx, name: &str, params: Vec<Idx>, ret: Idx) -> SigId {
    let sig = Signature::method(owner, f.interner.intern(name), params, ret);
    f.pool.declare_method(sig).unwrap()
}

#[test]
fn primitives_have_no_entry_but_a_kind() {
    let f = fixture();
    assert_eq!(f.pool.kind(Idx::INT), Ok(&TypeKind::Primitive));
    assert_eq!(
        f.pool.kind(Idx::NONE),
        Err(TypeError::UnresolvedType { ty: Idx::NONE })
    );
}

#[test]
fn duplicate_class_is_rejected() {
    let mut f = fixture();
    let err = f
        .pool
        .declare_class(f.interner.intern("demo.A"), &f.interner)
        .unwrap_err();
    assert_eq!(
        err,
        TypeError::DuplicateType {
            name: "demo.A".to_owned()
        }
    );
    assert_eq!(f.pool.lookup_class(f.interner.intern("demo.A")), Some(f.a));
}

#[test]
fn supertype_must_be_class() {
    let mut f = fixture();
    assert_eq!(
        f.pool.add_supertype(f.a, Idx::INT),
        Err(TypeError::NotAClass { ty: Idx::INT })
    );
    assert_eq!(
        f.pool.add_supertype(Idx::INT, f.object),
        Err(TypeError::NotAClass { ty: Idx::INT })
    );
}

#[test]
fn signatures_are_interned_structurally() {
    let mut f = fixture();
    let a = f.a;
    let first = method(&mut f, a, "foo", vec![Idx::INT], Idx::VOID);
    let second = method(&mut f, a, "foo", vec![Idx::INT], Idx::VOID);
    let other = method(&mut f, a, "foo", vec![Idx::LONG], Idx::VOID);
    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_eq!(f.pool.reachable_members(f.a).unwrap(), vec![first, other]);
}

#[test]
fn reachable_members_include_inherited() {
    let mut f = fixture();
    let (a, object) = (f.a, f.object);
    let clone = method(&mut f, object, "clone", vec![], object);
    let wait = method(&mut f, object, "wait", vec![Idx::LONG, Idx::INT], Idx::VOID);
    let foo = method(&mut f, a, "foo", vec![], Idx::VOID);
    assert_eq!(f.pool.reachable_members(f.a).unwrap(), vec![foo, clone, wait]);
    assert_eq!(f.pool.reachable_members(f.object).unwrap(), vec![clone, wait]);
}

#[test]
fn reachable_members_tolerate_cycles() {
    let mut f = fixture();
    let b = f
        .pool
        .declare_class(f.interner.intern("demo.B"), &f.interner)
        .unwrap();
    f.pool.add_supertype(b, f.a).unwrap();
    f.pool.add_supertype(f.a, b).unwrap();
    let bar = method(&mut f, b, "bar", vec![], Idx::INT);
    let members = f.pool.reachable_members(f.a).unwrap();
    assert_eq!(members, vec![bar]);
}

#[test]
fn reachable_members_through_bounds() {
    let mut f = fixture();
    let a = f.a;
    let foo = method(&mut f, a, "foo", vec![], Idx::VOID);
    let t = f.pool.type_param(f.interner.intern("T"), Some(f.a));
    assert_eq!(f.pool.reachable_members(t).unwrap(), vec![foo]);

    let unbounded = f.pool.wildcard(None, &f.interner);
    assert_eq!(
        f.pool.reachable_members(unbounded),
        Err(TypeError::UnresolvedType { ty: unbounded })
    );
    assert_eq!(
        f.pool.reachable_members(Idx::INT),
        Err(TypeError::NotAClass { ty: Idx::INT })
    );
}

#[test]
fn simple_names() {
    let mut f = fixture();
    let bounded = f.pool.wildcard(Some(f.a), &f.interner);
    let unbounded = f.pool.wildcard(None, &f.interner);
    let t = f.pool.type_param(f.interner.intern("T"), None);
    let name = |ty| f.pool.simple_name(ty, &f.interner).unwrap().into_owned();

    assert_eq!(name(Idx::LONG), "long");
    assert_eq!(name(f.object), "Object");
    assert_eq!(name(f.a), "A");
    assert_eq!(name(bounded), "? extends A");
    assert_eq!(name(unbounded), "?");
    assert_eq!(name(t), "T");
}

#[test]
fn placeholder_types_erase_bounds() {
    let mut f = fixture();
    let bounded = f.pool.wildcard(Some(f.a), &f.interner);
    let unbounded = f.pool.wildcard(None, &f.interner);
    let t = f.pool.type_param(f.interner.intern("T"), Some(f.object));
    let u = f.pool.type_param(f.interner.intern("U"), None);

    assert_eq!(f.pool.placeholder_type(Idx::INT), Some(Idx::INT));
    assert_eq!(f.pool.placeholder_type(f.a), Some(f.a));
    assert_eq!(f.pool.placeholder_type(bounded), Some(f.a));
    assert_eq!(f.pool.placeholder_type(t), Some(f.object));
    assert_eq!(f.pool.placeholder_type(unbounded), None);
    assert_eq!(f.pool.placeholder_type(u), None);
    assert_eq!(f.pool.placeholder_type(Idx::VOID), None);
    assert_eq!(f.pool.placeholder_type(Idx::NONE), None);
}

#[test]
fn type_of_expressions() {
    let mut f = fixture();
    let a = f.a;
    let ready = method(&mut f, a, "isReady", vec![], Idx::BOOLEAN);
    let recv = Expr::var(f.interner.intern("a"), f.a);
    let call = f.pool.build_call(Some(recv), ready, vec![]).unwrap();

    assert_eq!(f.pool.type_of(&Expr::Call(call.clone())), Ok(Idx::BOOLEAN));
    assert_eq!(f.pool.type_of(&Expr::not(Expr::Call(call))), Ok(Idx::BOOLEAN));
    assert_eq!(
        f.pool.type_of(&Expr::literal(LitValue::Long(1), Idx::LONG)),
        Ok(Idx::LONG)
    );
}

#[test]
fn build_call_rejects_unknown_signature() {
    let f = fixture();
    let sig = SigId::from_raw(99);
    assert_eq!(
        f.pool.build_call(None, sig, vec![]),
        Err(TypeError::UnknownSignature { sig })
    );
}

#[test]
#[should_panic(expected = "argument count must match")]
fn build_call_enforces_arity() {
    let mut f = fixture();
    let a = f.a;
    let foo = method(&mut f, a, "foo", vec![Idx::INT], Idx::VOID);
    let _ = f.pool.build_call(None, foo, vec![]);
}
