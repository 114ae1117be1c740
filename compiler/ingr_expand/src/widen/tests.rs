use super::*;
use ingr_ir::{Idx, VarRef};
use pretty_assertions::assert_eq;

struct Fixture {
    interner: StringInterner,
    pool: TypePool,
    object: Idx,
    a: Idx,
    foo: SigId,
}

/// `class A extends Object` with `A.foo()` and a few `Object` members.
fn fixture() -> Fixture {
    let interner = StringInterner::new();
    let mut pool = TypePool::new();
    let object = pool
        .declare_class(interner.intern("java.lang.Object"), &interner)
        .unwrap();
    let a = pool.declare_class(interner.intern("demo.A"), &interner).unwrap();
    pool.add_supertype(a, object).unwrap();

    let mut method = |owner, name: &str, params: Vec<Idx>, ret| {
        pool.declare_method(Signature::method(owner, interner.intern(name), params, ret))
            .unwrap()
    };
    let foo = method(a, "foo", vec![], Idx::VOID);
    method(object, "clone", vec![], object);
    method(object, "wait", vec![Idx::LONG, Idx::INT], Idx::VOID);
    method(object, "equals", vec![object], Idx::BOOLEAN);

    Fixture {
        interner,
        pool,
        object,
        a,
        foo,
    }
}

impl Fixture {
    fn receiver(&self, name: &str, ty: Idx, is_static: bool) -> Expr {
        Expr::Var(VarRef {
            name: self.interner.intern(name),
            ty,
            is_static,
        })
    }

    fn foo_call(&self, receiver: Expr) -> CallExpr {
        self.pool.build_call(Some(receiver), self.foo, vec![]).unwrap()
    }

    fn widen(&self, calls: &[CallExpr]) -> Widened {
        expand_members(calls, &self.pool, &self.interner, false)
    }

    fn rendered(&self, widened: &Widened) -> Vec<String> {
        let printer = Printer::new(&self.pool, &self.interner);
        widened
            .calls
            .iter()
            .map(|call| printer.render_call(call))
            .collect()
    }
}

#[test]
fn widens_static_receiver_to_inherited_members() {
    let f = fixture();
    let call = f.foo_call(f.receiver("a", f.a, true));
    let widened = f.widen(&[call]);
    assert_eq!(
        f.rendered(&widened),
        vec![
            "a.foo()",
            "a.clone()",
            "a.wait(_long_0, _int_1)",
            "a.equals(_Object_0)",
        ]
    );
    assert_eq!(widened.skipped_receivers, 0);
    assert_eq!(widened.skipped_signatures, 0);
}

#[test]
fn local_receiver_takes_part_in_canonical_naming() {
    let f = fixture();
    let call = f.foo_call(f.receiver("a", f.a, false));
    let rendered = f.rendered(&f.widen(&[call]));
    // Zero-arg members keep the receiver as written.
    assert!(rendered.contains(&"a.clone()".to_owned()));
    assert!(rendered.contains(&"_A_0.wait(_long_1, _int_2)".to_owned()));
}

#[test]
fn placeholders_never_share_the_receiver_name() {
    let f = fixture();
    let call = f.foo_call(f.receiver("var_0", f.a, false));
    let rendered = f.rendered(&f.widen(&[call]));
    assert_eq!(
        rendered,
        vec![
            "var_0.foo()",
            "var_0.clone()",
            "_A_0.wait(_long_1, _int_2)",
            "_A_0.equals(_Object_1)",
        ]
    );
}

#[test]
fn placeholder_names_skip_taken_suffixes() {
    let f = fixture();
    let taken: FxHashSet<Name> = ["var_0", "var_0_1"]
        .into_iter()
        .map(|name| f.interner.intern(name))
        .collect();
    let name = placeholder_name(0, &taken, &f.interner);
    assert_eq!(f.interner.lookup(name), "var_0_2");
    let name = placeholder_name(1, &taken, &f.interner);
    assert_eq!(f.interner.lookup(name), "var_1");
}

#[test]
fn arity_always_matches_signature() {
    let f = fixture();
    let widened = f.widen(&[f.foo_call(f.receiver("a", f.a, false))]);
    for call in &widened.calls {
        assert_eq!(call.args.len(), f.pool.signature(call.sig).unwrap().arity());
    }
    assert_eq!(widened.calls.len(), 4);
}

#[test]
fn identical_receiver_and_signature_widen_once() {
    let mut f = fixture();
    let bar = f
        .pool
        .declare_method(Signature::method(
            f.a,
            f.interner.intern("bar"),
            vec![Idx::INT],
            Idx::VOID,
        ))
        .unwrap();
    let receiver = f.receiver("a", f.a, true);
    let with_x = f
        .pool
        .build_call(Some(receiver.clone()), bar, vec![Expr::var(f.interner.intern("x"), Idx::INT)])
        .unwrap();
    let with_y = f
        .pool
        .build_call(Some(receiver), bar, vec![Expr::var(f.interner.intern("y"), Idx::INT)])
        .unwrap();

    let once = f.widen(&[with_x.clone()]);
    let twice = f.widen(&[with_x, with_y]);
    assert_eq!(f.rendered(&once), f.rendered(&twice));
}

#[test]
fn unresolved_receiver_is_skipped() {
    let f = fixture();
    let resolved = f.foo_call(f.receiver("a", f.a, true));
    let unresolved = f.foo_call(f.receiver("mystery", Idx::NONE, false));
    let primitive = f.foo_call(f.receiver("n", Idx::INT, false));

    let widened = f.widen(&[unresolved, primitive, resolved]);
    assert_eq!(widened.skipped_receivers, 2);
    assert_eq!(widened.calls.len(), 4);
}

#[test]
fn wildcard_parameters_are_erased_or_skipped() {
    let mut f = fixture();
    let bounded = f.pool.wildcard(Some(f.a), &f.interner);
    let unbounded = f.pool.wildcard(None, &f.interner);
    f.pool
        .declare_method(Signature::method(
            f.a,
            f.interner.intern("accept"),
            vec![bounded],
            Idx::VOID,
        ))
        .unwrap();
    f.pool
        .declare_method(Signature::method(
            f.a,
            f.interner.intern("reject"),
            vec![Idx::INT, unbounded],
            Idx::VOID,
        ))
        .unwrap();

    let widened = f.widen(&[f.foo_call(f.receiver("a", f.a, true))]);
    let rendered = f.rendered(&widened);
    assert!(rendered.contains(&"a.accept(_A_0)".to_owned()));
    assert!(!rendered.iter().any(|text| text.contains("reject")));
    assert_eq!(widened.skipped_signatures, 1);
}

#[test]
fn unplaceable_parameter_reports_its_position() {
    let mut f = fixture();
    let unbounded = f.pool.wildcard(None, &f.interner);
    let reject = f
        .pool
        .declare_method(Signature::method(
            f.a,
            f.interner.intern("reject"),
            vec![Idx::INT, unbounded],
            Idx::VOID,
        ))
        .unwrap();
    let call = f.foo_call(f.receiver("a", f.a, true));
    let sig = f.pool.signature(reject).unwrap();
    assert_eq!(
        arg_call(&call, reject, sig, &f.pool, &f.interner),
        Err(ExpandError::NoPlaceholder {
            sig: reject,
            index: 1,
            param: unbounded,
        })
    );
}

#[test]
fn zero_arg_members_carry_type_args() {
    let mut f = fixture();
    let t = f.pool.type_param(f.interner.intern("T"), None);
    let empty = f
        .pool
        .declare_method(
            Signature::method(f.a, f.interner.intern("empty"), vec![], f.object)
                .with_type_args(vec![t]),
        )
        .unwrap();

    let call = f.foo_call(f.receiver("a", f.a, true));
    let widened = f.widen(&[call]);
    let generic = widened
        .calls
        .iter()
        .find(|call| call.sig == empty)
        .unwrap();
    assert_eq!(generic.type_args, vec![t]);
    assert!(f.rendered(&widened).contains(&"a.<T>empty()".to_owned()));
}

#[test]
fn receiver_less_calls_widen_to_static_members() {
    let mut f = fixture();
    let create = f
        .pool
        .declare_method(
            Signature::method(f.a, f.interner.intern("create"), vec![], f.a).into_static(),
        )
        .unwrap();
    f.pool
        .declare_method(
            Signature::method(f.a, f.interner.intern("parse"), vec![Idx::INT], f.a)
                .into_static(),
        )
        .unwrap();

    let call = f.pool.build_call(None, create, vec![]).unwrap();
    assert_eq!(
        f.rendered(&f.widen(&[call])),
        vec!["A.create()", "A.parse(_int_0)"]
    );
}

#[test]
fn overridden_members_collapse_by_text() {
    let mut f = fixture();
    for owner in [f.a, f.object] {
        f.pool
            .declare_method(Signature::method(
                owner,
                f.interner.intern("toString"),
                vec![],
                f.object,
            ))
            .unwrap();
    }
    let rendered = f.rendered(&f.widen(&[f.foo_call(f.receiver("a", f.a, true))]));
    let count = rendered.iter().filter(|text| *text == "a.toString()").count();
    assert_eq!(count, 1);
}

#[test]
fn parallel_matches_sequential() {
    let f = fixture();
    let calls = vec![
        f.foo_call(f.receiver("a", f.a, true)),
        f.foo_call(f.receiver("b", f.a, false)),
        f.foo_call(f.receiver("mystery", Idx::NONE, false)),
    ];
    let sequential = expand_members(&calls, &f.pool, &f.interner, false);
    let parallel = expand_members(&calls, &f.pool, &f.interner, true);
    assert_eq!(sequential, parallel);
}
