//! Property tests for the engine's universal invariants.

use mukanren::prelude::*;
use mukanren::{run, seq};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum RawTerm {
    Var(usize),
    Int(i64),
    Seq(Vec<RawTerm>),
}

fn ground_strategy() -> impl Strategy<Value = RawTerm> {
    let leaf = (-3i64..4).prop_map(RawTerm::Int);
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(RawTerm::Seq)
    })
}

fn raw_term_strategy() -> impl Strategy<Value = RawTerm> {
    let leaf = prop_oneof![
        (0usize..6).prop_map(RawTerm::Var),
        (-3i64..4).prop_map(RawTerm::Int),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(RawTerm::Seq)
    })
}

/// Bindings whose values are ground or reference strictly larger variable
/// ids, so the resulting substitution is chain-rich but acyclic.
fn chain_bindings() -> impl Strategy<Value = Vec<(usize, RawTerm)>> {
    prop::collection::vec(
        (0usize..5).prop_flat_map(|id| {
            (
                Just(id),
                prop_oneof![
                    ground_strategy(),
                    ((id + 1)..(id + 3)).prop_map(RawTerm::Var),
                ],
            )
        }),
        0..5,
    )
}

fn ground_bindings() -> impl Strategy<Value = Vec<(usize, RawTerm)>> {
    prop::collection::vec((0usize..6, ground_strategy()), 0..5)
}

fn build(raw: &RawTerm) -> Term {
    match raw {
        RawTerm::Var(id) => LVar::new(*id).into(),
        RawTerm::Int(n) => (*n).into(),
        RawTerm::Seq(items) => Term::seq(items.iter().map(build).collect()),
    }
}

fn build_smap(bindings: &[(usize, RawTerm)]) -> SMap {
    bindings
        .iter()
        .fold(SMap::empty(), |s, (id, raw)| {
            s.extend(LVar::new(*id), build(raw))
        })
}

/// Succeeds with `q = 1` after `k` suspension layers.
fn eventually(k: usize, q: LVar) -> impl Goal<State> {
    move |st: State| {
        if k == 0 {
            eq(q, 1).apply(st)
        } else {
            Stream::suspend(move || eventually(k - 1, q).apply(st))
        }
    }
}

proptest! {
    #[test]
    fn walk_is_idempotent(bindings in chain_bindings(), raw in raw_term_strategy()) {
        let s = build_smap(&bindings);
        let t = build(&raw);
        let once = s.walk(&t).clone();
        let twice = s.walk(&once).clone();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn unify_outcome_is_symmetric(u in raw_term_strategy(), v in raw_term_strategy()) {
        let (u, v) = (build(&u), build(&v));
        prop_assert_eq!(
            SMap::empty().unify(&u, &v).is_some(),
            SMap::empty().unify(&v, &u).is_some()
        );
    }

    #[test]
    fn unify_answers_are_symmetric_up_to_reification(
        u in raw_term_strategy(),
        v in raw_term_strategy(),
    ) {
        // The occurs-checked variant is used so that the resulting
        // substitutions are guaranteed walkable.
        let (u, v) = (build(&u), build(&v));
        let uv = SMap::empty().unify_with_occurs_check(&u, &v);
        let vu = SMap::empty().unify_with_occurs_check(&v, &u);
        match (uv, vu) {
            (None, None) => {}
            (Some(a), Some(b)) => {
                prop_assert_eq!(a.reify(&u), b.reify(&u));
                prop_assert_eq!(a.reify(&v), b.reify(&v));
            }
            (a, b) => prop_assert!(false, "asymmetric outcome: {:?} vs {:?}", a.is_some(), b.is_some()),
        }
    }

    #[test]
    fn unify_preserves_existing_bindings(
        bindings in ground_bindings(),
        u in raw_term_strategy(),
        v in raw_term_strategy(),
    ) {
        let s0 = build_smap(&bindings);
        if let Some(s1) = s0.unify(&build(&u), &build(&v)) {
            for (id, _) in &bindings {
                let k = Term::var(LVar::new(*id));
                prop_assert_eq!(s0.walk(&k), s1.walk(&k));
            }
        }
    }

    #[test]
    fn a_productive_branch_is_reached_in_bounded_steps(k in 0usize..64) {
        let goal = call_fresh(move |q| disj2(nevero(), eventually(k, q)));
        let mut stream = goal.apply(State::default());
        let mut steps = 0usize;
        let answer = loop {
            match stream {
                Stream::Mature(st, _) => break st,
                Stream::Immature(thunk) => {
                    steps += 1;
                    prop_assert!(
                        steps <= 4 * k + 8,
                        "{} forcing steps for k = {}",
                        steps,
                        k
                    );
                    stream = thunk();
                }
                Stream::Empty => {
                    prop_assert!(false, "the productive branch produced no answer");
                    unreachable!()
                }
            }
        };
        let q_term = LVar::new(0).into();
        prop_assert_eq!(
            answer.s_map().walk(&q_term),
            &Term::from(1)
        );
    }

    #[test]
    fn reification_ignores_unreachable_bindings(
        junk_id in 10usize..20,
        junk in raw_term_strategy(),
    ) {
        let base = SMap::empty().extend(LVar::new(0), seq![LVar::new(1), 5, LVar::new(2)]);
        let with_junk = base.extend(LVar::new(junk_id), build(&junk));
        prop_assert_eq!(
            reify_first(&State::empty().with_s_map(base)),
            reify_first(&State::empty().with_s_map(with_junk))
        );
    }

    #[test]
    fn ground_query_values_reify_to_themselves(raw in ground_strategy()) {
        let t = build(&raw);
        let expected = t.clone();
        let result = run!(*, q, eq(q, t.clone())).into_vec();
        prop_assert_eq!(result, vec![expected]);
    }
}
