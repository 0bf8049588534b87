//! The primitive goals and goal constructors.

use crate::core::goal::Goal;
use crate::core::logic_variable::LVar;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::term::Term;

/// The unification goal: succeeds with the extended substitution when `u`
/// and `v` unify, fails otherwise.
pub fn eq(u: impl Into<Term>, v: impl Into<Term>) -> impl Goal<State> {
    let u = u.into();
    let v = v.into();
    move |st: State| match st.s_map().unify(&u, &v) {
        Some(s) => Stream::unit(st.with_s_map(s)),
        None => Stream::empty(),
    }
}

/// The goal that always succeeds, leaving the state unchanged.
pub fn succeed() -> impl Goal<State> {
    |st: State| Stream::unit(st)
}

/// The goal that always fails.
pub fn fail() -> impl Goal<State> {
    |_: State| -> Stream<State> { Stream::empty() }
}

/// Allocate a fresh variable and hand it to `f` to build the goal to run.
pub fn call_fresh<G: Goal<State>>(f: impl 'static + Clone + Fn(LVar) -> G) -> impl Goal<State> {
    move |st: State| {
        let (v, st) = st.fresh_var();
        f(v).apply(st)
    }
}

/// Logical disjunction: answers of either subgoal, interleaved.
pub fn disj2(g1: impl Goal<State>, g2: impl Goal<State>) -> impl Goal<State> {
    move |st: State| g1.apply(st.clone()).merge(g2.apply(st))
}

/// Logical conjunction: `g2` is applied to every answer of `g1`.
pub fn conj2(g1: impl Goal<State>, g2: impl 'static + Goal<State>) -> impl Goal<State> {
    move |st: State| g1.apply(st).bind(g2.clone())
}

/// Suspend a goal explicitly.
///
/// Wrapping the recursive call of a recursive goal converts what would be
/// unbounded direct recursion into an immature stream node, which both
/// defers the work and enrolls it in the interleaving schedule.
pub fn delay(g: impl 'static + Goal<State>) -> impl Goal<State> {
    move |st: State| {
        let g = g.clone();
        Stream::suspend(move || g.apply(st))
    }
}

/// A goal that suspends forever without ever succeeding or failing.
pub fn nevero() -> impl Goal<State> {
    |st: State| Stream::suspend(move || nevero().apply(st))
}

/// A goal that succeeds any number of times.
pub fn alwayso() -> impl Goal<State> {
    |st: State| Stream::suspend(move || disj2(succeed(), alwayso()).apply(st))
}
