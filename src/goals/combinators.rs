//! Committed-choice combinators built on top of the primitives.

use crate::core::goal::Goal;
use crate::core::state::State;
use crate::core::stream::Stream;

/// If `g_cond` succeeds, behave as `g_cond` followed by `g_then`;
/// otherwise behave as `g_else`. The condition stream is forced only far
/// enough to decide.
pub fn ifte(
    g_cond: impl Goal<State>,
    g_then: impl 'static + Goal<State>,
    g_else: impl Goal<State>,
) -> impl Goal<State> {
    move |st: State| {
        let mut s_inf = g_cond.apply(st.clone());
        loop {
            match s_inf {
                Stream::Empty => return g_else.apply(st),
                Stream::Immature(thunk) => s_inf = thunk(),
                mature => return mature.bind(g_then.clone()),
            }
        }
    }
}

/// Commit to the first answer of `g`, discarding the rest.
pub fn once(g: impl Goal<State>) -> impl Goal<State> {
    move |st: State| match g.apply(st).realize_head() {
        Stream::Mature(a, _) => Stream::unit(a),
        _ => Stream::empty(),
    }
}
