//! Goals: pure functions from a state to a stream of successor states.
//!
//! A goal is a predicate over worlds: applied to an input state it yields
//! zero or more refined states. Goals are values; they may be stored,
//! composed, and applied repeatedly.

use crate::core::stream::{Stream, StreamIter};

/// The `Goal` trait. Implemented for every cloneable closure
/// `Fn(T) -> Stream<T>`.
pub trait Goal<T: Default>: Clone {
    /// Apply the goal to a state.
    fn apply(&self, st: T) -> Stream<T>;

    /// Apply the goal to the default (empty) state and realize at most `n`
    /// answers.
    fn run(&self, n: usize) -> Stream<T> {
        self.apply(T::default()).take_inf(n)
    }

    /// Apply the goal to the default state and realize every answer. Does
    /// not return if the goal has infinitely many.
    fn run_inf(&self) -> Stream<T> {
        self.apply(T::default()).take_inf_all()
    }

    /// Apply the goal to the default state and expose the answers as a
    /// lazy iterator.
    fn iter(&self) -> StreamIter<T> {
        self.apply(T::default()).into_iter()
    }
}

impl<T: Default, G: Clone + Fn(T) -> Stream<T>> Goal<T> for G {
    fn apply(&self, st: T) -> Stream<T> {
        self(st)
    }
}
