//! The lazy, interleaving result stream: the search scheduler.
//!
//! A stream is either exhausted, carries a realized head, or is a
//! suspended computation. Suspensions are the scheduling points: `merge`
//! swaps its operands every time it forces one, which is the entire
//! mechanism that keeps a divergent branch from starving a productive one.

use crate::core::goal::Goal;

/// Possibly infinite sequence of values.
pub enum Stream<T> {
    /// Terminal; no more answers.
    Empty,
    /// A realized head and the rest of the stream.
    Mature(T, Box<Stream<T>>),
    /// A suspended computation yielding another stream when forced.
    Immature(Box<dyn FnOnce() -> Stream<T>>),
}

impl<T> Stream<T> {
    /// Initialize an empty stream.
    pub fn empty() -> Self {
        Stream::Empty
    }

    /// Create a stream holding exactly one value.
    pub fn unit(x: T) -> Self {
        Stream::cons(x, Stream::Empty)
    }

    /// Prepend a value to a stream.
    pub fn cons(a: T, d: Self) -> Self {
        Stream::Mature(a, Box::new(d))
    }

    /// Create a suspended stream.
    pub fn suspend(thunk: impl 'static + FnOnce() -> Stream<T>) -> Self {
        Stream::Immature(Box::new(thunk))
    }

    /// Create a stream with elements from an iterator.
    pub fn from_iter(mut iter: impl Iterator<Item = T>) -> Self {
        match iter.next() {
            None => Stream::Empty,
            Some(item) => Stream::cons(item, Stream::from_iter(iter)),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// The number of elements in a fully realized stream, or `None` if the
    /// stream contains any suspensions.
    pub fn len(&self) -> Option<usize> {
        match self {
            Stream::Empty => Some(0),
            Stream::Mature(_, d) => d.len().map(|l| l + 1),
            Stream::Immature(_) => None,
        }
    }

    /// Force suspensions at the head until the stream is `Empty` or
    /// `Mature`.
    ///
    /// This is a trampoline: deeply nested suspension chains (one per
    /// `delay` in a recursive goal) are unwound iteratively so they cannot
    /// exhaust the call stack.
    pub fn realize_head(self) -> Self {
        let mut s = self;
        loop {
            match s {
                Stream::Immature(thunk) => s = thunk(),
                realized => return realized,
            }
        }
    }

    /// Truncate to at most `n` elements, forcing suspensions as needed.
    pub fn take_inf(self, n: usize) -> Stream<T> {
        if n == 0 {
            return Stream::Empty;
        }
        match self.realize_head() {
            Stream::Mature(a, d) => Stream::cons(a, d.take_inf(n - 1)),
            _ => Stream::Empty,
        }
    }

    /// Force the entire stream. Does not return if the stream is infinite.
    pub fn take_inf_all(self) -> Stream<T> {
        match self.realize_head() {
            Stream::Mature(a, d) => Stream::cons(a, d.take_inf_all()),
            _ => Stream::Empty,
        }
    }

    /// Convert `Stream` to `Vec`, forcing everything.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T: 'static> Stream<T> {
    /// Interleaving union of two streams (logical disjunction).
    ///
    /// When the left side is suspended, the suspension re-merges with the
    /// operands swapped, so forcing alternates between the two sides.
    pub fn merge(self, other: Stream<T>) -> Stream<T> {
        match self {
            Stream::Empty => other,
            Stream::Mature(a, d) => Stream::cons(a, d.merge(other)),
            Stream::Immature(thunk) => Stream::suspend(move || other.merge(thunk())),
        }
    }

    /// Apply `f` to every element, preserving suspensions.
    pub fn map<U: 'static>(self, f: impl 'static + Fn(T) -> U) -> Stream<U> {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Mature(a, d) => Stream::cons(f(a), d.map(f)),
            Stream::Immature(thunk) => Stream::suspend(move || thunk().map(f)),
        }
    }
}

impl<T: 'static + Default> Stream<T> {
    /// Apply a goal to every element and merge the resulting streams
    /// (logical conjunction with a follow-on goal).
    ///
    /// Suspensions are preserved rather than forced, so conjunction
    /// inherits the fairness of `merge`.
    pub fn bind(self, g: impl 'static + Clone + Goal<T>) -> Self {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Mature(a, d) => g.apply(a).merge(d.bind(g)),
            Stream::Immature(thunk) => Stream::suspend(move || thunk().bind(g)),
        }
    }
}

impl<T> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        StreamIter(self)
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        use Stream::*;
        match (self, other) {
            (Empty, Empty) => true,
            (Mature(a, x), Mature(b, y)) => a == b && x == y,
            _ => false,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stream::Empty => write!(f, "()"),
            Stream::Immature(_) => write!(f, "(...)"),
            Stream::Mature(x, next) => {
                let mut next = next;
                write!(f, "({:?}", x)?;
                loop {
                    match &**next {
                        Stream::Empty => break,
                        Stream::Mature(x, n) => {
                            write!(f, " {:?}", x)?;
                            next = n;
                        }
                        Stream::Immature(_) => {
                            write!(f, "...")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

/// Iterator over a `Stream`, realizing the head at every step.
pub struct StreamIter<T>(Stream<T>);

impl<T> Iterator for StreamIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.0, Stream::Empty).realize_head() {
            Stream::Mature(a, d) => {
                self.0 = *d;
                Some(a)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested(n: usize) -> Stream<usize> {
        if n == 0 {
            Stream::unit(0)
        } else {
            Stream::suspend(move || nested(n - 1))
        }
    }

    /// A stream that suspends forever without producing anything.
    fn divergent() -> Stream<usize> {
        Stream::suspend(divergent)
    }

    #[test]
    fn merge_of_empty_is_identity() {
        let s = Stream::empty().merge(Stream::unit(1));
        assert_eq!(s, Stream::unit(1));
        let s = Stream::unit(1).merge(Stream::empty());
        assert_eq!(s, Stream::unit(1));
    }

    #[test]
    fn merge_concatenates_mature_streams() {
        let s = Stream::unit(1).merge(Stream::unit(2));
        assert_eq!(s, Stream::cons(1, Stream::unit(2)));
    }

    #[test]
    fn merge_swaps_operands_when_forcing_a_suspension() {
        // After one forcing step the right side must be at the front.
        let left = Stream::suspend(|| Stream::unit(1));
        let s = left.merge(Stream::unit(2)).realize_head();
        assert_eq!(s.into_vec(), vec![2, 1]);
    }

    #[test]
    fn merge_lets_a_productive_stream_overtake_a_divergent_one() {
        let s = divergent().merge(Stream::unit(7));
        assert_eq!(s.take_inf(1).into_vec(), vec![7]);
    }

    #[test]
    fn bind_is_empty_on_empty() {
        let s = Stream::empty().bind(|x: usize| Stream::unit(x + 1));
        assert!(s.is_empty());
    }

    #[test]
    fn bind_applies_the_goal_to_every_element() {
        let s = Stream::cons(1usize, Stream::unit(2)).bind(|x: usize| Stream::unit(x * 10));
        assert_eq!(s.into_vec(), vec![10, 20]);
    }

    #[test]
    fn bind_preserves_suspensions() {
        let s = Stream::suspend(|| Stream::unit(1usize)).bind(|x: usize| Stream::unit(x));
        assert!(matches!(s, Stream::Immature(_)));
    }

    #[test]
    fn realize_head_survives_deep_suspension_chains() {
        let s = nested(100_000).realize_head();
        assert!(matches!(s, Stream::Mature(0, _)));
    }

    #[test]
    fn iterator_survives_deep_suspension_chains() {
        assert_eq!(nested(100_000).into_iter().next(), Some(0));
    }

    #[test]
    fn take_inf_truncates_and_forces() {
        let s = Stream::from_iter(0..5).take_inf(3);
        assert_eq!(s.into_vec(), vec![0, 1, 2]);
        assert_eq!(nested(10).take_inf(5).into_vec(), vec![0]);
    }

    #[test]
    fn take_inf_zero_is_empty() {
        assert!(divergent().take_inf(0).is_empty());
    }

    #[test]
    fn len_is_unknown_while_suspended() {
        assert_eq!(nested(1).len(), None);
        assert_eq!(Stream::from_iter(0..3).len(), Some(3));
    }

    #[test]
    fn streams_print_like_lists() {
        assert_eq!(format!("{:?}", Stream::<usize>::empty()), "()");
        assert_eq!(format!("{:?}", Stream::from_iter(1..4)), "(1 2 3)");
        assert_eq!(format!("{:?}", nested(1)), "(...)");
        assert_eq!(format!("{:?}", Stream::cons(1, nested(1))), "(1...)");
    }
}
