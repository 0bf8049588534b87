//! The term model: variables, sequences, atoms, and user extensions.

use crate::core::logic_variable::LVar;
use crate::core::substitution::SMap;
use downcast_rs::{impl_downcast, Downcast};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A term of the relational language.
///
/// Sequences are finite and ordered. An "improper" sequence, whose tail is
/// an unknown remainder, is encoded by placing the [`Term::Dot`] marker as
/// the penultimate element: `(a b . t)` is `[a, b, Dot, t]`, where `t`
/// stands for the rest of the sequence.
#[derive(Clone)]
pub enum Term {
    /// A logic variable.
    Var(LVar),
    /// A finite ordered sequence of terms.
    Seq(Arc<Vec<Term>>),
    /// A ground host value.
    Atom(Arc<dyn Atomic>),
    /// Improper-tail marker inside a sequence.
    Dot,
    /// Stand-in for a variable that remained fresh after reification.
    Reified(usize),
    /// A user-defined term shape with its own unification behavior.
    Ext(Arc<dyn ExtTerm>),
}

impl Term {
    pub fn new(val: impl Into<Term>) -> Self {
        val.into()
    }

    pub fn var(v: LVar) -> Self {
        Term::Var(v)
    }

    pub fn atom(a: impl Atomic) -> Self {
        Term::Atom(Arc::new(a))
    }

    pub fn seq(items: Vec<Term>) -> Self {
        Term::Seq(Arc::new(items))
    }

    /// A sequence with an explicit tail binder: `dotted([a, b], t)` is the
    /// sequence whose first elements are `a`, `b` and whose remainder is `t`.
    pub fn dotted(mut items: Vec<Term>, tail: impl Into<Term>) -> Self {
        items.push(Term::Dot);
        items.push(tail.into());
        Term::Seq(Arc::new(items))
    }

    pub fn ext(e: impl ExtTerm) -> Self {
        Term::Ext(Arc::new(e))
    }

    pub fn try_as_var(&self) -> Option<LVar> {
        match self {
            Term::Var(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_var(&self) -> bool {
        self.try_as_var().is_some()
    }

    pub fn try_as_seq(&self) -> Option<&[Term]> {
        match self {
            Term::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Downcast an atom term to a concrete host type.
    pub fn downcast_atom<T: Atomic>(&self) -> Option<&T> {
        match self {
            Term::Atom(a) => a.downcast_ref(),
            _ => None,
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Var(a), Term::Var(b)) => a == b,
            (Term::Seq(a), Term::Seq(b)) => a == b,
            (Term::Atom(a), Term::Atom(b)) => a.eqv(&**b),
            (Term::Dot, Term::Dot) => true,
            (Term::Reified(a), Term::Reified(b)) => a == b,
            (Term::Ext(a), _) => a.eqv(other),
            (_, Term::Ext(b)) => b.eqv(self),
            _ => false,
        }
    }
}

impl Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{:?}", v),
            Term::Atom(a) => write!(f, "{:?}", a),
            Term::Dot => write!(f, "."),
            Term::Reified(k) => write!(f, "_.{}", k),
            Term::Ext(e) => write!(f, "{:?}", e),
            Term::Seq(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<LVar> for Term {
    fn from(v: LVar) -> Self {
        Term::Var(v)
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        Term::seq(items)
    }
}

impl<T: Atomic> From<T> for Term {
    fn from(a: T) -> Self {
        Term::Atom(Arc::new(a))
    }
}

impl PartialEq<LVar> for Term {
    fn eq(&self, v: &LVar) -> bool {
        self.try_as_var().map(|sv| sv == *v).unwrap_or(false)
    }
}

impl<T: Atomic + PartialEq> PartialEq<T> for Term {
    fn eq(&self, other: &T) -> bool {
        match self {
            Term::Atom(a) => a.downcast_ref::<T>().map(|x| x == other).unwrap_or(false),
            _ => false,
        }
    }
}

/// Ground host values that can appear inside terms.
///
/// Atoms carry no sub-terms; they compare by structural equality of the
/// underlying host value.
pub trait Atomic: Debug + Downcast {
    /// Return `true` if `self` is equal to `other`.
    fn eqv(&self, other: &dyn Atomic) -> bool;
}
impl_downcast!(Atomic);

macro_rules! impl_atomic {
    ($($t:ty),* $(,)?) => {
        $(
            impl Atomic for $t {
                fn eqv(&self, other: &dyn Atomic) -> bool {
                    other.downcast_ref::<Self>().map(|o| o == self).unwrap_or(false)
                }
            }
        )*
    };
}

impl_atomic!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    &'static str,
);

/// A user-defined term shape.
///
/// The engine never inspects an extension's internals; it only calls
/// through this capability record. Unifying an extension against a term it
/// does not recognize must return `None`.
pub trait ExtTerm: Debug + Downcast {
    /// Structural equality against an arbitrary term.
    fn eqv(&self, other: &Term) -> bool;

    /// Attempt to unify `self` with `other` under `s`.
    fn unify(&self, other: &Term, s: &SMap) -> Option<SMap>;

    /// Recursively resolve any variables contained in `self`.
    fn deep_walk(&self, s: &SMap) -> Term;

    /// Name any variables of `self` that remain fresh in `s`.
    fn reify_s(&self, s: SMap) -> SMap;

    /// Return `true` if `x` occurs in `self` under `s`.
    fn occurs(&self, _x: &LVar, _s: &SMap) -> bool {
        false
    }
}
impl_downcast!(ExtTerm);

/// Construct a sequence term.
///
/// `seq![a, b, c]` is the proper sequence `(a b c)`; `seq![a, b ; t]` is
/// the improper sequence `(a b . t)` whose remainder is the term `t`.
#[macro_export]
macro_rules! seq {
    () => { $crate::prelude::Term::seq(::std::vec::Vec::new()) };

    ($($x:expr),+ $(,)?) => {
        $crate::prelude::Term::seq(::std::vec![$($crate::prelude::Term::from($x)),+])
    };

    ($($x:expr),+ ; $tail:expr) => {
        $crate::prelude::Term::dotted(
            ::std::vec![$($crate::prelude::Term::from($x)),+],
            $tail,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms_compare_by_value() {
        assert_eq!(Term::from(42), Term::from(42));
        assert_ne!(Term::from(42), Term::from(43));
        assert_eq!(Term::from("olive"), Term::from("olive"));
    }

    #[test]
    fn atoms_of_different_host_types_are_not_equal() {
        assert_ne!(Term::from(1i32), Term::from(1i64));
    }

    #[test]
    fn sequences_compare_elementwise() {
        assert_eq!(seq![1, 2, 3], seq![1, 2, 3]);
        assert_ne!(seq![1, 2], seq![1, 2, 3]);
        assert_eq!(seq![], seq![]);
    }

    #[test]
    fn vars_compare_by_id() {
        assert_eq!(Term::var(LVar::new(0)), Term::var(LVar::new(0)));
        assert_ne!(Term::var(LVar::new(0)), Term::var(LVar::new(1)));
    }

    #[test]
    fn a_var_is_not_an_atom() {
        assert_ne!(Term::var(LVar::new(0)), Term::from(0));
    }

    #[test]
    fn proper_sequences_print_in_parentheses() {
        assert_eq!(format!("{:?}", seq![1, 2, 3]), "(1 2 3)");
        assert_eq!(format!("{:?}", seq![]), "()");
    }

    #[test]
    fn improper_sequences_print_with_a_dot() {
        let t = seq![1, 2 ; LVar::new(0)];
        assert_eq!(format!("{:?}", t), "(1 2 . <lvar 0>)");
    }

    #[test]
    fn reified_variables_print_canonically() {
        assert_eq!(format!("{:?}", Term::Reified(0)), "_.0");
        assert_eq!(format!("{:?}", Term::Reified(11)), "_.11");
    }

    #[test]
    fn dotted_appends_marker_and_tail() {
        let t = Term::dotted(vec![Term::from(1)], LVar::new(3));
        assert_eq!(
            t.try_as_seq().unwrap(),
            &[Term::from(1), Term::Dot, Term::var(LVar::new(3))]
        );
    }

    #[test]
    fn atoms_downcast_to_their_host_type() {
        let t = Term::from(5);
        assert_eq!(t.downcast_atom::<i32>(), Some(&5));
        assert_eq!(t.downcast_atom::<bool>(), None);
    }
}
