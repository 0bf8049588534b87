//! Substitutions map variables to terms.
//!
//! The mapping is triangular: a value may itself contain variables that are
//! bound elsewhere in the same substitution. The map is persistent; every
//! extension returns a new substitution and leaves the old one valid.

use crate::core::logic_variable::LVar;
use crate::core::term::Term;
use im::HashMap;
use std::fmt::Formatter;

/// A persistent mapping of logic variables to terms.
///
/// An absent key means the variable is fresh. No occurs check is performed
/// when binding: a self-referential binding is permitted and will make
/// [`walk`](SMap::walk) diverge if followed. Callers who want the sound
/// variant use [`unify_with_occurs_check`](SMap::unify_with_occurs_check).
#[derive(Clone, Default, PartialEq)]
pub struct SMap {
    map: HashMap<LVar, Term>,
}

impl SMap {
    /// Initialize an empty substitution.
    pub fn empty() -> Self {
        SMap {
            map: HashMap::new(),
        }
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The binding for `v`, if any.
    pub fn get(&self, v: &LVar) -> Option<&Term> {
        self.map.get(v)
    }

    /// Extend with a `v -> t` binding, returning the new substitution.
    ///
    /// Keys are not checked for conflict; the unifier is responsible for
    /// establishing consistency before binding.
    pub fn extend(&self, v: LVar, t: impl Into<Term>) -> SMap {
        SMap {
            map: self.map.update(v, t.into()),
        }
    }

    /// Resolve `t` to its current binding by following variable chains at
    /// the root. Atoms and sequences walk to themselves; element-wise
    /// resolution is [`deep_walk`](SMap::deep_walk)'s job.
    ///
    /// Does not terminate on a cyclic substitution.
    pub fn walk<'a>(&'a self, mut t: &'a Term) -> &'a Term {
        while let Term::Var(v) = t {
            match self.map.get(v) {
                Some(next) => t = next,
                None => break,
            }
        }
        t
    }

    /// Attempt to unify `u` and `v` under this substitution.
    ///
    /// Returns the (possibly extended) substitution on success and `None`
    /// on failure. Failure is a value, not an error: goals translate it
    /// into an empty stream.
    pub fn unify(&self, u: &Term, v: &Term) -> Option<SMap> {
        self.unify_impl(u, v, false)
    }

    /// Like [`unify`](SMap::unify), but refuse bindings that would make a
    /// variable occur in its own value. Opt-in; the plain unifier permits
    /// cyclic substitutions.
    pub fn unify_with_occurs_check(&self, u: &Term, v: &Term) -> Option<SMap> {
        self.unify_impl(u, v, true)
    }

    fn unify_impl(&self, u: &Term, v: &Term, occurs_check: bool) -> Option<SMap> {
        let u = self.walk(u);
        let v = self.walk(v);

        if u == v {
            return Some(self.clone());
        }
        if let Term::Var(x) = u {
            return self.bind(*x, v.clone(), occurs_check);
        }
        if let Term::Var(y) = v {
            return self.bind(*y, u.clone(), occurs_check);
        }

        match (u, v) {
            (Term::Seq(a), Term::Seq(b)) => {
                // A leading Dot marks the next element as the tail binder,
                // which unifies against the other side as a whole.
                if matches!(a.first(), Some(Term::Dot)) {
                    return a.get(1).and_then(|t| self.unify_impl(t, v, occurs_check));
                }
                if matches!(b.first(), Some(Term::Dot)) {
                    return b.get(1).and_then(|t| self.unify_impl(u, t, occurs_check));
                }
                match (a.split_first(), b.split_first()) {
                    (Some((ah, at)), Some((bh, bt))) => self
                        .unify_impl(ah, bh, occurs_check)?
                        .unify_impl(&Term::seq(at.to_vec()), &Term::seq(bt.to_vec()), occurs_check),
                    // non-empty vs empty
                    _ => None,
                }
            }
            (Term::Ext(e), _) => e.unify(v, self),
            (_, Term::Ext(e)) => e.unify(u, self),
            _ => None,
        }
    }

    fn bind(&self, x: LVar, t: Term, occurs_check: bool) -> Option<SMap> {
        if occurs_check && self.occurs(&x, &t) {
            return None;
        }
        Some(self.extend(x, t))
    }

    /// Return `true` if a variable equivalent to `x` occurs in `t` under
    /// this substitution.
    pub fn occurs(&self, x: &LVar, t: &Term) -> bool {
        match self.walk(t) {
            Term::Var(v) => v == x,
            Term::Seq(items) => items.iter().any(|item| self.occurs(x, item)),
            Term::Ext(e) => e.occurs(x, self),
            _ => false,
        }
    }
}

impl std::fmt::Debug for SMap {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.map.iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {:?}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {:?}", var, val)?;
        }
        write!(f, "}}")
    }
}
