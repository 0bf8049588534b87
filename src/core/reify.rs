//! Reification: projecting answer states into printable terms.
//!
//! A reified answer has every bound variable replaced by its value and
//! every variable that remained fresh replaced by a canonical `_.k` name,
//! numbered in left-to-right discovery order.

use crate::core::logic_variable::LVar;
use crate::core::state::State;
use crate::core::substitution::SMap;
use crate::core::term::Term;

impl SMap {
    /// Like [`walk`](SMap::walk), but after resolving the root, descend
    /// into sequences and resolve every element.
    ///
    /// When a tail binder resolves to a sequence, the improper-tail
    /// encoding is collapsed: `(1 . t)` with `t` bound to `(2 3)` comes
    /// back as `(1 2 3)`.
    pub fn deep_walk(&self, t: &Term) -> Term {
        match self.walk(t) {
            Term::Seq(items) => {
                let mut out = Vec::with_capacity(items.len());
                let mut iter = items.iter();
                while let Some(item) = iter.next() {
                    if matches!(item, Term::Dot) {
                        match iter.next().map(|tail| self.deep_walk(tail)) {
                            Some(Term::Seq(rest)) => out.extend(rest.iter().cloned()),
                            Some(tail) => {
                                out.push(Term::Dot);
                                out.push(tail);
                            }
                            None => {}
                        }
                        break;
                    }
                    out.push(self.deep_walk(item));
                }
                Term::seq(out)
            }
            Term::Ext(e) => e.deep_walk(self),
            other => other.clone(),
        }
    }

    /// Extend this (naming) substitution with a canonical name for every
    /// variable of `t` that it does not bind yet, in left-to-right order.
    pub fn reify_s(self, t: &Term) -> SMap {
        let t = self.walk(t).clone();
        match t {
            Term::Var(v) => {
                let name = reify_name(self.len());
                self.extend(v, name)
            }
            Term::Seq(items) => items
                .iter()
                .filter(|item| !matches!(item, Term::Dot))
                .fold(self, |s, item| s.reify_s(item)),
            Term::Ext(e) => e.reify_s(self),
            _ => self,
        }
    }

    /// Fully resolve `t` and give canonical names to the variables that
    /// remain fresh.
    pub fn reify(&self, t: &Term) -> Term {
        let v = self.deep_walk(t);
        let names = SMap::empty().reify_s(&v);
        names.deep_walk(&v)
    }
}

/// The canonical stand-in for the `k`-th unbound variable, printed `_.k`.
pub fn reify_name(k: usize) -> Term {
    Term::Reified(k)
}

/// Project the conventional query variable (the first variable allocated
/// by the outer fresh) out of an answer state.
pub fn reify_first(st: &State) -> Term {
    st.s_map().reify(&Term::var(LVar::new(0)))
}
