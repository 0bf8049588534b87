//! Relations over sequence terms.

use crate::goals::primitive::eq;
use crate::{conde, defrel, fresh, seq};

defrel! {
    /// Creates a goal that succeeds if `p` is the sequence whose head is
    /// `a` and whose tail is `d`.
    pub conso(a, d, p) {
        eq(seq![a.clone() ; d.clone()], p.clone())
    }
}

defrel! {
    /// Creates a goal that succeeds if `p` is non-empty and its head is
    /// equivalent to `a`.
    pub caro(p, a) {
        fresh!((d), eq(seq![a.clone() ; d], p.clone()))
    }
}

defrel! {
    /// Creates a goal that succeeds if `p` is non-empty and its tail is
    /// equivalent to `d`.
    pub cdro(p, d) {
        fresh!((a), eq(seq![a ; d.clone()], p.clone()))
    }
}

defrel! {
    /// Creates a goal that succeeds if `p` is a non-empty sequence.
    pub pairo(p) {
        fresh!((a, d), eq(seq![a ; d], p.clone()))
    }
}

defrel! {
    /// Creates a goal that succeeds if `x` is the empty sequence.
    pub nullo(x) {
        eq(x.clone(), seq![])
    }
}

defrel! {
    /// Creates a goal that succeeds if `l` is a proper sequence.
    pub listo(l) {
        conde! {
            nullo(l.clone());
            fresh!((h, t), conso(h, t, l.clone()), listo(t));
        }
    }
}

defrel! {
    /// Creates a goal that succeeds if `l` is a sequence containing `x`.
    pub membero(x, l) {
        fresh!((h, t),
            conso(h, t, l.clone()),
            conde! {
                eq(h, x.clone());
                membero(x.clone(), t);
            },
        )
    }
}

defrel! {
    /// Creates a goal that succeeds if appending `a` and `b` forms `l`.
    pub appendo(a, b, l) {
        conde! {
            eq(a.clone(), seq![]), eq(b.clone(), l.clone());
            fresh!((h, at, lt),
                conso(h, at, a.clone()),
                conso(h, lt, l.clone()),
                appendo(at, b.clone(), lt));
        }
    }
}
