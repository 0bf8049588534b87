pub use crate::{
    core::{
        goal::Goal,
        logic_variable::LVar,
        reify::{reify_first, reify_name},
        state::State,
        stream::{Stream, StreamIter},
        substitution::SMap,
        term::{Atomic, ExtTerm, Term},
    },
    goals::{combinators::*, list::*, primitive::*},
};
