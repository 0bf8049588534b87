//! The search state threaded through goal evaluation.

use crate::core::logic_variable::LVar;
use crate::core::substitution::SMap;

/// A substitution paired with the id of the next variable to allocate.
///
/// States are immutable; goals derive new states from old ones. The
/// counter is part of the state rather than process-wide, so independent
/// queries do not interfere.
#[derive(Clone, Default, PartialEq)]
pub struct State {
    s_map: SMap,
    next_id: usize,
}

impl State {
    /// The empty state: no bindings, next variable id 0.
    pub fn empty() -> Self {
        State::default()
    }

    pub fn new(s_map: SMap, next_id: usize) -> Self {
        State { s_map, next_id }
    }

    pub fn s_map(&self) -> &SMap {
        &self.s_map
    }

    pub fn next_id(&self) -> usize {
        self.next_id
    }

    /// Replace the substitution, keeping the allocation counter.
    pub fn with_s_map(self, s_map: SMap) -> State {
        State { s_map, ..self }
    }

    /// Allocate a fresh variable, returning it with the successor state.
    pub fn fresh_var(self) -> (LVar, State) {
        let v = LVar::new(self.next_id);
        (
            v,
            State {
                s_map: self.s_map,
                next_id: self.next_id + 1,
            },
        )
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.s_map)
    }
}
