//! Decomposition of a value into the degrees of the four Belnap states.
//!
//! For `(T, F)` the degrees are
//!
//! - truth:    `T · (1 − F)`
//! - falsity:  `F · (1 − T)`
//! - unknown:  `(1 − T) · (1 − F)`
//! - conflict: `T · F`
//!
//! and always sum to 1.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    norm::{complement, t_norm},
    state::State,
    value::FuzzyValue,
};

/// The four degrees of a [`FuzzyValue`], computed on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Components {
    pub truth: f64,
    pub falsity: f64,
    pub unknown: f64,
    pub conflict: f64,
}

impl Components {
    #[must_use]
    pub const fn get(&self, state: State) -> f64 {
        match state {
            State::True => self.truth,
            State::False => self.falsity,
            State::Unknown => self.unknown,
            State::Conflict => self.conflict,
        }
    }

    /// Degrees paired with their state, in tie-break priority order.
    pub fn iter(&self) -> impl Iterator<Item = (State, f64)> + '_ {
        State::PRIORITY.into_iter().map(|s| (s, self.get(s)))
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.truth + self.falsity + self.unknown + self.conflict
    }

    /// The strictly largest degree; ties go to the state earlier in
    /// [`State::PRIORITY`].
    #[must_use]
    pub fn dominant(&self) -> State {
        let mut best = (State::PRIORITY[0], self.get(State::PRIORITY[0]));
        for (state, degree) in self.iter().skip(1) {
            if degree > best.1 {
                best = (state, degree);
            }
        }
        best.0
    }

    /// Name of the degree belonging to `state`.
    #[must_use]
    pub const fn key(state: State) -> &'static str {
        match state {
            State::True => "truth",
            State::False => "falsity",
            State::Unknown => "unknown",
            State::Conflict => "conflict",
        }
    }
}

/// Keyed view: `truth`, `falsity`, `unknown`, `conflict`.
impl From<Components> for BTreeMap<&'static str, f64> {
    fn from(c: Components) -> Self {
        c.iter().map(|(s, d)| (Components::key(s), d)).collect()
    }
}

impl FuzzyValue {
    /// Confirmed and not refuted.
    #[must_use]
    pub fn truth(&self) -> f64 {
        t_norm(self.t(), complement(self.f()))
    }

    /// Refuted and not confirmed.
    #[must_use]
    pub fn falsity(&self) -> f64 {
        t_norm(self.f(), complement(self.t()))
    }

    /// Neither confirmed nor refuted.
    #[must_use]
    pub fn unknown(&self) -> f64 {
        t_norm(complement(self.t()), complement(self.f()))
    }

    /// Both confirmed and refuted.
    #[must_use]
    pub fn conflict(&self) -> f64 {
        t_norm(self.t(), self.f())
    }

    #[must_use]
    pub fn degree(&self, state: State) -> f64 {
        match state {
            State::True => self.truth(),
            State::False => self.falsity(),
            State::Unknown => self.unknown(),
            State::Conflict => self.conflict(),
        }
    }

    #[must_use]
    pub fn as_components(&self) -> Components {
        Components {
            truth: self.truth(),
            falsity: self.falsity(),
            unknown: self.unknown(),
            conflict: self.conflict(),
        }
    }

    /// The state with the largest degree. Ties resolve as
    /// `conflict > unknown > true > false`.
    #[must_use]
    pub fn dominant_state(&self) -> State {
        self.as_components().dominant()
    }

    #[must_use]
    pub fn is_true(&self) -> bool {
        self.dominant_state() == State::True
    }

    #[must_use]
    pub fn is_false(&self) -> bool {
        self.dominant_state() == State::False
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.dominant_state() == State::Unknown
    }

    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.dominant_state() == State::Conflict
    }

    /// Returns `true` if the degree of `state` reaches `threshold`.
    #[must_use]
    pub fn meets(&self, state: State, threshold: f64) -> bool {
        self.degree(state) >= threshold
    }
}
