//! Four-valued fuzzy logic over a continuous extension of Belnap's truth
//! states.
//!
//! A [`FuzzyValue`] holds independent degrees of confirmation `T` and
//! refutation `F`. The crate provides negation, conjunction, disjunction,
//! implication, bi-implication, evidence accumulation and scalar scaling,
//! together with the decomposition of a value into the degrees of the four
//! crisp [`State`]s.
//!
//! Values are `Copy` and immutable, so they can be shared between threads
//! freely. `x += y` rebinds `x` and, like any `&mut` access, needs external
//! synchronization if one binding is shared between threads.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_in_result)]

mod accumulate;
pub mod degree;
pub mod error;
mod logic;
mod norm;
mod scalar;
pub mod state;
pub mod value;

pub use degree::Components;
pub use error::Error;
pub use state::State;
pub use value::{FuzzyValue, DEFAULT_TOLERANCE};

pub const TRUE: FuzzyValue = FuzzyValue::TRUE;
pub const FALSE: FuzzyValue = FuzzyValue::FALSE;
pub const UNKNOWN: FuzzyValue = FuzzyValue::UNKNOWN;
pub const CONFLICT: FuzzyValue = FuzzyValue::CONFLICT;
