//! Number Classification Engine
//!
//! The request pipeline is a linear flow: normalize the raw parameter, run
//! the pure predicate suite over the derived magnitude, fetch the fun fact,
//! assemble the response record. Rejection is only possible at the
//! normalization step.

pub mod classify;
pub mod normalize;
pub mod predicates;

pub use classify::{classify, Classification};
pub use normalize::{normalize, NormalizedNumber, ValidationError, ValidationPolicy};
