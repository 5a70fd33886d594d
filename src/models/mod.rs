//! Fit-function library.
//!
//! Models are implemented as small, pure functions so that an external
//! fitting driver can use them directly as the model term of its residual.

pub mod functions;
pub mod guess;
pub mod model;

pub use functions::*;
pub use guess::*;
pub use model::*;
