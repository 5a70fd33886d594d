//! Mathematical utilities: special functions and the abscissa abstraction
//! that lets every model evaluate over scalars and sequences alike.

pub mod abscissa;
pub mod special;

pub use abscissa::*;
pub use special::*;
