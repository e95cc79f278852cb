//! Iterative root finders shared by all equation families.
//!
//! These work on plain closures rather than on a specific polynomial type, so
//! they can be reused by anything that can evaluate a function (and, for
//! Newton, its derivative).

mod bisection;
pub use bisection::bisection;
mod newton;
pub use newton::newton;
