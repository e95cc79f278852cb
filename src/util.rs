//! Internal utilities, not part of the API

pub(crate) mod complex;
pub(crate) mod doc_macros;

// re-exported by crate root
#[doc(hidden)]
pub mod __testing;
