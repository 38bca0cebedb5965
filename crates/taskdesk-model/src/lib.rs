//! Task records, the rules that validate them, and the filter used to narrow task lists.
//!
//! Everything in this crate is pure and synchronous: no I/O, no shared state.

mod domain;
pub use domain::*;

mod form;
pub use form::*;
