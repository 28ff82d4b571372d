//! Shared model of the tax application form.
//!
//! Pure data and state transitions, no DOM access: everything here compiles
//! and is tested on the host target.

pub mod domain;
