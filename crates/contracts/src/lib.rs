//! Platform-independent core of the PapiFast manager.
//!
//! Everything here compiles both natively and to `wasm32`, so the list
//! pipeline, the navigation rules and the session context can be unit tested
//! without a browser.

pub mod domain;
pub mod shared;
pub mod system;
