//! Known-answer sample operations for exercising tooling harnesses.
//!
//! This crate is the library form of a classic fixture script: a handful of
//! deliberately small, independent operations whose outputs are pinned down
//! to the character so an external harness (an editor E2E suite, a linter
//! test bed) can run them and assert on exact results.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`greeting`]   | Fixed-pattern greeting formatting |
//! | [`calculator`] | Chainable value holder plus the pure product helper |
//! | [`fetch`]      | Async GET returning a parsed JSON object |
//!
//! The operations do not compose with each other. The only consumer that
//! touches more than one of them is the `specimen` demonstration binary,
//! which prints the greeting and calculator scenarios as a stable stdout
//! transcript.

pub mod calculator;
pub mod fetch;
pub mod greeting;

pub use calculator::{Calculator, multiply};
pub use fetch::{FetchError, fetch_data};
pub use greeting::greet;
