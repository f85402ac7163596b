//! Explicit, inspectable operation outcomes.
//!
//! Operations with expected failure paths return a [`Status`] (no payload) or
//! an [`Outcome<T>`] (payload on success) instead of panicking. A failed
//! result carries an [`Error`], one or more [`ValidationError`]s, or both.
//! Expected failures are ordinary values to be inspected and propagated;
//! misusing the API, such as asking a failed result for its value, panics at
//! the call site.
//!
//! ```
//! use outcome::{Error, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::success(port),
//!         Err(_) => Error::new("bad-port", format!("cannot parse '{raw}' as a port")).into(),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080").into_value(), 8080);
//! assert!(parse_port("eighty").is_failure());
//! ```

pub mod error;
pub mod failure;
pub mod outcome;
pub mod status;

pub use crate::{
    error::{Error, Misuse, ValidationError, ValidationErrors},
    failure::Failure,
    outcome::Outcome,
    status::Status,
};
