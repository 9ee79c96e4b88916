//! Platform-independent logic behind the La Cebolla newsroom widgets: the
//! local draft board, the login and registration flows and the clock.
//!
//! Everything that touches the browser (local storage, HTTP, navigation) sits
//! behind a trait so the widgets can be exercised without a DOM.

pub mod api;
pub mod clock;
pub mod config;
pub mod drafts;
mod error;
pub mod locale;
pub mod login;
pub mod register;
pub mod session;
pub mod storage;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{FormOutcome, Redirect, Section, Status, StatusKind, SubmitControl};

#[cfg(test)]
mod tests;
