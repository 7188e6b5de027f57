//! mergepick - pick a private GitHub repository and merge its latest PR
//!
//! The interesting part is deciding whether the authenticated identity may
//! merge at all: declared permissions are often missing, so access is
//! probed, and it is checked again right before the merge call.

pub mod access;
pub mod auth;
pub mod error;
pub mod merge;
pub mod platform;
pub mod progress;
pub mod select;
pub mod session;
pub mod types;

pub use error::{Error, Result};
