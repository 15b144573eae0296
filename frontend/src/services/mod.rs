//! Browser services.
//!
//! # Services
//!
//! - [`upload`] - multipart PDF upload over `fetch`
//! - [`timer`] - `setTimeout` backed delays
//!
//! These implement the [`crate::workflow`] seams for the real page.

pub mod upload;
pub mod timer;

pub use upload::*;
pub use timer::*;
