//! Submission services.
//!
//! # Services
//!
//! - [`submit`] - read-then-send orchestration over small traits
//! - [`browser`] - `gloo-net` sender, `Blob.text()` reader, `window.alert`

pub mod submit;
pub mod browser;

pub use submit::*;
pub use browser::*;
