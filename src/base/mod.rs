//! Foundation types for the Litmus toolchain.
//!
//! This module provides fundamental types used throughout the compiler:
//! - [`Location`] - Line/column positions, optionally tied to a file
//! - Path utilities - lexical normalization and import resolution
//!
//! This module has NO dependencies on other litmus modules.

mod location;
mod path_utils;

pub use location::Location;
pub use path_utils::{normalize_path, resolve_import};
