//! Filesystem utilities and extensions.
//!
//! Provides the [`PathExt`] extension trait for [`Path`](std::path::Path) with read-only
//! directory lookups.

pub mod path_ext;

pub use path_ext::PathExt;
