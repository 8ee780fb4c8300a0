//! Xdgdir - per-application XDG Base Directory paths.
//!
//! Resolves config, data, cache and runtime directories for an application name following the
//! XDG Base Directory convention, with `$HOME`/`$USERPROFILE` fallbacks, and searches
//! `$XDG_CONFIG_DIRS`/`$XDG_DATA_DIRS` for existing files. Nothing is created on disk.
//!
//! ```rust,no_run
//! # use xdgdir::App;
//! # fn foo() -> xdgdir::Result<()> {
//! let app = App::new("myapp");
//! let config = app.config_file("settings.toml")?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod base;
pub mod error;
pub mod fs;
pub mod os;

pub use app::App;
pub use base::Category;
pub use error::{Error, Result};
