//! Base directory resolution.
//!
//! Computes the category-level roots (`$XDG_CONFIG_HOME` and friends) with `$HOME` and
//! `$USERPROFILE` fallbacks. Nothing here knows about application names; see
//! [`App`](crate::App) for that.
//!
//! ```rust,no_run
//! # use xdgdir::base;
//! # use xdgdir::os::env::ProcessEnv;
//! # fn foo() -> xdgdir::Result<()> {
//! let config = base::config_home(&ProcessEnv)?;
//! let runtime = base::runtime_dir(&ProcessEnv);
//! # Ok(())
//! # }
//! ```

use std::ffi::OsStr;
use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::os::env::EnvLookup;

/// Home-like variables tried, in order, when the category override is missing.
const HOME_VARS: [&str; 2] = ["HOME", "USERPROFILE"];

/// Kind of per-user directory.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Config,
    Data,
    Cache,
    Runtime,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Config,
        Category::Data,
        Category::Cache,
        Category::Runtime,
    ];

    /// Variable overriding this category's base directory.
    pub const fn home_var(self) -> &'static str {
        match self {
            Category::Config => "XDG_CONFIG_HOME",
            Category::Data => "XDG_DATA_HOME",
            Category::Cache => "XDG_CACHE_HOME",
            Category::Runtime => "XDG_RUNTIME_DIR",
        }
    }

    /// Variable listing system-wide search directories, if the category has one.
    pub const fn search_var(self) -> Option<&'static str> {
        match self {
            Category::Config => Some("XDG_CONFIG_DIRS"),
            Category::Data => Some("XDG_DATA_DIRS"),
            Category::Cache | Category::Runtime => None,
        }
    }

    /// Path appended to `$HOME`/`$USERPROFILE` when [`Category::home_var`] is missing.
    ///
    /// `None` for [`Category::Runtime`], which falls back to [`std::env::temp_dir`] instead.
    pub const fn fallback_subpath(self) -> Option<&'static str> {
        match self {
            Category::Config => Some(".config"),
            Category::Data => Some(".local/share"),
            Category::Cache => Some(".cache"),
            Category::Runtime => None,
        }
    }

    /// Whether resolving this category's base directory can fail.
    pub const fn can_fail(self) -> bool {
        self.fallback_subpath().is_some()
    }

    const fn name(self) -> &'static str {
        match self {
            Category::Config => "config",
            Category::Data => "data",
            Category::Cache => "cache",
            Category::Runtime => "runtime",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn push_subpath(mut base: PathBuf, subpath: &str) -> PathBuf {
    // Component-wise, so Windows gets its native separator.
    base.extend(subpath.split('/'));
    base
}

/// Resolve the base directory of `category`.
///
/// 1. `$XDG_*_HOME` (or `$XDG_RUNTIME_DIR`) if set and non-empty.
/// 2. `$HOME` joined with [`Category::fallback_subpath`].
/// 3. `$USERPROFILE` joined with [`Category::fallback_subpath`].
///
/// Runtime skips steps 2 and 3 and falls back to [`std::env::temp_dir`], so it never fails.
///
/// # Errors
/// [`Error::EnvironmentNotFound`] if none of the variables above is set.
pub fn base_dir(env: &impl EnvLookup, category: Category) -> Result<PathBuf> {
    if let Some(dir) = env.non_empty_var_os(OsStr::new(category.home_var())) {
        return Ok(PathBuf::from(dir));
    }
    let Some(subpath) = category.fallback_subpath() else {
        return Ok(std::env::temp_dir());
    };
    HOME_VARS
        .iter()
        .find_map(|var| env.non_empty_var_os(OsStr::new(var)))
        .map(|home| push_subpath(PathBuf::from(home), subpath))
        .ok_or(Error::EnvironmentNotFound { category })
}

/// Get proper path for `$XDG_CONFIG_HOME`.
///
/// # Errors
/// See [`base_dir`].
pub fn config_home(env: &impl EnvLookup) -> Result<PathBuf> {
    base_dir(env, Category::Config)
}

/// Get proper path for `$XDG_DATA_HOME`.
///
/// # Errors
/// See [`base_dir`].
pub fn data_home(env: &impl EnvLookup) -> Result<PathBuf> {
    base_dir(env, Category::Data)
}

/// Get proper path for `$XDG_CACHE_HOME`.
///
/// # Errors
/// See [`base_dir`].
pub fn cache_home(env: &impl EnvLookup) -> Result<PathBuf> {
    base_dir(env, Category::Cache)
}

/// Get proper path for `$XDG_RUNTIME_DIR`, or the temporary directory if it is missing.
pub fn runtime_dir(env: &impl EnvLookup) -> PathBuf {
    env.non_empty_var_os(OsStr::new(Category::Runtime.home_var()))
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
}

/// Directories listed in the category's search variable (`$XDG_CONFIG_DIRS`,
/// `$XDG_DATA_DIRS`), split on the platform path-list separator.
///
/// Empty segments are dropped. Categories without a search variable yield nothing.
pub fn search_roots(env: &impl EnvLookup, category: Category) -> Vec<PathBuf> {
    let Some(value) = category
        .search_var()
        .and_then(|var| env.var_os(OsStr::new(var)))
    else {
        return Vec::new();
    };
    std::env::split_paths(&value)
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect()
}
