use std::ffi::OsString;

use thiserror::Error;

use crate::base::Category;

/// Errors returned by fallible path accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Neither the category's `$XDG_*_HOME`, `$HOME` nor `$USERPROFILE` is set.
    ///
    /// Never returned for [`Category::Runtime`].
    #[error(
        "could not resolve {category} directory: none of ${var}, $HOME or $USERPROFILE is set",
        var = .category.home_var()
    )]
    EnvironmentNotFound { category: Category },

    /// No directory in the search list contains a file named `name`.
    #[error("file {} is not found", .name.to_string_lossy())]
    NotFound { name: OsString },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
