use std::{
    ffi::OsStr,
    fs::{metadata, read_dir},
    io,
    path::{Path, PathBuf},
};

mod sealed {
    use std::path::Path;

    pub trait Sealed {}
    impl Sealed for Path {}
}

/// Extension trait for [`Path`] with read-only lookups used when searching for files.
///
/// ```rust,no_run
/// # use xdgdir::fs::PathExt;
/// # use std::ffi::OsStr;
/// # use std::path::Path;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = Path::new("/etc/xdg/myapp");
/// if let Some(found) = dir.child_named(OsStr::new("settings.toml")) {
///     println!("{}", found.display());
/// }
/// # Ok(())
/// # }
/// ```
pub trait PathExt: sealed::Sealed {
    /// Return `self` joined with the first immediate entry whose file name equals `name`
    /// byte-for-byte.
    ///
    /// Entries are read lazily and the listing stops at the first hit. Any I/O failure (missing
    /// directory, permissions, broken entry) is treated as "no such entry".
    fn child_named(&self, name: &OsStr) -> Option<PathBuf>;

    /// Iterator over immediate entries of `self` whose file name equals `name`.
    ///
    /// # Returns
    /// [`Err`](io::Error) if `self` can't be stat'ed or listed.
    fn children_named<'a>(
        &self,
        name: &'a OsStr,
    ) -> io::Result<impl Iterator<Item = PathBuf> + 'a>;
}

impl PathExt for Path {
    fn child_named(&self, name: &OsStr) -> Option<PathBuf> {
        self.children_named(name).ok()?.next()
    }

    fn children_named<'a>(
        &self,
        name: &'a OsStr,
    ) -> io::Result<impl Iterator<Item = PathBuf> + 'a> {
        metadata(self)?;
        let dir = self.to_path_buf();
        Ok(read_dir(self)?
            .filter_map(Result::ok)
            .filter(move |entry| entry.file_name().as_os_str() == name)
            .map(move |entry| dir.join(entry.file_name())))
    }
}
