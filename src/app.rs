//! Per-application paths.
//!
//! [`App`] joins an application name onto each base directory from [`base`](crate::base) and
//! searches the user directory plus `$XDG_CONFIG_DIRS`/`$XDG_DATA_DIRS` for existing files.
//!
//! ```rust,no_run
//! # use xdgdir::App;
//! # fn foo() -> xdgdir::Result<()> {
//! let app = App::new("myapp");
//!
//! let cache = app.cache_file("index.db")?; // ~/.cache/myapp/index.db
//! let socket = app.runtime_file("myapp.sock"); // $XDG_RUNTIME_DIR/myapp/myapp.sock
//! let settings = app.find_config_file("settings.toml")?;
//! # Ok(())
//! # }
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::base::{self, Category};
use crate::error::{Error, Result};
use crate::fs::PathExt;
use crate::os::env::{EnvLookup, ProcessEnv};

/// Application name bound to an environment source.
///
/// Nothing is cached: every accessor re-reads the environment, so results follow changes to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct App<E = ProcessEnv> {
    name: String,
    env: E,
}

impl App {
    /// App reading the live process environment.
    ///
    /// `name` is used verbatim as a path segment; it is not validated.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_env(name, ProcessEnv)
    }
}

impl<E: EnvLookup> App<E> {
    /// App reading environmental variables from `env`.
    ///
    /// # Examples
    /// ```rust
    /// use std::path::Path;
    /// use xdgdir::App;
    /// use xdgdir::os::env::Env;
    ///
    /// let env: Env = [("XDG_CONFIG_HOME", "/xdg")].into_iter().collect();
    /// let app = App::with_env("myapp", env);
    /// assert_eq!(app.config_dir().unwrap(), Path::new("/xdg").join("myapp"));
    /// ```
    pub fn with_env(name: impl Into<String>, env: E) -> Self {
        Self {
            name: name.into(),
            env,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Base directory of `category` joined with the app name.
    ///
    /// # Errors
    /// [`Error::EnvironmentNotFound`] as reported by [`base::base_dir`]. Never fails for
    /// [`Category::Runtime`].
    pub fn dir(&self, category: Category) -> Result<PathBuf> {
        base::base_dir(&self.env, category).map(|dir| dir.join(&self.name))
    }

    /// [`App::dir`] joined with `name`. The file isn't required to exist.
    ///
    /// # Errors
    /// Same as [`App::dir`].
    pub fn file(&self, category: Category, name: impl AsRef<Path>) -> Result<PathBuf> {
        self.dir(category).map(|dir| dir.join(name))
    }

    /// Directories searched by [`App::find`], most specific first.
    ///
    /// That is [`App::dir`] (omitted if it can't be resolved) followed by each entry of the
    /// category's search variable joined with the app name.
    pub fn search_dirs(&self, category: Category) -> Vec<PathBuf> {
        self.dir(category)
            .ok()
            .into_iter()
            .chain(
                base::search_roots(&self.env, category)
                    .into_iter()
                    .map(|root| root.join(&self.name)),
            )
            .collect()
    }

    /// Find an existing entry called `name` in [`App::search_dirs`]. First match wins.
    ///
    /// Directories that are missing or unreadable are skipped.
    ///
    /// # Errors
    /// [`Error::NotFound`] if no directory contains `name`.
    pub fn find(&self, category: Category, name: impl AsRef<OsStr>) -> Result<PathBuf> {
        let name = name.as_ref();
        self.search_dirs(category)
            .iter()
            .find_map(|dir| {
                let found = dir.child_named(name);
                trace_probe(dir, name, found.as_deref());
                found
            })
            .ok_or_else(|| Error::NotFound {
                name: name.to_os_string(),
            })
    }

    /// Base directory path of app's config files.
    ///
    /// 1. `$XDG_CONFIG_HOME/{name}`
    /// 2. `$HOME/.config/{name}`
    /// 3. `$USERPROFILE/.config/{name}`
    ///
    /// # Errors
    /// [`Error::EnvironmentNotFound`] if none of the above variables is set.
    pub fn config_dir(&self) -> Result<PathBuf> {
        self.dir(Category::Config)
    }

    /// [`App::config_dir`] joined with `name`.
    ///
    /// # Errors
    /// Same as [`App::config_dir`].
    pub fn config_file(&self, name: impl AsRef<Path>) -> Result<PathBuf> {
        self.file(Category::Config, name)
    }

    /// Find config file called `name`, first in [`App::config_dir`], then in
    /// `$XDG_CONFIG_DIRS/{name}` in listed order.
    ///
    /// # Errors
    /// [`Error::NotFound`] if no directory contains it.
    pub fn find_config_file(&self, name: impl AsRef<OsStr>) -> Result<PathBuf> {
        self.find(Category::Config, name)
    }

    /// Base directory path of app's data files.
    ///
    /// 1. `$XDG_DATA_HOME/{name}`
    /// 2. `$HOME/.local/share/{name}`
    /// 3. `$USERPROFILE/.local/share/{name}`
    ///
    /// # Errors
    /// [`Error::EnvironmentNotFound`] if none of the above variables is set.
    pub fn data_dir(&self) -> Result<PathBuf> {
        self.dir(Category::Data)
    }

    /// [`App::data_dir`] joined with `name`.
    ///
    /// # Errors
    /// Same as [`App::data_dir`].
    pub fn data_file(&self, name: impl AsRef<Path>) -> Result<PathBuf> {
        self.file(Category::Data, name)
    }

    /// Find data file called `name`, first in [`App::data_dir`], then in
    /// `$XDG_DATA_DIRS/{name}` in listed order.
    ///
    /// # Errors
    /// [`Error::NotFound`] if no directory contains it.
    pub fn find_data_file(&self, name: impl AsRef<OsStr>) -> Result<PathBuf> {
        self.find(Category::Data, name)
    }

    /// Base directory path of app's cache files.
    ///
    /// 1. `$XDG_CACHE_HOME/{name}`
    /// 2. `$HOME/.cache/{name}`
    /// 3. `$USERPROFILE/.cache/{name}`
    ///
    /// # Errors
    /// [`Error::EnvironmentNotFound`] if none of the above variables is set.
    pub fn cache_dir(&self) -> Result<PathBuf> {
        self.dir(Category::Cache)
    }

    /// [`App::cache_dir`] joined with `name`.
    ///
    /// # Errors
    /// Same as [`App::cache_dir`].
    pub fn cache_file(&self, name: impl AsRef<Path>) -> Result<PathBuf> {
        self.file(Category::Cache, name)
    }

    /// `$XDG_RUNTIME_DIR/{name}`, or the temporary directory joined with the app name.
    pub fn runtime_dir(&self) -> PathBuf {
        base::runtime_dir(&self.env).join(&self.name)
    }

    /// [`App::runtime_dir`] joined with `name`.
    pub fn runtime_file(&self, name: impl AsRef<Path>) -> PathBuf {
        self.runtime_dir().join(name)
    }
}

#[cfg(feature = "log")]
fn trace_probe(dir: &Path, name: &OsStr, found: Option<&Path>) {
    match found {
        Some(path) => log::trace!("found {}", path.display()),
        None => log::trace!("no {:?} in {}", name, dir.display()),
    }
}

#[cfg(not(feature = "log"))]
fn trace_probe(_dir: &Path, _name: &OsStr, _found: Option<&Path>) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::os::env::Env;
    use claim::{assert_err, assert_ok, assert_ok_eq};
    use std::fs::{File, create_dir_all};
    use tempfile::tempdir;

    const APP: &str = "myapp";

    fn app(vars: &[(&str, &OsStr)]) -> App<Env> {
        App::with_env(APP, vars.iter().copied().collect())
    }

    fn touch(path: &Path) {
        create_dir_all(path.parent().unwrap()).unwrap();
        File::create(path).unwrap();
    }

    fn list(dirs: &[&Path]) -> std::ffi::OsString {
        std::env::join_paths(dirs).expect("needed for tests")
    }

    #[test]
    fn dirs_follow_override() {
        let app = app(&[
            ("XDG_CONFIG_HOME", OsStr::new("/xdg/config")),
            ("XDG_DATA_HOME", OsStr::new("/xdg/data")),
            ("XDG_CACHE_HOME", OsStr::new("/xdg/cache")),
            ("XDG_RUNTIME_DIR", OsStr::new("/run/user/1000")),
            ("HOME", OsStr::new("/home/u")),
        ]);
        assert_ok_eq!(app.config_dir(), Path::new("/xdg/config").join(APP));
        assert_ok_eq!(app.data_dir(), Path::new("/xdg/data").join(APP));
        assert_ok_eq!(app.cache_dir(), Path::new("/xdg/cache").join(APP));
        assert_eq!(app.runtime_dir(), Path::new("/run/user/1000").join(APP));
    }

    #[test]
    fn dirs_fall_back_to_home() {
        let app = app(&[("HOME", OsStr::new("/home/u"))]);
        let home = Path::new("/home/u");
        assert_ok_eq!(app.config_dir(), home.join(".config").join(APP));
        assert_ok_eq!(app.data_dir(), home.join(".local").join("share").join(APP));
        assert_ok_eq!(app.cache_dir(), home.join(".cache").join(APP));
        assert_eq!(app.runtime_dir(), std::env::temp_dir().join(APP));
    }

    #[test]
    fn files_join_onto_dirs() {
        let app = app(&[("USERPROFILE", OsStr::new("/win"))]);
        for category in Category::ALL {
            assert_ok_eq!(
                app.file(category, "f.txt"),
                app.dir(category).unwrap().join("f.txt")
            );
        }
        assert_ok_eq!(app.config_file("a"), app.config_dir().unwrap().join("a"));
        assert_ok_eq!(app.data_file("b"), app.data_dir().unwrap().join("b"));
        assert_ok_eq!(app.cache_file("c"), app.cache_dir().unwrap().join("c"));
        assert_eq!(app.runtime_file("d"), app.runtime_dir().join("d"));
    }

    #[test]
    fn missing_home_propagates() {
        let app = app(&[]);
        for result in [
            app.config_dir(),
            app.data_dir(),
            app.cache_dir(),
            app.config_file("x"),
            app.data_file("x"),
            app.cache_file("x"),
        ] {
            assert!(matches!(
                assert_err!(result),
                Error::EnvironmentNotFound { .. }
            ));
        }
        // Runtime can't fail.
        assert_ok!(app.dir(Category::Runtime));
    }

    #[test]
    fn repeated_calls_agree() {
        let app = app(&[("HOME", OsStr::new("/home/u"))]);
        assert_eq!(app.config_file("x"), app.config_file("x"));
        assert_eq!(app.search_dirs(Category::Data), app.search_dirs(Category::Data));
    }

    #[test]
    fn search_dirs_order() {
        let list = list(&[Path::new("/etc/xdg"), Path::new("/opt/xdg")]);
        let app = app(&[("HOME", OsStr::new("/home/u")), ("XDG_CONFIG_DIRS", list.as_os_str())]);
        assert_eq!(
            app.search_dirs(Category::Config),
            vec![
                Path::new("/home/u").join(".config").join(APP),
                Path::new("/etc/xdg").join(APP),
                Path::new("/opt/xdg").join(APP),
            ]
        );
    }

    #[test]
    fn search_dirs_without_primary() {
        let list = list(&[Path::new("/usr/share")]);
        let app = app(&[("XDG_DATA_DIRS", list.as_os_str())]);
        assert_eq!(
            app.search_dirs(Category::Data),
            vec![Path::new("/usr/share").join(APP)]
        );
    }

    #[test]
    fn find_in_home_config() {
        let home = tempdir().expect("needed for tests");
        let settings = home.path().join(".config").join(APP).join("settings.toml");
        touch(&settings);

        let app = app(&[("HOME", home.path().as_os_str())]);
        assert_ok_eq!(app.find_config_file("settings.toml"), settings);
    }

    #[test]
    fn find_continues_past_a_miss() {
        let home = tempdir().expect("needed for tests");
        let system = tempdir().expect("needed for tests");
        create_dir_all(home.path().join(".config").join(APP)).unwrap();
        let settings = system.path().join(APP).join("settings.toml");
        touch(&settings);

        let missing = home.path().join("missing");
        let list = list(&[missing.as_path(), system.path()]);
        let app = app(&[("HOME", home.path().as_os_str()), ("XDG_CONFIG_DIRS", list.as_os_str())]);
        assert_ok_eq!(app.find_config_file("settings.toml"), settings);
    }

    #[test]
    fn find_prefers_user_dir() {
        let home = tempdir().expect("needed for tests");
        let system = tempdir().expect("needed for tests");
        let user = home.path().join(".local").join("share").join(APP).join("db");
        touch(&user);
        touch(&system.path().join(APP).join("db"));

        let list = list(&[system.path()]);
        let app = app(&[("HOME", home.path().as_os_str()), ("XDG_DATA_DIRS", list.as_os_str())]);
        assert_ok_eq!(app.find_data_file("db"), user);
    }

    #[test]
    fn find_first_listed_system_dir_wins() {
        let first = tempdir().expect("needed for tests");
        let second = tempdir().expect("needed for tests");
        let expected = first.path().join(APP).join("db");
        touch(&expected);
        touch(&second.path().join(APP).join("db"));

        let list = list(&[first.path(), second.path()]);
        let app = app(&[("XDG_DATA_DIRS", list.as_os_str())]);
        assert_ok_eq!(app.find_data_file("db"), expected);
    }

    #[test]
    fn find_reports_missing_name() {
        let home = tempdir().expect("needed for tests");
        touch(&home.path().join(".config").join(APP).join("other.toml"));

        let app = app(&[("HOME", home.path().as_os_str())]);
        let err = assert_err!(app.find_config_file("settings.toml"));
        assert_eq!(
            err,
            Error::NotFound {
                name: "settings.toml".into()
            }
        );
        assert_eq!(err.to_string(), "file settings.toml is not found");
    }

    #[test]
    fn find_without_any_environment() {
        let app = app(&[]);
        assert!(matches!(
            assert_err!(app.find_config_file("settings.toml")),
            Error::NotFound { .. }
        ));
    }

    #[test]
    fn find_in_cache_only_looks_at_primary() {
        let home = tempdir().expect("needed for tests");
        let cached = home.path().join(".cache").join(APP).join("index");
        touch(&cached);

        let app = app(&[("HOME", home.path().as_os_str())]);
        assert_ok_eq!(app.find(Category::Cache, "index"), cached);
        assert_eq!(app.search_dirs(Category::Cache).len(), 1);
    }
}
