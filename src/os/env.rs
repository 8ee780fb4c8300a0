use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

/// Source of environmental variables.
///
/// Every resolver in this crate reads through this trait, so tests (and callers wanting a frozen
/// view) can swap the live process environment for a controlled one.
pub trait EnvLookup {
    /// Get environmental variable pointed by `key`, `None` if it is missing.
    fn var_os(&self, key: &OsStr) -> Option<OsString>;

    /// Like [`EnvLookup::var_os`], but an empty value counts as missing.
    fn non_empty_var_os(&self, key: &OsStr) -> Option<OsString> {
        self.var_os(key).filter(|value| !value.is_empty())
    }
}

/// Live view of the process environment: each lookup calls [`std::env::var_os`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var_os(&self, key: &OsStr) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&OsStr) -> Option<OsString>,
{
    fn var_os(&self, key: &OsStr) -> Option<OsString> {
        self(key)
    }
}

/// Snapshot of environmental variables, which is safe to access on Windows: its
/// environmental variables are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct Env {
    keys: HashMap<OsString, OsString>,

    normalised_keys: HashMap<OsString, OsString>,
}

impl Env {
    /// Snapshot the current process environment.
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create new [`Env`] using `env` as existing environmental variables.
    ///
    /// # Examples
    /// ```rust
    /// use std::collections::HashMap;
    /// use std::ffi::OsStr;
    /// use xdgdir::os::env::{Env, EnvLookup};
    ///
    /// let env = Env::new_from(HashMap::from([("HOME".into(), "/home/u".into())]));
    /// assert_eq!(env.var_os(OsStr::new("HOME")), Some("/home/u".into()));
    /// assert_eq!(env.var_os(OsStr::new("XDG_CONFIG_HOME")), None);
    /// ```
    pub fn new_from(env: HashMap<OsString, OsString>) -> Self {
        Self {
            normalised_keys: Env::normalize_map(env.clone()),
            keys: env,
        }
    }

    fn normalize_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }

    fn normalize_map(keys: HashMap<OsString, OsString>) -> HashMap<OsString, OsString> {
        keys.into_iter()
            .map(|(key, value)| (Env::normalize_key(key), value))
            .collect()
    }

    /// Get environmental variable pointed by `key` without copying it.
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        match self.keys.get(key) {
            Some(x) => Some(x),
            None => {
                if cfg!(target_os = "windows") {
                    self.normalised_keys
                        .get(&Env::normalize_key(key))
                        .map(|x| x.as_ref())
                } else {
                    None
                }
            }
        }
    }
}

impl EnvLookup for Env {
    fn var_os(&self, key: &OsStr) -> Option<OsString> {
        self.get_os(key).map(OsStr::to_os_string)
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new_from(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
