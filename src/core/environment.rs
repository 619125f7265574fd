use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

const ORIGINAL_PREFIX: &str = "BUNDLER_ORIG_";
const ORIGINAL_NIL: &str = "BUNDLER_ENVIRONMENT_PRESERVER_INTENTIONALLY_NIL";
const BUNDLER_SETUP_OPT: &str = "-rbundler/setup";

/// Environment variables handed to external commands
///
/// Child processes see exactly these variables and nothing inherited.
/// Names and values are kept as `OsString`, so variables that are not
/// valid UTF-8 pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessEnvironment {
    vars: BTreeMap<OsString, OsString>,
}

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an environment free of any enclosing bundler session
    ///
    /// - `BUNDLER_ORIG_<NAME>` values are restored into `<NAME>`
    /// - `BUNDLE_*` and `BUNDLER_*` variables are dropped
    /// - `-rbundler/setup` is stripped from `RUBYOPT`
    /// - bundler entries are stripped from `RUBYLIB`
    pub fn unbundled<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut current = BTreeMap::new();
        let mut originals = BTreeMap::new();

        for (key, value) in vars {
            let key: OsString = key.into();
            let value: OsString = value.into();
            let original = key
                .to_str()
                .and_then(|k| k.strip_prefix(ORIGINAL_PREFIX))
                .map(OsString::from);
            match original {
                Some(name) => originals.insert(name, value),
                None => current.insert(key, value),
            };
        }

        for (name, value) in originals {
            if value == ORIGINAL_NIL {
                current.remove(&name);
            } else {
                current.insert(name, value);
            }
        }

        current.retain(|key, _| {
            key.to_str()
                .is_none_or(|k| !k.starts_with("BUNDLE_") && !k.starts_with("BUNDLER_"))
        });

        let mut env = Self { vars: current };
        env.strip_list("RUBYOPT", ' ', |opt| opt == BUNDLER_SETUP_OPT);
        env.strip_list("RUBYLIB", ':', |dir| dir.contains("/bundler"));
        env
    }

    /// Unbundled copy of the current process environment
    pub fn unbundled_from_current() -> Self {
        Self::unbundled(std::env::vars_os())
    }

    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: impl AsRef<OsStr>) -> Option<OsString> {
        self.vars.remove(key.as_ref())
    }

    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// Drop matching items from a delimited variable, removing it once empty
    ///
    /// Values that are not valid UTF-8 are left as they are.
    fn strip_list(&mut self, key: &str, separator: char, matches: impl Fn(&str) -> bool) {
        let Some(value) = self.vars.get(OsStr::new(key)).and_then(|v| v.to_str()) else {
            return;
        };

        let kept: Vec<&str> = value
            .split(separator)
            .filter(|item| !item.is_empty() && !matches(item))
            .collect();
        let joined = kept.join(&separator.to_string());

        if joined.is_empty() {
            self.vars.remove(OsStr::new(key));
        } else {
            self.vars.insert(OsString::from(key), OsString::from(joined));
        }
    }
}
