//! EnvSource port - 環境変数の抽象化
//!
//! The reporter reads credentials through this trait so tests can swap the
//! process environment for a fixed map.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

/// Read-only view of environment variables.
pub trait EnvSource {
    fn lookup(&self, key: &str) -> Option<OsString>;

    /// A variable is present when it is set to a non-empty value.
    ///
    /// Empty strings count as absent. Whitespace-only values count as present.
    fn is_present(&self, key: &str) -> bool {
        self.lookup(key).is_some_and(|v| !v.is_empty())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn lookup(&self, key: &str) -> Option<OsString> {
        (**self).lookup(key)
    }

    fn is_present(&self, key: &str) -> bool {
        (**self).is_present(key)
    }
}

/// The real process environment. Non-UTF-8 values are still observed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// In-memory environment for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct FixedEnv {
    vars: HashMap<String, OsString>,
}

impl FixedEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl AsRef<OsStr>) -> Self {
        self.vars.insert(key.into(), value.as_ref().to_os_string());
        self
    }
}

impl EnvSource for FixedEnv {
    fn lookup(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_is_absent() {
        let env = FixedEnv::new();
        assert_eq!(env.lookup("OPENAI_API_KEY"), None);
        assert!(!env.is_present("OPENAI_API_KEY"));
    }

    #[test]
    fn empty_is_absent() {
        let env = FixedEnv::new().with("OPENAI_API_KEY", "");
        assert!(env.lookup("OPENAI_API_KEY").is_some());
        assert!(!env.is_present("OPENAI_API_KEY"));
    }

    #[test]
    fn whitespace_is_present() {
        let env = FixedEnv::new().with("GOOGLE_API_KEY", " ");
        assert!(env.is_present("GOOGLE_API_KEY"));
    }

    #[test]
    fn keys_are_case_sensitive() {
        let env = FixedEnv::new().with("openai_api_key", "abc");
        assert!(!env.is_present("OPENAI_API_KEY"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_value_is_present() {
        use std::os::unix::ffi::OsStrExt;

        let env = FixedEnv::new().with("OPENAI_API_KEY", OsStr::from_bytes(&[0xff, 0xfe]));
        assert!(env.is_present("OPENAI_API_KEY"));
    }

    #[test]
    fn references_forward_to_inner_source() {
        fn google_present<E: EnvSource>(env: E) -> bool {
            env.is_present("GOOGLE_API_KEY")
        }

        let env = FixedEnv::new().with("GOOGLE_API_KEY", "g");
        assert!(google_present(&env));
        assert!(google_present(&env as &dyn EnvSource));
    }
}
