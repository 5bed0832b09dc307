//! Backend catalog: the LLM providers the runner knows credentials for.
//!
//! A backend is identified only by its credential environment variable.
//! Nothing here talks to a provider.

use std::fmt;

/// An external LLM provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Backend {
    OpenAi,
    Google,
}

impl Backend {
    /// Catalog order. `env_backends` is serialized in this order.
    pub const ALL: [Backend; 2] = [Backend::OpenAi, Backend::Google];

    /// Number of backends in the catalog.
    pub const COUNT: usize = Self::ALL.len();

    /// Name of the credential environment variable.
    pub fn env_var(self) -> &'static str {
        match self {
            Backend::OpenAi => "OPENAI_API_KEY",
            Backend::Google => "GOOGLE_API_KEY",
        }
    }

    /// Reverse lookup from a credential variable name.
    pub fn from_env_var(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.env_var() == name)
    }

    /// Position in [`Backend::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            Backend::OpenAi => 0,
            Backend::Google => 1,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}
