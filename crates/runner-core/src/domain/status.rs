//! Status record: the single value the runner prints per invocation.
//!
//! Shape on the wire (field order is part of the contract):
//!
//! ```text
//! {"runner": "mcp", "status": "stub", "message": "Runner executed (placeholder)",
//!  "env_backends": {"OPENAI_API_KEY": false, "GOOGLE_API_KEY": false}}
//! ```

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::backend::Backend;

/// Runner identifier reported in every record.
pub const RUNNER_NAME: &str = "mcp";

/// Human-readable message reported in every record.
pub const STUB_MESSAGE: &str = "Runner executed (placeholder)";

/// Execution status of the runner.
///
/// Only the stub sentinel exists until backend invocation is implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Stub,
}

/// Presence flag per backend credential.
///
/// Serialized as a JSON object keyed by credential variable name, in
/// [`Backend::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "BTreeMap<String, bool>")]
pub struct EnvBackends {
    present: [bool; Backend::COUNT],
}

#[derive(Debug, thiserror::Error)]
pub enum EnvBackendsError {
    #[error("unknown backend credential: {0}")]
    Unknown(String),

    #[error("missing backend credential: {0}")]
    Missing(Backend),
}

impl EnvBackends {
    /// All credentials absent.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, backend: Backend, present: bool) -> Self {
        self.present[backend.index()] = present;
        self
    }

    pub fn is_present(&self, backend: Backend) -> bool {
        self.present[backend.index()]
    }

    /// `(backend, present)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Backend, bool)> + '_ {
        Backend::ALL.into_iter().map(|b| (b, self.is_present(b)))
    }

    pub fn count_present(&self) -> usize {
        self.present.iter().filter(|p| **p).count()
    }
}

impl FromIterator<(Backend, bool)> for EnvBackends {
    fn from_iter<I: IntoIterator<Item = (Backend, bool)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::none(), |acc, (backend, present)| acc.with(backend, present))
    }
}

impl Serialize for EnvBackends {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Backend::COUNT))?;
        for (backend, present) in self.iter() {
            map.serialize_entry(backend.env_var(), &present)?;
        }
        map.end()
    }
}

impl TryFrom<BTreeMap<String, bool>> for EnvBackends {
    type Error = EnvBackendsError;

    fn try_from(raw: BTreeMap<String, bool>) -> Result<Self, Self::Error> {
        let mut out = Self::none();
        let mut seen = [false; Backend::COUNT];
        for (name, present) in raw {
            let backend = Backend::from_env_var(&name).ok_or(EnvBackendsError::Unknown(name))?;
            seen[backend.index()] = true;
            out = out.with(backend, present);
        }
        if let Some(missing) = Backend::ALL.into_iter().find(|b| !seen[b.index()]) {
            return Err(EnvBackendsError::Missing(missing));
        }
        Ok(out)
    }
}

/// One status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    runner: String,
    status: RunStatus,
    message: String,
    env_backends: EnvBackends,
}

impl StatusRecord {
    /// The placeholder record: constant identity fields plus observed presence.
    pub fn stub(env_backends: EnvBackends) -> Self {
        Self {
            runner: RUNNER_NAME.to_string(),
            status: RunStatus::Stub,
            message: STUB_MESSAGE.to_string(),
            env_backends,
        }
    }

    pub fn runner(&self) -> &str {
        &self.runner
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn env_backends(&self) -> &EnvBackends {
        &self.env_backends
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_status_serializes_lowercase() {
        let s = serde_json::to_string(&RunStatus::Stub).unwrap();
        assert_eq!(s, "\"stub\"");
    }

    #[test]
    fn stub_record_has_exact_wire_shape() {
        let env = EnvBackends::none().with(Backend::OpenAi, true);
        let s = crate::report::to_line(&StatusRecord::stub(env)).unwrap();
        assert_eq!(
            s,
            r#"{"runner": "mcp", "status": "stub", "message": "Runner executed (placeholder)", "env_backends": {"OPENAI_API_KEY": true, "GOOGLE_API_KEY": false}}"#
        );
    }

    #[test]
    fn env_backends_keys_follow_catalog_order() {
        // Google が true でも並び順は変わらない
        let env = EnvBackends::none().with(Backend::Google, true);
        let s = serde_json::to_string(&env).unwrap();
        assert_eq!(s, r#"{"OPENAI_API_KEY":false,"GOOGLE_API_KEY":true}"#);
    }

    #[test]
    fn record_parses_back() {
        let env: EnvBackends = [(Backend::OpenAi, true), (Backend::Google, true)]
            .into_iter()
            .collect();
        let record = StatusRecord::stub(env);

        let s = serde_json::to_string(&record).unwrap();
        let back: StatusRecord = serde_json::from_str(&s).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.env_backends().count_present(), 2);
    }

    #[test]
    fn unknown_credential_is_rejected() {
        let err = serde_json::from_str::<EnvBackends>(
            r#"{"OPENAI_API_KEY":true,"GOOGLE_API_KEY":false,"OTHER_KEY":true}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown backend credential: OTHER_KEY"));
    }

    #[test]
    fn missing_credential_is_rejected() {
        let err = serde_json::from_str::<EnvBackends>(r#"{"OPENAI_API_KEY":true}"#).unwrap_err();
        assert!(err.to_string().contains("missing backend credential: GOOGLE_API_KEY"));
    }

    #[test]
    fn identity_fields_are_constant() {
        let a = StatusRecord::stub(EnvBackends::none());
        let b = StatusRecord::stub(EnvBackends::none().with(Backend::Google, true));
        assert_eq!(a.runner(), b.runner());
        assert_eq!(a.status(), b.status());
        assert_eq!(a.message(), b.message());
        assert_eq!(a.runner(), RUNNER_NAME);
        assert_eq!(a.message(), STUB_MESSAGE);
    }
}
