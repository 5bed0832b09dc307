//! runner-core
//!
//! Building blocks for the `mcp` runner status report.
//!
//! # モジュール構成
//! - **domain**: backend catalog, status record, run id
//! - **ports**: environment access (`EnvSource`)
//! - **report**: `StatusReporter` (probe → build → emit)
//! - **error**: `RunnerError`
//! - **observability**: stderr tracing setup

pub mod domain;
pub mod error;
pub mod observability;
pub mod ports;
pub mod report;

pub use domain::{Backend, EnvBackends, RunStatus, StatusRecord};
pub use error::RunnerError;
pub use report::{StatusReporter, report_to_stdout};
