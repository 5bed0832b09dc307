//! Ports - 外部環境との境界
//!
//! Each trait hides one piece of the host process so the reporter can be
//! exercised without touching it.

pub mod env;

pub use self::env::{EnvSource, FixedEnv, ProcessEnv};
