//! Domain model (backends, status record, ids).

pub mod backend;
pub mod ids;
pub mod status;

pub use backend::Backend;
pub use ids::RunId;
pub use status::{
    EnvBackends, EnvBackendsError, RUNNER_NAME, RunStatus, STUB_MESSAGE, StatusRecord,
};
