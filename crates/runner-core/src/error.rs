use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("serialize status record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("status record is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("write status record: {0}")]
    Write(#[from] std::io::Error),
}
