use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShieldError>;

#[derive(Error, Debug)]
pub enum ShieldError {
    #[error("Rule error ({code}): {message}")]
    Rule { code: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scan failed for {document}: {message}")]
    Scan { document: String, message: String },

    #[error("Output error: {0}")]
    Output(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ShieldError {
    pub fn exit_code(&self) -> i32 {
        2
    }
}
