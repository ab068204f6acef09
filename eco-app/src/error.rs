use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] eco_config::ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] eco_store::StoreError),

    #[error("Session error: {0}")]
    Session(#[from] eco_session::SessionError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
