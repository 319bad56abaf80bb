use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Konfigurationsfehler: {0}")]
    ConfigError(String),

    #[error("Ungültige Eingabe: {0}")]
    InvalidInput(String),
}
