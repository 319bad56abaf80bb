use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Ungültiges Datum '{0}'. Erwartet wird yyyy-mm-dd.")]
    MalformedDate(String),

    #[error("Kalenderdatei konnte nicht gelesen werden: {0}")]
    Parse(#[from] kalarchiv_rfc::rfc::ical::ParseError),

    #[error("Abbruch durch Benutzer.")]
    UserAborted,

    #[error("Datei '{}' konnte nicht gelesen werden: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Datei '{}' konnte nicht geschrieben werden: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Konsolenfehler: {0}")]
    Console(#[from] io::Error),

    #[error(transparent)]
    Core(#[from] kalarchiv_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Returns whether the run ended because the user declined to continue.
    #[must_use]
    pub fn is_user_abort(&self) -> bool {
        matches!(self, Self::UserAborted)
    }
}
