//! Reads the source calendar and prepares the two output documents.

use std::fs;
use std::path::Path;

use kalarchiv_rfc::rfc::ical::core::names;
use kalarchiv_rfc::rfc::ical::{ICalendar, ParseResult, parse_bytes};

use crate::error::{AppError, AppResult};

/// Calendar-level properties copied into both outputs when present.
pub const METADATA_PROPERTIES: [&str; 4] =
    [names::PRODID, names::VERSION, names::CALSCALE, names::METHOD];

/// The parsed source plus the empty active and archive documents.
#[derive(Debug, Clone)]
pub struct LoadedCalendar {
    pub source: ICalendar,
    pub active: ICalendar,
    pub archive: ICalendar,
}

/// Reads the raw bytes of the source file.
///
/// ## Errors
/// Returns [`AppError::Read`] if the file cannot be read.
pub fn read_source(path: &Path) -> AppResult<Vec<u8>> {
    fs::read(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses the source and creates both output documents carrying its
/// metadata.
///
/// ## Errors
/// Returns a parse error if the bytes are not a well-formed calendar.
pub fn load(bytes: &[u8]) -> ParseResult<LoadedCalendar> {
    let source = parse_bytes(bytes)?;
    let active = output_shell(&source);
    let archive = output_shell(&source);

    tracing::info!(
        components = source.components().len(),
        metadata = active.root.properties.len(),
        "Source calendar loaded"
    );

    Ok(LoadedCalendar {
        source,
        active,
        archive,
    })
}

/// Creates an empty calendar with the source's whitelisted metadata, in
/// whitelist order, copied verbatim.
#[must_use]
pub fn output_shell(source: &ICalendar) -> ICalendar {
    let mut shell = ICalendar::empty();
    for name in METADATA_PROPERTIES {
        if let Some(prop) = source.property(name) {
            shell.root.add_property(prop.clone());
        }
    }
    shell
}
