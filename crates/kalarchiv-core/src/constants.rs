/// File naming constants shared across crates
pub const ICS_EXTENSION: &str = "ics";
pub const LOG_EXTENSION: &str = "log";

pub const ACTIVE_SUFFIX: &str = "_aktiv";
pub const ARCHIVE_SUFFIX: &str = "_archiv";

pub const ACTIVE_FILE_SUFFIX: &str = const_str::concat!(ACTIVE_SUFFIX, ".", ICS_EXTENSION);
pub const ARCHIVE_FILE_SUFFIX: &str = const_str::concat!(ARCHIVE_SUFFIX, ".", ICS_EXTENSION);
pub const LOG_FILE_SUFFIX: &str = const_str::concat!(".", LOG_EXTENSION);

pub const DEFAULT_INPUT_FILE: &str = const_str::concat!("Kalender.", ICS_EXTENSION);
pub const DEFAULT_FILTER_DATE: &str = "2025-06-01";
pub const FILTER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Program name used in the report header
pub const PROGRAM_NAME: &str = "kalarchiv";

pub const CONFIG_FILE_NAME: &str = const_str::concat!(PROGRAM_NAME, ".toml");
pub const ENV_PREFIX: &str = "KALARCHIV";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
