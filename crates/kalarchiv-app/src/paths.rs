//! Output file names derived from the input file.

use std::path::{Path, PathBuf};

use kalarchiv_core::constants::{ACTIVE_FILE_SUFFIX, ARCHIVE_FILE_SUFFIX, LOG_FILE_SUFFIX};
use kalarchiv_core::error::CoreError;

use crate::error::AppResult;

/// The three files a run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub active: PathBuf,
    pub archive: PathBuf,
    pub log: PathBuf,
}

impl OutputPaths {
    /// Derives `<stem>_aktiv.ics`, `<stem>_archiv.ics` and `<stem>.log` in
    /// `output_dir`, where `<stem>` is the input's file name without its
    /// last extension.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidInput`] if the input has no file name.
    pub fn derive(input: &Path, output_dir: &Path) -> AppResult<Self> {
        let stem = input
            .file_stem()
            .ok_or_else(|| {
                CoreError::InvalidInput(format!(
                    "'{}' enthält keinen Dateinamen",
                    input.display()
                ))
            })?
            .to_string_lossy();

        Ok(Self {
            active: output_dir.join(format!("{stem}{ACTIVE_FILE_SUFFIX}")),
            archive: output_dir.join(format!("{stem}{ARCHIVE_FILE_SUFFIX}")),
            log: output_dir.join(format!("{stem}{LOG_FILE_SUFFIX}")),
        })
    }

    /// All targets in the order they are checked and written.
    #[must_use]
    pub fn all(&self) -> [&Path; 3] {
        [&self.active, &self.archive, &self.log]
    }
}
