//! Form values persisted between runs.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::DatePickResult;
use crate::form::FormValues;

/// JSON file holding one [`FormValues`].
pub struct FormStore {
    path: PathBuf,
}

impl FormStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FormStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the form. A missing file is an empty form.
    pub fn load(&self) -> DatePickResult<FormValues> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no state file yet");
            return Ok(FormValues::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let form = serde_json::from_str(&content)?;
        Ok(form)
    }

    /// Write the form through a temp file so a crash never leaves half a file.
    pub fn save(&self, form: &FormValues) -> DatePickResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        let content = serde_json::to_string_pretty(form)?;
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;

        debug!(path = %self.path.display(), fields = form.values.len(), "saved form state");
        Ok(())
    }
}
