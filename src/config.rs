use std::env;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use thiserror::Error;

/// The template is expected right next to the executable.
pub const TEMPLATE_FILE_NAME: &str = "label_template.txt";

/// Format of the `{DATE}` fallback, e.g. `16/10/2026`.
const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to locate the running executable: {0}")]
    CurrentExe(#[from] io::Error),

    #[error("The executable path has no parent directory: {}", .0.display())]
    NoBaseDir(PathBuf),
}

/// Everything a print job would otherwise pick up from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    base_dir: PathBuf,
    today: NaiveDate,
}

impl Config {
    pub fn new(base_dir: impl Into<PathBuf>, today: NaiveDate) -> Self {
        Self {
            base_dir: base_dir.into(),
            today,
        }
    }

    /// Use the directory of the running executable and the local date.
    pub fn from_env() -> Result<Self, Error> {
        let exe = env::current_exe()?;
        let base_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::NoBaseDir(exe.clone()))?;

        Ok(Self::new(base_dir, Local::now().date_naive()))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn template_path(&self) -> PathBuf {
        self.base_dir.join(TEMPLATE_FILE_NAME)
    }

    /// The value `{DATE}` takes when no `--date` is given.
    pub fn default_date(&self) -> String {
        self.today.format(DATE_FORMAT).to_string()
    }
}
