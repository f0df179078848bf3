use std::path::{Path, PathBuf};

use crate::{
    error::{AnalysisError, Result},
    utils,
};

/// Directory the text reports are written to.
#[derive(Debug, Clone)]
pub struct FileOutput {
    directory: PathBuf,
}

impl FileOutput {
    /// Validates the output directory. A leading `~` is expanded to the
    /// home directory.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Config`] when the path does not point to an
    /// existing directory.
    pub fn new(path: &str) -> Result<Self> {
        let directory = expand_home(path.trim());
        if !directory.is_dir() {
            return Err(AnalysisError::Config(format!(
                "{} is not a valid path",
                directory.display()
            )));
        }
        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the report for the given playlist name.
    pub fn report_path(&self, playlist_name: &str) -> PathBuf {
        self.directory
            .join(format!("{}.txt", utils::report_file_name(playlist_name)))
    }

    /// Writes the report, replacing an earlier report of the same playlist.
    pub async fn write(&self, playlist_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.report_path(playlist_name);
        async_fs::write(&path, contents).await?;
        Ok(path)
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}
