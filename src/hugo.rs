//! Site-generator collaborator: drives the hugo binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{DocsPublishError, Result};

/// Runs hugo against the generator repository's site sources and writes
/// the rendered site into the publishing repository.
pub struct HugoClient {
    bin_path: String,
    source_path: PathBuf,
    out_path: PathBuf,
}

impl HugoClient {
    /// Create a client for the conventional repository layout: site
    /// sources under `{generator_repo}/hugo`, rendered output under
    /// `{output_repo}/docs`.
    pub fn new(generator_repo: &Path, output_repo: &Path, bin: impl Into<String>) -> Self {
        HugoClient {
            bin_path: bin.into(),
            source_path: generator_repo.join("hugo"),
            out_path: output_repo.join("docs"),
        }
    }

    /// Verify the hugo binary is reachable and answers `hugo version`.
    ///
    /// Installing hugo is the environment's job; a missing binary is a
    /// hard error here.
    pub fn locate(&self) -> Result<()> {
        let output = Command::new(&self.bin_path)
            .arg("version")
            .output()
            .map_err(|e| {
                DocsPublishError::generator(format!(
                    "hugo binary '{}' not found in path: {}",
                    self.bin_path, e
                ))
            })?;

        if !output.status.success() {
            return Err(DocsPublishError::generator(format!(
                "'{} version' exited with {}",
                self.bin_path,
                output.status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }

    /// Content directory of the site sources; selected docs trees are
    /// copied below it.
    pub fn content_dir(&self) -> PathBuf {
        self.source_path.join("content")
    }

    /// Data directory of the site sources; revision metadata files go
    /// here for the templating layer.
    pub fn data_dir(&self) -> PathBuf {
        self.source_path.join("data")
    }

    /// Run the site build, replacing any previously rendered output.
    pub fn build(&self) -> Result<()> {
        if self.out_path.exists() {
            fs::remove_dir_all(&self.out_path)?;
        }

        let output = Command::new(&self.bin_path)
            .arg("--source")
            .arg(&self.source_path)
            .arg("--destination")
            .arg(&self.out_path)
            .output()
            .map_err(|e| {
                DocsPublishError::generator(format!("failed to execute {}: {}", self.bin_path, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            return Err(DocsPublishError::generator(format!(
                "website build failed: hugo exited with {}\nStdout: {}\nStderr: {}",
                output.status.code().unwrap_or(-1),
                stdout,
                stderr
            )));
        }

        Ok(())
    }
}
