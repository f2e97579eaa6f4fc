//! All-or-nothing output directories
//!
//! Artifacts are written into a hidden staging directory beside the target
//! and renamed into place by [`StagedDir::commit`]. Every stage has a unique
//! name, so runs sharing a target never touch each other's files. Dropping an
//! uncommitted stage removes it, so a failed run never leaves a directory that
//! looks like a finished one.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::Result;

/// Staging area for one output directory
#[derive(Debug)]
pub struct StagedDir {
    stage: TempDir,
    parent: PathBuf,
    name: String,
    target: PathBuf,
    committed: bool,
}

impl StagedDir {
    /// Prepare staging for `parent/name`, creating `parent` if needed
    pub fn create(parent: &Path, name: &str) -> Result<Self> {
        fs::create_dir_all(parent)?;
        let stage = tempfile::Builder::new()
            .prefix(&format!(".{name}.partial-"))
            .tempdir_in(parent)?;
        log::debug!("staging output in {}", stage.path().display());

        Ok(Self {
            stage,
            parent: parent.to_path_buf(),
            name: name.to_string(),
            target: parent.join(name),
            committed: false,
        })
    }

    /// Final location once committed
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Directory currently receiving the files
    pub fn staging_path(&self) -> &Path {
        self.stage.path()
    }

    /// Write one file into the stage; returns its final path
    pub fn write(&self, file_name: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf> {
        fs::write(self.stage.path().join(file_name), contents)?;
        Ok(self.target.join(file_name))
    }

    /// Replace the target with the staged contents
    ///
    /// An existing target is moved aside first and only deleted once the new
    /// directory is in place; if the final rename fails it is moved back.
    pub fn commit(mut self) -> Result<PathBuf> {
        let previous = if self.target.exists() {
            let holding = tempfile::Builder::new()
                .prefix(&format!(".{}.previous-", self.name))
                .tempdir_in(&self.parent)?;
            let aside = holding.path().join(&self.name);
            fs::rename(&self.target, &aside)?;
            Some((holding, aside))
        } else {
            None
        };

        if let Err(err) = fs::rename(self.stage.path(), &self.target) {
            if let Some((_, aside)) = &previous {
                if let Err(restore) = fs::rename(aside, &self.target) {
                    log::error!(
                        "could not restore previous {} from {}: {restore}",
                        self.target.display(),
                        aside.display()
                    );
                }
            }
            return Err(err.into());
        }
        self.committed = true;

        if let Some((holding, _)) = previous {
            log::info!("replaced existing {}", self.target.display());
            if let Err(err) = holding.close() {
                log::warn!("could not remove previous output: {err}");
            }
        }
        Ok(self.target.clone())
    }
}

impl Drop for StagedDir {
    fn drop(&mut self) {
        if !self.committed {
            log::warn!("discarded incomplete output {}", self.target.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_commit_moves_files_into_place() {
        let dir = tempfile::tempdir().unwrap();
        let stage = StagedDir::create(dir.path(), "out").unwrap();
        let final_path = stage.write("a.v", "module a; endmodule\n").unwrap();
        assert!(!final_path.exists());

        let target = stage.commit().unwrap();
        assert_eq!(target, dir.path().join("out"));
        assert_eq!(
            fs::read_to_string(final_path).unwrap(),
            "module a; endmodule\n"
        );
        // only the committed directory remains
        assert_eq!(entries(dir.path()), ["out"]);
    }

    #[test]
    fn test_dropped_stage_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        {
            let stage = StagedDir::create(dir.path(), "out").unwrap();
            stage.write("a.v", "partial").unwrap();
        }
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn test_commit_replaces_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("out")).unwrap();
        fs::write(dir.path().join("out").join("stale.v"), "old").unwrap();

        let stage = StagedDir::create(dir.path(), "out").unwrap();
        stage.write("fresh.v", "new").unwrap();
        stage.commit().unwrap();

        assert_eq!(entries(&dir.path().join("out")), ["fresh.v"]);
        assert_eq!(entries(dir.path()), ["out"]);
    }

    #[test]
    fn test_stages_for_same_target_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let first = StagedDir::create(dir.path(), "out").unwrap();
        first.write("first_a.v", "a").unwrap();

        let second = StagedDir::create(dir.path(), "out").unwrap();
        assert_ne!(first.staging_path(), second.staging_path());
        second.write("second_partial.v", "b").unwrap();
        first.write("first_b.v", "a").unwrap();

        first.commit().unwrap();
        assert_eq!(
            entries(&dir.path().join("out")),
            ["first_a.v", "first_b.v"]
        );

        drop(second);
        assert_eq!(entries(dir.path()), ["out"]);
        assert_eq!(
            entries(&dir.path().join("out")),
            ["first_a.v", "first_b.v"]
        );
    }

    #[test]
    fn test_failed_commit_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("out")).unwrap();
        fs::write(dir.path().join("out").join("good.v"), "old").unwrap();

        let stage = StagedDir::create(dir.path(), "out").unwrap();
        stage.write("new.v", "new").unwrap();
        // stage vanishes underneath us, so the final rename fails
        fs::remove_dir_all(stage.staging_path()).unwrap();

        assert!(stage.commit().is_err());
        assert_eq!(entries(&dir.path().join("out")), ["good.v"]);
        assert_eq!(entries(dir.path()), ["out"]);
    }
}
