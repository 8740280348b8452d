#![cfg(all(test, unix))]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory for executables under test.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Symlink `name` to /bin/sh so a shell runs under a chosen basename.
    ///
    /// Linking avoids writing an executable and racing ETXTBSY against
    /// forks from other test threads.
    pub fn shell_as(&self, name: &str) -> PathBuf {
        let link = self.path(name);
        std::os::unix::fs::symlink(Path::new("/bin/sh"), &link)
            .expect("failed to symlink /bin/sh");
        link
    }

    pub fn plain_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("failed to write file");
        path
    }
}
