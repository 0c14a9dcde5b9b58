use create_boardzilla_game::error::Result;
use create_boardzilla_game::install::{Installer, NpmInstaller};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

#[cfg(unix)]
use std::os::unix::process::ExitStatusExt;

/// Installer stand-in that records the directories it was asked to
/// install into and reports a fixed exit status.
#[cfg(unix)]
struct StubInstaller {
    calls: RefCell<Vec<PathBuf>>,
    raw_status: i32,
}

#[cfg(unix)]
impl Installer for StubInstaller {
    fn install(&self, project_dir: &Path) -> Result<ExitStatus> {
        self.calls.borrow_mut().push(project_dir.to_path_buf());
        Ok(ExitStatus::from_raw(self.raw_status))
    }
}

#[cfg(unix)]
#[test]
fn test_installer_is_injectable() {
    let stub = StubInstaller { calls: RefCell::new(Vec::new()), raw_status: 0 };
    let status = stub.install(Path::new("/tmp/space-trader")).unwrap();

    assert!(status.success());
    assert_eq!(stub.calls.borrow().as_slice(), &[PathBuf::from("/tmp/space-trader")]);
}

#[cfg(unix)]
#[test]
fn test_installer_reports_failure_status() {
    let stub = StubInstaller { calls: RefCell::new(Vec::new()), raw_status: 256 };
    let status = stub.install(Path::new("/tmp/space-trader")).unwrap();

    assert!(!status.success());
}

#[test]
fn test_npm_installer_missing_directory() {
    let missing = std::env::temp_dir().join("create-boardzilla-game-no-such-dir");

    // Spawning with a nonexistent working directory (or without npm on the
    // path) surfaces as an error rather than a panic.
    assert!(NpmInstaller::new().install(&missing).is_err());
}
