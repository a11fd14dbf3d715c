//! Persisting the change report.

use std::fs;
use std::path::Path;

use locmerge_merge::ChangeLog;
use tracing::info;

use crate::error::{FsError, FsResult};

/// Write the rendered change report to `path`, creating parent directories.
///
/// An empty log still produces an (empty) file so stale reports from an
/// earlier run never survive.
pub fn write_report(log: &ChangeLog, path: &Path) -> FsResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| FsError::io(parent, e))?;
    }
    fs::write(path, log.render()).map_err(|e| FsError::io(path, e))?;
    info!(path = %path.display(), entries = log.len(), "change report written");
    Ok(())
}
