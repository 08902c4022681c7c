//! `dotsync install`: put tracked files back under home.

use crate::DotsyncContext;
use crate::output;
use crate::sync::SyncEngine;
use anyhow::Result;

/// Install every file tracked in the snapshot's manifest into home.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or any file fails to
/// install; files installed before the failure are left in place.
pub fn execute(ctx: &DotsyncContext) -> Result<()> {
    let report = SyncEngine::from_context(ctx).install()?;

    if report.installed.is_empty() {
        output::warning(&format!(
            "Nothing to install: no files tracked in {}",
            ctx.index_path().display()
        ));
        return Ok(());
    }

    for path in &report.installed {
        output::action("installed", &path.display().to_string());
    }
    output::success(&format!(
        "Installed {} file(s) into {}",
        report.installed.len(),
        ctx.home_dir.display()
    ));

    Ok(())
}
