//! `dotsync save`: copy changed rc files from home into the snapshot.

use crate::DotsyncContext;
use crate::output;
use crate::selector::{LinePrompt, Selector, SelectorState};
use crate::sync::SyncEngine;
use anyhow::Result;
use std::io;

/// Save changed files from home into the snapshot directory.
///
/// With `approve_all` set, every changed file is accepted without prompting;
/// otherwise the operator is asked about each one on stdin.
///
/// # Errors
///
/// Returns an error if collection, comparison, prompting, copying or the
/// manifest update fails.
pub fn execute(ctx: &DotsyncContext, approve_all: bool) -> Result<()> {
    let engine = SyncEngine::from_context(ctx);

    let state = if approve_all {
        SelectorState::ApproveAll
    } else {
        SelectorState::Prompting
    };
    let mut selector = Selector::new(state);
    let mut prompt = LinePrompt::new(io::stdin().lock(), io::stdout());

    let report = engine.save(&mut selector, &mut prompt, &mut io::stdout())?;

    if report.changed.is_empty() {
        return Ok(());
    }
    if report.saved.is_empty() {
        output::info("No files selected");
        return Ok(());
    }

    for path in &report.saved {
        output::action("saved", &path.display().to_string());
    }
    output::success(&format!(
        "Saved {} file(s) into {}",
        report.saved.len(),
        ctx.snapshot_dir.display()
    ));

    Ok(())
}
