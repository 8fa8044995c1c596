//! Watch operation - regenerate on every manifest change.

use std::{path::Path, sync::mpsc, time::Duration};

use extgen_manifest::PackageJson;
use eyre::{Context, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use super::{GenerateOptions, generate};
use crate::reports::{Output, Report};

/// Quiet period that ends a burst of file events.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Generate once, then regenerate whenever the manifest file changes.
///
/// Runs until the watcher shuts down. Manifest read and parse errors are
/// reported to `out` and the last good snapshot is kept.
pub fn watch(
    package: &mut PackageJson,
    opts: &GenerateOptions,
    out: &mut dyn Output,
) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            let _ = tx.send(res);
        },
        Config::default(),
    )
    .wrap_err("Failed to start file watcher")?;

    // Parent directory, so that atomic replaces are observed too.
    let dir = watch_dir(package.path());
    watcher
        .watch(dir, RecursiveMode::NonRecursive)
        .wrap_err_with(|| format!("Failed to watch '{}'", dir.display()))?;
    tracing::debug!(dir = %dir.display(), "watching manifest directory");

    generate(package.manifest(), opts)?.render(out);
    out.newline();
    out.key_value("Watching", &package.path().display().to_string());

    while let Ok(event) = rx.recv() {
        match event {
            Ok(event) if is_relevant(&event, package.path()) => {}
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!(error = %e, "file watcher error");
                continue;
            }
        }

        while rx.recv_timeout(DEBOUNCE).is_ok() {}
        on_change(package, opts, out)?;
    }

    Ok(())
}

/// Reload the manifest and regenerate when its content changed.
///
/// Returns whether the module was regenerated.
pub fn on_change(
    package: &mut PackageJson,
    opts: &GenerateOptions,
    out: &mut dyn Output,
) -> Result<bool> {
    match package.reload() {
        Ok(true) => {
            tracing::debug!(path = %package.path().display(), "manifest changed");
            out.newline();
            generate(package.manifest(), opts)?.render(out);
            Ok(true)
        }
        Ok(false) => Ok(false),
        Err(e) => {
            out.error(&format!("{:?}", miette::Report::new(*e)));
            Ok(false)
        }
    }
}

fn watch_dir(manifest: &Path) -> &Path {
    manifest
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}

/// Whether `event` creates or modifies the file at `target`.
fn is_relevant(event: &Event, target: &Path) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event
            .paths
            .iter()
            .any(|path| path.file_name() == target.file_name())
}
