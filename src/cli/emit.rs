//! `emit` command: write the renderer document, optionally on every change.

use crate::cli::EmitArgs;
use crate::cli::common::load_config;
use crate::render::RendererDocument;
use crate::{debug, log};
use anyhow::{Context, Result};
use notify::{EventKind, RecursiveMode, Watcher};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::mpsc,
};

/// Emit once, then keep watching if `--watch` was given.
///
/// Without `--watch` a failed emit is the command's error. With it, the
/// failure is logged like any later one and watching starts regardless.
pub fn run_emit(config_path: &Path, args: &EmitArgs) -> Result<()> {
    if !args.watch {
        emit_once(config_path, args)?;
        return Ok(());
    }

    emit_logged(config_path, args);
    watch(config_path, args)
}

/// Emit, logging any failure instead of returning it.
///
/// Returns `true` if the output changed.
fn emit_logged(config_path: &Path, args: &EmitArgs) -> bool {
    match emit_once(config_path, args) {
        Ok(changed) => changed,
        Err(e) => {
            log!("error"; "{:#}", e);
            false
        }
    }
}

/// Render the document and write it to the output (or stdout).
///
/// Returns `true` if the output changed.
fn emit_once(config_path: &Path, args: &EmitArgs) -> Result<bool> {
    let config = load_config(config_path, args.preview)?;
    let content = RendererDocument::new(&config)
        .render(args.format)
        .context("Failed to serialize renderer document")?;

    match &args.output {
        Some(output) => write_if_changed(output, &content),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(true)
        }
    }
}

/// Write `content` to `path` unless the file already holds it.
fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
    if fs::read_to_string(path).is_ok_and(|current| current == content) {
        debug!("emit"; "{} unchanged", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))?;
    log!("emit"; "wrote {}", path.display());
    Ok(true)
}

/// Re-emit whenever the config file is written.
///
/// The parent directory is watched rather than the file itself, since editors
/// often replace the file instead of writing it in place. Errors are logged and
/// the loop keeps going; it ends when the watcher shuts down.
fn watch(config_path: &Path, args: &EmitArgs) -> Result<()> {
    let config_path = config_path
        .canonicalize()
        .with_context(|| format!("Failed to resolve '{}'", config_path.display()))?;
    let watch_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let (tx, rx) = mpsc::channel::<notify::Result<notify::Event>>();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to start file watcher")?;
    watcher
        .watch(&watch_dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch '{}'", watch_dir.display()))?;

    log!("watch"; "watching {}", config_path.display());

    for res in rx {
        match res {
            Ok(event) if touches(&event, &config_path) => {
                debug!("watch"; "{:?}", event.kind);
                emit_logged(&config_path, args);
            }
            Ok(_) => {}
            Err(e) => log!("error"; "watch error: {}", e),
        }
    }

    Ok(())
}

/// Whether `event` creates or modifies `config_path`.
fn touches(event: &notify::Event, config_path: &Path) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event.paths.iter().any(|p| {
            p == config_path || (p.file_name() == config_path.file_name() && p.parent() == config_path.parent())
        })
}
