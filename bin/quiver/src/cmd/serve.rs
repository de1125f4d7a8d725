//! Serve command - development server with live reload

use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use color_eyre::eyre::{Result, WrapErr, bail};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher, event::ModifyKind};
use tokio::{net::TcpListener, sync::mpsc};

use super::load_config;
use crate::server::{ServerState, create_router};

/// Debounce interval for file changes.
const DEBOUNCE_MS: u64 = 200;

/// Directories whose changes never trigger a reload.
const IGNORED_DIRS: &[&str] = &["target", ".git", "node_modules"];

/// Run the serve command.
///
/// `port` and `open_browser` override the `[server]` section when given.
pub async fn run(config_path: &Path, port: Option<u16>, open_browser: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let port = port.unwrap_or(config.server.port);
    let open_browser = open_browser || config.server.open;
    let root = PathBuf::from(&config.server.root);

    tracing::info!(?config_path, ?root, port, "Starting dev server");

    if !root.is_dir() {
        bail!("Site root does not exist: {}", root.display());
    }

    let state = Arc::new(ServerState::new(&root));

    // File watcher feeding the reload task
    let (tx, mut rx) = mpsc::channel::<()>(16);
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) if is_change(&event.kind) && event.paths.iter().any(|p| is_watched(p)) => {
                let _ = tx.blocking_send(());
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Watch error: {e}"),
        },
        notify::Config::default(),
    )
    .wrap_err("Failed to create file watcher")?;

    watcher
        .watch(&root, RecursiveMode::Recursive)
        .wrap_err("Failed to watch site root")?;
    tracing::debug!(?root, "Watching site root");

    let reload_state = state.clone();
    tokio::spawn(async move {
        while rx.recv().await.is_some() {
            // Wait for the burst of events to settle, then drain it
            tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS)).await;
            while rx.try_recv().is_ok() {}

            println!("  File change detected, reloading pages");
            reload_state.notify_reload();
        }
    });

    let app = create_router(state);
    let addr = format!("127.0.0.1:{port}");

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  Dev server running at http://{addr}");
    println!("  Serving {}", root.display());
    println!("  Press Ctrl+C to stop");
    println!();

    if open_browser && let Err(e) = open::that(format!("http://{addr}")) {
        tracing::warn!("Could not open browser: {e}");
    }

    // Keep watcher alive
    let _watcher = watcher;

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}

fn is_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Modify(ModifyKind::Data(_)) | EventKind::Create(_) | EventKind::Remove(_)
    )
}

/// Whether a change to `path` should reload the browser.
fn is_watched(path: &Path) -> bool {
    !path.components().any(|c| match c {
        Component::Normal(name) => name.to_str().is_some_and(|n| IGNORED_DIRS.contains(&n)),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use notify::event::{CreateKind, DataChange, MetadataKind};

    use super::*;

    #[test]
    fn test_is_watched_ignores_build_dirs() {
        assert!(is_watched(Path::new("./index.html")));
        assert!(is_watched(Path::new("components/header.html")));
        assert!(!is_watched(Path::new("./target/debug/build.log")));
        assert!(!is_watched(Path::new(".git/index")));
    }

    #[test]
    fn test_is_change() {
        assert!(is_change(&EventKind::Create(CreateKind::File)));
        assert!(is_change(&EventKind::Modify(ModifyKind::Data(DataChange::Content))));
        assert!(!is_change(&EventKind::Modify(ModifyKind::Metadata(
            MetadataKind::AccessTime
        ))));
    }

    #[tokio::test]
    async fn test_run_fails_without_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = run(&dir.path().join("missing.toml"), None, false).await;
        assert!(result.is_err());
    }
}
