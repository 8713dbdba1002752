//! Watches the wheel config file and asks the GUI thread to rebuild the wheel.

use crate::events::AppEvent;
use async_channel::{Receiver, Sender};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use plutchik::config::get_config_path;
use std::path::PathBuf;
use std::time::Duration;

/// Editors write a file in several steps; changes this close together become one reload.
const SETTLE_DELAY: Duration = Duration::from_millis(150);

type WatchResult = notify::Result<notify::Event>;

struct ConfigWatch {
    path: PathBuf,
}

impl ConfigWatch {
    /// Kind of change to the config file carried by `event`, if any.
    fn change(&self, event: &notify::Event) -> Option<&'static str> {
        if !event.paths.iter().any(|p| p == &self.path) {
            return None;
        }
        match event.kind {
            EventKind::Create(_) => Some("created"),
            EventKind::Modify(_) => Some("modified"),
            EventKind::Remove(_) => Some("removed"),
            _ => None,
        }
    }

    /// Waits for the next change to the config file, then absorbs the rest of its burst.
    /// Returns `None` once the watcher is gone.
    async fn next_change(&self, events: &Receiver<WatchResult>) -> Option<&'static str> {
        loop {
            match events.recv().await.ok()? {
                Ok(event) => {
                    if let Some(change) = self.change(&event) {
                        tokio::time::sleep(SETTLE_DELAY).await;
                        while events.try_recv().is_ok() {}
                        return Some(change);
                    }
                }
                Err(e) => log::error!("Watch error: {}", e),
            }
        }
    }
}

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let watch = match get_config_path() {
        Ok(path) => ConfigWatch { path },
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let Some(config_dir) = watch.path.parent().map(PathBuf::from) else {
        return;
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    // The directory is watched so that editors replacing the file are still seen.
    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }
    log::debug!("Watching {}", watch.path.display());

    while let Some(change) = watch.next_change(&bridge_rx).await {
        log::info!("Wheel config {} was {}, reloading", watch.path.display(), change);
        if tx.send(AppEvent::ConfigReload).await.is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind, RemoveKind};

    fn watch() -> ConfigWatch {
        ConfigWatch {
            path: PathBuf::from("/tmp/plutchik/config.toml"),
        }
    }

    fn event(kind: EventKind, path: &str) -> notify::Event {
        notify::Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn test_only_config_changes_count() {
        let watch = watch();
        let config = "/tmp/plutchik/config.toml";

        let modify = event(EventKind::Modify(ModifyKind::Any), config);
        assert_eq!(watch.change(&modify), Some("modified"));

        let create = event(EventKind::Create(CreateKind::File), config);
        assert_eq!(watch.change(&create), Some("created"));

        let remove = event(EventKind::Remove(RemoveKind::File), config);
        assert_eq!(watch.change(&remove), Some("removed"));

        let access = event(EventKind::Access(AccessKind::Any), config);
        assert_eq!(watch.change(&access), None);

        let unrelated = event(EventKind::Modify(ModifyKind::Any), "/tmp/plutchik/notes.txt");
        assert_eq!(watch.change(&unrelated), None);
    }

    #[test]
    fn test_burst_becomes_one_change() {
        let watch = watch();
        let (tx, rx) = async_channel::unbounded();
        let config = "/tmp/plutchik/config.toml";
        for kind in [
            EventKind::Create(CreateKind::File),
            EventKind::Modify(ModifyKind::Any),
            EventKind::Modify(ModifyKind::Any),
        ] {
            tx.send_blocking(Ok(event(kind, config))).unwrap();
        }
        drop(tx);

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            assert_eq!(watch.next_change(&rx).await, Some("created"));
            assert_eq!(watch.next_change(&rx).await, None);
        });
    }
}
