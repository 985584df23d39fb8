use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::app::{App, Message, Model, ToastLevel, update};
use crate::provider::FetchError;
use crate::watcher::FileWatcher;

const WATCH_DEBOUNCE: Duration = Duration::from_millis(200);

impl App {
    /// Start the fetch the model has queued, if any.
    ///
    /// Each fetch runs on its own thread and reports back through `tx`,
    /// tagged with its request id so stale results can be dropped.
    pub(super) fn dispatch_fetch(&self, model: &mut Model, tx: &Sender<Message>) {
        let Some(request) = model.take_fetch_request() else {
            return;
        };
        let source = Arc::clone(&self.source);
        let tx = tx.clone();
        let id = request.id;
        debug!(
            request = id,
            region_id = %request.region_id,
            date = %request.date,
            source = %self.source.describe(),
            "starting edition fetch"
        );

        let spawned = thread::Builder::new()
            .name(format!("fetch-{id}"))
            .spawn(move || {
                let result = source.fetch(&request.region_id, request.date);
                // The receiver is gone once the app has quit.
                let _ = tx.send(Message::EditionLoaded {
                    request: request.id,
                    result,
                });
            });

        if let Err(err) = spawned {
            error!(request = id, %err, "failed to spawn fetch thread");
            *model = update(
                std::mem::take(model),
                Message::EditionLoaded {
                    request: id,
                    result: Err(FetchError::Worker(err)),
                },
            );
        }
    }

    /// Watch the source's backing file when watching is enabled.
    pub(super) fn start_watcher(&self, model: &mut Model) -> Option<FileWatcher> {
        if !model.watch_enabled {
            return None;
        }
        let Some(path) = self.source.watch_path() else {
            model.watch_enabled = false;
            model.show_toast(ToastLevel::Warning, "Watch needs a local edition file");
            return None;
        };
        match FileWatcher::new(path, WATCH_DEBOUNCE) {
            Ok(watcher) => {
                debug!(path = %path.display(), "watching edition file");
                Some(watcher)
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "watch unavailable");
                model.watch_enabled = false;
                model.show_toast(ToastLevel::Warning, format!("Watch unavailable: {err}"));
                None
            }
        }
    }
}
