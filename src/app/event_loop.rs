use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;
use tracing::info;

use crate::app::{App, Message, Model, update};
use crate::watcher::FileWatcher;

const IDLE_POLL_MS: u64 = 250;
const BUSY_POLL_MS: u64 = 80;

pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop hits an
    /// I/O failure. Fetch failures are shown on the page, not returned.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; broadsheet requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(self.region_index, self.date, (size.width, size.height));
        model.max_page_width = self.max_page_width;
        model.source_label = self.source.describe();
        model.watch_enabled = self.watch_enabled;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        // Page width depends on the cap, so settle the layout before the first fetch lands.
        model = update(model, Message::Resize(size.width, size.height));

        info!(
            region = %model.region().id,
            date = %model.date,
            source = %model.source_label,
            "starting reader"
        );

        let result = self.event_loop(&mut terminal, &mut model);
        ratatui::restore();
        result
    }

    fn event_loop(&self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let (tx, rx) = mpsc::channel();
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut file_watcher = self.start_watcher(model);
        let mut needs_render = true;
        let mut last_spinner_tick = Instant::now();

        loop {
            self.dispatch_fetch(model, &tx);

            if drain_fetch_results(model, &rx) {
                needs_render = true;
            }

            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if model.is_loading()
                && last_spinner_tick.elapsed() >= Duration::from_millis(BUSY_POLL_MS)
            {
                model.tick_spinner();
                last_spinner_tick = Instant::now();
                needs_render = true;
            }

            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                apply(model, Message::Resize(width, height));
                needs_render = true;
            }

            if file_watcher
                .as_mut()
                .is_some_and(FileWatcher::take_change_ready)
            {
                apply(model, Message::FileChanged);
                needs_render = true;
                continue;
            }

            let poll_ms = if needs_render {
                0
            } else if resize_debouncer.is_pending() || model.is_loading() {
                BUSY_POLL_MS
            } else {
                IDLE_POLL_MS
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Refresh timestamp after poll wait so the debouncer uses accurate times.
                let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                if let Some(msg) =
                    self.handle_event(&event::read()?, model, event_ms, &mut resize_debouncer)
                {
                    apply(model, msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    let drain_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    if let Some(msg) =
                        self.handle_event(&event::read()?, model, drain_ms, &mut resize_debouncer)
                    {
                        apply(model, msg);
                        needs_render = true;
                    }
                }
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}

fn apply(model: &mut Model, msg: Message) {
    *model = update(std::mem::take(model), msg);
}

fn drain_fetch_results(model: &mut Model, rx: &Receiver<Message>) -> bool {
    let mut received = false;
    while let Ok(msg) = rx.try_recv() {
        apply(model, msg);
        received = true;
    }
    received
}
