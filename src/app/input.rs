use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message, Model};

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        &self,
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(*key, model),
            Event::Resize(w, h) => {
                tracing::trace!(width = w, height = h, "resize queued");
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(&self, key: KeyEvent, model: &Model) -> Option<Message> {
        let _ = self;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return Some(Message::Quit);
        }

        if let Some(text) = model.date_input.as_ref() {
            return match key.code {
                KeyCode::Esc => Some(Message::CancelDateInput),
                KeyCode::Enter => Some(Message::SubmitDate),
                KeyCode::Backspace => {
                    let mut next = text.clone();
                    next.pop();
                    Some(Message::DateInput(next))
                }
                KeyCode::Char(c) if (c.is_ascii_digit() || c == '-') && !ctrl => {
                    let mut next = text.clone();
                    next.push(c);
                    Some(Message::DateInput(next))
                }
                _ => None,
            };
        }

        if model.help_visible {
            return Some(Message::HideHelp);
        }

        match key.code {
            // Scrolling
            KeyCode::Char('j') | KeyCode::Down => model
                .viewport
                .can_scroll_down()
                .then_some(Message::ScrollDown(1)),
            KeyCode::Char('k') | KeyCode::Up => model
                .viewport
                .can_scroll_up()
                .then_some(Message::ScrollUp(1)),
            KeyCode::Char(' ') | KeyCode::PageDown => model
                .viewport
                .can_scroll_down()
                .then_some(Message::PageDown),
            KeyCode::Char('b') | KeyCode::PageUp => {
                model.viewport.can_scroll_up().then_some(Message::PageUp)
            }
            KeyCode::Char('d') if ctrl => model
                .viewport
                .can_scroll_down()
                .then_some(Message::HalfPageDown),
            KeyCode::Char('u') if ctrl => model
                .viewport
                .can_scroll_up()
                .then_some(Message::HalfPageUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Message::GoToTop),
            KeyCode::Char('G') | KeyCode::End => Some(Message::GoToBottom),

            // Region and date
            KeyCode::Char(']') | KeyCode::Right => Some(Message::NextRegion),
            KeyCode::Char('[') | KeyCode::Left => Some(Message::PrevRegion),
            KeyCode::Char('+' | '=' | '.') => Some(Message::NextDay),
            KeyCode::Char('-' | ',') => Some(Message::PrevDay),
            KeyCode::Char('t') => Some(Message::Today),
            KeyCode::Char('d') => Some(Message::StartDateInput),

            KeyCode::Char('r') => Some(Message::Reload),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::Char('q') => Some(Message::Quit),

            _ => None,
        }
    }
}
