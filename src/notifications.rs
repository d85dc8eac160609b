//! Toast notifications stacked in the top-right corner.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::geometry::rect_contains;
use crate::theme::Palette;
use crate::timers::TimerQueue;
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

pub const AUTO_DISMISS: Duration = Duration::from_secs(5);
const WIDTH: u16 = 36;
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Notifications {
    toasts: Vec<Toast>,
    timers: TimerQueue<u64>,
    next_id: u64,
    close_hits: Vec<(Rect, u64)>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, now: Instant, title: impl Into<String>, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let toast = Toast {
            id,
            title: title.into(),
            message: message.into(),
        };
        tracing::info!(title = %toast.title, message = %toast.message, "notification");
        self.toasts.push(toast);
        self.timers.schedule(now, AUTO_DISMISS, id);
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.timers.retain(|pending| *pending != id);
        before != self.toasts.len()
    }

    /// Drop every toast whose timer has expired. Returns whether any went.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for id in self.timers.drain_due(now) {
            changed |= self.dismiss(id);
        }
        changed
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Toast whose close button sits at the given cell.
    pub fn close_hit(&self, column: u16, row: u16) -> Option<u64> {
        self.close_hits
            .iter()
            .find(|(rect, _)| rect_contains(*rect, column, row))
            .map(|(_, id)| *id)
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, desktop: Rect, palette: &Palette) {
        self.close_hits.clear();
        let width = WIDTH.min(desktop.width);
        if width < 6 {
            return;
        }
        let x = desktop.x + desktop.width - width;
        let base = Style::default().bg(palette.window_bg).fg(palette.window_fg);
        let title_style = base.fg(palette.accent).add_modifier(Modifier::BOLD);
        let bounds = frame.area();
        let buffer = frame.buffer_mut();
        let mut y = desktop.y;
        // newest on top
        for toast in self.toasts.iter().rev().take(MAX_VISIBLE) {
            if y + 2 > desktop.y + desktop.height {
                break;
            }
            for row in y..y + 2 {
                for col in x..x + width {
                    if let Some(cell) = buffer.cell_mut((col, row)) {
                        cell.set_symbol(" ");
                        cell.set_style(base);
                    }
                }
            }
            let inner = (width - 4) as usize;
            safe_set_string(buffer, bounds, x + 1, y, &truncate_to_width(&toast.title, inner), title_style);
            safe_set_string(buffer, bounds, x + width - 2, y, "×", base);
            safe_set_string(buffer, bounds, x + 1, y + 1, &truncate_to_width(&toast.message, inner), base);
            self.close_hits.push((Rect::new(x + width - 2, y, 1, 1), toast.id));
            y += 3;
        }
    }
}
