//! Taskbar: the view listing open windows, plus the start and theme buttons.
//!
//! The window manager pushes a full, ordered snapshot through
//! [`TaskbarView::rebuild`] whenever its state changes; the view never reads
//! window state on its own.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::content::AppId;
use crate::geometry::rect_contains;
use crate::theme::{Palette, ThemeMode};
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub app: AppId,
    pub title: String,
    pub icon: &'static str,
    pub minimized: bool,
    pub active: bool,
}

pub trait TaskbarView {
    fn rebuild(&mut self, entries: &[TaskbarEntry]);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskbarHit {
    Start,
    Entry(AppId),
    Theme,
}

#[derive(Debug, Default)]
pub struct Taskbar {
    entries: Vec<TaskbarEntry>,
    hits: Vec<(Rect, TaskbarHit)>,
    area: Rect,
}

const START_LABEL: &str = " ≡ Start ";
const MINIMIZED_MARK: &str = "▁";

impl Taskbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TaskbarEntry] {
        &self.entries
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<TaskbarHit> {
        self.hits
            .iter()
            .find(|(rect, _)| rect_contains(*rect, column, row))
            .map(|(_, hit)| hit.clone())
    }

    /// Paint the bar into `area` and record click targets for this frame.
    pub fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        palette: &Palette,
        theme: ThemeMode,
        launcher_open: bool,
    ) {
        self.hits.clear();
        self.area = area;
        if area.width == 0 || area.height == 0 {
            return;
        }
        let base = Style::default().bg(palette.taskbar_bg).fg(palette.taskbar_fg);
        let active = Style::default()
            .bg(palette.taskbar_active_bg)
            .fg(palette.taskbar_active_fg)
            .add_modifier(Modifier::BOLD);
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        for x in bounds.x..bounds.x.saturating_add(bounds.width) {
            if let Some(cell) = buffer.cell_mut((x, bounds.y)) {
                cell.set_symbol(" ");
                cell.set_style(base);
            }
        }
        let y = area.y;
        let max_x = area.x.saturating_add(area.width);
        let mut x = area.x;

        let start_style = if launcher_open { active } else { base };
        let start_width = START_LABEL.chars().count() as u16;
        safe_set_string(buffer, bounds, x, y, START_LABEL, start_style);
        self.hits.push((rect_at(x, y, start_width), TaskbarHit::Start));
        x = x.saturating_add(start_width).saturating_add(1);

        let theme_label = format!(" {} ", theme.toggle_glyph());
        let theme_width = theme_label.chars().count() as u16;
        let theme_x = max_x.saturating_sub(theme_width);

        for entry in &self.entries {
            let mark = if entry.minimized { MINIMIZED_MARK } else { " " };
            let max_label = theme_x.saturating_sub(x).saturating_sub(4) as usize;
            if max_label == 0 {
                break;
            }
            let label = truncate_to_width(&format!("{} {}", entry.icon, entry.title), max_label);
            let chunk = format!(" {label}{mark} ");
            let chunk_width = chunk.chars().count() as u16;
            if x.saturating_add(chunk_width) > theme_x {
                break;
            }
            let style = if entry.active {
                active
            } else if entry.minimized {
                base.fg(palette.muted)
            } else {
                base
            };
            safe_set_string(buffer, bounds, x, y, &chunk, style);
            self.hits
                .push((rect_at(x, y, chunk_width), TaskbarHit::Entry(entry.app.clone())));
            x = x.saturating_add(chunk_width);
        }

        if theme_x >= x {
            safe_set_string(buffer, bounds, theme_x, y, &theme_label, base);
            self.hits.push((rect_at(theme_x, y, theme_width), TaskbarHit::Theme));
        }
    }
}

impl TaskbarView for Taskbar {
    fn rebuild(&mut self, entries: &[TaskbarEntry]) {
        self.entries = entries.to_vec();
        tracing::trace!(entries = self.entries.len(), "taskbar rebuilt");
    }
}

fn rect_at(x: u16, y: u16, width: u16) -> Rect {
    Rect {
        x,
        y,
        width,
        height: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn entry(id: &str, title: &str, minimized: bool, active: bool) -> TaskbarEntry {
        TaskbarEntry {
            app: id.into(),
            title: title.to_string(),
            icon: "*",
            minimized,
            active,
        }
    }

    fn render(bar: &mut Taskbar, width: u16) {
        let area = Rect {
            x: 0,
            y: 0,
            width,
            height: 1,
        };
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        bar.render(
            &mut frame,
            area,
            &Palette::for_mode(ThemeMode::Dark),
            ThemeMode::Dark,
            false,
        );
    }

    #[test]
    fn rebuild_replaces_entries() {
        let mut bar = Taskbar::new();
        bar.rebuild(&[entry("a", "A", false, true), entry("b", "B", true, false)]);
        assert_eq!(bar.entries().len(), 2);
        bar.rebuild(&[entry("b", "B", true, false)]);
        assert_eq!(bar.entries().len(), 1);
        assert_eq!(bar.entries()[0].app, AppId::from("b"));
    }

    #[test]
    fn render_records_click_targets() {
        let mut bar = Taskbar::new();
        bar.rebuild(&[entry("resume", "Resume", false, true)]);
        render(&mut bar, 60);
        assert_eq!(bar.hit_test(1, 0), Some(TaskbarHit::Start));
        // entries start after the start button and one spacer cell
        assert_eq!(
            bar.hit_test(11, 0),
            Some(TaskbarHit::Entry(AppId::from("resume")))
        );
        assert_eq!(bar.hit_test(58, 0), Some(TaskbarHit::Theme));
        assert_eq!(bar.hit_test(1, 1), None);
    }

    #[test]
    fn entries_that_do_not_fit_are_skipped() {
        let mut bar = Taskbar::new();
        bar.rebuild(&[entry("a", "A very long application title", false, false)]);
        render(&mut bar, 14);
        assert!(
            bar.hits
                .iter()
                .all(|(_, hit)| !matches!(hit, TaskbarHit::Entry(_)))
        );
    }
}
