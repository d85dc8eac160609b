//! Start-menu overlay: a filterable list of every catalog application.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::content::{AppEntry, AppId, ContentProvider};
use crate::geometry::rect_contains;
use crate::theme::Palette;
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

const WIDTH: u16 = 30;

#[derive(Debug, Default)]
pub struct Launcher {
    visible: bool,
    query: String,
    selected: usize,
    area: Rect,
    rows: Vec<(Rect, AppId)>,
}

impl Launcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn toggle(&mut self) {
        if self.visible {
            self.hide();
        } else {
            self.show();
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.query.clear();
        self.selected = 0;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.rows.clear();
        self.area = Rect::default();
    }

    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
        self.selected = 0;
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    pub fn select_next(&mut self, provider: &dyn ContentProvider) {
        let count = self.matches(provider).len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self, provider: &dyn ContentProvider) {
        let count = self.matches(provider).len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Apps whose title contains the query, ignoring case.
    pub fn matches<'a>(&self, provider: &'a dyn ContentProvider) -> Vec<&'a AppEntry> {
        let needle = self.query.to_lowercase();
        provider
            .apps()
            .iter()
            .filter(|entry| entry.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Id of the highlighted match; hides the launcher when one exists.
    pub fn confirm(&mut self, provider: &dyn ContentProvider) -> Option<AppId> {
        let id = self
            .matches(provider)
            .get(self.selected)
            .map(|entry| AppId::from(entry.id))?;
        self.hide();
        Some(id)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.visible && rect_contains(self.area, column, row)
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<AppId> {
        self.rows
            .iter()
            .find(|(rect, _)| rect_contains(*rect, column, row))
            .map(|(_, id)| id.clone())
    }

    /// Paint the panel anchored above the taskbar at the left edge.
    pub fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        desktop: Rect,
        provider: &dyn ContentProvider,
        palette: &Palette,
    ) {
        self.rows.clear();
        if !self.visible {
            return;
        }
        let matches = self.matches(provider);
        let height = (matches.len() as u16).saturating_add(4).min(desktop.height);
        let width = WIDTH.min(desktop.width);
        if width < 4 || height < 3 {
            self.area = Rect::default();
            return;
        }
        let area = Rect {
            x: desktop.x,
            y: desktop.y + desktop.height - height,
            width,
            height,
        };
        self.area = area;

        let base = Style::default().bg(palette.window_bg).fg(palette.window_fg);
        let muted = base.fg(palette.muted);
        let selected = Style::default()
            .bg(palette.taskbar_active_bg)
            .fg(palette.taskbar_active_fg)
            .add_modifier(Modifier::BOLD);
        let bounds = frame.area();
        let buffer = frame.buffer_mut();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_style(base);
                }
            }
        }
        let inner = (area.width - 2) as usize;
        let search = format!("Search: {}_", self.query);
        safe_set_string(
            buffer,
            bounds,
            area.x + 1,
            area.y + 1,
            &truncate_to_width(&search, inner),
            base.fg(palette.accent),
        );
        if matches.is_empty() {
            safe_set_string(buffer, bounds, area.x + 1, area.y + 2, "No matches", muted);
            return;
        }
        for (idx, entry) in matches.iter().enumerate() {
            let y = area.y + 2 + idx as u16;
            if y >= area.y + area.height - 1 {
                break;
            }
            let style = if idx == self.selected { selected } else { base };
            let label = truncate_to_width(&format!(" {} {}", entry.icon, entry.title), inner);
            let row = Rect {
                x: area.x + 1,
                y,
                width: area.width - 2,
                height: 1,
            };
            for x in row.x..row.x + row.width {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.set_style(style);
                }
            }
            safe_set_string(buffer, bounds, row.x, y, &label, style);
            self.rows.push((row, AppId::from(entry.id)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::theme::ThemeMode;
    use ratatui::buffer::Buffer;

    #[test]
    fn filter_is_case_insensitive_substring() {
        let catalog = Catalog::portfolio();
        let mut launcher = Launcher::new();
        launcher.show();
        for ch in "ME".chars() {
            launcher.push_char(ch);
        }
        let titles: Vec<_> = launcher.matches(&catalog).iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Resume", "About Me"]);
    }

    #[test]
    fn confirm_returns_selection_and_hides() {
        let catalog = Catalog::portfolio();
        let mut launcher = Launcher::new();
        launcher.show();
        launcher.push_char('c');
        launcher.select_next(&catalog);
        let picked = launcher.confirm(&catalog);
        assert_eq!(picked, Some(AppId::from("contact")));
        assert!(!launcher.is_visible());
    }

    #[test]
    fn confirm_without_matches_keeps_launcher_open() {
        let catalog = Catalog::portfolio();
        let mut launcher = Launcher::new();
        launcher.show();
        launcher.push_char('z');
        assert_eq!(launcher.confirm(&catalog), None);
        assert!(launcher.is_visible());
    }

    #[test]
    fn render_records_rows_for_clicks() {
        let catalog = Catalog::portfolio();
        let mut launcher = Launcher::new();
        launcher.show();
        let area = Rect::new(0, 0, 40, 20);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        launcher.render(
            &mut frame,
            Rect::new(0, 0, 40, 19),
            &catalog,
            &Palette::for_mode(ThemeMode::Dark),
        );
        // six apps plus search line and borders: 10 rows ending at row 18
        assert_eq!(launcher.hit_test(2, 11), Some(AppId::from("resume")));
        assert!(launcher.contains(0, 9));
        assert!(!launcher.contains(0, 8));
    }
}
