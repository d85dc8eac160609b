use ratatui::style::{Modifier, Style};

use crate::geometry::{Point, WindowRect};
use crate::theme::Palette;
use crate::ui::UiFrame;

/// What a pointer-down inside a window lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderHit {
    Minimize,
    Maximize,
    Close,
    /// Header area outside the control buttons.
    Drag,
    Body,
    None,
}

impl HeaderHit {
    pub fn is_control(self) -> bool {
        matches!(self, HeaderHit::Minimize | HeaderHit::Maximize | HeaderHit::Close)
    }
}

/// Per-window attributes the decorator needs to paint chrome.
#[derive(Debug, Clone, Copy)]
pub struct Chrome<'a> {
    pub title: &'a str,
    pub icon: &'a str,
    pub focused: bool,
    pub maximized: bool,
    /// Entrance or exit in progress.
    pub transitioning: bool,
}

pub trait WindowDecorator: std::fmt::Debug {
    fn hit_test(&self, rect: WindowRect, point: Point) -> HeaderHit;

    /// Area left for application content inside the chrome.
    fn content_rect(&self, rect: WindowRect) -> WindowRect;

    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        rect: WindowRect,
        chrome: Chrome<'_>,
        palette: &Palette,
    );
}

/// One header row with `[_][□][x]` at the right, single-line border below.
#[derive(Debug, Default)]
pub struct DefaultDecorator;

const CONTROL_WIDTH: i32 = 3;
const CONTROLS_MIN_WIDTH: u16 = 12;

impl DefaultDecorator {
    fn control_at(&self, rect: WindowRect, x: i32) -> Option<HeaderHit> {
        if rect.width < CONTROLS_MIN_WIDTH {
            return None;
        }
        let right = rect.x + rect.width as i32;
        let close = right - CONTROL_WIDTH;
        let maximize = close - CONTROL_WIDTH;
        let minimize = maximize - CONTROL_WIDTH;
        if x >= close && x < right {
            Some(HeaderHit::Close)
        } else if x >= maximize && x < close {
            Some(HeaderHit::Maximize)
        } else if x >= minimize && x < maximize {
            Some(HeaderHit::Minimize)
        } else {
            None
        }
    }
}

impl WindowDecorator for DefaultDecorator {
    fn hit_test(&self, rect: WindowRect, point: Point) -> HeaderHit {
        if !rect.contains(point) {
            return HeaderHit::None;
        }
        if point.y != rect.y {
            return HeaderHit::Body;
        }
        self.control_at(rect, point.x).unwrap_or(HeaderHit::Drag)
    }

    fn content_rect(&self, rect: WindowRect) -> WindowRect {
        WindowRect {
            x: rect.x + 1,
            y: rect.y + 1,
            width: rect.width.saturating_sub(2),
            height: rect.height.saturating_sub(2),
        }
    }

    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        rect: WindowRect,
        chrome: Chrome<'_>,
        palette: &Palette,
    ) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let mut body_style = Style::default().bg(palette.window_bg).fg(palette.window_fg);
        let mut header_style = if chrome.focused {
            Style::default()
                .bg(palette.header_bg)
                .fg(palette.header_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(palette.header_inactive_bg)
                .fg(palette.header_fg)
        };
        if chrome.transitioning {
            body_style = body_style.add_modifier(Modifier::DIM);
            header_style = header_style.add_modifier(Modifier::DIM);
        }
        let border_style = body_style.fg(palette.border);

        frame.fill(rect, body_style);

        // Header
        let header = WindowRect {
            height: 1,
            ..rect
        };
        frame.fill(header, header_style);
        let label = format!(" {} {}", chrome.icon, chrome.title);
        let controls_width = if rect.width >= CONTROLS_MIN_WIDTH {
            (CONTROL_WIDTH * 3) as usize
        } else {
            0
        };
        let label_width = (rect.width as usize).saturating_sub(controls_width + 1);
        frame.put_str(rect.x, rect.y, &label, label_width, header_style);
        if controls_width > 0 {
            let right = rect.x + rect.width as i32;
            let maximize_glyph = if chrome.maximized { "❐" } else { "□" };
            let start = right - CONTROL_WIDTH * 3;
            for (idx, glyph) in ["_", maximize_glyph, "x"].into_iter().enumerate() {
                let x = start + idx as i32 * CONTROL_WIDTH;
                frame.put(x, rect.y, "[", header_style);
                frame.put(x + 1, rect.y, glyph, header_style);
                frame.put(x + 2, rect.y, "]", header_style);
            }
        }

        // Borders
        let left = rect.x;
        let right = rect.x + rect.width as i32 - 1;
        let bottom = rect.y + rect.height as i32 - 1;
        if rect.height > 1 {
            for y in (rect.y + 1)..bottom {
                frame.put(left, y, "│", border_style);
                frame.put(right, y, "│", border_style);
            }
            for x in left..=right {
                let symbol = if x == left {
                    "└"
                } else if x == right {
                    "┘"
                } else {
                    "─"
                };
                frame.put(x, bottom, symbol, border_style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::theme::{Palette, ThemeMode};
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    fn rect() -> WindowRect {
        WindowRect::new(Point::new(10, 5), Size::new(20, 8))
    }

    #[test]
    fn hit_test_maps_controls_header_and_body() {
        let d = DefaultDecorator;
        // controls occupy the last nine header cells: [_][□][x]
        assert_eq!(d.hit_test(rect(), Point::new(29, 5)), HeaderHit::Close);
        assert_eq!(d.hit_test(rect(), Point::new(27, 5)), HeaderHit::Close);
        assert_eq!(d.hit_test(rect(), Point::new(26, 5)), HeaderHit::Maximize);
        assert_eq!(d.hit_test(rect(), Point::new(21, 5)), HeaderHit::Minimize);
        assert_eq!(d.hit_test(rect(), Point::new(20, 5)), HeaderHit::Drag);
        assert_eq!(d.hit_test(rect(), Point::new(12, 9)), HeaderHit::Body);
        assert_eq!(d.hit_test(rect(), Point::new(0, 0)), HeaderHit::None);
    }

    #[test]
    fn narrow_windows_have_no_controls() {
        let d = DefaultDecorator;
        let narrow = WindowRect::new(Point::new(0, 0), Size::new(8, 4));
        assert_eq!(d.hit_test(narrow, Point::new(7, 0)), HeaderHit::Drag);
    }

    #[test]
    fn content_rect_sits_inside_chrome() {
        let d = DefaultDecorator;
        let inner = d.content_rect(rect());
        assert_eq!(inner, WindowRect::new(Point::new(11, 6), Size::new(18, 6)));
    }

    #[test]
    fn render_draws_title_and_close_button() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 20,
        };
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        DefaultDecorator.render_window(
            &mut frame,
            rect(),
            Chrome {
                title: "Resume",
                icon: "≡",
                focused: true,
                maximized: false,
                transitioning: false,
            },
            &Palette::for_mode(ThemeMode::Dark),
        );
        assert_eq!(buffer.cell((13, 5)).unwrap().symbol(), "R");
        assert_eq!(buffer.cell((28, 5)).unwrap().symbol(), "x");
        assert_eq!(buffer.cell((10, 12)).unwrap().symbol(), "└");
    }
}
