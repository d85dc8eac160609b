use ratatui::prelude::Rect;

/// A pointer or window origin on the desktop surface. Signed so drag deltas
/// can be computed before clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Signed window rectangle: origin may be negative, size is unsigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl WindowRect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        let right = self.x + self.width as i32;
        let bottom = self.y + self.height as i32;
        point.x >= self.x && point.x < right && point.y >= self.y && point.y < bottom
    }

    /// Portion of the rect that lands inside `bounds`, as a terminal `Rect`.
    pub fn visible_in(&self, bounds: Rect) -> Rect {
        let bounds_x0 = bounds.x as i32;
        let bounds_y0 = bounds.y as i32;
        let bounds_x1 = bounds_x0 + bounds.width as i32;
        let bounds_y1 = bounds_y0 + bounds.height as i32;
        let x0 = self.x.max(bounds_x0);
        let y0 = self.y.max(bounds_y0);
        let x1 = (self.x + self.width as i32).min(bounds_x1);
        let y1 = (self.y + self.height as i32).min(bounds_y1);
        if x1 <= x0 || y1 <= y0 {
            return Rect::default();
        }
        Rect {
            x: x0 as u16,
            y: y0 as u16,
            width: (x1 - x0) as u16,
            height: (y1 - y0) as u16,
        }
    }
}

/// Clamp a candidate window origin so the window's box stays inside
/// `[0, viewport.width - size.width]` horizontally and
/// `[0, viewport.height - size.height - reserved_bottom]` vertically.
///
/// When the window is larger than the available area the origin pins to 0.
pub fn clamp_origin(candidate: Point, size: Size, viewport: Size, reserved_bottom: u16) -> Point {
    let max_x = viewport.width as i32 - size.width as i32;
    let max_y = viewport.height as i32 - size.height as i32 - reserved_bottom as i32;
    Point {
        x: candidate.x.min(max_x).max(0),
        y: candidate.y.min(max_y).max(0),
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}
