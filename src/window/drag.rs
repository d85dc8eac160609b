//! Per-window header drag state machine: `Idle -> Dragging -> Idle`.

use crate::geometry::{Point, Size, clamp_origin};

/// Pointer and window origins captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub origin_pointer: Point,
    pub origin_position: Point,
}

impl DragSession {
    /// Clamped window origin for the pointer at `pointer`.
    pub fn position_for(
        &self,
        pointer: Point,
        size: Size,
        viewport: Size,
        reserved_bottom: u16,
    ) -> Point {
        let dx = pointer.x.saturating_sub(self.origin_pointer.x);
        let dy = pointer.y.saturating_sub(self.origin_pointer.y);
        let candidate = self.origin_position.offset(dx, dy);
        clamp_origin(candidate, size, viewport, reserved_bottom)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    /// Start a session; returns `false` if one is already active.
    pub fn begin(&mut self, pointer: Point, position: Point) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            origin_pointer: pointer,
            origin_position: position,
        });
        true
    }

    /// New origin for a pointer move, or `None` while idle.
    pub fn update(
        &self,
        pointer: Point,
        size: Size,
        viewport: Size,
        reserved_bottom: u16,
    ) -> Option<Point> {
        self.session
            .map(|session| session.position_for(pointer, size, viewport, reserved_bottom))
    }

    pub fn end(&mut self) -> Option<DragSession> {
        self.session.take()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }
}
