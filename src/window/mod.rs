pub mod decorator;
pub mod drag;
pub mod registry;
pub mod z_order;

mod window_manager;

pub use decorator::{DefaultDecorator, HeaderHit, WindowDecorator};
pub use drag::{DragController, DragSession};
pub use registry::{WindowRegistry, WindowSeed};
pub use window_manager::{OpenOutcome, PointerOutcome, WindowManager, WindowTask};
pub use z_order::ZOrderTracker;

use crate::content::AppId;
use crate::geometry::{Point, Size, WindowRect};

/// Externally visible window state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Normal,
    Minimized,
    Maximized,
}

/// Presentation phase driven by the open/close timers.
///
/// `Entering` lasts from creation until the reveal task fires; `Closing` is
/// the terminal sub-state between the close request and registry removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Shown,
    Closing,
}

#[derive(Debug, Clone)]
pub struct Window {
    pub(crate) app: AppId,
    pub(crate) title: String,
    pub(crate) icon: &'static str,
    pub(crate) rect: WindowRect,
    pub(crate) z: u64,
    pub(crate) minimized: bool,
    pub(crate) maximized: bool,
    pub(crate) saved_rect: Option<WindowRect>,
    pub(crate) phase: Phase,
    pub(crate) drag: DragController,
    pub(crate) instance: u64,
    pub(crate) reopen_requested: bool,
}

impl Window {
    pub(crate) fn new(app: AppId, seed: WindowSeed, rect: WindowRect, instance: u64) -> Self {
        Self {
            app,
            title: seed.title,
            icon: seed.icon,
            rect,
            z: 0,
            minimized: false,
            maximized: false,
            saved_rect: None,
            phase: Phase::Entering,
            drag: DragController::default(),
            instance,
            reopen_requested: false,
        }
    }

    pub fn app(&self) -> &AppId {
        &self.app
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    pub fn rect(&self) -> WindowRect {
        self.rect
    }

    pub fn position(&self) -> Point {
        self.rect.origin()
    }

    pub fn size(&self) -> Size {
        self.rect.size()
    }

    /// Stacking value; higher paints in front.
    pub fn z(&self) -> u64 {
        self.z
    }

    pub fn state(&self) -> WindowState {
        if self.minimized {
            WindowState::Minimized
        } else if self.maximized {
            WindowState::Maximized
        } else {
            WindowState::Normal
        }
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_closing(&self) -> bool {
        self.phase == Phase::Closing
    }

    /// Whether the entrance has completed and no exit is in progress.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Shown
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Unique per created window; a reopened application gets a new one.
    pub fn instance(&self) -> u64 {
        self.instance
    }

    /// Geometry captured when the window was maximized.
    pub fn saved_rect(&self) -> Option<WindowRect> {
        self.saved_rect
    }
}
