use std::sync::Arc;
use std::time::Instant;

use super::decorator::{DefaultDecorator, HeaderHit, WindowDecorator};
use super::registry::{WindowRegistry, WindowSeed};
use super::z_order::ZOrderTracker;
use super::{Phase, Window};
use crate::config::WmConfig;
use crate::content::{AppId, ContentProvider, resolve};
use crate::geometry::{Point, Size, WindowRect};
use crate::taskbar::{TaskbarEntry, TaskbarView};
use crate::timers::TimerQueue;

/// Deferred window transitions. `instance` pins a task to the window it was
/// scheduled for so a stale task never touches a reopened window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowTask {
    Reveal { app: AppId, instance: u64 },
    Remove { app: AppId, instance: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Created,
    Focused,
    Restored,
    /// The window is closing; a fresh one opens once removal completes.
    ReopenQueued,
    Ignored,
}

/// Result of routing a pointer-down through the window stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerOutcome {
    /// No window under the pointer.
    Ignored,
    Focused(AppId),
    DragStarted(AppId),
    Minimized(AppId),
    MaximizeToggled(AppId),
    Closed(AppId),
    /// Landed on a closing window; swallowed.
    Inert(AppId),
}

/// Window lifecycle orchestrator.
///
/// Owns the registry, the stacking counter and the deferred-task queue.
/// There is exactly one per desktop and it is passed by reference to
/// whatever needs it. All mutation happens on the caller's thread; the
/// taskbar snapshot is only taken after a mutation completes.
pub struct WindowManager {
    config: WmConfig,
    registry: WindowRegistry,
    z_order: ZOrderTracker,
    content: Arc<dyn ContentProvider>,
    decorator: Arc<dyn WindowDecorator>,
    timers: TimerQueue<WindowTask>,
    viewport: Size,
    now: Instant,
    // windows holding a desktop-wide pointer capture while dragging
    captures: Vec<AppId>,
    taskbar_dirty: bool,
}

impl WindowManager {
    pub fn new(config: WmConfig, content: Arc<dyn ContentProvider>, now: Instant) -> Self {
        Self {
            config,
            registry: WindowRegistry::new(),
            z_order: ZOrderTracker::new(config.z_baseline),
            content,
            decorator: Arc::new(DefaultDecorator),
            timers: TimerQueue::new(),
            viewport: Size::default(),
            now,
            captures: Vec::new(),
            taskbar_dirty: true,
        }
    }

    pub fn with_decorator(mut self, decorator: Arc<dyn WindowDecorator>) -> Self {
        self.decorator = decorator;
        self
    }

    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    pub fn decorator(&self) -> Arc<dyn WindowDecorator> {
        Arc::clone(&self.decorator)
    }

    pub fn content(&self) -> Arc<dyn ContentProvider> {
        Arc::clone(&self.content)
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Desktop area a maximized window fills.
    pub fn desktop_rect(&self) -> WindowRect {
        WindowRect::new(
            Point::new(0, 0),
            Size::new(
                self.viewport.width,
                self.viewport
                    .height
                    .saturating_sub(self.config.taskbar_height),
            ),
        )
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        let desktop = self.desktop_rect();
        for window in self.registry.iter_mut() {
            if window.maximized {
                window.rect = desktop;
            }
        }
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "viewport changed"
        );
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Advance the clock and run every deferred transition that is due.
    pub fn tick(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
        for task in self.timers.drain_due(self.now) {
            self.run_task(task);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }

    fn run_task(&mut self, task: WindowTask) {
        match task {
            WindowTask::Reveal { app, instance } => {
                if let Some(window) = self.registry.get_mut(&app)
                    && window.instance == instance
                    && window.phase == Phase::Entering
                {
                    window.phase = Phase::Shown;
                }
            }
            WindowTask::Remove { app, instance } => {
                let matches = self
                    .registry
                    .get(&app)
                    .is_some_and(|w| w.instance == instance && w.is_closing());
                if !matches {
                    return;
                }
                let reopen = self
                    .registry
                    .remove(&app)
                    .is_some_and(|w| w.reopen_requested);
                self.captures.retain(|id| *id != app);
                self.taskbar_dirty = true;
                tracing::debug!(app = %app, "removed window");
                if reopen {
                    self.open_app(&app);
                }
            }
        }
    }

    // Queries

    pub fn get(&self, app: &AppId) -> Option<&Window> {
        self.registry.get(app)
    }

    pub fn contains(&self, app: &AppId) -> bool {
        self.registry.contains(app)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Every window in creation order.
    pub fn windows(&self) -> Vec<&Window> {
        self.registry.all()
    }

    /// Windows shown on the desktop surface, back to front.
    pub fn draw_order(&self) -> Vec<&Window> {
        let mut visible: Vec<&Window> = self
            .registry
            .all()
            .into_iter()
            .filter(|w| !w.minimized)
            .collect();
        visible.sort_by_key(|w| w.z);
        visible
    }

    /// Frontmost window that is neither minimized nor closing.
    pub fn focused(&self) -> Option<&AppId> {
        self.registry
            .all()
            .into_iter()
            .filter(|w| !w.minimized && !w.is_closing())
            .max_by_key(|w| w.z)
            .map(|w| &w.app)
    }

    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        let focused = self.focused();
        self.registry
            .all()
            .into_iter()
            .map(|w| TaskbarEntry {
                app: w.app.clone(),
                title: w.title.clone(),
                icon: w.icon,
                minimized: w.minimized,
                active: focused == Some(&w.app),
            })
            .collect()
    }

    pub fn taskbar_dirty(&self) -> bool {
        self.taskbar_dirty
    }

    /// Push the post-mutation snapshot to `view` if anything changed.
    pub fn sync_taskbar(&mut self, view: &mut dyn TaskbarView) -> bool {
        if !self.taskbar_dirty {
            return false;
        }
        self.taskbar_dirty = false;
        view.rebuild(&self.taskbar_entries());
        true
    }

    // Lifecycle

    pub fn open_app(&mut self, app: &AppId) -> OpenOutcome {
        if app.as_str().is_empty() {
            return OpenOutcome::Ignored;
        }
        if let Some(window) = self.registry.get_mut(app) {
            if window.is_closing() {
                window.reopen_requested = true;
                tracing::debug!(app = %app, "reopen queued behind close");
                return OpenOutcome::ReopenQueued;
            }
            let outcome = if window.minimized {
                window.minimized = false;
                OpenOutcome::Restored
            } else {
                OpenOutcome::Focused
            };
            self.focus(app);
            self.taskbar_dirty = true;
            return outcome;
        }

        let content = Arc::clone(&self.content);
        let (window, _) = self
            .registry
            .open(app, &self.config, self.viewport, || {
                let lookup = resolve(content.as_ref(), app);
                WindowSeed {
                    title: lookup.title(),
                    icon: lookup.icon(),
                }
            });
        let z = self.z_order.bring_to_front(window);
        let instance = window.instance;
        self.timers.schedule(
            self.now,
            self.config.open_delay,
            WindowTask::Reveal {
                app: app.clone(),
                instance,
            },
        );
        self.taskbar_dirty = true;
        tracing::info!(app = %app, z, "opened window");
        OpenOutcome::Created
    }

    /// Raise `app` to the front. Missing or closing windows are ignored.
    pub fn focus(&mut self, app: &AppId) -> bool {
        let Some(window) = self.registry.get_mut(app) else {
            return false;
        };
        if window.is_closing() {
            return false;
        }
        self.z_order.bring_to_front(window);
        self.taskbar_dirty = true;
        true
    }

    /// First phase of a close: mark the window and schedule its removal.
    pub fn close_window(&mut self, app: &AppId) {
        let Some(window) = self.registry.get_mut(app) else {
            return;
        };
        if window.is_closing() {
            return;
        }
        window.phase = Phase::Closing;
        window.drag.end();
        let instance = window.instance;
        self.taskbar_dirty = true;
        self.captures.retain(|id| id != app);
        self.timers.schedule(
            self.now,
            self.config.close_delay,
            WindowTask::Remove {
                app: app.clone(),
                instance,
            },
        );
        tracing::debug!(app = %app, "closing window");
    }

    pub fn close_all(&mut self) {
        let ids: Vec<AppId> = self.registry.all().iter().map(|w| w.app.clone()).collect();
        for id in ids {
            self.close_window(&id);
        }
    }

    pub fn minimize_window(&mut self, app: &AppId) {
        let Some(window) = self.registry.get_mut(app) else {
            return;
        };
        if window.is_closing() || window.minimized {
            return;
        }
        window.minimized = true;
        window.drag.end();
        self.captures.retain(|id| id != app);
        self.taskbar_dirty = true;
        tracing::debug!(app = %app, "minimized window");
    }

    pub fn restore_window(&mut self, app: &AppId) {
        let Some(window) = self.registry.get_mut(app) else {
            return;
        };
        if window.is_closing() {
            return;
        }
        window.minimized = false;
        self.focus(app);
        self.taskbar_dirty = true;
    }

    pub fn toggle_maximize(&mut self, app: &AppId) {
        let desktop = self.desktop_rect();
        let fallback = WindowRect::new(self.config.restore_fallback, self.config.default_size);
        let Some(window) = self.registry.get_mut(app) else {
            return;
        };
        if window.is_closing() {
            return;
        }
        if window.maximized {
            window.rect = window.saved_rect.take().unwrap_or(fallback);
            window.maximized = false;
        } else {
            window.saved_rect = Some(window.rect);
            window.rect = desktop;
            window.maximized = true;
        }
        window.drag.end();
        self.captures.retain(|id| id != app);
        self.focus(app);
    }

    /// Taskbar entry click: restore a minimized window, otherwise minimize it.
    pub fn taskbar_click(&mut self, app: &AppId) {
        match self.registry.get(app) {
            Some(window) if window.minimized => self.restore_window(app),
            Some(_) => self.minimize_window(app),
            None => {}
        }
    }

    /// Focus the window after the frontmost one in creation order, wrapping.
    /// Closing windows are skipped; a minimized target is restored.
    pub fn cycle_windows(&mut self) -> Option<AppId> {
        let candidates: Vec<(AppId, u64)> = self
            .registry
            .all()
            .into_iter()
            .filter(|w| !w.is_closing())
            .map(|w| (w.app.clone(), w.z))
            .collect();
        if candidates.len() < 2 {
            return None;
        }
        let current = candidates
            .iter()
            .enumerate()
            .max_by_key(|(_, (_, z))| *z)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        let next = candidates[(current + 1) % candidates.len()].0.clone();
        if self.registry.get(&next).is_some_and(|w| w.minimized) {
            self.restore_window(&next);
        } else {
            self.focus(&next);
        }
        Some(next)
    }

    // Dragging

    /// Start a header drag for `app`. Closing and maximized windows do not
    /// move; the latter are still raised.
    pub fn begin_drag(&mut self, app: &AppId, pointer: Point) -> bool {
        let Some(window) = self.registry.get_mut(app) else {
            return false;
        };
        if window.is_closing() || window.minimized {
            return false;
        }
        if window.maximized {
            self.focus(app);
            return false;
        }
        let position = window.position();
        if !window.drag.begin(pointer, position) {
            return false;
        }
        if !self.captures.contains(app) {
            self.captures.push(app.clone());
        }
        self.focus(app);
        tracing::trace!(app = %app, x = pointer.x, y = pointer.y, "drag started");
        true
    }

    pub fn drag_to(&mut self, app: &AppId, pointer: Point) -> bool {
        let viewport = self.viewport;
        let reserved = self.config.taskbar_height;
        let Some(window) = self.registry.get_mut(app) else {
            return false;
        };
        let size = window.size();
        match window.drag.update(pointer, size, viewport, reserved) {
            Some(origin) => {
                window.rect.x = origin.x;
                window.rect.y = origin.y;
                true
            }
            None => false,
        }
    }

    pub fn end_drag(&mut self, app: &AppId) -> bool {
        self.captures.retain(|id| id != app);
        self.registry
            .get_mut(app)
            .and_then(|window| window.drag.end())
            .is_some()
    }

    pub fn is_dragging(&self, app: &AppId) -> bool {
        self.registry.get(app).is_some_and(|w| w.is_dragging())
    }

    /// Topmost window (on the desktop surface) containing `point`.
    pub fn window_at(&self, point: Point) -> Option<&Window> {
        self.draw_order()
            .into_iter()
            .rev()
            .find(|w| w.rect.contains(point))
    }

    /// Route a primary-button press. Control buttons act without raising the
    /// window or starting a drag; the header starts a drag; the body focuses.
    pub fn pointer_down(&mut self, point: Point) -> PointerOutcome {
        let Some(window) = self.window_at(point) else {
            return PointerOutcome::Ignored;
        };
        let app = window.app.clone();
        if window.is_closing() {
            return PointerOutcome::Inert(app);
        }
        match self.decorator.hit_test(window.rect, point) {
            HeaderHit::Minimize => {
                self.minimize_window(&app);
                PointerOutcome::Minimized(app)
            }
            HeaderHit::Maximize => {
                self.toggle_maximize(&app);
                PointerOutcome::MaximizeToggled(app)
            }
            HeaderHit::Close => {
                self.close_window(&app);
                PointerOutcome::Closed(app)
            }
            HeaderHit::Drag => {
                if self.begin_drag(&app, point) {
                    PointerOutcome::DragStarted(app)
                } else {
                    self.focus(&app);
                    PointerOutcome::Focused(app)
                }
            }
            HeaderHit::Body | HeaderHit::None => {
                self.focus(&app);
                PointerOutcome::Focused(app)
            }
        }
    }

    /// Desktop-wide pointer move: forwarded to every captured drag.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        let captured = self.captures.clone();
        let mut moved = false;
        for app in &captured {
            moved |= self.drag_to(app, point);
        }
        moved
    }

    /// Desktop-wide pointer release: ends every captured drag wherever the
    /// pointer is.
    pub fn pointer_up(&mut self, _point: Point) -> bool {
        let captured = std::mem::take(&mut self.captures);
        let mut ended = false;
        for app in &captured {
            ended |= self.end_drag(app);
        }
        ended
    }

    pub fn has_captures(&self) -> bool {
        !self.captures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::window::WindowState;
    use std::time::Duration;

    fn wm() -> (WindowManager, Instant) {
        let t0 = Instant::now();
        let mut wm = WindowManager::new(WmConfig::default(), Arc::new(Catalog::portfolio()), t0);
        wm.set_viewport(Size::new(1920, 1080));
        (wm, t0)
    }

    fn id(s: &str) -> AppId {
        AppId::from(s)
    }

    #[test]
    fn reveal_marks_window_active_after_open_delay() {
        let (mut wm, t0) = wm();
        wm.open_app(&id("resume"));
        assert!(!wm.get(&id("resume")).unwrap().is_active());
        wm.tick(t0 + Duration::from_millis(50));
        assert!(!wm.get(&id("resume")).unwrap().is_active());
        wm.tick(t0 + Duration::from_millis(100));
        assert!(wm.get(&id("resume")).unwrap().is_active());
    }

    #[test]
    fn first_window_sits_just_above_baseline() {
        let (mut wm, _) = wm();
        wm.open_app(&id("about"));
        assert_eq!(wm.get(&id("about")).unwrap().z(), 101);
    }

    #[test]
    fn closing_window_rejects_focus_and_drag() {
        let (mut wm, _) = wm();
        wm.open_app(&id("a"));
        wm.close_window(&id("a"));
        let z = wm.get(&id("a")).unwrap().z();
        assert!(!wm.focus(&id("a")));
        assert!(!wm.begin_drag(&id("a"), Point::new(60, 50)));
        assert_eq!(wm.get(&id("a")).unwrap().z(), z);
        wm.minimize_window(&id("a"));
        assert!(!wm.get(&id("a")).unwrap().is_minimized());
    }

    #[test]
    fn close_removes_after_delay_and_marks_taskbar() {
        let (mut wm, t0) = wm();
        wm.open_app(&id("a"));
        let mut view = crate::taskbar::Taskbar::new();
        assert!(wm.sync_taskbar(&mut view));
        wm.close_window(&id("a"));
        wm.tick(t0 + Duration::from_millis(299));
        assert!(wm.contains(&id("a")));
        wm.tick(t0 + Duration::from_millis(300));
        assert!(!wm.contains(&id("a")));
        assert!(wm.sync_taskbar(&mut view));
        assert!(view.entries().is_empty());
    }

    #[test]
    fn closing_frontmost_moves_active_flag_before_removal() {
        let (mut wm, _) = wm();
        wm.open_app(&id("a"));
        wm.open_app(&id("b"));
        let mut view = crate::taskbar::Taskbar::new();
        assert!(wm.sync_taskbar(&mut view));
        wm.close_window(&id("b"));
        assert!(wm.sync_taskbar(&mut view));
        let active: Vec<(&str, bool)> = view
            .entries()
            .iter()
            .map(|e| (e.app.as_str(), e.active))
            .collect();
        assert_eq!(active, vec![("a", true), ("b", false)]);
    }

    #[test]
    fn close_all_refreshes_taskbar() {
        let (mut wm, _) = wm();
        wm.open_app(&id("a"));
        let mut view = crate::taskbar::Taskbar::new();
        wm.sync_taskbar(&mut view);
        wm.close_all();
        assert!(wm.sync_taskbar(&mut view));
        assert!(view.entries().iter().all(|e| !e.active));
    }

    #[test]
    fn reopen_during_close_creates_a_fresh_window_after_removal() {
        let (mut wm, t0) = wm();
        wm.open_app(&id("a"));
        let first = wm.get(&id("a")).unwrap().instance();
        wm.close_window(&id("a"));
        assert_eq!(wm.open_app(&id("a")), OpenOutcome::ReopenQueued);
        assert_eq!(wm.len(), 1);
        wm.tick(t0 + Duration::from_millis(300));
        assert_eq!(wm.len(), 1);
        let window = wm.get(&id("a")).unwrap();
        assert_ne!(window.instance(), first);
        assert!(!window.is_closing());
        // the reveal scheduled for the new window is not confused with the old one
        wm.tick(t0 + Duration::from_millis(400));
        assert!(wm.get(&id("a")).unwrap().is_active());
    }

    #[test]
    fn control_buttons_do_not_raise_window() {
        let (mut wm, _) = wm();
        wm.open_app(&id("a"));
        wm.open_app(&id("b"));
        // a's close button is hidden behind b; move b away first
        wm.begin_drag(&id("b"), Point::new(90, 80));
        wm.pointer_move(Point::new(1000, 600));
        wm.pointer_up(Point::new(1000, 600));
        let a = wm.get(&id("a")).unwrap().rect();
        let b_z = wm.get(&id("b")).unwrap().z();
        let minimize = Point::new(a.x + a.width as i32 - 8, a.y);
        assert_eq!(
            wm.pointer_down(minimize),
            PointerOutcome::Minimized(id("a"))
        );
        assert_eq!(wm.get(&id("a")).unwrap().state(), WindowState::Minimized);
        assert_eq!(wm.get(&id("b")).unwrap().z(), b_z);
        assert_eq!(wm.focused(), Some(&id("b")));
    }

    #[test]
    fn header_press_starts_drag_and_release_anywhere_ends_it() {
        let (mut wm, _) = wm();
        wm.open_app(&id("a"));
        assert_eq!(
            wm.pointer_down(Point::new(60, 50)),
            PointerOutcome::DragStarted(id("a"))
        );
        assert!(wm.has_captures());
        assert!(wm.pointer_move(Point::new(70, 65)));
        assert_eq!(wm.get(&id("a")).unwrap().position(), Point::new(60, 65));
        assert!(wm.pointer_up(Point::new(-500, -500)));
        assert!(!wm.has_captures());
        assert!(!wm.is_dragging(&id("a")));
        assert!(!wm.pointer_move(Point::new(0, 0)));
    }

    #[test]
    fn body_press_focuses_and_empty_desktop_is_ignored() {
        let (mut wm, _) = wm();
        wm.open_app(&id("a"));
        wm.open_app(&id("b"));
        assert_eq!(
            wm.pointer_down(Point::new(55, 60)),
            PointerOutcome::Focused(id("a"))
        );
        assert_eq!(wm.focused(), Some(&id("a")));
        assert_eq!(
            wm.pointer_down(Point::new(1900, 1000)),
            PointerOutcome::Ignored
        );
    }

    #[test]
    fn maximized_windows_do_not_drag() {
        let (mut wm, _) = wm();
        wm.open_app(&id("a"));
        wm.toggle_maximize(&id("a"));
        assert!(!wm.begin_drag(&id("a"), Point::new(10, 0)));
        assert_eq!(
            wm.pointer_down(Point::new(10, 0)),
            PointerOutcome::Focused(id("a"))
        );
        assert_eq!(wm.get(&id("a")).unwrap().position(), Point::new(0, 0));
    }

    #[test]
    fn maximize_fills_desktop_and_follows_viewport() {
        let (mut wm, _) = wm();
        wm.open_app(&id("a"));
        wm.toggle_maximize(&id("a"));
        assert_eq!(
            wm.get(&id("a")).unwrap().rect(),
            WindowRect::new(Point::new(0, 0), Size::new(1920, 1020))
        );
        wm.set_viewport(Size::new(1280, 720));
        assert_eq!(
            wm.get(&id("a")).unwrap().size(),
            Size::new(1280, 660)
        );
    }

    #[test]
    fn unmaximize_without_saved_geometry_uses_fallback() {
        let (mut wm, _) = wm();
        wm.open_app(&id("a"));
        wm.toggle_maximize(&id("a"));
        wm.registry.get_mut(&id("a")).unwrap().saved_rect = None;
        wm.toggle_maximize(&id("a"));
        let window = wm.get(&id("a")).unwrap();
        assert_eq!(window.position(), Point::new(100, 100));
        assert_eq!(window.state(), WindowState::Normal);
    }

    #[test]
    fn taskbar_click_toggles_minimized() {
        let (mut wm, _) = wm();
        wm.open_app(&id("a"));
        wm.taskbar_click(&id("a"));
        assert!(wm.get(&id("a")).unwrap().is_minimized());
        wm.taskbar_click(&id("a"));
        assert!(!wm.get(&id("a")).unwrap().is_minimized());
        wm.taskbar_click(&id("missing"));
    }

    #[test]
    fn missing_ids_are_silent_noops() {
        let (mut wm, _) = wm();
        wm.close_window(&id("x"));
        wm.minimize_window(&id("x"));
        wm.restore_window(&id("x"));
        wm.toggle_maximize(&id("x"));
        assert!(!wm.focus(&id("x")));
        assert!(!wm.end_drag(&id("x")));
        assert!(wm.is_empty());
        assert_eq!(wm.open_app(&AppId::from("")), OpenOutcome::Ignored);
    }

    #[test]
    fn cycle_restores_minimized_target_and_skips_closing() {
        let (mut wm, _) = wm();
        for app in ["a", "b", "c"] {
            wm.open_app(&id(app));
        }
        wm.minimize_window(&id("a"));
        wm.close_window(&id("b"));
        // c is frontmost; b is closing so a is next
        assert_eq!(wm.cycle_windows(), Some(id("a")));
        assert!(!wm.get(&id("a")).unwrap().is_minimized());
        assert_eq!(wm.focused(), Some(&id("a")));
    }

    #[test]
    fn close_all_marks_every_window() {
        let (mut wm, t0) = wm();
        wm.open_app(&id("a"));
        wm.open_app(&id("b"));
        wm.close_all();
        assert!(wm.windows().iter().all(|w| w.is_closing()));
        wm.tick(t0 + Duration::from_secs(1));
        assert!(wm.is_empty());
    }
}
