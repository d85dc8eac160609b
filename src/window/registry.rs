use std::collections::BTreeMap;

use super::Window;
use crate::config::WmConfig;
use crate::content::AppId;
use crate::geometry::{Point, Size, WindowRect};

/// Display attributes resolved for a window when it is first created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSeed {
    pub title: String,
    pub icon: &'static str,
}

/// Set of open windows keyed by application id. Iteration through `all()`
/// follows creation order.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: BTreeMap<AppId, Window>,
    next_instance: u64,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the window for `app`, creating it first if absent.
    ///
    /// A new window is placed at `cascade_origin + n * cascade_step`, where
    /// `n` is the number of windows already registered. Its size is the
    /// configured default, shrunk to fit `viewport` when one is known. The
    /// boolean is `true` when the window was created by this call.
    pub fn open(
        &mut self,
        app: &AppId,
        config: &WmConfig,
        viewport: Size,
        seed: impl FnOnce() -> WindowSeed,
    ) -> (&mut Window, bool) {
        let count = self.windows.len() as i32;
        let next_instance = &mut self.next_instance;
        let mut created = false;
        let window = self.windows.entry(app.clone()).or_insert_with(|| {
            created = true;
            let origin = Point::new(
                config.cascade_origin.x + count * config.cascade_step.x,
                config.cascade_origin.y + count * config.cascade_step.y,
            );
            let size = fit_size(config.default_size, viewport, config.taskbar_height);
            let instance = *next_instance;
            *next_instance = instance.saturating_add(1);
            tracing::debug!(app = %app, instance, x = origin.x, y = origin.y, "registered window");
            Window::new(app.clone(), seed(), WindowRect::new(origin, size), instance)
        });
        (window, created)
    }

    pub fn get(&self, app: &AppId) -> Option<&Window> {
        self.windows.get(app)
    }

    pub fn get_mut(&mut self, app: &AppId) -> Option<&mut Window> {
        self.windows.get_mut(app)
    }

    pub fn contains(&self, app: &AppId) -> bool {
        self.windows.contains_key(app)
    }

    /// Delete the entry for `app`; absent ids are ignored.
    pub fn remove(&mut self, app: &AppId) -> Option<Window> {
        self.windows.remove(app)
    }

    /// Every window in creation order.
    pub fn all(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.instance);
        windows
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Window> {
        self.windows.values_mut()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

fn fit_size(size: Size, viewport: Size, reserved_bottom: u16) -> Size {
    if viewport.width == 0 || viewport.height == 0 {
        return size;
    }
    let avail_height = viewport.height.saturating_sub(reserved_bottom).max(1);
    Size::new(size.width.min(viewport.width), size.height.min(avail_height))
}
