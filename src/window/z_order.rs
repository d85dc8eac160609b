use super::Window;

/// Hands out strictly increasing stacking values. Every focus event,
/// including window creation, consumes the next one.
#[derive(Debug, Clone)]
pub struct ZOrderTracker {
    current: u64,
}

impl ZOrderTracker {
    /// `baseline` sits above any fixed desktop chrome; the first window gets
    /// `baseline + 1`.
    pub fn new(baseline: u64) -> Self {
        Self { current: baseline }
    }

    pub fn next(&mut self) -> u64 {
        self.current = self.current.saturating_add(1);
        self.current
    }

    /// Highest value handed out so far.
    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn bring_to_front(&mut self, window: &mut Window) -> u64 {
        let z = self.next();
        window.z = z;
        tracing::trace!(app = %window.app, z, "raised window");
        z
    }
}
