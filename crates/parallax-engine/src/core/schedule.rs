/// Handle to a scheduled frame iteration. A handle returned by `start`
/// is invalidated by `stop`; a stale handle never fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(pub u32);

/// Cooperative per-frame loop with explicit cancellation.
///
/// The host scheduler calls `tick()` once per display refresh. While the
/// loop is running, each tick fires exactly the one pending iteration and
/// schedules the next in its place. `stop` cancels the pending iteration
/// outright, so no extra frame runs after a stop request.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Option<TaskHandle>,
    next_id: u32,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the loop. Starting while already running is a no-op that
    /// returns the live handle; no second loop is spawned.
    pub fn start(&mut self) -> TaskHandle {
        if let Some(handle) = self.pending {
            return handle;
        }
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending = Some(handle);
        handle
    }

    /// Cancel the pending iteration. Returns false when idle (no-op).
    pub fn stop(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Fire the pending iteration, if any, and self-schedule the next.
    /// Returns true when the caller should run one loop body.
    pub fn tick(&mut self) -> bool {
        match self.pending.take() {
            Some(_) => {
                let next = TaskHandle(self.next_id);
                self.next_id += 1;
                self.pending = Some(next);
                true
            }
            None => false,
        }
    }
}
