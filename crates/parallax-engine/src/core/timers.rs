use std::collections::HashMap;
use std::hash::Hash;

/// Keyed one-shot timers advanced by the fixed-step clock.
///
/// Arming a key that is already pending replaces its deadline, so a
/// repeated trigger behaves as cancel-and-reschedule rather than
/// stacking callbacks.
#[derive(Debug)]
pub struct OneShotTimers<K: Eq + Hash + Copy> {
    pending: HashMap<K, f32>,
}

impl<K: Eq + Hash + Copy> OneShotTimers<K> {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    /// Arm (or re-arm) `key` to fire after `delay_secs`.
    pub fn arm(&mut self, key: K, delay_secs: f32) {
        self.pending.insert(key, delay_secs);
    }

    /// Cancel a pending timer. Returns false when the key was not armed.
    pub fn cancel(&mut self, key: K) -> bool {
        self.pending.remove(&key).is_some()
    }

    pub fn is_pending(&self, key: K) -> bool {
        self.pending.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance all pending timers by `dt` and return the keys that expired.
    pub fn tick(&mut self, dt: f32) -> Vec<K> {
        let mut expired = Vec::new();
        for (key, remaining) in self.pending.iter_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                expired.push(*key);
            }
        }
        for key in &expired {
            self.pending.remove(key);
        }
        expired
    }
}

impl<K: Eq + Hash + Copy> Default for OneShotTimers<K> {
    fn default() -> Self {
        Self::new()
    }
}
