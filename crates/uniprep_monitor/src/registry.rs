//! # Monitor Registry
//!
//! One [`Monitor`] per host object, attached on first request.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::monitor::Monitor;

/// Monitors keyed by host object id.
pub struct MonitorRegistry<K, Tr, Co> {
    monitors: HashMap<K, Monitor<Tr, Co>>,
}

impl<K: Eq + Hash, Tr, Co> MonitorRegistry<K, Tr, Co> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            monitors: HashMap::new(),
        }
    }

    /// Returns the monitor attached to `object`, attaching one first if
    /// there is none.
    pub fn add_monitor(&mut self, object: K) -> &mut Monitor<Tr, Co>
    where
        K: fmt::Debug,
    {
        self.monitors.entry(object).or_insert_with_key(|key| {
            tracing::debug!(object = ?key, "monitor attached");
            Monitor::new()
        })
    }

    /// The monitor attached to `object`, if any.
    #[must_use]
    pub fn monitor(&self, object: &K) -> Option<&Monitor<Tr, Co>> {
        self.monitors.get(object)
    }

    /// Mutable access to the monitor attached to `object`, if any.
    pub fn monitor_mut(&mut self, object: &K) -> Option<&mut Monitor<Tr, Co>> {
        self.monitors.get_mut(object)
    }

    /// Detaches and returns the monitor of `object`.
    pub fn remove(&mut self, object: &K) -> Option<Monitor<Tr, Co>> {
        self.monitors.remove(object)
    }

    /// Number of attached monitors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Checks whether no monitor is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Host loop: a frame was rendered. Returns how many subscribers ran.
    pub fn dispatch_update(&mut self) -> usize {
        self.monitors
            .values_mut()
            .map(Monitor::update)
            .filter(|&ran| ran)
            .count()
    }

    /// Host loop: a physics step ran. Returns how many subscribers ran.
    pub fn dispatch_fixed_update(&mut self) -> usize {
        self.monitors
            .values_mut()
            .map(Monitor::fixed_update)
            .filter(|&ran| ran)
            .count()
    }

    /// Routes a trigger entry to `object`'s monitor.
    pub fn trigger_enter(&mut self, object: &K, collider: &Tr) -> bool {
        self.monitors
            .get_mut(object)
            .is_some_and(|monitor| monitor.trigger_enter(collider))
    }

    /// Routes a collision to `object`'s monitor.
    pub fn collision_enter(&mut self, object: &K, collision: &Co) -> bool {
        self.monitors
            .get_mut(object)
            .is_some_and(|monitor| monitor.collision_enter(collision))
    }
}

impl<K: Eq + Hash, Tr, Co> Default for MonitorRegistry<K, Tr, Co> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, Tr, Co> fmt::Debug for MonitorRegistry<K, Tr, Co> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonitorRegistry")
            .field("monitors", &self.monitors.len())
            .finish()
    }
}
