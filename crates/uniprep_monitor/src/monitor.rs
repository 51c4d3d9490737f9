//! # Monitor
//!
//! Relays a host object's lifecycle callbacks to whoever subscribed.
//!
//! The host owns the loop. Each frame it calls [`Monitor::update`], each
//! physics step [`Monitor::fixed_update`], and on contact
//! [`Monitor::trigger_enter`] or [`Monitor::collision_enter`]. A monitor
//! just forwards to the one subscriber per hook point, if any.

use crate::hook::{Hook, HookPoint};

/// Lifecycle relay for one host object.
///
/// `Tr` is the host's trigger collider payload, `Co` its collision payload.
#[derive(Debug)]
pub struct Monitor<Tr, Co> {
    update: Hook<()>,
    fixed_update: Hook<()>,
    trigger_enter: Hook<Tr>,
    collision_enter: Hook<Co>,
}

impl<Tr, Co> Monitor<Tr, Co> {
    /// Creates a monitor with no subscribers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            update: Hook::new(),
            fixed_update: Hook::new(),
            trigger_enter: Hook::new(),
            collision_enter: Hook::new(),
        }
    }

    /// Subscribes to per-frame updates.
    pub fn handle_update(&mut self, mut callback: impl FnMut() + 'static) {
        let replaced = self.update.subscribe(move |()| callback());
        log_subscribe(HookPoint::Update, replaced);
    }

    /// Subscribes to physics steps.
    pub fn handle_fixed_update(&mut self, mut callback: impl FnMut() + 'static) {
        let replaced = self.fixed_update.subscribe(move |()| callback());
        log_subscribe(HookPoint::FixedUpdate, replaced);
    }

    /// Subscribes to trigger entry.
    pub fn handle_trigger_enter(&mut self, callback: impl FnMut(&Tr) + 'static) {
        let replaced = self.trigger_enter.subscribe(callback);
        log_subscribe(HookPoint::TriggerEnter, replaced);
    }

    /// Subscribes to collision entry.
    pub fn handle_collision_enter(&mut self, callback: impl FnMut(&Co) + 'static) {
        let replaced = self.collision_enter.subscribe(callback);
        log_subscribe(HookPoint::CollisionEnter, replaced);
    }

    /// Host callback: a frame was rendered.
    pub fn update(&mut self) -> bool {
        self.update.fire(&())
    }

    /// Host callback: a physics step ran.
    pub fn fixed_update(&mut self) -> bool {
        self.fixed_update.fire(&())
    }

    /// Host callback: a trigger volume was entered by `collider`.
    pub fn trigger_enter(&mut self, collider: &Tr) -> bool {
        self.trigger_enter.fire(collider)
    }

    /// Host callback: a collision began.
    pub fn collision_enter(&mut self, collision: &Co) -> bool {
        self.collision_enter.fire(collision)
    }

    /// Checks whether `point` has a subscriber.
    #[must_use]
    pub const fn is_subscribed(&self, point: HookPoint) -> bool {
        match point {
            HookPoint::Update => self.update.is_subscribed(),
            HookPoint::FixedUpdate => self.fixed_update.is_subscribed(),
            HookPoint::TriggerEnter => self.trigger_enter.is_subscribed(),
            HookPoint::CollisionEnter => self.collision_enter.is_subscribed(),
        }
    }

    /// Drops the subscriber of `point`.
    pub fn clear(&mut self, point: HookPoint) -> bool {
        match point {
            HookPoint::Update => self.update.clear(),
            HookPoint::FixedUpdate => self.fixed_update.clear(),
            HookPoint::TriggerEnter => self.trigger_enter.clear(),
            HookPoint::CollisionEnter => self.collision_enter.clear(),
        }
    }
}

impl<Tr, Co> Default for Monitor<Tr, Co> {
    fn default() -> Self {
        Self::new()
    }
}

fn log_subscribe(point: HookPoint, replaced: bool) {
    tracing::trace!(hook = %point, replaced, "monitor hook bound");
}
