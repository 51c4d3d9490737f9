//! # Hook Points
//!
//! A hook holds at most one subscriber. Subscribing again replaces it.

use std::fmt;

/// Named lifecycle callbacks a host drives from its own loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookPoint {
    /// Once per rendered frame.
    Update,
    /// Once per physics step.
    FixedUpdate,
    /// A trigger volume was entered.
    TriggerEnter,
    /// A collision began.
    CollisionEnter,
}

impl HookPoint {
    /// Every hook point, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Update,
        Self::FixedUpdate,
        Self::TriggerEnter,
        Self::CollisionEnter,
    ];

    /// Stable name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::FixedUpdate => "fixed_update",
            Self::TriggerEnter => "trigger_enter",
            Self::CollisionEnter => "collision_enter",
        }
    }
}

impl fmt::Display for HookPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Zero-or-one subscriber receiving `&A` each time the hook fires.
pub struct Hook<A> {
    subscriber: Option<Box<dyn FnMut(&A)>>,
}

impl<A> Hook<A> {
    /// Creates a hook nobody listens to.
    #[must_use]
    pub const fn new() -> Self {
        Self { subscriber: None }
    }

    /// Installs `callback`, replacing any previous subscriber.
    ///
    /// # Returns
    ///
    /// `true` if a previous subscriber was replaced.
    pub fn subscribe(&mut self, callback: impl FnMut(&A) + 'static) -> bool {
        self.subscriber.replace(Box::new(callback)).is_some()
    }

    /// Drops the subscriber, if any.
    pub fn clear(&mut self) -> bool {
        self.subscriber.take().is_some()
    }

    /// Checks whether a subscriber is installed.
    #[inline]
    #[must_use]
    pub const fn is_subscribed(&self) -> bool {
        self.subscriber.is_some()
    }

    /// Invokes the subscriber with `arg`.
    ///
    /// # Returns
    ///
    /// `false` if nobody was listening.
    pub fn fire(&mut self, arg: &A) -> bool {
        match self.subscriber.as_mut() {
            Some(callback) => {
                callback(arg);
                true
            }
            None => false,
        }
    }
}

impl<A> Default for Hook<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Hook<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook")
            .field("subscribed", &self.is_subscribed())
            .finish()
    }
}
