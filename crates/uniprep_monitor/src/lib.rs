//! # UNIPREP Monitor
//!
//! Lifecycle event relay. A host engine drives four hook points per
//! object (update, fixed update, trigger enter, collision enter) and a
//! [`Monitor`] forwards each to at most one subscriber.
//!
//! ## Example
//!
//! ```rust
//! use uniprep_monitor::MonitorRegistry;
//!
//! // Objects keyed by id, triggers report the collider's layer
//! let mut registry: MonitorRegistry<u32, u8, ()> = MonitorRegistry::new();
//! registry.add_monitor(7).handle_trigger_enter(|layer| assert_eq!(*layer, 4));
//!
//! // Called from the host's physics callback
//! assert!(registry.trigger_enter(&7, &4));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod hook;
pub mod monitor;
pub mod registry;

pub use hook::{Hook, HookPoint};
pub use monitor::Monitor;
pub use registry::MonitorRegistry;
