//! # UNIPREP Core
//!
//! Reusable instance pools for game hosts:
//! - Get-or-create on a miss, with no capacity ceiling
//! - FIFO recycling of freed instances
//! - Pluggable construction through [`InstanceFactory`]
//!
//! ## Architecture Rules
//!
//! 1. **The pool only keeps books** - construction and destruction belong to the factory and the caller
//! 2. **Handles, not references** - instances are named by generational [`InstanceId`]s
//! 3. **Tolerant release** - freeing or removing something the pool cannot act on is a no-op
//!
//! ## Example
//!
//! ```rust
//! use uniprep_core::{GenericPool, PrefabPool};
//!
//! let mut particles: GenericPool<Vec<f32>> = GenericPool::default();
//! let id = particles.get();
//! particles.free(id);
//!
//! let mut goblins = PrefabPool::from_prefab(String::from("goblin"));
//! let g = goblins.get();
//! assert_eq!(goblins.instance(g).map(String::as_str), Some("goblin"));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod memory;

pub use config::PoolConfig;
pub use error::{PoolError, PoolResult};
pub use memory::{
    from_fn, try_from_fn, ComponentFactory, ComponentPool, DefaultFactory, FromFn, GenericPool,
    InstanceFactory, InstanceId, InstancePool, ObjectHost, PoolId, PoolStats, PrefabFactory, PrefabPool,
    TryFromFn,
};
