//! # Memory Management
//!
//! Instance pools that recycle freed instances before building new ones.
//!
//! ## Design Philosophy
//!
//! Construction is the expensive part. Once a pool is warm:
//! - No factory calls
//! - No reallocation of bookkeeping
//! - Deterministic FIFO recycling order

mod factory;
mod handle;
mod pool;

pub use factory::{
    from_fn, try_from_fn, ComponentFactory, DefaultFactory, FromFn, InstanceFactory, ObjectHost,
    PrefabFactory, TryFromFn,
};
pub use handle::{InstanceId, PoolId};
pub use pool::{ComponentPool, GenericPool, InstancePool, PoolStats, PrefabPool};
