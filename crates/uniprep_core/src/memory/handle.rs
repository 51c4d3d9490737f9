//! # Instance Handles
//!
//! A handle names one instance of one pool:
//! - The issuing pool, so handles never cross pools
//! - A slot in that pool's storage
//! - The slot's generation, so a handle outliving its instance goes stale

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Identity of one [`InstancePool`](super::InstancePool), unique per process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoolId(u32);

impl PoolId {
    /// Reserved for [`InstanceId::NULL`]; never issued.
    const NONE: Self = Self(0);

    /// Issues a fresh pool identity.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw value, for logs.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Handle naming one instance owned by an [`InstancePool`](super::InstancePool).
///
/// Handles compare equal only when pool, slot and generation all match.
/// A handle from another pool, or one kept after its instance was removed,
/// therefore never names anything a pool is tracking.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId {
    pool: PoolId,
    slot: u32,
    generation: u32,
}

impl InstanceId {
    /// Null/invalid instance ID. No pool ever issues it.
    pub const NULL: Self = Self {
        pool: PoolId::NONE,
        slot: u32::MAX,
        generation: u32::MAX,
    };

    #[inline]
    pub(crate) const fn new(pool: PoolId, slot: u32, generation: u32) -> Self {
        Self {
            pool,
            slot,
            generation,
        }
    }

    /// The pool that issued this handle.
    #[inline]
    #[must_use]
    pub const fn pool(self) -> PoolId {
        self.pool
    }

    /// Storage slot inside the issuing pool. Reused after a `remove`.
    #[inline]
    #[must_use]
    pub const fn slot(self) -> u32 {
        self.slot
    }

    /// Generation of the slot when this handle was issued.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }

    /// Checks if this ID is null/invalid.
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.pool.0 == PoolId::NONE.0
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Debug for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("InstanceId(null)")
        } else {
            write!(
                f,
                "InstanceId(p{}:{}v{})",
                self.pool.0, self.slot, self.generation
            )
        }
    }
}
