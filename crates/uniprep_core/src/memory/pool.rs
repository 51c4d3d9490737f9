//! # Instance Pool
//!
//! Get-or-create cache of reusable instances.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt;

use super::factory::{ComponentFactory, DefaultFactory, InstanceFactory, ObjectHost, PrefabFactory};
use super::handle::{InstanceId, PoolId};
use crate::config::{PoolConfig, DEFAULT_POOL_NAME};

/// Pool of plain values built through [`Default`].
pub type GenericPool<T> = InstancePool<DefaultFactory<T>>;

/// Pool of components, each backed by its own host object.
pub type ComponentPool<H> = InstancePool<ComponentFactory<H>>;

/// Pool of clones of a template instance.
pub type PrefabPool<T> = InstancePool<PrefabFactory<T>>;

/// Running counters for a pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Instances constructed by the factory.
    pub created: u64,
    /// Successful `get` calls.
    pub acquired: u64,
    /// `get` calls served without constructing anything.
    pub recycled: u64,
    /// Instances moved from busy back to available.
    pub freed: u64,
    /// Instances evicted with `remove`.
    pub removed: u64,
}

impl PoolStats {
    /// Instances the pool currently tracks.
    #[inline]
    #[must_use]
    pub const fn live(&self) -> u64 {
        self.created - self.removed
    }
}

/// One storage slot. The generation is bumped every time the slot is vacated.
struct Slot<T> {
    value: Option<T>,
    generation: u32,
}

/// A reusable set of instances that recycles freed instances before
/// asking its factory for new ones.
///
/// Every instance the pool tracks is either *available* (free for the
/// next [`get`](Self::get)) or *busy* (checked out). Instances are named
/// by [`InstanceId`] handles; the values themselves stay in the pool and
/// are reached through [`instance`](Self::instance) and
/// [`instance_mut`](Self::instance_mut).
///
/// Recycling is FIFO: `get` returns the instance that has been available
/// the longest. There is no capacity ceiling.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. Use it from the host's update thread or
/// wrap it in a mutex.
///
/// # Example
///
/// ```rust
/// use uniprep_core::{from_fn, InstancePool};
///
/// let mut next = 0;
/// let mut pool = InstancePool::new(from_fn(move || {
///     next += 1;
///     next
/// }));
///
/// let first = pool.get();
/// pool.free(first);
///
/// // Freed instances come back before anything new is built
/// assert_eq!(pool.get(), first);
/// assert_eq!(pool.instance(first), Some(&1));
/// ```
pub struct InstancePool<F: InstanceFactory> {
    /// Stamped into every handle this pool issues.
    id: PoolId,
    /// Builds new instances on a miss.
    factory: F,
    /// Instance storage, indexed by handle.
    slots: Vec<Slot<F::Instance>>,
    /// Slots vacated by `remove`, ready for reuse.
    vacant: Vec<u32>,
    /// Free instances, oldest first.
    available: VecDeque<InstanceId>,
    /// Checked-out instances, in checkout order.
    busy: Vec<InstanceId>,
    /// Running counters.
    stats: PoolStats,
    /// Name reported in log events.
    name: String,
}

impl<F: InstanceFactory> InstancePool<F> {
    /// Creates an empty pool. Nothing is constructed until the first `get`.
    #[must_use]
    pub fn new(factory: F) -> Self {
        Self {
            id: PoolId::next(),
            factory,
            slots: Vec::new(),
            vacant: Vec::new(),
            available: VecDeque::new(),
            busy: Vec::new(),
            stats: PoolStats::default(),
            name: DEFAULT_POOL_NAME.to_owned(),
        }
    }

    /// Creates a pool tuned by `config`, prewarming as requested.
    ///
    /// A blank name falls back to the default; see [`PoolConfig::validate`]
    /// to reject it instead.
    ///
    /// # Errors
    ///
    /// The factory's error if a prewarm construction fails.
    pub fn with_config(factory: F, config: &PoolConfig) -> Result<Self, F::Error> {
        let mut pool = Self::new(factory);
        if !config.name.trim().is_empty() {
            pool.name.clone_from(&config.name);
        }
        pool.slots.reserve(config.initial_capacity);
        pool.available.reserve(config.initial_capacity);
        pool.busy.reserve(config.initial_capacity);
        pool.prewarm(config.prewarm)?;
        Ok(pool)
    }

    /// Identity stamped into every handle this pool issues.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Name reported in log events.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The factory used on a miss.
    #[must_use]
    pub const fn factory(&self) -> &F {
        &self.factory
    }

    /// Mutable access to the factory.
    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    /// Checks out the longest-available instance, constructing exactly one
    /// new instance first if none is available.
    ///
    /// # Errors
    ///
    /// The factory's error, unchanged. The pool is left as it was.
    pub fn try_get(&mut self) -> Result<InstanceId, F::Error> {
        let recycled = !self.available.is_empty();
        loop {
            if let Some(id) = self.available.pop_front() {
                self.busy.push(id);
                self.stats.acquired += 1;
                if recycled {
                    self.stats.recycled += 1;
                }
                tracing::trace!(pool = %self.name, ?id, recycled, "instance acquired");
                return Ok(id);
            }
            self.grow()?;
        }
    }

    /// Returns a busy instance to the available set.
    ///
    /// Freeing an instance that is not busy (already free, removed, stale,
    /// or from another pool) is tolerated and changes nothing.
    ///
    /// # Returns
    ///
    /// `true` if the instance moved from busy to available.
    pub fn free(&mut self, id: InstanceId) -> bool {
        let Some(position) = self.busy.iter().position(|&busy| busy == id) else {
            tracing::debug!(pool = %self.name, ?id, "free ignored: instance not busy");
            return false;
        };
        self.busy.remove(position);
        self.available.push_back(id);
        self.stats.freed += 1;
        tracing::trace!(pool = %self.name, ?id, "instance freed");
        true
    }

    /// Evicts an available instance and hands it back for disposal.
    ///
    /// Only available instances can be removed. Busy, unknown and stale
    /// handles yield `None` and leave the pool untouched.
    pub fn remove(&mut self, id: InstanceId) -> Option<F::Instance> {
        let Some(position) = self.available.iter().position(|&free| free == id) else {
            tracing::debug!(pool = %self.name, ?id, "remove ignored: instance not available");
            return None;
        };
        self.available.remove(position);

        let slot = &mut self.slots[id.slot() as usize];
        let value = slot.value.take();
        slot.generation = slot.generation.wrapping_add(1);
        self.vacant.push(id.slot());
        self.stats.removed += 1;
        tracing::trace!(pool = %self.name, ?id, "instance removed");
        value
    }

    /// Constructs `count` instances straight into the available set.
    ///
    /// # Errors
    ///
    /// The factory's error. Instances built before the failure stay pooled.
    pub fn prewarm(&mut self, count: usize) -> Result<(), F::Error> {
        for _ in 0..count {
            self.grow()?;
        }
        Ok(())
    }

    /// Returns every busy instance to the available set, in checkout order.
    ///
    /// # Returns
    ///
    /// Number of instances freed.
    pub fn free_all(&mut self) -> usize {
        let count = self.busy.len();
        self.available.extend(self.busy.drain(..));
        self.stats.freed += count as u64;
        tracing::debug!(pool = %self.name, count, "all instances freed");
        count
    }

    /// Gets a reference to a tracked instance.
    #[inline]
    #[must_use]
    pub fn instance(&self, id: InstanceId) -> Option<&F::Instance> {
        if id.pool() != self.id {
            return None;
        }
        let slot = self.slots.get(id.slot() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.value.as_ref()
    }

    /// Gets a mutable reference to a tracked instance.
    #[inline]
    pub fn instance_mut(&mut self, id: InstanceId) -> Option<&mut F::Instance> {
        if id.pool() != self.id {
            return None;
        }
        let slot = self.slots.get_mut(id.slot() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.value.as_mut()
    }

    /// Checks whether `id` names an instance this pool tracks.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.instance(id).is_some()
    }

    /// Checks whether `id` is currently checked out.
    #[must_use]
    pub fn is_busy(&self, id: InstanceId) -> bool {
        self.busy.contains(&id)
    }

    /// Checks whether `id` is currently free for the next `get`.
    #[must_use]
    pub fn is_available(&self, id: InstanceId) -> bool {
        self.available.contains(&id)
    }

    /// Number of available instances.
    #[inline]
    #[must_use]
    pub fn available_len(&self) -> usize {
        self.available.len()
    }

    /// Number of busy instances.
    #[inline]
    #[must_use]
    pub fn busy_len(&self) -> usize {
        self.busy.len()
    }

    /// Number of tracked instances, available and busy.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.available.len() + self.busy.len()
    }

    /// Checks whether the pool tracks no instances at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Available instances, next to be handed out first.
    pub fn available(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.available.iter().copied()
    }

    /// Busy instances, in checkout order.
    #[must_use]
    pub fn busy(&self) -> &[InstanceId] {
        &self.busy
    }

    /// Running counters.
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Discards the pool, yielding every tracked instance for disposal.
    #[must_use]
    pub fn into_instances(self) -> Vec<F::Instance> {
        self.slots.into_iter().filter_map(|slot| slot.value).collect()
    }

    /// Builds one instance and appends it to the available set.
    fn grow(&mut self) -> Result<InstanceId, F::Error> {
        let value = self.factory.create()?;
        let id = self.insert(value);
        self.available.push_back(id);
        self.stats.created += 1;
        tracing::debug!(
            pool = %self.name,
            ?id,
            tracked = self.len(),
            "constructed pooled instance"
        );
        Ok(id)
    }

    /// Stores a value, reusing a vacated slot when there is one.
    fn insert(&mut self, value: F::Instance) -> InstanceId {
        if let Some(index) = self.vacant.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            return InstanceId::new(self.id, index, slot.generation);
        }

        #[allow(clippy::cast_possible_truncation)]
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            value: Some(value),
            generation: 0,
        });
        InstanceId::new(self.id, index, 0)
    }
}

impl<F> InstancePool<F>
where
    F: InstanceFactory<Error = Infallible>,
{
    /// Checks out the longest-available instance, constructing exactly one
    /// new instance first if none is available.
    pub fn get(&mut self) -> InstanceId {
        match self.try_get() {
            Ok(id) => id,
            Err(never) => match never {},
        }
    }
}

impl<T: Default> Default for InstancePool<DefaultFactory<T>> {
    fn default() -> Self {
        Self::new(DefaultFactory::new())
    }
}

impl<T: Clone> InstancePool<PrefabFactory<T>> {
    /// Creates a pool cloning `template` on every miss.
    #[must_use]
    pub fn from_prefab(template: T) -> Self {
        Self::new(PrefabFactory::new(template))
    }
}

impl<H: ObjectHost> InstancePool<ComponentFactory<H>> {
    /// Creates a pool spawning a fresh host object on every miss.
    #[must_use]
    pub fn from_host(host: H) -> Self {
        Self::new(ComponentFactory::new(host))
    }
}

impl<F: InstanceFactory> fmt::Debug for InstancePool<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstancePool")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("available", &self.available)
            .field("busy", &self.busy)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
