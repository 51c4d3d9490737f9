//! # Factory Strategies
//!
//! A pool never constructs instances itself. It asks an [`InstanceFactory`]
//! for exactly one new instance whenever demand exceeds supply.
//!
//! Three interchangeable strategies cover the usual cases:
//!
//! | Strategy             | New instance is...                                 |
//! |----------------------|----------------------------------------------------|
//! | [`DefaultFactory`]   | `T::default()`                                     |
//! | [`ComponentFactory`] | a component attached to a freshly spawned object   |
//! | [`PrefabFactory`]    | a clone of a designated template                   |
//!
//! Closures plug in through [`from_fn`] and [`try_from_fn`].

use std::any::type_name;
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

/// Capability that produces a new, uniquely identifiable instance on demand.
pub trait InstanceFactory {
    /// The pooled type.
    type Instance;
    /// Construction failure. Use [`Infallible`] when creation cannot fail.
    type Error;

    /// Constructs one new instance.
    ///
    /// # Errors
    ///
    /// Whatever the underlying constructor reports. Pools return it to
    /// their caller unchanged.
    fn create(&mut self) -> Result<Self::Instance, Self::Error>;
}

// =============================================================================
// DEFAULT VALUES
// =============================================================================

/// Builds plain values through [`Default`].
pub struct DefaultFactory<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> DefaultFactory<T> {
    /// Creates the factory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for DefaultFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DefaultFactory<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DefaultFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DefaultFactory<{}>", type_name::<T>())
    }
}

impl<T: Default> InstanceFactory for DefaultFactory<T> {
    type Instance = T;
    type Error = Infallible;

    #[inline]
    fn create(&mut self) -> Result<T, Infallible> {
        Ok(T::default())
    }
}

// =============================================================================
// COMPONENTS ON HOST OBJECTS
// =============================================================================

/// The host runtime's object model, as seen by a [`ComponentFactory`].
///
/// A host spawns a fresh object with the given name, attaches a new
/// component to it and hands the component back. Destroying the object
/// later is up to whoever evicts the component from its pool.
pub trait ObjectHost {
    /// Component handed out by the host.
    type Component;
    /// Spawn failure.
    type Error;

    /// Spawns an object called `name` carrying a new component.
    ///
    /// # Errors
    ///
    /// Returns the host's error when the object cannot be spawned.
    fn spawn_component(&mut self, name: &str) -> Result<Self::Component, Self::Error>;
}

/// Builds components, each backed by its own freshly spawned host object.
///
/// Objects are named after the component type unless
/// [`with_object_name`](Self::with_object_name) says otherwise.
#[derive(Debug)]
pub struct ComponentFactory<H> {
    host: H,
    object_name: String,
}

impl<H: ObjectHost> ComponentFactory<H> {
    /// Creates a factory spawning through `host`.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self {
            host,
            object_name: type_name::<H::Component>().to_owned(),
        }
    }

    /// Overrides the name given to spawned objects.
    #[must_use]
    pub fn with_object_name(mut self, name: impl Into<String>) -> Self {
        self.object_name = name.into();
        self
    }

    /// Name given to spawned objects.
    #[must_use]
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// The host this factory spawns through.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to destroy evicted objects.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: ObjectHost> InstanceFactory for ComponentFactory<H> {
    type Instance = H::Component;
    type Error = H::Error;

    fn create(&mut self) -> Result<H::Component, H::Error> {
        self.host.spawn_component(&self.object_name)
    }
}

// =============================================================================
// PREFAB CLONES
// =============================================================================

/// Builds instances by cloning a designated template.
#[derive(Clone, Debug)]
pub struct PrefabFactory<T> {
    template: T,
}

impl<T: Clone> PrefabFactory<T> {
    /// Creates a factory cloning `template`.
    #[must_use]
    pub const fn new(template: T) -> Self {
        Self { template }
    }

    /// The template every new instance is cloned from.
    #[must_use]
    pub const fn template(&self) -> &T {
        &self.template
    }

    /// Replaces the template. Instances already built are unaffected.
    pub fn set_template(&mut self, template: T) -> T {
        std::mem::replace(&mut self.template, template)
    }
}

impl<T: Clone> InstanceFactory for PrefabFactory<T> {
    type Instance = T;
    type Error = Infallible;

    #[inline]
    fn create(&mut self) -> Result<T, Infallible> {
        Ok(self.template.clone())
    }
}

// =============================================================================
// CLOSURES
// =============================================================================

/// Factory backed by an infallible closure. See [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

/// Factory backed by a fallible closure. See [`try_from_fn`].
#[derive(Clone)]
pub struct TryFromFn<F>(F);

/// Wraps a closure returning a new instance on every call.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> T,
{
    FromFn(f)
}

/// Wraps a closure that may fail to construct an instance.
pub fn try_from_fn<T, E, F>(f: F) -> TryFromFn<F>
where
    F: FnMut() -> Result<T, E>,
{
    TryFromFn(f)
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn")
    }
}

impl<F> fmt::Debug for TryFromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TryFromFn")
    }
}

impl<T, F> InstanceFactory for FromFn<F>
where
    F: FnMut() -> T,
{
    type Instance = T;
    type Error = Infallible;

    #[inline]
    fn create(&mut self) -> Result<T, Infallible> {
        Ok((self.0)())
    }
}

impl<T, E, F> InstanceFactory for TryFromFn<F>
where
    F: FnMut() -> Result<T, E>,
{
    type Instance = T;
    type Error = E;

    #[inline]
    fn create(&mut self) -> Result<T, E> {
        (self.0)()
    }
}
