use alloc::{
    collections::BTreeMap,
    string::{String, ToString as _},
};
use parking_lot::Mutex;

use crate::{any::Instance, factory::BoxedFactory, injectable::Setter};

/// Defines one named dependency and how it should be produced.
///
/// A binding is either value-backed (constant, created with its value set) or
/// factory-backed. It holds no resolution logic; resolution semantics live in
/// [`crate::Injector`].
pub struct Binding {
    pub(crate) name: String,
    pub(crate) factory: Option<BoxedFactory>,
    pub(crate) setter: Option<Setter>,
    /// Dependency binding name -> property key on the target instance.
    pub(crate) dependencies: BTreeMap<String, String>,
    /// Constant payload, or the memoized result of a `once` binding.
    pub(crate) value: Mutex<Option<Instance>>,
    pub(crate) once: bool,
}

impl Binding {
    #[must_use]
    pub(crate) fn factory_backed(name: String, factory: BoxedFactory, setter: Option<Setter>) -> Self {
        Self {
            name,
            factory: Some(factory),
            setter,
            dependencies: BTreeMap::new(),
            value: Mutex::new(None),
            once: false,
        }
    }

    #[must_use]
    pub(crate) fn value_backed(name: String, value: Instance) -> Self {
        Self {
            name,
            factory: None,
            setter: None,
            dependencies: BTreeMap::new(),
            value: Mutex::new(Some(value)),
            once: false,
        }
    }

    /// Declares dependencies where binding name and property key are the same.
    ///
    /// Replaces any previously declared dependency map.
    pub fn with_dependencies<I>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.dependencies = names
            .into_iter()
            .map(|name| (name.as_ref().to_string(), name.as_ref().to_string()))
            .collect();
        self
    }

    /// Declares dependencies with explicit binding name -> property key renames.
    ///
    /// Replaces any previously declared dependency map.
    pub fn with_dependency_map<I, N, K>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (N, K)>,
        N: Into<String>,
        K: Into<String>,
    {
        self.dependencies = pairs.into_iter().map(|(name, key)| (name.into(), key.into())).collect();
        self
    }

    /// If `true`, the first resolved instance is cached and reused.
    pub fn create_once(&mut self, once: bool) -> &mut Self {
        self.once = once;
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub(crate) fn cached(&self) -> Option<Instance> {
        self.value.lock().clone()
    }

    /// Publishes the memoized value. First writer wins, so concurrent
    /// resolutions of the same `once` binding all observe one instance.
    #[must_use]
    pub(crate) fn cache(&self, instance: Instance) -> Instance {
        self.value.lock().get_or_insert(instance).clone()
    }
}

#[cfg(any(feature = "debug", test))]
impl core::fmt::Debug for Binding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Binding")
            .field("name", &self.name)
            .field("factory", &self.factory.is_some())
            .field("setter", &self.setter.is_some())
            .field("dependencies", &self.dependencies)
            .field("value", &self.value.lock().is_some())
            .field("once", &self.once)
            .finish()
    }
}
