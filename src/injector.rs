use alloc::{
    boxed::Box,
    collections::{btree_map::Entry, BTreeMap},
    string::String,
    sync::Arc,
    vec::Vec,
};
use core::any::{type_name, Any, TypeId};
use tracing::{debug, debug_span, error, warn};

use crate::{
    any::Instance,
    binding::Binding,
    errors::{BindErrorKind, InjectErrorKind, ResolveErrorKind},
    factory::{boxed_factory, Factory},
    injectable::{setter_for, Injectable},
};

/// The registry and resolver owning all [`Binding`]s.
///
/// Registration takes `&mut self` and resolution takes `&self`; the only
/// interior mutability is the per-binding once-cache behind a mutex, so a
/// configured injector can be shared across threads for resolution.
pub struct Injector {
    bindings: BTreeMap<String, Binding>,
    type_to_binding_name: BTreeMap<TypeId, String>,
}

impl Injector {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bindings: BTreeMap::new(),
            type_to_binding_name: BTreeMap::new(),
        }
    }

    /// Registers a factory binding.
    ///
    /// Returns the created binding for chaining
    /// [`Binding::with_dependencies`] and [`Binding::create_once`].
    ///
    /// # Errors
    /// [`BindErrorKind::DuplicateBinding`] if `name` is already registered;
    /// the original binding stays intact.
    pub fn bind<F>(&mut self, name: impl Into<String>, factory: F) -> Result<&mut Binding, BindErrorKind>
    where
        F: Factory,
    {
        self.insert(Binding::factory_backed(name.into(), boxed_factory(factory), None))
    }

    /// Registers a type binding: the factory is `T::default` and the type is
    /// recorded for [`Self::resolve_type`] and [`Self::inject`] lookups.
    ///
    /// When the same type is bound under several names, the mapping keeps
    /// only the most recent name.
    ///
    /// # Errors
    /// [`BindErrorKind::DuplicateBinding`] if `name` is already registered;
    /// neither mapping is touched.
    pub fn bind_type<T>(&mut self, name: impl Into<String>) -> Result<&mut Binding, BindErrorKind>
    where
        T: Injectable + Default,
    {
        let name = name.into();
        if self.bindings.contains_key(&name) {
            let err = BindErrorKind::DuplicateBinding { name };
            warn!("{}", err);
            return Err(err);
        }

        self.type_to_binding_name.insert(TypeId::of::<T>(), name.clone());
        self.insert(Binding::factory_backed(name, boxed_factory(T::default), Some(setter_for::<T>())))
    }

    /// Registers a constant binding resolved to `value` on every call.
    ///
    /// Injection never runs for constant bindings.
    ///
    /// # Errors
    /// [`BindErrorKind::DuplicateBinding`] if `name` is already registered.
    pub fn bind_value<T>(&mut self, name: impl Into<String>, value: T) -> Result<(), BindErrorKind>
    where
        T: Send + Sync + 'static,
    {
        self.insert(Binding::value_backed(name.into(), Arc::new(value))).map(|_| ())
    }

    /// Removes a binding by name. No-op when absent.
    ///
    /// Entries in the reverse type mapping pointing at the removed binding
    /// are left stale; [`Self::resolve_type`] then reports the removed name
    /// as missing.
    pub fn unbind(&mut self, name: &str) {
        self.bindings.remove(name);
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    #[must_use]
    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Resolves a binding by name.
    ///
    /// # Errors
    /// [`ResolveErrorKind::NoBinding`] if `name` isn't registered, or any
    /// failure of the resolution algorithm.
    pub fn resolve(&self, name: &str) -> Result<Instance, ResolveErrorKind> {
        self.resolve_named(name, &mut Vec::new())
    }

    /// Resolves a binding by its registered type.
    ///
    /// # Errors
    /// [`ResolveErrorKind::NoTypeBinding`] if the type was never bound, or
    /// any failure of the resolution algorithm.
    pub fn resolve_type<T: 'static>(&self) -> Result<Instance, ResolveErrorKind> {
        let Some(name) = self.type_to_binding_name.get(&TypeId::of::<T>()) else {
            let err = ResolveErrorKind::NoTypeBinding {
                type_name: type_name::<T>(),
            };
            warn!("{}", err);
            return Err(err);
        };
        self.resolve_named(name, &mut Vec::new())
    }

    /// Resolves a binding handle directly.
    ///
    /// # Errors
    /// Any failure of the resolution algorithm.
    pub fn resolve_binding(&self, binding: &Binding) -> Result<Instance, ResolveErrorKind> {
        self.resolve_inner(binding, &mut Vec::new())
    }

    /// Injects dependencies into an already-constructed object, recovering
    /// its binding by type.
    ///
    /// # Errors
    /// [`InjectErrorKind::NoBindingForObject`] if no binding is registered
    /// for `T`, or any injection failure.
    pub fn inject<T>(&self, object: &mut T) -> Result<(), InjectErrorKind>
    where
        T: Send + Sync + 'static,
    {
        let Some(binding) = self.binding_for_type(&TypeId::of::<T>()) else {
            let err = InjectErrorKind::NoBindingForObject {
                type_name: type_name::<T>(),
            };
            warn!("{}", err);
            return Err(err);
        };
        self.inject_inner(object, binding, &mut Vec::new())
    }

    /// Injects dependencies into an object using an explicit binding.
    ///
    /// # Errors
    /// Any injection failure.
    pub fn inject_with(&self, object: &mut (dyn Any + Send + Sync), binding: &Binding) -> Result<(), InjectErrorKind> {
        self.inject_inner(object, binding, &mut Vec::new())
    }
}

impl Injector {
    fn insert(&mut self, binding: Binding) -> Result<&mut Binding, BindErrorKind> {
        match self.bindings.entry(binding.name.clone()) {
            Entry::Occupied(entry) => {
                let err = BindErrorKind::DuplicateBinding { name: entry.key().clone() };
                warn!("{}", err);
                Err(err)
            }
            Entry::Vacant(entry) => {
                debug!(name = entry.key().as_str(), "Bound");
                Ok(entry.insert(binding))
            }
        }
    }

    fn binding_for_type(&self, type_id: &TypeId) -> Option<&Binding> {
        self.bindings.get(self.type_to_binding_name.get(type_id)?)
    }

    fn resolve_named(&self, name: &str, stack: &mut Vec<String>) -> Result<Instance, ResolveErrorKind> {
        let Some(binding) = self.bindings.get(name) else {
            let err = ResolveErrorKind::NoBinding { name: String::from(name) };
            warn!("{}", err);
            return Err(err);
        };
        self.resolve_inner(binding, stack)
    }

    fn resolve_inner(&self, binding: &Binding, stack: &mut Vec<String>) -> Result<Instance, ResolveErrorKind> {
        let span = debug_span!("resolve", binding = binding.name.as_str());
        let _guard = span.enter();

        if let Some(value) = binding.cached() {
            debug!("Found value");
            return Ok(value);
        }

        if stack.iter().any(|name| *name == binding.name) {
            let err = ResolveErrorKind::CyclicDependency { name: binding.name.clone() };
            error!("{}", err);
            return Err(err);
        }

        let Some(factory) = binding.factory.as_ref() else {
            let err = ResolveErrorKind::NoFactory { name: binding.name.clone() };
            error!("{}", err);
            return Err(err);
        };

        let mut object = factory();

        stack.push(binding.name.clone());
        let injected = self.inject_inner(&mut *object, binding, stack);
        stack.pop();
        if let Err(err) = injected {
            return Err(ResolveErrorKind::Inject(Box::new(err)));
        }

        let instance: Instance = Arc::from(object);
        if binding.once {
            debug!("Cached");
            return Ok(binding.cache(instance));
        }

        debug!("Resolved");
        Ok(instance)
    }

    fn inject_inner(
        &self,
        object: &mut (dyn Any + Send + Sync),
        binding: &Binding,
        stack: &mut Vec<String>,
    ) -> Result<(), InjectErrorKind> {
        if binding.dependencies.is_empty() {
            return Ok(());
        }

        let Some(setter) = binding.setter.as_ref() else {
            let err = InjectErrorKind::NotInjectable { name: binding.name.clone() };
            warn!("{}", err);
            return Err(err);
        };

        for (dependency_name, property_key) in &binding.dependencies {
            let dependency = match self.resolve_named(dependency_name, stack) {
                Ok(dependency) => dependency,
                Err(err) => return Err(InjectErrorKind::Resolve(Box::new(err))),
            };

            if !setter(object, property_key, dependency) {
                let err = InjectErrorKind::NoProperty {
                    name: binding.name.clone(),
                    key: property_key.clone(),
                };
                warn!("{}", err);
                return Err(err);
            }

            debug!(property = property_key.as_str(), "Injected");
        }

        Ok(())
    }
}

impl Default for Injector {
    fn default() -> Self {
        Self::new()
    }
}
