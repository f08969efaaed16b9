use alloc::sync::Arc;
use core::any::Any;

use crate::any::Instance;

/// Settable-by-string-key capability a binding target opts into.
///
/// Property injection assigns resolved dependencies onto a freshly built
/// instance by property key; a type routes those keys to its own fields here.
/// Returning `false` rejects an unknown key and fails injection with
/// [`crate::InjectErrorKind::NoProperty`].
pub trait Injectable: Send + Sync + 'static {
    fn set(&mut self, key: &str, dependency: Instance) -> bool;
}

/// Downcast-and-set hook captured per concrete type at bind time.
pub(crate) type Setter = Arc<dyn Fn(&mut (dyn Any + Send + Sync), &str, Instance) -> bool + Send + Sync>;

#[must_use]
pub(crate) fn setter_for<T: Injectable>() -> Setter {
    Arc::new(|object, key, dependency| {
        object
            .downcast_mut::<T>()
            .is_some_and(|target| target.set(key, dependency))
    })
}
