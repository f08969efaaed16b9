use alloc::boxed::Box;

use crate::any::BoxedInstance;

/// Zero-argument producer backing a factory binding.
///
/// Blanket implemented for any `Fn() -> T` closure, so callers pass plain
/// closures (or `T::default`) to [`crate::Injector::bind`].
pub trait Factory: Send + Sync + 'static {
    type Provides: Send + Sync + 'static;

    fn produce(&self) -> Self::Provides;
}

impl<F, Dep> Factory for F
where
    F: Fn() -> Dep + Send + Sync + 'static,
    Dep: Send + Sync + 'static,
{
    type Provides = Dep;

    #[inline]
    fn produce(&self) -> Self::Provides {
        self()
    }
}

pub(crate) type BoxedFactory = Box<dyn Fn() -> BoxedInstance + Send + Sync>;

#[must_use]
pub(crate) fn boxed_factory<F: Factory>(factory: F) -> BoxedFactory {
    Box::new(move || Box::new(factory.produce()) as _)
}
