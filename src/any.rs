use alloc::{boxed::Box, sync::Arc};
use core::any::Any;

/// Shared handle to a resolved dependency.
pub type Instance = Arc<dyn Any + Send + Sync>;

pub(crate) type BoxedInstance = Box<dyn Any + Send + Sync>;
