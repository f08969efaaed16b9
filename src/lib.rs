#![no_std]

extern crate alloc;

pub(crate) mod any;
pub(crate) mod binding;
pub(crate) mod errors;
pub(crate) mod factory;
pub(crate) mod injectable;
pub(crate) mod injector;

pub use any::Instance;
pub use binding::Binding;
pub use errors::{BindErrorKind, InjectErrorKind, ResolveErrorKind};
pub use factory::Factory;
pub use injectable::Injectable;
pub use injector::Injector;
