use alloc::{boxed::Box, string::String};

use super::inject::InjectErrorKind;

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("Binding for \"{name}\" not found")]
    NoBinding { name: String },
    #[error("Binding for type {type_name} not found")]
    NoTypeBinding { type_name: &'static str },
    #[error("Binding \"{name}\" has neither a value nor a factory")]
    NoFactory { name: String },
    #[error("Resolution of \"{name}\" depends on itself")]
    CyclicDependency { name: String },
    #[error(transparent)]
    Inject(Box<InjectErrorKind>),
}
