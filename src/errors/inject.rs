use alloc::{boxed::Box, string::String};

use super::resolve::ResolveErrorKind;

#[derive(thiserror::Error, Debug)]
pub enum InjectErrorKind {
    #[error("No binding found for object of type {type_name}")]
    NoBindingForObject { type_name: &'static str },
    #[error("Binding \"{name}\" declares dependencies, but its target is not injectable")]
    NotInjectable { name: String },
    #[error("Target of binding \"{name}\" has no property \"{key}\"")]
    NoProperty { name: String, key: String },
    #[error(transparent)]
    Resolve(Box<ResolveErrorKind>),
}
