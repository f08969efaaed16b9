mod bind;
mod inject;
mod resolve;

pub use bind::BindErrorKind;
pub use inject::InjectErrorKind;
pub use resolve::ResolveErrorKind;
