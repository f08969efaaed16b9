use alloc::string::String;

#[derive(thiserror::Error, Debug)]
pub enum BindErrorKind {
    #[error("Binding for \"{name}\" already exists")]
    DuplicateBinding { name: String },
}
