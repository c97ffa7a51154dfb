use thiserror::Error;

/// Errors emitted while generating entity classes.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("core error: {0}")]
    Core(#[from] entigen_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Two tables would be written to the same class file.
    #[error("tables {first} and {second} both map to class {class_name}")]
    ClassNameCollision {
        class_name: String,
        first: String,
        second: String,
    },
    #[error("invalid class name {0:?}")]
    InvalidClassName(String),
}
