/// Errors surfaced by [`crate::FlashService`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlashError {
    /// No extension is registered under the requested name.
    #[error("unknown operation '{name}'")]
    UnknownOperation { name: String },
}

pub type FlashResult<T> = Result<T, FlashError>;
