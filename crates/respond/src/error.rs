use thiserror::Error;

/// Errors a policy can produce while resolving a concrete media item.
///
/// All of these are recovered per channel inside the engine; they surface
/// only as log warnings, never to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The resolved collection holds no items at all.
    #[error("collection '{collection}' has no items")]
    ResourceUnavailable {
        /// Name of the empty (or absent) collection.
        collection: String,
    },
    /// A named file is not present in the active collection.
    #[error("no file named '{name}' in collection '{collection}'")]
    ResourceNotFound {
        /// The requested file name.
        name: String,
        /// The collection that was searched.
        collection: String,
    },
    /// The font policy was invoked on an event with no produced character.
    ///
    /// Callers treat this as "no image this event", not a fatal error.
    #[error("event produced no character to render")]
    NoCharacter,
}
