use thiserror::Error;

/// Errors raised while constructing hash values, hashers and registries.
///
/// Hashing itself is total over finite inputs and never raises; every
/// variant here is a synchronous construction- or lookup-time failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed arguments to a [`HashValue`](crate::HashValue) constructor:
    /// an empty byte sequence, or a bit width of zero or above 64.
    #[error("invalid hash value input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// A registry lookup used a name with no binding. Usually a typo'd
    /// algorithm name in configuration.
    #[error("unknown hash algorithm {name:?}")]
    UnknownAlgorithm {
        /// The name that was looked up.
        name: String,
    },

    /// The digest provider table cannot supply the requested primitive.
    /// Raised when constructing a [`NativeHasher`](crate::NativeHasher),
    /// never on a hash call.
    #[error("no digest provider for algorithm {name:?}")]
    UnsupportedAlgorithm {
        /// The algorithm name the provider table does not know.
        name: String,
    },

    /// A registry table was put into an illegal state, such as binding the
    /// same algorithm name twice.
    #[error("illegal registry state: {reason}")]
    IllegalState {
        /// Description of the violated constraint.
        reason: String,
    },
}
