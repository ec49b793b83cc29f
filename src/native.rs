use digest::DynDigest;
use md5::Md5;
use sha1::Sha1;
use sha2::Sha256;
use tracing::debug;

use crate::error::Error;
use crate::hasher::Hasher;
use crate::value::HashValue;

/// Produces a fresh digest context for one computation.
type DigestFactory = fn() -> Box<dyn DynDigest>;

/// A [`Hasher`] backed by a message-digest primitive, looked up by its
/// textual algorithm name ("MD5", "SHA-1", "SHA-256").
///
/// The primitive is resolved once, at construction; an unrecognized name is
/// reported there as [`Error::UnsupportedAlgorithm`] rather than on first
/// use. Digest contexts are not safe for concurrent use, so every call to
/// [`hash`](Hasher::hash) runs in a context of its own; the `NativeHasher`
/// itself can be shared freely.
pub struct NativeHasher {
    algorithm: String,
    new_context: DigestFactory,
}

impl NativeHasher {
    /// Resolves `algorithm` against the digest provider table.
    ///
    /// Returns [`Error::UnsupportedAlgorithm`] when no provider supplies
    /// the named primitive.
    pub fn new(algorithm: &str) -> Result<NativeHasher, Error> {
        let new_context = match algorithm {
            "MD5" => md5_context as DigestFactory,
            "SHA-1" => sha1_context,
            "SHA-256" => sha256_context,
            other => {
                debug!(algorithm = other, "no digest provider for algorithm");
                return Err(Error::UnsupportedAlgorithm {
                    name: other.to_string(),
                });
            }
        };
        Ok(NativeHasher {
            algorithm: algorithm.to_string(),
            new_context,
        })
    }
}

fn md5_context() -> Box<dyn DynDigest> {
    Box::<Md5>::default()
}

fn sha1_context() -> Box<dyn DynDigest> {
    Box::<Sha1>::default()
}

fn sha256_context() -> Box<dyn DynDigest> {
    Box::<Sha256>::default()
}

impl Hasher for NativeHasher {
    fn hash(&self, data: &[u8]) -> HashValue {
        let mut context = (self.new_context)();
        context.update(data);
        HashValue::from_digest(context.finalize())
    }

    fn algorithm(&self) -> &str {
        &self.algorithm
    }
}
