use crate::value::HashValue;

/// A stateless digest computation producing a [`HashValue`].
///
/// Implementations hold no mutable state, so one instance can be shared and
/// called from any number of threads. Hashing never fails for finite input,
/// and identical input always yields bit-identical output.
pub trait Hasher: Send + Sync {
    /// Computes the hash code of the given bytes.
    fn hash(&self, data: &[u8]) -> HashValue;

    /// Computes the hash code of the given text.
    ///
    /// The text is encoded as UTF-8 before hashing; the encoding is part of
    /// the reproducibility contract, so the same string hashes to the same
    /// bytes on every platform.
    fn hash_text(&self, text: &str) -> HashValue {
        self.hash(text.as_bytes())
    }

    /// The name of the algorithm this hasher computes.
    fn algorithm(&self) -> &str;
}

/// A [`Hasher`] over a bundled 64-bit non-cryptographic hash function,
/// producing packed 64-bit values.
pub(crate) struct Hash64 {
    algorithm: &'static str,
    func: fn(&[u8]) -> u64,
}

impl Hash64 {
    pub(crate) fn new(algorithm: &'static str, func: fn(&[u8]) -> u64) -> Hash64 {
        Hash64 { algorithm, func }
    }
}

impl Hasher for Hash64 {
    fn hash(&self, data: &[u8]) -> HashValue {
        HashValue::packed64((self.func)(data))
    }

    fn algorithm(&self) -> &str {
        self.algorithm
    }
}

/// MurmurHash3 x64: the low 64 bits of the 128-bit digest, seed 0.
pub(crate) fn murmur3_64(data: &[u8]) -> u64 {
    let wide = murmur3::murmur3_x64_128(&mut &data[..], 0)
        .expect("reading from an in-memory slice cannot fail");
    wide as u64
}

/// XXH64 with seed 0.
pub(crate) fn xx64(data: &[u8]) -> u64 {
    xxhash_rust::xxh64::xxh64(data, 0)
}

/// CityHash64.
pub(crate) fn city64(data: &[u8]) -> u64 {
    cityhasher::hash(data)
}

/// FarmHash NA, the stable 64-bit fingerprint form.
pub(crate) fn farm_na64(data: &[u8]) -> u64 {
    farmhash::fingerprint64(data)
}

/// FarmHash UO. Unseeded UO is defined upstream as Hash64WithSeeds(81, 0).
pub(crate) fn farm_uo64(data: &[u8]) -> u64 {
    farmhash::hash64_with_seeds(data, 81, 0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn packed_output_serializes_little_endian() {
        let hasher = Hash64::new("XX", xx64);
        let input = b"serialization check";
        let value = hasher.hash(input);
        assert_eq!(value.bit_width(), 64);
        assert_eq!(value.to_bytes(), xx64(input).to_le_bytes());
    }

    #[test]
    fn hash_text_encodes_utf8() {
        let hasher = Hash64::new("MURMUR3", murmur3_64);
        assert_eq!(hasher.hash_text("héllo"), hasher.hash("héllo".as_bytes()));
    }

    #[test]
    fn bundled_functions_are_deterministic() {
        let input = b"determinism check";
        let funcs: [fn(&[u8]) -> u64; 5] = [murmur3_64, xx64, city64, farm_na64, farm_uo64];
        for func in funcs {
            assert_eq!(func(input), func(input));
        }
    }

    #[test]
    fn xx64_matches_the_reference_empty_digest() {
        // Published XXH64 vector: empty input, seed 0.
        assert_eq!(xx64(b""), 0xef46_db37_51d8_e999);
    }

    #[test]
    fn farm_variants_differ() {
        let input = b"variant check";
        assert_ne!(farm_na64(input), farm_uo64(input));
    }
}
