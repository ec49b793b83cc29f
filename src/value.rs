use byteorder::{ByteOrder, LittleEndian};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher as StdHasher};

use crate::error::Error;

/// An immutable hash code with a fixed bit width.
///
/// A `HashValue` is either packed into a machine word (up to 64 bits, the
/// width need not be a multiple of 8) or stored as the raw digest byte
/// sequence. Both layouts share one contract: `to_bytes` serializes the low
/// `⌈width/8⌉` bytes least-significant-byte first, and equality, ordering
/// and hashing are defined over that serialized form, so values of
/// different layouts compare as their bytes do.
#[derive(Clone)]
pub struct HashValue {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    /// Low `width` bits of `bits` are significant; the rest are zeroed at
    /// construction.
    Packed { bits: u64, width: u32 },
    /// Digest bytes stored verbatim; width is 8 times the length.
    Bytes(Box<[u8]>),
}

impl HashValue {
    /// Creates a hash value from a raw byte sequence, preserving the bytes
    /// verbatim. The bit width is eight times the sequence length.
    ///
    /// Returns [`Error::InvalidInput`] if `bytes` is empty.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<HashValue, Error> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(Error::InvalidInput {
                reason: "byte sequence is empty".to_string(),
            });
        }
        Ok(HashValue {
            repr: Repr::Bytes(bytes.into_boxed_slice()),
        })
    }

    /// Creates a packed hash value from the low `bit_width` bits of `value`.
    ///
    /// Returns [`Error::InvalidInput`] unless `0 < bit_width <= 64`. Bits of
    /// `value` above the declared width are discarded.
    pub fn from_u64(value: u64, bit_width: u32) -> Result<HashValue, Error> {
        if bit_width == 0 || bit_width > 64 {
            return Err(Error::InvalidInput {
                reason: format!("bit width {bit_width} is outside (0, 64]"),
            });
        }
        Ok(HashValue {
            repr: Repr::Packed {
                bits: value & (u64::MAX >> (64 - bit_width)),
                width: bit_width,
            },
        })
    }

    /// Packs a full 64-bit hash. Infallible form of `from_u64(value, 64)`.
    pub(crate) fn packed64(value: u64) -> HashValue {
        HashValue {
            repr: Repr::Packed {
                bits: value,
                width: 64,
            },
        }
    }

    /// Wraps finalized digest output. Digest primitives never produce an
    /// empty output block.
    pub(crate) fn from_digest(digest: Box<[u8]>) -> HashValue {
        debug_assert!(!digest.is_empty());
        HashValue {
            repr: Repr::Bytes(digest),
        }
    }

    /// The bit width fixed at construction.
    pub fn bit_width(&self) -> u32 {
        match self.repr {
            Repr::Packed { width, .. } => width,
            Repr::Bytes(ref bytes) => 8 * bytes.len() as u32,
        }
    }

    /// Serializes the value to `⌈bit_width/8⌉` bytes.
    ///
    /// Packed values are written little-endian, least-significant byte
    /// first; byte-sequence values come back exactly as supplied.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.repr {
            Repr::Packed { bits, width } => {
                let mut buf = [0u8; 8];
                LittleEndian::write_u64(&mut buf, bits);
                buf[..width.div_ceil(8) as usize].to_vec()
            }
            Repr::Bytes(ref bytes) => bytes.to_vec(),
        }
    }

    /// Lowercase hexadecimal encoding of [`to_bytes`](Self::to_bytes),
    /// two digits per byte, no separators or prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// A 32-bit hash of this hash code, for use as a map key.
    ///
    /// Reads the first four serialized bytes little-endian; values shorter
    /// than four bytes combine the bytes they have the same way.
    pub fn hash_of_hash(&self) -> u32 {
        let bytes = self.to_bytes();
        if bytes.len() >= 4 {
            LittleEndian::read_u32(&bytes)
        } else {
            bytes
                .iter()
                .enumerate()
                .fold(0u32, |acc, (i, b)| acc | (u32::from(*b) << (8 * i)))
        }
    }
}

impl PartialEq for HashValue {
    fn eq(&self, other: &Self) -> bool {
        self.bit_width() == other.bit_width() && self.to_bytes() == other.to_bytes()
    }
}

impl Eq for HashValue {}

impl Hash for HashValue {
    fn hash<H: StdHasher>(&self, state: &mut H) {
        state.write_u32(self.hash_of_hash());
    }
}

impl Ord for HashValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_bytes()
            .cmp(&other.to_bytes())
            .then_with(|| self.bit_width().cmp(&other.bit_width()))
    }
}

impl PartialOrd for HashValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashValue({}/{})", self.to_hex(), self.bit_width())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn raw_bytes_round_trip() {
        let value = HashValue::from_bytes(b"HashCode0".to_vec()).unwrap();
        assert_eq!(value.bit_width(), 72);
        assert_eq!(value.to_bytes(), b"HashCode0");
        assert_eq!(value.to_hex(), "48617368436f646530");
    }

    #[test]
    fn empty_bytes_are_rejected() {
        match HashValue::from_bytes(Vec::new()) {
            Err(Error::InvalidInput { .. }) => {}
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn zero_and_oversized_widths_are_rejected() {
        for width in [0, 65, 128] {
            match HashValue::from_u64(1, width) {
                Err(Error::InvalidInput { .. }) => {}
                other => panic!("expected InvalidInput for width {width}, got {other:?}"),
            }
        }
    }

    #[test]
    fn packed_serialization_is_little_endian() {
        let value = HashValue::from_u64(0x0807060504030201, 64).unwrap();
        assert_eq!(value.to_bytes(), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(value.to_hex(), "0102030405060708");
    }

    #[test]
    fn bits_above_the_declared_width_are_not_observable() {
        let narrow = HashValue::from_u64(0xffff, 8).unwrap();
        assert_eq!(narrow.to_bytes(), [0xff]);
        assert_eq!(narrow, HashValue::from_u64(0xff, 8).unwrap());

        // 12-bit width still serializes to two bytes, high nibble masked.
        let value = HashValue::from_u64(0xffff, 12).unwrap();
        assert_eq!(value.to_bytes(), [0xff, 0x0f]);
    }

    #[test]
    fn equality_crosses_representations() {
        let packed = HashValue::from_u64(0x0807060504030201, 64).unwrap();
        let bytes = HashValue::from_bytes(vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(packed, bytes);
        assert_eq!(packed.hash_of_hash(), bytes.hash_of_hash());
        assert_eq!(packed.cmp(&bytes), std::cmp::Ordering::Equal);
    }

    #[test]
    fn same_bytes_different_width_are_unequal() {
        let wide = HashValue::from_u64(0x01, 16).unwrap();
        let narrow = HashValue::from_u64(0x01, 9).unwrap();
        assert_eq!(wide.to_bytes(), narrow.to_bytes());
        assert_ne!(wide, narrow);
    }

    #[test]
    fn hash_of_hash_reads_four_bytes_little_endian() {
        let value = HashValue::from_bytes(vec![0x11, 0x22, 0x33, 0x44, 0x55]).unwrap();
        assert_eq!(value.hash_of_hash(), 0x4433_2211);
    }

    #[test]
    fn hash_of_hash_combines_short_values() {
        let value = HashValue::from_u64(0xabcd, 16).unwrap();
        assert_eq!(value.to_bytes(), [0xcd, 0xab]);
        assert_eq!(value.hash_of_hash(), 0xabcd);
    }

    #[test]
    fn display_renders_hex() {
        let value = HashValue::from_bytes(b"HashCode0".to_vec()).unwrap();
        assert_eq!(value.to_string(), value.to_hex());
    }

    proptest! {
        #[test]
        fn bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
            let value = HashValue::from_bytes(bytes.clone()).unwrap();
            prop_assert_eq!(value.to_bytes(), bytes);
        }

        #[test]
        fn hex_is_two_digits_per_byte(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
            let value = HashValue::from_bytes(bytes).unwrap();
            prop_assert_eq!(value.to_hex().len(), 2 * value.to_bytes().len());
        }

        #[test]
        fn packed_equality_follows_the_low_bits(v in any::<u64>(), w in any::<u64>(), width in 1u32..=64) {
            let mask = u64::MAX >> (64 - width);
            let left = HashValue::from_u64(v, width).unwrap();
            let right = HashValue::from_u64(w, width).unwrap();
            prop_assert_eq!(left == right, v & mask == w & mask);
        }
    }
}
