//! Fixed 6-byte packing of 8 dictionary indices.
//!
//! A cipher-suite name is at most 8 fragments, each addressed by a 6-bit
//! dictionary index, so a whole name fits in 48 bits. The bits are laid
//! out as two independent groups: fragments 0-3 in bytes 0-2 and
//! fragments 4-7 in bytes 3-5, each group placing four 6-bit fields into
//! three bytes big-endian. Fields 3 and 4 are therefore not bit-adjacent.

/// A cipher-suite name packed into 6 bytes of 6-bit dictionary indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedName([u8; 6]);

/// Pack four 6-bit indices into three bytes.
const fn pack_quad(a: u8, b: u8, c: u8, d: u8) -> [u8; 3] {
    [
        (a & 0x3F) << 2 | (b & 0x3F) >> 4,
        (b & 0x0F) << 4 | (c & 0x3F) >> 2,
        (c & 0x03) << 6 | (d & 0x3F),
    ]
}

/// Recover four 6-bit indices from three bytes.
const fn unpack_quad(bytes: [u8; 3]) -> [u8; 4] {
    [
        bytes[0] >> 2,
        (bytes[0] & 0x03) << 4 | bytes[1] >> 4,
        (bytes[1] & 0x0F) << 2 | bytes[2] >> 6,
        bytes[2] & 0x3F,
    ]
}

impl PackedName {
    /// Pack 8 dictionary indices. Indices are masked to 6 bits; unused
    /// trailing slots must already be 0.
    pub const fn from_indices(idx: [u8; 8]) -> Self {
        let lo = pack_quad(idx[0], idx[1], idx[2], idx[3]);
        let hi = pack_quad(idx[4], idx[5], idx[6], idx[7]);
        Self([lo[0], lo[1], lo[2], hi[0], hi[1], hi[2]])
    }

    /// Recover the 8 dictionary indices.
    pub const fn indices(&self) -> [u8; 8] {
        let lo = unpack_quad([self.0[0], self.0[1], self.0[2]]);
        let hi = unpack_quad([self.0[3], self.0[4], self.0[5]]);
        [lo[0], lo[1], lo[2], lo[3], hi[0], hi[1], hi[2], hi[3]]
    }

    /// Index of the first fragment, which decides the separator style.
    pub const fn first_index(&self) -> u8 {
        self.0[0] >> 2
    }

    /// Raw packed bytes.
    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bit_layout() {
        // 8 distinct indices with recognizable bit patterns.
        let packed = PackedName::from_indices([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            packed.as_bytes(),
            &[
                0b000001_00, 0b0010_0000, 0b11_000100,
                0b000101_00, 0b0110_0001, 0b11_001000,
            ]
        );
    }

    #[test]
    fn test_all_ones() {
        let packed = PackedName::from_indices([0x3F; 8]);
        assert_eq!(packed.as_bytes(), &[0xFF; 6]);
        assert_eq!(packed.indices(), [0x3F; 8]);
    }

    #[test]
    fn test_round_trip() {
        let idx = [1, 26, 2, 7, 3, 10, 27, 0];
        assert_eq!(PackedName::from_indices(idx).indices(), idx);
    }

    #[test]
    fn test_first_index() {
        assert_eq!(PackedName::from_indices([1, 0, 0, 0, 0, 0, 0, 0]).first_index(), 1);
        assert_eq!(PackedName::from_indices([8, 27, 0, 0, 0, 0, 0, 0]).first_index(), 8);
    }

    #[test]
    fn test_groups_are_independent() {
        // Fields 0-3 and 4-7 pack into disjoint byte ranges.
        let lo = PackedName::from_indices([9, 9, 9, 9, 0, 0, 0, 0]);
        let hi = PackedName::from_indices([0, 0, 0, 0, 9, 9, 9, 9]);
        assert_eq!(&lo.as_bytes()[3..], &[0, 0, 0]);
        assert_eq!(&hi.as_bytes()[..3], &[0, 0, 0]);
        assert_eq!(&lo.as_bytes()[..3], &hi.as_bytes()[3..]);
    }

    proptest! {
        #[test]
        fn prop_round_trip(idx in prop::array::uniform8(0u8..64)) {
            prop_assert_eq!(PackedName::from_indices(idx).indices(), idx);
        }
    }
}
