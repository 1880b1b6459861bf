use crate::{Endpoints, Indices, BYTES_PER_BLOCK};

/// The unpacked contents of a single compressed BC4 block.
///
/// The packed 64-bit layout from least to most significant bit is
/// `e0` (8 bits), `e1` (8 bits), and then 16 indices (3 bits each) in row-major order.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bc4Block {
    pub endpoints: Endpoints,
    pub indices: Indices,
}

impl Bc4Block {
    pub fn pack(&self) -> u64 {
        let mut writer = BitWriter::default();
        writer.write_bits(self.endpoints.e0 as u64, 8);
        writer.write_bits(self.endpoints.e1 as u64, 8);
        for index in self.indices.0 {
            writer.write_bits(index as u64, 3);
        }
        writer.bits
    }

    pub fn unpack(bc4: u64) -> Self {
        let mut reader = BitReader { bits: bc4 };
        let e0 = reader.read_bits(8) as u8;
        let e1 = reader.read_bits(8) as u8;
        let indices = std::array::from_fn(|_| reader.read_bits(3) as u8);

        Self {
            endpoints: Endpoints { e0, e1 },
            indices: Indices(indices),
        }
    }

    /// The packed block in the byte order used for BCn data in files and GPU memory.
    pub fn to_le_bytes(&self) -> [u8; BYTES_PER_BLOCK] {
        self.pack().to_le_bytes()
    }

    pub fn from_le_bytes(bytes: [u8; BYTES_PER_BLOCK]) -> Self {
        Self::unpack(u64::from_le_bytes(bytes))
    }
}

impl From<u64> for Bc4Block {
    fn from(value: u64) -> Self {
        Self::unpack(value)
    }
}

impl From<Bc4Block> for u64 {
    fn from(value: Bc4Block) -> Self {
        value.pack()
    }
}

#[derive(Default)]
struct BitWriter {
    bits: u64,
    offset: u32,
}

impl BitWriter {
    fn write_bits(&mut self, value: u64, num_bits: u32) {
        debug_assert!(self.offset + num_bits <= u64::BITS);
        let mask = (1 << num_bits) - 1;
        self.bits |= (value & mask) << self.offset;
        self.offset += num_bits;
    }
}

struct BitReader {
    bits: u64,
}

impl BitReader {
    fn read_bits(&mut self, num_bits: u32) -> u64 {
        let mask = (1 << num_bits) - 1;
        // Read the low N bits
        let bits = self.bits & mask;
        self.bits >>= num_bits;
        bits
    }
}
