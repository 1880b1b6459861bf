//! BC4 compression and decompression for single 4x4 blocks of 8-bit grayscale data.
//!
//! Each block of 16 values is stored as a 64-bit word containing
//! two endpoints and a 3-bit index into 8 interpolated reference values for each value.
//! Compression is lossy, but every block and every 64-bit word is valid input,
//! so the core functions never fail.
//!
//! # Examples
//! ```rust
//! use bc4_codec::{compress_bc4, decompress_bc4};
//!
//! let block = [
//!     10, 25, 63, 100, 10, 12, 30, 125, 14, 101, 215, 13, 14, 12, 200, 189,
//! ];
//! let bc4 = compress_bc4(&block);
//!
//! // The endpoints are stored in the low bytes.
//! assert_eq!(215, bc4 & 0xFF);
//! assert_eq!(10, (bc4 >> 8) & 0xFF);
//!
//! let decompressed = decompress_bc4(bc4);
//! assert_eq!(10, decompressed[0]);
//! ```
mod endpoints;
mod error;
mod observe;
mod packed;
mod quantize;
mod table;

pub use endpoints::Endpoints;
pub use error::BlockError;
pub use observe::Event;
pub use packed::Bc4Block;
pub use quantize::{closest_index, Indices};
pub use table::{InterpolationTable, Regime, TABLE_SIZE};

#[cfg(feature = "tracing")]
pub use observe::trace;

pub const BLOCK_WIDTH: usize = 4;
pub const BLOCK_HEIGHT: usize = 4;
pub const PIXELS_PER_BLOCK: usize = BLOCK_WIDTH * BLOCK_HEIGHT;
/// The size of a compressed block in bytes.
pub const BYTES_PER_BLOCK: usize = 8;

/// Compress a 4x4 `block` of values in row-major order to a packed BC4 word.
pub fn compress_bc4(block: &[u8; PIXELS_PER_BLOCK]) -> u64 {
    compress_bc4_observed(block, |_| {})
}

/// Decompress a packed BC4 word to a 4x4 block of values in row-major order.
pub fn decompress_bc4(bc4: u64) -> [u8; PIXELS_PER_BLOCK] {
    decompress_bc4_observed(bc4, |_| {})
}

/// The same as [compress_bc4] but calls `observer` with the result.
pub fn compress_bc4_observed<F>(block: &[u8; PIXELS_PER_BLOCK], mut observer: F) -> u64
where
    F: FnMut(Event<'_>),
{
    let endpoints = Endpoints::from_block(block);
    let table = InterpolationTable::new(endpoints);
    let indices = Indices::closest(block, &table);

    let bc4 = Bc4Block { endpoints, indices }.pack();
    observer(Event::Compressed { block, bc4 });
    bc4
}

/// The same as [decompress_bc4] but calls `observer` with the result.
pub fn decompress_bc4_observed<F>(bc4: u64, mut observer: F) -> [u8; PIXELS_PER_BLOCK]
where
    F: FnMut(Event<'_>),
{
    let Bc4Block { endpoints, indices } = Bc4Block::unpack(bc4);
    let table = InterpolationTable::new(endpoints);

    let block = indices.0.map(|index| table.get_unorm8(index));
    observer(Event::Decompressed { bc4, block: &block });
    block
}

/// Decompress a packed BC4 word to normalized values in the range `0.0` to `1.0`.
///
/// Unlike [decompress_bc4], the values are not rounded to 8 bits.
pub fn decompress_bc4_f32(bc4: u64) -> [f32; PIXELS_PER_BLOCK] {
    let Bc4Block { endpoints, indices } = Bc4Block::unpack(bc4);
    let table = InterpolationTable::new(endpoints);
    indices.0.map(|index| table.get(index))
}

/// Compress the 4x4 block at the start of `data` with `pitch` bytes between rows.
///
/// Returns the compressed block in little-endian byte order.
pub fn bc4_from_r8(data: &[u8], pitch: usize) -> Result<[u8; BYTES_PER_BLOCK], BlockError> {
    let expected = block_footprint(pitch)?;
    if data.len() < expected {
        return Err(BlockError::NotEnoughData {
            expected,
            actual: data.len(),
        });
    }

    let block = std::array::from_fn(|i| data[(i / BLOCK_WIDTH) * pitch + i % BLOCK_WIDTH]);
    Ok(compress_bc4(&block).to_le_bytes())
}

/// Decompress the first [BYTES_PER_BLOCK] bytes of `compressed` to the 4x4 block
/// at the start of `decompressed` with `pitch` bytes between rows.
///
/// Values outside the 4x4 block are not modified.
pub fn r8_from_bc4(
    compressed: &[u8],
    decompressed: &mut [u8],
    pitch: usize,
) -> Result<(), BlockError> {
    let bytes: [u8; BYTES_PER_BLOCK] = compressed
        .get(..BYTES_PER_BLOCK)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(BlockError::NotEnoughData {
            expected: BYTES_PER_BLOCK,
            actual: compressed.len(),
        })?;

    let expected = block_footprint(pitch)?;
    if decompressed.len() < expected {
        return Err(BlockError::NotEnoughData {
            expected,
            actual: decompressed.len(),
        });
    }

    let block = decompress_bc4(u64::from_le_bytes(bytes));
    for (row, values) in block.chunks_exact(BLOCK_WIDTH).enumerate() {
        let start = row * pitch;
        decompressed[start..start + BLOCK_WIDTH].copy_from_slice(values);
    }

    Ok(())
}

// The number of bytes spanned by a block with the given row pitch.
fn block_footprint(pitch: usize) -> Result<usize, BlockError> {
    if pitch < BLOCK_WIDTH {
        return Err(BlockError::InvalidPitch {
            pitch,
            block_width: BLOCK_WIDTH,
        });
    }

    pitch
        .checked_mul(BLOCK_HEIGHT - 1)
        .and_then(|n| n.checked_add(BLOCK_WIDTH))
        .ok_or(BlockError::PitchWouldOverflow { pitch })
}
