use std::fmt;

use crate::PIXELS_PER_BLOCK;

/// Diagnostic information passed to observers like [compress_bc4_observed](crate::compress_bc4_observed).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Event<'a> {
    /// `block` was compressed to the packed word `bc4`.
    Compressed {
        block: &'a [u8; PIXELS_PER_BLOCK],
        bc4: u64,
    },
    /// The packed word `bc4` was decompressed to `block`.
    Decompressed {
        bc4: u64,
        block: &'a [u8; PIXELS_PER_BLOCK],
    },
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Compressed { bc4, .. } => write!(f, "bc4: {bc4:064b}"),
            Event::Decompressed { block, .. } => {
                write!(f, "block: {{")?;
                for value in block.iter() {
                    write!(f, "{value} ")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// An observer that logs each event at the debug level.
///
/// # Examples
/// ```rust
/// let bc4 = bc4_codec::compress_bc4_observed(&[64u8; 16], bc4_codec::trace);
/// ```
#[cfg(feature = "tracing")]
pub fn trace(event: Event<'_>) {
    match event {
        Event::Compressed { block, bc4 } => {
            tracing::debug!("compressed {block:?} to BC4 {bc4:#018x}")
        }
        Event::Decompressed { bc4, block } => {
            tracing::debug!("decompressed BC4 {bc4:#018x} to {block:?}")
        }
    }
}
