use crate::{InterpolationTable, PIXELS_PER_BLOCK};

/// The 3-bit [InterpolationTable] index for each value in a block in row-major order.
///
/// Only the low 3 bits of each index are stored when packing.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indices(pub [u8; PIXELS_PER_BLOCK]);

impl Indices {
    /// Find the closest table entry for each value in `block`.
    pub fn closest(block: &[u8; PIXELS_PER_BLOCK], table: &InterpolationTable) -> Self {
        Self(block.map(|value| closest_index(table, value)))
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Indices {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        // Keep indices in range so packing is lossless.
        let mut indices = [0u8; PIXELS_PER_BLOCK];
        for index in &mut indices {
            *index = u.int_in_range(0..=7)?;
        }
        Ok(Self(indices))
    }
}

/// Find the index of the table entry with the smallest absolute difference to `value`.
///
/// Ties keep the lowest index.
pub fn closest_index(table: &InterpolationTable, value: u8) -> u8 {
    let target = value as f32 / 255.0;

    // Least error brute force search.
    let mut best_distance = f32::MAX;
    let mut best_index = 0;
    for (i, reference) in table.values().iter().enumerate() {
        let distance = (reference - target).abs();
        if distance < best_distance {
            best_distance = distance;
            best_index = i as u8;
        }
    }

    best_index
}
