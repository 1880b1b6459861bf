use crate::Endpoints;

/// The number of reference values addressable by a 3-bit index.
pub const TABLE_SIZE: usize = 8;

/// The interpolation mode for the six non endpoint entries of an [InterpolationTable].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Regime {
    /// `e0 > e1` with 6 values evenly spaced between the endpoints.
    SixStep,
    /// `e0 <= e1` with 4 values between the endpoints followed by `0.0` and `1.0`.
    FourStep,
}

/// The 8 normalized reference values for a block.
///
/// Entries 0 and 1 are always the endpoints divided by 255.
/// The table only depends on the [Endpoints],
/// so compression and decompression always build identical tables.
/// See the [BC4_UNORM](https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc4_unorm)
/// docs for details.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct InterpolationTable {
    regime: Regime,
    values: [f32; TABLE_SIZE],
}

impl InterpolationTable {
    pub fn new(endpoints: Endpoints) -> Self {
        let red0 = endpoints.e0 as f32 / 255.0;
        let red1 = endpoints.e1 as f32 / 255.0;

        let mut values = [0.0f32; TABLE_SIZE];
        values[0] = red0;
        values[1] = red1;

        let regime = endpoints.regime();
        match regime {
            Regime::SixStep => {
                // 6 interpolated values.
                values[2] = (6.0 * red0 + 1.0 * red1) / 7.0; // 6/7*red_0 + 1/7*red_1
                values[3] = (5.0 * red0 + 2.0 * red1) / 7.0; // 5/7*red_0 + 2/7*red_1
                values[4] = (4.0 * red0 + 3.0 * red1) / 7.0; // 4/7*red_0 + 3/7*red_1
                values[5] = (3.0 * red0 + 4.0 * red1) / 7.0; // 3/7*red_0 + 4/7*red_1
                values[6] = (2.0 * red0 + 5.0 * red1) / 7.0; // 2/7*red_0 + 5/7*red_1
                values[7] = (1.0 * red0 + 6.0 * red1) / 7.0; // 1/7*red_0 + 6/7*red_1
            }
            Regime::FourStep => {
                // 4 interpolated values.
                values[2] = (4.0 * red0 + 1.0 * red1) / 5.0; // 4/5*red_0 + 1/5*red_1
                values[3] = (3.0 * red0 + 2.0 * red1) / 5.0; // 3/5*red_0 + 2/5*red_1
                values[4] = (2.0 * red0 + 3.0 * red1) / 5.0; // 2/5*red_0 + 3/5*red_1
                values[5] = (1.0 * red0 + 4.0 * red1) / 5.0; // 1/5*red_0 + 4/5*red_1
                values[6] = 0.0;
                values[7] = 1.0;
            }
        }

        Self { regime, values }
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    pub fn values(&self) -> &[f32; TABLE_SIZE] {
        &self.values
    }

    /// The normalized value for `index`.
    /// Only the low 3 bits of `index` are used.
    pub fn get(&self, index: u8) -> f32 {
        self.values[(index & 0x7) as usize]
    }

    /// The value for `index` rounded to the nearest 8-bit unsigned integer.
    pub fn get_unorm8(&self, index: u8) -> u8 {
        // Values are in 0.0 to 1.0, and casts saturate anyway.
        (self.get(index) * 255.0).round() as u8
    }
}
