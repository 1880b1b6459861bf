use crate::{Regime, PIXELS_PER_BLOCK};

/// The two reference values stored in the first two bytes of a BC4 block.
///
/// Blocks compressed by this crate always have `e0 >= e1`.
/// Arbitrary packed words may still contain `e0 < e1`,
/// which selects the same 4-step [Regime] as `e0 == e1`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoints {
    /// The first endpoint and the largest value in the source block.
    pub e0: u8,
    /// The second endpoint and the smallest value in the source block.
    pub e1: u8,
}

impl Endpoints {
    /// Select the maximum and minimum values of `block` as the endpoints.
    pub fn from_block(block: &[u8; PIXELS_PER_BLOCK]) -> Self {
        let (min, max) = block
            .iter()
            .fold((u8::MAX, u8::MIN), |(min, max), &value| {
                (min.min(value), max.max(value))
            });

        Self { e0: max, e1: min }
    }

    /// The interpolation mode selected by these endpoints.
    pub fn regime(&self) -> Regime {
        if self.e0 > self.e1 {
            Regime::SixStep
        } else {
            Regime::FourStep
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_from_block() {
        let block = [
            10, 25, 63, 100, 10, 12, 30, 125, 14, 101, 215, 13, 14, 12, 200, 189,
        ];
        assert_eq!(Endpoints { e0: 215, e1: 10 }, Endpoints::from_block(&block));
    }

    #[test]
    fn endpoints_from_block_extremes() {
        let mut block = [128u8; PIXELS_PER_BLOCK];
        block[15] = 0;
        block[0] = 255;
        assert_eq!(Endpoints { e0: 255, e1: 0 }, Endpoints::from_block(&block));
    }

    #[test]
    fn endpoints_from_uniform_block() {
        for value in 0..=255u8 {
            let block = [value; PIXELS_PER_BLOCK];
            assert_eq!(
                Endpoints {
                    e0: value,
                    e1: value
                },
                Endpoints::from_block(&block)
            );
        }
    }

    #[test]
    fn endpoints_match_iterator_max_min() {
        // Rotate a ramp through every position.
        for offset in 0..PIXELS_PER_BLOCK {
            let block: [u8; PIXELS_PER_BLOCK] =
                std::array::from_fn(|i| (((i + offset) % PIXELS_PER_BLOCK) * 17) as u8);
            let endpoints = Endpoints::from_block(&block);
            assert_eq!(block.iter().max().copied(), Some(endpoints.e0));
            assert_eq!(block.iter().min().copied(), Some(endpoints.e1));
        }
    }

    #[test]
    fn regime_from_endpoints() {
        assert_eq!(Regime::SixStep, Endpoints { e0: 1, e1: 0 }.regime());
        assert_eq!(Regime::FourStep, Endpoints { e0: 7, e1: 7 }.regime());
        assert_eq!(Regime::FourStep, Endpoints { e0: 0, e1: 255 }.regime());
    }
}
