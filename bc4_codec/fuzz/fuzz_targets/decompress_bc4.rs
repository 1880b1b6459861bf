#![no_main]

extern crate libfuzzer_sys;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 8]| {
    // BC4 stores grayscale data, so each decompressed pixel is 1 byte.
    let mut expected = [0u8; 16];
    bcdec_rs::bc4(&data, &mut expected, 4);

    let mut actual = [0u8; 16];
    bc4_codec::r8_from_bc4(&data, &mut actual, 4).unwrap();

    // bcdec rounds interpolated values with integer math instead of rounding floats.
    for (e, a) in expected.iter().zip(actual) {
        assert!(e.abs_diff(a) <= 1, "{expected:?} != {actual:?}");
    }
});
