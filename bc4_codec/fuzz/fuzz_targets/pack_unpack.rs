#![no_main]

use libfuzzer_sys::fuzz_target;

use bc4_codec::Bc4Block;

fuzz_target!(|block: Bc4Block| {
    // Indices are generated in range, so packing should be lossless.
    assert_eq!(block, Bc4Block::unpack(block.pack()));
    assert_eq!(block, Bc4Block::from_le_bytes(block.to_le_bytes()));
});
