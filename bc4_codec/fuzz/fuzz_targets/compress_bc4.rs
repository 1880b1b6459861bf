#![no_main]

use libfuzzer_sys::fuzz_target;

use bc4_codec::{compress_bc4, decompress_bc4, Bc4Block, InterpolationTable};

fuzz_target!(|block: [u8; 16]| {
    let bc4 = compress_bc4(&block);

    let Bc4Block { endpoints, indices } = Bc4Block::unpack(bc4);
    assert_eq!(block.iter().max().copied(), Some(endpoints.e0));
    assert_eq!(block.iter().min().copied(), Some(endpoints.e1));

    // Each index should select the closest table entry.
    let table = InterpolationTable::new(endpoints);
    for (value, index) in block.iter().zip(indices.0) {
        let target = *value as f32 / 255.0;
        let distance = (table.get(index) - target).abs();
        assert!(table
            .values()
            .iter()
            .all(|v| distance <= (v - target).abs()));
    }

    // Compressing the decompressed data again should not introduce new errors.
    let decompressed = decompress_bc4(bc4);
    let decompressed2 = decompress_bc4(compress_bc4(&decompressed));
    assert_eq!(decompressed, decompressed2);
});
