#![no_main]

use libfuzzer_sys::fuzz_target;

use cinder_codec::{Field, PackedRecord, RecordFields, U256};

fn word(chunk: &[u8]) -> U256 {
    let mut bytes = [0u8; 32];
    bytes[32 - chunk.len()..].copy_from_slice(chunk);
    U256::from_be_bytes(bytes)
}

// Arbitrarily wide inputs are truncated per field and never bleed into a
// neighbour.
fuzz_target!(|data: &[u8]| {
    if data.len() < 6 * 32 {
        return;
    }
    let mut fields = RecordFields::default();
    for (i, field) in Field::ALL.iter().enumerate() {
        fields.set(*field, word(&data[i * 32..(i + 1) * 32]));
    }

    let packed = PackedRecord::encode(&fields);
    for field in Field::ALL {
        assert_eq!(packed.field(field), fields.get(field).low_bits(field.width()));
    }
});
