#![no_main]

use libfuzzer_sys::fuzz_target;

use cinder_codec::PackedRecord;

// Every 256-bit word decodes, and re-packing the decoded record gives the
// same word back: the six fields tile the word exactly.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = text.parse::<PackedRecord>();
    }

    if data.len() < 32 {
        return;
    }
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&data[..32]);

    let word = PackedRecord::from_bytes(bytes);
    let record = word.decode();
    assert_eq!(record.pack(), word);
    assert_eq!(word.to_string().parse::<PackedRecord>().ok(), Some(word));
});
