#![no_main]

use libfuzzer_sys::fuzz_target;

use cinder_ledger::{LedgerSnapshot, TokenLedger};

// Malformed snapshot bytes are rejected, never panicked on, and anything
// accepted is internally consistent.
fuzz_target!(|data: &[u8]| {
    if let Ok(snapshot) = LedgerSnapshot::from_bytes(data) {
        if let Ok(ledger) = TokenLedger::from_snapshot(&snapshot) {
            assert!(ledger.is_consistent());
        }
    }
});
