#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use cinder_ledger::TokenLedger;
use cinder_types::{AccountId, Ordinal};

#[derive(Arbitrary, Debug)]
enum Op {
    Mint(u8),
    Transfer { requester: u8, from: u8, to: u8, ordinal: u8 },
    Approve { owner: u8, ordinal: u8, approved: Option<u8> },
    Operator { owner: u8, operator: u8, approved: bool },
}

fn account(n: u8) -> AccountId {
    AccountId::from_low_u64(u64::from(n % 8))
}

// Any sequence of ledger calls leaves ownership consistent.
fuzz_target!(|ops: Vec<Op>| {
    let mut ledger = TokenLedger::new();
    for op in ops {
        let _ = match op {
            Op::Mint(to) => ledger.mint(account(to)).map(|_| ()),
            Op::Transfer { requester, from, to, ordinal } => ledger.transfer(
                &account(requester),
                &account(from),
                &account(to),
                Ordinal::new(u64::from(ordinal)),
            ),
            Op::Approve { owner, ordinal, approved } => ledger.approve(
                &account(owner),
                Ordinal::new(u64::from(ordinal)),
                approved.map(account),
            ),
            Op::Operator { owner, operator, approved } => {
                ledger.set_approval_for_all(&account(owner), &account(operator), approved)
            }
        };
    }
    assert!(ledger.is_consistent());
    assert_eq!(ledger.balance_of(&AccountId::ZERO), 0);
});
