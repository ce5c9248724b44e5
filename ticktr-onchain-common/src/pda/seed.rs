// File: ticktr-onchain-common/src/pda/seed.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

use solana_program::pubkey::Pubkey;

/// A seed used to derive the address of a PDA.
pub struct Seed {
    data: Vec<u8>,
}

impl From<u8> for Seed {
    fn from(value: u8) -> Self {
        Self { data: vec![value] }
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self {
            data: value.to_le_bytes().to_vec(),
        }
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Self {
            data: value.as_bytes().to_vec(),
        }
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Self {
            data: value.into_bytes(),
        }
    }
}

impl From<Pubkey> for Seed {
    fn from(value: Pubkey) -> Self {
        Self {
            data: value.to_bytes().to_vec(),
        }
    }
}

impl From<&Pubkey> for Seed {
    fn from(value: &Pubkey) -> Self {
        Self {
            data: value.to_bytes().to_vec(),
        }
    }
}

impl From<Seed> for Vec<u8> {
    fn from(value: Seed) -> Self {
        value.data
    }
}
