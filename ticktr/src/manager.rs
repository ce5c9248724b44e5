// File: ticktr/src/manager.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;
use ticktr_macro::pda;
use ticktr_onchain_common::pda::{PdaType, TicktrPda};

/// Configuration PDA of the Ticktr program.
///
/// There is exactly one manager per deployment; the wallet that signed
/// `SetupManager` becomes its authority.
#[pda(kind = PdaType::ProgramConfiguration, seed = "manager")]
pub struct ManagerPda {
    /// Key allowed to create events and issue tickets.
    pub authority: Pubkey,
}

impl ManagerPda {
    /// Creates a new manager PDA.
    ///
    /// # Parameters
    /// * `bump` - Bump used to derive the PDA address,
    /// * `authority` - Key allowed to manage events.
    #[must_use]
    pub const fn new(bump: u8, authority: Pubkey) -> Self {
        Self {
            pda_type: Self::PDA_TYPE,
            bump,
            authority,
        }
    }
}
