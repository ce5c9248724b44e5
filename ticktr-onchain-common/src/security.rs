// File: ticktr-onchain-common/src/security.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey};

use crate::errors::TicktrError;

/// Check that the given program owns the PDA
#[macro_export]
macro_rules! check_pda_owner {
    ($program_id:ident, $pda:expr $(,)?) => {
        if $pda.lamports() > 0 && $pda.owner != $program_id {
            $crate::debug!("{} has owner {} and not {}", stringify!($pda), $pda.owner, $program_id);
            return Err(ticktr_onchain_common::errors::TicktrError::InvalidOwner.into());
        }
    };
    ($program_id:ident, $pda:expr $(, $tail:expr)*) => {
        check_pda_owner!($program_id, $pda);
        check_pda_owner!($program_id $(, $tail)*);
    }
}

/// Checks that the given account's key matches the System program ID
///
/// # Arguments
/// * `account` - The account to check
///
/// # Errors
/// If the account's key does not match
#[macro_export]
macro_rules! check_system_program {
    ($id:ident) => {
        if *$id.key != solana_program::system_program::id() {
            return Err(ticktr_onchain_common::errors::TicktrError::InvalidProgramId.into());
        }
    };
}

/// Checks that an account signed the instruction and holds the expected key.
///
/// # Parameters
/// * `account` - The account that should have signed,
/// * `expected` - The key the signer must match.
///
/// # Errors
/// If the account did not sign or the keys don't match.
pub fn verify_authority(account: &AccountInfo, expected: &Pubkey) -> ProgramResult {
    if !account.is_signer {
        msg!("account {} should be a signer", account.key);
        return Err(TicktrError::InvalidSigner.into());
    }
    if account.key != expected {
        msg!(
            "signer {} is not the expected authority {}",
            account.key,
            expected
        );
        return Err(TicktrError::InvalidSigner.into());
    }
    Ok(())
}
