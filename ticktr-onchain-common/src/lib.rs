// File: ticktr-onchain-common/src/lib.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

//! Definitions of errors, PDAs and security checks shared by the Ticktr On-Chain program.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

/// Definition of Custom Errors for the Ticktr On-Chain program.
pub mod errors;
/// Definition of Ticktr's PDAs.
pub mod pda;
/// Definition of security checks performed before executing instructions.
pub mod security;

use solana_program::program_error::ProgramError;

/// Only output messages if in debug mode.
#[macro_export]
macro_rules! debug {
    ($($msg:expr),+$(,)?) => {
        #[cfg(feature = "debug-msg")]
        solana_program::msg!($($msg,)+)
    };
}

/// Get the current timestamp (or a close estimation to it)
///
/// # Errors
/// If the clock could not be obtained
#[cfg(not(feature = "no-entrypoint"))]
pub fn get_timestamp() -> Result<i64, ProgramError> {
    use solana_program::{clock::Clock, sysvar::Sysvar as _};
    let clock = Clock::get()?;
    Ok(clock.unix_timestamp)
}

/// Get the current timestamp (or a close estimation to it)
///
/// This is only for tests! It means other programs calling this one won't work
/// where time is concerned, but those are not a thing for Ticktr's tests.
///
/// # Errors
/// If the clock could not be obtained
#[cfg(feature = "no-entrypoint")]
pub fn get_timestamp() -> Result<i64, ProgramError> {
    Ok(chrono::Utc::now().timestamp())
}
