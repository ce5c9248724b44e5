// File: ticktr-onchain-common/src/errors.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

use num_derive::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use std::error::Error;
use thiserror::Error;

/// Custom error that can occur in the Ticktr On-Chain Program
#[derive(Clone, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum TicktrError {
    /// If attempting to create an account that already exists.
    #[error("the account already exists and can't be created")]
    AccountAlreadyExists,
    /// Tried to perform an operation on an account with the wrong owner.
    #[error("the owner of two related accounts doesn't match")]
    AccountOwnerMismatch,
    /// Given argument was too long.
    #[error("argument too long")]
    ArgumentTooLong,
    /// All the tickets of an event have already been issued.
    #[error("every ticket for this event has already been issued")]
    EventAtFullCapacity,
    /// The targeted event does not exist.
    #[error("the event does not exist")]
    EventDoesNotExist,
    /// There was an integer overflow (one parameter is likely wrong).
    #[error("integer overflow detected")]
    IntegerOverflow,
    /// The given amount is invalid (likely lower or equal to zero).
    #[error("the amount must be strictly greater than zero")]
    InvalidAmount,
    /// The given PDA is not owned by this program.
    #[error("a PDA's owner is not Ticktr's program")]
    InvalidOwner,
    /// The given PDA has the wrong type.
    #[error("the PDA account is not of the right type")]
    InvalidPdaType,
    /// The program ID is invalid.
    #[error("a program ID does not match the expected one")]
    InvalidProgramId,
    /// There was an error when serializing or deserializing the data.
    #[error("data could not be (de)serialized as expected")]
    InvalidRawData,
    /// Instruction performed with wrong signers (not enough or unauthorized).
    #[error("signer is not authorized for this operation")]
    InvalidSigner,
    /// The ticket id does not match the event's issuance counter.
    #[error("the ticket id is not the next one for the event")]
    InvalidTicketId,
    /// Missing a PDA account.
    #[error("PDA account info is missing")]
    MissingPDAAccount,
    /// The current instruction can only be run once and has already been executed.
    #[error("unique operation already executed")]
    UniqueOperationAlreadyExecuted,
    /// Tried to update a PDA that has not been created yet.
    #[error("tried to update a PDA that does not exist")]
    WriteInsteadOfCreatePda,
    /// An unknown error has occurred (should not happen obviously, check the logs…)
    #[error("unknown error")]
    UnknownError,
}

impl From<TicktrError> for ProgramError {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn from(err: TicktrError) -> Self {
        msg!("TicktrError: {}", err);
        Self::Custom(err as u32)
    }
}

impl From<u32> for TicktrError {
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[allow(clippy::cognitive_complexity)]
    fn from(value: u32) -> Self {
        match value {
            x if x == Self::AccountAlreadyExists as u32 => Self::AccountAlreadyExists,
            x if x == Self::AccountOwnerMismatch as u32 => Self::AccountOwnerMismatch,
            x if x == Self::ArgumentTooLong as u32 => Self::ArgumentTooLong,
            x if x == Self::EventAtFullCapacity as u32 => Self::EventAtFullCapacity,
            x if x == Self::EventDoesNotExist as u32 => Self::EventDoesNotExist,
            x if x == Self::IntegerOverflow as u32 => Self::IntegerOverflow,
            x if x == Self::InvalidAmount as u32 => Self::InvalidAmount,
            x if x == Self::InvalidOwner as u32 => Self::InvalidOwner,
            x if x == Self::InvalidPdaType as u32 => Self::InvalidPdaType,
            x if x == Self::InvalidProgramId as u32 => Self::InvalidProgramId,
            x if x == Self::InvalidRawData as u32 => Self::InvalidRawData,
            x if x == Self::InvalidSigner as u32 => Self::InvalidSigner,
            x if x == Self::InvalidTicketId as u32 => Self::InvalidTicketId,
            x if x == Self::MissingPDAAccount as u32 => Self::MissingPDAAccount,
            x if x == Self::UniqueOperationAlreadyExecuted as u32 => {
                Self::UniqueOperationAlreadyExecuted
            }
            x if x == Self::WriteInsteadOfCreatePda as u32 => Self::WriteInsteadOfCreatePda,
            _ => Self::UnknownError,
        }
    }
}

impl<T> DecodeError<T> for TicktrError {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn type_of() -> &'static str {
        "TicktrError"
    }
}

impl PrintProgramError for TicktrError {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn print<E>(&self)
    where
        E: 'static + Error + DecodeError<E> + PrintProgramError + num_traits::FromPrimitive,
    {
        msg!("TicktrError: {}", self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_round_trip() {
        let errors = [
            TicktrError::AccountAlreadyExists,
            TicktrError::EventAtFullCapacity,
            TicktrError::InvalidTicketId,
            TicktrError::UniqueOperationAlreadyExecuted,
        ];
        for error in errors {
            assert_eq!(TicktrError::from(error.clone() as u32), error);
        }
    }

    #[test]
    fn unknown_code_falls_back() {
        assert_eq!(TicktrError::from(10_000_u32), TicktrError::UnknownError);
    }
}
