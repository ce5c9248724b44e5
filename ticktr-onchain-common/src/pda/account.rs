// File: ticktr-onchain-common/src/pda/account.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program::{invoke, invoke_signed},
    pubkey::Pubkey,
    rent::Rent,
    system_instruction::{create_account, transfer},
    sysvar::Sysvar,
};

use crate::{debug, errors::TicktrError};

/// Define the type of account for a PDA.
///
/// This is a security requirement to make sure that a PDA of one type can't be used for
/// something else than it was supposed to be.
#[derive(Clone, Copy, Debug, BorshSerialize, BorshDeserialize, PartialEq, Eq)]
pub enum PdaType {
    /// Configuration of the program (the Manager account).
    ProgramConfiguration,
    /// A ticketed event.
    Event,
    /// A ticket issued for an event.
    Ticket,
}

/// Common properties of a Ticktr PDA
pub trait TicktrPda: BorshDeserialize + BorshSerialize {
    /// The type of the PDA
    const PDA_TYPE: PdaType;

    /// Get the PDA's bump
    fn get_bump(&self) -> u8;

    /// Checks that a PDA has the expected [`PdaType`]
    fn is_valid(&self) -> bool;

    /// Get the seeds used to sign for the PDA's address.
    fn seeds(&self) -> Vec<Vec<u8>>;

    /// Update the PDA's data.
    ///
    /// # Parameters
    /// * `account` - The account on which the PDA is saved,
    /// * `payer` - The transaction paying account (used in case `realloc` is necessary).
    ///
    /// # Errors
    /// If the account does not exist yet or the PDA failed to be serialized.
    fn write<'a>(&self, account: &AccountInfo<'a>, payer: &AccountInfo<'a>) -> ProgramResult {
        if account.lamports() == 0 {
            return Err(TicktrError::WriteInsteadOfCreatePda.into());
        }
        let mut account_data = borsh::to_vec(self).map_err(|_err| TicktrError::InvalidRawData)?;
        // If the size changed, the account needs a realloc (and maybe more rent).
        if account_data.len() != account.data_len() {
            let rent = Rent::get()?.minimum_balance(account_data.len());
            if rent > account.lamports() {
                let diff = rent.saturating_sub(account.lamports());
                invoke(
                    &transfer(payer.key, account.key, diff),
                    &[payer.clone(), account.clone()],
                )?;
            }
            account.realloc(account_data.len(), false)?;
        }
        account_data.swap_with_slice(*account.try_borrow_mut_data()?);
        Ok(())
    }

    /// Creates the PDA on the chain.
    ///
    /// # Parameters
    /// * `account` - The account where the data will be saved,
    /// * `payer` - The transaction paying account,
    /// * `program_id` - The program owning the PDA.
    ///
    /// # Errors
    /// If the data failed to be serialized, rent could not be computed, etc.
    fn create<'a>(
        &self,
        account: &AccountInfo<'a>,
        payer: &AccountInfo<'a>,
        program_id: &Pubkey,
    ) -> ProgramResult {
        // In case there was a mixup in the PDA constructor.
        if !self.is_valid() {
            return Err(TicktrError::InvalidPdaType.into());
        }

        // Compute the rent exemption
        let mut data = borsh::to_vec(self).map_err(|_err| TicktrError::InvalidRawData)?;
        let rent = Rent::get()?.minimum_balance(data.len());
        debug!("Creating PDA. Rent needed: {} lamports", rent);

        // Create the account
        let create_pda_instr =
            create_account(payer.key, account.key, rent, data.len() as u64, program_id);

        let seeds = self.seeds();
        let seeds = seeds.iter().map(Vec::as_slice).collect::<Vec<_>>();
        invoke_signed(
            &create_pda_instr,
            &[payer.clone(), account.clone()],
            &[seeds.as_slice()],
        )?;

        // Write the data on the newly created account
        debug!("writing PDA data");
        data.swap_with_slice(*account.try_borrow_mut_data()?);
        Ok(())
    }
}
