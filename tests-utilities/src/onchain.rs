// File: tests-utilities/src/onchain.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

use std::{collections::HashMap, fmt::Debug};

use borsh::BorshDeserialize;
use solana_program::{
    hash::Hash, instruction::Instruction, pubkey::Pubkey, system_instruction::transfer,
    system_program,
};
use solana_program_runtime::invoke_context::BuiltinFunctionWithContext;
use solana_program_test::{BanksClient, BanksClientError, ProgramTest, ProgramTestBanksClientExt};
use solana_sdk::{
    account::Account,
    instruction::InstructionError,
    signature::{keypair_from_seed_phrase_and_passphrase, Keypair},
    signer::Signer,
    transaction::{Transaction, TransactionError},
};
use ticktr_onchain_common::{errors::TicktrError, pda::TicktrPda};

/// Name of the wallet funding all the others in the tests.
pub const FUNDING: &str = "funding";

/// Environment used for On-Chain tests
pub struct Environment {
    /// Public key of the program
    pub program_id: Pubkey,
    /// Testing runtime / cluster
    pub client: BanksClient,
    /// Current block
    pub blockhash: Hash,
    /// Map of Name - Keypair for all wallets used in the tests
    pub wallets: HashMap<String, Keypair>,
    /// Map of Name - (Address, Bump) for all PDAs in the tests
    pub pda: HashMap<String, (Pubkey, u8)>,
}

impl Environment {
    /// Creates a new testing environment.
    ///
    /// # Parameters
    /// * `program_id` - Address of the program,
    /// * `program` - Name of the program's crate,
    /// * `entrypoint` - Program's entrypoint (call with `solana_program_test::processor!(entrypoint)`)
    ///
    /// # Panics
    /// If the environment couldn't be created.
    pub async fn new(
        program_id: Pubkey,
        program: &str,
        entrypoint: Option<BuiltinFunctionWithContext>,
    ) -> Self {
        println!("Creating environment");
        let funding_key =
            keypair_from_seed_phrase_and_passphrase(FUNDING, "passphrase").unwrap();
        let funding_account = Account::new(50_000_000_000, 0, &system_program::ID);
        let mut program_test = ProgramTest::default();
        program_test.prefer_bpf(false);
        program_test.add_program(program, program_id, entrypoint);
        program_test.add_account(funding_key.pubkey(), funding_account);
        let (banks_client, _, recent_blockhash) = program_test.start().await;

        Self {
            program_id,
            client: banks_client,
            blockhash: recent_blockhash,
            wallets: HashMap::from([(FUNDING.to_owned(), funding_key)]),
            pda: HashMap::new(),
        }
    }

    /// Executes a transaction
    ///
    /// Once the transaction is finished, the block will be switched for a new one,
    /// which prevents duplicated instructions from being ignored.
    ///
    /// # Errors
    /// If an instruction errors and it's a `TicktrError`, it is properly returned.
    ///
    /// # Panics
    /// If there is an error, but it's not a Custom one, then there's a panic as it shouldn't happen.
    /// Can also happen if there are no signers
    pub async fn execute_transaction(
        &mut self,
        instructions: &[Instruction],
        signers: &[&str],
    ) -> Result<(), TicktrError> {
        println!("Executing transaction");
        let signers: Vec<&Keypair> = signers
            .iter()
            .filter_map(|name| self.wallets.get(*name))
            .collect();
        assert!(!signers.is_empty(), "signers must not be empty");
        let mut transaction =
            Transaction::new_with_payer(instructions, Some(&signers.first().unwrap().pubkey()));
        transaction.sign(signers.as_slice(), self.blockhash);
        let res = self.client.process_transaction(transaction).await;

        // Go to the next blockhash to prevent duplicated transactions from being ignored
        self.blockhash = self
            .client
            .get_new_latest_blockhash(&self.blockhash)
            .await
            .unwrap();

        match res {
            Ok(()) => Ok(()),
            Err(BanksClientError::TransactionError(TransactionError::InstructionError(
                _num,
                InstructionError::Custom(err),
            ))) => Err(TicktrError::from(err)),
            Err(err) => panic!("Unexpected error: {err}"),
        }
    }

    /// Get the state of an account.
    ///
    /// If the account doesn't exist, `None` will be returned.
    ///
    /// # Parameters
    /// * `address` - Address of the account for which to get the state
    ///
    /// # Panics
    /// If the account could not be retrieved (existing or not)
    pub async fn get_account(&mut self, address: &Pubkey) -> Option<Account> {
        self.client.get_account(*address).await.unwrap()
    }

    /// Loads a PDA data from an account.
    ///
    /// # Parameters
    /// * `account` - Account from which to read the data
    ///
    /// # Errors
    /// If the given account does not contain the expected data.
    pub async fn from_account<T>(&mut self, account: &Pubkey) -> Option<T>
    where
        T: BorshDeserialize + TicktrPda + Debug,
    {
        let data = self.get_account(account).await?.data;
        let res = T::try_from_slice(&data).ok()?;
        if !res.is_valid() {
            return None::<T>;
        }
        Some(res)
    }

    /// Adds a new wallet to the testing environment
    ///
    /// # Parameters
    /// * `name` - Name of the wallet to add.
    ///
    /// # Returns
    /// * Pubkey of the new wallet.
    ///
    /// # Panics
    /// If the keypair couldn't be generated
    #[must_use]
    pub async fn add_wallet(&mut self, name: &str) -> Pubkey {
        println!("adding wallet for user '{name}'");
        let keypair = keypair_from_seed_phrase_and_passphrase(name, "passphrase").unwrap();
        let key = keypair.pubkey();
        self.wallets.insert(name.into(), keypair);

        let Some(funding_key) = self.wallets.get(FUNDING) else {
            panic!("no funding wallet in the environment");
        };
        let instruction = transfer(&funding_key.pubkey(), &key, 1_000_000_000);
        assert!(
            self.execute_transaction(&[instruction], &[FUNDING])
                .await
                .is_ok(),
            "could not fund the wallet for {name}"
        );

        key
    }
}
