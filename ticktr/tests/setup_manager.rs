// File: ticktr/tests/setup_manager.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

#![allow(clippy::tests_outside_test_module)]
#![allow(clippy::panic)]
#![allow(clippy::print_stdout)]
#![allow(clippy::indexing_slicing)]

pub mod common;

use borsh::to_vec;
use common::{MANAGER, PROGRAM_ID};
use solana_program_test::tokio;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    sysvar,
};
use ticktr::{
    instruction::{setup_manager, TicktrInstruction},
    manager::ManagerPda,
};
use ticktr_onchain_common::errors::TicktrError;

#[tokio::test]
async fn default() {
    let mut env = common::init().await;
    let payer = env.add_wallet(MANAGER).await;

    let Ok(instruction) = setup_manager(&payer) else {
        panic!("could not create instruction");
    };
    let res = env.execute_transaction(&[instruction], &[MANAGER]).await;
    assert!(
        res.is_ok(),
        "there was an unexpected error in the instruction"
    );

    let (manager_pda, bump) = ManagerPda::get_address(&PROGRAM_ID);
    assert!(env
        .from_account::<ManagerPda>(&manager_pda)
        .await
        .is_some_and(|manager| manager.authority == payer && manager.bump == bump));
}

#[tokio::test]
async fn double_setup() {
    let mut env = common::init_with_manager().await;
    let intruder = env.add_wallet("Intruder").await;

    // The manager exists: no one can claim it again, not even its authority.
    let Ok(instruction) = setup_manager(&intruder) else {
        panic!("could not create instruction");
    };
    let res = env
        .execute_transaction(&[instruction], &["Intruder"])
        .await;
    assert!(
        res.is_err_and(|err| err == TicktrError::UniqueOperationAlreadyExecuted),
        "there was an unexpected error in the instruction"
    );
}

#[tokio::test]
async fn wrong_system_program() {
    let mut env = common::init().await;
    let payer = env.add_wallet(MANAGER).await;
    let (manager_pda, _bump) = ManagerPda::get_address(&PROGRAM_ID);

    // Hand-built instruction with the rent sysvar in the system program's slot.
    let Ok(data) = to_vec(&TicktrInstruction::SetupManager) else {
        panic!("could not serialize instruction");
    };
    let instruction = Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(payer, true),
            AccountMeta::new(manager_pda, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
        ],
        data,
    };
    let res = env.execute_transaction(&[instruction], &[MANAGER]).await;
    assert!(
        res.is_err_and(|err| err == TicktrError::InvalidProgramId),
        "there was an unexpected error in the instruction"
    );
}
