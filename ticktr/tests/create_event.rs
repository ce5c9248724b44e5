// File: ticktr/tests/create_event.rs
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
    pubkey::Pubkey,
    signer::Signer as _,
    system_program,
};
use ticktr::{
    event::EventPda,
    instruction::{create_event, TicktrInstruction},
};
use ticktr_onchain_common::errors::TicktrError;

const CAPACITY: u64 = 100;

#[tokio::test]
async fn default() {
    let mut env = common::init_with_manager().await;
    let authority = env.wallets[MANAGER].pubkey();
    let event_id = Pubkey::new_unique();
    let args = common::event_args(event_id, CAPACITY);

    let Ok(instruction) = create_event(&authority, args.clone()) else {
        panic!("could not create instruction");
    };
    let res = env.execute_transaction(&[instruction], &[MANAGER]).await;
    assert!(
        res.is_ok(),
        "there was an unexpected error in the instruction"
    );

    let (event_pda, bump) = EventPda::get_address(event_id, &PROGRAM_ID);
    let state = env.from_account::<EventPda>(&event_pda).await;
    assert!(state.as_ref().is_some_and(|pda| pda.bump == bump));
    let event = state.unwrap().event;
    assert_eq!(event.id, event_id);
    assert_eq!(event.name, args.name);
    assert_eq!(event.uri, args.uri);
    assert_eq!(event.city, args.city);
    assert_eq!(event.venue, args.venue);
    assert_eq!(event.artist, args.artist);
    assert_eq!(event.date, args.date);
    assert_eq!(event.time, args.time);
    assert_eq!(event.capacity, CAPACITY);
    assert_eq!(event.tickets_issued, 0);
}

#[tokio::test]
async fn wrong_authority() {
    let mut env = common::init_with_manager().await;
    let intruder = env.add_wallet("Intruder").await;
    let args = common::event_args(Pubkey::new_unique(), CAPACITY);

    let Ok(instruction) = create_event(&intruder, args) else {
        panic!("could not create instruction");
    };
    let res = env
        .execute_transaction(&[instruction], &["Intruder"])
        .await;
    assert!(
        res.is_err_and(|err| err == TicktrError::InvalidSigner),
        "there was an unexpected error in the instruction"
    );
}

#[tokio::test]
async fn duplicated_event() {
    let event_id = Pubkey::new_unique();
    let mut env = common::init_with_event(event_id, CAPACITY).await;
    let authority = env.wallets[MANAGER].pubkey();

    let Ok(instruction) = create_event(&authority, common::event_args(event_id, CAPACITY)) else {
        panic!("could not create instruction");
    };
    let res = env.execute_transaction(&[instruction], &[MANAGER]).await;
    assert!(
        res.is_err_and(|err| err == TicktrError::AccountAlreadyExists),
        "there was an unexpected error in the instruction"
    );
}

#[tokio::test]
async fn zero_capacity() {
    let mut env = common::init_with_manager().await;
    let authority = env.wallets[MANAGER].pubkey();
    let args = common::event_args(Pubkey::new_unique(), 0);

    let Ok(instruction) = create_event(&authority, args) else {
        panic!("could not create instruction");
    };
    let res = env.execute_transaction(&[instruction], &[MANAGER]).await;
    assert!(
        res.is_err_and(|err| err == TicktrError::InvalidAmount),
        "there was an unexpected error in the instruction"
    );
}

#[tokio::test]
async fn name_too_long() {
    let mut env = common::init_with_manager().await;
    let authority = env.wallets[MANAGER].pubkey();
    let mut args = common::event_args(Pubkey::new_unique(), CAPACITY);
    args.name = "a".repeat(65);

    let Ok(instruction) = create_event(&authority, args) else {
        panic!("could not create instruction");
    };
    let res = env.execute_transaction(&[instruction], &[MANAGER]).await;
    assert!(
        res.is_err_and(|err| err == TicktrError::ArgumentTooLong),
        "there was an unexpected error in the instruction"
    );
}

#[tokio::test]
async fn without_manager() {
    let mut env = common::init().await;
    let client = env.add_wallet("Client").await;
    let args = common::event_args(Pubkey::new_unique(), CAPACITY);

    let Ok(instruction) = create_event(&client, args) else {
        panic!("could not create instruction");
    };
    let res = env.execute_transaction(&[instruction], &["Client"]).await;
    assert!(
        res.is_err_and(|err| err == TicktrError::MissingPDAAccount),
        "there was an unexpected error in the instruction"
    );
}

#[tokio::test]
async fn wrongly_owned_manager() {
    let mut env = common::init_with_manager().await;
    let authority = env.wallets[MANAGER].pubkey();
    let args = common::event_args(Pubkey::new_unique(), CAPACITY);
    let (event_pda, _bump) = EventPda::get_address(args.event_id, &PROGRAM_ID);

    // The authority's funded wallet stands in the manager's slot: it has
    // lamports but is owned by the system program, not by Ticktr.
    let Ok(data) = to_vec(&TicktrInstruction::CreateEvent(args)) else {
        panic!("could not serialize instruction");
    };
    let instruction = Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(authority, true),
            AccountMeta::new_readonly(authority, false),
            AccountMeta::new(event_pda, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    };
    let res = env.execute_transaction(&[instruction], &[MANAGER]).await;
    assert!(
        res.is_err_and(|err| err == TicktrError::InvalidOwner),
        "there was an unexpected error in the instruction"
    );
}
