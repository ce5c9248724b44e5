// File: ticktr/tests/common/mod.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

#![allow(dead_code)]

use solana_program::pubkey::Pubkey;
use solana_program_test::processor;
use solana_sdk::signer::Signer as _;
use tests_utilities::onchain::Environment;
use ticktr::instruction::{create_event, setup_manager, CreateEventArgs, CreateTicketArgs};

/// ID the program is deployed with in the tests.
pub const PROGRAM_ID: Pubkey =
    solana_program::pubkey!("FoEPCgMFsBCLuopKjM4mzHiQxPqE46oAuMvY6WvgbgN");

/// Name of the wallet acting as the program's authority.
pub const MANAGER: &str = "Manager";

/// Creates a bare testing environment with the program deployed.
pub async fn init() -> Environment {
    Environment::new(
        PROGRAM_ID,
        "ticktr",
        processor!(ticktr::processor::process_instruction),
    )
    .await
}

/// Creates a testing environment where the manager has been set up.
pub async fn init_with_manager() -> Environment {
    let mut env = init().await;
    let payer = env.add_wallet(MANAGER).await;
    let Ok(instruction) = setup_manager(&payer) else {
        panic!("could not create instruction");
    };
    assert!(
        env.execute_transaction(&[instruction], &[MANAGER])
            .await
            .is_ok(),
        "could not setup the manager"
    );
    env
}

/// Creates a testing environment with a manager and one event.
pub async fn init_with_event(event_id: Pubkey, capacity: u64) -> Environment {
    let mut env = init_with_manager().await;
    let authority = env.wallets[MANAGER].pubkey();
    let Ok(instruction) = create_event(&authority, event_args(event_id, capacity)) else {
        panic!("could not create instruction");
    };
    assert!(
        env.execute_transaction(&[instruction], &[MANAGER])
            .await
            .is_ok(),
        "could not create the event"
    );
    env
}

/// Arguments for a plausible event.
pub fn event_args(event_id: Pubkey, capacity: u64) -> CreateEventArgs {
    CreateEventArgs {
        event_id,
        name: "Rust Nation Live".to_owned(),
        uri: "https://ticktr.app/events/rust-nation.json".to_owned(),
        city: "Paris".to_owned(),
        venue: "Le Zenith".to_owned(),
        artist: "The Borrow Checkers".to_owned(),
        date: "2025-07-14".to_owned(),
        time: "20:30".to_owned(),
        capacity,
    }
}

/// Arguments for a plausible ticket.
pub fn ticket_args(ticket_id: u64) -> CreateTicketArgs {
    CreateTicketArgs {
        ticket_id,
        name: "Rust Nation Live".to_owned(),
        uri: "https://ticktr.app/tickets/rust-nation.json".to_owned(),
        hall: "Main Hall".to_owned(),
        section: "A".to_owned(),
        row: "12".to_owned(),
        seat: "34".to_owned(),
        price: 50_000_000,
    }
}
