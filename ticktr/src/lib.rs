// File: ticktr/src/lib.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

//! Ticktr's event ticketing On-Chain program.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;
/// Definition of the events and their PDA.
pub mod event;
/// Instructions of the Ticktr program and their builders.
pub mod instruction;
/// Definition of the program's manager PDA.
pub mod manager;
/// Handles the dispatch of the processing operations.
pub mod processor;
/// Definition of the tickets and their PDA.
pub mod ticket;

// Set the program's ID.
include!(concat!(env!("OUT_DIR"), "/program_id.rs"));

// Set the security.txt data
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Ticktr Program",
    project_url: "https://www.ticktr.app",
    contacts: "email:security@ticktr.app",
    policy: "none at this time",

    // Optional
    preferred_languages: "en"
}
