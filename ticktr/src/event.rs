// File: ticktr/src/event.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

use borsh::{BorshDeserialize, BorshSerialize};
use shank::ShankType;
use solana_program::{program_error::ProgramError, pubkey::Pubkey};
use ticktr_macro::pda;
use ticktr_onchain_common::{
    errors::TicktrError,
    get_timestamp,
    pda::{PdaType, TicktrPda},
};

use crate::instruction::CreateEventArgs;

/// Maximum byte length for an event's text fields (name, city, venue, ...).
pub const MAX_TEXT_LEN: usize = 64;
/// Maximum byte length for an event's metadata URI.
pub const MAX_URI_LEN: usize = 200;

/// Checks that a string argument fits within the given byte length.
pub(crate) fn check_text_length(value: &str, max: usize) -> Result<(), ProgramError> {
    if value.len() > max {
        return Err(TicktrError::ArgumentTooLong.into());
    }
    Ok(())
}

/// Record of a single event.
#[derive(BorshSerialize, BorshDeserialize, ShankType, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// Unique identifier of the event, chosen by the manager.
    pub id: Pubkey,
    /// Display name of the event.
    pub name: String,
    /// URI to the event's off-chain metadata.
    pub uri: String,
    /// City where the event takes place.
    pub city: String,
    /// Venue hosting the event.
    pub venue: String,
    /// Headline artist.
    pub artist: String,
    /// Date of the event (free-form, e.g. "2025-07-14").
    pub date: String,
    /// Time of the event (free-form, e.g. "20:30").
    pub time: String,
    /// Maximum number of tickets that can be issued.
    pub capacity: u64,
    /// Number of tickets issued so far.
    pub tickets_issued: u64,
    /// Timestamp of the event's creation.
    pub created_at: i64,
}

impl Event {
    /// Creates a new event record from the instruction's arguments.
    ///
    /// # Errors
    /// If a text argument exceeds its maximum length,
    /// or if the capacity is zero.
    pub fn new(args: &CreateEventArgs) -> Result<Self, ProgramError> {
        check_text_length(&args.name, MAX_TEXT_LEN)?;
        check_text_length(&args.uri, MAX_URI_LEN)?;
        check_text_length(&args.city, MAX_TEXT_LEN)?;
        check_text_length(&args.venue, MAX_TEXT_LEN)?;
        check_text_length(&args.artist, MAX_TEXT_LEN)?;
        check_text_length(&args.date, MAX_TEXT_LEN)?;
        check_text_length(&args.time, MAX_TEXT_LEN)?;
        if args.capacity == 0 {
            return Err(TicktrError::InvalidAmount.into());
        }

        Ok(Self {
            id: args.event_id,
            name: args.name.clone(),
            uri: args.uri.clone(),
            city: args.city.clone(),
            venue: args.venue.clone(),
            artist: args.artist.clone(),
            date: args.date.clone(),
            time: args.time.clone(),
            capacity: args.capacity,
            tickets_issued: 0,
            created_at: get_timestamp()?,
        })
    }
}

/// PDA holding an event's record.
///
/// One per event, derived from the event's unique identifier.
#[pda(kind = PdaType::Event, seed = "Event", seed = event.id)]
pub struct EventPda {
    /// The event's record.
    pub event: Event,
}

impl EventPda {
    /// Creates a new event PDA.
    ///
    /// # Parameters
    /// * `bump` - Bump used to derive the PDA address,
    /// * `event` - Record of the event.
    #[must_use]
    pub const fn new(bump: u8, event: Event) -> Self {
        Self {
            pda_type: Self::PDA_TYPE,
            bump,
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]
    #![allow(clippy::indexing_slicing)]

    use solana_program::account_info::AccountInfo;

    use super::*;

    fn plausible_event(id: Pubkey) -> Event {
        Event {
            id,
            name: "Rust Nation Live".to_owned(),
            uri: "https://ticktr.app/events/rust-nation.json".to_owned(),
            city: "Paris".to_owned(),
            venue: "Le Zenith".to_owned(),
            artist: "The Borrow Checkers".to_owned(),
            date: "2025-07-14".to_owned(),
            time: "20:30".to_owned(),
            capacity: 100,
            tickets_issued: 0,
            created_at: 1_741_046_400,
        }
    }

    #[test]
    fn from_account_rejects_wrong_pda_type() {
        let key = Pubkey::new_unique();
        let (_address, bump) = EventPda::get_address(key, &crate::ID);
        let pda = EventPda::new(bump, plausible_event(key));
        let Ok(mut data) = borsh::to_vec(&pda) else {
            panic!("could not serialize the PDA");
        };
        // A ticket's tag on an otherwise well formed event record.
        data[0] = PdaType::Ticket as u8;

        let mut lamports = 1_000_000_u64;
        let owner = crate::ID;
        let account = AccountInfo::new(
            &key,
            false,
            true,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );
        assert_eq!(
            EventPda::from_account(&account).err(),
            Some(TicktrError::InvalidPdaType.into())
        );
    }
}
