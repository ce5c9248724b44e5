// File: ticktr/src/ticket.rs
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
    get_timestamp,
    pda::{PdaType, TicktrPda},
};

use crate::{
    event::{check_text_length, MAX_TEXT_LEN, MAX_URI_LEN},
    instruction::CreateTicketArgs,
};

/// Record of a single issued ticket.
#[derive(BorshSerialize, BorshDeserialize, ShankType, Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    /// Identifier of the event the ticket belongs to.
    pub event: Pubkey,
    /// Index of the ticket within the event's issuance order.
    pub id: u64,
    /// Display name of the ticket.
    pub name: String,
    /// URI to the ticket's off-chain metadata.
    pub uri: String,
    /// Hall where the seat is located.
    pub hall: String,
    /// Section within the hall.
    pub section: String,
    /// Row within the section.
    pub row: String,
    /// Seat number.
    pub seat: String,
    /// Price of the ticket, in lamports.
    pub price: u64,
    /// Timestamp of the ticket's issuance.
    pub issued_at: i64,
}

impl Ticket {
    /// Creates a new ticket record from the instruction's arguments.
    ///
    /// # Parameters
    /// * `event` - Identifier of the event the ticket belongs to,
    /// * `id` - Index of the ticket within the event's issuance order,
    /// * `args` - Arguments of the `CreateTicket` instruction.
    ///
    /// # Errors
    /// If a text argument exceeds its maximum length.
    pub fn new(event: Pubkey, id: u64, args: &CreateTicketArgs) -> Result<Self, ProgramError> {
        check_text_length(&args.name, MAX_TEXT_LEN)?;
        check_text_length(&args.uri, MAX_URI_LEN)?;
        check_text_length(&args.hall, MAX_TEXT_LEN)?;
        check_text_length(&args.section, MAX_TEXT_LEN)?;
        check_text_length(&args.row, MAX_TEXT_LEN)?;
        check_text_length(&args.seat, MAX_TEXT_LEN)?;

        Ok(Self {
            event,
            id,
            name: args.name.clone(),
            uri: args.uri.clone(),
            hall: args.hall.clone(),
            section: args.section.clone(),
            row: args.row.clone(),
            seat: args.seat.clone(),
            price: args.price,
            issued_at: get_timestamp()?,
        })
    }
}

/// PDA holding an issued ticket's record.
///
/// Derived from the event's identifier and the ticket's index
/// in the event's issuance order.
#[pda(kind = PdaType::Ticket, seed = "Ticket", seed = ticket.event, seed = ticket.id)]
pub struct TicketPda {
    /// The ticket's record.
    pub ticket: Ticket,
}

impl TicketPda {
    /// Creates a new ticket PDA.
    ///
    /// # Parameters
    /// * `bump` - Bump used to derive the PDA address,
    /// * `ticket` - Record of the issued ticket.
    #[must_use]
    pub const fn new(bump: u8, ticket: Ticket) -> Self {
        Self {
            pda_type: Self::PDA_TYPE,
            bump,
            ticket,
        }
    }
}
