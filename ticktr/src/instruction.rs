// File: ticktr/src/instruction.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

use borsh::{to_vec, BorshDeserialize, BorshSerialize};
use shank::{ShankInstruction, ShankType};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

use crate::{event::EventPda, manager::ManagerPda, ticket::TicketPda};

/// Arguments of the `CreateEvent` instruction.
#[derive(BorshSerialize, BorshDeserialize, ShankType, Clone, Debug, PartialEq, Eq)]
pub struct CreateEventArgs {
    /// Unique identifier of the event, chosen by the manager.
    pub event_id: Pubkey,
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
    /// Date of the event.
    pub date: String,
    /// Time of the event.
    pub time: String,
    /// Maximum number of tickets that can be issued.
    pub capacity: u64,
}

/// Arguments of the `CreateTicket` instruction.
#[derive(BorshSerialize, BorshDeserialize, ShankType, Clone, Debug, PartialEq, Eq)]
pub struct CreateTicketArgs {
    /// Expected index of the ticket in the event's issuance order.
    pub ticket_id: u64,
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
}

/// Instructions of the Ticktr program.
#[derive(BorshSerialize, BorshDeserialize, ShankInstruction, Clone, Debug)]
pub enum TicktrInstruction {
    /// Checks that the program is deployed and reachable.
    ///
    /// Performs no state change.
    #[account(0, signer, name = "payer", desc = "Transaction fee payer")]
    Initialize,
    /// Creates the manager PDA, making the paying wallet the
    /// program's authority.
    ///
    /// Fails if the manager PDA already exists.
    #[account(0, writable, signer, name = "payer", desc = "Transaction fee payer and future authority")]
    #[account(1, writable, name = "manager", desc = "The program's configuration PDA")]
    #[account(2, name = "system_program", desc = "The system program")]
    SetupManager,
    /// Creates a new event.
    ///
    /// Only the manager's authority can create events.
    #[account(0, writable, signer, name = "authority", desc = "The program's authority")]
    #[account(1, name = "manager", desc = "The program's configuration PDA")]
    #[account(2, writable, name = "event", desc = "PDA of the event to create")]
    #[account(3, name = "system_program", desc = "The system program")]
    CreateEvent(CreateEventArgs),
    /// Issues a new ticket for an existing event.
    ///
    /// Only the manager's authority can issue tickets.
    #[account(0, writable, signer, name = "authority", desc = "The program's authority")]
    #[account(1, name = "manager", desc = "The program's configuration PDA")]
    #[account(2, writable, name = "event", desc = "PDA of the event the ticket belongs to")]
    #[account(3, writable, name = "ticket", desc = "PDA of the ticket to issue")]
    #[account(4, name = "system_program", desc = "The system program")]
    CreateTicket(CreateTicketArgs),
}

/// Creates an `Initialize` instruction.
///
/// # Parameters
/// * `payer` - Wallet paying the transaction's fees.
///
/// # Errors
/// If the instruction could not be serialized.
pub fn initialize(payer: &Pubkey) -> Result<Instruction, ProgramError> {
    Ok(Instruction {
        program_id: crate::ID,
        accounts: vec![AccountMeta::new_readonly(*payer, true)],
        data: to_vec(&TicktrInstruction::Initialize)?,
    })
}

/// Creates a `SetupManager` instruction.
///
/// # Parameters
/// * `payer` - Wallet paying for the manager PDA's creation,
///   and becoming the program's authority.
///
/// # Errors
/// If the instruction could not be serialized.
pub fn setup_manager(payer: &Pubkey) -> Result<Instruction, ProgramError> {
    let (manager, _) = ManagerPda::get_address(&crate::ID);
    Ok(Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(manager, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: to_vec(&TicktrInstruction::SetupManager)?,
    })
}

/// Creates a `CreateEvent` instruction.
///
/// # Parameters
/// * `authority` - The program's authority, paying for the event PDA's creation,
/// * `args` - Description of the event to create.
///
/// # Errors
/// If the instruction could not be serialized.
pub fn create_event(authority: &Pubkey, args: CreateEventArgs) -> Result<Instruction, ProgramError> {
    let (manager, _) = ManagerPda::get_address(&crate::ID);
    let (event, _) = EventPda::get_address(args.event_id, &crate::ID);
    Ok(Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(manager, false),
            AccountMeta::new(event, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: to_vec(&TicktrInstruction::CreateEvent(args))?,
    })
}

/// Creates a `CreateTicket` instruction.
///
/// # Parameters
/// * `authority` - The program's authority, paying for the ticket PDA's creation,
/// * `event_id` - Identifier of the event the ticket belongs to,
/// * `args` - Description of the ticket to issue.
///
/// # Errors
/// If the instruction could not be serialized.
pub fn create_ticket(
    authority: &Pubkey,
    event_id: Pubkey,
    args: CreateTicketArgs,
) -> Result<Instruction, ProgramError> {
    let (manager, _) = ManagerPda::get_address(&crate::ID);
    let (event, _) = EventPda::get_address(event_id, &crate::ID);
    let (ticket, _) = TicketPda::get_address(event_id, args.ticket_id, &crate::ID);
    Ok(Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(manager, false),
            AccountMeta::new(event, false),
            AccountMeta::new(ticket, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: to_vec(&TicktrInstruction::CreateTicket(args))?,
    })
}
