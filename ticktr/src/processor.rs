// File: ticktr/src/processor.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

use borsh::BorshDeserialize as _;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};
use ticktr_onchain_common::{
    check_pda_owner, check_system_program, debug,
    errors::TicktrError,
    pda::TicktrPda as _,
    security::verify_authority,
};

use crate::{
    event::{Event, EventPda},
    instruction::{CreateEventArgs, CreateTicketArgs, TicktrInstruction},
    manager::ManagerPda,
    ticket::{Ticket, TicketPda},
};

/// Main processing function, dispatching the instructions.
///
/// # Parameters
/// * `program_id` - ID of the current program,
/// * `accounts` - Accounts involved in the instruction,
/// * `instruction_data` - Serialized payload of the instruction.
///
/// # Errors
/// If the instruction could not be deserialized or its processing failed.
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let Ok(instruction) = TicktrInstruction::try_from_slice(instruction_data) else {
        return Err(ProgramError::InvalidInstructionData);
    };

    match instruction {
        TicktrInstruction::Initialize => initialize(accounts),
        TicktrInstruction::SetupManager => setup_manager(program_id, accounts),
        TicktrInstruction::CreateEvent(args) => create_event(program_id, accounts, &args),
        TicktrInstruction::CreateTicket(args) => create_ticket(program_id, accounts, &args),
    }
}

/// Accounts of the `SetupManager` instruction.
struct SetupManagerContext<'a, 'b> {
    /// Transaction fee payer and future authority.
    payer: &'a AccountInfo<'b>,
    /// The program's configuration PDA.
    manager: &'a AccountInfo<'b>,
}

impl<'a, 'b> SetupManagerContext<'a, 'b> {
    fn load(
        program_id: &Pubkey,
        accounts: &'a [AccountInfo<'b>],
    ) -> Result<Self, ProgramError> {
        let accounts_iter = &mut accounts.iter();
        let payer = next_account_info(accounts_iter)?;
        let manager = next_account_info(accounts_iter)?;
        let system_program = next_account_info(accounts_iter)?;

        check_system_program!(system_program);
        check_pda_owner!(program_id, manager);

        Ok(Self { payer, manager })
    }
}

/// Accounts of the `CreateEvent` instruction.
struct CreateEventContext<'a, 'b> {
    /// The program's authority.
    authority: &'a AccountInfo<'b>,
    /// The program's configuration PDA.
    manager: &'a AccountInfo<'b>,
    /// PDA of the event to create.
    event: &'a AccountInfo<'b>,
}

impl<'a, 'b> CreateEventContext<'a, 'b> {
    fn load(
        program_id: &Pubkey,
        accounts: &'a [AccountInfo<'b>],
    ) -> Result<Self, ProgramError> {
        let accounts_iter = &mut accounts.iter();
        let authority = next_account_info(accounts_iter)?;
        let manager = next_account_info(accounts_iter)?;
        let event = next_account_info(accounts_iter)?;
        let system_program = next_account_info(accounts_iter)?;

        check_system_program!(system_program);
        check_pda_owner!(program_id, manager, event);

        Ok(Self {
            authority,
            manager,
            event,
        })
    }
}

/// Accounts of the `CreateTicket` instruction.
struct CreateTicketContext<'a, 'b> {
    /// The program's authority.
    authority: &'a AccountInfo<'b>,
    /// The program's configuration PDA.
    manager: &'a AccountInfo<'b>,
    /// PDA of the event the ticket belongs to.
    event: &'a AccountInfo<'b>,
    /// PDA of the ticket to issue.
    ticket: &'a AccountInfo<'b>,
}

impl<'a, 'b> CreateTicketContext<'a, 'b> {
    fn load(
        program_id: &Pubkey,
        accounts: &'a [AccountInfo<'b>],
    ) -> Result<Self, ProgramError> {
        let accounts_iter = &mut accounts.iter();
        let authority = next_account_info(accounts_iter)?;
        let manager = next_account_info(accounts_iter)?;
        let event = next_account_info(accounts_iter)?;
        let ticket = next_account_info(accounts_iter)?;
        let system_program = next_account_info(accounts_iter)?;

        check_system_program!(system_program);
        check_pda_owner!(program_id, manager, event, ticket);

        Ok(Self {
            authority,
            manager,
            event,
            ticket,
        })
    }
}

/// Checks that the program is deployed and reachable.
///
/// No state is created or modified.
fn initialize(accounts: &[AccountInfo]) -> ProgramResult {
    msg!("Ticktr program: initialize");
    let accounts_iter = &mut accounts.iter();
    let payer = next_account_info(accounts_iter)?;
    if !payer.is_signer {
        return Err(TicktrError::InvalidSigner.into());
    }
    debug!("initialize requested by {}", payer.key);
    Ok(())
}

/// Creates the manager PDA, making the payer the program's authority.
fn setup_manager(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    msg!("Ticktr program: setup manager");
    let ctx = SetupManagerContext::load(program_id, accounts)?;

    if !ctx.payer.is_signer {
        return Err(TicktrError::InvalidSigner.into());
    }
    // There can only ever be one manager per deployment.
    if ctx.manager.lamports() > 0 {
        return Err(TicktrError::UniqueOperationAlreadyExecuted.into());
    }

    let (address, bump) = ManagerPda::get_address(program_id);
    if address != *ctx.manager.key {
        return Err(TicktrError::MissingPDAAccount.into());
    }

    let manager = ManagerPda::new(bump, *ctx.payer.key);
    manager.create(ctx.manager, ctx.payer, program_id)?;

    debug!("manager created with authority {}", ctx.payer.key);
    Ok(())
}

/// Creates a new event's PDA.
fn create_event(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: &CreateEventArgs,
) -> ProgramResult {
    msg!("Ticktr program: create event");
    let ctx = CreateEventContext::load(program_id, accounts)?;

    if ctx.manager.lamports() == 0 {
        return Err(TicktrError::MissingPDAAccount.into());
    }
    let manager = ManagerPda::from_account(ctx.manager)?;
    verify_authority(ctx.authority, &manager.authority)?;

    if ctx.event.lamports() > 0 {
        return Err(TicktrError::AccountAlreadyExists.into());
    }
    let (address, bump) = EventPda::get_address(args.event_id, program_id);
    if address != *ctx.event.key {
        return Err(TicktrError::MissingPDAAccount.into());
    }

    let event = Event::new(args)?;
    let pda = EventPda::new(bump, event);
    pda.create(ctx.event, ctx.authority, program_id)?;

    debug!("event {} created", args.event_id);
    Ok(())
}

/// Issues a new ticket's PDA and bumps the event's issuance counter.
fn create_ticket(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: &CreateTicketArgs,
) -> ProgramResult {
    msg!("Ticktr program: create ticket");
    let ctx = CreateTicketContext::load(program_id, accounts)?;

    if ctx.manager.lamports() == 0 {
        return Err(TicktrError::MissingPDAAccount.into());
    }
    let manager = ManagerPda::from_account(ctx.manager)?;
    verify_authority(ctx.authority, &manager.authority)?;

    if ctx.event.lamports() == 0 {
        return Err(TicktrError::EventDoesNotExist.into());
    }
    let mut event_pda = EventPda::from_account(ctx.event)?;

    // Tickets are issued in order: the client echoes back the index it
    // expects so that a stale view of the event is rejected.
    if args.ticket_id != event_pda.event.tickets_issued {
        return Err(TicktrError::InvalidTicketId.into());
    }
    if event_pda.event.tickets_issued >= event_pda.event.capacity {
        return Err(TicktrError::EventAtFullCapacity.into());
    }

    let (address, bump) = TicketPda::get_address(event_pda.event.id, args.ticket_id, program_id);
    if address != *ctx.ticket.key {
        return Err(TicktrError::MissingPDAAccount.into());
    }
    if ctx.ticket.lamports() > 0 {
        return Err(TicktrError::AccountAlreadyExists.into());
    }

    let ticket = Ticket::new(event_pda.event.id, args.ticket_id, args)?;
    let pda = TicketPda::new(bump, ticket);
    pda.create(ctx.ticket, ctx.authority, program_id)?;

    event_pda.event.tickets_issued = event_pda
        .event
        .tickets_issued
        .checked_add(1)
        .ok_or(TicktrError::IntegerOverflow)?;
    event_pda.write(ctx.event, ctx.authority)?;

    debug!(
        "ticket {} issued for event {}",
        args.ticket_id,
        event_pda.event.id
    );
    Ok(())
}
