// File: ticktr-macro/src/lib.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

mod pda;
use pda::impl_pda;

use proc_macro::TokenStream;

/// Implements most of a PDA's boilerplate.
///
/// Adds the `pda_type` and `bump` fields to the struct, derives borsh
/// serialization and the shank account annotation, and implements the
/// `TicktrPda` trait along with `get_address` / `from_account`.
///
/// ```ignore
/// #[pda(kind = PdaType::Event, seed = "Event", seed = event.id)]
/// pub struct EventPda {
///     pub event: Event,
/// }
/// ```
#[proc_macro_attribute]
pub fn pda(attrs: TokenStream, input: TokenStream) -> TokenStream {
    impl_pda(attrs, input)
}
