// File: ticktr-onchain-common/src/pda/mod.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

mod account;
mod seed;

pub use account::*;
pub use seed::*;
