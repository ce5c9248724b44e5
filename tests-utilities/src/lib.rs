// File: tests-utilities/src/lib.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

//! Common utilities for Ticktr's On-Chain tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::print_stdout)]

pub mod onchain;
