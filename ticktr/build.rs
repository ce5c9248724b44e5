// File: ticktr/build.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

#![allow(clippy::unwrap_used)]
#![allow(clippy::print_stdout)]

use std::{env, fs, path::Path};

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let path_id = Path::new(&out_dir).join("program_id.rs");

    match env::var("TICKTR_MODE").unwrap_or_default().as_str() {
        "MAINNET" => write_mainnet_id(&path_id),
        "DEVNET" => write_devnet_id(&path_id),
        "TESTING" => write_testing(&path_id),
        _ => {
            println!(
                "cargo:warning=Compiling ticktr with unrecognized mode '{:?}': using TESTING",
                env::var("TICKTR_MODE")
            );
            write_testing(&path_id);
        }
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=TICKTR_MODE");
}

fn write_testing(path_id: &Path) {
    write_testing_id(path_id);
    println!("cargo:rustc-cfg=feature=\"debug-msg\"");
}

fn write_testing_id(dest_path: &Path) {
    fs::write(
        dest_path,
        "
solana_program::declare_id!(\"FoEPCgMFsBCLuopKjM4mzHiQxPqE46oAuMvY6WvgbgN\");
",
    )
    .unwrap();
}

fn write_devnet_id(dest_path: &Path) {
    fs::write(
        dest_path,
        "
solana_program::declare_id!(\"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA\");
",
    )
    .unwrap();
}

fn write_mainnet_id(dest_path: &Path) {
    fs::write(
        dest_path,
        "
solana_program::declare_id!(\"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA\");
",
    )
    .unwrap();
}
