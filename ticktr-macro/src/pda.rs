// File: ticktr-macro/src/pda.rs
// Project: ticktr-onchain
// Creation date: Tuesday 04 March 2025
// Author: Ticktr Labs <dev@ticktr.app>
// -----
// Copyright © 2025 <Ticktr> - All rights reserved

use darling::{ast::NestedMeta, util::parse_expr, Error, FromMeta};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse::Parser, parse_macro_input, DeriveInput, Expr, ExprField, ExprLit, ExprPath, Ident,
    Member,
};

#[derive(Debug, FromMeta)]
struct PdaArgs {
    kind: syn::Path,
    #[darling(multiple, with = parse_expr::preserve_str_literal)]
    seed: Vec<Expr>,
}

// Get the seeds as they will be used to sign an instruction.
fn get_signing_seed(seed: &Expr) -> TokenStream2 {
    match seed {
        Expr::Lit(ExprLit { lit: value, .. }) => quote! { Seed::from(#value) },
        Expr::Field(field) => quote! { Seed::from(self.#field) },
        Expr::Path(ExprPath { path, .. }) => {
            if path.segments.len() > 1 {
                panic!("seed should either be a literal, an ident or a field");
            }
            quote! { Seed::from(self.#path) }
        }
        _ => panic!("seed should be either a literal, an ident or a field"),
    }
}

// Retrieve for each seed attribute the tokens used in get_address()
// and the parameter ident if the seed is dynamic.
fn get_address_seed(expr: &Expr) -> (TokenStream2, Option<Ident>) {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => (quote! { &#lit.as_bytes().to_vec() }, None),
        Expr::Field(ExprField {
            member: Member::Named(ident),
            ..
        }) => (quote! { &#ident }, Some(ident.clone())),
        Expr::Path(ExprPath { path, .. }) => {
            let ident = path.segments.first().unwrap().ident.clone();
            (quote! { &#ident }, Some(ident.clone()))
        }
        _ => (quote! {}, None),
    }
}

// Builds the get_address() function: one generic parameter per dynamic
// seed (they don't necessarily share a type), literal seeds inlined.
fn make_get_address_fn(crate_name: &Ident, seeds: &[Expr]) -> TokenStream2 {
    let data: Vec<(TokenStream2, Option<Ident>)> = seeds.iter().map(get_address_seed).collect();

    let mut generics = Vec::new();
    let mut params = quote! {};
    let mut casts = quote! {};
    let mut address_seeds = quote! {};
    let mut doc = String::new();

    for (idx, (seed, ident)) in data.iter().enumerate() {
        if let Some(ident) = ident {
            let generic = format_ident!("I{idx}");
            params = quote! { #params #ident: #generic, };
            casts = quote! {
                #casts
                let #ident: Seed = #ident.into();
                let #ident: Vec<u8> = #ident.into();
            };
            doc = format!("{doc}* `{ident}`\n");
            generics.push(generic);
        }

        if address_seeds.is_empty() {
            address_seeds = quote! { #seed };
        } else {
            address_seeds = quote! { #address_seeds, #seed };
        }
    }

    let doc = format!(
        "Get the PDA's address.\n\n All parameters that are not the program_id must implement `Into<Seed>`.\n\n # Parameters\n {doc} * `program_id` - Program owning the PDA.\n\n # Returns\n\n * Tuple of public key of the PDA and associated bump"
    );

    if generics.is_empty() {
        quote! {
            #[doc = #doc]
            #[must_use]
            pub fn get_address(program_id: &Pubkey) -> (Pubkey, u8) {
                Pubkey::find_program_address(&[#address_seeds], program_id)
            }
        }
    } else {
        quote! {
            #[doc = #doc]
            #[must_use]
            pub fn get_address<#(#generics),*>(#params program_id: &Pubkey) -> (Pubkey, u8)
            where
                #(#generics: Into<#crate_name::pda::Seed>),*
            {
                use #crate_name::pda::Seed;

                #casts
                Pubkey::find_program_address(&[#address_seeds], program_id)
            }
        }
    }
}

// Make the seeds used to sign a transaction, as returned by TicktrPda::seeds().
fn make_signing_seeds(seeds: &[Expr]) -> TokenStream2 {
    let res = seeds
        .iter()
        .map(get_signing_seed)
        .fold(quote! {}, |acc, elt| {
            if acc.is_empty() {
                quote! { #elt }
            } else {
                quote! { #acc, #elt }
            }
        });

    quote! { Vec::from([#res, Seed::from(self.bump)]) }
}

// Implements most of a PDA's boilerplate.
pub fn impl_pda(attrs: TokenStream, input: TokenStream) -> TokenStream {
    let mut ast = parse_macro_input!(input as DeriveInput);
    let name = ast.ident.clone();

    // Parse argument tokens as a list of NestedMeta items
    let attr_args = match NestedMeta::parse_meta_list(attrs.into()) {
        Ok(v) => v,
        Err(e) => {
            return TokenStream::from(Error::from(e).write_errors());
        }
    };

    let PdaArgs { seed, kind } = match PdaArgs::from_list(&attr_args) {
        Ok(params) => params,
        Err(error) => {
            return TokenStream::from(error.write_errors());
        }
    };

    if seed.is_empty() {
        return TokenStream::from(Error::missing_field("seed").write_errors());
    }

    let crate_ident = match std::env::var("CARGO_PKG_NAME").unwrap().as_str() {
        "ticktr-onchain-common" => format_ident!("crate"),
        _ => format_ident!("ticktr_onchain_common"),
    };
    let get_address_fn = make_get_address_fn(&crate_ident, &seed);
    let signing_seeds = make_signing_seeds(&seed);

    match &mut ast.data {
        syn::Data::Struct(ref mut struct_data) => {
            if let syn::Fields::Named(fields) = &mut struct_data.fields {
                fields.named.insert(
                    0,
                    syn::Field::parse_named
                        .parse2(quote! {
                            /// Type of the PDA
                            pub pda_type: PdaType
                        })
                        .unwrap(),
                );
                fields.named.insert(
                    1,
                    syn::Field::parse_named
                        .parse2(quote! {
                            /// Bump for the PDA
                            pub bump: u8
                        })
                        .unwrap(),
                );
            }

            quote! {
                #[derive(Debug, borsh::BorshSerialize, borsh::BorshDeserialize, shank::ShankAccount)]
                #ast

                #[automatically_derived]
                impl TicktrPda for #name {

                    const PDA_TYPE: PdaType = #kind;

                    fn get_bump(&self) -> u8 {
                        self.bump
                    }

                    fn is_valid(&self) -> bool {
                        self.pda_type == Self::PDA_TYPE
                    }

                    #[must_use]
                    fn seeds(&self) -> Vec<Vec<u8>> {
                        use #crate_ident::pda::Seed;
                        let seeds = #signing_seeds;
                        let mut res = Vec::new();
                        for seed in seeds {
                            let seed: Vec<u8> = seed.into();
                            res.push(seed);
                        }
                        res
                    }
                }

                #[automatically_derived]
                impl #name {
                    #get_address_fn

                    /// Loads a PDA's data from an account.
                    ///
                    /// # Parameters
                    /// * `account` - Account from which to read the data
                    ///
                    /// # Errors
                    /// If the given account does not contain the expected data.
                    pub fn from_account(account: &solana_program::account_info::AccountInfo)
                        -> core::result::Result<Self, solana_program::program_error::ProgramError> {
                        let data = account.try_borrow_data()?;
                        let res = Self::try_from_slice(&data)?;
                        if res.pda_type != Self::PDA_TYPE {
                            return Err(#crate_ident::errors::TicktrError::InvalidPdaType.into());
                        }
                        Ok(res)
                    }
                }
            }
            .into()
        }
        _ => syn::Error::new(
            ast.ident.span(),
            "the PDA attribute can only be used on a struct,",
        )
        .into_compile_error()
        .into(),
    }
}
