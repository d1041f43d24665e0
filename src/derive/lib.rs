// SPDX-License-Identifier: Apache-2.0

//! Derive for staticnet internal use
//!
//! [JsonDisplay]: Implement `std::fmt::Display` using the JSON form of the
//! type. A JSON string is printed without its quotes, so unit enum variants
//! display as their serde name (e.g. `malformed-input`). Falls back to the
//! Debug output when serialization fails.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

#[proc_macro_derive(JsonDisplay)]
pub fn derive_json_display(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) =
        input.generics.split_for_impl();

    let expanded = quote::quote! {
        impl #impl_generics std::fmt::Display for #name #ty_generics
            #where_clause
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match serde_json::to_string(self) {
                    Ok(s) => {
                        let unquoted = s
                            .strip_prefix('"')
                            .and_then(|s| s.strip_suffix('"'))
                            .filter(|s| !s.contains('"'));
                        write!(f, "{}", unquoted.unwrap_or(s.as_str()))
                    }
                    Err(e) => {
                        log::error!(
                            "BUG: Failed to convert {self:?} into JSON: {e}"
                        );
                        write!(f, "{self:?}")
                    }
                }
            }
        }
    };

    TokenStream::from(expanded)
}
