//! Derive macro for `jsonlite::Record`.
//!
//! Generates the field-by-field bridge between a struct with named fields and
//! a dict value. Each field is stored under its own name unless renamed with
//! `#[jsonlite(rename = "key")]`.

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Data, DeriveInput, Error, Fields, Generics, Ident, LitStr,
};

struct RecordField {
    ident: Ident,
    key: String,
}

struct RecordInput {
    ident: Ident,
    generics: Generics,
    fields: Vec<RecordField>,
}

fn field_key(field: &syn::Field, ident: &Ident) -> syn::Result<String> {
    let mut key = ident.to_string();
    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("jsonlite")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                key = meta.value()?.parse::<LitStr>()?.value();
                return Ok(());
            }
            Err(meta.error("unsupported jsonlite attribute"))
        })?;
    }
    Ok(key)
}

impl Parse for RecordInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let call_site = Span::call_site();
        let input = DeriveInput::parse(input)?;
        let data = match input.data {
            Data::Struct(data) => data,
            _ => return Err(Error::new(call_site, "Record can only be derived for structs")),
        };
        let named = match data.fields {
            Fields::Named(named) => named,
            _ => {
                return Err(Error::new(
                    call_site,
                    "Record requires a struct with named fields",
                ))
            }
        };
        let fields = named
            .named
            .iter()
            .map(|field| {
                // Named fields always carry an ident
                let ident = field
                    .ident
                    .clone()
                    .ok_or_else(|| Error::new(call_site, "unnamed field"))?;
                let key = field_key(field, &ident)?;
                Ok(RecordField { ident, key })
            })
            .collect::<syn::Result<Vec<_>>>()?;
        Ok(Self {
            ident: input.ident,
            generics: input.generics,
            fields,
        })
    }
}

/// Derives `jsonlite::Record` for a struct with named fields.
///
/// Every field type must implement `jsonlite::Encode` and `jsonlite::Decode`;
/// scalars and other records already do.
#[proc_macro_derive(Record, attributes(jsonlite))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as RecordInput);
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let encoders = input.fields.iter().map(|field| {
        let name = &field.ident;
        let key = &field.key;
        quote! {
            *dict.entry(#key)? = ::jsonlite::Encode::encode(&self.#name)?;
        }
    });

    let decoders = input.fields.iter().map(|field| {
        let name = &field.ident;
        let key = &field.key;
        quote! {
            #name: ::jsonlite::Decode::decode(dict.entry(#key)?)?,
        }
    });

    quote! {
        impl #impl_generics ::jsonlite::Record for #ident #ty_generics #where_clause {
            fn encode_fields(
                &self,
                dict: &mut ::jsonlite::Value,
            ) -> ::core::result::Result<(), ::jsonlite::ValueError> {
                #(#encoders)*
                ::core::result::Result::Ok(())
            }

            fn decode_fields(
                dict: &mut ::jsonlite::Value,
            ) -> ::core::result::Result<Self, ::jsonlite::ValueError> {
                ::core::result::Result::Ok(Self {
                    #(#decoders)*
                })
            }
        }
    }
    .into()
}
