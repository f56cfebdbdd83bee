//! Implementation of the `#[derive(ValidatedField)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

pub fn derive_validated_field_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_field_impls(&input, &data_struct.fields),
        Data::Enum(_) | Data::Union(_) => syn::Error::new_spanned(
            &input.ident,
            "ValidatedField can only be derived for single-field tuple structs.",
        )
        .to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn generate_field_impls(input: &DeriveInput, fields: &Fields) -> TokenStream2 {
    let name = &input.ident;

    match fields {
        Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => {}
        _ => {
            return syn::Error::new_spanned(
                name,
                "ValidatedField requires a tuple struct with exactly one `String` field.",
            )
            .to_compile_error();
        }
    }

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "ValidatedField does not support generics.")
            .to_compile_error();
    }

    let field_name = name.to_string();

    quote! {
        impl ::contact_lifecycle::simple_types::validated_field::sealed::Wrap for #name {
            #[inline]
            fn wrap(raw: ::std::string::String) -> Self {
                Self(raw)
            }
        }

        impl ::contact_lifecycle::simple_types::ValidatedField for #name {
            const FIELD_NAME: &'static str = #field_name;

            #[inline]
            fn value(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter.write_str(&self.0)
            }
        }

        impl ::core::convert::AsRef<str> for #name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    }
}
