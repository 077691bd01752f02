//! Implementation of the `#[derive(Semigroup)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, parse_macro_input, parse_quote};

/// Main implementation of the Semigroup derive macro.
pub fn derive_semigroup_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    match &input.data {
        Data::Struct(data_struct) => generate_struct_combine(input, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Semigroup can only be derived for structs, not enums. Implement it by hand to choose how variants merge.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Semigroup cannot be derived for unions.")
                .to_compile_error()
        }
    }
}

fn generate_struct_combine(input: &DeriveInput, fields: &Fields) -> TokenStream2 {
    let name = &input.ident;

    let body = match fields {
        Fields::Named(named_fields) => {
            let merged = named_fields.named.iter().filter_map(|field| {
                let field_name = field.ident.as_ref()?;
                Some(quote! {
                    #field_name: ::lambars_outcome::typeclass::Semigroup::combine(
                        self.#field_name,
                        other.#field_name,
                    )
                })
            });
            quote! { Self { #(#merged),* } }
        }
        Fields::Unnamed(unnamed_fields) => {
            let merged = (0..unnamed_fields.unnamed.len()).map(|position| {
                let index = Index::from(position);
                quote! {
                    ::lambars_outcome::typeclass::Semigroup::combine(self.#index, other.#index)
                }
            });
            quote! { Self(#(#merged),*) }
        }
        Fields::Unit => {
            return syn::Error::new_spanned(
                name,
                "Semigroup cannot be derived for unit structs (structs with no fields).",
            )
            .to_compile_error();
        }
    };

    let mut generics = input.generics.clone();
    let where_clause = generics.make_where_clause();
    for field in fields {
        let field_type = &field.ty;
        where_clause
            .predicates
            .push(parse_quote!(#field_type: ::lambars_outcome::typeclass::Semigroup));
    }
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::lambars_outcome::typeclass::Semigroup for #name #type_generics #where_clause {
            #[inline]
            fn combine(self, other: Self) -> Self {
                #body
            }
        }
    }
}
