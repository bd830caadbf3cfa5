use fuzzfeed_types::FieldKind;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Field, Fields, LitStr, Path, parse_macro_input};

/// Derives `fuzzfeed_types::Record` for a struct with named fields.
///
/// Field kinds come from the declared Rust types:
///
/// | Rust type                                        | Kind          |
/// |--------------------------------------------------|---------------|
/// | `String`                                         | `String`      |
/// | `bool`                                           | `Bool`        |
/// | `u8 u16 u32 u64 u128 usize i16 i32 i64 i128 isize` | `Int`       |
/// | `Vec<u8>`                                        | `Bytes`       |
/// | `Vec<String>`                                    | `StringList`  |
/// | anything else, or `#[fuzzfeed(skip)]`            | `Unsupported` |
///
/// Integer fields receive the decoded byte through `From<u8>`.
///
/// The generated impl names `::fuzzfeed_types`. Crates that only depend on
/// `fuzzfeed-consumer` point it at the re-exports with
/// `#[fuzzfeed(crate = "fuzzfeed_consumer")]` on the struct.
///
/// # Example
///
/// ```ignore
/// #[derive(Default, Record)]
/// struct Login {
///     user: String,
///     remember: bool,
///     attempts: u32,
///     #[fuzzfeed(skip)]
///     session: String,
/// }
/// ```
#[proc_macro_derive(Record, attributes(fuzzfeed))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    expand(&ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(ast: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &ast.ident;
    let krate = crate_path(&ast.attrs)?;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let fields = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Record can only be derived for structs",
            ));
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut arms = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let Some(ident) = &field.ident else {
            continue;
        };
        let kind = field_kind(field)?;
        let field_name = ident.unraw().to_string();
        let kind_ident = Ident::new(kind.variant_name(), Span::call_site());

        descriptors.push(quote! {
            #krate::FieldDescriptor::new(
                #field_name,
                #krate::FieldKind::#kind_ident,
            )
        });

        let assignment = match kind {
            FieldKind::String | FieldKind::Bool | FieldKind::Bytes => quote!(self.#ident = v),
            FieldKind::Int => quote!(self.#ident = ::core::convert::From::from(v)),
            FieldKind::StringList | FieldKind::Unsupported => continue,
        };
        arms.push(quote! {
            (#index, #krate::FieldValue::#kind_ident(v)) => #assignment,
        });
    }

    let count = descriptors.len();

    Ok(quote! {
        impl #impl_generics #krate::Record for #name #ty_generics #where_clause {
            fn fields(&self) -> &[#krate::FieldDescriptor] {
                static FIELDS: [#krate::FieldDescriptor; #count] = [#(#descriptors),*];
                &FIELDS
            }

            fn assign(&mut self, index: usize, value: #krate::FieldValue) {
                match (index, value) {
                    #(#arms)*
                    _ => {}
                }
            }
        }
    })
}

/// Path to the crate exporting `Record` and friends, from
/// `#[fuzzfeed(crate = "...")]` on the struct. Defaults to `::fuzzfeed_types`.
fn crate_path(attrs: &[Attribute]) -> syn::Result<Path> {
    let mut path = None;
    for attr in attrs {
        if !attr.path().is_ident("fuzzfeed") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                path = Some(lit.parse::<Path>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported fuzzfeed attribute, expected `crate`"))
            }
        })?;
    }
    Ok(path.unwrap_or_else(|| syn::parse_quote!(::fuzzfeed_types)))
}

/// Resolve a field's kind from `#[fuzzfeed(skip)]` or its declared type.
fn field_kind(field: &Field) -> syn::Result<FieldKind> {
    let mut skip = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("fuzzfeed") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported fuzzfeed attribute, expected `skip`"))
            }
        })?;
    }

    if skip {
        return Ok(FieldKind::Unsupported);
    }

    let ty = &field.ty;
    Ok(FieldKind::from_type_name(&quote!(#ty).to_string()))
}
