use crate::model::{DeriveParameter, DeriveParser, DeriveValue, IntermediateAttributes, ParameterType};
use quote::quote;

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let mut attributes = IntermediateAttributes::default();

        for attribute in &value.attrs {
            if attribute.path().is_ident("argot") {
                attributes = IntermediateAttributes::try_from(attribute)?;
            }
        }

        let program = match attributes.pairs.get("program") {
            Some(values) => {
                let tokens = &values
                    .first()
                    .expect("attribute pair 'program' must contain non-empty values")
                    .tokens;
                quote! { #tokens }
            }
            None => quote! { env!("CARGO_CRATE_NAME") },
        };
        let about = attributes.pairs.get("about").map(|values| {
            let tokens = values
                .first()
                .expect("attribute pair 'about' must contain non-empty values")
                .tokens
                .clone();
            DeriveValue { tokens }
        });
        let parser_name = &value.ident;

        match &value.data {
            syn::Data::Struct(ds) => {
                let parameters = match ds {
                    syn::DataStruct {
                        fields: syn::Fields::Named(ref fields),
                        ..
                    } => fields
                        .named
                        .iter()
                        .map(DeriveParameter::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                    syn::DataStruct { .. } => Vec::default(),
                };

                let remainings: Vec<&syn::Ident> = parameters
                    .iter()
                    .filter_map(|p| match &p.parameter_type {
                        ParameterType::Remaining { .. } => Some(&p.field_name),
                        _ => None,
                    })
                    .collect();
                if remainings.len() > 1 {
                    return Err(syn::Error::new(
                        value.ident.span(),
                        format!(
                            "Invalid - parser cannot have multiple remaining collectors: {:?}.",
                            remainings.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
                        ),
                    ));
                }

                Ok(DeriveParser {
                    struct_name: parser_name.clone(),
                    program_name: DeriveValue { tokens: program },
                    about,
                    parameters,
                })
            }
            _ => Err(syn::Error::new(
                value.ident.span(),
                "Invalid - derive target must be a struct with named fields.",
            )),
        }
    }
}
