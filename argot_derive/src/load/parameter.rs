use crate::load::incompatible_error;
use crate::model::{DeriveParameter, DeriveValue, IntermediateAttributes, ParameterType};
use quote::{quote, ToTokens};

impl TryFrom<&syn::Field> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let mut attributes = IntermediateAttributes::default();

        for attribute in &value.attrs {
            if attribute.path().is_ident("argot") {
                attributes = IntermediateAttributes::try_from(attribute)?;
            }
        }

        let field_name = value.ident.clone().unwrap();
        let explicit_option = attributes.singletons.contains("option");
        let explicit_positional = attributes.singletons.contains("positional");
        let explicit_remaining = attributes.singletons.contains("remaining");
        let short = match attributes.pairs.get("short") {
            Some(values) => {
                let tokens = values
                    .first()
                    .expect("attribute pair 'short' must contain non-empty values")
                    .tokens
                    .clone();
                Some(DeriveValue { tokens })
            }
            None => None,
        };
        let explicit_cardinality = match attributes.pairs.get("cardinality") {
            Some(values) => {
                let tokens = values
                    .first()
                    .expect("attribute pair 'cardinality' must contain non-empty values")
                    .tokens
                    .clone();
                Some(DeriveValue { tokens })
            }
            None => None,
        };
        let help = match attributes.pairs.get("help") {
            Some(values) => {
                let tokens = values
                    .first()
                    .expect("attribute pair 'help' must contain non-empty values")
                    .tokens
                    .clone();
                Some(DeriveValue { tokens })
            }
            None => None,
        };

        if explicit_option && explicit_positional {
            return Err(incompatible_error(
                &field_name,
                "#[argot(option)]",
                "#[argot(positional)]",
            ));
        }

        if explicit_option && explicit_remaining {
            return Err(incompatible_error(
                &field_name,
                "#[argot(option)]",
                "#[argot(remaining)]",
            ));
        }

        if explicit_positional && explicit_remaining {
            return Err(incompatible_error(
                &field_name,
                "#[argot(positional)]",
                "#[argot(remaining)]",
            ));
        }

        let parameter_type = match &value.ty {
            syn::Type::Path(path) => match &path.path.segments.first() {
                Some(segment) => {
                    let ident = segment.ident.to_string();

                    match ident.as_str() {
                        "Option" => {
                            disallow(
                                &field_name,
                                "Option<..>",
                                &[
                                    (&explicit_positional, "positional"),
                                    (&explicit_remaining, "remaining"),
                                    (&explicit_cardinality.is_some(), "cardinality = .."),
                                ],
                            )?;

                            ParameterType::OptionalOption { short }
                        }
                        "Vec" | "HashSet" => {
                            if explicit_remaining {
                                let cardinality = explicit_cardinality.unwrap_or(DeriveValue {
                                    tokens: quote! { Cardinality::AtLeast(0) },
                                });
                                ParameterType::Remaining { cardinality }
                            } else {
                                let cardinality = explicit_cardinality.unwrap_or(DeriveValue {
                                    tokens: quote! { Cardinality::AtLeast(1) },
                                });

                                if explicit_option {
                                    ParameterType::SequenceOption { cardinality, short }
                                } else {
                                    ParameterType::SequencePositional { cardinality }
                                }
                            }
                        }
                        "bool" => {
                            disallow(
                                &field_name,
                                "bool",
                                &[
                                    (&explicit_positional, "positional"),
                                    (&explicit_remaining, "remaining"),
                                    (&explicit_cardinality.is_some(), "cardinality = .."),
                                ],
                            )?;

                            ParameterType::Switch { short }
                        }
                        _ => {
                            disallow(
                                &field_name,
                                ident.as_str(),
                                &[
                                    (&explicit_remaining, "remaining"),
                                    (&explicit_cardinality.is_some(), "cardinality = .."),
                                ],
                            )?;

                            if explicit_option {
                                ParameterType::ScalarOption { short }
                            } else {
                                ParameterType::ScalarPositional
                            }
                        }
                    }
                }
                None => {
                    let tts = &value.to_token_stream();
                    let type_string = quote! {
                        #tts
                    };
                    panic!("Empty field path: {type_string}");
                }
            },
            _ => {
                let tts = &value.ty.to_token_stream();
                let field_string = quote! {
                    #tts
                };
                panic!("Unparseable field: {field_string}");
            }
        };

        Ok(DeriveParameter {
            field_name,
            parameter_type,
            help,
        })
    }
}

fn disallow(
    field_name: &syn::Ident,
    antecedent: impl Into<String>,
    condition_names: &[(&bool, &str)],
) -> Result<(), syn::Error> {
    let antecedent = antecedent.into();

    for (condition, name) in condition_names {
        if **condition {
            return Err(incompatible_error(
                field_name,
                antecedent.as_str(),
                format!("#[argot({name})]").as_str(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeriveValue;
    use crate::test::assert_contains;
    use proc_macro2::Literal;
    use proc_macro2::Span;
    use quote::ToTokens;
    use syn::{parse_quote, AngleBracketedGenericArguments, PathArguments, PathSegment};

    fn field(name: &str, type_ident: &str, parameterized: bool, attrs: Vec<syn::Attribute>) -> syn::Field {
        let mut segments = syn::punctuated::Punctuated::new();
        let arguments = if parameterized {
            PathArguments::AngleBracketed(AngleBracketedGenericArguments {
                colon2_token: None,
                lt_token: Default::default(),
                args: Default::default(),
                gt_token: Default::default(),
            })
        } else {
            PathArguments::None
        };
        segments.push_value(PathSegment {
            ident: ident(type_ident),
            arguments,
        });
        syn::Field {
            attrs,
            vis: syn::Visibility::Inherited,
            mutability: syn::FieldMutability::None,
            ident: Some(ident(name)),
            colon_token: None,
            ty: syn::Type::Path(syn::TypePath {
                qself: None,
                path: syn::Path {
                    leading_colon: None,
                    segments,
                },
            }),
        }
    }

    #[test]
    #[should_panic]
    fn construct_derive_parameter_unknown_type() {
        // Setup
        let input: syn::Field = syn::Field {
            attrs: vec![],
            vis: syn::Visibility::Inherited,
            mutability: syn::FieldMutability::None,
            ident: Some(ident("my_field")),
            colon_token: None,
            ty: syn::Type::Verbatim(Literal::string("moot").into_token_stream()),
        };

        // Execute & verify
        let _ = DeriveParameter::try_from(&input).unwrap();
    }

    #[test]
    #[should_panic]
    fn construct_derive_parameter_empty() {
        // Setup
        let segments = syn::punctuated::Punctuated::new();
        let input: syn::Field = syn::Field {
            attrs: vec![],
            vis: syn::Visibility::Inherited,
            mutability: syn::FieldMutability::None,
            ident: Some(ident("my_field")),
            colon_token: None,
            ty: syn::Type::Path(syn::TypePath {
                qself: None,
                path: syn::Path {
                    leading_colon: None,
                    segments,
                },
            }),
        };

        // Execute & verify
        let _ = DeriveParameter::try_from(&input).unwrap();
    }

    //# Implicit construction

    #[test]
    fn construct_scalar_positional() {
        // Setup
        let input = field("my_field", "usize", false, vec![]);

        // Execute
        let derive_parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            derive_parameter,
            DeriveParameter {
                field_name: ident("my_field"),
                parameter_type: ParameterType::ScalarPositional,
                help: None,
            }
        );
    }

    #[test]
    fn construct_optional_option() {
        // Setup
        let input = field("my_field", "Option", true, vec![]);

        // Execute
        let derive_parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            derive_parameter,
            DeriveParameter {
                field_name: ident("my_field"),
                parameter_type: ParameterType::OptionalOption { short: None },
                help: None,
            }
        );
    }

    #[test]
    fn construct_optional_option_short() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argot(short = 'm')]
        };
        let input = field("my_field", "Option", true, vec![attribute]);

        // Execute
        let derive_parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            derive_parameter,
            DeriveParameter {
                field_name: ident("my_field"),
                parameter_type: ParameterType::OptionalOption {
                    short: Some(DeriveValue {
                        tokens: Literal::character('m').into_token_stream(),
                    }),
                },
                help: None,
            }
        );
    }

    #[test]
    fn construct_switch() {
        // Setup
        let input = field("my_field", "bool", false, vec![]);

        // Execute
        let derive_parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            derive_parameter,
            DeriveParameter {
                field_name: ident("my_field"),
                parameter_type: ParameterType::Switch { short: None },
                help: None,
            }
        );
    }

    #[test]
    fn construct_sequence_positional() {
        // Setup
        let input = field("my_field", "Vec", true, vec![]);

        // Execute
        let derive_parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            derive_parameter,
            DeriveParameter {
                field_name: ident("my_field"),
                parameter_type: ParameterType::SequencePositional {
                    cardinality: DeriveValue {
                        tokens: quote! { Cardinality::AtLeast(1) }
                    }
                },
                help: None,
            }
        );
    }

    #[test]
    fn construct_with_help() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argot(help = "abc 123")]
        };
        let input = field("my_field", "usize", false, vec![attribute]);

        // Execute
        let derive_parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            derive_parameter,
            DeriveParameter {
                field_name: ident("my_field"),
                parameter_type: ParameterType::ScalarPositional,
                help: Some(DeriveValue {
                    tokens: Literal::string("abc 123").to_token_stream(),
                }),
            }
        );
    }

    //# Explicit construction

    #[test]
    fn construct_scalar_option() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argot(option)]
        };
        let input = field("my_field", "usize", false, vec![attribute]);

        // Execute
        let derive_parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            derive_parameter,
            DeriveParameter {
                field_name: ident("my_field"),
                parameter_type: ParameterType::ScalarOption { short: None },
                help: None,
            }
        );
    }

    #[test]
    fn construct_scalar_option_short() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argot(option, short = 'm')]
        };
        let input = field("my_field", "usize", false, vec![attribute]);

        // Execute
        let derive_parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            derive_parameter,
            DeriveParameter {
                field_name: ident("my_field"),
                parameter_type: ParameterType::ScalarOption {
                    short: Some(DeriveValue {
                        tokens: Literal::character('m').into_token_stream(),
                    })
                },
                help: None,
            }
        );
    }

    #[test]
    fn construct_sequence_option() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argot(option, cardinality = Cardinality::Between(2, 4))]
        };
        let input = field("my_field", "Vec", true, vec![attribute]);

        // Execute
        let derive_parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            derive_parameter,
            DeriveParameter {
                field_name: ident("my_field"),
                parameter_type: ParameterType::SequenceOption {
                    cardinality: DeriveValue {
                        tokens: quote! { Cardinality::Between(2, 4) }
                    },
                    short: None,
                },
                help: None,
            }
        );
    }

    #[test]
    fn construct_remaining() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argot(remaining)]
        };
        let input = field("my_field", "Vec", true, vec![attribute]);

        // Execute
        let derive_parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            derive_parameter,
            DeriveParameter {
                field_name: ident("my_field"),
                parameter_type: ParameterType::Remaining {
                    cardinality: DeriveValue {
                        tokens: quote! { Cardinality::AtLeast(0) }
                    }
                },
                help: None,
            }
        );
    }

    #[test]
    fn construct_superfluous_short() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argot(positional, short = 'c')]
        };
        let input = field("my_field", "usize", false, vec![attribute]);

        // Execute
        let derive_parameter = DeriveParameter::try_from(&input).unwrap();

        // Verify
        assert_eq!(
            derive_parameter,
            DeriveParameter {
                field_name: ident("my_field"),
                parameter_type: ParameterType::ScalarPositional,
                help: None,
            },
        );
    }

    //# Invalid construction

    #[test]
    fn construct_option_positional() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argot(option, positional)]
        };
        let input = field("my_field", "usize", false, vec![attribute]);

        // Execute
        let error = DeriveParameter::try_from(&input).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "Invalid - field cannot be both");
        assert_contains!(error.to_string(), "#[argot(option)]");
        assert_contains!(error.to_string(), "#[argot(positional)]");
    }

    #[test]
    fn construct_option_remaining() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argot(option, remaining)]
        };
        let input = field("my_field", "Vec", true, vec![attribute]);

        // Execute
        let error = DeriveParameter::try_from(&input).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "Invalid - field cannot be both");
        assert_contains!(error.to_string(), "#[argot(option)]");
        assert_contains!(error.to_string(), "#[argot(remaining)]");
    }

    //# Invalid construction via implicit

    #[test]
    fn construct_optional_positional() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argot(positional)]
        };
        let input = field("my_field", "Option", true, vec![attribute]);

        // Execute
        let error = DeriveParameter::try_from(&input).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "Invalid - field cannot be both");
        assert_contains!(error.to_string(), "Option<..>");
        assert_contains!(error.to_string(), "#[argot(positional)]");
    }

    #[test]
    fn construct_optional_cardinality() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argot(cardinality = Cardinality::AtLeast(0))]
        };
        let input = field("my_field", "Option", true, vec![attribute]);

        // Execute
        let error = DeriveParameter::try_from(&input).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "Invalid - field cannot be both");
        assert_contains!(error.to_string(), "Option<..>");
        assert_contains!(error.to_string(), "#[argot(cardinality = ..)]");
    }

    #[test]
    fn construct_switch_remaining() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argot(remaining)]
        };
        let input = field("my_field", "bool", false, vec![attribute]);

        // Execute
        let error = DeriveParameter::try_from(&input).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "Invalid - field cannot be both");
        assert_contains!(error.to_string(), "bool");
        assert_contains!(error.to_string(), "#[argot(remaining)]");
    }

    #[test]
    fn construct_scalar_cardinality() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argot(cardinality = Cardinality::Fixed(2))]
        };
        let input = field("my_field", "usize", false, vec![attribute]);

        // Execute
        let error = DeriveParameter::try_from(&input).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "Invalid - field cannot be both");
        assert_contains!(error.to_string(), "usize");
        assert_contains!(error.to_string(), "#[argot(cardinality = ..)]");
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
