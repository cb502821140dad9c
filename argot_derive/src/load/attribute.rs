use quote::ToTokens;

use crate::model::{DeriveValue, IntermediateAttributes};

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let expressions = value.parse_args_with(
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated,
        )?;
        let mut attributes = IntermediateAttributes::default();

        for expression in expressions {
            attributes.accept(expression)?;
        }

        Ok(attributes)
    }
}

impl IntermediateAttributes {
    // `key = value` repeats into the pair's value list; a bare path is a singleton.
    fn accept(&mut self, expression: syn::Expr) -> Result<(), syn::Error> {
        match expression {
            syn::Expr::Assign(assignment) => {
                let key = assignment.left.to_token_stream().to_string();
                self.pairs.entry(key).or_default().push(DeriveValue {
                    tokens: assignment.right.to_token_stream(),
                });
                Ok(())
            }
            syn::Expr::Path(path) => match path.path.get_ident() {
                Some(ident) => {
                    self.singletons.insert(ident.to_string());
                    Ok(())
                }
                None => Err(unparseable_error(&path)),
            },
            other => Err(unparseable_error(&other)),
        }
    }
}

fn unparseable_error(expression: &impl ToTokens) -> syn::Error {
    let expression_string = expression.to_token_stream().to_string();
    syn::Error::new_spanned(
        expression,
        format!("Invalid - unparseable attribute expression `{expression_string}`."),
    )
}
