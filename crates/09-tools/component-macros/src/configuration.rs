//! 配置类派生宏实现

use crate::utils::reject_generics;
use infrastructure_common::{default_bean_name, normalize_package};
use proc_macro::TokenStream;
use quote::quote;
use syn::{punctuated::Punctuated, DeriveInput, LitStr, Result, Token};

const SELF_PREFIX: &str = "self";
const CRATE_PREFIX: &str = "crate";

/// 实现 #[derive(Configuration)] 宏
pub fn derive_configuration_impl(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> Result<proc_macro2::TokenStream> {
    reject_generics(&input.generics, "#[derive(Configuration)]")?;

    let struct_name = &input.ident;
    let mut custom_name = None;
    let mut packages = Vec::new();

    for attr in &input.attrs {
        if attr.path().is_ident("component_scan") {
            let literals =
                attr.parse_args_with(Punctuated::<LitStr, Token![,]>::parse_terminated)?;
            for literal in literals {
                packages.push(package_tokens(&literal)?);
            }
        } else if attr.path().is_ident("configuration") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    custom_name = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("未知的 #[configuration] 参数"))
                }
            })?;
        }
    }

    let bean_name = custom_name.unwrap_or_else(|| default_bean_name(&struct_name.to_string()));

    Ok(quote! {
        impl ::infrastructure_common::Component for #struct_name {
            fn name(&self) -> &'static str {
                #bean_name
            }
        }

        impl ::infrastructure_common::Configuration for #struct_name {
            fn base_packages() -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![#(#packages),*]
            }
        }
    })
}

/// 把扫描包字面量转换为运行时字符串表达式
///
/// `self::` 相对于配置类所在模块，`crate::` 相对于 crate 根
fn package_tokens(literal: &LitStr) -> Result<proc_macro2::TokenStream> {
    let value = literal.value();
    let invalid = |message: String| syn::Error::new(literal.span(), message);

    let (root, rest) = match value.split_once("::") {
        Some((head, rest)) if head == SELF_PREFIX || head == CRATE_PREFIX => {
            (Some(head), Some(rest))
        }
        _ if value == SELF_PREFIX || value == CRATE_PREFIX => (Some(value.as_str()), None),
        _ => (None, Some(value.as_str())),
    };

    if let Some(rest) = rest {
        normalize_package(rest).map_err(|e| invalid(e.to_string()))?;
    }

    let suffix = match (root, rest) {
        (Some(_), Some(rest)) => format!("::{rest}"),
        _ => String::new(),
    };

    Ok(match root {
        Some(SELF_PREFIX) => quote! {
            ::std::format!("{}{}", ::std::module_path!(), #suffix)
        },
        Some(_) => quote! {
            ::std::format!("{}{}", ::std::env!("CARGO_CRATE_NAME"), #suffix)
        },
        None => quote! {
            ::std::string::String::from(#value)
        },
    })
}
