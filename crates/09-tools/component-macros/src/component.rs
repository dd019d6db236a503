//! 组件注册宏实现

use crate::utils::{expect_lit_str, registration_fn_name, reject_generics};
use infrastructure_common::default_bean_name;
use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, punctuated::Punctuated, DeriveInput,
    ItemStruct, Meta, Path, Result, Token,
};

/// 组件配置参数
#[derive(Debug, Clone)]
pub struct ComponentArgs {
    /// 生命周期类型
    pub lifetime: ComponentLifetime,
    /// 是否延迟实例化
    pub lazy: bool,
    /// 自定义组件名称
    pub name: Option<String>,
    /// 自定义构造函数
    pub constructor: Option<Path>,
    /// 是否启用
    pub enabled: bool,
}

/// 组件生命周期类型
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentLifetime {
    Singleton,
    Transient,
}

impl Default for ComponentArgs {
    fn default() -> Self {
        Self {
            lifetime: ComponentLifetime::Singleton,
            lazy: false,
            name: None,
            constructor: None,
            enabled: true,
        }
    }
}

impl Parse for ComponentArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ComponentArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::Path(path) => {
                    if path.is_ident("singleton") {
                        args.lifetime = ComponentLifetime::Singleton;
                    } else if path.is_ident("transient") {
                        args.lifetime = ComponentLifetime::Transient;
                    } else if path.is_ident("lazy") {
                        args.lazy = true;
                    } else if path.is_ident("enabled") {
                        args.enabled = true;
                    } else if path.is_ident("disabled") {
                        args.enabled = false;
                    } else {
                        return Err(syn::Error::new_spanned(path, "未知的 #[component] 参数"));
                    }
                }
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("name") {
                        args.name = Some(expect_lit_str(&nv.value, "name")?.value());
                    } else if nv.path.is_ident("constructor") {
                        args.constructor = Some(expect_lit_str(&nv.value, "constructor")?.parse()?);
                    } else {
                        return Err(syn::Error::new_spanned(nv.path, "未知的 #[component] 参数"));
                    }
                }
                other => {
                    return Err(syn::Error::new_spanned(other, "未知的 #[component] 参数"));
                }
            }
        }

        if args.lazy && args.lifetime == ComponentLifetime::Transient {
            return Err(input.error("`lazy` 只适用于单例组件"));
        }

        Ok(args)
    }
}

/// 实现 #[component] 宏
pub fn component_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let component_args = if args.is_empty() {
        ComponentArgs::default()
    } else {
        match syn::parse::<ComponentArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let input_struct = parse_macro_input!(input as ItemStruct);
    if let Err(e) = reject_generics(&input_struct.generics, "#[component]") {
        return e.to_compile_error().into();
    }

    let struct_name = &input_struct.ident;
    let component_name = component_args
        .name
        .clone()
        .unwrap_or_else(|| default_bean_name(&struct_name.to_string()));

    let lifetime_variant = match component_args.lifetime {
        ComponentLifetime::Singleton => quote! { ::infrastructure_common::Lifetime::Singleton },
        ComponentLifetime::Transient => quote! { ::infrastructure_common::Lifetime::Transient },
    };

    let lazy = component_args.lazy;
    let enabled = component_args.enabled;

    let component_impl = quote! {
        impl ::infrastructure_common::Component for #struct_name {
            fn name(&self) -> &'static str {
                #component_name
            }

            fn is_enabled(&self) -> bool {
                #enabled
            }
        }
    };

    let boxed_any = quote! {
        ::std::boxed::Box<dyn ::std::any::Any + ::std::marker::Send + ::std::marker::Sync>
    };

    let constructor_body = match &component_args.constructor {
        Some(path) => quote! {
            #path()
                .map(|instance: #struct_name| ::std::boxed::Box::new(instance) as #boxed_any)
                .map_err(::std::convert::Into::into)
        },
        None => quote! {
            ::std::result::Result::Ok(::std::boxed::Box::new(
                <#struct_name as ::std::default::Default>::default(),
            ))
        },
    };

    let registration_fn = registration_fn_name(struct_name);

    // 使用 ctor 在程序启动时把组件登记到全局目录
    let registration_code = quote! {
        #[::infrastructure_common::__private::ctor::ctor]
        #[allow(non_snake_case)]
        fn #registration_fn() {
            fn construct() -> ::std::result::Result<#boxed_any, ::infrastructure_common::BoxError> {
                #constructor_body
            }

            ::infrastructure_common::ComponentCatalog::global().register(
                ::infrastructure_common::ComponentDescriptor {
                    name: ::std::string::String::from(#component_name),
                    type_id: ::std::any::TypeId::of::<#struct_name>(),
                    type_name: ::std::any::type_name::<#struct_name>(),
                    module_path: ::std::module_path!(),
                    lifetime: #lifetime_variant,
                    lazy: #lazy,
                    enabled: #enabled,
                    constructor: construct,
                },
            );
        }
    };

    let expanded = quote! {
        #input_struct

        #component_impl

        #registration_code
    };

    TokenStream::from(expanded)
}

/// 实现 #[derive(Component)] 宏
pub fn derive_component_impl(input: DeriveInput) -> TokenStream {
    if let Err(e) = reject_generics(&input.generics, "#[derive(Component)]") {
        return e.to_compile_error().into();
    }

    let struct_name = &input.ident;

    let mut enabled = true;
    let mut custom_name = None;

    for attr in &input.attrs {
        if attr.path().is_ident("component") {
            let result = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    custom_name = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("disabled") {
                    enabled = false;
                    Ok(())
                } else {
                    Err(meta.error("未知的 #[component] 参数"))
                }
            });
            if let Err(e) = result {
                return e.to_compile_error().into();
            }
        }
    }

    let final_name = custom_name.unwrap_or_else(|| default_bean_name(&struct_name.to_string()));

    let expanded = quote! {
        impl ::infrastructure_common::Component for #struct_name {
            fn name(&self) -> &'static str {
                #final_name
            }

            fn is_enabled(&self) -> bool {
                #enabled
            }
        }
    };

    TokenStream::from(expanded)
}
