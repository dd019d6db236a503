//! 宏工具函数

use proc_macro2::Span;
use syn::{Expr, Generics, Ident, Lit, LitStr, Result};

/// 组件和配置类不支持泛型
pub fn reject_generics(generics: &Generics, macro_name: &str) -> Result<()> {
    if generics.params.is_empty() {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            generics,
            format!("{macro_name} 不支持泛型结构体"),
        ))
    }
}

/// 从表达式中取出字符串字面量
pub fn expect_lit_str(expr: &Expr, key: &str) -> Result<LitStr> {
    match expr {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            Lit::Str(lit_str) => Ok(lit_str.clone()),
            other => Err(syn::Error::new_spanned(
                other,
                format!("`{key}` 需要字符串字面量"),
            )),
        },
        other => Err(syn::Error::new_spanned(
            other,
            format!("`{key}` 需要字符串字面量"),
        )),
    }
}

/// 生成组件注册函数名
///
/// 直接拼接类型标识符，同一模块内不同类型的注册函数不会重名
pub fn registration_fn_name(struct_name: &Ident) -> Ident {
    Ident::new(&format!("__register_component_{struct_name}"), Span::call_site())
}
