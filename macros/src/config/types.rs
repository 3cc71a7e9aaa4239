//! Type helper functions for Config derive macro.

use quote::quote;
use syn::Type;

/// Convert syn::Type to string representation
pub fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Format default value based on field type.
/// Numbers and booleans are used as-is, everything else is quoted.
pub fn format_default_for_type(value: &str, ty: &str) -> String {
    match ty {
        "bool" | "u8" | "u16" | "u32" | "u64" | "usize" | "i8" | "i16" | "i32" | "i64"
        | "isize" | "f32" | "f64" => value.to_string(),
        _ if ty.starts_with("Vec<") => value.to_string(),
        _ => format!("\"{}\"", value),
    }
}
