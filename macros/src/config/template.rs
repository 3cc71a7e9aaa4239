//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;
use crate::config::types::{format_default_for_type, type_to_string};

/// Generate template code (TokenStream) for fields
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let field_codes: Vec<TokenStream> = fields
        .iter()
        .map(|f| generate_field_template_code(f))
        .collect();

    quote! {
        #(#field_codes)*
    }
}

/// Trailing `  # comment` for a field, or an empty string.
fn inline_suffix(info: &FieldInfo) -> String {
    info.inline_doc
        .as_ref()
        .map(|doc| format!("  # {}", doc))
        .unwrap_or_default()
}

/// Generate TOML template code for a single field
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = field_name.to_string();
    let suffix = inline_suffix(info);

    let doc_code = if let Some(ref doc) = info.doc {
        let doc_lines: Vec<_> = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
        let doc_str = doc_lines.join("");
        quote! { out.push_str(#doc_str); }
    } else {
        quote! {}
    };

    let ty_str = type_to_string(&info.ty);

    // Optional fields without an explicit default are commented out
    if ty_str.starts_with("Option<") && info.default.is_none() {
        let line = format!("# {} = \"\"{}\n", toml_name, suffix);
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    if let Some(ref default_val) = info.default {
        let formatted = format_default_for_type(default_val, &ty_str);
        let line = format!("{} = {}{}\n", toml_name, formatted, suffix);
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // Fall back to the runtime `Default` value
    quote! {
        #doc_code
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        out.push_str(#suffix);
        out.push('\n');
    }
}
