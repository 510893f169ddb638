//! Rendering of [`Value`] trees into Roc literal syntax.
//!
//! - `value` - the closed value model the renderer dispatches on
//!
//! The renderer is total: any tree built from the domain model renders.

mod value;

pub use value::{Tag, Value};

/// Roc module header and type declarations written ahead of the data binding.
///
/// Starts with a blank line, matching previously generated `Data.roc` files.
pub const PREAMBLE: &str = "
interface Data exposes [data] imports []

Release : { version : Str, url : [Url Str], asset : [Url Str, NoAssetUrl], publishedAt : U64 }
Repo : {
    name : Str,
    owner : Str,
    description : Str,
    homepage : [Url Str, NoHomepage],
    github : [Url Str],
    updatedAt : U64,
    releases : List Release
}
data : {repos:List Repo,updatedAt:Str}
data =";

/// Render a value as a Roc expression.
///
/// Strings are emitted between double quotes as-is; embedded quotes are not escaped.
/// Floats use Rust's shortest round-trip form (`1.5`, `2.0`, `1e16`, `1e-5`).
pub fn render(value: &Value) -> String {
    match value {
        Value::Str(s) => format!("\"{}\"", s),
        Value::Int(n) => n.to_string(),
        Value::Float(n) => format!("{:?}", n),
        Value::Bool(true) => "Bool.true".to_string(),
        Value::Bool(false) => "Bool.false".to_string(),
        Value::List(items) => {
            let items: Vec<String> = items.iter().map(render).collect();
            format!("[{}]", items.join(",\n"))
        }
        Value::Record(fields) => {
            let fields: Vec<String> = fields
                .iter()
                .map(|(key, value)| format!("{} : {}", key, render(value)))
                .collect();
            format!("{{ {} }}", fields.join(",\n"))
        }
        Value::Tag(Tag {
            name,
            payload: None,
        }) => name.clone(),
        Value::Tag(Tag {
            name,
            payload: Some(payload),
        }) => format!("{} {}", name, render(payload)),
    }
}

/// The full generated file: preamble followed by the rendered data binding.
pub fn render_document(data: &Value) -> String {
    format!("{}{}", PREAMBLE, render(data))
}
