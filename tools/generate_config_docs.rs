#[path = "../src/configuration.rs"]
#[allow(dead_code)]
mod configuration;
#[path = "../src/spectrum/sampling.rs"]
#[allow(dead_code)]
pub mod spectrum_sampling;
mod spectrum {
    pub use crate::spectrum_sampling as sampling;
}

use configuration::PlotConfig;
use schemars::schema_for;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::error::Error;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    let schema = schema_for!(PlotConfig);
    let schema_value = serde_json::to_value(&schema)?;
    let docs_dir = Path::new("docs");
    fs::create_dir_all(docs_dir)?;

    let schema_json_path = docs_dir.join("config.schema.json");
    let schema_markdown_path = docs_dir.join("config-schema.md");

    fs::write(
        &schema_json_path,
        format!("{}\n", serde_json::to_string_pretty(&schema_value)?),
    )?;
    fs::write(&schema_markdown_path, render_markdown(&schema_value))?;

    println!(
        "Wrote {} and {}",
        schema_json_path.display(),
        schema_markdown_path.display()
    );

    Ok(())
}

fn render_markdown(root: &Value) -> String {
    let mut out = String::new();
    out.push_str("# Plot Config Schema\n\n");
    out.push_str("Generated from Rust types in `src/configuration.rs`.\n\n");

    render_section("PlotConfig", root, &mut out);

    if let Some(defs) = root.get("$defs").and_then(Value::as_object) {
        for name in sorted_keys(defs) {
            if let Some(schema) = defs.get(name.as_str()) {
                render_section(&name, schema, &mut out);
            }
        }
    }
    out
}

fn render_section(title: &str, schema: &Value, out: &mut String) {
    out.push_str(&format!("## {}\n\n", title));

    if let Some(desc) = schema.get("description").and_then(Value::as_str) {
        out.push_str(desc);
        out.push_str("\n\n");
    }

    if let Some(values) = enum_values(schema) {
        out.push_str("Allowed values: ");
        out.push_str(&values.join(", "));
        out.push_str("\n\n");
    }

    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        let required = required_set(schema.get("required"));
        out.push_str("| Field | Type | Required | Description |\n");
        out.push_str("| --- | --- | --- | --- |\n");
        for name in sorted_keys(properties) {
            if let Some(property) = properties.get(name.as_str()) {
                let req = if required.contains(name.as_str()) {
                    "yes"
                } else {
                    "no"
                };
                let desc = property
                    .get("description")
                    .and_then(Value::as_str)
                    .unwrap_or("");
                out.push_str(&format!(
                    "| `{}` | `{}` | {} | {} |\n",
                    name,
                    summarize_type(property),
                    req,
                    desc.replace('\n', " ")
                ));
            }
        }
        out.push('\n');
    }
}

fn enum_values(schema: &Value) -> Option<Vec<String>> {
    if let Some(values) = schema.get("enum").and_then(Value::as_array) {
        return Some(values.iter().map(format_value).collect());
    }
    let one_of = schema.get("oneOf").and_then(Value::as_array)?;
    let values: Vec<String> = one_of
        .iter()
        .filter_map(|variant| variant.get("const"))
        .map(format_value)
        .collect();
    (!values.is_empty()).then_some(values)
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("`{}`", s),
        _ => format!("`{}`", value),
    }
}

fn sorted_keys(map: &Map<String, Value>) -> Vec<String> {
    let mut keys: Vec<String> = map.keys().cloned().collect();
    keys.sort();
    keys
}

fn required_set(required: Option<&Value>) -> BTreeSet<String> {
    required
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn summarize_type(schema: &Value) -> String {
    if let Some(reference) = schema.get("$ref").and_then(Value::as_str) {
        return reference.rsplit('/').next().unwrap_or(reference).to_string();
    }
    match schema.get("type") {
        Some(Value::String(type_name)) if type_name == "array" => format!(
            "array<{}>",
            schema
                .get("items")
                .map(summarize_type)
                .unwrap_or_else(|| String::from("unknown"))
        ),
        Some(Value::String(type_name)) => type_name.clone(),
        Some(Value::Array(type_names)) => type_names
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" | "),
        _ => String::from("unknown"),
    }
}
