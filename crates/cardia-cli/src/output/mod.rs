pub mod report;
pub mod table;

use serde::Serialize;
use serde_json::Value;

use crate::cli::global::OutputFormat;
use crate::ui;

/// Render a serializable value in the requested format.
///
/// # Errors
/// Returns an error when the value cannot be serialized to JSON.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => render_table(value),
    }
}

/// Render and print to stdout.
///
/// # Errors
/// Returns an error when rendering fails.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    let rendered = match value {
        Value::Array(items) => {
            if items.is_empty() {
                return Ok(String::from("(no rows)"));
            }
            let headers = collect_headers(&items);
            if headers.is_empty() {
                let rows: Vec<Vec<String>> =
                    items.iter().map(|item| vec![value_to_cell(item)]).collect();
                table::render_entity_table(&["value"], &rows, options)
            } else {
                let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
                let rows: Vec<Vec<String>> = items
                    .iter()
                    .map(|item| {
                        headers
                            .iter()
                            .map(|key| item.get(key).map_or_else(|| "-".to_string(), value_to_cell))
                            .collect()
                    })
                    .collect();
                table::render_entity_table(&header_refs, &rows, options)
            }
        }
        Value::Object(map) => {
            let rows: Vec<Vec<String>> = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect();
            table::render_entity_table(&["field", "value"], &rows, options)
        }
        other => table::render_entity_table(&["value"], &[vec![value_to_cell(&other)]], options),
    };
    Ok(rendered)
}

/// Union of keys across all rows, so ragged objects still line up.
fn collect_headers(items: &[Value]) -> Vec<String> {
    let mut headers = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }
    headers
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
