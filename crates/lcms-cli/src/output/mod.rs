use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Objects render as key/value pairs; arrays of objects as one row each.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
        )),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    if headers.is_empty() {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows);
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_table(&header_refs, &rows)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: i64,
        value: Option<&'static str>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            id: 7,
            value: Some("M+H"),
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 7);
        assert_eq!(parsed["value"], "M+H");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: 7, value: None };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert_eq!(out, r#"{"id":7,"value":null}"#);
    }

    #[test]
    fn table_render_for_object_lists_keys() {
        let value = Example { id: 7, value: None };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("key"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines.iter().any(|line| line.starts_with("id") && line.ends_with('7')));
        assert!(lines.iter().any(|line| line.starts_with("value") && line.ends_with('-')));
    }

    #[test]
    fn table_render_for_array_has_one_row_per_item() {
        let items = vec![
            Example {
                id: 1,
                value: Some("M+H"),
            },
            Example {
                id: 20,
                value: Some("M+Na"),
            },
        ];
        let out = render(&items, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("id") && lines[0].contains("value"));
        assert!(lines[3].contains("20") && lines[3].contains("M+Na"));
    }

    #[test]
    fn empty_array_table_says_so() {
        let items: Vec<Example> = Vec::new();
        let out = render(&items, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}
