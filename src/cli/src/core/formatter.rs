use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn render_text_from_model<T: Serialize + ?Sized>(model: &T) -> String {
    let value = serde_json::to_value(model).unwrap_or(Value::Null);
    render_value(&value, 0)
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_value(value: &Value, indent: usize) -> String {
    let pad = " ".repeat(indent);
    match value {
        Value::Null => String::new(),
        Value::Array(arr) => {
            let mut s = String::new();
            for item in arr {
                if item.is_array() || item.is_object() {
                    s.push_str(&format!("{pad}-\n"));
                    s.push_str(&render_value(item, indent + 2));
                } else {
                    s.push_str(&format!("{pad}- {}\n", render_scalar(item)));
                }
            }
            s
        }
        Value::Object(map) => {
            let mut s = String::new();
            for (k, v) in map {
                if v.is_array() || v.is_object() {
                    s.push_str(&format!("{pad}{k}:\n"));
                    s.push_str(&render_value(v, indent + 2));
                } else {
                    s.push_str(&format!("{pad}{k}: {}\n", render_scalar(v)));
                }
            }
            s
        }
        scalar => format!("{pad}{}\n", render_scalar(scalar)),
    }
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn format<T: Serialize>(&self, model: &T) -> String {
        match self.engine {
            OutputFormat::Text => render_text_from_model(model),
            OutputFormat::Json => serde_json::to_string_pretty(model).unwrap_or_default(),
        }
    }

    /// Formats a list, using `line` for each item in text mode.
    pub fn format_lines<T: Serialize>(&self, list: &[T], line: impl Fn(&T) -> String) -> String {
        match self.engine {
            OutputFormat::Text => list.iter().map(|item| line(item) + "\n").collect(),
            OutputFormat::Json => {
                serde_json::to_string_pretty(list).unwrap_or_else(|_| "[]".to_string())
            }
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
