use crate::syntax::{tokenize, Language, Token};

pub const DEFAULT_CLASS: &str = "asyhl";

#[derive(Debug, Clone)]
pub struct HighlightOptions {
    /// Wrap the spans in `<pre class="..."><code>...</code></pre>`.
    pub wrap: bool,
    pub class: String,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            wrap: false,
            class: DEFAULT_CLASS.to_string(),
        }
    }
}

/// Tokenizes `source` and renders one `<span class="sy-...">` per token.
pub fn highlight(source: &str, language: Language) -> String {
    render_html(&tokenize(source, language))
}

pub fn render_html(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.len() + 32).sum());
    for token in tokens {
        out.push_str("<span class=\"");
        out.push_str(&token.token_type.css_class());
        out.push_str("\">");
        html_escape_into(&mut out, &token.value);
        out.push_str("</span>");
    }
    out
}

pub fn render_document(tokens: &[Token], options: &HighlightOptions) -> String {
    let spans = render_html(tokens);
    if !options.wrap {
        return spans;
    }
    let mut out = String::with_capacity(spans.len() + options.class.len() + 32);
    out.push_str("<pre class=\"");
    html_escape_into(&mut out, &options.class);
    out.push_str("\"><code>");
    out.push_str(&spans);
    out.push_str("</code></pre>");
    out
}

/// HTML-escape a string into the output buffer.
pub fn html_escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
