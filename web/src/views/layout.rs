//! Page shell and shared helpers

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut buf = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            '\'' => buf.push_str("&#39;"),
            _ => buf.push(c),
        }
    }
    buf
}

/// Wrap `body` in the site layout
pub fn page(title: &str, body: &str) -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    buf.push_str(&format!("<title>{} - Askbox</title>\n", escape_html(title)));
    buf.push_str("</head>\n<body>\n");
    buf.push_str("<header><a href=\"/Questions/Ask\">Askbox</a></header>\n");
    buf.push_str("<main>\n");
    buf.push_str(body);
    buf.push_str("</main>\n</body>\n</html>\n");

    buf
}

/// Standalone error page
pub fn render_error_page(title: &str, details: Option<&str>) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape_html(title));
    if let Some(details) = details {
        body.push_str(&format!("<p>{}</p>\n", escape_html(details)));
    }
    body.push_str("<p><a href=\"/Questions/Ask\">Back to the question form</a></p>\n");

    page(title, &body)
}
