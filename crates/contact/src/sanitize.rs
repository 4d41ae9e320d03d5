/// Escapes `&`, `<`, `>`, `"` and `'` as HTML entities, then trims.
///
/// Every character is escaped once, so an `&` introduced by an entity is
/// never escaped again. Input that already holds entities is escaped a
/// second time.
pub fn sanitize_input(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }

    escaped.trim().to_owned()
}
