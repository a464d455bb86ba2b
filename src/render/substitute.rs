//! `{placeholder}` substitution for template-text items.

use indexmap::IndexMap;

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
}

/// Replace every `{name}` in `text`. Item variables shadow global ones;
/// unresolved placeholders and braces around non-identifiers stay verbatim.
pub fn substitute(
    text: &str,
    variables: Option<&IndexMap<String, String>>,
    global_variables: Option<&IndexMap<String, String>>,
) -> String {
    let lookup = |name: &str| {
        variables
            .and_then(|vars| vars.get(name))
            .or_else(|| global_variables.and_then(|vars| vars.get(name)))
    };

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    // first '}' after the current '{'; None once the text has no more
    let mut next_close = text.find('}');
    while let Some(rel) = text[cursor..].find('{') {
        let open = cursor + rel;
        out.push_str(&text[cursor..open]);
        if next_close.map_or(false, |close| close < open) {
            next_close = text[open..].find('}').map(|close| open + close);
        }
        match next_close {
            Some(close) if is_identifier(&text[open + 1..close]) => {
                let name = &text[open + 1..close];
                match lookup(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&text[open..=close]),
                }
                cursor = close + 1;
            }
            _ => {
                out.push('{');
                cursor = open + 1;
            }
        }
    }
    out.push_str(&text[cursor..]);
    out
}
