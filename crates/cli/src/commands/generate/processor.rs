use anyhow::Result;

use super::EmitContext;

pub(super) const INDENT: &str = "  ";

pub(super) trait SchemaProcessor<P> {
    fn process(
        &self,
        parent: &P,
        context: &EmitContext,
        writer: &mut (dyn std::io::Write + Send),
    ) -> Result<()>;
}

/// Render `value` as a double-quoted string literal.
pub(super) fn quote(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Render `key` as an object property or enum member name, quoting it only when it is not a
/// plain identifier.
pub(super) fn property_key(key: &str) -> Result<String> {
    if is_identifier(key) {
        Ok(key.to_string())
    } else {
        quote(key)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => chars
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
        _ => false,
    }
}

pub(super) fn quoted_list(values: &[String]) -> Result<String> {
    let quoted = values
        .iter()
        .map(|value| quote(value))
        .collect::<Result<Vec<_>>>()?;
    Ok(quoted.join(", "))
}
