use crate::Error;
use crudgen::naming::is_identifier;

/// Escape text for a single-quoted TypeScript string literal
pub(crate) fn escape_single_quoted<T>(string: T) -> String
where
    T: AsRef<str>,
{
    let mut escaped = String::with_capacity(string.as_ref().len());
    for c in string.as_ref().chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Refuse names that cannot be pasted into generated source verbatim
pub(crate) fn ensure_identifier(kind: &'static str, value: &str) -> Result<(), Error> {
    if is_identifier(value) {
        Ok(())
    } else {
        Err(crudgen::Error::InvalidIdentifier {
            kind,
            value: value.to_owned(),
        }
        .into())
    }
}
