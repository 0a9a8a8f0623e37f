//! File-system names derived from account emails.

/// Stands in for the empty name. The encoder never emits a bare `%`.
const EMPTY_NAME: &str = "%";

/// Map an account email (or any namespace key) to a single path component.
///
/// Characters in `[A-Za-z0-9@._+-]` are kept. Every other byte of the UTF-8
/// form, `%` included, becomes `%XX`, so distinct inputs always map to
/// distinct names and the result never contains a separator. Names made only
/// of dots have their dots encoded too. Input is used as given; callers trim.
pub fn file_safe_name(raw: &str) -> String {
    if raw.is_empty() {
        return EMPTY_NAME.to_string();
    }

    let dots_only = raw.chars().all(|c| c == '.');
    let mut name = String::with_capacity(raw.len());

    for c in raw.chars() {
        let keep = !dots_only
            && (c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '_' | '-' | '+'));
        if keep {
            name.push(c);
            continue;
        }

        let mut buf = [0u8; 4];
        for byte in c.encode_utf8(&mut buf).bytes() {
            name.push('%');
            name.push_str(&hex::encode_upper([byte]));
        }
    }

    name
}
