//! Manual host extraction for input the strict URL parser rejects.

/// Removes a leading `scheme://` prefix (ASCII letters only, any case) and
/// truncates at the first `/`. Everything else is returned verbatim.
pub fn strip_scheme_and_path(input: &str) -> &str {
    let rest = match input.split_once("://") {
        Some((scheme, rest))
            if !scheme.is_empty() && scheme.bytes().all(|b| b.is_ascii_alphabetic()) =>
        {
            rest
        }
        _ => input,
    };
    match rest.find('/') {
        Some(i) => &rest[..i],
        None => rest,
    }
}
