/// Selects a label for a spoken or typed token.
///
/// An exact case-insensitive match always wins, wherever it sits in `candidates`.
/// Otherwise the first label that case-insensitively starts with the token is
/// returned. Blank tokens never match.
pub fn match_label<'a, I, S>(token: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    let needle = token.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let mut first_prefix = None;
    for candidate in candidates {
        let label = candidate.as_ref();
        let lowered = label.to_lowercase();
        if lowered == needle {
            return Some(label);
        }
        if first_prefix.is_none() && lowered.starts_with(&needle) {
            first_prefix = Some(label);
        }
    }
    first_prefix
}
