use crate::title_case::title_case;

/// Build a name from the original filename alone.
///
/// Underscores and hyphens in the name part become spaces and the result is
/// title-cased. The extension is kept as-is. Returns `None` when nothing
/// but separators is left.
pub fn fallback_name(old_name: &str) -> Option<String> {
    let (name, extension) = match old_name.rsplit_once('.') {
        Some((name, extension)) => (name, Some(extension)),
        None => (old_name, None),
    };

    let spaced: String = name
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();
    let cased = title_case(&spaced).ok()?;

    Some(match extension {
        Some(extension) => format!("{}.{}", cased, extension),
        None => cased,
    })
}
