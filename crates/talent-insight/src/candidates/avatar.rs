/// Flat avatar palette as (background, accent) pairs.
const PALETTE: [(&str, &str); 5] = [
    ("#EBF4FF", "#4F46E5"),
    ("#FDF2F8", "#DB2777"),
    ("#ECFDF5", "#059669"),
    ("#FFFBEB", "#D97706"),
    ("#F5F3FF", "#7C3AED"),
];

pub fn palette_size() -> usize {
    PALETTE.len()
}

/// SVG data URI for the palette entry at `index` (wrapping).
pub fn builtin_avatar(index: usize) -> String {
    let (background, accent) = PALETTE[index % PALETTE.len()];
    let svg = format!(
        "<svg viewBox=\"0 0 36 36\" fill=\"none\" xmlns=\"http://www.w3.org/2000/svg\" width=\"128\" height=\"128\">\
<rect width=\"36\" height=\"36\" rx=\"18\" fill=\"{background}\"/>\
<path d=\"M18 19C20.2091 19 22 17.2091 22 15C22 12.7909 20.2091 11 18 11C15.7909 11 14 12.7909 14 15C14 17.2091 15.7909 19 18 19Z\" fill=\"{accent}\"/>\
<path d=\"M9 28C9 24.6863 13.0294 22 18 22C22.9706 22 27 24.6863 27 28\" stroke=\"{accent}\" stroke-width=\"2\" stroke-linecap=\"round\"/></svg>"
    );
    // '#' would start a URI fragment.
    format!("data:image/svg+xml;utf8,{}", svg.replace('#', "%23"))
}

/// Keep a caller-supplied avatar, otherwise pick one keyed by the name.
pub fn resolve_avatar(name: &str, supplied: Option<&str>) -> String {
    match supplied.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => {
            let seed = name
                .chars()
                .fold(0usize, |acc, ch| acc.wrapping_mul(31).wrapping_add(ch as usize));
            builtin_avatar(seed)
        }
    }
}
