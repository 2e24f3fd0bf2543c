//! Go identifier sanitization.
//!
//! Letters are the Unicode general categories `L*` and digits are `Nd`, the
//! same classes Go accepts in identifiers.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Turns an arbitrary name into a bare Go identifier.
///
/// A leading character that is neither a letter nor `_` gets a `_` prepended,
/// and every character that is not a letter or digit is replaced with `_`.
/// Distinct inputs may map to the same identifier.
///
/// # Example
///
/// ```
/// use gohex_core::sanitize;
///
/// assert_eq!(sanitize("3file.txt"), "_3file_txt");
/// assert_eq!(sanitize("logo"), "logo");
/// ```
pub fn sanitize(name: &str) -> String {
    let mut ident = String::with_capacity(name.len() + 1);

    match name.chars().next() {
        Some(c) if is_letter(c) || c == '_' => {}
        _ => ident.push('_'),
    }

    ident.extend(
        name.chars()
            .map(|c| if is_letter(c) || is_digit(c) { c } else { '_' }),
    );

    ident
}

/// Returns true if `name` already satisfies the identifier rules
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_letter(c) || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| is_letter(c) || is_digit(c) || c == '_')
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn is_digit(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}
