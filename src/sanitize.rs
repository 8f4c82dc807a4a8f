use unicode_general_category::{get_general_category, GeneralCategory};

/// Folder name used when a title has nothing usable left after sanitizing.
pub const FALLBACK_FOLDER_NAME: &str = "unnamed_recipe";

/// Turns a recipe title into a single, filesystem-safe path segment.
///
/// The title is trimmed and lowercased, every whitespace run becomes one
/// `_`, and anything that is not a letter, a number, `_` or `-` is dropped.
pub fn folder_name(title: &str) -> String {
    let lowered = title.trim_matches(is_space).to_lowercase();

    let mut name = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for c in lowered.chars() {
        if is_space(c) {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if is_word(c) || c == '-' {
            name.push(c);
        }
    }

    if name.is_empty() {
        FALLBACK_FOLDER_NAME.to_string()
    } else {
        name
    }
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Letters, numbers and `_`; combining marks are not word characters.
fn is_word(c: char) -> bool {
    c == '_'
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
                | GeneralCategory::DecimalNumber
                | GeneralCategory::LetterNumber
                | GeneralCategory::OtherNumber
        )
}
