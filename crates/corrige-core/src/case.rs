// Case helpers for suggestion and rewrite capitalization.
//
// When a rule requests case preservation and the matched span starts with an
// uppercase letter, every suggested alternative (and any indirect rewrite
// output) is capitalized before being emitted.

/// True if the first character of `word` is an uppercase letter.
pub fn starts_upper(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Capitalize a word: first letter uppercased, the rest lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.extend(chars.flat_map(|c| c.to_lowercase()));
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_upper_ascii() {
        assert!(starts_upper("Chat"));
        assert!(!starts_upper("chat"));
    }

    #[test]
    fn starts_upper_accented() {
        assert!(starts_upper("École"));
        assert!(!starts_upper("école"));
    }

    #[test]
    fn starts_upper_empty_and_nonletter() {
        assert!(!starts_upper(""));
        assert!(!starts_upper("’chat"));
    }

    #[test]
    fn capitalize_basic() {
        assert_eq!(capitalize("chats"), "Chats");
        assert_eq!(capitalize("CHATS"), "Chats");
    }

    #[test]
    fn capitalize_accented() {
        assert_eq!(capitalize("étés"), "Étés");
    }

    #[test]
    fn capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }
}
