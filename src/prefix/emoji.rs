//! Emoji sequence matching for the end of a commit message.

use regex::Regex;

/// One emoji sequence element: a flag, a keycap, or a pictograph with its optional
/// presentation selector, skin tone and tag sequence.
const EMOJI_ELEMENT: &str = concat!(
    r"(?:\p{Regional_Indicator}\p{Regional_Indicator}",
    r"|[0-9#*]\x{FE0F}?\x{20E3}",
    r"|(?:\p{Extended_Pictographic}|\p{Emoji_Presentation})\x{FE0F}?\p{Emoji_Modifier}?\x{FE0F}?",
    r"(?:[\x{E0020}-\x{E007E}]+\x{E007F})?)",
);

/// A full emoji grapheme: elements joined by zero-width joiners
pub fn emoji_sequence() -> String {
    format!(r"{0}(?:\x{{200D}}{0})*", EMOJI_ELEMENT)
}

/// Matches whitespace followed by one emoji at the very end of the text. The configured emojis
/// are tried first, literally, so that non-pictographic markers are still recognized.
pub fn trailing_emoji_regex<'a>(
    known: impl IntoIterator<Item = &'a str>,
) -> Result<Regex, regex::Error> {
    let mut alternatives: Vec<String> = known
        .into_iter()
        .filter(|emoji| !emoji.is_empty())
        .map(regex::escape)
        .collect();
    alternatives.push(emoji_sequence());

    Regex::new(&format!(r"\s*(?:{})$", alternatives.join("|")))
}

/// Remove one trailing emoji (and the whitespace before it), then trailing whitespace.
pub fn strip_trailing_emoji<'t>(regex: &Regex, message: &'t str) -> &'t str {
    match regex.find(message) {
        Some(found) => message[..found.start()].trim_end(),
        None => message.trim_end(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic() -> Regex {
        trailing_emoji_regex(Vec::<&str>::new()).expect("valid emoji regex")
    }

    #[test]
    fn test_strip_single_codepoint() {
        assert_eq!(strip_trailing_emoji(&generic(), "thing 🎉"), "thing");
        assert_eq!(strip_trailing_emoji(&generic(), "thing ✨"), "thing");
    }

    #[test]
    fn test_strip_multi_codepoint_sequences() {
        // Family (ZWJ), thumbs up with skin tone, flag, keycap, heart with presentation selector
        for emoji in ["👨‍👩‍👧", "👍🏽", "🇨🇱", "#️⃣", "❤️", "⚡️", "🏴‍☠️"] {
            let message = format!("thing {emoji}");
            assert_eq!(strip_trailing_emoji(&generic(), &message), "thing", "{emoji}");
        }
    }

    #[test]
    fn test_strip_only_last_emoji() {
        assert_eq!(strip_trailing_emoji(&generic(), "thing 🎉🐛"), "thing 🎉");
    }

    #[test]
    fn test_no_trailing_emoji() {
        assert_eq!(strip_trailing_emoji(&generic(), "thing 🎉 done  "), "thing 🎉 done");
        assert_eq!(strip_trailing_emoji(&generic(), "version 2"), "version 2");
        assert_eq!(strip_trailing_emoji(&generic(), ""), "");
    }

    #[test]
    fn test_known_markers_are_literal() {
        let regex = trailing_emoji_regex([":bug:", ""]).expect("valid emoji regex");

        assert_eq!(strip_trailing_emoji(&regex, "thing :bug:"), "thing");
        assert_eq!(strip_trailing_emoji(&regex, "thing 🐛"), "thing");
    }
}
