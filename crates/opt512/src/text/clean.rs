//! Normalisation of loosely formatted coin text.

/// Letters that can appear anywhere in coin text, in lower case.
const ALPHABET: &str = "fmnsotdiexpbc";

/// Punctuation of the grammar.
const PUNCTUATION: &str = "-/()";

/// Rank of a text segment in canonical order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
enum Segment {
    Sex,
    Codes,
    Animals,
}

fn is_allowed(c: char) -> bool {
    c.is_whitespace()
        || c == '?'
        || PUNCTUATION.contains(c)
        || (c.is_ascii_alphabetic() && ALPHABET.contains(c.to_ascii_lowercase()))
}

fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Normalises loosely formatted coin text towards the canonical grammar.
///
/// Characters outside the grammar are dropped. Whitespace next to
/// punctuation is removed and other whitespace runs become `-`. Repeated
/// dashes collapse and outer dashes are trimmed. Segments are then re-cased
/// by role and put in canonical order:
///
/// - sexes: lower case, `x` read as `?`
/// - function codes: upper-case letter, lower-case focus, `?` read as `x`
/// - animals: upper case, `X` read as `?`
///
/// A missing sex segment becomes `??`. Canonical text is returned unchanged
/// and cleaning is idempotent.
///
/// # Example
///
/// ```
/// use opt512::text::clean_coin_text;
///
/// assert_eq!(clean_coin_text("  FM  ti / ne  cp/s(b) "), "fm-Ti/Ne-CP/S(B)");
/// assert_eq!(clean_coin_text("Te/Si"), "??-Te/Si");
/// assert_eq!(clean_coin_text("fm-Ti/Ne-CP/S(B)"), "fm-Ti/Ne-CP/S(B)");
/// ```
#[must_use]
pub fn clean_coin_text(text: &str) -> String {
    let kept: String = text.chars().filter(|&c| is_allowed(c)).collect();

    let mut dashed = String::with_capacity(kept.len());
    let mut gap = false;
    for c in kept.trim().chars() {
        if c.is_whitespace() {
            gap = true;
            continue;
        }
        if gap && !is_punctuation(c) && !dashed.ends_with(is_punctuation) {
            dashed.push('-');
        }
        gap = false;
        if c == '-' && dashed.ends_with('-') {
            continue;
        }
        dashed.push(c);
    }

    let trimmed = dashed.trim_matches('-');
    if trimmed.is_empty() {
        return String::new();
    }

    let mut seen_codes = false;
    let mut segments: Vec<(Segment, String)> = trimmed
        .split('-')
        .map(|part| {
            let role = if part.contains('(') {
                Segment::Animals
            } else if part.contains('/') {
                if seen_codes {
                    Segment::Animals
                } else {
                    seen_codes = true;
                    Segment::Codes
                }
            } else {
                Segment::Sex
            };
            (role, recase(role, part))
        })
        .collect();

    if !segments.iter().any(|(role, _)| *role == Segment::Sex) {
        segments.push((Segment::Sex, "??".to_string()));
    }
    segments.sort_by_key(|(role, _)| *role);

    segments
        .into_iter()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join("-")
}

fn recase(role: Segment, part: &str) -> String {
    match role {
        Segment::Sex => part
            .chars()
            .map(|c| match c.to_ascii_lowercase() {
                'x' => '?',
                lower => lower,
            })
            .collect(),
        Segment::Codes => part
            .split('/')
            .map(recase_code)
            .collect::<Vec<_>>()
            .join("/"),
        Segment::Animals => part
            .chars()
            .map(|c| match c.to_ascii_uppercase() {
                'X' => '?',
                upper => upper,
            })
            .collect(),
    }
}

fn recase_code(code: &str) -> String {
    let mut chars = code.chars();
    let Some(letter) = chars.next() else {
        return String::new();
    };
    std::iter::once(letter.to_ascii_uppercase())
        .chain(chars.map(|c| match c.to_ascii_lowercase() {
            '?' => 'x',
            lower => lower,
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_text_is_unchanged() {
        for text in [
            "fm-Ti/Ne-CP/S(B)",
            "??-Dx/Ox-??/?(?)",
            "mf-Si/Fi-SC/B(P)",
            "f?-Nx/Tx",
        ] {
            assert_eq!(clean_coin_text(text), text);
        }
    }

    #[test]
    fn whitespace_becomes_dashes() {
        assert_eq!(clean_coin_text("fm Ti/Ne CP/S(B)"), "fm-Ti/Ne-CP/S(B)");
        assert_eq!(clean_coin_text("fm   Ti / Ne"), "fm-Ti/Ne");
        assert_eq!(clean_coin_text("fm -- Ti/Ne"), "fm-Ti/Ne");
    }

    #[test]
    fn drops_foreign_characters() {
        assert_eq!(clean_coin_text("fm-Ti/Ne!!-CP/S(B)#"), "fm-Ti/Ne-CP/S(B)");
        assert_eq!(clean_coin_text("zz fm-Ti/Ne"), "fm-Ti/Ne");
    }

    #[test]
    fn recases_by_role() {
        assert_eq!(clean_coin_text("FX-tI/nE-cp/s(x)"), "f?-Ti/Ne-CP/S(?)");
        assert_eq!(clean_coin_text("??-T?/N?"), "??-Tx/Nx");
    }

    #[test]
    fn reorders_segments() {
        assert_eq!(clean_coin_text("Ti/Ne fm"), "fm-Ti/Ne");
        assert_eq!(clean_coin_text("Ti/Ne-CP/S(B)"), "??-Ti/Ne-CP/S(B)");
    }

    #[test]
    fn empty_input() {
        assert_eq!(clean_coin_text(""), "");
        assert_eq!(clean_coin_text("  -- !! "), "");
    }

    #[test]
    fn idempotent_on_dirty_inputs() {
        for text in [
            " fm ti/ne cp/s(b) ",
            "Ti/Ne fm",
            "FX-tI/nE-cp/s(x)",
            "m - Se / Fi - SB/C(P)",
            "??",
            "ne/te",
        ] {
            let once = clean_coin_text(text);
            assert_eq!(clean_coin_text(&once), once, "{text:?}");
        }
    }
}
