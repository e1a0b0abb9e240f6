//! Strict parsing and rendering of canonical coin text.
//!
//! ```text
//! fm-Ti/Ne-CP/S(B)
//! ││ │  │   ││ │ └─ A4
//! ││ │  │   ││ └─── A3
//! ││ │  │   │└───── A2
//! ││ │  │   └────── A1
//! ││ │  └────────── S2 code
//! ││ └───────────── S1 code
//! │└─────────────── extraverted-decider sex
//! └──────────────── sensory sex
//! ```
//!
//! The animal segment is optional. Animals are not stored directly: A1 is
//! checked against (or fills in) the foci, A2 and A3 select their coin
//! focus, and A4 is checked against the other three.

use super::clean::clean_coin_text;
use super::ParseError;
use crate::animal::Animal;
use crate::core::coin::Coins;
use crate::letter::{
    Code, Focus, Letter, OdLetter, Sex, A2_FOCUS, A3_FOCUS, DECIDER_FOCUS, DECIDER_LETTER,
    DECIDER_SEX, OBSERVER_FOCUS, OBSERVER_LETTER, OD_LETTER, SENSORY_SEX,
};
use crate::lut;
use crate::opt::Opt512;
use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::debug;

/// Canonical grammar. Groups: two sexes, two codes as letter and focus,
/// then the four optional animals.
const GRAMMAR: &str = r"^([fm?])([fm?])-([NSOFTD])([iex])/([NSOFTD])([iex])(?:-([PBCS?])([PBCS?])/([PBCS?])\(([PBCS?])\))?$";

static GRAMMAR_RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

fn grammar() -> Result<&'static Regex, ParseError> {
    GRAMMAR_RE
        .get_or_init(|| Regex::new(GRAMMAR))
        .as_ref()
        .map_err(|e| ParseError::Grammar(e.clone()))
}

/// Parses canonical coin text into a type.
///
/// # Errors
///
/// Returns [`ParseError`] when the text does not match the grammar, when both
/// codes sit on the same side, or when the animals contradict the coins.
///
/// # Example
///
/// ```
/// use opt512::text::parse_coin_text;
/// use opt512::{Animal, OdLetter};
///
/// let opt = parse_coin_text("mf-Si/Fi-SC/B(P)").unwrap();
/// assert_eq!(opt.od_letter(), OdLetter::Observer);
/// assert_eq!(opt.a1(), Animal::Sleep);
/// assert!(parse_coin_text("mf-Se/Ni").is_err());
/// ```
pub fn parse_coin_text(text: &str) -> Result<Opt512, ParseError> {
    parse_captures(text).map_err(|err| {
        debug!(input = text, error = %err, "coin text rejected");
        err
    })
}

fn parse_captures(text: &str) -> Result<Opt512, ParseError> {
    let caps = grammar()?
        .captures(text)
        .ok_or_else(|| ParseError::Malformed {
            input: text.to_string(),
        })?;
    let malformed = || ParseError::Malformed {
        input: text.to_string(),
    };

    let sex = |i: usize| char_at(&caps, i).and_then(Sex::from_symbol).ok_or_else(malformed);
    let code = |i: usize| -> Result<Code, ParseError> {
        let letter = char_at(&caps, i).and_then(Letter::from_symbol);
        let focus = char_at(&caps, i + 1).and_then(Focus::from_symbol);
        match (letter, focus) {
            (Some(letter), Some(focus)) => Ok(Code::new(letter, focus)),
            _ => Err(malformed()),
        }
    };

    let first = code(3)?;
    let second = code(5)?;
    if first.is_observer() == second.is_observer() {
        return Err(ParseError::ConflictingFunctions { first, second });
    }
    let (observer, decider, od) = if first.is_observer() {
        (first, second, OdLetter::Observer)
    } else {
        (second, first, OdLetter::Decider)
    };

    let mut coins = Coins::BLANK;
    coins = SENSORY_SEX.write(coins, sex(1)?);
    coins = DECIDER_SEX.write(coins, sex(2)?);
    coins = OD_LETTER.write(coins, od);
    if let Letter::Observer(letter) = observer.letter {
        coins = OBSERVER_LETTER.write(coins, letter);
    }
    if let Letter::Decider(letter) = decider.letter {
        coins = DECIDER_LETTER.write(coins, letter);
    }
    coins = OBSERVER_FOCUS.write(coins, observer.focus);
    coins = DECIDER_FOCUS.write(coins, decider.focus);

    if caps.get(7).is_none() {
        return Ok(Opt512::new(coins));
    }
    let animal = |i: usize| char_at(&caps, i).and_then(Animal::from_symbol).ok_or_else(malformed);
    apply_animals(coins, [animal(7)?, animal(8)?, animal(9)?, animal(10)?])
}

fn char_at(caps: &Captures<'_>, group: usize) -> Option<char> {
    caps.get(group).and_then(|m| m.as_str().chars().next())
}

/// Folds the animal segment into `coins`.
fn apply_animals(mut coins: Coins, animals: [Animal; 4]) -> Result<Opt512, ParseError> {
    let [first, second, third, fourth] = animals;

    if let Some((observer, decider)) = lut::foci_for_a1(first) {
        if !OBSERVER_FOCUS.read(coins).is_resolved() {
            coins = OBSERVER_FOCUS.write(coins, observer);
        }
        if !DECIDER_FOCUS.read(coins).is_resolved() {
            coins = DECIDER_FOCUS.write(coins, decider);
        }
        let derived = Opt512::new(coins).a1();
        if derived != first {
            return Err(ParseError::InconsistentAnimal {
                slot: 1,
                expected: derived,
                found: first,
            });
        }
    }

    let a1 = Opt512::new(coins).a1();
    if second.is_resolved() {
        let focus = second.focus();
        if a1.is_resolved() && lut::a2(a1, focus) != second {
            return Err(ParseError::UnknownAnimal {
                slot: 2,
                found: second,
            });
        }
        coins = A2_FOCUS.write(coins, focus);
    }

    if third.is_resolved() {
        let a2 = Opt512::new(coins).a2();
        if a1.is_resolved() && a2.is_resolved() {
            let focus = [Focus::Introverted, Focus::Extraverted]
                .into_iter()
                .find(|&f| lut::a3(a1, a2, f) == third)
                .ok_or(ParseError::UnknownAnimal {
                    slot: 3,
                    found: third,
                })?;
            coins = A3_FOCUS.write(coins, focus);
        } else {
            debug!(a3 = %third, "third animal ignored without first and second");
        }
    }

    let opt = Opt512::new(coins);
    let derived = opt.a4();
    if fourth.is_resolved() && derived.is_resolved() && derived != fourth {
        return Err(ParseError::InconsistentAnimal {
            slot: 4,
            expected: derived,
            found: fourth,
        });
    }
    Ok(opt)
}

/// Renders a type as canonical coin text.
///
/// The animal segment is always present, with `?` for unresolved animals.
#[must_use]
pub fn render_coin_text(opt: Opt512) -> String {
    let raw = format!(
        "{}{}-{}/{}-{}",
        opt.sensory_sex(),
        opt.decider_sex(),
        opt.s1(),
        opt.s2(),
        opt.animal_codes()
    );
    clean_coin_text(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::TYPE_COUNT;
    use crate::letter::{DeciderLetter, ObserverLetter};

    #[test]
    fn parses_resolved_text() {
        let opt = parse_coin_text("fm-Ti/Ne-CP/S(B)").unwrap();
        assert_eq!(opt.od_letter(), OdLetter::Decider);
        assert_eq!(opt.decider_letter(), DeciderLetter::Thinking);
        assert_eq!(opt.observer_letter(), ObserverLetter::Intuition);
        assert_eq!(opt.sensory_sex(), Sex::Feminine);
        assert_eq!(opt.decider_sex(), Sex::Masculine);
        assert!(opt.is_full());
        assert_eq!(render_coin_text(opt), "fm-Ti/Ne-CP/S(B)");
    }

    #[test]
    fn animal_segment_is_optional() {
        let opt = parse_coin_text("??-Ni/Fe").unwrap();
        assert_eq!(opt.a2_focus(), Focus::Unresolved);
        assert_eq!(opt.a3_focus(), Focus::Unresolved);
        assert_eq!(opt.a1(), Animal::Blast);
        assert_eq!(render_coin_text(opt), "??-Ni/Fe-B?/?(?)");
    }

    #[test]
    fn rejects_malformed_text() {
        for text in ["", "fm", "fm-Ti/Ne-", "fm-ti/ne", "fm-Ti/Ne-CP/S", "xm-Ti/Ne"] {
            assert!(
                matches!(parse_coin_text(text), Err(ParseError::Malformed { .. })),
                "{text:?}"
            );
        }
    }

    #[test]
    fn rejects_same_side_codes() {
        let err = parse_coin_text("fm-Ti/Fe").unwrap_err();
        assert!(matches!(err, ParseError::ConflictingFunctions { .. }));
        let err = parse_coin_text("fm-Ne/Ox").unwrap_err();
        assert!(matches!(err, ParseError::ConflictingFunctions { .. }));
    }

    #[test]
    fn rejects_first_animal_against_foci() {
        // Ti/Ne gives Consume.
        let err = parse_coin_text("fm-Ti/Ne-PB/C(S)").unwrap_err();
        assert_eq!(
            err,
            ParseError::InconsistentAnimal {
                slot: 1,
                expected: Animal::Consume,
                found: Animal::Play,
            }
        );
    }

    #[test]
    fn first_animal_fills_unresolved_foci() {
        let opt = parse_coin_text("??-Tx/Nx-P?/?(?)").unwrap();
        assert_eq!(opt.decider_focus(), Focus::Extraverted);
        assert_eq!(opt.observer_focus(), Focus::Extraverted);
        assert_eq!(opt.s1().to_string(), "Te");
    }

    #[test]
    fn rejects_unreachable_animals() {
        // Consume can follow up with Sleep or Play only.
        let err = parse_coin_text("fm-Ti/Ne-CB/S(P)").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownAnimal {
                slot: 2,
                found: Animal::Blast
            }
        );
        let err = parse_coin_text("fm-Ti/Ne-CP/C(B)").unwrap_err();
        assert!(matches!(err, ParseError::UnknownAnimal { slot: 3, .. }));
    }

    #[test]
    fn rejects_wrong_fourth_animal() {
        let err = parse_coin_text("fm-Ti/Ne-CP/S(P)").unwrap_err();
        assert_eq!(
            err,
            ParseError::InconsistentAnimal {
                slot: 4,
                expected: Animal::Blast,
                found: Animal::Play,
            }
        );
    }

    #[test]
    fn resolved_roundtrip() {
        for n in 0..TYPE_COUNT as u16 {
            let opt = Opt512::from_number(n);
            let text = render_coin_text(opt);
            assert_eq!(parse_coin_text(&text), Ok(opt), "{text}");
        }
    }
}
