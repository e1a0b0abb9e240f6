//! Animal codes.
//!
//! Four animals (Play, Blast, Consume, Sleep) are derived per type. Each one
//! is a pair of foci (one observer focus, one decider focus), has a single
//! structural opposite, and belongs to the energy or the info kind.
//!
//! | Animal  | Letter | Kind   | Focus | Observer | Decider | Flip side |
//! |---------|--------|--------|-------|----------|---------|-----------|
//! | Play    | `P`    | Energy | e     | e        | e       | Sleep     |
//! | Blast   | `B`    | Info   | e     | i        | e       | Consume   |
//! | Consume | `C`    | Info   | i     | e        | i       | Blast     |
//! | Sleep   | `S`    | Energy | i     | i        | i       | Play      |

use crate::core::constants::STACK_LEN;
use crate::letter::Focus;
use core::fmt;

/// An animal code, or unresolved.
///
/// # Example
///
/// ```
/// use opt512::Animal;
///
/// assert_eq!(Animal::Play.flip_side(), Animal::Sleep);
/// assert_eq!(Animal::Blast.flip_side(), Animal::Consume);
/// assert_eq!(Animal::from_symbol('C'), Some(Animal::Consume));
/// assert_eq!(Animal::Unknown.symbol(), '?');
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Animal {
    /// Play (`P`).
    Play,
    /// Blast (`B`).
    Blast,
    /// Consume (`C`).
    Consume,
    /// Sleep (`S`).
    Sleep,
    /// Unresolved (`?`).
    #[default]
    Unknown,
}

/// Energy or info animal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AnimalKind {
    /// Play and Sleep.
    Energy,
    /// Blast and Consume.
    Info,
}

impl Animal {
    /// The four resolved animals.
    pub const ALL: [Self; STACK_LEN] = [Self::Play, Self::Blast, Self::Consume, Self::Sleep];

    /// Rendered character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Play => 'P',
            Self::Blast => 'B',
            Self::Consume => 'C',
            Self::Sleep => 'S',
            Self::Unknown => '?',
        }
    }

    /// Parses a rendered character. `?` is `Unknown`.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'P' => Some(Self::Play),
            'B' => Some(Self::Blast),
            'C' => Some(Self::Consume),
            'S' => Some(Self::Sleep),
            '?' => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Full name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Blast => "Blast",
            Self::Consume => "Consume",
            Self::Sleep => "Sleep",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true unless `Unknown`.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// The structural opposite.
    #[must_use]
    pub const fn flip_side(self) -> Self {
        match self {
            Self::Play => Self::Sleep,
            Self::Sleep => Self::Play,
            Self::Blast => Self::Consume,
            Self::Consume => Self::Blast,
            Self::Unknown => Self::Unknown,
        }
    }

    /// Energy or info.
    #[must_use]
    pub const fn kind(self) -> Option<AnimalKind> {
        match self {
            Self::Play | Self::Sleep => Some(AnimalKind::Energy),
            Self::Blast | Self::Consume => Some(AnimalKind::Info),
            Self::Unknown => None,
        }
    }

    /// Orientation of the animal itself.
    ///
    /// This is also the A2/A3 coin focus that selects the animal: a second
    /// or third animal is introverted exactly when it is Consume or Sleep.
    #[must_use]
    pub const fn focus(self) -> Focus {
        match self {
            Self::Play | Self::Blast => Focus::Extraverted,
            Self::Consume | Self::Sleep => Focus::Introverted,
            Self::Unknown => Focus::Unresolved,
        }
    }

    /// Observer and decider foci of the function pair the animal joins.
    #[must_use]
    pub const fn function_foci(self) -> Option<(Focus, Focus)> {
        match self {
            Self::Play => Some((Focus::Extraverted, Focus::Extraverted)),
            Self::Blast => Some((Focus::Introverted, Focus::Extraverted)),
            Self::Consume => Some((Focus::Extraverted, Focus::Introverted)),
            Self::Sleep => Some((Focus::Introverted, Focus::Introverted)),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The four derived animals `[A1, A2, A3, A4]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct AnimalCodes(pub [Animal; STACK_LEN]);

impl AnimalCodes {
    /// Position of `animal` in the sequence.
    ///
    /// Returns `None` for an absent animal and always for `Unknown`.
    #[must_use]
    pub fn index_of(&self, animal: Animal) -> Option<usize> {
        if !animal.is_resolved() {
            return None;
        }
        self.0.iter().position(|&a| a == animal)
    }

    /// The animals in order.
    #[must_use]
    pub const fn as_array(&self) -> &[Animal; STACK_LEN] {
        &self.0
    }
}

impl fmt::Display for AnimalCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a1, a2, a3, a4] = self.0;
        write!(f, "{a1}{a2}/{a3}({a4})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_side_involution() {
        for animal in Animal::ALL {
            assert_eq!(animal.flip_side().flip_side(), animal);
            assert_ne!(animal.flip_side(), animal);
            assert_eq!(animal.flip_side().kind(), animal.kind());
        }
    }

    #[test]
    fn test_flip_side_negates_foci() {
        for animal in Animal::ALL {
            let (o, d) = animal.function_foci().unwrap();
            let (fo, fd) = animal.flip_side().function_foci().unwrap();
            assert_eq!((fo, fd), (o.flip(), d.flip()));
        }
    }

    #[test]
    fn test_symbol_roundtrip() {
        for animal in Animal::ALL {
            assert_eq!(Animal::from_symbol(animal.symbol()), Some(animal));
        }
        assert_eq!(Animal::from_symbol('?'), Some(Animal::Unknown));
        assert_eq!(Animal::from_symbol('X'), None);
    }

    #[test]
    fn test_index_of_ignores_unknown() {
        let codes = AnimalCodes([Animal::Sleep, Animal::Unknown, Animal::Unknown, Animal::Unknown]);
        assert_eq!(codes.index_of(Animal::Sleep), Some(0));
        assert_eq!(codes.index_of(Animal::Play), None);
        assert_eq!(codes.index_of(Animal::Unknown), None);
    }

    #[test]
    fn test_display() {
        let codes = AnimalCodes([Animal::Play, Animal::Blast, Animal::Consume, Animal::Sleep]);
        assert_eq!(codes.to_string(), "PB/C(S)");
    }
}
