//! Lookup tables for the derivation lattice.
//!
//! Every non-trivial step of the derivation is a lookup in one of the
//! tables below. Keys that are missing from a table (because an input is
//! unresolved) resolve to the `Unknown` variant of the result type; no lookup
//! fails.
//!
//! # Tables Provided
//!
//! - **A1**: first animal from the observer and decider foci
//! - **A2**: second animal from A1 and the A2 coin focus
//! - **A3**: third animal from A1, A2 and the A3 coin focus
//! - **A4**: the remaining animal, keyed by the alphabetically sorted letters
//!   of A1..A3
//! - **Animal stack**: fixed animal order for each A1
//! - **Activation**: animal pairs per function association, points per
//!   animal position, and activation tiers
//!
//! # Example
//!
//! ```
//! use opt512::lut::{a1, a2, a3, a4};
//! use opt512::{Animal, Focus};
//!
//! let first = a1(Focus::Extraverted, Focus::Extraverted);
//! assert_eq!(first, Animal::Play);
//! let second = a2(first, Focus::Extraverted);
//! assert_eq!(second, Animal::Blast);
//! let third = a3(first, second, Focus::Introverted);
//! assert_eq!(third, Animal::Sleep);
//! assert_eq!(a4(first, second, third), Animal::Consume);
//! ```

use crate::animal::Animal;
use crate::core::constants::STACK_LEN;
use crate::core::trinary::Trinary;
use crate::letter::{Focus, OdLetter};

use Animal::{Blast, Consume, Play, Sleep};
use Focus::{Extraverted as E, Introverted as I};

/// Finds the value stored under `key`.
#[inline]
pub fn lookup<K: Copy + PartialEq, V: Copy>(table: &[(K, V)], key: K) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

// ============================================================================
// Animal Derivation Tables
// ============================================================================

/// A1 keyed by `(observer focus, decider focus)`: `OiDi`, `OiDe`, `OeDi`, `OeDe`.
pub const A1_BY_FOCI: [((Focus, Focus), Animal); 4] = [
    ((I, I), Sleep),
    ((I, E), Blast),
    ((E, I), Consume),
    ((E, E), Play),
];

/// A2 keyed by `(A1, A2 focus)`.
pub const A2_BY_A1_FOCUS: [((Animal, Focus), Animal); 8] = [
    ((Sleep, I), Consume),
    ((Consume, I), Sleep),
    ((Blast, I), Sleep),
    ((Play, I), Consume),
    ((Sleep, E), Blast),
    ((Consume, E), Play),
    ((Blast, E), Play),
    ((Play, E), Blast),
];

/// A3 keyed by `(A1, A2, A3 focus)`.
pub const A3_BY_A1_A2_FOCUS: [((Animal, Animal, Focus), Animal); 16] = [
    ((Sleep, Consume, I), Blast),
    ((Consume, Sleep, I), Blast),
    ((Sleep, Blast, I), Consume),
    ((Blast, Sleep, I), Consume),
    ((Play, Consume, I), Sleep),
    ((Consume, Play, I), Sleep),
    ((Blast, Play, I), Sleep),
    ((Play, Blast, I), Sleep),
    ((Sleep, Consume, E), Play),
    ((Consume, Sleep, E), Play),
    ((Sleep, Blast, E), Play),
    ((Blast, Sleep, E), Play),
    ((Play, Consume, E), Blast),
    ((Consume, Play, E), Blast),
    ((Blast, Play, E), Consume),
    ((Play, Blast, E), Consume),
];

/// A4 keyed by the letters of A1, A2 and A3 in ASCII order.
///
/// Order of A1..A3 does not matter, which is why the key is sorted before the
/// lookup. Any key containing `?` misses.
pub const A4_BY_SORTED_LETTERS: [([u8; 3], Animal); 4] = [
    (*b"BCP", Sleep),
    (*b"BPS", Consume),
    (*b"CPS", Blast),
    (*b"BCS", Play),
];

/// Fixed animal order for each first animal.
pub const ANIMAL_STACK_BY_A1: [(Animal, [Animal; STACK_LEN]); 4] = [
    (Play, [Play, Consume, Blast, Sleep]),
    (Blast, [Blast, Sleep, Play, Consume]),
    (Consume, [Consume, Play, Sleep, Blast]),
    (Sleep, [Sleep, Blast, Consume, Play]),
];

/// First animal. `Unknown` unless both foci are resolved.
#[must_use]
pub fn a1(observer_focus: Focus, decider_focus: Focus) -> Animal {
    lookup(&A1_BY_FOCI, (observer_focus, decider_focus)).unwrap_or(Animal::Unknown)
}

/// Second animal. `Unknown` unless A1 and the focus are resolved.
#[must_use]
pub fn a2(a1: Animal, focus: Focus) -> Animal {
    lookup(&A2_BY_A1_FOCUS, (a1, focus)).unwrap_or(Animal::Unknown)
}

/// Third animal. `Unknown` unless A1, A2 and the focus are resolved.
#[must_use]
pub fn a3(a1: Animal, a2: Animal, focus: Focus) -> Animal {
    lookup(&A3_BY_A1_A2_FOCUS, (a1, a2, focus)).unwrap_or(Animal::Unknown)
}

/// Fourth animal: the one letter missing from A1..A3.
#[must_use]
pub fn a4(a1: Animal, a2: Animal, a3: Animal) -> Animal {
    let mut key = [a1.symbol() as u8, a2.symbol() as u8, a3.symbol() as u8];
    key.sort_unstable();
    lookup(&A4_BY_SORTED_LETTERS, key).unwrap_or(Animal::Unknown)
}

/// Foci that produce `animal` as A1.
#[must_use]
pub fn foci_for_a1(animal: Animal) -> Option<(Focus, Focus)> {
    A1_BY_FOCI
        .iter()
        .find(|&&(_, a)| a == animal)
        .map(|&(foci, _)| foci)
}

/// Animal stack for a first animal. `None` when A1 is unresolved.
#[must_use]
pub fn animal_stack(a1: Animal) -> Option<[Animal; STACK_LEN]> {
    lookup(&ANIMAL_STACK_BY_A1, a1)
}

// ============================================================================
// Activation Tables
// ============================================================================

/// Animals feeding a function's activation, keyed by its
/// `(OD association, focus)`.
pub const ANIMALS_BY_ASSOCIATION: [((OdLetter, Focus), [Animal; 2]); 4] = [
    ((OdLetter::Observer, I), [Sleep, Blast]),
    ((OdLetter::Observer, E), [Consume, Play]),
    ((OdLetter::Decider, I), [Sleep, Consume]),
    ((OdLetter::Decider, E), [Blast, Play]),
];

/// Activation points contributed by an animal at each position of
/// `[A1, A2, A3, A4]` (`3 - position`). An absent animal contributes 0.
pub const ACTIVATION_BY_POSITION: [u8; STACK_LEN] = [3, 2, 1, 0];

/// Activation tier for activation sums 0 through 5.
pub const ACTIVATION_TIERS: [u8; 6] = [1, 1, 1, 2, 2, 2];

/// Animal pair for a function association. `None` when either part is
/// unresolved.
#[must_use]
pub fn animals_for(od_letter: OdLetter, focus: Focus) -> Option<[Animal; 2]> {
    lookup(&ANIMALS_BY_ASSOCIATION, (od_letter, focus))
}

/// Points for an animal position.
#[must_use]
pub fn activation_points(position: Option<usize>) -> u8 {
    position
        .and_then(|p| ACTIVATION_BY_POSITION.get(p).copied())
        .unwrap_or(0)
}

/// Tier of an activation sum. `None` outside 0..=5.
#[must_use]
pub fn activation_tier(activation: u8) -> Option<u8> {
    ACTIVATION_TIERS.get(activation as usize).copied()
}

// ============================================================================
// Side Tables
// ============================================================================

/// Energy (True) or info (False) side, keyed by A4.
pub const ENERGY_INFO_BY_A4: [(Animal, Trinary); 4] = [
    (Sleep, Trinary::True),
    (Consume, Trinary::False),
    (Blast, Trinary::False),
    (Play, Trinary::True),
];

/// Energy/info side for a fourth animal.
#[must_use]
pub fn energy_info_side(a4: Animal) -> Trinary {
    lookup(&ENERGY_INFO_BY_A4, a4).unwrap_or(Trinary::Unknown)
}
