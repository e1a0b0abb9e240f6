//! The nine named coins and the fixed-size coin vector.
//!
//! A [`Coins`] value is the whole input of the engine. Slots are addressed by
//! [`CoinSlot`], never by position arithmetic, and a vector is replaced
//! wholesale on every change.
//!
//! # Integer encoding
//!
//! A fully resolved vector maps to a 9-bit integer with slot index `i` at bit
//! `i` (slot 0 is the least significant bit):
//!
//! ```text
//! bit:   8     7     6     5    4    3    2   1   0
//! slot: A3ie  A2ie  Defm  Sfm  OiOe DiDe  NS  FT  OD
//! ```

use super::constants::{COIN_COUNT, TRINARY_VECTOR_COUNT, TYPE_MASK};
use super::trinary::Trinary;
use core::fmt;
use thiserror::Error;

/// A named coin axis.
///
/// The discriminant is the slot index inside [`Coins`] and the bit position in
/// the integer encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum CoinSlot {
    /// Observer (False) or Decider (True) dominant.
    Od = 0,
    /// Feeling (False) or Thinking (True) decider.
    Ft = 1,
    /// Intuition (False) or Sensing (True) observer.
    Ns = 2,
    /// Introverted (False) or extraverted (True) decider.
    DiDe = 3,
    /// Introverted (False) or extraverted (True) observer.
    OiOe = 4,
    /// Feminine (False) or masculine (True) sensory.
    Sfm = 5,
    /// Feminine (False) or masculine (True) extraverted decider.
    Defm = 6,
    /// Introverted (False) or extraverted (True) second animal.
    A2ie = 7,
    /// Introverted (False) or extraverted (True) third animal.
    A3ie = 8,
}

impl CoinSlot {
    /// All slots in index order.
    pub const ALL: [Self; COIN_COUNT] = [
        Self::Od,
        Self::Ft,
        Self::Ns,
        Self::DiDe,
        Self::OiOe,
        Self::Sfm,
        Self::Defm,
        Self::A2ie,
        Self::A3ie,
    ];

    /// Position of the slot in the vector.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short coin name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Od => "OD",
            Self::Ft => "FT",
            Self::Ns => "NS",
            Self::DiDe => "DiDe",
            Self::OiOe => "OiOe",
            Self::Sfm => "Sfm",
            Self::Defm => "Defm",
            Self::A2ie => "A2ie",
            Self::A3ie => "A3ie",
        }
    }

    /// Human-readable axis description.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Od => "Observer vs Decider",
            Self::Ft => "Feeling vs Thinking",
            Self::Ns => "Intuition vs Sensing",
            Self::DiDe => "Introverted vs Extraverted Decider",
            Self::OiOe => "Introverted vs Extraverted Observer",
            Self::Sfm => "Feminine vs Masculine Sensory",
            Self::Defm => "Feminine vs Masculine Extraverted Decider",
            Self::A2ie => "Introverted vs Extraverted Second Animal",
            Self::A3ie => "Introverted vs Extraverted Third Animal",
        }
    }
}

impl fmt::Display for CoinSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when decoding an integer outside the 9-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberError {
    /// The value does not fit in nine bits.
    #[error("type number {value} is outside 0..=511")]
    OutOfRange {
        /// The rejected value.
        value: u32,
    },
}

/// The nine coins of a type.
///
/// # Example
///
/// ```
/// use opt512::{CoinSlot, Coins, Trinary};
///
/// let coins = Coins::from_number(0b0_0000_0101);
/// assert_eq!(coins.get(CoinSlot::Od), Trinary::True);
/// assert_eq!(coins.get(CoinSlot::Ft), Trinary::False);
/// assert_eq!(coins.get(CoinSlot::Ns), Trinary::True);
/// assert_eq!(coins.to_number(), Some(5));
///
/// assert!(Coins::BLANK.is_blank());
/// assert_eq!(Coins::BLANK.to_number(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Coins([Trinary; COIN_COUNT]);

impl Coins {
    /// The blank vector: every coin unresolved.
    pub const BLANK: Self = Self([Trinary::Unknown; COIN_COUNT]);

    /// Creates a vector from values in slot order.
    #[inline]
    #[must_use]
    pub const fn new(values: [Trinary; COIN_COUNT]) -> Self {
        Self(values)
    }

    /// Creates a vector from optional sides in slot order.
    #[must_use]
    pub const fn from_options(values: [Option<bool>; COIN_COUNT]) -> Self {
        let mut coins = [Trinary::Unknown; COIN_COUNT];
        let mut i = 0;
        while i < COIN_COUNT {
            coins[i] = Trinary::from_option(values[i]);
            i += 1;
        }
        Self(coins)
    }

    /// Decodes a 9-bit integer. Bits above the ninth are ignored.
    #[must_use]
    pub const fn from_number(number: u16) -> Self {
        let number = number & TYPE_MASK;
        let mut coins = [Trinary::Unknown; COIN_COUNT];
        let mut i = 0;
        while i < COIN_COUNT {
            coins[i] = Trinary::from_bool(number & (1 << i) != 0);
            i += 1;
        }
        Self(coins)
    }

    /// Decodes an integer, rejecting values above 511.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::OutOfRange`] when `number` needs more than nine
    /// bits.
    pub fn try_from_number(number: u32) -> Result<Self, NumberError> {
        if number > u32::from(TYPE_MASK) {
            return Err(NumberError::OutOfRange { value: number });
        }
        Ok(Self::from_number(number as u16))
    }

    /// Decodes the `n`-th vector of the full trinary space (`0..3^9`).
    ///
    /// Slot `i` takes base-3 digit `i` of `n` as its table column. Values at
    /// or above 3^9 wrap.
    #[must_use]
    pub const fn from_trinary_index(n: usize) -> Self {
        let mut n = n % TRINARY_VECTOR_COUNT;
        let mut coins = [Trinary::Unknown; COIN_COUNT];
        let mut i = 0;
        while i < COIN_COUNT {
            coins[i] = Trinary::ALL[n % 3];
            n /= 3;
            i += 1;
        }
        Self(coins)
    }

    /// Encodes the vector as a 9-bit integer.
    ///
    /// Returns `None` when any coin is unresolved.
    #[must_use]
    pub const fn to_number(self) -> Option<u16> {
        let mut number = 0u16;
        let mut i = 0;
        while i < COIN_COUNT {
            match self.0[i] {
                Trinary::True => number |= 1 << i,
                Trinary::False => {}
                Trinary::Unknown => return None,
            }
            i += 1;
        }
        Some(number)
    }

    /// Value of one coin.
    #[inline]
    #[must_use]
    pub const fn get(self, slot: CoinSlot) -> Trinary {
        self.0[slot.index()]
    }

    /// Returns a copy with one coin replaced.
    #[inline]
    #[must_use]
    pub const fn with(self, slot: CoinSlot, value: Trinary) -> Self {
        let mut coins = self.0;
        coins[slot.index()] = value;
        Self(coins)
    }

    /// Flips every coin.
    ///
    /// On a resolved vector this is the bitwise complement of the integer
    /// encoding within nine bits. Unresolved coins stay unresolved.
    #[must_use]
    pub const fn complement(self) -> Self {
        let mut coins = self.0;
        let mut i = 0;
        while i < COIN_COUNT {
            coins[i] = coins[i].flip();
            i += 1;
        }
        Self(coins)
    }

    /// The values in slot order.
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[Trinary; COIN_COUNT] {
        &self.0
    }

    /// Iterates over `(slot, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (CoinSlot, Trinary)> + '_ {
        CoinSlot::ALL.iter().map(move |&slot| (slot, self.get(slot)))
    }

    /// Number of coins equal to `value`.
    #[must_use]
    pub fn count(&self, value: Trinary) -> usize {
        self.0.iter().filter(|&&coin| coin == value).count()
    }

    /// Number of `True` coins.
    #[must_use]
    pub fn true_count(&self) -> usize {
        self.count(Trinary::True)
    }

    /// Number of `False` coins.
    #[must_use]
    pub fn false_count(&self) -> usize {
        self.count(Trinary::False)
    }

    /// Number of unresolved coins.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.count(Trinary::Unknown)
    }

    /// Returns true when every coin is unresolved.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.unknown_count() == COIN_COUNT
    }

    /// Returns true when no coin is unresolved.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.unknown_count() == 0
    }
}

impl From<[Trinary; COIN_COUNT]> for Coins {
    fn from(values: [Trinary; COIN_COUNT]) -> Self {
        Self::new(values)
    }
}

impl fmt::Debug for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coins(")?;
        for value in &self.0 {
            write!(f, "{}", value.symbol())?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::TYPE_COUNT;

    #[test]
    fn test_slot_indices() {
        for (i, slot) in CoinSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_number_roundtrip() {
        for n in 0..TYPE_COUNT as u16 {
            assert_eq!(Coins::from_number(n).to_number(), Some(n));
        }
    }

    #[test]
    fn test_lsb_is_slot_zero() {
        let coins = Coins::from_number(1);
        assert_eq!(coins.get(CoinSlot::Od), Trinary::True);
        assert_eq!(coins.true_count(), 1);
        let coins = Coins::from_number(1 << 8);
        assert_eq!(coins.get(CoinSlot::A3ie), Trinary::True);
    }

    #[test]
    fn test_from_number_masks_high_bits() {
        assert_eq!(Coins::from_number(0b10_0000_0011), Coins::from_number(3));
    }

    #[test]
    fn test_try_from_number_range() {
        assert!(Coins::try_from_number(511).is_ok());
        assert_eq!(
            Coins::try_from_number(512),
            Err(NumberError::OutOfRange { value: 512 })
        );
    }

    #[test]
    fn test_complement_is_xor() {
        for n in 0..TYPE_COUNT as u16 {
            let coins = Coins::from_number(n);
            assert_eq!(coins.complement().to_number(), Some(n ^ TYPE_MASK));
            assert_eq!(coins.complement().complement(), coins);
        }
    }

    #[test]
    fn test_complement_keeps_unknown() {
        let coins = Coins::BLANK.with(CoinSlot::Ft, Trinary::True);
        let flipped = coins.complement();
        assert_eq!(flipped.get(CoinSlot::Ft), Trinary::False);
        assert_eq!(flipped.unknown_count(), COIN_COUNT - 1);
    }

    #[test]
    fn test_counts() {
        let coins = Coins::from_options([
            Some(true),
            Some(true),
            Some(false),
            None,
            None,
            None,
            Some(false),
            Some(true),
            None,
        ]);
        assert_eq!(coins.true_count(), 3);
        assert_eq!(coins.false_count(), 2);
        assert_eq!(coins.unknown_count(), 4);
        assert!(!coins.is_blank());
        assert!(!coins.is_full());
    }

    #[test]
    fn test_trinary_index_covers_space() {
        assert_eq!(Coins::from_trinary_index(0), Coins::new([Trinary::False; 9]));
        assert_eq!(Coins::from_trinary_index(TRINARY_VECTOR_COUNT - 1), Coins::BLANK);
        let distinct: std::collections::HashSet<Coins> = (0..TRINARY_VECTOR_COUNT)
            .map(Coins::from_trinary_index)
            .collect();
        assert_eq!(distinct.len(), TRINARY_VECTOR_COUNT);
    }
}
