//! Letters, foci and sexes, and the three-way tables binding them to coins.
//!
//! Each coin slot reads as a human symbol through a [`SymbolTable`] with one
//! column per [`Trinary`] value:
//!
//! | Table              | Slot | False | True | Unknown |
//! |--------------------|------|-------|------|---------|
//! | [`OD_LETTER`]      | OD   | `O`   | `D`  | `?`     |
//! | [`DECIDER_LETTER`] | FT   | `F`   | `T`  | `D`     |
//! | [`OBSERVER_LETTER`]| NS   | `N`   | `S`  | `O`     |
//! | [`DECIDER_FOCUS`]  | DiDe | `i`   | `e`  | `x`     |
//! | [`OBSERVER_FOCUS`] | OiOe | `i`   | `e`  | `x`     |
//! | [`A2_FOCUS`]       | A2ie | `i`   | `e`  | `x`     |
//! | [`A3_FOCUS`]       | A3ie | `i`   | `e`  | `x`     |
//! | [`SENSORY_SEX`]    | Sfm  | `f`   | `m`  | `?`     |
//! | [`DECIDER_SEX`]    | Defm | `f`   | `m`  | `?`     |
//!
//! Reading and writing use the same table, so a setter is the exact inverse
//! of its getter.
//!
//! The unresolved observer letter renders as `O` and the unresolved decider
//! letter as `D`, the same characters [`OdLetter`] uses for its resolved
//! values. The two live in separate types ([`ObserverLetter::Unresolved`] vs
//! [`OdLetter::Observer`]) so they never compare equal.

use crate::core::coin::{CoinSlot, Coins};
use crate::core::trinary::Trinary;
use core::fmt;

// ============================================================================
// Symbol types
// ============================================================================

/// Which pair leads the stack: observers or deciders.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum OdLetter {
    /// Observer-dominant (`O`).
    Observer,
    /// Decider-dominant (`D`).
    Decider,
    /// Unresolved (`?`).
    Unknown,
}

impl OdLetter {
    /// Rendered character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Observer => 'O',
            Self::Decider => 'D',
            Self::Unknown => '?',
        }
    }

    /// The other side. `Unknown` stays unknown.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Observer => Self::Decider,
            Self::Decider => Self::Observer,
            Self::Unknown => Self::Unknown,
        }
    }
}

/// Observer letter: Intuition, Sensing, or the unresolved observer `O`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ObserverLetter {
    /// Intuition (`N`).
    Intuition,
    /// Sensing (`S`).
    Sensing,
    /// Unresolved observer (`O`).
    Unresolved,
}

impl ObserverLetter {
    /// Rendered character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Intuition => 'N',
            Self::Sensing => 'S',
            Self::Unresolved => 'O',
        }
    }

    /// The opposite observer letter. The unresolved letter maps to itself.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Intuition => Self::Sensing,
            Self::Sensing => Self::Intuition,
            Self::Unresolved => Self::Unresolved,
        }
    }
}

/// Decider letter: Feeling, Thinking, or the unresolved decider `D`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DeciderLetter {
    /// Feeling (`F`).
    Feeling,
    /// Thinking (`T`).
    Thinking,
    /// Unresolved decider (`D`).
    Unresolved,
}

impl DeciderLetter {
    /// Rendered character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Feeling => 'F',
            Self::Thinking => 'T',
            Self::Unresolved => 'D',
        }
    }

    /// The opposite decider letter. The unresolved letter maps to itself.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Feeling => Self::Thinking,
            Self::Thinking => Self::Feeling,
            Self::Unresolved => Self::Unresolved,
        }
    }
}

/// Letter of a function in the stack.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Letter {
    /// An observer letter (`N`, `S` or `O`).
    Observer(ObserverLetter),
    /// A decider letter (`F`, `T` or `D`).
    Decider(DeciderLetter),
}

impl Letter {
    /// Intuition.
    pub const N: Self = Self::Observer(ObserverLetter::Intuition);
    /// Sensing.
    pub const S: Self = Self::Observer(ObserverLetter::Sensing);
    /// Feeling.
    pub const F: Self = Self::Decider(DeciderLetter::Feeling);
    /// Thinking.
    pub const T: Self = Self::Decider(DeciderLetter::Thinking);
    /// Unresolved observer.
    pub const O: Self = Self::Observer(ObserverLetter::Unresolved);
    /// Unresolved decider.
    pub const D: Self = Self::Decider(DeciderLetter::Unresolved);

    /// Every letter.
    pub const ALL: [Self; 6] = [Self::N, Self::S, Self::O, Self::F, Self::T, Self::D];

    /// Rendered character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Observer(letter) => letter.symbol(),
            Self::Decider(letter) => letter.symbol(),
        }
    }

    /// Parses a rendered character.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'N' => Some(Self::N),
            'S' => Some(Self::S),
            'O' => Some(Self::O),
            'F' => Some(Self::F),
            'T' => Some(Self::T),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    /// The opposite letter of the same kind.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Observer(letter) => Self::Observer(letter.flip()),
            Self::Decider(letter) => Self::Decider(letter.flip()),
        }
    }

    /// Returns true for observer letters.
    #[must_use]
    pub const fn is_observer(self) -> bool {
        matches!(self, Self::Observer(_))
    }

    /// Returns false for the placeholders `O` and `D`.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(
            self,
            Self::Observer(ObserverLetter::Unresolved) | Self::Decider(DeciderLetter::Unresolved)
        )
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Orientation of a function or animal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Focus {
    /// Introverted (`i`).
    Introverted,
    /// Extraverted (`e`).
    Extraverted,
    /// Unresolved (`x`).
    Unresolved,
}

impl Focus {
    /// Every focus.
    pub const ALL: [Self; 3] = [Self::Introverted, Self::Extraverted, Self::Unresolved];

    /// Rendered character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Introverted => 'i',
            Self::Extraverted => 'e',
            Self::Unresolved => 'x',
        }
    }

    /// Parses a rendered character.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'i' => Some(Self::Introverted),
            'e' => Some(Self::Extraverted),
            'x' => Some(Self::Unresolved),
            _ => None,
        }
    }

    /// The opposite orientation. `x` maps to itself.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Introverted => Self::Extraverted,
            Self::Extraverted => Self::Introverted,
            Self::Unresolved => Self::Unresolved,
        }
    }

    /// Returns true for `i` and `e`.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Sex (temperament polarity) of a function.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Sex {
    /// Feminine (`f`).
    Feminine,
    /// Masculine (`m`).
    Masculine,
    /// Unresolved (`?`).
    #[default]
    Unknown,
}

impl Sex {
    /// Rendered character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Feminine => 'f',
            Self::Masculine => 'm',
            Self::Unknown => '?',
        }
    }

    /// Parses a rendered character.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'f' => Some(Self::Feminine),
            'm' => Some(Self::Masculine),
            '?' => Some(Self::Unknown),
            _ => None,
        }
    }

    /// The opposite sex. Unknown stays unknown.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Feminine => Self::Masculine,
            Self::Masculine => Self::Feminine,
            Self::Unknown => Self::Unknown,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// Function codes
// ============================================================================

/// A two-character function code: letter plus focus (`Te`, `Ni`, `Dx`, ...).
///
/// # Example
///
/// ```
/// use opt512::{Code, Focus, Letter};
///
/// let te = Code::new(Letter::T, Focus::Extraverted);
/// assert_eq!(te.to_string(), "Te");
/// assert_eq!(te.flip().to_string(), "Fi");
/// assert_eq!(te.flip().flip(), te);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Code {
    /// The function letter.
    pub letter: Letter,
    /// The function focus.
    pub focus: Focus,
}

impl Code {
    /// Creates a code.
    #[inline]
    #[must_use]
    pub const fn new(letter: Letter, focus: Focus) -> Self {
        Self { letter, focus }
    }

    /// Every code: nine observer and nine decider combinations.
    #[must_use]
    pub fn all() -> [Self; 18] {
        let mut codes = [Self::new(Letter::O, Focus::Unresolved); 18];
        for (i, letter) in Letter::ALL.iter().enumerate() {
            for (j, focus) in Focus::ALL.iter().enumerate() {
                codes[i * 3 + j] = Self::new(*letter, *focus);
            }
        }
        codes
    }

    /// The opposite function: letter and focus both negated.
    ///
    /// `Te ↔ Fi`, `Se ↔ Ni`, `Ne ↔ Si`, `Fe ↔ Ti`, `Sx ↔ Nx`, `Fx ↔ Tx`,
    /// `Oe ↔ Oi`, `De ↔ Di`, while `Ox` and `Dx` map to themselves.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Self {
        Self::new(self.letter.flip(), self.focus.flip())
    }

    /// Returns true for observer codes.
    #[inline]
    #[must_use]
    pub const fn is_observer(self) -> bool {
        self.letter.is_observer()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.symbol(), self.focus.symbol())
    }
}

// ============================================================================
// Coin symbol tables
// ============================================================================

/// A three-way mapping between one coin slot and a symbol type.
///
/// `symbols[v.index()]` is the symbol for coin value `v`.
///
/// # Example
///
/// ```
/// use opt512::letter::{DECIDER_LETTER, OBSERVER_LETTER};
/// use opt512::{Coins, DeciderLetter, ObserverLetter};
///
/// let coins = DECIDER_LETTER.write(Coins::BLANK, DeciderLetter::Thinking);
/// assert_eq!(DECIDER_LETTER.read(coins), DeciderLetter::Thinking);
/// assert_eq!(OBSERVER_LETTER.read(coins), ObserverLetter::Unresolved);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SymbolTable<T: 'static> {
    /// The coin slot read and written.
    pub slot: CoinSlot,
    /// Symbols for `False`, `True` and `Unknown`.
    pub symbols: [T; 3],
}

impl<T: Copy + PartialEq> SymbolTable<T> {
    /// Reads the symbol for the slot's current value.
    #[inline]
    #[must_use]
    pub fn read(&self, coins: Coins) -> T {
        self.symbols[coins.get(self.slot).index()]
    }

    /// Writes the coin value whose symbol is `symbol`.
    #[must_use]
    pub fn write(&self, coins: Coins, symbol: T) -> Coins {
        let value = self
            .symbols
            .iter()
            .position(|&candidate| candidate == symbol)
            .map_or(Trinary::Unknown, |column| Trinary::ALL[column]);
        coins.with(self.slot, value)
    }
}

/// OD coin as the dominant-pair letter.
pub const OD_LETTER: SymbolTable<OdLetter> = SymbolTable {
    slot: CoinSlot::Od,
    symbols: [OdLetter::Observer, OdLetter::Decider, OdLetter::Unknown],
};

/// FT coin as the decider letter.
pub const DECIDER_LETTER: SymbolTable<DeciderLetter> = SymbolTable {
    slot: CoinSlot::Ft,
    symbols: [
        DeciderLetter::Feeling,
        DeciderLetter::Thinking,
        DeciderLetter::Unresolved,
    ],
};

/// NS coin as the observer letter.
pub const OBSERVER_LETTER: SymbolTable<ObserverLetter> = SymbolTable {
    slot: CoinSlot::Ns,
    symbols: [
        ObserverLetter::Intuition,
        ObserverLetter::Sensing,
        ObserverLetter::Unresolved,
    ],
};

const FOCI: [Focus; 3] = [Focus::Introverted, Focus::Extraverted, Focus::Unresolved];

const SEXES: [Sex; 3] = [Sex::Feminine, Sex::Masculine, Sex::Unknown];

/// DiDe coin as the decider focus.
pub const DECIDER_FOCUS: SymbolTable<Focus> = SymbolTable {
    slot: CoinSlot::DiDe,
    symbols: FOCI,
};

/// OiOe coin as the observer focus.
pub const OBSERVER_FOCUS: SymbolTable<Focus> = SymbolTable {
    slot: CoinSlot::OiOe,
    symbols: FOCI,
};

/// A2ie coin as the second animal's focus.
pub const A2_FOCUS: SymbolTable<Focus> = SymbolTable {
    slot: CoinSlot::A2ie,
    symbols: FOCI,
};

/// A3ie coin as the third animal's focus.
pub const A3_FOCUS: SymbolTable<Focus> = SymbolTable {
    slot: CoinSlot::A3ie,
    symbols: FOCI,
};

/// Sfm coin as the sensory sex.
pub const SENSORY_SEX: SymbolTable<Sex> = SymbolTable {
    slot: CoinSlot::Sfm,
    symbols: SEXES,
};

/// Defm coin as the extraverted-decider sex.
pub const DECIDER_SEX: SymbolTable<Sex> = SymbolTable {
    slot: CoinSlot::Defm,
    symbols: SEXES,
};
