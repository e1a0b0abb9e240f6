//! OPT512 - type derivation over nine trinary coins
//!
//! An OPT512 type is a vector of nine coins, each `True`, `False` or
//! unresolved. Everything else (function stack, animals, activation, text
//! code, position) is a pure function of that vector, computed on demand from
//! static lookup tables.
//!
//! # Derivation
//!
//! ```text
//! Coins ──► letters / foci / sexes ──► S1 S2 D1 D2 ──► function stack
//!   │                                                    (jumper swap)
//!   └────► A1 ──► A2 ──► A3 ──► A4 ──► activation, sides, position
//! ```
//!
//! # Coins
//!
//! | Slot | Coin | False | True | Unknown |
//! |------|------|-------|------|---------|
//! | 0 | OD   | Observer | Decider | `?` |
//! | 1 | FT   | `F` | `T` | `D` |
//! | 2 | NS   | `N` | `S` | `O` |
//! | 3 | DiDe | `i` | `e` | `x` |
//! | 4 | OiOe | `i` | `e` | `x` |
//! | 5 | Sfm  | `f` | `m` | `?` |
//! | 6 | Defm | `f` | `m` | `?` |
//! | 7 | A2ie | `i` | `e` | `x` |
//! | 8 | A3ie | `i` | `e` | `x` |
//!
//! # Example
//!
//! ```
//! use opt512::{Animal, FunctionKind, Opt512};
//!
//! let opt = Opt512::from_dirty_coin_text("fm ti/ne cp/s(b)").unwrap();
//! assert_eq!(opt.to_string(), "fm-Ti/Ne-CP/S(B)");
//! assert_eq!(opt.a4(), Animal::Blast);
//!
//! let codes: Vec<String> = opt
//!     .function_stack()
//!     .iter()
//!     .map(|f| f.code.to_string())
//!     .collect();
//! assert_eq!(codes, ["Ti", "Ne", "Si", "Fe"]);
//!
//! let thinking = opt.function(FunctionKind::Thinking);
//! assert_eq!(thinking.activation(), 4);
//!
//! let number = opt.number().unwrap();
//! assert_eq!(Opt512::from_number(number), opt);
//! ```
//!
//! # Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for coins, types and
//!   reports. A type serialises as its nine coins, `null` for unresolved.
//! - `random` (default): [`Opt512::random`] and [`Opt512::random_with`].

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs)]

// Core data types (trinary, coin vector, constants)
pub mod core;

// Letter, focus and sex symbols bound to coin slots
pub mod letter;

// Animal codes
pub mod animal;

// Static derivation tables
pub mod lut;

// The OPT512 type and its coin-level accessors
pub mod opt;

// Function stack and jumper rule
pub mod stack;

// Cognitive functions and activation
pub mod function;

// Side indicators, position and distance
pub mod distance;

// Canonical coin text
pub mod text;

// Serialisable snapshot
pub mod report;

pub use crate::core::coin::{CoinSlot, Coins, NumberError};
pub use crate::core::constants::{
    ALL_TYPES_END, COIN_COUNT, POSITION_LEN, SIDE_COUNT, STACK_LEN, TRINARY_VECTOR_COUNT,
    TYPE_COUNT, TYPE_MASK,
};
pub use crate::core::trinary::Trinary;
pub use animal::{Animal, AnimalCodes, AnimalKind};
pub use distance::distance;
pub use function::{CognitiveFunction, FunctionKind, SaviorCode};
pub use letter::{Code, DeciderLetter, Focus, Letter, ObserverLetter, OdLetter, Sex};
pub use opt::Opt512;
pub use report::{ActivationEntry, StackEntry, TypeReport};
pub use stack::{FunctionKey, FunctionStack, StackFunction};
pub use text::{clean_coin_text, parse_coin_text, render_coin_text, ParseError};

/// Prelude module for convenient imports.
///
/// ```
/// use opt512::prelude::*;
///
/// let opt = Opt512::BLANK.with_od_letter(OdLetter::Decider);
/// assert_eq!(opt.coin(CoinSlot::Od), Trinary::True);
/// ```
pub mod prelude {
    pub use crate::animal::{Animal, AnimalCodes, AnimalKind};
    pub use crate::core::coin::{CoinSlot, Coins};
    pub use crate::core::trinary::Trinary;
    pub use crate::distance::distance;
    pub use crate::function::{CognitiveFunction, FunctionKind, SaviorCode};
    pub use crate::letter::{Code, DeciderLetter, Focus, Letter, ObserverLetter, OdLetter, Sex};
    pub use crate::opt::Opt512;
    pub use crate::stack::FunctionStack;
    pub use crate::text::ParseError;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_count() {
        assert_eq!(1usize << COIN_COUNT, TYPE_COUNT);
        assert_eq!(Opt512::all().count(), TYPE_COUNT - 1);
    }

    #[test]
    fn test_complement_flips_savior_pair() {
        // OD flips too, so the pair also changes sides.
        for n in 0..TYPE_COUNT as u16 {
            let opt = Opt512::from_number(n);
            let comp = opt.complement();
            assert_eq!(comp.s1(), opt.s2().flip(), "{opt}");
            assert_eq!(comp.s2(), opt.s1().flip(), "{opt}");
            assert_eq!(comp.d1(), opt.s1(), "{opt}");
            assert_eq!(comp.d2(), opt.s2(), "{opt}");
            assert_eq!(comp.jumper(), opt.jumper());
        }
    }

    #[test]
    fn test_complement_flips_sexes() {
        for n in 0..TYPE_COUNT as u16 {
            let opt = Opt512::from_number(n);
            let comp = opt.complement();
            for f in opt.function_stack().iter() {
                assert_eq!(comp.sex_of(f.code), f.sex.flip(), "{opt} {}", f.code);
            }
        }
    }
}
