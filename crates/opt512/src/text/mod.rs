//! Coin text: the canonical `fm-Ti/Ne-CP/S(B)` form.
//!
//! - [`clean_coin_text`] normalises loosely formatted input
//! - [`parse_coin_text`] parses canonical text strictly
//! - [`render_coin_text`] renders a type back to canonical text
//!
//! Rendering then parsing returns the same type for every fully resolved
//! vector. Partially resolved vectors render to text that parses back to a
//! vector with the same rendering.

pub mod clean;
pub mod parse;

pub use clean::clean_coin_text;
pub use parse::{parse_coin_text, render_coin_text};

use crate::animal::Animal;
use crate::letter::Code;
use crate::opt::Opt512;
use core::fmt;
use core::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Error returned when coin text cannot be turned into a type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The text does not follow the canonical grammar.
    #[error("malformed coin text {input:?}")]
    Malformed {
        /// The rejected text.
        input: String,
    },

    /// Both function codes are observers, or both are deciders.
    #[error("function codes {first} and {second} are on the same side")]
    ConflictingFunctions {
        /// The first code.
        first: Code,
        /// The second code.
        second: Code,
    },

    /// An animal disagrees with what the coins already determine.
    #[error("animal A{slot} is {found} but the coins give {expected}")]
    InconsistentAnimal {
        /// Animal position, 1 to 4.
        slot: u8,
        /// Animal derived from the coins.
        expected: Animal,
        /// Animal named in the text.
        found: Animal,
    },

    /// An animal cannot follow the animals before it.
    #[error("animal A{slot} cannot be {found} after the preceding animals")]
    UnknownAnimal {
        /// Animal position, 2 or 3.
        slot: u8,
        /// Animal named in the text.
        found: Animal,
    },

    /// The grammar pattern failed to compile.
    #[error("coin text grammar: {0}")]
    Grammar(regex::Error),
}

impl Opt512 {
    /// Parses canonical coin text.
    ///
    /// # Errors
    ///
    /// See [`parse_coin_text`].
    pub fn from_coin_text(text: &str) -> Result<Self, ParseError> {
        parse_coin_text(text)
    }

    /// Cleans loosely formatted text, then parses it.
    ///
    /// # Errors
    ///
    /// See [`parse_coin_text`].
    ///
    /// # Example
    ///
    /// ```
    /// use opt512::Opt512;
    ///
    /// let opt = Opt512::from_dirty_coin_text(" FM ti/ne cp/s(b) ").unwrap();
    /// assert_eq!(opt.to_string(), "fm-Ti/Ne-CP/S(B)");
    /// ```
    pub fn from_dirty_coin_text(text: &str) -> Result<Self, ParseError> {
        let cleaned = clean_coin_text(text);
        if cleaned != text {
            debug!(input = text, cleaned = %cleaned, "normalised coin text");
        }
        parse_coin_text(&cleaned)
    }

    /// Like [`from_dirty_coin_text`](Self::from_dirty_coin_text), falling
    /// back to the blank type when the text cannot be parsed.
    #[must_use]
    pub fn from_dirty_coin_text_or_blank(text: &str) -> Self {
        Self::from_dirty_coin_text(text).unwrap_or_else(|err| {
            debug!(input = text, error = %err, "falling back to blank type");
            Self::BLANK
        })
    }

    /// Canonical coin text.
    #[must_use]
    pub fn coin_text(self) -> String {
        render_coin_text(self)
    }
}

impl fmt::Display for Opt512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.coin_text())
    }
}

impl FromStr for Opt512 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_coin_text(s)
    }
}
