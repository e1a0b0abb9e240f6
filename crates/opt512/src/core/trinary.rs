//! Trinary coin values.
//!
//! Every coin is a side of an axis: one side, the other side, or not yet
//! decided. The three values are ordered `False`, `True`, `Unknown`, and that
//! order is the column order of every three-way symbol table in
//! [`crate::letter`].

use core::fmt;

/// One side of a coin axis, or unresolved.
///
/// # Example
///
/// ```
/// use opt512::Trinary;
///
/// assert_eq!(Trinary::from(true), Trinary::True);
/// assert_eq!(Trinary::True.flip(), Trinary::False);
/// assert_eq!(Trinary::Unknown.flip(), Trinary::Unknown);
/// assert_eq!(Trinary::False.distance(), -1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(u8)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Option<bool>", into = "Option<bool>")
)]
pub enum Trinary {
    /// The first side of the axis (column 0 of a symbol table).
    False = 0,

    /// The second side of the axis (column 1 of a symbol table).
    True = 1,

    /// Not decided (column 2 of a symbol table).
    #[default]
    Unknown = 2,
}

impl Trinary {
    /// All values in table-column order.
    pub const ALL: [Self; 3] = [Self::False, Self::True, Self::Unknown];

    /// Creates a resolved value.
    #[inline]
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }

    /// Creates a value from an optional side; `None` is `Unknown`.
    #[inline]
    #[must_use]
    pub const fn from_option(value: Option<bool>) -> Self {
        match value {
            Some(side) => Self::from_bool(side),
            None => Self::Unknown,
        }
    }

    /// Returns the side, or `None` when unresolved.
    #[inline]
    #[must_use]
    pub const fn to_option(self) -> Option<bool> {
        match self {
            Self::False => Some(false),
            Self::True => Some(true),
            Self::Unknown => None,
        }
    }

    /// Column of this value in a three-way symbol table.
    ///
    /// ```
    /// use opt512::Trinary;
    ///
    /// assert_eq!(Trinary::False.index(), 0);
    /// assert_eq!(Trinary::True.index(), 1);
    /// assert_eq!(Trinary::Unknown.index(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for `True` and `False`.
    #[inline]
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// The other side of the axis. `Unknown` has no other side.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::False => Self::True,
            Self::True => Self::False,
            Self::Unknown => Self::Unknown,
        }
    }

    /// Signed distance from the centre of the axis.
    ///
    /// `True` is +1, `False` is -1 and `Unknown` sits at 0.
    #[inline]
    #[must_use]
    pub const fn distance(self) -> i8 {
        match self {
            Self::False => -1,
            Self::True => 1,
            Self::Unknown => 0,
        }
    }

    /// Single-character form: `0`, `1` or `?`.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::False => '0',
            Self::True => '1',
            Self::Unknown => '?',
        }
    }
}

impl From<bool> for Trinary {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<Option<bool>> for Trinary {
    fn from(value: Option<bool>) -> Self {
        Self::from_option(value)
    }
}

impl From<Trinary> for Option<bool> {
    fn from(value: Trinary) -> Self {
        value.to_option()
    }
}

impl fmt::Debug for Trinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::False => f.write_str("False"),
            Self::True => f.write_str("True"),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

impl fmt::Display for Trinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order() {
        for (column, value) in Trinary::ALL.iter().enumerate() {
            assert_eq!(value.index(), column);
        }
    }

    #[test]
    fn test_flip_involution() {
        for value in Trinary::ALL {
            assert_eq!(value.flip().flip(), value);
        }
        assert_eq!(Trinary::Unknown.flip(), Trinary::Unknown);
    }

    #[test]
    fn test_option_roundtrip() {
        for value in Trinary::ALL {
            assert_eq!(Trinary::from_option(value.to_option()), value);
        }
    }

    #[test]
    fn test_distance_is_antisymmetric() {
        for value in Trinary::ALL {
            assert_eq!(value.flip().distance(), -value.distance());
        }
    }
}
