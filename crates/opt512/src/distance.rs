//! Side indicators, position vectors and type distance.
//!
//! The position of a type is a 16-element vector of signed sides:
//!
//! ```text
//! [ energy/info, NF/ST, SF/NT, Fi/Te, Ni/Se, Si/Ne, Ti/Fe,   <- sides
//!   OD, FT, NS, DiDe, OiOe, Sfm, Defm, A2ie, A3ie ]         <- coins
//! ```
//!
//! Each entry is `1` (True), `-1` (False) or `0` (Unknown), and the distance
//! between two types is the squared Euclidean distance between positions.
//!
//! # Examples
//!
//! ```
//! use opt512::{distance, Opt512};
//!
//! let a = Opt512::from_number(0);
//! let b = Opt512::from_number(1);
//! assert_eq!(distance(a, a), 0);
//! assert_eq!(distance(a, b), distance(b, a));
//! assert!(distance(a, b) > 0);
//! ```

use crate::core::coin::CoinSlot;
use crate::core::constants::{POSITION_LEN, SIDE_COUNT};
use crate::core::trinary::Trinary;
use crate::letter::{Code, DeciderLetter, Focus, Letter, ObserverLetter};
use crate::lut;
use crate::opt::Opt512;

/// Squared Euclidean distance between the positions of `a` and `b`.
#[must_use]
pub fn distance(a: Opt512, b: Opt512) -> u32 {
    a.position()
        .iter()
        .zip(b.position().iter())
        .map(|(&x, &y)| {
            let d = i32::from(x) - i32::from(y);
            d.unsigned_abs() * d.unsigned_abs()
        })
        .sum()
}

/// `True` when `code` is `on_true`, `False` when it is `on_false`.
fn side_of_code(code: Code, on_true: Code, on_false: Code) -> Trinary {
    if code == on_true {
        Trinary::True
    } else if code == on_false {
        Trinary::False
    } else {
        Trinary::Unknown
    }
}

/// `True` or `False` for a matching pair of letters.
fn side_of_letters(
    letters: (ObserverLetter, DeciderLetter),
    on_true: (ObserverLetter, DeciderLetter),
    on_false: (ObserverLetter, DeciderLetter),
) -> Trinary {
    if letters == on_true {
        Trinary::True
    } else if letters == on_false {
        Trinary::False
    } else {
        Trinary::Unknown
    }
}

const fn code(letter: Letter, focus: Focus) -> Code {
    Code::new(letter, focus)
}

impl Opt512 {
    // ========================================================================
    // Side indicators
    // ========================================================================

    /// Energy (`True`) or info (`False`) side, from A4.
    #[must_use]
    pub fn side_of_energy_info(self) -> Trinary {
        lut::energy_info_side(self.a4())
    }

    /// `True` for an `Ne` observer, `False` for `Si`.
    #[must_use]
    pub fn side_of_si_ne(self) -> Trinary {
        side_of_code(
            self.observer_code(),
            code(Letter::N, Focus::Extraverted),
            code(Letter::S, Focus::Introverted),
        )
    }

    /// `True` for an `Se` observer, `False` for `Ni`.
    #[must_use]
    pub fn side_of_ni_se(self) -> Trinary {
        side_of_code(
            self.observer_code(),
            code(Letter::S, Focus::Extraverted),
            code(Letter::N, Focus::Introverted),
        )
    }

    /// `True` for a `Te` decider, `False` for `Fi`.
    #[must_use]
    pub fn side_of_fi_te(self) -> Trinary {
        side_of_code(
            self.decider_code(),
            code(Letter::T, Focus::Extraverted),
            code(Letter::F, Focus::Introverted),
        )
    }

    /// `True` for an `Fe` decider, `False` for `Ti`.
    #[must_use]
    pub fn side_of_ti_fe(self) -> Trinary {
        side_of_code(
            self.decider_code(),
            code(Letter::F, Focus::Extraverted),
            code(Letter::T, Focus::Introverted),
        )
    }

    /// `True` for `S` with `F`, `False` for `N` with `T`.
    #[must_use]
    pub fn side_of_sf_nt(self) -> Trinary {
        side_of_letters(
            (self.observer_letter(), self.decider_letter()),
            (ObserverLetter::Sensing, DeciderLetter::Feeling),
            (ObserverLetter::Intuition, DeciderLetter::Thinking),
        )
    }

    /// `True` for `S` with `T`, `False` for `N` with `F`.
    #[must_use]
    pub fn side_of_nf_st(self) -> Trinary {
        side_of_letters(
            (self.observer_letter(), self.decider_letter()),
            (ObserverLetter::Sensing, DeciderLetter::Thinking),
            (ObserverLetter::Intuition, DeciderLetter::Feeling),
        )
    }

    /// The seven side indicators in position order.
    #[must_use]
    pub fn sides(self) -> [Trinary; SIDE_COUNT] {
        [
            self.side_of_energy_info(),
            self.side_of_nf_st(),
            self.side_of_sf_nt(),
            self.side_of_fi_te(),
            self.side_of_ni_se(),
            self.side_of_si_ne(),
            self.side_of_ti_fe(),
        ]
    }

    // ========================================================================
    // Position and ordering
    // ========================================================================

    /// Sides then coins, each as `1`, `-1` or `0`.
    #[must_use]
    pub fn position(self) -> [i8; POSITION_LEN] {
        let mut position = [0i8; POSITION_LEN];
        for (slot, side) in position.iter_mut().zip(self.sides()) {
            *slot = side.distance();
        }
        for (slot, &coin) in position[SIDE_COUNT..]
            .iter_mut()
            .zip(self.coins().as_array())
        {
            *slot = coin.distance();
        }
        position
    }

    /// Squared distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> u32 {
        distance(self, other)
    }

    /// Ordering key over the three letter coins.
    ///
    /// `NS * w_ns + FT * w_ft + OD * 1000`, with the dominant letter weighted
    /// 100 and the other 10. Only a `True` OD coin counts as decider-dominant.
    #[must_use]
    pub fn sort_value(self) -> i32 {
        let od = self.coin(CoinSlot::Od);
        let (ns_weight, ft_weight) = if od == Trinary::True {
            (10, 100)
        } else {
            (100, 10)
        };
        i32::from(self.coin(CoinSlot::Ns).distance()) * ns_weight
            + i32::from(self.coin(CoinSlot::Ft).distance()) * ft_weight
            + i32::from(od.distance()) * 1000
    }

    /// Types from [`Opt512::all`] with their distance to `self`, nearest
    /// first. Ties are ordered by integer encoding.
    #[must_use]
    pub fn nearest(self) -> Vec<(Self, u32)> {
        let mut neighbours: Vec<(Self, u32)> =
            Self::all().map(|other| (other, distance(self, other))).collect();
        neighbours.sort_by_key(|&(other, d)| (d, other.number()));
        neighbours
    }
}
