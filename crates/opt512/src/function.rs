//! Cognitive functions and their activation.
//!
//! A [`CognitiveFunction`] is a read-only view of one function kind
//! (Feeling, Thinking, Intuition, Sensing) inside a type: where it sits in
//! the stack, which sex and focus it carries, and how strongly the animals
//! activate it.
//!
//! # Activation
//!
//! A function's `(side, focus)` selects two animals:
//!
//! | Side     | Focus | Animals        |
//! |----------|-------|----------------|
//! | Observer | i     | Sleep, Blast   |
//! | Observer | e     | Consume, Play  |
//! | Decider  | i     | Sleep, Consume |
//! | Decider  | e     | Blast, Play    |
//!
//! Each animal adds `3 - position` for its position in `[A1, A2, A3, A4]`,
//! or nothing when absent. Sums 0..=2 are tier 1 and 3..=5 tier 2.

use crate::animal::Animal;
use crate::core::constants::STACK_LEN;
use crate::letter::{Focus, Letter, Sex};
use crate::lut;
use crate::opt::Opt512;
use crate::stack::StackFunction;
use core::fmt;

/// The four function kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FunctionKind {
    /// Feeling (`F`).
    Feeling,
    /// Thinking (`T`).
    Thinking,
    /// Intuition (`N`).
    Intuition,
    /// Sensing (`S`).
    Sensing,
}

impl FunctionKind {
    /// Every kind, deciders first.
    pub const ALL: [Self; STACK_LEN] = [
        Self::Feeling,
        Self::Thinking,
        Self::Intuition,
        Self::Sensing,
    ];

    /// Stack letter of the kind.
    #[must_use]
    pub const fn letter(self) -> Letter {
        match self {
            Self::Feeling => Letter::F,
            Self::Thinking => Letter::T,
            Self::Intuition => Letter::N,
            Self::Sensing => Letter::S,
        }
    }

    /// Full name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Feeling => "Feeling",
            Self::Thinking => "Thinking",
            Self::Intuition => "Intuition",
            Self::Sensing => "Sensing",
        }
    }

    /// The opposite kind on the same side.
    #[must_use]
    pub const fn flip_side(self) -> Self {
        match self {
            Self::Feeling => Self::Thinking,
            Self::Thinking => Self::Feeling,
            Self::Intuition => Self::Sensing,
            Self::Sensing => Self::Intuition,
        }
    }

    /// Returns true for Intuition and Sensing.
    #[must_use]
    pub const fn is_observer(self) -> bool {
        matches!(self, Self::Intuition | Self::Sensing)
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Short savior label of a function.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SaviorCode {
    /// First savior (`S1`).
    S1,
    /// Second savior (`S2`).
    S2,
    /// Non-savior with some activation (`A`).
    Activated,
    /// Non-savior with no activation (`-`).
    Dormant,
}

impl SaviorCode {
    /// Rendered label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::Activated => "A",
            Self::Dormant => "-",
        }
    }
}

impl fmt::Display for SaviorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One function kind as it appears in a type.
///
/// # Example
///
/// ```
/// use opt512::{FunctionKind, Opt512, SaviorCode};
///
/// let opt = Opt512::from_coin_text("fm-Ti/Ne-CP/S(B)").unwrap();
/// let thinking = opt.function(FunctionKind::Thinking);
/// assert_eq!(thinking.stack_position(), Some(0));
/// assert_eq!(thinking.full_code(), "fTi");
/// assert_eq!(thinking.savior_code(), SaviorCode::S1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CognitiveFunction {
    kind: FunctionKind,
    position: Option<usize>,
    entry: Option<StackFunction>,
    animals: Option<[Animal; 2]>,
    activation: u8,
}

impl CognitiveFunction {
    fn new(opt: Opt512, kind: FunctionKind) -> Self {
        let stack = opt.function_stack();
        let position = stack.position_of(kind.letter());
        let entry = position.map(|p| stack[p]);
        let animals = entry.and_then(|e| lut::animals_for(e.od_letter, e.focus()));
        let activation = animals.map_or(0, |pair| {
            pair.iter()
                .map(|&animal| lut::activation_points(opt.animal_index(animal)))
                .sum()
        });
        Self {
            kind,
            position,
            entry,
            animals,
            activation,
        }
    }

    /// The function kind.
    #[must_use]
    pub const fn kind(&self) -> FunctionKind {
        self.kind
    }

    /// Position in the final stack, or `None` when the kind's letter is not
    /// in the stack.
    #[must_use]
    pub const fn stack_position(&self) -> Option<usize> {
        self.position
    }

    /// The stack entry, when present.
    #[must_use]
    pub const fn entry(&self) -> Option<&StackFunction> {
        self.entry.as_ref()
    }

    /// Sex of the entry.
    #[must_use]
    pub fn sex(&self) -> Sex {
        self.entry.map_or(Sex::Unknown, |e| e.sex)
    }

    /// Focus of the entry.
    #[must_use]
    pub fn focus(&self) -> Focus {
        self.entry.map_or(Focus::Unresolved, |e| e.focus())
    }

    /// Whether the entry is a savior function.
    #[must_use]
    pub fn is_savior(&self) -> bool {
        self.entry.is_some_and(|e| e.savior)
    }

    /// Sex, letter and focus, e.g. `mTe`. An unknown sex is left out.
    #[must_use]
    pub fn full_code(&self) -> String {
        let mut code = String::with_capacity(3);
        let sex = self.sex();
        if sex != Sex::Unknown {
            code.push(sex.symbol());
        }
        code.push(self.kind.letter().symbol());
        code.push(self.focus().symbol());
        code
    }

    /// The two animals feeding the activation; `None` when the side or
    /// focus is unresolved.
    #[must_use]
    pub const fn animals(&self) -> Option<[Animal; 2]> {
        self.animals
    }

    /// Activation score, 0..=5.
    #[must_use]
    pub const fn activation(&self) -> u8 {
        self.activation
    }

    /// Activation tier: 1 for scores 0..=2, 2 for 3..=5.
    #[must_use]
    pub fn activation_tier(&self) -> Option<u8> {
        lut::activation_tier(self.activation)
    }

    /// Savior label.
    ///
    /// Saviors read `S1` at savior-order index 0 and `S2` otherwise. Other
    /// functions read `-` without activation and `A` with it.
    #[must_use]
    pub fn savior_code(&self) -> SaviorCode {
        match self.entry {
            Some(e) if e.savior && e.index == 0 => SaviorCode::S1,
            Some(e) if e.savior => SaviorCode::S2,
            _ if self.activation == 0 => SaviorCode::Dormant,
            _ => SaviorCode::Activated,
        }
    }

    /// The opposite kind on the same side.
    #[must_use]
    pub const fn flip_side(&self) -> FunctionKind {
        self.kind.flip_side()
    }

    /// Returns true for Intuition and Sensing.
    #[must_use]
    pub const fn is_observer(&self) -> bool {
        self.kind.is_observer()
    }
}

impl Opt512 {
    /// View of one function kind.
    #[must_use]
    pub fn function(self, kind: FunctionKind) -> CognitiveFunction {
        CognitiveFunction::new(self, kind)
    }

    /// All four kinds ordered by stack position; kinds missing from the
    /// stack come first.
    #[must_use]
    pub fn functions(self) -> [CognitiveFunction; STACK_LEN] {
        let mut fns = FunctionKind::ALL.map(|kind| self.function(kind));
        fns.sort_by_key(CognitiveFunction::stack_position);
        fns
    }

    /// Feeling and Thinking ordered by stack position.
    #[must_use]
    pub fn deciders(self) -> [CognitiveFunction; 2] {
        self.ordered_pair(FunctionKind::Feeling, FunctionKind::Thinking)
    }

    /// Intuition and Sensing ordered by stack position.
    #[must_use]
    pub fn observers(self) -> [CognitiveFunction; 2] {
        self.ordered_pair(FunctionKind::Intuition, FunctionKind::Sensing)
    }

    /// The extraverted decider, or the first decider in stack order.
    #[must_use]
    pub fn e_decider(self) -> CognitiveFunction {
        pick(self.deciders(), Focus::Extraverted, 0)
    }

    /// The introverted decider, or the second decider in stack order.
    #[must_use]
    pub fn i_decider(self) -> CognitiveFunction {
        pick(self.deciders(), Focus::Introverted, 1)
    }

    /// The extraverted observer, or the first observer in stack order.
    #[must_use]
    pub fn e_observer(self) -> CognitiveFunction {
        pick(self.observers(), Focus::Extraverted, 0)
    }

    /// The introverted observer, or the second observer in stack order.
    #[must_use]
    pub fn i_observer(self) -> CognitiveFunction {
        pick(self.observers(), Focus::Introverted, 1)
    }

    fn ordered_pair(self, first: FunctionKind, second: FunctionKind) -> [CognitiveFunction; 2] {
        let mut pair = [self.function(first), self.function(second)];
        pair.sort_by_key(CognitiveFunction::stack_position);
        pair
    }
}

fn pick(pair: [CognitiveFunction; 2], focus: Focus, fallback: usize) -> CognitiveFunction {
    pair.iter()
        .find(|f| f.focus() == focus)
        .copied()
        .unwrap_or(pair[fallback])
}

impl Animal {
    /// The observer and decider functions the animal joins in `opt`.
    ///
    /// `None` for [`Animal::Unknown`].
    #[must_use]
    pub fn functions(self, opt: Opt512) -> Option<[CognitiveFunction; 2]> {
        let (observer, decider) = self.function_foci()?;
        let observer = match observer {
            Focus::Extraverted => opt.e_observer(),
            _ => opt.i_observer(),
        };
        let decider = match decider {
            Focus::Extraverted => opt.e_decider(),
            _ => opt.i_decider(),
        };
        Some([observer, decider])
    }
}
