//! The four-function stack.
//!
//! The stack is built in savior order `[S1, S2, D1, D2]` and then, for
//! jumper types, positions 1 and 2 trade places:
//!
//! ```text
//! regular:  S1  S2  D1  D2      savior: T T F F
//! jumper:   S1  D1  S2  D2      savior: T F T F
//! ```
//!
//! Each entry keeps its `index` (0..3, savior order) and gets a
//! `grant_stack_index` equal to its final position. Swapped entries are
//! renumbered to 1 and 2 so `grant_stack_index` always matches the array
//! position.

use crate::core::constants::STACK_LEN;
use crate::letter::{Code, Focus, Letter, OdLetter, Sex};
use crate::opt::Opt512;
use tracing::trace;

/// Lookup key of a stack entry.
///
/// The key is the function letter, except for the placeholders `O` and `D`,
/// which two entries may share; those are keyed by their grant-stack index
/// instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FunctionKey {
    /// A resolved letter (`N`, `S`, `F` or `T`).
    Letter(Letter),
    /// Position used in place of a placeholder letter.
    Index(u8),
}

/// One entry of the function stack.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct StackFunction {
    /// Position in savior order `[S1, S2, D1, D2]`.
    pub index: u8,
    /// Position in the final stack.
    pub grant_stack_index: u8,
    /// Lookup key.
    pub key: FunctionKey,
    /// Letter and focus.
    pub code: Code,
    /// Sex carried by the code.
    pub sex: Sex,
    /// Whether the entry is one of the two savior functions.
    pub savior: bool,
    /// Whether the entry sits on the observer or the decider side.
    pub od_letter: OdLetter,
}

impl StackFunction {
    fn new(index: u8, code: Code, sex: Sex, od_letter: OdLetter) -> Self {
        let key = if code.letter.is_resolved() {
            FunctionKey::Letter(code.letter)
        } else {
            FunctionKey::Index(index)
        };
        Self {
            index,
            grant_stack_index: index,
            key,
            code,
            sex,
            savior: index < 2,
            od_letter,
        }
    }

    /// Function letter.
    #[must_use]
    pub const fn letter(&self) -> Letter {
        self.code.letter
    }

    /// Function focus.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.code.focus
    }
}

/// The ordered four-function stack of a type.
///
/// # Example
///
/// ```
/// use opt512::Opt512;
///
/// // Ne/Ti is not a jumper: S1 S2 D1 D2.
/// let stack = Opt512::from_coin_text("??-Ne/Ti").unwrap().function_stack();
/// let codes: Vec<String> = stack.iter().map(|f| f.code.to_string()).collect();
/// assert_eq!(codes, ["Ne", "Ti", "Fe", "Si"]);
///
/// // Ne/Te is a jumper: S2 and D1 trade places.
/// let stack = Opt512::from_coin_text("??-Ne/Te").unwrap().function_stack();
/// let codes: Vec<String> = stack.iter().map(|f| f.code.to_string()).collect();
/// assert_eq!(codes, ["Ne", "Fi", "Te", "Si"]);
/// assert!(!stack[1].savior);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FunctionStack([StackFunction; STACK_LEN]);

impl FunctionStack {
    /// Builds the stack for `opt`.
    #[must_use]
    pub fn derive(opt: Opt512) -> Self {
        let od = opt.od_letter();
        let codes = [opt.s1(), opt.s2(), opt.d1(), opt.d2()];
        let sides = [od, od.flip(), od.flip(), od];
        let mut fns = [0u8, 1, 2, 3].map(|i| {
            let code = codes[usize::from(i)];
            StackFunction::new(i, code, opt.sex_of(code), sides[usize::from(i)])
        });

        if opt.jumper() == Some(true) {
            fns.swap(1, 2);
            fns[1].grant_stack_index = 1;
            fns[2].grant_stack_index = 2;
            trace!(
                s2 = %fns[2].code,
                d1 = %fns[1].code,
                "jumper swap"
            );
        }
        Self(fns)
    }

    /// The entries in stack order.
    #[must_use]
    pub const fn as_array(&self) -> &[StackFunction; STACK_LEN] {
        &self.0
    }

    /// Iterates in stack order.
    pub fn iter(&self) -> impl Iterator<Item = &StackFunction> {
        self.0.iter()
    }

    /// Stack position of the first entry with `letter`.
    #[must_use]
    pub fn position_of(&self, letter: Letter) -> Option<usize> {
        self.0.iter().position(|f| f.letter() == letter)
    }

    /// The first entry with `letter`.
    #[must_use]
    pub fn find(&self, letter: Letter) -> Option<&StackFunction> {
        self.0.iter().find(|f| f.letter() == letter)
    }

    /// The entry stored under `key`.
    #[must_use]
    pub fn by_key(&self, key: FunctionKey) -> Option<&StackFunction> {
        self.0.iter().find(|f| f.key == key)
    }

    /// Letters in savior order, ignoring any jumper swap.
    #[must_use]
    pub fn letters(&self) -> [Letter; STACK_LEN] {
        let mut sorted = self.0;
        sorted.sort_by_key(|f| f.index);
        sorted.map(|f| f.letter())
    }
}

impl core::ops::Index<usize> for FunctionStack {
    type Output = StackFunction;

    fn index(&self, position: usize) -> &StackFunction {
        &self.0[position]
    }
}

impl Opt512 {
    /// The ordered four-function stack.
    #[must_use]
    pub fn function_stack(self) -> FunctionStack {
        FunctionStack::derive(self)
    }

    /// Stack letters in savior order `[S1, S2, D1, D2]`.
    #[must_use]
    pub fn letters(self) -> [Letter; STACK_LEN] {
        self.function_stack().letters()
    }

    /// Position of `letter` in [`letters`](Self::letters).
    #[must_use]
    pub fn letter_index(self, letter: Letter) -> Option<usize> {
        self.letters().iter().position(|&l| l == letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::{DeciderLetter, ObserverLetter};

    fn build(od: OdLetter, decider: Focus, observer: Focus) -> Opt512 {
        Opt512::BLANK
            .with_od_letter(od)
            .with_decider_letter(DeciderLetter::Thinking)
            .with_observer_letter(ObserverLetter::Intuition)
            .with_decider_focus(decider)
            .with_observer_focus(observer)
    }

    fn codes(stack: &FunctionStack) -> Vec<String> {
        stack.iter().map(|f| f.code.to_string()).collect()
    }

    #[test]
    fn test_regular_stack() {
        let stack =
            build(OdLetter::Decider, Focus::Introverted, Focus::Extraverted).function_stack();
        assert_eq!(codes(&stack), ["Ti", "Ne", "Si", "Fe"]);
        let saviors: Vec<bool> = stack.iter().map(|f| f.savior).collect();
        assert_eq!(saviors, [true, true, false, false]);
        for (position, f) in stack.iter().enumerate() {
            assert_eq!(f.index as usize, position);
            assert_eq!(f.grant_stack_index as usize, position);
        }
    }

    #[test]
    fn test_jumper_swaps_middle_positions() {
        let opt = build(OdLetter::Decider, Focus::Extraverted, Focus::Extraverted);
        assert_eq!(opt.jumper(), Some(true));
        let stack = opt.function_stack();
        assert_eq!(codes(&stack), ["Te", "Si", "Ne", "Fi"]);
        assert!(!stack[1].savior);
        assert!(stack[2].savior);
        assert_eq!((stack[1].index, stack[1].grant_stack_index), (2, 1));
        assert_eq!((stack[2].index, stack[2].grant_stack_index), (1, 2));
    }

    #[test]
    fn test_letters_ignore_jumper() {
        let opt = build(OdLetter::Decider, Focus::Extraverted, Focus::Extraverted);
        assert_eq!(opt.letters(), [Letter::T, Letter::N, Letter::S, Letter::F]);
        assert_eq!(opt.letter_index(Letter::S), Some(2));
        assert_eq!(opt.function_stack().position_of(Letter::S), Some(1));
        assert_eq!(Opt512::BLANK.letter_index(Letter::T), None);
    }

    #[test]
    fn test_partial_focus_never_swaps() {
        let opt = build(OdLetter::Decider, Focus::Extraverted, Focus::Unresolved);
        assert_eq!(opt.jumper(), None);
        let stack = opt.function_stack();
        assert!(stack[1].savior);
        assert_eq!(codes(&stack), ["Te", "Nx", "Sx", "Fi"]);
    }

    #[test]
    fn test_placeholder_keys_use_position() {
        let stack = Opt512::BLANK.function_stack();
        assert_eq!(codes(&stack), ["Dx", "Ox", "Ox", "Dx"]);
        let keys: Vec<FunctionKey> = stack.iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            [
                FunctionKey::Index(0),
                FunctionKey::Index(1),
                FunctionKey::Index(2),
                FunctionKey::Index(3)
            ]
        );
        assert_eq!(stack.by_key(FunctionKey::Index(2)).map(|f| f.index), Some(2));
    }

    #[test]
    fn test_resolved_keys_are_letters() {
        let stack =
            build(OdLetter::Observer, Focus::Introverted, Focus::Extraverted).function_stack();
        assert_eq!(stack[0].key, FunctionKey::Letter(Letter::N));
        let feeling = stack.by_key(FunctionKey::Letter(Letter::F)).map(|f| f.code.to_string());
        assert_eq!(feeling.as_deref(), Some("Fe"));
    }

    #[test]
    fn test_od_letter_sides() {
        let stack =
            build(OdLetter::Observer, Focus::Introverted, Focus::Extraverted).function_stack();
        let sides: Vec<OdLetter> = stack.iter().map(|f| f.od_letter).collect();
        assert_eq!(
            sides,
            [OdLetter::Observer, OdLetter::Decider, OdLetter::Decider, OdLetter::Observer]
        );
        for f in stack.iter() {
            assert_eq!(f.code.is_observer(), f.od_letter == OdLetter::Observer);
        }
    }

    #[test]
    fn test_sexes_follow_codes() {
        let opt = build(OdLetter::Observer, Focus::Introverted, Focus::Extraverted)
            .with_sensory_sex(Sex::Masculine)
            .with_decider_sex(Sex::Feminine);
        let sexes: Vec<Sex> = opt.function_stack().iter().map(|f| f.sex).collect();
        // Ne Ti Fe Si
        assert_eq!(sexes, [Sex::Feminine, Sex::Masculine, Sex::Feminine, Sex::Masculine]);
    }
}
