//! One-shot snapshot of every derived property of a type.
//!
//! [`TypeReport`] gathers the canonical code, encoding, stack, animals,
//! activations and position into plain owned data, serialisable with the
//! `serde` feature.

use crate::core::coin::Coins;
use crate::core::constants::{POSITION_LEN, STACK_LEN};
use crate::function::CognitiveFunction;
use crate::opt::Opt512;
use crate::stack::StackFunction;

/// A stack entry as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackEntry {
    /// Position in the final stack.
    pub position: u8,
    /// Position in savior order.
    pub index: u8,
    /// Letter and focus, e.g. `Te`.
    pub code: String,
    /// `f`, `m` or `?`.
    pub sex: char,
    /// Whether the entry is a savior function.
    pub savior: bool,
    /// `O`, `D` or `?`.
    pub od_letter: char,
}

impl From<&StackFunction> for StackEntry {
    fn from(f: &StackFunction) -> Self {
        Self {
            position: f.grant_stack_index,
            index: f.index,
            code: f.code.to_string(),
            sex: f.sex.symbol(),
            savior: f.savior,
            od_letter: f.od_letter.symbol(),
        }
    }
}

/// Activation of one function kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivationEntry {
    /// Function name, e.g. `Thinking`.
    pub function: String,
    /// Sex, letter and focus, e.g. `mTe`.
    pub full_code: String,
    /// Position in the final stack.
    pub stack_position: Option<usize>,
    /// Activation score.
    pub activation: u8,
    /// Activation tier.
    pub tier: Option<u8>,
    /// `S1`, `S2`, `A` or `-`.
    pub savior_code: String,
}

impl From<&CognitiveFunction> for ActivationEntry {
    fn from(f: &CognitiveFunction) -> Self {
        Self {
            function: f.kind().name().to_string(),
            full_code: f.full_code(),
            stack_position: f.stack_position(),
            activation: f.activation(),
            tier: f.activation_tier(),
            savior_code: f.savior_code().as_str().to_string(),
        }
    }
}

/// Every derived property of one type.
///
/// # Example
///
/// ```
/// use opt512::Opt512;
///
/// let report = Opt512::from_number(42).report();
/// assert_eq!(report.number, Some(42));
/// assert_eq!(report.stack.len(), 4);
/// assert_eq!(report.code, Opt512::from_number(42).to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeReport {
    /// Canonical coin text.
    pub code: String,
    /// Integer encoding, when fully resolved.
    pub number: Option<u16>,
    /// The coins.
    pub coins: Coins,
    /// Jumper flag.
    pub jumper: Option<bool>,
    /// Function stack in final order.
    pub stack: Vec<StackEntry>,
    /// Animal letters `[A1, A2, A3, A4]`.
    pub animals: [char; STACK_LEN],
    /// Activations ordered by stack position.
    pub activations: Vec<ActivationEntry>,
    /// Position vector.
    pub position: [i8; POSITION_LEN],
    /// Ordering key.
    pub sort_value: i32,
}

impl Opt512 {
    /// Snapshot of every derived property.
    #[must_use]
    pub fn report(self) -> TypeReport {
        TypeReport {
            code: self.coin_text(),
            number: self.number(),
            coins: self.coins(),
            jumper: self.jumper(),
            stack: self.function_stack().iter().map(StackEntry::from).collect(),
            animals: self.animal_codes().0.map(|a| a.symbol()),
            activations: self.functions().iter().map(ActivationEntry::from).collect(),
            position: self.position(),
            sort_value: self.sort_value(),
        }
    }
}
