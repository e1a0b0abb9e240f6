//! Core data types and constants.
//!
//! - [`trinary::Trinary`]: one coin value (False / True / Unknown)
//! - [`coin::CoinSlot`]: the nine named coin axes
//! - [`coin::Coins`]: the fixed 9-coin vector and its integer encoding
//! - [`constants`]: sizes of the coin space

pub mod coin;
pub mod constants;
pub mod trinary;
