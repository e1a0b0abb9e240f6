//! Fixed sizes of the OPT512 coin space.

/// Number of coins in a type.
pub const COIN_COUNT: usize = 9;

/// Mask selecting the nine coin bits of an integer encoding.
pub const TYPE_MASK: u16 = 0b1_1111_1111;

/// Number of fully resolved types (2^9).
pub const TYPE_COUNT: usize = 512;

/// Exclusive upper bound of the integer range walked by `Opt512::all`.
///
/// This is one less than [`TYPE_COUNT`]: encoding 511 (every coin `True`) is
/// never produced by the enumeration. Consumers rely on the 511-type list, so
/// the boundary stays where it is.
pub const ALL_TYPES_END: u16 = 511;

/// Number of partially or fully resolved coin vectors (3^9).
pub const TRINARY_VECTOR_COUNT: usize = 19_683;

/// Number of side indicators in the position vector.
pub const SIDE_COUNT: usize = 7;

/// Length of the position vector: seven side indicators followed by the coins.
pub const POSITION_LEN: usize = SIDE_COUNT + COIN_COUNT;

/// Number of functions in a stack and of animals in an animal sequence.
pub const STACK_LEN: usize = 4;
