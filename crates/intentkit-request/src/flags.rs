//! Control flag bitset

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::{BitOr, BitOrAssign};

/// Opaque control flags
///
/// The builder never interprets the bits. The associated constants are the
/// values hosts commonly agree on; any other bit pattern is equally valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flags(u32);

impl Flags {
    /// No flags set
    pub const NONE: Flags = Flags(0);
    /// Clear the task the destination lands in before starting it
    pub const CLEAR_TASK: Flags = Flags(0x0000_8000);
    /// Pop everything above an existing instance of the destination
    pub const CLEAR_TOP: Flags = Flags(0x0400_0000);
    /// Start the destination in a new task
    pub const NEW_TASK: Flags = Flags(0x1000_0000);
    /// Do not stack a second copy of a destination already on top
    pub const SINGLE_TOP: Flags = Flags(0x2000_0000);
    /// Do not keep the destination in history once left
    pub const NO_HISTORY: Flags = Flags(0x4000_0000);

    /// Flags from raw bits
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bits
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check if every bit of `other` is set
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check if no bit is set
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Flags {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<Flags> for u32 {
    fn from(flags: Flags) -> Self {
        flags.0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl Display for Flags {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_operations() {
        let flags = Flags::NEW_TASK | Flags::CLEAR_TOP;
        assert!(flags.contains(Flags::NEW_TASK));
        assert!(flags.contains(Flags::CLEAR_TOP));
        assert!(!flags.contains(Flags::SINGLE_TOP));
        assert!(flags.contains(Flags::NONE));
        assert!(Flags::default().is_empty());
    }

    #[test]
    fn display_is_padded_hex() {
        assert_eq!(Flags::NO_HISTORY.to_string(), "0x40000000");
        assert_eq!(Flags::from_bits(0b10).to_string(), "0x00000002");
    }
}
