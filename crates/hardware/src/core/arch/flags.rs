//! The FL register.
//!
//! Three condition bits, `00000LGE`. Only `CMP` writes them and only the conditional
//! jumps read them. After a compare exactly one bit is set.

use std::fmt;

/// Condition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags(u8);

impl Flags {
    /// Equal (`E`, bit 0).
    pub const EQUAL: u8 = 0b0000_0001;
    /// Greater-than (`G`, bit 1).
    pub const GREATER: u8 = 0b0000_0010;
    /// Less-than (`L`, bit 2).
    pub const LESS: u8 = 0b0000_0100;

    const MASK: u8 = Self::EQUAL | Self::GREATER | Self::LESS;

    /// Flags produced by comparing `a` with `b`.
    pub const fn compare(a: u8, b: u8) -> Self {
        if a == b {
            Self(Self::EQUAL)
        } else if a > b {
            Self(Self::GREATER)
        } else {
            Self(Self::LESS)
        }
    }

    /// Rebuilds flags from a raw byte, e.g. one popped off the stack. Unused bits are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    /// Raw register value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// `E` is set.
    pub const fn equal(self) -> bool {
        self.0 & Self::EQUAL != 0
    }

    /// `G` is set.
    pub const fn greater(self) -> bool {
        self.0 & Self::GREATER != 0
    }

    /// `L` is set.
    pub const fn less(self) -> bool {
        self.0 & Self::LESS != 0
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(self.less(), 'L'),
            bit(self.greater(), 'G'),
            bit(self.equal(), 'E')
        )
    }
}
