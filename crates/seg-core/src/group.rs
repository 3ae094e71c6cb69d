//! The binary agent type.

use std::fmt;

/// Which of the two populations an agent belongs to.
///
/// Assigned once at initialisation and never changed.  Marshals to `bool`
/// at the host boundary: `A ↔ false`, `B ↔ true`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Group {
    A,
    B,
}

impl Group {
    #[inline]
    pub fn as_bool(self) -> bool {
        matches!(self, Group::B)
    }
}

impl From<bool> for Group {
    #[inline]
    fn from(b: bool) -> Self {
        if b { Group::B } else { Group::A }
    }
}

impl From<Group> for bool {
    #[inline]
    fn from(g: Group) -> bool {
        g.as_bool()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::A => f.write_str("A"),
            Group::B => f.write_str("B"),
        }
    }
}
