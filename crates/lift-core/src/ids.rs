//! Strongly typed identifier wrappers.
//!
//! IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Elevator ids are 1-based (the fleet
//! hands out `1..=count`), so `index()` subtracts one when addressing the
//! fleet's backing `Vec`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Position in a 1-based id sequence, as a `Vec` index.
            ///
            /// # Panics
            /// Panics in debug mode for id 0, which is never handed out.
            #[inline(always)]
            pub fn index(self) -> usize {
                (self.0 - 1) as usize
            }

            /// The id stored at `Vec` position `index`.
            #[inline(always)]
            pub fn from_index(index: usize) -> Self {
                $name(index as $inner + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

typed_id! {
    /// Stable identity of one elevator car.  Immutable for the whole run.
    pub struct ElevatorId(u32);
}
