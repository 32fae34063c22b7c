//! Direction of travel of an elevator car.

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    /// Not travelling.  Every car starts here.
    #[default]
    Idle,
}

impl Direction {
    /// `true` for `Up` and `Down`.
    #[inline]
    pub fn is_moving(self) -> bool {
        !matches!(self, Direction::Idle)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up   => "Up",
            Direction::Down => "Down",
            Direction::Idle => "Idle",
        };
        f.write_str(s)
    }
}
