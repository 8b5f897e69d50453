//! Board position types.

use std::fmt::{self, Display};

/// A board coordinate with `x` (column) and `y` (row) in the range 0-8.
///
/// Positions are ordered row-major: [`Position::ALL`] visits row 0 left to
/// right, then row 1, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 board positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "coordinates must be 0-8");
        Self { x, y }
    }

    /// Creates a position from a row-major cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81, "cell index must be 0-80");
        Self::new((index % 9) as u8, (index / 9) as u8)
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index (0-8) of the 3×3 box containing this position,
    /// numbered left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the 20 positions sharing a row, column, or 3×3 box with this
    /// position, excluding the position itself.
    ///
    /// A digit placement is rule-consistent exactly when no peer already
    /// holds that digit; because the cell itself is not a peer, checking a
    /// cell against its own current value never self-conflicts.
    #[must_use]
    pub fn house_peers(self) -> [Self; 20] {
        let mut peers = [Self { x: 0, y: 0 }; 20];
        let mut n = 0;

        for x in 0..9 {
            if x != self.x {
                peers[n] = Self { x, y: self.y };
                n += 1;
            }
        }
        for y in 0..9 {
            if y != self.y {
                peers[n] = Self { x: self.x, y };
                n += 1;
            }
        }
        let box_x = self.x / 3 * 3;
        let box_y = self.y / 3 * 3;
        for y in box_y..box_y + 3 {
            for x in box_x..box_x + 3 {
                // row and column peers are already covered
                if x != self.x && y != self.y {
                    peers[n] = Self { x, y };
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, 20);
        peers
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
