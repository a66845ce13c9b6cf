/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    ///
    /// The play field is toroidal: a coordinate that leaves one edge
    /// reappears on the opposite edge. Wrap, never clamp.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the position one cell away along `(dx, dy)`, wrapped.
    #[must_use]
    pub fn offset_wrapped(self, dx: i32, dy: i32, bounds: GridSize) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
        .wrapped(bounds)
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the center cell, used as the snake spawn point.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GridSize, Position};

    #[test]
    fn position_wrapping_keeps_coordinates_inside_bounds() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };

        let wrapped_left = Position { x: -1, y: 3 }.wrapped(bounds);
        let wrapped_bottom = Position { x: 4, y: 8 }.wrapped(bounds);

        assert_eq!(wrapped_left, Position { x: 9, y: 3 });
        assert_eq!(wrapped_bottom, Position { x: 4, y: 0 });
    }

    #[test]
    fn wrapping_is_identity_inside_bounds() {
        let bounds = GridSize {
            width: 40,
            height: 30,
        };

        for position in [
            Position { x: 0, y: 0 },
            Position { x: 39, y: 29 },
            Position { x: 17, y: 11 },
        ] {
            assert_eq!(position.wrapped(bounds), position);
        }
    }

    #[test]
    fn offset_wrapped_crosses_edges() {
        let bounds = GridSize {
            width: 6,
            height: 4,
        };

        let right_edge = Position { x: 5, y: 2 }.offset_wrapped(1, 0, bounds);
        let top_edge = Position { x: 3, y: 0 }.offset_wrapped(0, -1, bounds);

        assert_eq!(right_edge, Position { x: 0, y: 2 });
        assert_eq!(top_edge, Position { x: 3, y: 3 });
    }

    #[test]
    fn center_of_default_grid() {
        let bounds = GridSize {
            width: 40,
            height: 30,
        };

        assert_eq!(bounds.center(), Position { x: 20, y: 15 });
        assert_eq!(bounds.total_cells(), 1200);
    }
}
