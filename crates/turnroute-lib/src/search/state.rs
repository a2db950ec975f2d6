use crate::grid::Position;

/// One of the four cardinal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    /// The heading after a 90 degree clockwise rotation.
    pub fn turn_right(self) -> Heading {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Unit (row, col) offset applied by one step in this heading.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Right => (0, 1),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
        }
    }

    /// Step one cell from `position` in this heading. Returns `None`
    /// when the step would leave the top or left grid edge; the caller
    /// still bounds-checks the bottom and right edges against the grid.
    pub fn apply(self, position: Position) -> Option<Position> {
        let (row_delta, col_delta) = self.offset();
        let row = position.row.checked_add_signed(row_delta)?;
        let col = position.col.checked_add_signed(col_delta)?;
        Some(Position::new(row, col))
    }
}

/// Legal next headings from a state.
///
/// The undirected start state may move in all four headings, in the
/// fixed order Up, Right, Down, Left. Every other state may only keep
/// its heading or rotate clockwise, forward first. The slices are
/// static so successor generation order is fixed and runs allocate
/// nothing per expansion.
pub fn successor_headings(heading: Option<Heading>) -> &'static [Heading] {
    match heading {
        None => &[Heading::Up, Heading::Right, Heading::Down, Heading::Left],
        Some(Heading::Up) => &[Heading::Up, Heading::Right],
        Some(Heading::Right) => &[Heading::Right, Heading::Down],
        Some(Heading::Down) => &[Heading::Down, Heading::Left],
        Some(Heading::Left) => &[Heading::Left, Heading::Up],
    }
}

/// Search state: a grid position plus the heading of the move that
/// produced it. Only the start state carries no heading. Equality and
/// hashing cover both fields, so the same cell approached from
/// different directions is deduplicated as distinct states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    pub position: Position,
    pub heading: Option<Heading>,
}

impl State {
    pub fn new(position: Position, heading: Option<Heading>) -> Self {
        Self { position, heading }
    }
}

/// Manhattan distance between two positions. Heading-agnostic, which
/// keeps it admissible under the turn constraint: restricting moves can
/// only lengthen real paths, never shorten them.
pub fn manhattan_distance(a: Position, b: Position) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_right_cycles_clockwise() {
        assert_eq!(Heading::Up.turn_right(), Heading::Right);
        assert_eq!(Heading::Right.turn_right(), Heading::Down);
        assert_eq!(Heading::Down.turn_right(), Heading::Left);
        assert_eq!(Heading::Left.turn_right(), Heading::Up);
    }

    #[test]
    fn four_right_turns_return_to_start() {
        let mut heading = Heading::Up;
        for _ in 0..4 {
            heading = heading.turn_right();
        }
        assert_eq!(heading, Heading::Up);
    }

    #[test]
    fn undirected_state_expands_in_all_four_headings() {
        assert_eq!(
            successor_headings(None),
            &[Heading::Up, Heading::Right, Heading::Down, Heading::Left]
        );
    }

    #[test]
    fn directed_state_expands_forward_then_right() {
        for heading in [Heading::Up, Heading::Right, Heading::Down, Heading::Left] {
            assert_eq!(
                successor_headings(Some(heading)),
                &[heading, heading.turn_right()]
            );
        }
    }

    #[test]
    fn apply_refuses_to_leave_top_and_left_edges() {
        let origin = Position::new(0, 0);
        assert_eq!(Heading::Up.apply(origin), None);
        assert_eq!(Heading::Left.apply(origin), None);
        assert_eq!(Heading::Down.apply(origin), Some(Position::new(1, 0)));
        assert_eq!(Heading::Right.apply(origin), Some(Position::new(0, 1)));
    }

    #[test]
    fn states_with_different_headings_are_distinct() {
        let position = Position::new(3, 4);
        let via_up = State::new(position, Some(Heading::Up));
        let via_right = State::new(position, Some(Heading::Right));
        assert_ne!(via_up, via_right);
        assert_eq!(via_up, State::new(position, Some(Heading::Up)));
    }

    #[test]
    fn manhattan_distance_sums_axis_differences() {
        assert_eq!(
            manhattan_distance(Position::new(0, 0), Position::new(3, 4)),
            7
        );
        assert_eq!(
            manhattan_distance(Position::new(5, 2), Position::new(1, 2)),
            4
        );
        assert_eq!(
            manhattan_distance(Position::new(2, 2), Position::new(2, 2)),
            0
        );
    }
}
