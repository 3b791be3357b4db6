//! Core board model for the dungeon puzzle.
//!
//! This module defines the game's fundamental components:
//! - `Cell`: The contents of a single dungeon tile (wall, floor or a monster rank).
//! - `Position` / `Direction`: Grid coordinates and the four cardinal directions.
//! - `Grid`: The rectangular board, with bounds-checked access, rendering and
//!   the reachability explorer used to find attack origins.
//! - `Dungeon`: A grid together with the player's starting position.
use std::collections::HashSet;
use std::fmt;

/// Represents the contents of a single tile of the dungeon.
///
/// Monster variants are ordered by rank: a hit moves a monster one step along
/// `MonsterRed -> MonsterPurple -> MonsterBlue -> Floor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable terrain.
    Wall,
    /// Walkable, empty terrain.
    Floor,
    /// Strongest monster, three hits from death.
    MonsterRed,
    /// Two hits from death.
    MonsterPurple,
    /// Weakest monster, dies on the next hit.
    MonsterBlue,
}

impl Cell {
    /// Returns `true` if the cell holds a monster of any rank.
    pub fn is_monster(&self) -> bool {
        matches!(self, Cell::MonsterRed | Cell::MonsterPurple | Cell::MonsterBlue)
    }

    /// Returns the cell a monster becomes after taking one hit.
    ///
    /// Non-monster cells are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeon_solver::engine::Cell;
    /// assert_eq!(Cell::MonsterRed.hit(), Cell::MonsterPurple);
    /// assert_eq!(Cell::MonsterBlue.hit(), Cell::Floor);
    /// ```
    pub fn hit(&self) -> Cell {
        match self {
            Cell::MonsterRed => Cell::MonsterPurple,
            Cell::MonsterPurple => Cell::MonsterBlue,
            Cell::MonsterBlue => Cell::Floor,
            other => *other,
        }
    }

    /// Heuristic weight of the cell, used only by the pruning bound.
    ///
    /// This is not the number of hits a monster needs; every hit advances
    /// exactly one rank.
    pub fn health_weight(&self) -> u32 {
        match self {
            Cell::MonsterRed => 3,
            Cell::MonsterPurple => 2,
            Cell::MonsterBlue => 1,
            Cell::Wall | Cell::Floor => 0,
        }
    }

    /// Position of the cell in the rank order, `0` for red up to `3` for floor.
    /// Walls have no rank.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Cell::MonsterRed => Some(0),
            Cell::MonsterPurple => Some(1),
            Cell::MonsterBlue => Some(2),
            Cell::Floor => Some(3),
            Cell::Wall => None,
        }
    }

    /// Converts the cell to its character in the input format.
    ///
    /// ```
    /// use dungeon_solver::engine::Cell;
    /// assert_eq!(Cell::Wall.to_char(), 'W');
    /// assert_eq!(Cell::MonsterPurple.to_char(), 'P');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Cell::Wall => 'W',
            Cell::Floor => '.',
            Cell::MonsterRed => 'R',
            Cell::MonsterPurple => 'P',
            Cell::MonsterBlue => 'B',
        }
    }

    /// Parses a cell character. The start marker `S` is not a cell and yields `None`.
    pub fn from_char(ch: char) -> Option<Cell> {
        match ch {
            'W' => Some(Cell::Wall),
            '.' => Some(Cell::Floor),
            'R' => Some(Cell::MonsterRed),
            'P' => Some(Cell::MonsterPurple),
            'B' => Some(Cell::MonsterBlue),
            _ => None,
        }
    }

    /// Returns the ANSI background color code string for terminal output.
    fn to_ansi_color_code(&self) -> &'static str {
        match self {
            Cell::Wall => "47",
            Cell::Floor => "40",
            Cell::MonsterRed => "41",
            Cell::MonsterPurple => "45",
            Cell::MonsterBlue => "44",
        }
    }
}

/// A (row, column) coordinate on the grid. Both are 0-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Moves `distance` steps along `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant; such
    /// cells are outside every grid and read as walls.
    pub fn step(self, direction: Direction, distance: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = offset(self.row, dr, distance)?;
        let col = offset(self.col, dc, distance)?;
        Some(Position { row, col })
    }
}

fn offset(base: usize, delta: isize, distance: usize) -> Option<usize> {
    match delta {
        0 => Some(base),
        1 => base.checked_add(distance),
        _ => base.checked_sub(distance),
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four cardinal directions. Diagonal movement does not exist in this game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in the order attacks are tried.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// (row, column) unit vector of the direction.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// The two directions perpendicular to this one, in grid order
    /// (west before east, north before south).
    pub fn perpendicular(&self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::West, Direction::East],
            Direction::East | Direction::West => [Direction::North, Direction::South],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents the dungeon board as rows of `Cell`s.
///
/// The shape never changes after parsing; only cell contents do, and only on
/// fresh copies made by the combat resolver. Rows are expected to be equally
/// long and the border to be walled, but neither is required: any coordinate
/// outside the stored cells reads as `Cell::Wall`, so exploration and attack
/// evaluation never index out of bounds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates a grid from row-major cells.
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Self {
        Grid { cells }
    }

    /// Creates a `rows` x `cols` grid filled with `fill`.
    pub fn filled(rows: usize, cols: usize, fill: Cell) -> Self {
        Grid {
            cells: vec![vec![fill; cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Width of the widest row.
    pub fn cols(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the cell at `pos`, or `Cell::Wall` if `pos` is outside the grid.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .unwrap_or(Cell::Wall)
    }

    /// Like [`Grid::get`], for a position that may not exist at all.
    pub fn get_opt(&self, pos: Option<Position>) -> Cell {
        pos.map_or(Cell::Wall, |p| self.get(p))
    }

    /// Sets the cell at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    /// Iterates over every stored cell with its position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &cell)| (Position::new(r, c), cell))
        })
    }

    /// Number of monsters of any rank on the grid.
    pub fn monster_count(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.is_monster()).count()
    }

    /// Computes every position the player can walk to from `start`.
    ///
    /// Movement is 4-directional across `Floor` cells only; walls, monsters and
    /// the grid edge all block. `start` itself is always included, even when a
    /// monster has since been pushed onto it. The order of the returned
    /// positions is discovery order and carries no meaning.
    ///
    /// # Examples
    /// ```
    /// use dungeon_solver::engine::Position;
    /// use dungeon_solver::utils::dungeon_from_str_array;
    ///
    /// let dungeon = dungeon_from_str_array(&[
    ///     "WWWWW",
    ///     "WS.BW",
    ///     "WWW.W",
    ///     "WWWWW",
    /// ]).unwrap();
    /// let reachable = dungeon.grid.reachable_from(dungeon.start);
    /// assert_eq!(reachable.len(), 2);
    /// assert!(reachable.contains(&Position::new(1, 2)));
    /// assert!(!reachable.contains(&Position::new(2, 3)));
    /// ```
    pub fn reachable_from(&self, start: Position) -> Vec<Position> {
        let mut discovered = HashSet::new();
        let mut reachable = vec![start];
        let mut stack = vec![start];
        discovered.insert(start);

        while let Some(current) = stack.pop() {
            for direction in Direction::ALL {
                let Some(next) = current.step(direction, 1) else {
                    continue;
                };
                if self.get(next) == Cell::Floor && discovered.insert(next) {
                    reachable.push(next);
                    stack.push(next);
                }
            }
        }

        reachable
    }

    /// Generates a string representation of the grid with an optional player marker.
    ///
    /// Plain output uses the input characters with the player drawn as `*`.
    /// With `ansi` set, each cell is drawn as a colored block instead and the
    /// player's cell shows `**`.
    pub fn to_string_with_player(&self, player: Option<Position>, ansi: bool) -> String {
        let mut output = String::new();

        for (r_idx, row) in self.cells.iter().enumerate() {
            for (c_idx, cell) in row.iter().enumerate() {
                let is_player = player.map_or(false, |p| p.row == r_idx && p.col == c_idx);
                if ansi {
                    let content = if is_player { "**" } else { "  " };
                    output.push_str(&format!(
                        "\x1b[1;{}m{}\x1b[m",
                        cell.to_ansi_color_code(),
                        content
                    ));
                } else if is_player {
                    output.push('*');
                } else {
                    output.push(cell.to_char());
                }
            }
            if r_idx + 1 < self.cells.len() {
                output.push('\n');
            }
        }

        output
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_player(None, false))
    }
}

/// A parsed puzzle: the board plus where the player starts.
///
/// The start tile has already been converted to `Cell::Floor`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dungeon {
    pub grid: Grid,
    pub start: Position,
}

impl Dungeon {
    pub fn new(grid: Grid, start: Position) -> Self {
        Dungeon { grid, start }
    }
}

impl fmt::Display for Dungeon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();
        for (r_idx, row) in self.grid.cells.iter().enumerate() {
            for (c_idx, cell) in row.iter().enumerate() {
                if r_idx == self.start.row && c_idx == self.start.col {
                    output.push('S');
                } else {
                    output.push(cell.to_char());
                }
            }
            if r_idx + 1 < self.grid.cells.len() {
                output.push('\n');
            }
        }
        f.write_str(&output)
    }
}
