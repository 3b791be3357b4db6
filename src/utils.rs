use crate::engine::{Cell, Dungeon, Grid, Position};
use crate::error::{GenerateError, LoadError, ParseError};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

/// Parses an array of string slices into a `Dungeon`.
///
/// Each string slice is one row of the grid, starting from row 0, with one
/// character per cell:
/// - 'W': `Cell::Wall`
/// - '.': `Cell::Floor`
/// - 'R': `Cell::MonsterRed`
/// - 'P': `Cell::MonsterPurple`
/// - 'B': `Cell::MonsterBlue`
/// - 'S': the player's start, stored as `Cell::Floor`
///
/// Rows are not required to have equal length; missing cells read as walls.
///
/// # Returns
/// * `Ok(Dungeon)` if parsing is successful.
/// * `Err(ParseError)` if there are no rows, an unrecognized character, no
///   start marker, or more than one start marker.
///
/// # Examples
/// ```
/// use dungeon_solver::engine::{Cell, Position};
/// use dungeon_solver::utils::dungeon_from_str_array;
///
/// let dungeon = dungeon_from_str_array(&["WWWW", "WSBW", "WWWW"]).unwrap();
/// assert_eq!(dungeon.start, Position::new(1, 1));
/// assert_eq!(dungeon.grid.get(Position::new(1, 1)), Cell::Floor);
/// assert_eq!(dungeon.grid.get(Position::new(1, 2)), Cell::MonsterBlue);
///
/// assert!(dungeon_from_str_array(&["WWW", "W.W", "WWW"]).is_err());
/// ```
pub fn dungeon_from_str_array(s: &[&str]) -> Result<Dungeon, ParseError> {
    if s.is_empty() {
        return Err(ParseError::EmptyDungeon);
    }

    let mut start: Option<Position> = None;
    let mut cells = Vec::with_capacity(s.len());

    for (r, row_str) in s.iter().enumerate() {
        let mut row = Vec::with_capacity(row_str.len());
        for (c, ch) in row_str.chars().enumerate() {
            if ch == 'S' {
                if let Some(first) = start {
                    return Err(ParseError::MultipleStarts {
                        first_row: first.row,
                        first_col: first.col,
                        row: r,
                        col: c,
                    });
                }
                start = Some(Position::new(r, c));
                row.push(Cell::Floor);
                continue;
            }
            let cell = Cell::from_char(ch)
                .ok_or(ParseError::UnrecognizedCharacter { ch, row: r, col: c })?;
            row.push(cell);
        }
        cells.push(row);
    }

    let start = start.ok_or(ParseError::MissingStart)?;
    Ok(Dungeon::new(Grid::from_rows(cells), start))
}

/// Parses dungeon text, one row per line.
///
/// Trailing whitespace (including `\r`) is stripped and blank lines are skipped.
pub fn dungeon_from_text(content: &str) -> Result<Dungeon, ParseError> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim_end)
        .filter(|s| !s.is_empty())
        .collect();
    dungeon_from_str_array(&lines)
}

/// Reads and parses a dungeon file.
pub fn read_dungeon_file(path: &Path) -> Result<Dungeon, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(dungeon_from_text(&content)?)
}

/// Shape and population of a randomly generated dungeon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Total rows, including the wall border.
    pub rows: usize,
    /// Total columns, including the wall border.
    pub cols: usize,
    pub monsters: usize,
    /// Walls placed inside the border.
    pub walls: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            rows: 7,
            cols: 7,
            monsters: 4,
            walls: 3,
        }
    }
}

/// Generates a wall-bordered dungeon from a seed.
///
/// The start, monsters and interior walls land on distinct interior cells;
/// monster ranks are uniform over red, purple and blue. The same config and
/// seed always produce the same dungeon. Nothing guarantees that every monster
/// can be reached.
pub fn generate_dungeon(config: &GeneratorConfig, seed: u64) -> Result<Dungeon, GenerateError> {
    if config.rows < 3 || config.cols < 3 {
        return Err(GenerateError::TooSmall {
            rows: config.rows,
            cols: config.cols,
        });
    }

    let mut interior: Vec<Position> = (1..config.rows - 1)
        .flat_map(|r| (1..config.cols - 1).map(move |c| Position::new(r, c)))
        .collect();
    let requested = 1 + config.monsters + config.walls;
    if requested > interior.len() {
        return Err(GenerateError::TooCrowded {
            available: interior.len(),
            requested,
        });
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    interior.shuffle(&mut rng);

    let mut grid = Grid::filled(config.rows, config.cols, Cell::Wall);
    for &pos in &interior {
        grid.set(pos, Cell::Floor);
    }

    let start = interior[0];
    for &pos in &interior[1..=config.monsters] {
        let monster = match rng.gen_range(0..3u8) {
            0 => Cell::MonsterRed,
            1 => Cell::MonsterPurple,
            _ => Cell::MonsterBlue,
        };
        grid.set(pos, monster);
    }
    for &pos in &interior[config.monsters + 1..requested] {
        grid.set(pos, Cell::Wall);
    }

    Ok(Dungeon::new(grid, start))
}
