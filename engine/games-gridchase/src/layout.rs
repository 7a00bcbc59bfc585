//! ASCII layouts and the built-in catalogue.
//!
//! ```text
//! %  wall        .  food        o  capsule
//! P  controlled  G  ghost          (space) empty
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use engine_core::Position;
use thiserror::Error;
use tracing::debug;

/// Built-in layouts, by name.
pub const LAYOUT_NAMES: [&str; 4] = ["tiny", "small", "trapped", "open"];

const TINY: &str = include_str!("../layouts/tiny.lay");
const SMALL: &str = include_str!("../layouts/small.lay");
const TRAPPED: &str = include_str!("../layouts/trapped.lay");
const OPEN: &str = include_str!("../layouts/open.lay");

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile '{tile}' at row {row}, column {col}")]
    UnknownTile { tile: char, row: usize, col: usize },

    #[error("layout needs exactly one controlled agent 'P', found {0}")]
    ControlledAgentCount(usize),

    #[error("no built-in layout or file named '{0}'")]
    NotFound(String),

    #[error("failed to read layout {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Static part of a board: walls plus where everything starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    name: String,
    width: usize,
    height: usize,
    walls: Vec<bool>,
    pub(crate) food: Vec<Position>,
    pub(crate) capsules: Vec<Position>,
    pub(crate) agent_start: Position,
    pub(crate) ghost_starts: Vec<Position>,
}

impl Layout {
    /// Parse an ASCII layout. Trailing whitespace-only lines are ignored.
    pub fn parse(name: &str, text: &str) -> Result<Self, LayoutError> {
        let mut rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        while rows.last().is_some_and(|row| row.trim().is_empty()) {
            rows.pop();
        }

        let width = match rows.first() {
            Some(row) => row.chars().count(),
            None => return Err(LayoutError::Empty),
        };
        if width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut walls = Vec::with_capacity(width * rows.len());
        let mut food = Vec::new();
        let mut capsules = Vec::new();
        let mut agents = Vec::new();
        let mut ghost_starts = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::Ragged {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, tile) in row.chars().enumerate() {
                let here = Position::new(x as i32, y as i32);
                walls.push(tile == '%');
                match tile {
                    '%' | ' ' => {}
                    '.' => food.push(here),
                    'o' => capsules.push(here),
                    'P' => agents.push(here),
                    'G' => ghost_starts.push(here),
                    _ => {
                        return Err(LayoutError::UnknownTile {
                            tile,
                            row: y,
                            col: x,
                        })
                    }
                }
            }
        }

        let agent_start = match agents.as_slice() {
            [start] => *start,
            other => return Err(LayoutError::ControlledAgentCount(other.len())),
        };

        Ok(Self {
            name: name.to_string(),
            width,
            height: rows.len(),
            walls,
            food,
            capsules,
            agent_start,
            ghost_starts,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Ghosts the layout can seat.
    pub fn num_ghosts(&self) -> usize {
        self.ghost_starts.len()
    }

    /// Cells outside the board count as walls.
    pub fn is_wall(&self, position: Position) -> bool {
        if position.x < 0 || position.y < 0 {
            return true;
        }
        let (x, y) = (position.x as usize, position.y as usize);
        if x >= self.width || y >= self.height {
            return true;
        }
        self.walls[y * self.width + x]
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.name, self.width, self.height)
    }
}

/// Built-in layout by name.
pub fn layout_by_name(name: &str) -> Option<Layout> {
    let text = match name {
        "tiny" => TINY,
        "small" => SMALL,
        "trapped" => TRAPPED,
        "open" => OPEN,
        _ => return None,
    };
    // The catalogue is checked by the tests below.
    Layout::parse(name, text).ok()
}

/// Load a built-in layout by name, or else read the file at `name_or_path`.
pub fn load_layout(name_or_path: &str) -> Result<Layout, LayoutError> {
    if let Some(layout) = layout_by_name(name_or_path) {
        return Ok(layout);
    }

    let path = Path::new(name_or_path);
    if !path.is_file() {
        return Err(LayoutError::NotFound(name_or_path.to_string()));
    }

    debug!(path = %path.display(), "Loading layout from file");
    let text = fs::read_to_string(path).map_err(|source| LayoutError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(name_or_path);
    Layout::parse(name, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_catalogue_parses() {
        for name in LAYOUT_NAMES {
            let layout = layout_by_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(layout.name(), name);
            assert!(layout.num_ghosts() >= 1, "{name} has no ghosts");
            assert!(!layout.food.is_empty(), "{name} has no food");
        }
        assert!(layout_by_name("mediumClassic").is_none());
    }

    #[test]
    fn test_small_layout_shape() {
        let layout = layout_by_name("small").unwrap();
        assert_eq!(layout.width(), 20);
        assert_eq!(layout.height(), 7);
        assert_eq!(layout.num_ghosts(), 2);
        assert_eq!(layout.capsules.len(), 2);
        assert_eq!(layout.agent_start, Position::new(9, 5));
    }

    #[test]
    fn test_parse_positions() {
        let layout = Layout::parse("mini", "%%%%%\n%P.G%\n%o  %\n%%%%%\n\n").unwrap();
        assert_eq!(layout.height(), 4);
        assert_eq!(layout.agent_start, Position::new(1, 1));
        assert_eq!(layout.food, vec![Position::new(2, 1)]);
        assert_eq!(layout.ghost_starts, vec![Position::new(3, 1)]);
        assert_eq!(layout.capsules, vec![Position::new(1, 2)]);
        assert!(layout.is_wall(Position::new(0, 0)));
        assert!(!layout.is_wall(Position::new(2, 2)));
        assert!(layout.is_wall(Position::new(-1, 2)));
        assert!(layout.is_wall(Position::new(2, 9)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Layout::parse("x", ""), Err(LayoutError::Empty)));
        assert!(matches!(
            Layout::parse("x", "%%%\n%P\n"),
            Err(LayoutError::Ragged { row: 1, expected: 3, found: 2 })
        ));
        assert!(matches!(
            Layout::parse("x", "%P%\n%X%\n"),
            Err(LayoutError::UnknownTile { tile: 'X', row: 1, col: 1 })
        ));
        assert!(matches!(
            Layout::parse("x", "%..%\n"),
            Err(LayoutError::ControlledAgentCount(0))
        ));
        assert!(matches!(
            Layout::parse("x", "%PP%\n"),
            Err(LayoutError::ControlledAgentCount(2))
        ));
    }

    #[test]
    fn test_load_layout_from_file() {
        let mut file = tempfile::Builder::new().suffix(".lay").tempfile().unwrap();
        writeln!(file, "%%%%").unwrap();
        writeln!(file, "%PG%").unwrap();
        writeln!(file, "%%%%").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let layout = load_layout(&path).unwrap();
        assert_eq!(layout.num_ghosts(), 1);
        assert!(layout.name() != path);
    }

    #[test]
    fn test_load_layout_unknown() {
        let err = load_layout("no-such-layout").unwrap_err();
        assert!(matches!(err, LayoutError::NotFound(name) if name == "no-such-layout"));
    }
}
