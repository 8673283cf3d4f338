pub const GRID_ROWS: usize = 2;
pub const GRID_COLS: usize = 5;

/// The 2x5 "K" board for the current game, filled row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrikeoutGrid {
    cells: [[bool; GRID_COLS]; GRID_ROWS],
    count: u32,
}

impl StrikeoutGrid {
    pub fn new(count: u32) -> Self {
        let mut cells = [[false; GRID_COLS]; GRID_ROWS];
        let lit = (count as usize).min(GRID_ROWS * GRID_COLS);
        for i in 0..lit {
            cells[i / GRID_COLS][i % GRID_COLS] = true;
        }
        Self { cells, count }
    }

    pub fn rows(&self) -> &[[bool; GRID_COLS]; GRID_ROWS] {
        &self.cells
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn lit(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| **cell).count()
    }

    /// Text form: `K` for a strikeout, `.` for an empty slot.
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&k| if k { 'K' } else { '.' }).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
