use crate::position::Position;

#[derive(Debug, Clone, Copy, Default)]
pub struct Cell {
    pub halite: usize,
    /// A ship (anyone's) sits on this cell this turn.
    pub occupied: bool,
    /// A shipyard or dropoff sits on this cell.
    pub structure: bool,
}

pub struct GameMap {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl GameMap {
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Self {
        let height = rows.len();
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        let cells = rows
            .into_iter()
            .flatten()
            .map(|halite| Cell {
                halite,
                ..Cell::default()
            })
            .collect();
        GameMap {
            width,
            height,
            cells,
        }
    }

    pub fn at(&self, position: Position) -> &Cell {
        &self.cells[self.index(position)]
    }

    pub fn at_mut(&mut self, position: Position) -> &mut Cell {
        let index = self.index(position);
        &mut self.cells[index]
    }

    /// Occupancy is rebuilt from scratch every turn; structures persist.
    pub fn clear_occupancy(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.occupied = false;
        }
    }

    fn index(&self, position: Position) -> usize {
        let x = position.x.rem_euclid(self.width as i32) as usize;
        let y = position.y.rem_euclid(self.height as i32) as usize;
        y * self.width + x
    }
}
