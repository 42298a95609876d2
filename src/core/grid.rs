use crate::core::{Cell, Direction, MalformedLevelError, Vec2};

/// The level grid model: a rectangular grid of cells, the player's
/// position, the fixed target set, and the fixed box count. A deep copy
/// of the loaded definition is kept so `reset` can restore it.
#[derive(Clone)]
pub struct GameState {
    initial: Vec<Vec<Cell>>,
    initial_player: Vec2,
    grid: Vec<Vec<Cell>>,
    player: Vec2,
    targets: Vec<Vec2>,
    total_boxes: usize,
}

impl GameState {
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<GameState, MalformedLevelError> {
        let mut grid: Vec<Vec<Cell>> = Vec::with_capacity(rows.len());
        let mut player: Option<Vec2> = None;
        let mut targets: Vec<Vec2> = Vec::new();
        let mut total_boxes = 0;

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let mut cells = Vec::with_capacity(row.len());
            for (j, ch) in row.chars().enumerate() {
                let pos = Vec2 { i: i as i32, j: j as i32 };
                let cell = Cell::from_symbol(ch)
                    .ok_or(MalformedLevelError::UnknownSymbol { symbol: ch, pos })?;
                match cell {
                    Cell::Player => match player {
                        None => player = Some(pos),
                        Some(first) => {
                            return Err(MalformedLevelError::MultiplePlayers { first, second: pos });
                        }
                    },
                    Cell::Target => targets.push(pos),
                    Cell::BoxOnFloor => total_boxes += 1,
                    Cell::BoxOnTarget => {
                        targets.push(pos);
                        total_boxes += 1;
                    }
                    Cell::Wall | Cell::Floor => {}
                }
                cells.push(cell);
            }
            if let Some(first_row) = grid.first()
                && cells.len() != first_row.len()
            {
                return Err(MalformedLevelError::RaggedRow {
                    row: i,
                    len: cells.len(),
                    expected: first_row.len(),
                });
            }
            grid.push(cells);
        }

        let player = player.ok_or(MalformedLevelError::NoPlayer)?;

        Ok(GameState {
            initial: grid.clone(),
            initial_player: player,
            grid,
            player,
            targets,
            total_boxes,
        })
    }

    /// Restores the working grid to the loaded definition. Targets and
    /// the box count are fixed per level, so only the grid and the
    /// player position change. Idempotent.
    pub fn reset(&mut self) {
        self.grid = self.initial.clone();
        self.player = self.initial_player;
    }

    /// Applies one move. Blocked moves, blocked pushes, and moves off
    /// the grid edge are silent no-ops; the grid is left untouched.
    pub fn step(&mut self, dir: Direction) {
        self.apply_move(dir);
        // Always reconcile target cells, even after a no-op.
        self.refresh_targets();
    }

    fn apply_move(&mut self, dir: Direction) {
        let h = self.height();
        let w = self.width();
        let d = dir.delta();

        let ni = self.player.i + d.i;
        let nj = self.player.j + d.j;
        if ni < 0 || nj < 0 || ni >= h || nj >= w {
            return;
        }

        let dest = self.grid[ni as usize][nj as usize];
        if dest.holds_box() {
            let bi = ni + d.i;
            let bj = nj + d.j;
            if bi < 0 || bj < 0 || bi >= h || bj >= w {
                return;
            }
            if !self.grid[bi as usize][bj as usize].walkable() {
                return;
            }
            // The box lands as a bare box; the target refresh promotes
            // it to a filled target when it sits on one.
            self.grid[bi as usize][bj as usize] = Cell::BoxOnFloor;
        } else if !dest.walkable() {
            return;
        }

        // Move the player. A vacated target comes back via the refresh.
        let (pi, pj) = (self.player.i, self.player.j);
        self.grid[pi as usize][pj as usize] = Cell::Floor;
        self.grid[ni as usize][nj as usize] = Cell::Player;
        self.player = Vec2 { i: ni, j: nj };
    }

    /// Re-marks the fixed target coordinates: bare floor becomes an
    /// unfilled target, a bare box becomes a filled one. Cells occupied
    /// by the player stay as they are until the player leaves.
    fn refresh_targets(&mut self) {
        for &Vec2 { i, j } in &self.targets {
            let cell = &mut self.grid[i as usize][j as usize];
            *cell = match *cell {
                Cell::Floor => Cell::Target,
                Cell::BoxOnFloor => Cell::BoxOnTarget,
                other => other,
            };
        }
    }

    /// Won when every box sits on a target. A level with zero boxes is
    /// won immediately; that mirrors the original game and is left as is.
    pub fn is_won(&self) -> bool {
        let filled = self
            .grid
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::BoxOnTarget)
            .count();
        filled == self.total_boxes
    }

    pub fn cell(&self, pos: Vec2) -> Option<Cell> {
        if pos.i < 0 || pos.j < 0 || pos.i >= self.height() || pos.j >= self.width() {
            return None;
        }
        Some(self.grid[pos.i as usize][pos.j as usize])
    }

    pub fn grid(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    pub fn player_pos(&self) -> Vec2 {
        self.player
    }

    pub fn targets(&self) -> &[Vec2] {
        &self.targets
    }

    pub fn total_boxes(&self) -> usize {
        self.total_boxes
    }

    pub fn height(&self) -> i32 {
        self.grid.len() as i32
    }

    pub fn width(&self) -> i32 {
        if self.grid.is_empty() {
            0
        } else {
            self.grid[0].len() as i32
        }
    }
}
