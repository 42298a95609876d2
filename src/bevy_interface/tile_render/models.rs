use crate::core::Cell;
use bevy::prelude::*;

/// The grid of tiles currently shown on screen. The game pushes a fresh
/// tile grid in after every move; the render systems pick up the dirty
/// flag and reconcile the spawned UI nodes.
#[derive(Resource)]
pub struct Tiles {
    grid: Vec<Vec<TileType>>,
    grid_size: IVec2,
    rendered_grid_size: IVec2,
    tile_contents_dirty: bool,
}

#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub enum TileType {
    Empty,
    Floor,
    Wall,
    Box,
    BoxOnTarget,
    Target,
    Player,
}

#[derive(Component)]
pub struct TileGrid;

#[derive(Component)]
pub struct TileSlot {
    pub location: IVec2,
    pub tile_type: TileType,
}

/// The decoration node inside a tile slot: the wall block, the box, the
/// target dot, or the player disc.
#[derive(Component)]
pub struct TileGlyph;

impl From<Cell> for TileType {
    fn from(cell: Cell) -> TileType {
        match cell {
            Cell::Wall => TileType::Wall,
            Cell::Floor => TileType::Floor,
            Cell::Target => TileType::Target,
            Cell::BoxOnFloor => TileType::Box,
            Cell::BoxOnTarget => TileType::BoxOnTarget,
            Cell::Player => TileType::Player,
        }
    }
}

impl Tiles {
    pub fn new_empty() -> Tiles {
        Tiles {
            grid: vec![],
            grid_size: IVec2::splat(0),
            rendered_grid_size: IVec2::splat(0),
            tile_contents_dirty: false,
        }
    }

    pub fn assign_new_grid(&mut self, new_grid: Vec<Vec<TileType>>) {
        let y = new_grid.len();
        let x = if y > 0 { new_grid[0].len() } else { 0 };

        new_grid.iter().for_each(|row| {
            assert_eq!(row.len(), x, "Grid must be uniform size");
        });

        self.grid = new_grid;
        self.tile_contents_dirty = true;
        self.grid_size = IVec2::new(x as i32, y as i32);
    }

    pub fn clear(&mut self) {
        self.assign_new_grid(vec![]);
    }

    pub fn get_grid_size(&self) -> IVec2 {
        self.grid_size
    }

    /// If the grid size does not match the rendered size, this returns the new size. Otherwise None
    pub fn get_new_rendered_size(&self) -> Option<IVec2> {
        if self.grid_size == self.rendered_grid_size {
            None
        } else {
            Some(self.grid_size)
        }
    }

    /// Mark that the grid rendered to the given new size.
    pub fn mark_grid_rendered_to_size(&mut self, new_size: IVec2) {
        if self.grid_size != new_size {
            eprintln!(
                "Warning: grid size rendered to {:?}, does not match current grid size {:?}",
                new_size, self.grid_size
            );
        }
        self.rendered_grid_size = new_size;
    }

    pub fn get_tile_at(&self, location: &IVec2) -> TileType {
        self.grid
            .get(location.y as usize)
            .and_then(|row| row.get(location.x as usize))
            .copied()
            .unwrap_or(TileType::Empty)
    }

    pub fn tiles_dirty(&self) -> bool {
        self.tile_contents_dirty
    }

    pub fn mark_tiles_not_dirty(&mut self) {
        self.tile_contents_dirty = false
    }
}
