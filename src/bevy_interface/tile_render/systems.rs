use crate::bevy_interface::tile_render::models::{TileGlyph, TileGrid, TileSlot, TileType, Tiles};
use bevy::prelude::*;

pub const TILE_SIZE: f32 = 50.0;

// The palette of the original game: brown walls, grey floors, yellow
// targets, teal player, orange boxes, green boxes-on-target.
const FLOOR_COLOR: Color = Color::srgb(0.753, 0.753, 0.753);
const WALL_COLOR: Color = Color::srgb(0.612, 0.400, 0.122);
const TARGET_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
const BOX_COLOR: Color = Color::srgb(0.780, 0.380, 0.078);
const BOX_ON_TARGET_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
const PLAYER_COLOR: Color = Color::srgb(0.012, 0.659, 0.620);

pub fn setup_tile_render(mut commands: Commands) {
    commands.insert_resource(Tiles::new_empty());

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(crate::bevy_interface::HUD_HEIGHT),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Node {
                    display: Display::Grid,
                    grid_auto_columns: GridTrack::auto(),
                    grid_auto_rows: GridTrack::auto(),
                    ..default()
                },
                TileGrid,
            ));
        });
}

pub fn update_grid_size(
    mut commands: Commands,
    existing_tiles: Query<Entity, With<TileSlot>>,
    parent_grid: Query<Entity, With<TileGrid>>,
    mut tiles: ResMut<Tiles>,
) {
    if !tiles.is_changed() {
        return;
    }

    let new_size = match tiles.get_new_rendered_size() {
        Some(size) => size,
        None => {
            if tiles.is_added() {
                tiles.get_grid_size()
            } else {
                return;
            }
        }
    };

    let Ok(parent_grid) = parent_grid.single() else {
        eprintln!("WARNING: The parent grid does not exist");
        return;
    };

    // despawn
    for entity in existing_tiles.iter() {
        commands.entity(entity).despawn();
    }

    commands.entity(parent_grid).with_children(|parent| {
        // respawn
        for i in 0..new_size.y {
            for j in 0..new_size.x {
                let location = IVec2 { x: j, y: i };
                let tile_type = tiles.get_tile_at(&location);
                parent
                    .spawn((
                        Node {
                            grid_row: GridPlacement::start(i as i16 + 1),
                            grid_column: GridPlacement::start(j as i16 + 1),
                            width: Val::Px(TILE_SIZE),
                            height: Val::Px(TILE_SIZE),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        BackgroundColor(slot_color(tile_type)),
                        TileSlot {
                            location,
                            tile_type,
                        },
                    ))
                    .with_children(|slot| {
                        let mut node = Node::default();
                        let mut color = BackgroundColor(Color::NONE);
                        let mut radius = BorderRadius::all(Val::Px(0.0));
                        let mut border = BorderColor::all(Color::NONE);
                        apply_glyph_style(tile_type, &mut node, &mut color, &mut radius, &mut border);
                        slot.spawn((node, color, radius, border, TileGlyph));
                    });
            }
        }
    });

    tiles.mark_grid_rendered_to_size(new_size);
    tiles.mark_tiles_not_dirty();
}

pub fn update_grid(
    mut existing_tiles: Query<(&mut TileSlot, &mut BackgroundColor, &Children)>,
    mut glyphs: Query<
        (
            &mut Node,
            &mut BackgroundColor,
            &mut BorderRadius,
            &mut BorderColor,
        ),
        (With<TileGlyph>, Without<TileSlot>),
    >,
    mut tiles: ResMut<Tiles>,
) {
    if !tiles.tiles_dirty() {
        return;
    }

    for (mut tile_slot, mut slot_bg, children) in existing_tiles.iter_mut() {
        let tile_type = tiles.get_tile_at(&tile_slot.location);

        if tile_type == tile_slot.tile_type {
            continue;
        }
        tile_slot.tile_type = tile_type;
        slot_bg.0 = slot_color(tile_type);

        for child in children.iter() {
            if let Ok((mut node, mut color, mut radius, mut border)) = glyphs.get_mut(child) {
                apply_glyph_style(tile_type, &mut node, &mut color, &mut radius, &mut border);
            }
        }
    }

    tiles.mark_tiles_not_dirty();
}

/// Every tile sits on a floor-colored slot; cleared boards show nothing.
fn slot_color(tile_type: TileType) -> Color {
    match tile_type {
        TileType::Empty => Color::NONE,
        _ => FLOOR_COLOR,
    }
}

/// The decoration drawn over the floor: a full square for walls and
/// boxes, a small disc for targets, a large disc for the player.
fn apply_glyph_style(
    tile_type: TileType,
    node: &mut Node,
    color: &mut BackgroundColor,
    radius: &mut BorderRadius,
    border: &mut BorderColor,
) {
    let (size_percent, glyph_color, round, border_px) = match tile_type {
        TileType::Empty | TileType::Floor => (100.0, Color::NONE, false, 0.0),
        TileType::Wall => (100.0, WALL_COLOR, false, 0.0),
        TileType::Box => (100.0, BOX_COLOR, false, 5.0),
        TileType::BoxOnTarget => (100.0, BOX_ON_TARGET_COLOR, false, 5.0),
        TileType::Target => (50.0, TARGET_COLOR, true, 0.0),
        TileType::Player => (90.0, PLAYER_COLOR, true, 0.0),
    };

    node.width = Val::Percent(size_percent);
    node.height = Val::Percent(size_percent);
    node.border = UiRect::all(Val::Px(border_px));
    color.0 = glyph_color;
    *radius = if round {
        BorderRadius::all(Val::Percent(50.0))
    } else {
        BorderRadius::all(Val::Px(0.0))
    };
    *border = BorderColor::all(if border_px > 0.0 {
        Color::BLACK
    } else {
        Color::NONE
    });
}
