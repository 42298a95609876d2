mod tile_render;

use crate::core::{Direction, GameState};
use crate::levels;
use bevy::ecs::relationship::RelatedSpawnerCommands;
use bevy::prelude::*;
use std::path::PathBuf;
use tile_render::{TileRenderPlugin, TileType, Tiles};

pub const HUD_HEIGHT: f32 = 100.0;

const NORMAL_BUTTON: Color = Color::srgb(0.15, 0.15, 0.15);
const HOVERED_BUTTON: Color = Color::srgb(0.25, 0.25, 0.25);
const PRESSED_BUTTON: Color = Color::srgb(0.35, 0.75, 0.35);

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
enum AppState {
    #[default]
    Menu,
    Playing,
    Won,
}

#[derive(Resource)]
struct LevelCatalog {
    files: Vec<PathBuf>,
}

/// The one game session being played. Inserted when a level is picked,
/// removed when play returns to the menu.
#[derive(Resource)]
struct ActiveGame {
    game: GameState,
}

#[derive(Component)]
struct MenuUi;

#[derive(Component)]
struct HudUi;

#[derive(Component)]
struct WinBanner;

#[derive(Component)]
struct LevelButton(usize);

#[derive(Component)]
enum HudButton {
    Reset,
    Menu,
}

pub fn run_game(level_files: Vec<PathBuf>) {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Sokoban".to_string(),
                resolution: (640, 760).into(),
                ..default()
            }),
            ..default()
        }))
        .init_state::<AppState>()
        .insert_resource(LevelCatalog { files: level_files })
        .add_plugins(TileRenderPlugin)
        .add_systems(Startup, setup_camera)
        .add_systems(OnEnter(AppState::Menu), (clear_board, setup_menu))
        .add_systems(OnExit(AppState::Menu), cleanup_menu)
        .add_systems(OnEnter(AppState::Playing), (setup_hud, sync_board))
        .add_systems(OnExit(AppState::Playing), cleanup_hud)
        .add_systems(OnEnter(AppState::Won), setup_win_banner)
        .add_systems(OnExit(AppState::Won), cleanup_win_banner)
        .add_systems(
            Update,
            (
                update_button_colors,
                handle_level_buttons.run_if(in_state(AppState::Menu)),
                (handle_movement_input, handle_hud_buttons).run_if(in_state(AppState::Playing)),
                handle_win_input.run_if(in_state(AppState::Won)),
            ),
        )
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn clear_board(mut commands: Commands, mut tiles: ResMut<Tiles>) {
    tiles.clear();
    commands.remove_resource::<ActiveGame>();
}

fn setup_menu(mut commands: Commands, catalog: Res<LevelCatalog>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgb(0.0, 0.0, 0.0)),
            MenuUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Sokoban - Select Level"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            for (index, _file) in catalog.files.iter().enumerate() {
                spawn_button(
                    parent,
                    &format!("Level {}", index + 1),
                    LevelButton(index),
                );
            }
        });
}

fn cleanup_menu(mut commands: Commands, menu: Query<Entity, With<MenuUi>>) {
    for entity in menu.iter() {
        commands.entity(entity).despawn();
    }
}

fn handle_level_buttons(
    mut commands: Commands,
    interactions: Query<(&Interaction, &LevelButton), (Changed<Interaction>, With<Button>)>,
    catalog: Res<LevelCatalog>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for (interaction, button) in interactions.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(path) = catalog.files.get(button.0) else {
            continue;
        };

        let rows = match levels::load_level_rows(path) {
            Ok(rows) => rows,
            Err(err) => {
                eprintln!("Could not read {}: {}", path.display(), err);
                continue;
            }
        };
        match GameState::new(&rows) {
            Ok(game) => {
                commands.insert_resource(ActiveGame { game });
                next_state.set(AppState::Playing);
            }
            Err(err) => {
                eprintln!("Could not load {}: {}", path.display(), err);
            }
        }
    }
}

fn setup_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                bottom: Val::Px(0.0),
                height: Val::Px(HUD_HEIGHT),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                column_gap: Val::Px(30.0),
                ..default()
            },
            HudUi,
        ))
        .with_children(|parent| {
            spawn_button(parent, "Reset", HudButton::Reset);
            spawn_button(parent, "Menu", HudButton::Menu);
        });
}

fn cleanup_hud(mut commands: Commands, hud: Query<Entity, With<HudUi>>) {
    for entity in hud.iter() {
        commands.entity(entity).despawn();
    }
}

fn handle_hud_buttons(
    interactions: Query<(&Interaction, &HudButton), (Changed<Interaction>, With<Button>)>,
    game: Option<ResMut<ActiveGame>>,
    mut tiles: ResMut<Tiles>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(mut active) = game else { return };

    for (interaction, button) in interactions.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button {
            HudButton::Reset => {
                active.game.reset();
                push_game_to_tiles(&active.game, &mut tiles);
            }
            HudButton::Menu => {
                next_state.set(AppState::Menu);
            }
        }
    }
}

fn handle_movement_input(
    keys: Res<ButtonInput<KeyCode>>,
    game: Option<ResMut<ActiveGame>>,
    mut tiles: ResMut<Tiles>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(mut active) = game else { return };

    let Some(dir) = pressed_direction(&keys) else {
        return;
    };

    active.game.step(dir);
    push_game_to_tiles(&active.game, &mut tiles);

    if active.game.is_won() {
        next_state.set(AppState::Won);
    }
}

fn pressed_direction(keys: &ButtonInput<KeyCode>) -> Option<Direction> {
    if keys.just_pressed(KeyCode::KeyW) || keys.just_pressed(KeyCode::ArrowUp) {
        Some(Direction::Up)
    } else if keys.just_pressed(KeyCode::KeyS) || keys.just_pressed(KeyCode::ArrowDown) {
        Some(Direction::Down)
    } else if keys.just_pressed(KeyCode::KeyA) || keys.just_pressed(KeyCode::ArrowLeft) {
        Some(Direction::Left)
    } else if keys.just_pressed(KeyCode::KeyD) || keys.just_pressed(KeyCode::ArrowRight) {
        Some(Direction::Right)
    } else {
        None
    }
}

fn sync_board(game: Option<Res<ActiveGame>>, mut tiles: ResMut<Tiles>) {
    let Some(active) = game else { return };
    push_game_to_tiles(&active.game, &mut tiles);
}

fn push_game_to_tiles(game: &GameState, tiles: &mut Tiles) {
    let grid = game
        .grid()
        .iter()
        .map(|row| row.iter().map(|&cell| TileType::from(cell)).collect())
        .collect();
    tiles.assign_new_grid(grid);
}

fn setup_win_banner(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                bottom: Val::Px(0.0),
                height: Val::Px(HUD_HEIGHT),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            WinBanner,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("You Win!"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::srgb(0.35, 0.9, 0.35)),
            ));
            parent.spawn((
                Text::new("Press any key or click to return to the menu"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

fn cleanup_win_banner(mut commands: Commands, banner: Query<Entity, With<WinBanner>>) {
    for entity in banner.iter() {
        commands.entity(entity).despawn();
    }
}

fn handle_win_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let any_key = keys.get_just_pressed().next().is_some();
    if any_key || mouse.just_pressed(MouseButton::Left) {
        next_state.set(AppState::Menu);
    }
}

fn update_button_colors(
    mut interactions: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, mut color) in interactions.iter_mut() {
        color.0 = match interaction {
            Interaction::Pressed => PRESSED_BUTTON,
            Interaction::Hovered => HOVERED_BUTTON,
            Interaction::None => NORMAL_BUTTON,
        };
    }
}

fn spawn_button<T: Component>(
    parent: &mut RelatedSpawnerCommands<ChildOf>,
    label: &str,
    marker: T,
) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(160.0),
                height: Val::Px(40.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(NORMAL_BUTTON),
            BorderColor::all(Color::srgb(0.5, 0.5, 0.5)),
            BorderRadius::all(Val::Px(4.0)),
            marker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(label),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}
