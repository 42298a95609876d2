// Sokoban with a level-select menu.
// `sokoban` or `sokoban gui` opens the graphical front end;
// `sokoban console [level]` plays one level in the terminal.
// Levels are plain text files in the `levels/` directory:
// '*' wall, '.' floor, 'O' target, 'X' box on target, '#' box, 'P' player.

mod bevy_interface;
mod console_interface;
mod core;
mod levels;
mod models;
mod test;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let switch = std::env::args().nth(1).unwrap_or("gui".to_string());

    let level_files = levels::discover_levels(levels::LEVELS_DIR)?;
    if level_files.is_empty() {
        eprintln!("No .txt levels found in {}/", levels::LEVELS_DIR);
        return Ok(());
    }

    match switch.as_str() {
        "gui" => {
            bevy_interface::run_game(level_files);
        }
        "console" => {
            let index = std::env::args()
                .nth(2)
                .and_then(|arg| arg.parse::<usize>().ok())
                .unwrap_or(1);
            let Some(path) = index.checked_sub(1).and_then(|i| level_files.get(i)) else {
                eprintln!("No level {} (found {} levels)", index, level_files.len());
                return Ok(());
            };
            console_interface::run_level(path)?;
        }
        _ => {
            println!(
                "Unknown mode: {}. Use 'gui' or 'console'. defaulting to gui",
                switch
            );
            bevy_interface::run_game(level_files);
        }
    }

    Ok(())
}
