use crate::core::{Direction, GameState};
use crate::levels;
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::path::Path;

pub fn run_level(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let rows = levels::load_level_rows(path)?;
    let mut game = GameState::new(&rows)?;
    let label = levels::level_label(path);

    let mut terminal = setup_terminal()?;

    let mut render_state = GameRenderState {
        level_label: label,
        won: game.is_won(),
    };
    render_game(&mut terminal, &game, &render_state)?;

    loop {
        match handle_input() {
            Ok(ConsoleInput::Quit) => break,
            Ok(ConsoleInput::Reset) => {
                game.reset();
                render_state.won = game.is_won();
                render_game(&mut terminal, &game, &render_state)?;
            }
            Ok(ConsoleInput::Move(dir)) => {
                game.step(dir);
                render_state.won = game.is_won();
                render_game(&mut terminal, &game, &render_state)?;

                if render_state.won {
                    // Keep showing the win screen until user inputs
                    loop {
                        match handle_input() {
                            Ok(ConsoleInput::Timeout) => {}
                            Ok(_) => break,
                            Err(_) => {
                                println!("error reading input");
                                break;
                            }
                        }
                    }
                    break;
                }
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(_) => {
                println!("error reading input");
                break;
            }
        }
    }

    cleanup_terminal()?;

    Ok(())
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &GameState,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Game area
        let game_text = render_game_to_string(game);
        let game_paragraph = Paragraph::new(game_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Sokoban - {}", state.level_label)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        // Instructions
        let instructions = if state.won {
            "You Win! Press any key to quit."
        } else {
            "Controls: WASD or Arrow keys to move, R to reset, Q to quit"
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub fn render_game_to_string(game: &GameState) -> String {
    let mut result = String::new();
    for row in game.grid() {
        for cell in row {
            result.push(cell.symbol());
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    Move(Direction),
    Reset,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Reset,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Move(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Move(Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Move(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Move(Direction::Right)
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
