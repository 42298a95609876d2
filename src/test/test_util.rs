use crate::console_interface::render_game_to_string;
use crate::core::{Direction, GameState};
pub use dissimilar::diff as __diff;

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

/// Turns a raw level literal into the rows `GameState::new` takes.
pub fn level_rows(level: &str) -> Vec<String> {
    level
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct GameTestState {
    pub game: GameState,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        let game = GameState::new(&level_rows(level)).expect("test level must be well-formed");
        Self { game }
    }

    pub fn game_to_string(&self) -> String {
        render_game_to_string(&self.game).trim_matches('\n').into()
    }

    pub fn do_move(&mut self, direction: Direction) {
        self.game.step(direction);
    }

    pub fn do_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.do_move(dir);
        }
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}
