#[cfg(test)]
mod test {
    use crate::core::Direction::*;
    use crate::core::{GameState, MalformedLevelError, Vec2};
    use crate::test::test_util::{GameTestState, level_rows};

    #[test]
    fn construction_counts_boxes_and_filled_targets() {
        let game = GameTestState::new("*P#X.O*").game;
        assert_eq!(game.total_boxes(), 2);
    }

    #[test]
    fn construction_collects_targets_from_open_and_filled_cells() {
        let game = GameTestState::new(
            "\
*****
*POX*
*.O.*
*****",
        )
        .game;
        let targets = game.targets();
        assert_eq!(targets.len(), 3);
        assert!(targets.contains(&Vec2 { i: 1, j: 2 }));
        assert!(targets.contains(&Vec2 { i: 1, j: 3 }));
        assert!(targets.contains(&Vec2 { i: 2, j: 2 }));
    }

    #[test]
    fn box_count_and_targets_never_change_across_moves() {
        let mut game = GameTestState::new(
            "\
******
*P#.O*
*.#..*
*.O..*
******",
        );
        let initial_targets = game.game.targets().to_vec();
        game.do_moves(&[Right, Right, Down, Down, Left, Up, Right, Up]);
        assert_eq!(game.game.total_boxes(), 2);
        assert_eq!(game.game.targets(), initial_targets.as_slice());
    }

    #[test]
    fn level_without_player_is_rejected() {
        let result = GameState::new(&level_rows("*.#O*"));
        assert_eq!(result.err(), Some(MalformedLevelError::NoPlayer));
    }

    #[test]
    fn level_with_two_players_is_rejected() {
        let result = GameState::new(&level_rows("*P.P*"));
        assert!(matches!(
            result.err(),
            Some(MalformedLevelError::MultiplePlayers { .. })
        ));
    }

    #[test]
    fn level_with_ragged_rows_is_rejected() {
        let result = GameState::new(&["****", "*P*", "****"]);
        assert!(matches!(
            result.err(),
            Some(MalformedLevelError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn level_with_unknown_symbol_is_rejected() {
        let result = GameState::new(&level_rows("*P?*"));
        assert!(matches!(
            result.err(),
            Some(MalformedLevelError::UnknownSymbol { symbol: '?', .. })
        ));
    }

    #[test]
    fn reset_restores_the_loaded_definition() {
        let level = "\
******
*P#.O*
*....*
******";
        let mut game = GameTestState::new(level);
        game.do_moves(&[Right, Down, Right, Right, Up]);
        game.game.reset();
        game.assert_matches(level);

        // repeated resets stay at the starting configuration
        game.game.reset();
        game.assert_matches(level);
    }

    #[test]
    fn reset_restores_player_position() {
        let mut game = GameTestState::new("*P..*");
        game.do_moves(&[Right, Right]);
        assert_eq!(game.game.player_pos(), Vec2 { i: 0, j: 3 });
        game.game.reset();
        assert_eq!(game.game.player_pos(), Vec2 { i: 0, j: 1 });
    }

    #[test]
    fn zero_box_level_is_won_on_load() {
        // Mirrors the original game: no boxes means the win condition
        // holds trivially.
        let game = GameTestState::new(
            "\
*****
*P.O*
*****",
        );
        assert!(game.game.is_won());
    }

    #[test]
    fn moving_next_to_a_target_does_not_fill_it() {
        let mut game = GameTestState::new(
            "\
*****
*P.O*
*****",
        );
        game.do_move(Right);
        game.assert_matches(
            "\
*****
*.PO*
*****",
        );
        assert!(game.game.is_won());
    }

    #[test]
    fn pushing_the_last_box_onto_a_target_wins() {
        let mut game = GameTestState::new(
            "\
*****
*P#O*
*****",
        );
        assert!(!game.game.is_won());
        game.do_move(Right);
        game.assert_matches(
            "\
*****
*.PX*
*****",
        );
        assert!(game.game.is_won());
    }

    #[test]
    fn moving_after_a_win_is_well_defined() {
        let mut game = GameTestState::new(
            "\
*****
*P#O*
*****",
        );
        game.do_moves(&[Right, Right]);
        game.assert_matches(
            "\
*****
*.PX*
*****",
        );
        assert!(game.game.is_won());
    }

    #[test]
    fn not_won_while_any_box_is_off_target() {
        let mut game = GameTestState::new("*P#O.X*");
        assert_eq!(game.game.total_boxes(), 2);
        assert!(!game.game.is_won());
        game.do_move(Right);
        game.assert_matches("*.PX.X*");
        assert!(game.game.is_won());
    }

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let game = GameTestState::new("*P.*").game;
        assert_eq!(game.cell(Vec2 { i: 0, j: 1 }), Some(crate::core::Cell::Player));
        assert_eq!(game.cell(Vec2 { i: -1, j: 0 }), None);
        assert_eq!(game.cell(Vec2 { i: 0, j: 4 }), None);
        assert_eq!(game.height(), 1);
        assert_eq!(game.width(), 4);
    }
}
