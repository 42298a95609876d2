#[cfg(test)]
mod test {
    use crate::core::GameState;
    use crate::levels::{discover_levels, load_level_rows, LEVELS_DIR};
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sokoban-test-{}-{}", name, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).unwrap();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn discovers_only_txt_files_sorted_by_name() {
        let dir = scratch_dir("discover");
        fs::write(dir.join("b.txt"), "*P*").unwrap();
        fs::write(dir.join("a.txt"), "*P*").unwrap();
        fs::write(dir.join("notes.md"), "not a level").unwrap();

        let found = discover_levels(&dir).unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn loads_rows_and_skips_blank_lines() {
        let dir = scratch_dir("load");
        let path = dir.join("level.txt");
        fs::write(&path, "*****\n*P.O*\n*****\n\n").unwrap();

        let rows = load_level_rows(&path).unwrap();
        assert_eq!(rows, vec!["*****", "*P.O*", "*****"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = std::env::temp_dir().join("sokoban-test-no-such-dir");
        assert!(discover_levels(&dir).is_err());
    }

    #[test]
    fn shipped_levels_are_well_formed() {
        let found = discover_levels(LEVELS_DIR).unwrap();
        assert!(!found.is_empty());
        for path in found {
            let rows = load_level_rows(&path).unwrap();
            let game = GameState::new(&rows)
                .unwrap_or_else(|err| panic!("{} is malformed: {}", path.display(), err));
            assert!(game.total_boxes() > 0, "{} has no boxes", path.display());
        }
    }
}
