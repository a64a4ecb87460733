//! Tests for key code and move script parsing

#[cfg(test)]
mod tests {
    use tilewalk::AlgorithmError;
    use tilewalk::io::input::{direction_for_key, parse_key_codes, parse_move_script, random_walk};
    use tilewalk::spatial::Direction;

    // Tests WASD and arrow keys map to the same moves
    #[test]
    fn test_key_codes_map_to_directions() {
        for (wasd, arrow, direction) in [
            ("KeyW", "ArrowUp", Direction::Up),
            ("KeyS", "ArrowDown", Direction::Down),
            ("KeyA", "ArrowLeft", Direction::Left),
            ("KeyD", "ArrowRight", Direction::Right),
        ] {
            assert_eq!(direction_for_key(wasd), Some(direction));
            assert_eq!(direction_for_key(arrow), Some(direction));
        }
        assert_eq!(direction_for_key("KeyQ"), None);
        assert_eq!(direction_for_key("keyw"), None);
    }

    // Tests key code lists skip unknown codes and empty entries
    #[test]
    fn test_parse_key_codes() {
        assert_eq!(
            parse_key_codes("KeyD,,ArrowUp  Enter,KeyA"),
            vec![Direction::Right, Direction::Up, Direction::Left]
        );
        assert!(parse_key_codes("").is_empty());
    }

    // Tests move scripts ignore case and whitespace
    #[test]
    fn test_parse_move_script() {
        assert_eq!(
            parse_move_script("wA s\nD").unwrap(),
            vec![
                Direction::Up,
                Direction::Left,
                Direction::Down,
                Direction::Right
            ]
        );
        assert!(parse_move_script("").unwrap().is_empty());
    }

    // Tests move scripts reject other characters
    #[test]
    fn test_parse_move_script_rejects_unknown() {
        let err = parse_move_script("wq").unwrap_err();
        match err {
            AlgorithmError::InvalidParameter {
                parameter, value, ..
            } => {
                assert_eq!(parameter, "moves");
                assert_eq!(value, "q");
            }
            _ => unreachable!("Expected InvalidParameter error type"),
        }
    }

    // Tests random walks are reproducible and use every direction
    #[test]
    fn test_random_walk_is_reproducible() {
        let a = random_walk(200, 9);
        let b = random_walk(200, 9);
        assert_eq!(a, b);
        assert_eq!(a.len(), 200);
        assert!(Direction::ALL.iter().all(|d| a.contains(d)));
        assert!(random_walk(0, 9).is_empty());
    }
}
