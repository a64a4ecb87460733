//! Translating key presses and move scripts into directions

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Direction;

/// Map a keyboard event code to a move
///
/// Accepts both WASD and arrow keys. Other codes are ignored.
pub fn direction_for_key(code: &str) -> Option<Direction> {
    match code {
        "KeyW" | "ArrowUp" => Some(Direction::Up),
        "KeyS" | "ArrowDown" => Some(Direction::Down),
        "KeyA" | "ArrowLeft" => Some(Direction::Left),
        "KeyD" | "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// Parse a comma- or whitespace-separated list of key codes
///
/// Codes that do not map to a move are skipped, as a keyboard handler would.
pub fn parse_key_codes(codes: &str) -> Vec<Direction> {
    codes
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|code| !code.is_empty())
        .filter_map(direction_for_key)
        .collect()
}

/// Parse a compact WASD move script such as `"wwdds"`
///
/// Letters are case-insensitive; whitespace is ignored.
///
/// # Errors
///
/// Returns an error on any character other than `w`, `a`, `s`, `d`
pub fn parse_move_script(script: &str) -> Result<Vec<Direction>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            'w' => Ok(Direction::Up),
            'a' => Ok(Direction::Left),
            's' => Ok(Direction::Down),
            'd' => Ok(Direction::Right),
            _ => Err(invalid_parameter(
                "moves",
                &c,
                &"move scripts may only contain w, a, s, d",
            )),
        })
        .collect()
}

/// Generate a reproducible random walk of `steps` moves
pub fn random_walk(steps: usize, seed: u64) -> Vec<Direction> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..steps)
        .map(|_| {
            Direction::ALL
                .get(rng.random_range(0..Direction::ALL.len()))
                .copied()
                .unwrap_or(Direction::Right)
        })
        .collect()
}
