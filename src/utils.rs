use crate::engine::{Board, PuzzleError, TILE_COUNT};

/// Parses a board from its textual wire format: the nine tile labels in
/// row-major order, separated by whitespace and/or commas.
///
/// This is the boundary where free-form text becomes a validated `Board`;
/// the search core itself only ever sees configurations that passed here or
/// `Board::from_flat`.
///
/// # Arguments
/// * `s`: Text such as `"1 2 3 4 5 6 7 8 0"` or `"1,2,3,4,5,6,7,8,0"`.
///
/// # Returns
/// * `Ok(Board)` if the text holds exactly nine labels forming a 0-8
///   permutation.
/// * `Err(PuzzleError::InvalidConfiguration)` for unparseable tokens, a
///   wrong tile count, repeated labels, or labels outside 0-8.
///
/// # Examples
/// ```
/// use eightpuzzle_solver::engine::Board;
/// use eightpuzzle_solver::utils::board_from_str;
///
/// let board = board_from_str("1 2 3 4 5 6 7 8 0").unwrap();
/// assert_eq!(board, Board::goal());
/// assert!(board_from_str("1 2 3 4 x 6 7 8 0").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, PuzzleError> {
    let mut tiles = Vec::with_capacity(TILE_COUNT);

    for token in s
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|token| !token.is_empty())
    {
        let label: u8 = token
            .parse()
            .map_err(|_| PuzzleError::InvalidConfiguration {
                reason: format!("'{}' is not a tile label", token),
            })?;
        tiles.push(label);
    }

    Board::from_flat(&tiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_separated() {
        let board = board_from_str("1 2 3 4 5 6 7 8 0").unwrap();
        assert_eq!(board, Board::goal());
    }

    #[test]
    fn test_parse_commas_and_newlines() {
        let board = board_from_str(" 1, 2, 3,\n4, 5, 6,\n7, 8, 0 ").unwrap();
        assert_eq!(board, Board::goal());
    }

    #[test]
    fn test_parse_rejects_garbage_token() {
        let result = board_from_str("1 2 3 4 x 6 7 8 0");
        match result {
            Err(PuzzleError::InvalidConfiguration { reason }) => {
                assert!(reason.contains("'x'"), "unexpected reason: {}", reason);
            }
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_too_few_tiles() {
        assert!(board_from_str("1 2 3").is_err());
    }

    #[test]
    fn test_parse_rejects_negative_label() {
        assert!(board_from_str("1 2 3 4 -5 6 7 8 0").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(board_from_str("").is_err());
    }
}
