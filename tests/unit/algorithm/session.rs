//! Tests for walk sessions driving resolution from moves

#[cfg(test)]
mod tests {
    use tilewalk::AlgorithmError;
    use tilewalk::algorithm::resolution::SelectionPolicy;
    use tilewalk::algorithm::rng::SineRng;
    use tilewalk::algorithm::session::{SessionConfig, WalkSession};
    use tilewalk::spatial::{BoundedGrid, Direction, GridStore, PartCatalog, PartId, SparseGrid, Tile};

    fn config(policy: SelectionPolicy, lookahead: bool) -> SessionConfig {
        SessionConfig {
            policy,
            lookahead,
            start: [0, 0],
        }
    }

    fn session(
        width: u32,
        height: u32,
        config: SessionConfig,
    ) -> WalkSession<SparseGrid, SineRng> {
        WalkSession::new(
            PartCatalog::build(width, height),
            SparseGrid::new(),
            SineRng::new(12345),
            config,
        )
    }

    // Tests the start event fills the starting cell
    #[test]
    fn test_start_generates_one_tile() {
        let mut session = session(4, 4, config(SelectionPolicy::NeighborPool, false));
        let report = session.start().unwrap();

        assert_eq!(report.position, [0, 0]);
        assert_eq!(report.generated.len(), 1);
        assert_eq!(report.current, report.generated.first().copied());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.steps(), 0);
    }

    // Tests an exact neighbor-pool walk from the default seed
    #[test]
    fn test_neighbor_pool_walk_history() {
        let mut session = session(4, 4, config(SelectionPolicy::NeighborPool, false));
        session.start().unwrap();
        session
            .walk([Direction::Right, Direction::Right])
            .unwrap();

        assert_eq!(
            session.history(),
            &[
                Tile::new(PartId::new(0, 1), [0, 0]),
                Tile::new(PartId::new(0, 0), [1, 0]),
                Tile::new(PartId::new(0, 1), [2, 0]),
            ]
        );
        assert_eq!(session.position(), [2, 0]);
    }

    // Tests two runs with the same seed and moves produce the same tiles
    #[test]
    fn test_walks_are_deterministic() {
        let moves = [
            Direction::Right,
            Direction::Down,
            Direction::Down,
            Direction::Left,
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Right,
            Direction::Right,
        ];

        for policy in [SelectionPolicy::NeighborPool, SelectionPolicy::AnchorOnly] {
            let mut a = session(4, 4, config(policy, true));
            let mut b = session(4, 4, config(policy, true));
            a.start().unwrap();
            b.start().unwrap();
            let reports_a = a.walk(moves).unwrap();
            let reports_b = b.walk(moves).unwrap();

            assert_eq!(reports_a, reports_b);
            assert_eq!(a.history(), b.history());
        }
    }

    // Tests backtracking returns the original tile without generating
    #[test]
    fn test_backtrack_does_not_reroll() {
        let mut session = session(4, 4, config(SelectionPolicy::AnchorOnly, false));
        let origin = session.start().unwrap().current;

        session.move_player(Direction::Right).unwrap();
        let back = session.move_player(Direction::Left).unwrap();

        assert_eq!(back.position, [0, 0]);
        assert_eq!(back.current, origin);
        assert!(back.generated.is_empty());
        assert_eq!(session.history().len(), 2);
    }

    // Tests unfillable cells are reported and left open
    #[test]
    fn test_no_compatible_part_is_recovered() {
        let mut session = session(1, 1, config(SelectionPolicy::AnchorOnly, false));
        let origin = session.start().unwrap().current;

        let report = session.move_player(Direction::Right).unwrap();
        assert_eq!(report.current, None);
        assert_eq!(report.unresolved, vec![[1, 0]]);
        assert!(!session.grid().contains([1, 0]));

        let back = session.move_player(Direction::Left).unwrap();
        assert_eq!(back.current, origin);
        assert!(back.unresolved.is_empty());
    }

    // Tests lookahead also fills the four neighbors, in order
    #[test]
    fn test_lookahead_fills_neighbors() {
        let mut session = session(4, 4, config(SelectionPolicy::AnchorOnly, true));
        let report = session.start().unwrap();

        let positions: Vec<[i32; 2]> = report.generated.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![[0, 0], [1, 0], [-1, 0], [0, 1], [0, -1]]);
        assert_eq!(session.grid().filled_count(), 5);

        // Moving right only needs to fill the three new cells around [1, 0]
        let step = session.move_player(Direction::Right).unwrap();
        assert_eq!(step.generated.len(), 3);
    }

    // Tests an empty catalog is fatal to the start event
    #[test]
    fn test_empty_catalog_fails_start() {
        let mut session = session(0, 0, config(SelectionPolicy::NeighborPool, false));
        assert!(matches!(session.start(), Err(AlgorithmError::EmptyCatalog)));
    }

    // Tests leaving a bounded grid surfaces as an error
    #[test]
    fn test_bounded_grid_edge_is_error() {
        let mut session = WalkSession::new(
            PartCatalog::build(4, 4),
            BoundedGrid::new(2, 2),
            SineRng::new(12345),
            SessionConfig {
                policy: SelectionPolicy::AnchorOnly,
                lookahead: false,
                start: [1, 1],
            },
        );
        session.start().unwrap();

        let result = session.move_player(Direction::Right);
        assert!(matches!(
            result,
            Err(AlgorithmError::CellOutOfBounds {
                position: [2, 1],
                ..
            })
        ));
    }

    // Tests lookahead on a bounded grid skips neighbors past the edge
    #[test]
    fn test_bounded_lookahead_at_edge_skips_outside_cells() {
        let mut session = WalkSession::new(
            PartCatalog::build(4, 4),
            BoundedGrid::new(4, 4),
            SineRng::new(12345),
            SessionConfig {
                policy: SelectionPolicy::AnchorOnly,
                lookahead: true,
                start: [1, 1],
            },
        );
        assert_eq!(session.start().unwrap().generated.len(), 5);

        let report = session.move_player(Direction::Up).unwrap();

        assert_eq!(report.position, [1, 0]);
        assert!(report.current.is_some());
        let positions: Vec<[i32; 2]> = report.generated.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![[2, 0], [0, 0]]);
        assert!(report.unresolved.is_empty());
        assert_eq!(session.grid().filled_count(), 7);

        // The corner has two neighbors outside the grid
        let corner = session.move_player(Direction::Left).unwrap();
        assert_eq!(corner.position, [0, 0]);
        assert!(corner.generated.is_empty());
    }
}
