//! Tests for the end-to-end solver

#[cfg(test)]
mod tests {
    use jigsolve::JigsawError;
    use jigsolve::graph::adjacency::TileGraph;
    use jigsolve::graph::borders::Border;
    use jigsolve::io::configuration::SolverConfig;
    use jigsolve::solver::board::Board;
    use jigsolve::solver::executor::{JigsawSolver, SpacingSelection, score_assembly};
    use jigsolve::solver::greedy::GreedyStitcher;
    use jigsolve::spatial::grid::{PixelGrid, RasterMut, pack_rgb};
    use jigsolve::spatial::tiles::TileLayout;
    use std::collections::BTreeSet;

    fn solver() -> JigsawSolver {
        JigsawSolver::new(SolverConfig::default()).expect("default config is valid")
    }

    /// North-south segments in columns 5, 15 and 25, each ending at a row multiple of 10
    fn staggered_segments() -> PixelGrid {
        let mut grid = PixelGrid::new(30, 30);
        for (x, rows) in [(5, 0..10), (15, 10..20), (25, 20..30)] {
            for y in rows {
                grid.set_intensity(x, y, 50);
                grid.set_direction(x, y, Some(0.0));
            }
        }
        grid
    }

    // Tests invalid configurations are rejected up front
    #[test]
    fn test_rejects_invalid_config() {
        let config = SolverConfig {
            sigma: -1.0,
            ..SolverConfig::default()
        };
        assert!(matches!(
            JigsawSolver::new(config),
            Err(JigsawError::InvalidParameter { parameter: "sigma", .. })
        ));
    }

    // Tests spacing pairs combine both axes
    #[test]
    fn test_selection_pairs() {
        let selection = SpacingSelection {
            horizontal: BTreeSet::from([4, 9]),
            vertical: BTreeSet::from([7]),
        };
        assert_eq!(selection.pairs(), vec![(4, 7), (9, 7)]);
        assert!(SpacingSelection::default().pairs().is_empty());
    }

    // Tests edges ending on every tenth row select a vertical spacing of ten
    #[test]
    fn test_select_spacings() {
        let selection = solver().select_spacings(&staggered_segments());
        assert_eq!(selection.vertical, BTreeSet::from([10]));
    }

    // Tests the score sums right and bottom link weights of the placement
    // Verified by scoring only horizontal neighbours
    #[test]
    fn test_score_assembly() {
        let layout = TileLayout::partition(4, 4, 2, 2).expect("valid layout");
        let mut graph = TileGraph::unlinked(&PixelGrid::new(4, 4), &layout);
        graph.link(3, Border::Right, 0, 5);
        graph.link(3, Border::Bottom, 2, 4);
        graph.link(0, Border::Bottom, 1, 3);
        graph.link(2, Border::Right, 1, 2);

        let mut board = Board::new(2, 2);
        board.set(0, 0, Some(3));
        board.set(1, 0, Some(0));
        board.set(0, 1, Some(2));
        board.set(1, 1, Some(1));
        let assembly = board.to_assembly(&graph).expect("board is complete");
        assert_eq!(score_assembly(&graph, &assembly), 14);

        board.set(0, 0, Some(0));
        board.set(1, 0, Some(3));
        let swapped = board.to_assembly(&graph).expect("board is complete");
        assert_eq!(score_assembly(&graph, &swapped), 2);
    }

    // Tests assembling rejects spacings that cannot partition the image
    #[test]
    fn test_assemble_invalid_spacing() {
        let edges = PixelGrid::new(12, 12);
        let mut strategy = GreedyStitcher::new();
        assert!(solver().assemble(&edges, 0, 6, &mut strategy).is_err());
        assert!(solver().assemble(&edges, 6, 6, &mut strategy).is_ok());
    }

    // Tests a flat image runs through every stage and reports progress
    #[test]
    fn test_solve_flat_image() {
        let image = PixelGrid::from_rows(&vec![vec![pack_rgb(40, 80, 120); 12]; 12]);
        let mut reports = Vec::new();
        let candidates = solver()
            .solve_with_progress(&image, |done, total| reports.push((done, total)))
            .expect("solving succeeds");

        assert_eq!(reports, vec![(1, 1)]);
        for candidate in &candidates {
            assert_eq!((candidate.spacing_x, candidate.spacing_y), (6, 6));
            assert_eq!(candidate.assembly.len(), 4);
        }
        assert!(candidates.windows(2).all(|pair| match pair {
            [first, second] => first.score >= second.score,
            _ => true,
        }));
    }
}
