//! Tests for neighbour sets and the graph builder

#[cfg(test)]
mod tests {
    use jigsolve::graph::adjacency::{AdjacencySet, Neighbor, TileGraph};
    use jigsolve::graph::borders::Border;
    use jigsolve::spatial::grid::{PixelGrid, RasterMut};
    use jigsolve::spatial::tiles::TileLayout;
    use std::f64::consts::PI;

    /// A 4x2 image split into two 2x2 tiles with east-west edge pixels at `pixels`
    fn two_tiles(pixels: &[(usize, usize)]) -> (PixelGrid, TileLayout) {
        let mut grid = PixelGrid::new(4, 2);
        for &(x, y) in pixels {
            grid.set_intensity(x, y, 9);
            grid.set_direction(x, y, Some(PI / 2.0));
        }
        let layout = TileLayout::partition(4, 2, 2, 2).expect("valid layout");
        (grid, layout)
    }

    fn assert_symmetric(graph: &TileGraph) {
        for tile in 0..graph.len() {
            for border in Border::ALL {
                let neighbors = graph.neighbors(tile, border).expect("tile exists");
                for neighbor in neighbors.iter() {
                    assert_eq!(
                        graph.link_weight(neighbor.tile, border.opposite(), tile),
                        Some(neighbor.weight)
                    );
                }
            }
        }
    }

    // Tests ordering by weight then id, replacing existing entries
    #[test]
    fn test_adjacency_ordering() {
        let mut set = AdjacencySet::default();
        set.insert(Neighbor { tile: 4, weight: 2 });
        set.insert(Neighbor { tile: 1, weight: 2 });
        set.insert(Neighbor { tile: 7, weight: -1 });
        set.insert(Neighbor { tile: 4, weight: -3 });

        let order: Vec<_> = set.iter().map(|neighbor| neighbor.tile).collect();
        assert_eq!(order, vec![4, 7, 1]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.weight_of(4), Some(-3));
        assert!(!set.contains(2));
    }

    // Tests exact signature matches under a zero tolerance
    #[test]
    fn test_exact_matches() {
        let (grid, layout) = two_tiles(&[(1, 0), (1, 1), (2, 0), (2, 1)]);
        let graph = TileGraph::build(&grid, &layout, 0.0);

        assert_eq!(graph.link_weight(1, Border::Left, 0), Some(-2));
        assert_eq!(graph.link_weight(0, Border::Right, 1), Some(-2));
        assert_eq!(graph.link_weight(0, Border::Left, 1), Some(0));
        assert_eq!(graph.link_weight(1, Border::Right, 0), Some(0));
        assert_symmetric(&graph);
    }

    // Tests the tolerance admits borders that differ in one pixel
    // Verified by comparing the XOR popcount against zero
    #[test]
    fn test_tolerant_matches() {
        let (grid, layout) = two_tiles(&[(1, 0), (1, 1), (2, 0)]);
        assert_eq!(TileGraph::build(&grid, &layout, 0.0).link_weight(1, Border::Left, 0), None);

        let graph = TileGraph::build(&grid, &layout, 0.5);
        assert_eq!(graph.link_weight(1, Border::Left, 0), Some(1));
        assert_eq!(graph.link_weight(0, Border::Right, 1), Some(1));
        assert_symmetric(&graph);
    }

    // Tests building twice yields the same graph
    #[test]
    fn test_build_is_deterministic() {
        let (grid, layout) = two_tiles(&[(0, 1), (1, 0), (2, 0), (3, 1)]);
        assert_eq!(
            TileGraph::build(&grid, &layout, 0.5),
            TileGraph::build(&grid, &layout, 0.5)
        );
    }

    // Tests tiles never link to themselves
    #[test]
    fn test_no_self_links() {
        let (grid, layout) = two_tiles(&[]);
        let graph = TileGraph::build(&grid, &layout, 0.5);
        for tile in 0..graph.len() {
            for border in Border::ALL {
                assert_eq!(graph.link_weight(tile, border, tile), None);
            }
        }
        assert!(graph.link_count() > 0);
    }

    // Tests manual links, lookups and clearing
    #[test]
    fn test_link_and_clear() {
        let (grid, layout) = two_tiles(&[]);
        let mut graph = TileGraph::unlinked(&grid, &layout);
        assert_eq!(graph.link_count(), 0);

        graph.link(0, Border::Top, 1, 3);
        assert_eq!(graph.best_neighbor(0, Border::Top), Some(1));
        assert_eq!(graph.best_neighbor(1, Border::Bottom), Some(0));
        assert_eq!(graph.successor_lists(Border::Bottom), vec![vec![], vec![0]]);

        graph.clear_neighbors(0, Border::Top);
        assert_eq!(graph.best_neighbor(0, Border::Top), None);
        assert_eq!(graph.link_count(), 1);

        graph.link(0, Border::Left, 5, 1);
        assert_eq!(graph.link_count(), 1);
        assert_eq!(graph.tile(1).map(|tile| tile.source_x()), Some(2));
        assert_eq!(graph.columns(), 2);
        assert_eq!(graph.rows(), 1);
    }
}
