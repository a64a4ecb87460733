//! Tests for part catalog construction and taxi-distance adjacency

#[cfg(test)]
mod tests {
    use tilewalk::spatial::catalog::{PartCatalog, PartId};

    // Tests interior part of a 4x4 source has exactly its four orthogonal neighbors
    #[test]
    fn test_interior_part_has_four_neighbors() {
        let catalog = PartCatalog::build(4, 4);
        let part = catalog.get(PartId::new(1, 1)).unwrap();

        assert_eq!(
            part.neighbors,
            vec![
                PartId::new(0, 1),
                PartId::new(1, 0),
                PartId::new(1, 2),
                PartId::new(2, 1),
            ]
        );
    }

    // Tests corner and edge parts have fewer neighbors
    #[test]
    fn test_corner_and_edge_neighbor_counts() {
        let catalog = PartCatalog::build(4, 4);

        let corner = catalog.get(PartId::new(0, 0)).unwrap();
        assert_eq!(corner.neighbors, vec![PartId::new(0, 1), PartId::new(1, 0)]);

        let edge = catalog.get(PartId::new(0, 2)).unwrap();
        assert_eq!(edge.neighbors.len(), 3);

        let far_corner = catalog.get(PartId::new(3, 3)).unwrap();
        assert_eq!(far_corner.neighbors.len(), 2);
    }

    // Tests adjacency is exactly taxi distance one, in both directions
    #[test]
    fn test_adjacency_matches_taxi_distance() {
        let catalog = PartCatalog::build(3, 5);

        for a in &catalog {
            for b in &catalog {
                let listed = a.neighbors.contains(&b.id);
                assert_eq!(listed, a.id.taxi_distance(b.id) == 1, "{} -> {}", a.id, b.id);
                assert_eq!(listed, b.neighbors.contains(&a.id));
            }
        }
    }

    // Tests neighbor lists never repeat an id
    #[test]
    fn test_neighbor_lists_are_sets() {
        let catalog = PartCatalog::build(4, 4);
        for part in &catalog {
            let mut sorted = part.neighbors.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), part.neighbors.len());
        }
    }

    // Tests every part covers exactly its own source pixel
    #[test]
    fn test_source_rects_are_unit_squares() {
        let catalog = PartCatalog::build(3, 2);
        assert_eq!(catalog.len(), 6);

        for part in &catalog {
            assert_eq!(part.source_rect.start_x, part.id.x);
            assert_eq!(part.source_rect.start_y, part.id.y);
            assert_eq!(part.source_rect.width(), 1);
            assert_eq!(part.source_rect.height(), 1);
        }
    }

    // Tests zero-size sources produce empty catalogs
    #[test]
    fn test_zero_size_source_is_empty() {
        assert!(PartCatalog::build(0, 0).is_empty());
        assert!(PartCatalog::build(0, 4).is_empty());
        assert!(PartCatalog::build(4, 0).is_empty());
        assert!(PartCatalog::build(0, 0).part_at(0).is_none());
    }

    // Tests a single-pixel source yields one isolated part
    #[test]
    fn test_single_pixel_source() {
        let catalog = PartCatalog::build(1, 1);
        assert_eq!(catalog.len(), 1);
        let part = catalog.part_at(0).unwrap();
        assert_eq!(part.id, PartId::new(0, 0));
        assert!(part.neighbors.is_empty());
    }

    // Tests lookups by index and by id agree
    #[test]
    fn test_index_lookup_round_trips() {
        let catalog = PartCatalog::build(4, 3);
        for (i, part) in catalog.iter().enumerate() {
            assert_eq!(catalog.index_of(part.id), Some(i));
            assert_eq!(catalog.part_at(i).map(|p| p.id), Some(part.id));
        }
        assert!(catalog.get(PartId::new(9, 9)).is_none());
        assert_eq!(catalog.source_dimensions(), (4, 3));
    }

    // Tests parts are enumerated column by column
    #[test]
    fn test_catalog_order_is_column_major() {
        let catalog = PartCatalog::build(2, 3);
        let order: Vec<PartId> = catalog.iter().map(|part| part.id).collect();
        assert_eq!(
            order,
            vec![
                PartId::new(0, 0),
                PartId::new(0, 1),
                PartId::new(0, 2),
                PartId::new(1, 0),
                PartId::new(1, 1),
                PartId::new(1, 2),
            ]
        );
        assert_eq!(catalog.source_dimensions(), (2, 3));
    }

    // Tests part ids print as their source coordinates
    #[test]
    fn test_part_id_display() {
        assert_eq!(PartId::new(3, 7).to_string(), "3,7");
    }
}
