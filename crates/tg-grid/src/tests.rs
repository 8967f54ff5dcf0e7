//! Unit tests for the occupancy lattice.

#[cfg(test)]
mod cells {
    use crate::Cell;

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, 7).to_string(), "(3, 7)");
    }

    #[test]
    fn ordering_is_row_major_friendly() {
        assert!(Cell::new(0, 0) < Cell::new(1, 0));
    }
}

#[cfg(test)]
mod neighborhoods {
    use crate::{Cell, Grid};

    #[test]
    fn interior_cell_has_eight() {
        let g = Grid::new(10, 10);
        let n = g.neighbors(Cell::new(5, 5));
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&Cell::new(5, 5)), "center must be excluded");
    }

    #[test]
    fn edge_cell_has_five() {
        let g = Grid::new(10, 10);
        assert_eq!(g.neighbors(Cell::new(0, 5)).len(), 5);
        assert_eq!(g.neighbors(Cell::new(5, 9)).len(), 5);
    }

    #[test]
    fn corner_cell_has_three() {
        let g = Grid::new(10, 10);
        for corner in [
            Cell::new(0, 0),
            Cell::new(9, 0),
            Cell::new(0, 9),
            Cell::new(9, 9),
        ] {
            assert_eq!(g.neighbors(corner).len(), 3, "corner {corner}");
        }
    }

    #[test]
    fn no_wraparound() {
        let g = Grid::new(10, 10);
        let n = g.neighbors(Cell::new(0, 0));
        assert!(!n.contains(&Cell::new(9, 0)));
        assert!(!n.contains(&Cell::new(0, 9)));
        assert!(!n.contains(&Cell::new(9, 9)));
    }

    #[test]
    fn all_neighbors_adjacent() {
        let g = Grid::new(7, 5);
        let c = Cell::new(3, 2);
        for n in g.neighbors(c) {
            let dx = (n.x as i64 - c.x as i64).abs();
            let dy = (n.y as i64 - c.y as i64).abs();
            assert!(dx <= 1 && dy <= 1 && (dx, dy) != (0, 0));
        }
    }
}

#[cfg(test)]
mod occupancy {
    use tg_core::VehicleId;

    use crate::{Cell, Grid};

    #[test]
    fn starts_empty() {
        let g = Grid::new(6, 6);
        assert_eq!(g.occupancy_count(), 0);
        assert!(g.is_empty(Cell::new(0, 0)));
        assert_eq!(g.occupant(Cell::new(0, 0)), None);
    }

    #[test]
    fn place_and_query() {
        let mut g = Grid::new(6, 6);
        g.place(VehicleId(3), Cell::new(2, 4));
        assert!(!g.is_empty(Cell::new(2, 4)));
        assert_eq!(g.occupant(Cell::new(2, 4)), Some(VehicleId(3)));
        assert_eq!(g.occupancy_count(), 1);
    }

    #[test]
    fn relocate_moves_occupant() {
        let mut g = Grid::new(6, 6);
        g.place(VehicleId(0), Cell::new(1, 1));
        g.relocate(Cell::new(1, 1), Cell::new(2, 2));
        assert!(g.is_empty(Cell::new(1, 1)));
        assert_eq!(g.occupant(Cell::new(2, 2)), Some(VehicleId(0)));
        assert_eq!(g.occupancy_count(), 1);
    }

    #[test]
    fn occupancy_count_is_live() {
        let mut g = Grid::new(5, 5);
        for i in 0..5 {
            g.place(VehicleId(i), Cell::new(i, 0));
        }
        assert_eq!(g.occupancy_count(), 5);
        g.relocate(Cell::new(0, 0), Cell::new(0, 1));
        assert_eq!(g.occupancy_count(), 5, "relocation never changes the count");
    }

    #[test]
    fn cell_at_roundtrips_row_major() {
        let g = Grid::new(7, 3);
        assert_eq!(g.cell_at(0), Cell::new(0, 0));
        assert_eq!(g.cell_at(6), Cell::new(6, 0));
        assert_eq!(g.cell_at(7), Cell::new(0, 1));
        assert_eq!(g.cell_at(20), Cell::new(6, 2));
    }

    #[test]
    fn contains_bounds() {
        let g = Grid::new(5, 8);
        assert!(g.contains(Cell::new(4, 7)));
        assert!(!g.contains(Cell::new(5, 7)));
        assert!(!g.contains(Cell::new(4, 8)));
    }
}
