//! Occupancy lattice and Moore-neighborhood queries.
//!
//! # Data layout
//!
//! Occupancy is a flat row-major `Vec<Option<VehicleId>>`: the cell `(x, y)`
//! lives at index `y * width + x`.  All queries are O(1) except
//! [`Grid::occupancy_count`], which is a linear scan — the grid is at most
//! 100×100 cells, and counting live keeps congestion honest while vehicles
//! move every tick.
//!
//! # Invariant
//!
//! Every occupied cell holds exactly one `VehicleId`, and every placed
//! vehicle occupies exactly one cell (bijective placement).  Initial
//! placement samples distinct cells, so the invariant holds from tick 0;
//! the mutation API preserves it afterwards (debug-asserted).
//!
//! # Contract
//!
//! Out-of-range coordinates are a programming error, not a runtime
//! condition: query and mutation methods panic on them (`# Panics` below).
//! Callers obtain in-range cells from [`Grid::neighbors`] or
//! [`Grid::cell_at`] and never fabricate coordinates.

use std::fmt;

use tg_core::VehicleId;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A grid coordinate.  Valid for a given grid iff `x < width && y < height`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Fixed-size 2D lattice with at most one vehicle per cell.
#[derive(Debug)]
pub struct Grid {
    width:  u32,
    height: u32,
    /// Row-major occupancy.  Length = `width * height`.
    cells:  Vec<Option<VehicleId>>,
}

impl Grid {
    /// Construct an empty grid.  Dimension bounds are enforced upstream by
    /// the parameter validator; the grid itself only requires them non-zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// `true` iff `cell` lies inside the lattice.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// The cell at flat row-major index `idx`.  Inverse of the internal
    /// indexing; used to map sampled placement indices back to coordinates.
    ///
    /// # Panics
    /// Panics if `idx >= cell_count()`.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> Cell {
        assert!(idx < self.cells.len(), "cell index {idx} out of range");
        Cell::new(idx as u32 % self.width, idx as u32 / self.width)
    }

    #[inline]
    fn idx(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell), "cell {cell} outside {}x{} grid", self.width, self.height);
        (cell.y * self.width + cell.x) as usize
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The up-to-8 Moore neighbors of `cell`, truncated at the grid edges
    /// (no wraparound), in row-major order.  Never includes `cell` itself.
    ///
    /// # Panics
    /// Panics in debug builds if `cell` is out of range.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        debug_assert!(self.contains(cell));
        let mut out = Vec::with_capacity(8);
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = cell.x as i64 + dx;
                let ny = cell.y as i64 + dy;
                if nx >= 0 && nx < self.width as i64 && ny >= 0 && ny < self.height as i64 {
                    out.push(Cell::new(nx as u32, ny as u32));
                }
            }
        }
        out
    }

    /// `true` iff no vehicle occupies `cell`.
    ///
    /// # Panics
    /// Panics in debug builds if `cell` is out of range.
    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.cells[self.idx(cell)].is_none()
    }

    /// The occupant of `cell`, if any.
    ///
    /// # Panics
    /// Panics in debug builds if `cell` is out of range.
    #[inline]
    pub fn occupant(&self, cell: Cell) -> Option<VehicleId> {
        self.cells[self.idx(cell)]
    }

    /// Number of cells currently holding a vehicle.  Computed live on every
    /// call — never cached, since vehicles move every tick.
    pub fn occupancy_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Place `vehicle` on an empty cell.
    ///
    /// # Panics
    /// Panics in debug builds if `cell` is out of range or already occupied.
    pub fn place(&mut self, vehicle: VehicleId, cell: Cell) {
        let i = self.idx(cell);
        debug_assert!(self.cells[i].is_none(), "cell {cell} already occupied");
        self.cells[i] = Some(vehicle);
    }

    /// Move the occupant of `from` to the empty cell `to`.
    ///
    /// # Panics
    /// Panics in debug builds if `from` is vacant, `to` is occupied, or
    /// either cell is out of range.
    pub fn relocate(&mut self, from: Cell, to: Cell) {
        let fi = self.idx(from);
        let ti = self.idx(to);
        debug_assert!(self.cells[fi].is_some(), "no vehicle at {from}");
        debug_assert!(self.cells[ti].is_none(), "cell {to} already occupied");
        self.cells[ti] = self.cells[fi].take();
    }
}
