//! The per-node edit-distance band cache (§3, §4.2).
//!
//! Each node carries one anti-diagonal of the Needleman-style DP table,
//! `2·τ_max+3` cells wide, indexed by signed offset from a centre cell.
//! The two outermost cells (offsets `±(τ_max+1)`) are written once at
//! node construction and never touched again during search: they act as
//! a sentinel "just outside the band" cost that's always larger than any
//! `τ ≤ τ_max` a query could ask for, which is what lets the DP step read
//! one cell past either edge of the active window without a bounds
//! check.

#[derive(Clone, Debug)]
pub struct Band {
    cells: Vec<u16>,
    tau_max: u8,
}

impl Band {
    /// Index of the centre cell (offset 0).
    #[inline]
    fn centre(&self) -> usize {
        self.tau_max as usize + 1
    }

    /// Total number of cells, `2·τ_max+3`.
    #[inline]
    pub fn width(tau_max: u8) -> usize {
        2 * tau_max as usize + 3
    }

    /// A fresh band for a newly constructed node: `cells[i] == |i -
    /// (τ_max+1)|`, the trivial "insert/delete i symbols" cost (§8).
    pub fn new_trivial(tau_max: u8) -> Self {
        let width = Self::width(tau_max);
        let centre = tau_max as i32 + 1;
        let cells = (0..width as i32)
            .map(|i| (i - centre).unsigned_abs() as u16)
            .collect();
        Band { cells, tau_max }
    }

    #[inline]
    fn index(&self, offset: i32) -> usize {
        (self.centre() as i32 + offset) as usize
    }

    /// Reads the cell at signed `offset` from the centre.
    #[inline]
    pub fn get(&self, offset: i32) -> u16 {
        self.cells[self.index(offset)]
    }

    /// Writes the cell at signed `offset` from the centre. Never touches
    /// the two sentinel edge cells because every caller bounds `offset`
    /// by `maxa <= tau <= tau_max`.
    #[inline]
    pub fn set(&mut self, offset: i32, value: u16) {
        let idx = self.index(offset);
        self.cells[idx] = value;
    }

    pub fn tau_max(&self) -> u8 {
        self.tau_max
    }
}
