use std::fmt::Debug;

use crate::{FillPolicy, GridError, GridParameters, Record};

pub mod rw;

pub trait GridAttribute: Debug + Clone + PartialEq {}
impl<T: Debug + Clone + PartialEq> GridAttribute for T {}

/// Row-major 2D buffer of cell values: the cell at (x, y) lives at linear
/// index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: GridAttribute> {
    params: GridParameters,
    cells: Vec<T>,
}

impl<T: GridAttribute> Grid<T> {
    /// Build a grid by evaluating `f` at every cell position, rows outermost.
    ///
    /// The whole buffer is reserved up front; a reservation the allocator
    /// refuses surfaces as [`GridError::Allocation`] instead of aborting.
    pub fn from_fn(
        params: GridParameters,
        mut f: impl FnMut(u32, u32) -> T,
    ) -> Result<Self, GridError> {
        let allocation_failed = || GridError::Allocation {
            width: params.width,
            height: params.height,
        };

        let count = usize::try_from(params.cell_count()).map_err(|_| allocation_failed())?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|_| allocation_failed())?;

        for y in 0..params.height {
            for x in 0..params.width {
                cells.push(f(x, y));
            }
        }

        Ok(Self { params, cells })
    }

    /// Get the parameters the grid was built with.
    pub fn params(&self) -> &GridParameters {
        &self.params
    }

    /// Get the value of the cell at (x, y), if inside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        if x >= self.params.width || y >= self.params.height {
            return None;
        }
        self.cells.get(self.index_of(x, y))
    }

    /// Borrowing iterator over the cells in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.into_iter()
    }

    /// Iterator over each cell paired with its (x, y) position.
    pub fn iter_with_pos(&self) -> impl Iterator<Item = ((u32, u32), &T)> {
        let width = self.params.width as usize;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = (i % width) as u32;
            let y = (i / width) as u32;
            ((x, y), cell)
        })
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.params.width as usize + x as usize
    }
}

impl Grid<Record> {
    /// Generate a fixture grid: every cell is the fill policy evaluated at
    /// its own position.
    pub fn generate(params: GridParameters, policy: FillPolicy) -> Result<Self, GridError> {
        Self::from_fn(params, |x, y| policy.sample(x, y))
    }
}

impl<'a, T: GridAttribute> IntoIterator for &'a Grid<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<T: GridAttribute> IntoIterator for Grid<T> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_fills_rows_outermost() {
        let params = GridParameters::new(3, 2).unwrap();
        let grid = Grid::from_fn(params, |x, y| (x, y)).unwrap();

        let positions = grid.iter().cloned().collect::<Vec<_>>();
        assert_eq!(
            positions,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_generate_linear_values() {
        let params = GridParameters::new(4, 2).unwrap();
        let grid = Grid::generate(params, FillPolicy::Linear).unwrap();

        assert_eq!(grid.get(0, 0), Some(&Record::new(0.0, 0.0)));
        assert_eq!(grid.get(3, 1), Some(&Record::new(3.0, 1.0)));
        assert_eq!(grid.get(4, 1), None);
        assert_eq!(grid.get(3, 2), None);
    }

    #[test]
    fn test_generate_quadratic_values() {
        let params = GridParameters::new(3, 3).unwrap();
        let grid = Grid::generate(params, FillPolicy::Quadratic).unwrap();

        assert_eq!(grid.get(0, 0), Some(&Record::new(0.0, 0.0)));
        assert_eq!(grid.get(2, 2), Some(&Record::new(4.0, 4.0)));
        assert_eq!(grid.get(1, 2), Some(&Record::new(1.0, 4.0)));
    }

    #[test]
    fn test_cells_depend_only_on_own_position() {
        let small = Grid::generate(GridParameters::new(4, 4).unwrap(), FillPolicy::Linear).unwrap();
        let large = Grid::generate(GridParameters::new(8, 8).unwrap(), FillPolicy::Linear).unwrap();
        let quad =
            Grid::generate(GridParameters::new(4, 4).unwrap(), FillPolicy::Quadratic).unwrap();

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(small.get(x, y), large.get(x, y));
                assert_eq!(
                    quad.get(x, y),
                    Some(&FillPolicy::Quadratic.sample(x, y)),
                    "cell ({}, {}) must not depend on dimensions or other cells",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_iter_with_pos_matches_storage_order() {
        let params = GridParameters::new(2, 2).unwrap();
        let grid = Grid::generate(params, FillPolicy::Linear).unwrap();

        let entries = grid.iter_with_pos().collect::<Vec<_>>();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], ((0, 0), &Record::new(0.0, 0.0)));
        assert_eq!(entries[3], ((1, 1), &Record::new(1.0, 1.0)));
    }

    #[test]
    fn test_oversized_grid_is_an_allocation_error() {
        let params = GridParameters::new(u32::MAX, u32::MAX).unwrap();
        assert!(matches!(
            Grid::generate(params, FillPolicy::Linear),
            Err(GridError::Allocation { .. })
        ));
    }
}
