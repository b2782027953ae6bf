use nalgebra::DMatrix;
use serde::Serialize;

use crate::traits::Scalar;

/// Dense `(N, D)` state history of one solver run, stored row-major: row
/// `i` is the state at time-grid index `i`.
///
/// The engine hands ownership to the caller and keeps nothing. Consumers
/// typically pull a single column to plot against the time grid, or pairs
/// of columns for phase-plane views; which column is "the" output is their
/// concern, not ours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory<T> {
    data: Vec<T>,
    dim: usize,
}

impl<T: Scalar> Trajectory<T> {
    /// Allocates an `nrows x dim` trajectory filled with zeros.
    pub fn zeros(nrows: usize, dim: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * dim],
            dim,
        }
    }

    /// Number of stored rows.
    pub fn nrows(&self) -> usize {
        if self.dim == 0 {
            0
        } else {
            self.data.len() / self.dim
        }
    }

    /// State dimension; constant across every row.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The state at grid index `i`.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.dim..(i + 1) * self.dim]
    }

    /// Mutable access to rows `i - 1` and `i` at once, for steppers that
    /// read (and possibly reset) the previous row while writing the next.
    pub(crate) fn step_pair(&mut self, i: usize) -> (&mut [T], &mut [T]) {
        debug_assert!(i >= 1 && i < self.nrows());
        let dim = self.dim;
        let (head, tail) = self.data.split_at_mut(i * dim);
        (&mut head[(i - 1) * dim..], &mut tail[..dim])
    }

    /// Copies out component `j` of every row, ready for plotting against
    /// the time grid.
    pub fn column(&self, j: usize) -> Vec<T> {
        assert!(j < self.dim, "column {} out of range for dim {}", j, self.dim);
        self.rows().map(|row| row[j]).collect()
    }

    /// Iterates rows in time order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.dim)
    }

    /// Drops every row at index `nrows` and beyond. Used to surface partial
    /// results when a run fails mid-loop.
    pub(crate) fn truncate(&mut self, nrows: usize) {
        self.data.truncate(nrows * self.dim);
    }

    /// Exports the trajectory as a dense matrix for linear-algebra
    /// consumers.
    pub fn to_matrix(&self) -> DMatrix<T>
    where
        T: nalgebra::Scalar,
    {
        DMatrix::from_row_slice(self.nrows(), self.dim, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::Trajectory;

    #[test]
    fn rows_are_independent_slices() {
        let mut traj = Trajectory::<f64>::zeros(3, 2);
        traj.row_mut(0).copy_from_slice(&[1.0, 2.0]);
        traj.row_mut(2).copy_from_slice(&[5.0, 6.0]);
        assert_eq!(traj.row(0), &[1.0, 2.0]);
        assert_eq!(traj.row(1), &[0.0, 0.0]);
        assert_eq!(traj.row(2), &[5.0, 6.0]);
    }

    #[test]
    fn step_pair_borrows_are_disjoint() {
        let mut traj = Trajectory::<f64>::zeros(2, 2);
        traj.row_mut(0).copy_from_slice(&[1.0, 2.0]);
        {
            let (prev, next) = traj.step_pair(1);
            prev[0] = -1.0;
            next.copy_from_slice(&[3.0, 4.0]);
        }
        assert_eq!(traj.row(0), &[-1.0, 2.0]);
        assert_eq!(traj.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn column_extracts_in_time_order() {
        let mut traj = Trajectory::<f64>::zeros(3, 2);
        for i in 0..3 {
            traj.row_mut(i).copy_from_slice(&[i as f64, 10.0 + i as f64]);
        }
        assert_eq!(traj.column(0), vec![0.0, 1.0, 2.0]);
        assert_eq!(traj.column(1), vec![10.0, 11.0, 12.0]);
    }

    #[test]
    fn truncate_keeps_leading_rows() {
        let mut traj = Trajectory::<f64>::zeros(4, 3);
        traj.row_mut(1).copy_from_slice(&[1.0, 1.0, 1.0]);
        traj.truncate(2);
        assert_eq!(traj.nrows(), 2);
        assert_eq!(traj.row(1), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn matrix_export_matches_rows() {
        let mut traj = Trajectory::<f64>::zeros(2, 3);
        traj.row_mut(0).copy_from_slice(&[1.0, 2.0, 3.0]);
        traj.row_mut(1).copy_from_slice(&[4.0, 5.0, 6.0]);
        let m = traj.to_matrix();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 2)], 6.0);
    }
}
