use binmorph_grid::BitGrid;

use crate::kernel::Kernel;

/// Collects the grid values at the kernel's active offsets around a cell.
///
/// The center `(row, col)` may lie anywhere, including outside the grid;
/// the center cell itself is only used as an anchor and is never
/// dereferenced by this function. Active kernel cells are visited in
/// row-major order and mapped to `(row + i - offset, col + j - offset)`;
/// taps that land outside the grid are skipped, so no padding value is
/// ever synthesized. The returned sequence has at most one entry per
/// active kernel cell and may be empty.
pub fn sample_neighbors(grid: &BitGrid, row: i64, col: i64, kernel: &Kernel) -> Vec<u8> {
    let offset = kernel.offset() as i64;
    let height = grid.height() as i64;
    let width = grid.width() as i64;
    let mut neighbors = Vec::with_capacity(kernel.active_cells());

    for i in 0..kernel.side() {
        for j in 0..kernel.side() {
            if kernel.get(i, j) == 0 {
                continue;
            }

            let target_row = row + (i as i64 - offset);
            let target_col = col + (j as i64 - offset);

            if target_row >= 0 && target_row < height && target_col >= 0 && target_col < width {
                neighbors.push(grid.get(target_row as usize, target_col as usize));
            }
        }
    }

    neighbors
}
