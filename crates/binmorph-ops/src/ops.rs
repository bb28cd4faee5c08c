use binmorph_grid::BitGrid;

use crate::kernel::Kernel;
use crate::sample::sample_neighbors;

/// Erodes a binary grid with the given kernel.
///
/// A foreground cell survives only if every in-bounds neighbor under the
/// kernel is foreground. Out-of-bounds kernel taps do not participate, so
/// the condition holds vacuously for a foreground cell with no in-bounds
/// taps at all.
///
/// # Examples
///
/// ```
/// use binmorph_grid::BitGrid;
/// use binmorph_ops::{erode, Kernel, KernelShape};
///
/// let mut grid = BitGrid::new(5, 5).unwrap();
/// grid.set(2, 2, 1);
/// let kernel = Kernel::new(KernelShape::Box { size: 3 }).unwrap();
///
/// // a lone cell has background neighbors and is removed
/// let eroded = erode(&grid, &kernel);
/// assert!(eroded.as_slice().iter().all(|&c| c == 0));
/// ```
pub fn erode(grid: &BitGrid, kernel: &Kernel) -> BitGrid {
    let mut out = grid.zeros_like();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.get(row, col) == 1
                && sample_neighbors(grid, row as i64, col as i64, kernel)
                    .iter()
                    .all(|&n| n == 1)
            {
                out.set(row, col, 1);
            }
        }
    }
    out
}

/// Dilates a binary grid with the given kernel.
///
/// A cell becomes foreground if it already is, or if any in-bounds
/// neighbor under the kernel is foreground.
///
/// # Examples
///
/// ```
/// use binmorph_grid::BitGrid;
/// use binmorph_ops::{dilate, Kernel, KernelShape};
///
/// let mut grid = BitGrid::new(5, 5).unwrap();
/// grid.set(2, 2, 1);
/// let kernel = Kernel::new(KernelShape::Box { size: 3 }).unwrap();
///
/// let dilated = dilate(&grid, &kernel);
/// assert_eq!(dilated.as_slice().iter().filter(|&&c| c == 1).count(), 9);
/// ```
pub fn dilate(grid: &BitGrid, kernel: &Kernel) -> BitGrid {
    let mut out = grid.zeros_like();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.get(row, col) == 1
                || sample_neighbors(grid, row as i64, col as i64, kernel)
                    .iter()
                    .any(|&n| n == 1)
            {
                out.set(row, col, 1);
            }
        }
    }
    out
}

/// Opening: erosion followed by dilation.
///
/// Removes small foreground features while preserving larger shapes.
pub fn open(grid: &BitGrid, kernel: &Kernel) -> BitGrid {
    dilate(&erode(grid, kernel), kernel)
}

/// Closing: dilation followed by erosion.
///
/// Fills small background gaps while preserving the overall shape.
pub fn close(grid: &BitGrid, kernel: &Kernel) -> BitGrid {
    erode(&dilate(grid, kernel), kernel)
}

/// Boundary extraction: the grid minus its eroded form.
///
/// Isolates the edge cells of each foreground region. Erosion outputs
/// foreground only where the input is foreground, so the per-cell
/// subtraction cannot underflow.
pub fn boundary(grid: &BitGrid, kernel: &Kernel) -> BitGrid {
    let eroded = erode(grid, kernel);
    let mut out = grid.zeros_like();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let cell = grid.get(row, col);
            let eroded_cell = eroded.get(row, col);
            debug_assert!(eroded_cell <= cell);
            out.set(row, col, cell - eroded_cell);
        }
    }
    out
}

/// Grows foreground into interior background until a fixed point is
/// reached.
///
/// Each pass promotes every interior background cell with at least one
/// foreground neighbor under the kernel, reading neighbors from the state
/// before the pass; the loop stops when a pass changes nothing. Border
/// cells are never rewritten.
///
/// Note this is region growing restricted to the interior rather than
/// textbook hole filling: interior background connected to foreground is
/// converted even when it is not topologically enclosed, so a large enough
/// foreground seed can flood the whole interior.
pub fn fill_holes(grid: &BitGrid, kernel: &Kernel) -> BitGrid {
    let mut result = grid.clone();
    let (height, width) = grid.dimensions();

    loop {
        let mut temp = result.clone();
        let mut changed = false;

        for row in 1..height - 1 {
            for col in 1..width - 1 {
                if result.get(row, col) == 0
                    && sample_neighbors(&result, row as i64, col as i64, kernel)
                        .iter()
                        .any(|&n| n == 1)
                {
                    temp.set(row, col, 1);
                    changed = true;
                }
            }
        }

        if !changed {
            break;
        }
        result = temp;
    }

    result
}
