use crate::error::MorphologyError;

/// Shapes of morphological kernels.
///
/// Defines the geometry of the structuring element used in morphological
/// operations. All kernels are square with an odd side length, centered at
/// their geometric center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelShape {
    /// A box structuring element: every cell within the square is active.
    Box {
        /// The side length of the square kernel (size x size).
        size: usize,
    },

    /// A cross (plus) shaped structuring element: only cells along the
    /// horizontal and vertical center lines are active.
    Cross {
        /// The side length of the square cross kernel (size x size).
        size: usize,
    },

    /// A disk structuring element: cells inside the inscribed circle are
    /// active.
    Disk {
        /// The side length (and circle diameter) of the square kernel.
        size: usize,
    },
}

/// A morphological structuring element.
///
/// The kernel defines the neighborhood structure used by the morphological
/// operations. It stores a binary mask where 1 marks offsets included in
/// the operation and 0 marks excluded offsets. Kernels are square with an
/// odd side length so that a unique center cell exists; the validated
/// constructors are the only way to build one. A kernel with no active
/// cells is valid and simply contributes no neighbors.
///
/// # Examples
///
/// ```
/// use binmorph_ops::{Kernel, KernelShape};
///
/// let kernel = Kernel::new(KernelShape::Box { size: 3 }).unwrap();
/// assert_eq!(kernel.side(), 3);
/// assert_eq!(kernel.offset(), 1);
/// assert!(kernel.data().iter().all(|&c| c == 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    data: Vec<u8>,
    side: usize,
}

impl Kernel {
    /// Creates a morphological kernel from a shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape's side length is zero or even.
    pub fn new(shape: KernelShape) -> Result<Self, MorphologyError> {
        match shape {
            KernelShape::Box { size } => Self::from_vec(size, vec![1; size * size]),
            KernelShape::Cross { size } => Self::from_vec(size, cross_mask(size)),
            KernelShape::Disk { size } => Self::from_vec(size, disk_mask(size)),
        }
    }

    /// Creates a kernel from a flat vector of cells in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is zero or even, if the data length does
    /// not equal `side * side`, or if any cell is not 0 or 1.
    pub fn from_vec(side: usize, data: Vec<u8>) -> Result<Self, MorphologyError> {
        if side == 0 {
            return Err(MorphologyError::EmptyKernel);
        }
        if side % 2 == 0 {
            return Err(MorphologyError::EvenSidedKernel(side));
        }
        if data.len() != side * side {
            return Err(MorphologyError::InvalidDataLength(data.len(), side * side));
        }
        if let Some(idx) = data.iter().position(|&c| c > 1) {
            return Err(MorphologyError::NonBinaryCell(idx, data[idx]));
        }
        Ok(Self { data, side })
    }

    /// Creates a kernel from nested rows.
    ///
    /// # Errors
    ///
    /// Returns an error on empty input, on rows that do not form a square,
    /// and on the same conditions as [`Kernel::from_vec`].
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, MorphologyError> {
        let side = rows.len();
        if side == 0 {
            return Err(MorphologyError::EmptyKernel);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != side {
                return Err(MorphologyError::NonSquareKernel(i, row.len(), side));
            }
        }
        let data = rows.iter().flatten().copied().collect();
        Self::from_vec(side, data)
    }

    /// Returns the side length of the kernel.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the offset of the kernel center from its top-left corner,
    /// `floor(side / 2)` in both axes.
    pub fn offset(&self) -> usize {
        self.side / 2
    }

    /// Returns the kernel cell at position (row, col).
    pub fn get(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < self.side && col < self.side);
        self.data[row * self.side + col]
    }

    /// Returns a reference to the kernel data in row-major order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of active cells in the kernel.
    pub fn active_cells(&self) -> usize {
        self.data.iter().filter(|&&c| c == 1).count()
    }
}

fn cross_mask(size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size * size];
    let mid = size / 2;

    // fill horizontal line
    for j in 0..size {
        data[mid * size + j] = 1;
    }

    // fill vertical line
    for i in 0..size {
        data[i * size + mid] = 1;
    }

    data
}

fn disk_mask(size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size * size];
    let center = (size / 2) as f64;
    let radius = size as f64 / 2.0;

    for i in 0..size {
        for j in 0..size {
            let dy = (i as f64 - center) / radius;
            let dx = (j as f64 - center) / radius;
            if dx * dx + dy * dy <= 1.0 {
                data[i * size + j] = 1;
            }
        }
    }

    data
}
