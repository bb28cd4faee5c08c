use binmorph_grid::BitGrid;
use binmorph_ops::{apply_named, close, dilate, erode, fill_holes, open, Kernel, KernelShape};

fn box3() -> Kernel {
    Kernel::new(KernelShape::Box { size: 3 }).unwrap()
}

fn blobs_7x7() -> BitGrid {
    // two blobs and a stray pixel, enough structure for the algebraic
    // properties to be non-trivial
    BitGrid::from_rows(&[
        vec![0, 0, 0, 0, 0, 0, 1],
        vec![0, 1, 1, 1, 0, 0, 0],
        vec![0, 1, 1, 1, 0, 0, 0],
        vec![0, 1, 1, 1, 0, 1, 1],
        vec![0, 0, 0, 0, 0, 1, 1],
        vec![0, 0, 1, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 0],
    ])
    .unwrap()
}

#[test]
fn test_opening_is_idempotent() {
    let grid = blobs_7x7();
    let kernel = box3();
    let once = open(&grid, &kernel);
    let twice = open(&once, &kernel);
    assert_eq!(once, twice);
}

#[test]
fn test_closing_is_idempotent() {
    let grid = blobs_7x7();
    let kernel = box3();
    let once = close(&grid, &kernel);
    let twice = close(&once, &kernel);
    assert_eq!(once, twice);
}

#[test]
fn test_all_ones_grid_is_fixed_under_any_kernel() {
    let grid = BitGrid::from_vec(5, 5, vec![1; 25]).unwrap();
    for kernel in [
        Kernel::new(KernelShape::Box { size: 3 }).unwrap(),
        Kernel::new(KernelShape::Cross { size: 5 }).unwrap(),
        Kernel::new(KernelShape::Disk { size: 5 }).unwrap(),
    ] {
        assert_eq!(erode(&grid, &kernel), grid);
        assert_eq!(dilate(&grid, &kernel), grid);
    }
}

#[test]
fn test_primitive_monotonicity() {
    let grid = blobs_7x7();
    let kernel = box3();
    let eroded = erode(&grid, &kernel);
    let dilated = dilate(&grid, &kernel);
    for ((e, d), g) in eroded
        .as_slice()
        .iter()
        .zip(dilated.as_slice())
        .zip(grid.as_slice())
    {
        assert!(e <= g);
        assert!(d >= g);
    }
}

#[test]
fn test_fill_holes_grows_monotonically_and_terminates() {
    let grid = blobs_7x7();
    let filled = fill_holes(&grid, &box3());
    for (out, inp) in filled.as_slice().iter().zip(grid.as_slice()) {
        assert!(out >= inp);
    }
    // a second run is a fixed point
    assert_eq!(fill_holes(&filled, &box3()), filled);
}

#[test]
fn test_center_pixel_end_to_end() {
    let mut grid = BitGrid::new(5, 5).unwrap();
    grid.set(2, 2, 1);
    let kernel = box3();

    let eroded = erode(&grid, &kernel);
    assert!(eroded.as_slice().iter().all(|&c| c == 0));

    let dilated = dilate(&grid, &kernel);
    let expected = BitGrid::from_rows(&[
        vec![0, 0, 0, 0, 0],
        vec![0, 1, 1, 1, 0],
        vec![0, 1, 1, 1, 0],
        vec![0, 1, 1, 1, 0],
        vec![0, 0, 0, 0, 0],
    ])
    .unwrap();
    assert_eq!(dilated, expected);
}

#[test]
fn test_hole_in_block_closes_in_one_pass() {
    let grid = BitGrid::from_rows(&[
        vec![0, 0, 0, 0, 0],
        vec![0, 1, 1, 1, 0],
        vec![0, 1, 0, 1, 0],
        vec![0, 1, 1, 1, 0],
        vec![0, 0, 0, 0, 0],
    ])
    .unwrap();
    let filled = fill_holes(&grid, &box3());
    let expected = BitGrid::from_rows(&[
        vec![0, 0, 0, 0, 0],
        vec![0, 1, 1, 1, 0],
        vec![0, 1, 1, 1, 0],
        vec![0, 1, 1, 1, 0],
        vec![0, 0, 0, 0, 0],
    ])
    .unwrap();
    assert_eq!(filled, expected);
}

#[test]
fn test_dispatcher_identity_fallback_end_to_end() {
    let grid = blobs_7x7();
    let result = apply_named(&grid, "not-a-real-op", &box3());
    assert_eq!(result, grid);
}

#[test]
fn test_named_operations_cover_the_documented_set() {
    let grid = blobs_7x7();
    let kernel = box3();
    for name in [
        "erosion",
        "dilation",
        "opening",
        "closing",
        "boundary",
        "holeFilling",
    ] {
        let result = apply_named(&grid, name, &kernel);
        assert_eq!(result.dimensions(), grid.dimensions());
        assert!(result.as_slice().iter().all(|&c| c <= 1));
    }
}
