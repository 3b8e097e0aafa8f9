#![allow(dead_code)]

use ruler_base::Tensor;

pub const WHITE: [u8; 3] = [255, 255, 255];
pub const BLACK: [u8; 3] = [0, 0, 0];

/// Library id drawn by [`scene`].
pub const SCENE_MARKER_ID: usize = 7;

/// Codeword of a 5x5 library marker.
pub fn marker_code(id: usize) -> u64 {
    ruler_measure::codebook::CODEBOOK_5X5[id]
}

/// Row-major 5x5 cells of a code, 1 = white.
pub fn code_grid(code: u64) -> [[u8; 5]; 5] {
    let mut grid = [[0; 5]; 5];
    for r in 0..5 {
        for c in 0..5 {
            grid[r][c] = ((code >> (24 - (r * 5 + c))) & 1) as u8;
        }
    }
    grid
}

pub fn grid_code(grid: &[[u8; 5]; 5]) -> u64 {
    grid.iter()
        .flatten()
        .fold(0u64, |code, &bit| (code << 1) | bit as u64)
}

/// The code of a 5x5 marker drawn a quarter turn clockwise.
pub fn rotate_code_cw(code: u64) -> u64 {
    let grid = code_grid(code);
    let mut rotated = [[0; 5]; 5];
    for r in 0..5 {
        for c in 0..5 {
            rotated[r][c] = grid[4 - c][r];
        }
    }
    grid_code(&rotated)
}

pub fn blank(width: usize, height: usize) -> Tensor<u8> {
    Tensor::filled(vec![height, width, 3], 255).unwrap()
}

pub fn set_pixel(frame: &mut Tensor<u8>, x: usize, y: usize, color: [u8; 3]) {
    let width = frame.shape[1];
    let idx = (y * width + x) * 3;
    frame.data[idx..idx + 3].copy_from_slice(&color);
}

pub fn pixel(frame: &Tensor<u8>, x: usize, y: usize) -> [u8; 3] {
    let width = frame.shape[1];
    let idx = (y * width + x) * 3;
    [frame.data[idx], frame.data[idx + 1], frame.data[idx + 2]]
}

pub fn fill_rect(frame: &mut Tensor<u8>, x: usize, y: usize, w: usize, h: usize, color: [u8; 3]) {
    for py in y..y + h {
        for px in x..x + w {
            set_pixel(frame, px, py, color);
        }
    }
}

/// Fill the pixels whose centres fall inside a rotated rectangle.
pub fn fill_rotated_rect(
    frame: &mut Tensor<u8>,
    center: (f64, f64),
    size: (f64, f64),
    degrees: f64,
    color: [u8; 3],
) {
    let (height, width) = (frame.shape[0], frame.shape[1]);
    let (sin, cos) = degrees.to_radians().sin_cos();
    for y in 0..height {
        for x in 0..width {
            let (dx, dy) = (x as f64 - center.0, y as f64 - center.1);
            let u = dx * cos + dy * sin;
            let v = -dx * sin + dy * cos;
            if u.abs() <= size.0 / 2.0 && v.abs() <= size.1 / 2.0 {
                set_pixel(frame, x, y, color);
            }
        }
    }
}

/// Draw a 7x7-cell marker (black border, 5x5 payload) with its top-left at `(x, y)`.
pub fn draw_marker(frame: &mut Tensor<u8>, x: usize, y: usize, cell: usize, code: u64) {
    fill_rect(frame, x, y, 7 * cell, 7 * cell, BLACK);
    for (r, row) in code_grid(code).iter().enumerate() {
        for (c, &bit) in row.iter().enumerate() {
            if bit == 1 {
                fill_rect(frame, x + (c + 1) * cell, y + (r + 1) * cell, cell, cell, WHITE);
            }
        }
    }
}

/// 400x300 scene: a 70 px marker at (30, 30) and a 140x70 dark object at (200, 150).
pub fn scene() -> Tensor<u8> {
    let mut frame = blank(400, 300);
    draw_marker(&mut frame, 30, 30, 10, marker_code(SCENE_MARKER_ID));
    fill_rect(&mut frame, 200, 150, 140, 70, [20, 20, 20]);
    frame
}

pub fn assert_near(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
