//! Clipped drawing primitives on HWC RGB buffers.

use crate::font::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph};
use ruler_base::Vec2;

/// Mutable view of an RGB frame.
pub struct Canvas<'a> {
    buf: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    /// `None` if `buf` is not `width * height * 3` bytes.
    pub fn new(buf: &'a mut [u8], width: usize, height: usize) -> Option<Self> {
        (width.checked_mul(height)?.checked_mul(3)? == buf.len()).then_some(Self { buf, width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let idx = (y * self.width + x) * 3;
        [self.buf[idx], self.buf[idx + 1], self.buf[idx + 2]]
    }

    /// Set a pixel, ignoring positions off the canvas.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 3;
        self.buf[idx..idx + 3].copy_from_slice(&color);
    }

    /// Bresenham line, stamped with a round brush when `thickness > 1`.
    pub fn draw_line(&mut self, p0: Vec2<i64>, p1: Vec2<i64>, color: [u8; 3], thickness: u32) {
        let radius = (thickness / 2) as i64;
        let (p0, p1) = (clamp_coords(p0), clamp_coords(p1));
        let Some((mut x0, mut y0, x1, y1)) = self.clip(p0, p1, radius) else {
            return;
        };

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            if radius == 0 {
                self.set_pixel(x0, y0, color);
            } else {
                self.fill_circle(Vec2::new(x0, y0), radius, color);
            }

            if x0 == x1 && y0 == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Closed outline through `points`.
    pub fn draw_polygon(&mut self, points: &[Vec2<i64>], color: [u8; 3], thickness: u32) {
        for (i, &p) in points.iter().enumerate() {
            let q = points[(i + 1) % points.len()];
            self.draw_line(p, q, color, thickness);
        }
    }

    pub fn fill_circle(&mut self, center: Vec2<i64>, radius: i64, color: [u8; 3]) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(center.x + dx, center.y + dy, color);
                }
            }
        }
    }

    /// Text with its baseline-left corner at `origin`; glyph pixels are `scale`
    /// squares. Off-canvas parts are dropped.
    pub fn draw_text(&mut self, text: &str, origin: Vec2<i64>, scale: u32, color: [u8; 3]) {
        let scale = scale.max(1) as i64;
        let top = origin.y - GLYPH_HEIGHT as i64 * scale;
        let mut left = origin.x;
        for ch in text.chars() {
            let rows = glyph(ch);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                        continue;
                    }
                    let x = left + col as i64 * scale;
                    let y = top + row as i64 * scale;
                    for sy in 0..scale {
                        for sx in 0..scale {
                            self.set_pixel(x + sx, y + sy, color);
                        }
                    }
                }
            }
            left += (GLYPH_WIDTH as i64 + 1) * scale;
        }
    }

    // Cohen-Sutherland against the canvas grown by `margin`.
    fn clip(&self, p0: Vec2<i64>, p1: Vec2<i64>, margin: i64) -> Option<(i64, i64, i64, i64)> {
        let (min_x, min_y) = (-margin, -margin);
        let (max_x, max_y) = (self.width as i64 - 1 + margin, self.height as i64 - 1 + margin);
        let (mut x0, mut y0, mut x1, mut y1) = (p0.x, p0.y, p1.x, p1.y);

        let outcode = |x: i64, y: i64| {
            let mut code = INSIDE;
            if x < min_x {
                code |= LEFT;
            } else if x > max_x {
                code |= RIGHT;
            }
            if y < min_y {
                code |= TOP;
            } else if y > max_y {
                code |= BOTTOM;
            }
            code
        };

        loop {
            let code0 = outcode(x0, y0);
            let code1 = outcode(x1, y1);
            if (code0 | code1) == 0 {
                return Some((x0, y0, x1, y1));
            }
            if (code0 & code1) != 0 {
                return None;
            }

            let code = if code0 != 0 { code0 } else { code1 };
            let (dx, dy) = (x1 - x0, y1 - y0);
            let (x, y) = if code & TOP != 0 {
                (x0 + dx * (min_y - y0) / dy, min_y)
            } else if code & BOTTOM != 0 {
                (x0 + dx * (max_y - y0) / dy, max_y)
            } else if code & LEFT != 0 {
                (min_x, y0 + dy * (min_x - x0) / dx)
            } else {
                (max_x, y0 + dy * (max_x - x0) / dx)
            };

            if code == code0 {
                x0 = x;
                y0 = y;
            } else {
                x1 = x;
                y1 = y;
            }
        }
    }
}

// keeps the clipping arithmetic far from overflow
const COORD_LIMIT: i64 = 1 << 24;

fn clamp_coords(p: Vec2<i64>) -> Vec2<i64> {
    Vec2::new(p.x.clamp(-COORD_LIMIT, COORD_LIMIT), p.y.clamp(-COORD_LIMIT, COORD_LIMIT))
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

/// Pixel width of `text` drawn at `scale`.
pub fn text_width(text: &str, scale: u32) -> usize {
    let count = text.chars().count();
    if count == 0 {
        return 0;
    }
    (count * (GLYPH_WIDTH + 1) - 1) * scale.max(1) as usize
}

/// Convert an HWC RGB buffer to packed `0x00RRGGBB` pixels.
pub fn rgb_to_argb(buf: &[u8]) -> Vec<u32> {
    buf.chunks_exact(3)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}
