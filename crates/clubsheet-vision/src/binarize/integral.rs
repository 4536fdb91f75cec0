// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Summed-area (integral) table over a single-channel buffer. Gives O(1)
// rectangle sums regardless of window size, which is what makes the
// adaptive threshold linear in pixel count.

use clubsheet_core::error::Result;

use crate::pixel::PixelBuffer;

/// Prefix-sum table with a zero-padded first row and column.
///
/// `sums[y][x]` holds the sum of all intensities with row < y and
/// column < x, so the table is `(width+1) x (height+1)` entries of i64 —
/// wide enough that even a full-white 2^16-square image cannot overflow.
/// Built once per adaptive-binarization call and dropped with it.
pub struct IntegralTable {
    width: u32,
    height: u32,
    stride: usize,
    sums: Vec<i64>,
}

impl IntegralTable {
    /// Build the table from a single-channel buffer.
    pub fn build(buffer: &PixelBuffer) -> Result<Self> {
        buffer.require_single_channel("integral table")?;

        let (w, h) = (buffer.width(), buffer.height());
        let stride = w as usize + 1;
        let mut sums = vec![0i64; stride * (h as usize + 1)];

        for y in 0..h {
            let mut row_sum: i64 = 0;
            for x in 0..w {
                row_sum += buffer.intensity(x, y) as i64;
                let idx = (y as usize + 1) * stride + (x as usize + 1);
                let above = y as usize * stride + (x as usize + 1);
                sums[idx] = row_sum + sums[above];
            }
        }

        Ok(Self {
            width: w,
            height: h,
            stride,
            sums,
        })
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> i64 {
        self.sums[y * self.stride + x]
    }

    /// Sum of intensities over the half-open rectangle
    /// `[x0, x1) x [y0, y1)` via four table lookups (inclusion–exclusion).
    #[inline]
    pub fn sum_region(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> i64 {
        let (x0, y0, x1, y1) = (x0 as usize, y0 as usize, x1 as usize, y1 as usize);
        self.at(x1, y1) - self.at(x0, y1) - self.at(x1, y0) + self.at(x0, y0)
    }

    /// Integer mean over the window `[cx-half, cx+half] x [cy-half, cy+half]`
    /// clipped to the buffer bounds.
    ///
    /// `(cx, cy)` must be inside the buffer, so the clipped window always
    /// contains at least the centre pixel and the count is never zero.
    pub fn window_mean(&self, cx: u32, cy: u32, half: u32) -> i64 {
        let x0 = cx.saturating_sub(half);
        let y0 = cy.saturating_sub(half);
        let x1 = (cx + half + 1).min(self.width);
        let y1 = (cy + half + 1).min(self.height);

        let count = ((x1 - x0) as i64) * ((y1 - y0) as i64);
        self.sum_region(x0, y0, x1, y1) / count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_and_column_are_zero() {
        let buf = PixelBuffer::from_raw(3, 2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let table = IntegralTable::build(&buf).unwrap();
        for x in 0..=3 {
            assert_eq!(table.at(x, 0), 0);
        }
        for y in 0..=2 {
            assert_eq!(table.at(0, y), 0);
        }
    }

    #[test]
    fn corner_entry_is_total_sum() {
        let buf = PixelBuffer::from_raw(3, 2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let table = IntegralTable::build(&buf).unwrap();
        assert_eq!(table.sum_region(0, 0, 3, 2), 21);
    }

    #[test]
    fn region_sums_match_direct_summation() {
        let samples: Vec<u8> = (0..36).map(|i| (i * 7 % 256) as u8).collect();
        let buf = PixelBuffer::from_raw(6, 6, 1, samples).unwrap();
        let table = IntegralTable::build(&buf).unwrap();

        for (x0, y0, x1, y1) in [(0, 0, 6, 6), (1, 1, 4, 5), (2, 0, 3, 6), (5, 5, 6, 6)] {
            let mut expected = 0i64;
            for y in y0..y1 {
                for x in x0..x1 {
                    expected += buf.intensity(x, y) as i64;
                }
            }
            assert_eq!(table.sum_region(x0, y0, x1, y1), expected);
        }
    }

    #[test]
    fn constant_image_mean_equals_the_constant() {
        // For a uniform buffer the clipped-window mean must be exact for any
        // window size, including windows larger than the image.
        for value in [0u8, 1, 97, 255] {
            let buf = PixelBuffer::from_raw(9, 7, 1, vec![value; 63]).unwrap();
            let table = IntegralTable::build(&buf).unwrap();
            for half in [0u32, 1, 3, 12, 100] {
                for y in 0..7 {
                    for x in 0..9 {
                        assert_eq!(table.window_mean(x, y, half), value as i64);
                    }
                }
            }
        }
    }

    #[test]
    fn window_clips_at_borders() {
        // 2x2 image [10, 20; 30, 40]: at the corner with half=1 the window
        // only covers the image itself.
        let buf = PixelBuffer::from_raw(2, 2, 1, vec![10, 20, 30, 40]).unwrap();
        let table = IntegralTable::build(&buf).unwrap();
        assert_eq!(table.window_mean(0, 0, 1), 25);
        // half=0 degenerates to the pixel itself.
        assert_eq!(table.window_mean(1, 1, 0), 40);
    }

    #[test]
    fn multi_channel_input_is_rejected() {
        let buf = PixelBuffer::new(4, 4, 3).unwrap();
        assert!(IntegralTable::build(&buf).is_err());
    }
}
