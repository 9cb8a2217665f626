//! Latitude-weighted box filter.
//!
//! Each output pixel averages the source rectangle it covers. A source row
//! at colatitude `theta` subtends a solid angle proportional to
//! `sin(theta)`, so that is its weight.

use std::f32::consts::PI;
use std::ops::Range;

use super::source_span;
use crate::color::LinearRgb;
use crate::image::PixelBuffer;

/// Weight of source row `ij` in an image `ih` rows tall: `sin(pi * (ij + 0.5) / ih)`.
///
/// Strictly positive for every row, largest at the equator.
#[inline]
pub fn box_row_weight(ij: usize, ih: usize) -> f32 {
    (PI * (ij as f32 + 0.5) / ih as f32).sin()
}

pub(crate) fn resample(input: &PixelBuffer, output: &mut PixelBuffer) {
    let (iw, ih) = (input.width(), input.height());
    let (ow, oh) = (output.width(), output.height());

    for (oj, row) in output.rows_mut().enumerate() {
        let rows = source_span(oj, oh, ih);
        for (oi, pixel) in row.iter_mut().enumerate() {
            let cols = source_span(oi, ow, iw);
            let (sum, weight_sum) = accumulate(input, cols, rows.clone());
            *pixel = sum / weight_sum;
        }
    }
}

/// Weighted sum and total weight over a source rectangle.
pub(crate) fn accumulate(
    input: &PixelBuffer,
    cols: Range<usize>,
    rows: Range<usize>,
) -> (LinearRgb, f32) {
    let ih = input.height();
    let mut sum = LinearRgb::ZERO;
    let mut weight_sum = 0.0f32;
    for ij in rows {
        let weight = box_row_weight(ij, ih);
        for ii in cols.clone() {
            sum = sum.mul_add(weight, input.get(ii, ij));
            weight_sum += weight;
        }
    }
    (sum, weight_sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_weight_symmetric_and_positive() {
        let ih = 7;
        for ij in 0..ih {
            let w = box_row_weight(ij, ih);
            assert!(w > 0.0);
            assert!((w - box_row_weight(ih - 1 - ij, ih)).abs() < 1e-6);
        }
        // Middle row of an odd height sits on the equator
        assert!((box_row_weight(3, 7) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_weight_sum_matches_direct_recomputation() {
        // ih = 4, rows [1, 3), two columns
        let input = PixelBuffer::filled(2, 4, LinearRgb::new(1.0, 1.0, 1.0));
        let (_, weight_sum) = accumulate(&input, 0..2, 1..3);

        let expected = 2.0 * ((PI * 1.5 / 4.0).sin() + (PI * 2.5 / 4.0).sin());
        assert!(
            (weight_sum - expected).abs() < 1e-5,
            "weight sum {weight_sum}, expected {expected}"
        );
    }

    #[test]
    fn test_polar_rows_count_less() {
        // Polar row white, equatorial and opposite polar rows black
        let mut input = PixelBuffer::new(1, 3);
        input.set(0, 0, LinearRgb::new(1.0, 1.0, 1.0));
        let mut output = PixelBuffer::new(1, 1);
        resample(&input, &mut output);

        // Unweighted mean would be 1/3
        let w0 = box_row_weight(0, 3);
        let expected = w0 / (2.0 * w0 + box_row_weight(1, 3));
        assert!((output.get(0, 0).r - expected).abs() < 1e-6);
        assert!(output.get(0, 0).r < 1.0 / 3.0);
    }

    #[test]
    fn test_same_size_is_identity() {
        let mut input = PixelBuffer::new(3, 3);
        input.set(2, 0, LinearRgb::new(0.5, 0.25, 0.75));
        let mut output = PixelBuffer::new(3, 3);
        resample(&input, &mut output);
        for j in 0..3 {
            for i in 0..3 {
                let (a, b) = (output.get(i, j), input.get(i, j));
                assert!((a.r - b.r).abs() < 1e-6 && (a.b - b.b).abs() < 1e-6);
            }
        }
    }
}
