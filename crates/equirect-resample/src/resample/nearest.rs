//! Nearest-sample strategy: a cheap, unfiltered baseline.

use super::source_span;
use crate::image::PixelBuffer;

pub(crate) fn resample(input: &PixelBuffer, output: &mut PixelBuffer) {
    let (iw, ih) = (input.width(), input.height());
    let (ow, oh) = (output.width(), output.height());

    for (oj, row) in output.rows_mut().enumerate() {
        let ij = source_span(oj, oh, ih).start.min(ih - 1);
        for (oi, pixel) in row.iter_mut().enumerate() {
            let ii = source_span(oi, ow, iw).start.min(iw - 1);
            *pixel = input.get(ii, ij);
        }
    }
}
