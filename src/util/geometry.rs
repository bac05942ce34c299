// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Aspect-fit math shared by every screen that displays a thumbnail inside
//! an arbitrary region.

/// Scale `width` x `height` to the largest size that fits inside
/// `bound_w` x `bound_h` while preserving aspect ratio.
pub fn fit_size(width: u32, height: u32, bound_w: f32, bound_h: f32) -> (f32, f32) {
    let aspect = width as f32 / height as f32;
    let bound_aspect = bound_w / bound_h;

    if aspect > bound_aspect {
        // Image is wider - fit to width
        (bound_w, bound_w / aspect)
    } else {
        // Image is taller - fit to height
        (bound_h * aspect, bound_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_fits_to_width() {
        let (w, h) = fit_size(200, 100, 100.0, 100.0);
        assert_eq!((w, h), (100.0, 50.0));
    }

    #[test]
    fn tall_image_fits_to_height() {
        let (w, h) = fit_size(100, 200, 100.0, 100.0);
        assert_eq!((w, h), (50.0, 100.0));
    }

    #[test]
    fn matching_aspect_fills_the_bounds() {
        let (w, h) = fit_size(64, 64, 150.0, 150.0);
        assert_eq!((w, h), (150.0, 150.0));
    }
}
