//! Black-or-white text color selection from a simple luma approximation.

use crate::foundation::core::Rgb8;

/// Luma-weighted brightness, unscaled: `R*299 + G*587 + B*114` (so 255 gray = 255000).
///
/// Takes widened channels because the background estimate may exceed 255.
pub fn luma_brightness([r, g, b]: [i32; 3]) -> i32 {
    r * 299 + g * 587 + b * 114
}

/// Absolute brightness difference of two colors.
pub fn simple_contrast(a: Rgb8, b: Rgb8) -> u32 {
    wide_contrast(a.widen(), b.widen())
}

fn wide_contrast(a: [i32; 3], b: [i32; 3]) -> u32 {
    (luma_brightness(a) - luma_brightness(b)).unsigned_abs()
}

/// White or black, whichever stands out more against `background`.
///
/// White wins only on strictly greater contrast; a tie yields black.
pub fn find_best_text_color(background: [i32; 3]) -> Rgb8 {
    let white = wide_contrast(background, Rgb8::WHITE.widen());
    let black = wide_contrast(background, Rgb8::BLACK.widen());
    if white > black {
        Rgb8::WHITE
    } else {
        Rgb8::BLACK
    }
}

/// Background estimate from the two corners of a text box: per channel
/// `|top_left - bottom_right| / 2 + top_left` (integer division).
///
/// Not a midpoint when the bottom-right corner is darker; it then lands above `top_left`,
/// possibly above 255.
pub fn representative_background(top_left: Rgb8, bottom_right: Rgb8) -> [i32; 3] {
    let tl = top_left.widen();
    let br = bottom_right.widen();
    std::array::from_fn(|i| (tl[i] - br[i]).abs() / 2 + tl[i])
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/contrast.rs"]
mod tests;
