//! In-place rotation of packed RGB565 buffers
//!
//! Rotates a row-major `width x height` pixel buffer by 90, 180 or 270
//! degrees clockwise using only the existing storage:
//!
//! - **180**: reverse the linear element sequence; dimensions unchanged.
//! - **90**: vertical flip, then in-place rectangular transpose.
//! - **270**: transpose, then vertical flip at the post-transpose dimensions.
//!
//! 90 and 270 swap the logical dimensions; [`rotate_in_place`] returns the
//! new `(width, height)` pair only after the permutation has fully completed.
//!
//! ## Transpose
//!
//! A non-square transpose is the index permutation
//! `i -> (i * rows) mod (n - 1)` (indices 0 and n-1 are fixed), which
//! decomposes into disjoint cycles. Each index is visited in increasing
//! order; an index rotates its cycle only when it is the numerically smallest
//! member (checked by following the permutation forward until it returns).
//! Every cycle is therefore moved exactly once, giving O(n) element writes in
//! total. Naive swap-while-iterating revisits elements on non-square
//! matrices and is incorrect here.

use crate::error::GeometryError;

/// Rotate a packed buffer in place by 90, 180 or 270 degrees clockwise
///
/// Returns the post-rotation `(width, height)`.
///
/// The caller is responsible for exclusion against concurrent readers of the
/// buffer; a DMA scanout engine reading mid-permutation will observe tearing.
///
/// # Errors
///
/// - `GeometryError::InvalidAngle` for any angle other than 90/180/270;
///   the buffer is left untouched.
/// - `GeometryError::SizeMismatch` if `buf.len() != width * height`.
pub fn rotate_in_place(
    buf: &mut [u16],
    width: usize,
    height: usize,
    degrees: u16,
) -> Result<(usize, usize), GeometryError> {
    if !matches!(degrees, 90 | 180 | 270) {
        return Err(GeometryError::InvalidAngle { degrees });
    }
    let expected = width * height;
    if buf.len() != expected {
        return Err(GeometryError::SizeMismatch {
            expected,
            provided: buf.len(),
        });
    }

    match degrees {
        90 => {
            flip_rows(buf, width, height);
            transpose(buf, height);
            Ok((height, width))
        }
        180 => {
            buf.reverse();
            Ok((width, height))
        }
        // 270, by the angle check above
        _ => {
            transpose(buf, height);
            flip_rows(buf, height, width);
            Ok((height, width))
        }
    }
}

/// Swap row `y` with row `height - 1 - y` for the top half
fn flip_rows(buf: &mut [u16], width: usize, height: usize) {
    for y in 0..height / 2 {
        let top = y * width;
        let bottom = (height - 1 - y) * width;
        for x in 0..width {
            buf.swap(top + x, bottom + x);
        }
    }
}

/// In-place rectangular transpose via cycle-leader permutation
///
/// `rows` is the row count of the matrix as currently stored; after the call
/// the buffer holds the `cols x rows` transpose.
fn transpose(buf: &mut [u16], rows: usize) {
    let n = buf.len();
    // Single-row and single-column matrices transpose to themselves
    if rows < 2 || n < 3 || n == rows {
        return;
    }
    let cols = n / rows;
    let m = n - 1;

    for start in 1..m {
        // Leader check: walk the cycle; bail if any member is smaller
        let mut idx = start * rows % m;
        if idx == start {
            continue;
        }
        let mut leader = true;
        while idx != start {
            if idx < start {
                leader = false;
                break;
            }
            idx = idx * rows % m;
        }
        if !leader {
            continue;
        }

        // Rotate the cycle once, pulling each value from its source slot.
        // rows * cols == n == 1 (mod n-1), so the inverse step is * cols.
        let held = buf[start];
        let mut dst = start;
        loop {
            let src = dst * cols % m;
            if src == start {
                buf[dst] = held;
                break;
            }
            buf[dst] = buf[src];
            dst = src;
        }
    }
}
