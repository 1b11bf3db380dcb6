//! Window geometry and density bands for the implicit rebalancing tree.
//!
//! Aligned windows of `leaf_size * 2^k` slots form a conceptual binary tree
//! over the backing array: leaves at depth `height`, the whole array at depth
//! 0. Each depth gets a density band that is loose at the leaves and tightens
//! toward the root, so local churn is absorbed cheaply while global imbalance
//! forces a resize.

/// Depth of the implicit tree for a backing array of `capacity` slots.
///
/// `capacity` must be `leaf_size * 2^h`; the result is `h`.
pub(crate) fn height(capacity: usize, leaf_size: usize) -> usize {
    debug_assert!(capacity % leaf_size == 0);
    debug_assert!((capacity / leaf_size).is_power_of_two());
    (capacity / leaf_size).trailing_zeros() as usize
}

/// The density band `(lower, upper)` for a window at `depth`.
///
/// `lower = 0.5 - 0.25 * (depth / height)` and
/// `upper = 0.75 + 0.25 * (depth / height)`, so the root tolerates
/// `[0.50, 0.75]` and leaves tolerate `[0.25, 1.00]`. A degenerate tree of
/// height zero is treated as a single leaf.
pub(crate) fn bounds(depth: usize, height: usize) -> (f64, f64) {
    let ratio = if height == 0 {
        1.0
    } else {
        depth as f64 / height as f64
    };
    (0.5 - 0.25 * ratio, 0.75 + 0.25 * ratio)
}

/// The sibling of the aligned window `[begin, end)`.
///
/// Windows at the same depth pair up under a common parent; which side the
/// sibling lies on follows from the parity of `begin / width`.
pub(crate) fn sibling(begin: usize, end: usize) -> (usize, usize) {
    let width = end - begin;
    debug_assert!(begin % width == 0, "window is not aligned");
    if (begin / width) % 2 == 0 {
        (end, end + width)
    } else {
        (begin - width, begin)
    }
}

/// The parent window covering `[begin, end)` and its sibling.
pub(crate) fn parent(begin: usize, end: usize) -> (usize, usize) {
    let (sibling_begin, sibling_end) = sibling(begin, end);
    (begin.min(sibling_begin), end.max(sibling_end))
}
