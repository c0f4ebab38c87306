// SPDX-License-Identifier: MPL-2.0
//! Next-index policy for randomized carousels.

use rand::Rng;

/// Picks the index shown after `current`.
///
/// - `len <= 1`: nothing to rotate to.
/// - `len == 2`: the other index.
/// - `len >= 3`: uniform over every index except `current` and `previous`.
pub fn pick_next<R: Rng + ?Sized>(
    len: usize,
    current: usize,
    previous: Option<usize>,
    rng: &mut R,
) -> Option<usize> {
    match len {
        0 | 1 => None,
        2 => Some(if current == 0 { 1 } else { 0 }),
        _ => {
            let excluded = |index: usize| index == current || Some(index) == previous;
            let candidates = (0..len).filter(|&index| !excluded(index)).count();
            let pick = rng.gen_range(0..candidates);
            (0..len).filter(|&index| !excluded(index)).nth(pick)
        }
    }
}
