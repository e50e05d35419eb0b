//! Unrolled linear scan over sorted `f64` slices.
//!
//! On short slices a forward scan beats binary search: every probe is a
//! predictable access to the next element, so the whole search walks one or
//! two cache lines in order instead of jumping around the slice. The scan
//! processes four elements per iteration to give the CPU independent
//! comparisons to overlap, and stops at the first element `>= needle`.
//!
//! Sortedness is a precondition and is not validated here. On an unsorted
//! slice the returned position is meaningless, but the scan still terminates
//! after at most `len` comparisons and never reads out of bounds.

/// Find the needle with the unrolled scan, reporting whether it was present.
///
/// Returns `Ok(i)` with the leftmost index of an exact match, or `Err(i)`
/// with the insertion point otherwise, following the `slice::binary_search`
/// convention: `Err(0)` means the needle is below the range, `Err(len)`
/// above it.
///
/// Every element gets the same two-step test: the `>=` comparison decides
/// termination, and only the terminating element is checked for equality.
///
/// # Example
///
/// ```
/// use sorted_scan::linear;
///
/// let values = [1.0, 3.0, 5.0, 7.0];
/// assert_eq!(linear::locate(&values, 5.0), Ok(2));
/// assert_eq!(linear::locate(&values, 4.0), Err(2));
/// assert_eq!(linear::locate(&values, 9.0), Err(4));
/// ```
#[inline]
pub fn locate(haystack: &[f64], needle: f64) -> Result<usize, usize> {
    let len = haystack.len();
    let mut i = 0;

    while i + 4 <= len {
        if haystack[i] >= needle {
            if haystack[i] == needle {
                return Ok(i);
            }
            return Err(i);
        }
        if haystack[i + 1] >= needle {
            if haystack[i + 1] == needle {
                return Ok(i + 1);
            }
            return Err(i + 1);
        }
        if haystack[i + 2] >= needle {
            if haystack[i + 2] == needle {
                return Ok(i + 2);
            }
            return Err(i + 2);
        }
        if haystack[i + 3] >= needle {
            if haystack[i + 3] == needle {
                return Ok(i + 3);
            }
            return Err(i + 3);
        }
        i += 4;
    }

    while i < len {
        if haystack[i] >= needle {
            if haystack[i] == needle {
                return Ok(i);
            }
            return Err(i);
        }
        i += 1;
    }

    Err(len)
}

/// Find the first position where `haystack[pos] >= needle`.
///
/// Returns `len` when the needle is greater than every element. Runs of
/// equal values resolve to the leftmost match.
#[inline]
pub fn lower_bound(haystack: &[f64], needle: f64) -> usize {
    match locate(haystack, needle) {
        Ok(pos) | Err(pos) => pos,
    }
}

/// One-element-at-a-time scan with the same contract as [`lower_bound`].
///
/// The baseline the unrolled scan is measured against. Also serves as the
/// reference definition of "first position `>= needle`" in tests.
#[inline]
pub fn lower_bound_basic(haystack: &[f64], needle: f64) -> usize {
    if let Some(pos) = haystack.iter().position(|x| *x >= needle) {
        return pos;
    }
    haystack.len()
}
