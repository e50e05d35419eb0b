//! Lower-bound search delegated to the standard library.
//!
//! Binary search is not implemented in this crate. `partition_point` drives
//! the actual search; this module only pins its result to the same contract
//! the linear scan honors, so the two are interchangeable behind
//! [`crate::Searcher`].

/// Find the first position where `haystack[pos] >= needle` by binary search.
#[inline]
pub fn lower_bound(haystack: &[f64], needle: f64) -> usize {
    haystack.partition_point(|x| *x < needle)
}

/// Binary-search counterpart of [`crate::linear::locate`].
#[inline]
pub fn locate(haystack: &[f64], needle: f64) -> Result<usize, usize> {
    let pos = lower_bound(haystack, needle);
    if pos < haystack.len() && haystack[pos] == needle {
        Ok(pos)
    } else {
        Err(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bound() {
        let haystack = [1.0, 3.0, 5.0, 7.0];
        assert_eq!(lower_bound(&haystack, 0.0), 0);
        assert_eq!(lower_bound(&haystack, 4.0), 2);
        assert_eq!(lower_bound(&haystack, 7.0), 3);
        assert_eq!(lower_bound(&haystack, 9.0), 4);
    }

    #[test]
    fn test_locate() {
        let haystack = [1.0, 3.0, 5.0, 7.0];
        assert_eq!(locate(&haystack, 5.0), Ok(2));
        assert_eq!(locate(&haystack, 4.0), Err(2));
        assert_eq!(locate(&haystack, 0.0), Err(0));
        assert_eq!(locate(&haystack, 9.0), Err(4));
    }

    #[test]
    fn test_duplicates_leftmost() {
        assert_eq!(locate(&[5.0, 5.0, 5.0, 8.0], 5.0), Ok(0));
    }

    #[test]
    fn test_empty() {
        assert_eq!(lower_bound(&[], 1.0), 0);
        assert_eq!(locate(&[], 1.0), Err(0));
    }
}
