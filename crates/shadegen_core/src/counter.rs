//! Mixed-radix counting over option axes
//!
//! Each option axis is one digit with its own base (the number of possible
//! values). A linear index in `[0, product-of-bases)` maps to one selection
//! per axis. The decomposition walks axes from the last to the first, so the
//! last-listed option varies fastest across consecutive indices and the
//! first-listed varies slowest. Output filenames are derived from these
//! selections, so this order must stay stable.

use crate::{ShaderOption, VariantError};

/// Per-axis bases for a shader's referenced options, in reference order.
pub fn bases(subset: &[ShaderOption]) -> Vec<usize> {
    subset.iter().map(|option| option.count()).collect()
}

/// Total number of combinations: the product of all bases.
///
/// An empty base list yields 1 (the empty product), meaning a shader with no
/// options still has exactly one variant. Step counts are limited to `u64`;
/// a larger combination space fails with [`VariantError::Overflow`] rather
/// than wrapping.
pub fn step_count(bases: &[usize]) -> Result<u64, VariantError> {
    let mut product: u64 = 1;
    for &base in bases {
        product = product
            .checked_mul(base as u64)
            .ok_or(VariantError::Overflow)?;
    }
    Ok(product)
}

/// Decompose `index` into one selection per axis.
///
/// Axes are processed from the last to the first: at each step the remainder
/// modulo the axis base becomes that axis's selection and the quotient
/// carries on to the next axis. After the first axis the quotient is zero
/// for any in-range index.
pub fn digits_for(bases: &[usize], index: u64) -> Result<Vec<usize>, VariantError> {
    let count = step_count(bases)?;
    if index >= count {
        return Err(VariantError::IndexOutOfRange { index, count });
    }

    let mut digits = vec![0usize; bases.len()];
    let mut current = index;
    for (i, &base) in bases.iter().enumerate().rev() {
        digits[i] = (current % base as u64) as usize;
        current /= base as u64;
    }

    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OptionValue, ScalarValue};

    fn option(define: &str, count: usize) -> ShaderOption {
        ShaderOption {
            define: define.to_string(),
            values: (0..count)
                .map(|i| OptionValue::Scalar(ScalarValue::Int(i as i64)))
                .collect(),
        }
    }

    #[test]
    fn test_bases_follow_subset_order() {
        let subset = vec![option("A", 2), option("B", 3), option("C", 5)];
        assert_eq!(bases(&subset), vec![2, 3, 5]);
    }

    #[test]
    fn test_step_count_is_product() {
        assert_eq!(step_count(&[2, 3, 5]).unwrap(), 30);
        assert_eq!(step_count(&[7]).unwrap(), 7);
    }

    #[test]
    fn test_empty_bases_give_one_step() {
        assert_eq!(step_count(&[]).unwrap(), 1);
        assert_eq!(digits_for(&[], 0).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_step_count_overflow() {
        // 2^32 * 2^32 does not fit in u64
        let huge = 1usize << 32;
        assert!(matches!(
            step_count(&[huge, huge]),
            Err(VariantError::Overflow)
        ));
    }

    #[test]
    fn test_last_axis_varies_fastest() {
        // bases [2, 3]: index counts through the second axis first
        assert_eq!(digits_for(&[2, 3], 0).unwrap(), vec![0, 0]);
        assert_eq!(digits_for(&[2, 3], 1).unwrap(), vec![0, 1]);
        assert_eq!(digits_for(&[2, 3], 2).unwrap(), vec![0, 2]);
        assert_eq!(digits_for(&[2, 3], 3).unwrap(), vec![1, 0]);
        assert_eq!(digits_for(&[2, 3], 4).unwrap(), vec![1, 1]);
        assert_eq!(digits_for(&[2, 3], 5).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_digits_round_trip() {
        let bases = [3, 2, 4];
        let count = step_count(&bases).unwrap();
        for index in 0..count {
            let digits = digits_for(&bases, index).unwrap();
            // recombine with the last axis as the least significant digit
            let mut recombined = 0u64;
            for (digit, &base) in digits.iter().zip(&bases) {
                recombined = recombined * base as u64 + *digit as u64;
            }
            assert_eq!(recombined, index);
        }
    }

    #[test]
    fn test_index_out_of_range() {
        assert!(matches!(
            digits_for(&[2, 3], 6),
            Err(VariantError::IndexOutOfRange { index: 6, count: 6 })
        ));
        assert!(matches!(
            digits_for(&[], 1),
            Err(VariantError::IndexOutOfRange { index: 1, count: 1 })
        ));
    }
}
