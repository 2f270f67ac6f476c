//! Small numeric helpers shared by the weak learners and the ensemble.

use ndarray::ArrayView1;

/// Index of the largest value; ties go to the smallest index.
///
/// NaN entries never win. Returns 0 for an empty input.
pub fn argmax(values: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (index, &value) in values.iter().enumerate() {
        if value > best_value {
            best = index;
            best_value = value;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_argmax_ties_to_first() {
        assert_eq!(argmax(array![1.0, 3.0, 3.0, 2.0].view()), 1);
        assert_eq!(argmax(array![0.0, 0.0].view()), 0);
    }

    #[test]
    fn test_argmax_skips_nan() {
        assert_eq!(argmax(array![f64::NAN, -1.0].view()), 1);
        assert_eq!(argmax(ndarray::Array1::<f64>::zeros(0).view()), 0);
    }
}
