//! Classification metrics for model evaluation.

use crate::core::error::{AdaBoostError, Result};
use crate::core::types::ClassIndex;
use ndarray::{Array2, ArrayView1};

/// Fraction of predictions equal to the reference labels.
///
/// Works on raw labels as well as dense class indices.
pub fn accuracy<L: PartialEq>(predictions: &[L], labels: &[L]) -> Result<f64> {
    if predictions.len() != labels.len() {
        return Err(AdaBoostError::data(format!(
            "Cannot score {} predictions against {} labels",
            predictions.len(),
            labels.len()
        )));
    }
    if labels.is_empty() {
        return Err(AdaBoostError::data("Cannot compute accuracy of an empty label set"));
    }

    let correct = predictions
        .iter()
        .zip(labels.iter())
        .filter(|(p, l)| p == l)
        .count();
    Ok(correct as f64 / labels.len() as f64)
}

/// Confusion matrix with true classes as rows and predicted classes as columns.
pub fn confusion_matrix(
    predictions: ArrayView1<'_, ClassIndex>,
    labels: ArrayView1<'_, ClassIndex>,
    num_classes: usize,
) -> Result<Array2<usize>> {
    if predictions.len() != labels.len() {
        return Err(AdaBoostError::data(format!(
            "Cannot score {} predictions against {} labels",
            predictions.len(),
            labels.len()
        )));
    }

    let mut matrix = Array2::zeros((num_classes, num_classes));
    for (&predicted, &actual) in predictions.iter().zip(labels.iter()) {
        if predicted >= num_classes || actual >= num_classes {
            return Err(AdaBoostError::data(format!(
                "Class index out of range for {} classes (predicted {}, actual {})",
                num_classes, predicted, actual
            )));
        }
        matrix[[actual, predicted]] += 1;
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_accuracy() {
        assert_relative_eq!(accuracy(&["a", "b", "b"], &["a", "b", "a"]).unwrap(), 2.0 / 3.0);
        assert_relative_eq!(accuracy(&[1, 2], &[1, 2]).unwrap(), 1.0);
        assert!(accuracy(&[1], &[1, 2]).unwrap_err().is_data());
        assert!(accuracy::<i32>(&[], &[]).is_err());
    }

    #[test]
    fn test_confusion_matrix() {
        let matrix =
            confusion_matrix(array![0, 1, 1, 2].view(), array![0, 1, 2, 2].view(), 3).unwrap();
        assert_eq!(matrix[[0, 0]], 1);
        assert_eq!(matrix[[1, 1]], 1);
        assert_eq!(matrix[[2, 1]], 1);
        assert_eq!(matrix[[2, 2]], 1);
        assert_eq!(matrix.sum(), 4);

        assert!(confusion_matrix(array![3].view(), array![0].view(), 3).is_err());
    }
}
