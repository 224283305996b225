use rayon::prelude::*;

/// A trait to classify one or several query points as inside or outside a region.
pub trait PointClassifier {
    /// Returns `true` if the query point is inside the region.
    fn contains_point(&self, point: &[f64; 2]) -> bool;

    /// Classifies several query points.
    fn classify_many(&self, points: &[[f64; 2]]) -> Vec<bool> {
        points.iter().map(|point| self.contains_point(point)).collect()
    }

    /// Classifies several query points in parallel.
    fn par_classify_many(&self, points: &[[f64; 2]]) -> Vec<bool>
    where
        Self: std::marker::Sync,
    {
        points
            .par_iter()
            .map(|point| self.contains_point(point))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Open unit square, by plain comparisons.
    struct UnitSquare;

    impl PointClassifier for UnitSquare {
        fn contains_point(&self, &[x, y]: &[f64; 2]) -> bool {
            (0. ..1.).contains(&x) && (0. ..1.).contains(&y)
        }
    }

    #[test]
    fn batch_classification_keeps_query_order() {
        let points = [[0.5, 0.5], [1.5, 0.5], [0.1, 0.9], [-0.1, 0.2]];

        assert_eq!(
            UnitSquare.classify_many(&points),
            vec![true, false, true, false]
        );
        assert_eq!(
            UnitSquare.par_classify_many(&points),
            UnitSquare.classify_many(&points)
        );
    }
}
