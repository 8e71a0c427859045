//! 2-opt local search over index tours.

use ndarray::Array2;

/// Length of the closed tour `tour` under `distances`.
pub(crate) fn tour_length(tour: &[usize], distances: &Array2<f64>) -> f64 {
    let n = tour.len();
    (0..n)
        .map(|i| distances[[tour[i], tour[(i + 1) % n]]])
        .sum()
}

/// Gain of replacing edges (i, i+1) and (j, j+1) with (i, j) and (i+1, j+1).
fn gain(tour: &[usize], i: usize, j: usize, distances: &Array2<f64>) -> f64 {
    let n = tour.len();
    let a = tour[i];
    let b = tour[(i + 1) % n];
    let c = tour[j];
    let d = tour[(j + 1) % n];

    let current = distances[[a, b]] + distances[[c, d]];
    let candidate = distances[[a, c]] + distances[[b, d]];
    current - candidate
}

/// Apply first-improvement 2-opt moves until none gains more than `min_gain`.
///
/// Each accepted move reverses the segment `i+1..=j` and restarts the scan.
/// Returns the number of moves applied.
pub(crate) fn improve(tour: &mut [usize], distances: &Array2<f64>, min_gain: f64) -> usize {
    let n = tour.len();
    let mut moves = 0;

    'scan: loop {
        for i in 0..n.saturating_sub(2) {
            for j in (i + 2)..n {
                if gain(tour, i, j, distances) > min_gain {
                    tour[i + 1..=j].reverse();
                    moves += 1;
                    continue 'scan;
                }
            }
        }
        return moves;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    fn matrix(points: &[Point]) -> Array2<f64> {
        Array2::from_shape_fn((points.len(), points.len()), |(i, j)| {
            points[i].distance_to(&points[j])
        })
    }

    fn square() -> Array2<f64> {
        matrix(&[
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ])
    }

    #[test]
    fn measures_closed_length() {
        assert!((tour_length(&[0, 1, 2, 3], &square()) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn untangles_crossing_edges() {
        let distances = square();
        let mut tour = vec![0, 2, 1, 3];
        let before = tour_length(&tour, &distances);

        let moves = improve(&mut tour, &distances, 0.01);

        assert!(moves >= 1);
        assert!(tour_length(&tour, &distances) < before);
        assert!((tour_length(&tour, &distances) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn leaves_optimal_tour_alone() {
        let distances = square();
        let mut tour = vec![0, 1, 2, 3];
        assert_eq!(improve(&mut tour, &distances, 0.01), 0);
        assert_eq!(tour, vec![0, 1, 2, 3]);
    }

    #[test]
    fn tiny_tours_are_untouched() {
        let distances = matrix(&[Point::new(0, 0), Point::new(4, 4)]);
        let mut tour = vec![1, 0];
        assert_eq!(improve(&mut tour, &distances, 0.01), 0);
        assert_eq!(tour, vec![1, 0]);

        let mut empty: Vec<usize> = Vec::new();
        assert_eq!(improve(&mut empty, &distances, 0.01), 0);
    }
}
