//! A single ant's tour construction.

use ndarray::Array2;
use rand::Rng;

/// Distances below this are treated as this for visibility.
const DISTANCE_FLOOR: f64 = 1e-3;

/// Exponents applied to pheromone and visibility when choosing edges.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Weights {
    pub(crate) pheromone: f64,
    pub(crate) visibility: f64,
}

/// Tour built by one ant.
#[derive(Debug, Clone)]
pub(crate) struct Ant {
    pub(crate) tour: Vec<usize>,
    pub(crate) length: f64,
}

impl Ant {
    /// Walk all cities from a random start, choosing each step by roulette.
    pub(crate) fn construct<R: Rng>(
        distances: &Array2<f64>,
        pheromones: &Array2<f64>,
        weights: Weights,
        rng: &mut R,
    ) -> Self {
        let n = distances.nrows();
        let mut visited = vec![false; n];
        let mut tour = Vec::with_capacity(n);
        let mut length = 0.0;
        let mut scores = vec![0.0; n];

        let start = rng.gen_range(0..n);
        visited[start] = true;
        tour.push(start);

        let mut current = start;
        for _ in 1..n {
            let next = select_next(current, &visited, distances, pheromones, weights, &mut scores, rng);
            visited[next] = true;
            tour.push(next);
            length += distances[[current, next]];
            current = next;
        }
        length += distances[[current, start]];

        Self { tour, length }
    }
}

fn select_next<R: Rng>(
    current: usize,
    visited: &[bool],
    distances: &Array2<f64>,
    pheromones: &Array2<f64>,
    weights: Weights,
    scores: &mut [f64],
    rng: &mut R,
) -> usize {
    let mut total = 0.0;
    for city in 0..visited.len() {
        scores[city] = if visited[city] {
            0.0
        } else {
            let tau = pheromones[[current, city]].powf(weights.pheromone);
            let eta = (1.0 / distances[[current, city]].max(DISTANCE_FLOOR)).powf(weights.visibility);
            tau * eta
        };
        total += scores[city];
    }

    if total > 0.0 && total.is_finite() {
        let threshold = rng.gen::<f64>() * total;
        let mut cumulative = 0.0;
        for city in 0..visited.len() {
            if visited[city] {
                continue;
            }
            cumulative += scores[city];
            if threshold <= cumulative {
                return city;
            }
        }
    }

    // Rounding left nothing picked
    visited.iter().position(|&v| !v).unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line(n: usize) -> Array2<f64> {
        Array2::from_shape_fn((n, n), |(i, j)| (i as f64 - j as f64).abs() * 10.0)
    }

    #[test]
    fn visits_every_city_once() {
        let distances = line(12);
        let pheromones = Array2::from_elem((12, 12), 0.1);
        let weights = Weights {
            pheromone: 1.0,
            visibility: 5.0,
        };
        let mut rng = StdRng::seed_from_u64(4);

        let ant = Ant::construct(&distances, &pheromones, weights, &mut rng);

        let mut sorted = ant.tour.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..12).collect::<Vec<_>>());
        assert!(ant.length > 0.0);
    }

    #[test]
    fn duplicate_points_keep_weights_finite() {
        let distances = Array2::zeros((5, 5));
        let pheromones = Array2::from_elem((5, 5), 10.0);
        let weights = Weights {
            pheromone: 2.0,
            visibility: 10.0,
        };
        let mut rng = StdRng::seed_from_u64(8);

        let ant = Ant::construct(&distances, &pheromones, weights, &mut rng);

        assert_eq!(ant.tour.len(), 5);
        assert_eq!(ant.length, 0.0);
    }

    #[test]
    fn single_city_tour() {
        let distances = Array2::zeros((1, 1));
        let pheromones = Array2::from_elem((1, 1), 0.1);
        let weights = Weights {
            pheromone: 1.0,
            visibility: 5.0,
        };
        let ant = Ant::construct(&distances, &pheromones, weights, &mut StdRng::seed_from_u64(0));
        assert_eq!(ant.tour, vec![0]);
        assert_eq!(ant.length, 0.0);
    }
}
