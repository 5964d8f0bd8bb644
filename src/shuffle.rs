// src/shuffle.rs

use rand::Rng;

/// Devuelve una copia barajada con Fisher–Yates. La entrada no se toca.
pub fn shuffle_options<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::shuffle_options;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn shuffle_is_a_permutation_and_keeps_input() {
        let input = vec!["a", "b", "c", "d"];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let out = shuffle_options(&input, &mut rng);
            assert_eq!(out.len(), input.len());
            let mut sorted = out.clone();
            sorted.sort();
            assert_eq!(sorted, input);
        }
        assert_eq!(input, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn shuffle_handles_short_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffle_options::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffle_options(&[9], &mut rng), vec![9]);
    }

    #[test]
    fn every_ordering_is_about_equally_likely() {
        let input = [0u8, 1, 2, 3];
        let trials = 24_000;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(shuffle_options(&input, &mut rng)).or_default() += 1;
        }

        // 4! ordenaciones, ~1000 cada una
        assert_eq!(counts.len(), 24);
        let expected = trials / 24;
        for (order, count) in &counts {
            assert!(
                count.abs_diff(expected) < expected / 5,
                "ordering {order:?} appeared {count} times"
            );
        }
    }
}
