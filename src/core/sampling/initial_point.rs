use rand::Rng;

use crate::core::data::triangle::Triangle;
use crate::core::data::vertex::Vertex;

/// Draws a uniformly distributed point inside `triangle`.
///
/// Two uniform values `s, t` in `[0, 1)` are folded back into the lower
/// half of the unit square when `s + t > 1`, which keeps the distribution
/// uniform without rejection sampling.
pub fn sample_initial_point<R: Rng + ?Sized>(triangle: &Triangle, rng: &mut R) -> Vertex {
    let s: f64 = rng.random();
    let t: f64 = rng.random();

    barycentric_point(triangle, s, t)
}

/// Maps the unit-square sample `(s, t)` onto `triangle`.
#[must_use]
pub fn barycentric_point(triangle: &Triangle, s: f64, t: f64) -> Vertex {
    let (u, v) = if s + t > 1.0 { (1.0 - s, 1.0 - t) } else { (s, t) };
    let w = 1.0 - u - v;

    triangle.top() * u + triangle.bottom_left() * v + triangle.bottom_right() * w
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use test_strategy::proptest;

    #[test]
    fn test_zero_sample_is_bottom_right() {
        let triangle = Triangle::reference();

        assert_eq!(barycentric_point(&triangle, 0.0, 0.0), triangle.bottom_right());
    }

    #[test]
    fn test_unit_weights_select_vertex() {
        let triangle = Triangle::reference();

        assert_eq!(barycentric_point(&triangle, 1.0, 0.0), triangle.top());
        assert_eq!(barycentric_point(&triangle, 0.0, 1.0), triangle.bottom_left());
    }

    #[test]
    fn test_sample_outside_unit_simplex_is_reflected() {
        let triangle = Triangle::reference();

        // (0.75, 0.75) reflects to (0.25, 0.25), leaving w = 0.5
        let reflected = barycentric_point(&triangle, 0.75, 0.75);
        let direct = barycentric_point(&triangle, 0.25, 0.25);

        assert_eq!(reflected, direct);
        assert_eq!(reflected, Vertex::new(425.0, 500.0));
    }

    #[test]
    fn test_samples_are_reproducible_with_seed() {
        let triangle = Triangle::reference();
        let mut first = SmallRng::seed_from_u64(7);
        let mut second = SmallRng::seed_from_u64(7);

        for _ in 0..100 {
            assert_eq!(
                sample_initial_point(&triangle, &mut first),
                sample_initial_point(&triangle, &mut second)
            );
        }
    }

    #[test]
    fn test_sample_mean_approaches_centroid() {
        let triangle = Triangle::reference();
        let mut rng = SmallRng::seed_from_u64(42);
        let samples = 10_000;

        let sum = (0..samples)
            .map(|_| sample_initial_point(&triangle, &mut rng))
            .fold(Vertex::default(), |acc, point| acc + point);
        let mean = sum * (1.0 / samples as f64);

        // centroid of the reference triangle is (350, 450)
        assert!((mean.x - 350.0).abs() < 6.0, "mean x {} too far from centroid", mean.x);
        assert!((mean.y - 450.0).abs() < 7.0, "mean y {} too far from centroid", mean.y);
    }

    #[proptest]
    fn sampled_point_lies_in_triangle(seed: u64) {
        let triangle = Triangle::reference();
        let mut rng = SmallRng::seed_from_u64(seed);

        for _ in 0..32 {
            let point = sample_initial_point(&triangle, &mut rng);
            assert!(triangle.contains(point), "{point:?} escaped the triangle");
        }
    }

    #[proptest]
    fn unit_square_sample_lies_in_triangle(
        #[strategy(0.0f64..1.0)] s: f64,
        #[strategy(0.0f64..1.0)] t: f64,
    ) {
        let triangle = Triangle::reference();

        assert!(triangle.contains(barycentric_point(&triangle, s, t)));
    }
}
