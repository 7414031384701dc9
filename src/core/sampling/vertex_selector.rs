use rand::Rng;

use crate::core::data::triangle::Triangle;
use crate::core::data::vertex::Vertex;

/// Picks one of the triangle's vertices uniformly at random. Each call is
/// independent, so the same vertex may come back several times in a row.
pub fn select_vertex<R: Rng + ?Sized>(triangle: &Triangle, rng: &mut R) -> Vertex {
    let vertices = triangle.vertices();

    vertices[rng.random_range(0..vertices.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use test_strategy::proptest;

    fn vertex_index(triangle: &Triangle, vertex: Vertex) -> usize {
        triangle
            .vertices()
            .iter()
            .position(|candidate| *candidate == vertex)
            .expect("selected vertex must belong to the triangle")
    }

    #[test]
    fn test_selection_is_roughly_uniform() {
        let triangle = Triangle::reference();
        let mut rng = SmallRng::seed_from_u64(1234);
        let mut counts = [0usize; 3];

        for _ in 0..30_000 {
            counts[vertex_index(&triangle, select_vertex(&triangle, &mut rng))] += 1;
        }

        for count in counts {
            assert!(
                (9_500..=10_500).contains(&count),
                "vertex counts {counts:?} are not close to uniform"
            );
        }
    }

    #[test]
    fn test_selection_can_repeat_consecutively() {
        let triangle = Triangle::reference();
        let mut rng = SmallRng::seed_from_u64(99);

        let picks: Vec<Vertex> = (0..100).map(|_| select_vertex(&triangle, &mut rng)).collect();

        assert!(picks.windows(2).any(|pair| pair[0] == pair[1]));
    }

    #[proptest]
    fn selected_vertex_belongs_to_triangle(seed: u64) {
        let triangle = Triangle::reference();
        let mut rng = SmallRng::seed_from_u64(seed);

        for _ in 0..16 {
            let vertex = select_vertex(&triangle, &mut rng);
            assert!(triangle.vertices().contains(&vertex));
        }
    }
}
