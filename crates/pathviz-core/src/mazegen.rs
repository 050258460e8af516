//! Random wall generation.
//!
//! Not part of the search algorithm proper, but it shares the grid's
//! wall-mutation rules (start/end cells are never walled), so it lives here.

use rand::{Rng, RngExt};

use crate::grid::Grid;

impl Grid {
    /// Independently mark each non-start/end cell a wall with probability
    /// `density`, overwriting any previous walls.
    ///
    /// `density` is clamped to `[0, 1]`. With a seeded `Rng` the resulting
    /// layout is reproducible.
    pub fn generate_maze(&mut self, density: f64, rng: &mut impl Rng) {
        let density = density.clamp(0.0, 1.0);
        for y in 0..self.height() {
            for x in 0..self.width() {
                let p = crate::Point::new(x, y);
                self.set_wall(p, rng.random_bool(density));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_density_clears_walls() {
        let mut g = Grid::new(6, 6);
        g.toggle_wall(Point::new(3, 3));
        let mut rng = StdRng::seed_from_u64(1);
        g.generate_maze(0.0, &mut rng);
        for i in 0..g.len() {
            assert!(!g[i].wall);
        }
    }

    #[test]
    fn full_density_spares_start_end() {
        let mut g = Grid::new(6, 6);
        g.set_start(Point::new(0, 0));
        g.set_end(Point::new(5, 5));
        let mut rng = StdRng::seed_from_u64(1);
        g.generate_maze(1.0, &mut rng);
        let walls = (0..g.len()).filter(|&i| g[i].wall).count();
        assert_eq!(walls, g.len() - 2);
        assert!(!g.node(Point::new(0, 0)).unwrap().wall);
        assert!(!g.node(Point::new(5, 5)).unwrap().wall);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = Grid::new(10, 10);
        let mut b = Grid::new(10, 10);
        a.generate_maze(0.4, &mut StdRng::seed_from_u64(42));
        b.generate_maze(0.4, &mut StdRng::seed_from_u64(42));
        for i in 0..a.len() {
            assert_eq!(a[i].wall, b[i].wall);
        }
    }
}
