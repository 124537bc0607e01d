use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

use crate::types::Face;

/// Anything that can produce a uniformly distributed die face.
pub trait DieSource {
    /// Produce one value in `1..=sides`. Callers guarantee `sides >= 1`.
    fn roll_die(&mut self, sides: Face) -> Face;
}

fn uniform_face<R: Rng>(rng: &mut R, sides: Face) -> Face {
    rng.gen_range(1..=sides)
}

impl DieSource for ThreadRng {
    fn roll_die(&mut self, sides: Face) -> Face {
        uniform_face(self, sides)
    }
}

impl DieSource for StdRng {
    fn roll_die(&mut self, sides: Face) -> Face {
        uniform_face(self, sides)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::die::DieSource;

    #[test]
    fn test_faces_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for sides in [1, 2, 6, 20, 100] {
            for _ in 0..500 {
                let face = rng.roll_die(sides);
                assert!((1..=sides).contains(&face), "{} out of range for d{}", face, sides);
            }
        }
    }

    #[test]
    fn test_every_face_appears() {
        let mut rng = rand::thread_rng();
        let mut seen = [false; 6];
        for _ in 0..1000 {
            seen[rng.roll_die(6) as usize - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
