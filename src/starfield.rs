use rand::{rngs::SmallRng, Rng, SeedableRng};

pub const STAR_COUNT: usize = 1000;
pub const STAR_SEED: u64 = 0x5eed_0f_57a25;
const HALF_EXTENT: f64 = 25.0;
const MAX_TILT_DEG: f64 = 8.0;
const CURSOR_RADIUS: f64 = 10.0;

/// A star projected onto the viewport. `x`/`y` are percentages, `depth` is
/// 0 at the back of the field and 1 at the front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

impl Star {
    pub fn size_px(&self) -> f64 {
        1.0 + self.depth * 2.0
    }

    pub fn opacity(&self) -> f64 {
        0.3 + self.depth * 0.7
    }

    pub fn style(&self) -> String {
        let size = self.size_px();
        format!(
            "left: {:.2}%; top: {:.2}%; width: {size:.1}px; height: {size:.1}px; opacity: {:.2}",
            self.x,
            self.y,
            self.opacity()
        )
    }
}

/// Stars scattered through a 50x50x50 cube, deterministic for a given seed
/// so server and client render the same field.
pub fn generate(seed: u64, count: usize) -> Vec<Star> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.random_range(-HALF_EXTENT..HALF_EXTENT);
            let y = rng.random_range(-HALF_EXTENT..HALF_EXTENT);
            let z = rng.random_range(-HALF_EXTENT..HALF_EXTENT);
            Star {
                x: to_percent(x),
                y: to_percent(y),
                depth: (z + HALF_EXTENT) / (2.0 * HALF_EXTENT),
            }
        })
        .collect()
}

fn to_percent(v: f64) -> f64 {
    (v + HALF_EXTENT) / (2.0 * HALF_EXTENT) * 100.0
}

/// Pointer position normalized to [-1, 1] on both axes, y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (client_x / width * 2.0 - 1.0).clamp(-1.0, 1.0),
            y: (-(client_y / height) * 2.0 + 1.0).clamp(-1.0, 1.0),
        }
    }

    /// CSS transform tilting the field toward the pointer.
    pub fn tilt(&self) -> String {
        format!(
            "rotateX({:.2}deg) rotateY({:.2}deg)",
            self.y * MAX_TILT_DEG,
            self.x * MAX_TILT_DEG
        )
    }

    /// Top-left corner of the custom cursor dot, in px.
    pub fn cursor_origin(&self, width: f64, height: f64) -> (f64, f64) {
        (
            self.x * width / 2.0 + width / 2.0 - CURSOR_RADIUS,
            -self.y * height / 2.0 + height / 2.0 - CURSOR_RADIUS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate(7, 50), generate(7, 50));
        assert_ne!(generate(7, 50), generate(8, 50));
    }

    #[test]
    fn test_stars_stay_in_viewport() {
        let stars = generate(STAR_SEED, STAR_COUNT);
        assert_eq!(stars.len(), STAR_COUNT);
        for star in stars {
            assert!((0.0..=100.0).contains(&star.x));
            assert!((0.0..=100.0).contains(&star.y));
            assert!((0.0..=1.0).contains(&star.depth));
            assert!(star.opacity() <= 1.0);
        }
    }

    #[test]
    fn test_pointer_normalization() {
        let center = Pointer::from_client(500.0, 400.0, 1000.0, 800.0);
        assert_eq!(center, Pointer { x: 0.0, y: 0.0 });

        let top_left = Pointer::from_client(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(top_left, Pointer { x: -1.0, y: 1.0 });

        let bottom_right = Pointer::from_client(1000.0, 800.0, 1000.0, 800.0);
        assert_eq!(bottom_right, Pointer { x: 1.0, y: -1.0 });

        assert_eq!(Pointer::from_client(10.0, 10.0, 0.0, 0.0), Pointer::default());
    }

    #[test]
    fn test_cursor_follows_pointer() {
        let p = Pointer::from_client(300.0, 200.0, 1000.0, 800.0);
        let (x, y) = p.cursor_origin(1000.0, 800.0);
        assert!((x - 290.0).abs() < 1e-9);
        assert!((y - 190.0).abs() < 1e-9);
    }

    #[test]
    fn test_tilt() {
        let p = Pointer { x: 1.0, y: -0.5 };
        assert_eq!(p.tilt(), "rotateX(-4.00deg) rotateY(8.00deg)");
    }
}
