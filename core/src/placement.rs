use rand::prelude::*;

use crate::{PointF, RectF, SizeU};

/// Picks where the hidden image lands within the view. A trait seam so
/// hosts inject a seeded source and tests script exact placements.
pub trait PlacementGenerator {
    /// Bounding rectangle for an `image`-sized raster placed within `view`.
    fn place(&mut self, view: SizeU, image: SizeU) -> RectF;
}

/// Uniform placement from a seedable RNG.
#[derive(Clone, Debug)]
pub struct RandomPlacement {
    rng: SmallRng,
}

impl RandomPlacement {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl PlacementGenerator for RandomPlacement {
    fn place(&mut self, view: SizeU, image: SizeU) -> RectF {
        let u: f32 = self.rng.random();
        let v: f32 = self.rng.random();
        placement_from_draws(u, v, view, image)
    }
}

/// Floor of a uniform `[0,1)` draw scaled by the available range per axis.
/// A view smaller than the image pins the placement to the origin instead
/// of sampling a negative range.
fn placement_from_draws(u: f32, v: f32, view: SizeU, image: SizeU) -> RectF {
    let range_x = view.width as f32 - image.width as f32;
    let range_y = view.height as f32 - image.height as f32;
    if range_x < 0.0 || range_y < 0.0 {
        log::warn!(
            "view {}x{} is smaller than the hidden image {}x{}, pinning placement to the origin",
            view.width,
            view.height,
            image.width,
            image.height
        );
    }

    let x = (u * range_x.max(0.0)).floor();
    let y = (v * range_y.max(0.0)).floor();
    RectF::from_origin_size(PointF::new(x, y), image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_draws_floor_into_the_available_range() {
        let rect = placement_from_draws(0.5, 0.2, SizeU::new(1000, 1000), SizeU::new(100, 100));

        assert_eq!(rect, RectF::new(450.0, 180.0, 550.0, 280.0));
    }

    #[test]
    fn placement_stays_within_view_bounds() {
        let cases = [
            (SizeU::new(1000, 1000), SizeU::new(100, 100)),
            (SizeU::new(320, 480), SizeU::new(96, 96)),
            (SizeU::new(96, 96), SizeU::new(96, 96)),
            (SizeU::new(97, 200), SizeU::new(96, 96)),
        ];

        for seed in 0..64 {
            let mut placer = RandomPlacement::from_seed(seed);
            for (view, image) in cases {
                let rect = placer.place(view, image);

                assert!(rect.left >= 0.0 && rect.top >= 0.0, "{rect:?}");
                assert!(rect.left <= (view.width - image.width) as f32, "{rect:?}");
                assert!(rect.top <= (view.height - image.height) as f32, "{rect:?}");
                assert_eq!(rect.width(), image.width as f32);
                assert_eq!(rect.height(), image.height as f32);
            }
        }
    }

    #[test]
    fn undersized_view_pins_placement_to_the_origin() {
        let rect = placement_from_draws(0.9, 0.9, SizeU::new(50, 50), SizeU::new(100, 100));

        assert_eq!(rect, RectF::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn same_seed_replays_the_same_placements() {
        let view = SizeU::new(800, 600);
        let image = SizeU::new(96, 96);

        let mut first = RandomPlacement::from_seed(7);
        let mut second = RandomPlacement::from_seed(7);
        for _ in 0..8 {
            assert_eq!(first.place(view, image), second.place(view, image));
        }
    }
}
