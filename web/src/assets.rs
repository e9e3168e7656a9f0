//! The two bundled raster assets. Decode failure is fatal at bootstrap;
//! there is no fallback art.

use spotlight_core::Raster;

const LADYBUG: &[u8] = include_bytes!("../assets/ladybug.png");
const SPOT_MASK: &[u8] = include_bytes!("../assets/spot_mask.png");

/// The hidden ladybug sprite.
pub(crate) fn hidden_image() -> Raster {
    Raster::decode_png(LADYBUG).expect("bundled ladybug sprite must decode")
}

/// The spotlight shape: an opaque disc on a transparent background.
pub(crate) fn spotlight_mask() -> Raster {
    Raster::decode_png(SPOT_MASK).expect("bundled spotlight mask must decode")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_assets_decode() {
        let image = hidden_image();
        assert_eq!((image.width(), image.height()), (96, 96));

        let mask = spotlight_mask();
        assert_eq!((mask.width(), mask.height()), (160, 160));
    }

    #[test]
    fn mask_is_an_opaque_disc_on_transparent_ground() {
        let mask = spotlight_mask();

        assert_eq!(mask.get(80, 80).alpha(), 255);
        assert_eq!(mask.get(0, 0).alpha(), 0);
        assert_eq!(mask.get(159, 159).alpha(), 0);
        assert_eq!(mask.get(80, 0).alpha(), 0);
    }
}
