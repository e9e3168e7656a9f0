use crate::{GameError, PointF, Raster, Result, Rgba, SizeU};

/// Porter-Duff DST_OUT over a solid `fill`: the result keeps the fill where
/// `mask` is transparent and is erased where `mask` is opaque. On
/// straight-alpha pixels this scales the destination alpha by the mask's
/// transparency.
pub fn punch_out(fill: Rgba, mask: &Raster) -> Result<Raster> {
    if mask.size().is_empty() {
        return Err(GameError::EmptyMask);
    }

    let mut out = Raster::filled(mask.size(), fill);
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            let inv = 255 - mask.get(x, y).alpha() as u32;
            let dst = out.get(x, y);
            let alpha = (dst.alpha() as u32 * inv + 127) / 255;
            out.put(x, y, dst.with_alpha(alpha as u8));
        }
    }
    Ok(out)
}

/// The composited spotlight source: an immutable punched-out raster that is
/// repositioned by translation and sampled with clamp-to-edge tiling, so
/// every view pixel outside its bounds reads as the nearest edge pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskSource {
    px: Raster,
    origin: PointF,
}

impl MaskSource {
    /// Build the source once from the mask raster; see [`punch_out`].
    pub fn new(fill: Rgba, mask: &Raster) -> Result<Self> {
        Ok(Self {
            px: punch_out(fill, mask)?,
            origin: PointF::default(),
        })
    }

    pub fn size(&self) -> SizeU {
        self.px.size()
    }

    pub fn origin(&self) -> PointF {
        self.origin
    }

    /// Translate so the mask is centered on `center`.
    pub fn center_on(&mut self, center: PointF) {
        let size = self.size();
        self.origin = PointF::new(
            center.x - size.width as f32 / 2.0,
            center.y - size.height as f32 / 2.0,
        );
    }

    /// Sample the source at view coordinates under the current translation.
    pub fn sample(&self, x: u32, y: u32) -> Rgba {
        let size = self.size();
        let mx = ((x as f32 - self.origin.x).floor() as i64).clamp(0, size.width as i64 - 1);
        let my = ((y as f32 - self.origin.y).floor() as i64).clamp(0, size.height as i64 - 1);
        self.px.get(mx as u32, my as u32)
    }

    /// Source-over composite across the whole `frame`.
    pub fn composite_over(&self, frame: &mut Raster) {
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                frame.put(x, y, self.sample(x, y).over(frame.get(x, y)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x3 mask raster: opaque center, transparent everywhere else.
    fn pinhole_mask() -> Raster {
        let mut mask = Raster::new(SizeU::new(3, 3));
        mask.put(1, 1, Rgba::WHITE);
        mask
    }

    #[test]
    fn punch_out_erases_where_mask_is_opaque() {
        let punched = punch_out(Rgba::BLACK, &pinhole_mask()).unwrap();

        assert_eq!(punched.get(1, 1).alpha(), 0);
        assert_eq!(punched.get(0, 0), Rgba::BLACK);
        assert_eq!(punched.get(2, 2), Rgba::BLACK);
    }

    #[test]
    fn punch_out_scales_partial_mask_alpha() {
        let mut mask = Raster::new(SizeU::new(1, 1));
        mask.put(0, 0, Rgba::WHITE.with_alpha(128));

        let punched = punch_out(Rgba::BLACK, &mask).unwrap();

        assert_eq!(punched.get(0, 0).alpha(), 127);
    }

    #[test]
    fn punch_out_rejects_empty_mask() {
        let empty = Raster::new(SizeU::new(0, 3));

        assert!(matches!(
            punch_out(Rgba::BLACK, &empty),
            Err(GameError::EmptyMask)
        ));
    }

    #[test]
    fn translation_centers_the_cutout_on_the_pointer() {
        let mut source = MaskSource::new(Rgba::BLACK, &pinhole_mask()).unwrap();

        source.center_on(PointF::new(10.0, 7.0));

        // The cutout pixel sits exactly under the pointer.
        assert_eq!(source.sample(10, 7).alpha(), 0);
        assert_eq!(source.sample(9, 7), Rgba::BLACK);
        assert_eq!(source.sample(10, 8), Rgba::BLACK);
    }

    #[test]
    fn sampling_clamps_to_the_edge_pixels() {
        let mut source = MaskSource::new(Rgba::BLACK, &pinhole_mask()).unwrap();
        source.center_on(PointF::new(100.0, 100.0));

        // Far away from the mask bounds everything reads as the opaque edge.
        assert_eq!(source.sample(0, 0), Rgba::BLACK);
        assert_eq!(source.sample(500, 0), Rgba::BLACK);
    }
}
