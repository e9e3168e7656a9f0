use ndarray::Array2;

use crate::{Result, SizeU};

/// A single straight-alpha RGBA pixel, 8 bits per channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba([0, 0, 0, 0]);
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);

    pub const fn alpha(self) -> u8 {
        self.0[3]
    }

    pub const fn with_alpha(self, alpha: u8) -> Rgba {
        Rgba([self.0[0], self.0[1], self.0[2], alpha])
    }

    /// Source-over composite of `self` on top of `dst`.
    pub fn over(self, dst: Rgba) -> Rgba {
        let sa = self.alpha() as u32;
        if sa == 255 {
            return self;
        }
        if sa == 0 {
            return dst;
        }

        let da = dst.alpha() as u32;
        let inv = 255 - sa;
        let out_a = sa + (da * inv + 127) / 255;
        if out_a == 0 {
            return Rgba::TRANSPARENT;
        }

        let channel = |s: u8, d: u8| -> u8 {
            let s = s as u32;
            let d = d as u32;
            (((s * sa + d * da * inv / 255) + out_a / 2) / out_a) as u8
        };
        Rgba([
            channel(self.0[0], dst.0[0]),
            channel(self.0[1], dst.0[1]),
            channel(self.0[2], dst.0[2]),
            out_a as u8,
        ])
    }
}

/// An owned 2D grid of RGBA pixels, indexed `(x, y)` from the top-left.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    px: Array2<Rgba>,
}

impl Raster {
    /// A fully transparent raster of the given size.
    pub fn new(size: SizeU) -> Self {
        Self::filled(size, Rgba::TRANSPARENT)
    }

    pub fn filled(size: SizeU, color: Rgba) -> Self {
        Self {
            px: Array2::from_elem((size.height as usize, size.width as usize), color),
        }
    }

    /// Decode a bundled PNG asset into a straight-alpha raster.
    pub fn decode_png(bytes: &[u8]) -> Result<Raster> {
        let decoded = image::load_from_memory(bytes)?.into_rgba8();
        let (width, height) = decoded.dimensions();
        let pixels = decoded
            .into_raw()
            .chunks_exact(4)
            .map(|c| Rgba([c[0], c[1], c[2], c[3]]))
            .collect();
        let px = Array2::from_shape_vec((height as usize, width as usize), pixels)
            .expect("decoded buffer matches its declared dimensions");
        Ok(Self { px })
    }

    pub fn size(&self) -> SizeU {
        let (rows, cols) = self.px.dim();
        SizeU::new(cols as u32, rows as u32)
    }

    pub fn width(&self) -> u32 {
        self.size().width
    }

    pub fn height(&self) -> u32 {
        self.size().height
    }

    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.px[(y as usize, x as usize)]
    }

    pub fn put(&mut self, x: u32, y: u32, color: Rgba) {
        self.px[(y as usize, x as usize)] = color;
    }

    pub fn fill(&mut self, color: Rgba) {
        self.px.fill(color);
    }

    /// Source-over blit of `src` with its top-left corner at `(left, top)`,
    /// clipped to this raster's bounds.
    pub fn blit_over(&mut self, src: &Raster, left: i32, top: i32) {
        let (width, height) = (self.width() as i64, self.height() as i64);
        for sy in 0..src.height() {
            let dy = top as i64 + sy as i64;
            if dy < 0 || dy >= height {
                continue;
            }
            for sx in 0..src.width() {
                let dx = left as i64 + sx as i64;
                if dx < 0 || dx >= width {
                    continue;
                }
                let (dx, dy) = (dx as u32, dy as u32);
                self.put(dx, dy, src.get(sx, sy).over(self.get(dx, dy)));
            }
        }
    }

    /// Flatten to canvas-ready RGBA bytes, row-major from the top-left.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.px.iter().flat_map(|p| p.0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_keeps_opaque_source_and_transparent_destination() {
        let red = Rgba([200, 0, 0, 255]);
        let blue = Rgba([0, 0, 200, 255]);

        assert_eq!(red.over(blue), red);
        assert_eq!(Rgba::TRANSPARENT.over(blue), blue);
    }

    #[test]
    fn over_mixes_half_transparent_source() {
        let half_black = Rgba::BLACK.with_alpha(128);
        let out = half_black.over(Rgba::WHITE);

        assert_eq!(out.alpha(), 255);
        // 255 * (255 - 128) / 255, within rounding
        assert!((out.0[0] as i32 - 127).abs() <= 1);
    }

    #[test]
    fn blit_clips_to_destination_bounds() {
        let mut dst = Raster::filled(SizeU::new(4, 4), Rgba::WHITE);
        let src = Raster::filled(SizeU::new(3, 3), Rgba::BLACK);

        dst.blit_over(&src, -1, -1);

        assert_eq!(dst.get(0, 0), Rgba::BLACK);
        assert_eq!(dst.get(1, 1), Rgba::BLACK);
        assert_eq!(dst.get(2, 0), Rgba::WHITE);
        assert_eq!(dst.get(0, 2), Rgba::WHITE);
        assert_eq!(dst.get(3, 3), Rgba::WHITE);
    }

    #[test]
    fn rgba_bytes_are_row_major() {
        let mut raster = Raster::filled(SizeU::new(2, 2), Rgba::TRANSPARENT);
        raster.put(1, 0, Rgba([1, 2, 3, 4]));

        let bytes = raster.to_rgba_bytes();

        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[4..8], &[1, 2, 3, 4]);
    }
}
