use crate::foundation::error::{ImgRomError, ImgRomResult};

/// One straight (non-premultiplied) 8-bit RGB pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as a 24-bit word, red in the most significant byte.
    pub const fn pack(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Inverse of [`Rgb8::pack`]. Bits above 23 are ignored.
    pub const fn unpack(word: u32) -> Self {
        Self {
            r: ((word >> 16) & 0xFF) as u8,
            g: ((word >> 8) & 0xFF) as u8,
            b: (word & 0xFF) as u8,
        }
    }
}

/// A canonical frame: tightly packed RGB8, row-major, origin at the top-left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgb {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgb {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> ImgRomResult<Self> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(ImgRomError::validation(format!(
                "frame data size mismatch: got {} bytes, expected {expected} for {width}x{height} rgb8",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn filled(width: u32, height: u32, px: Rgb8) -> Self {
        Self::from_fn(width, height, |_, _| px)
    }

    /// Build a frame by sampling `f(x, y)` in row-major order.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb8) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for y in 0..height {
            for x in 0..width {
                let px = f(x, y);
                data.extend_from_slice(&[px.r, px.g, px.b]);
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`. Use [`FrameRgb::get`] for a checked read.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} frame",
            self.width,
            self.height
        );
        let off = (y as usize * self.width as usize + x as usize) * 3;
        Rgb8::new(self.data[off], self.data[off + 1], self.data[off + 2])
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb8> {
        (x < self.width && y < self.height).then(|| self.pixel(x, y))
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.data
            .chunks_exact(3)
            .map(|px| Rgb8::new(px[0], px[1], px[2]))
    }
}

/// Minimum bit width able to index `count` distinct cells (`0..count`).
///
/// A port is never narrower than one bit, so `count <= 2` yields 1.
pub fn bits_for(count: u64) -> u32 {
    if count <= 2 {
        1
    } else {
        u64::BITS - (count - 1).leading_zeros()
    }
}

/// Raster and frame count of one ROM. Every width derived for the generated
/// ports comes from this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RomGeometry {
    pub width: u32,
    pub height: u32,
    pub frames: u32,
}

impl RomGeometry {
    pub fn new(width: u32, height: u32, frames: u32) -> ImgRomResult<Self> {
        if width == 0 || height == 0 {
            return Err(ImgRomError::validation(
                "rom width/height must be non-zero",
            ));
        }
        if frames == 0 {
            return Err(ImgRomError::validation("rom frame count must be non-zero"));
        }
        let geom = Self {
            width,
            height,
            frames,
        };
        // Addresses are printed and iterated as u64; reject anything that would wrap.
        u64::from(width)
            .checked_mul(u64::from(height))
            .and_then(|px| px.checked_mul(u64::from(frames)))
            .ok_or_else(|| ImgRomError::validation("rom depth overflows u64"))?;
        Ok(geom)
    }

    /// Cells per frame (`W * H`).
    pub fn frame_pixels(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Total cells (`W * H * F`).
    pub fn depth(self) -> u64 {
        self.frame_pixels() * u64::from(self.frames)
    }

    pub fn last_address(self) -> u64 {
        self.depth() - 1
    }

    pub fn addr_bits(self) -> u32 {
        bits_for(self.depth())
    }

    /// Width of the `frame` select port, or `None` for single-frame ROMs.
    pub fn frame_bits(self) -> Option<u32> {
        (self.frames > 1).then(|| bits_for(u64::from(self.frames)))
    }

    pub fn is_multi_frame(self) -> bool {
        self.frames > 1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
