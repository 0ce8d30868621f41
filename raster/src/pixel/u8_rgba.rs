use flo_canvas::{Color};

///
/// An RGBA pixel as a set of u8 values
///
/// Unlike the frame buffers used for rendering, the alpha value is not pre-multiplied: rasterized
/// shapes are always either fully opaque or fully transparent, and filters expect to be able to
/// read back the colour of a pixel exactly as it was written.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct U8RgbaPixel(pub [u8; 4]);

impl U8RgbaPixel {
    /// A fully transparent pixel
    pub const TRANSPARENT: U8RgbaPixel = U8RgbaPixel([0, 0, 0, 0]);

    ///
    /// Creates a new pixel from the component bytes
    ///
    #[inline]
    pub fn from_components(components: [u8; 4]) -> Self {
        U8RgbaPixel(components)
    }

    ///
    /// Creates an opaque pixel with the specified colour
    ///
    #[inline]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        U8RgbaPixel([r, g, b, 255])
    }

    ///
    /// Retrieves the RGBA values from this pixel
    ///
    #[inline]
    pub fn get_components(&self) -> [u8; 4] {
        self.0
    }

    #[inline] pub fn red(&self) -> u8   { self.0[0] }
    #[inline] pub fn green(&self) -> u8 { self.0[1] }
    #[inline] pub fn blue(&self) -> u8  { self.0[2] }
    #[inline] pub fn alpha(&self) -> u8 { self.0[3] }

    ///
    /// True if this pixel has no coverage at all
    ///
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.0[3] == 0
    }

    ///
    /// Returns this colour with a different alpha value
    ///
    #[inline]
    pub fn with_alpha(&self, alpha: u8) -> Self {
        let [r, g, b, _] = self.0;
        U8RgbaPixel([r, g, b, alpha])
    }

    ///
    /// Blends this pixel over a destination pixel
    ///
    pub fn source_over(self, dest: U8RgbaPixel) -> U8RgbaPixel {
        match (self.alpha(), dest.alpha()) {
            (255, _)    => self,
            (0, _)      => dest,
            (_, 0)      => self,

            (src_alpha, dest_alpha) => {
                let src_alpha   = (src_alpha as f32) / 255.0;
                let dest_alpha  = (dest_alpha as f32) / 255.0;
                let out_alpha   = src_alpha + dest_alpha * (1.0-src_alpha);

                let blend       = |src: u8, dest: u8| {
                    let src     = src as f32;
                    let dest    = dest as f32;
                    let val     = (src*src_alpha + dest*dest_alpha*(1.0-src_alpha)) / out_alpha;

                    val.round().clamp(0.0, 255.0) as u8
                };

                U8RgbaPixel([
                    blend(self.0[0], dest.0[0]),
                    blend(self.0[1], dest.0[1]),
                    blend(self.0[2], dest.0[2]),
                    (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8
                ])
            }
        }
    }

    ///
    /// Converts this pixel into a canvas colour
    ///
    pub fn to_color(&self) -> Color {
        let [r, g, b, a] = self.0;

        Color::Rgba((r as f32)/255.0, (g as f32)/255.0, (b as f32)/255.0, (a as f32)/255.0)
    }
}

impl Default for U8RgbaPixel {
    #[inline]
    fn default() -> Self {
        U8RgbaPixel::TRANSPARENT
    }
}

impl From<U8RgbaPixel> for Color {
    #[inline]
    fn from(pixel: U8RgbaPixel) -> Color {
        pixel.to_color()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn opaque_source_replaces_dest() {
        let red     = U8RgbaPixel::rgb(255, 0, 0);
        let blue    = U8RgbaPixel::rgb(0, 0, 255);

        assert!(red.source_over(blue) == red);
    }

    #[test]
    fn transparent_source_keeps_dest() {
        let blue    = U8RgbaPixel::rgb(0, 0, 255);

        assert!(U8RgbaPixel::TRANSPARENT.source_over(blue) == blue);
    }

    #[test]
    fn half_alpha_blends_evenly() {
        let red     = U8RgbaPixel::rgb(255, 0, 0).with_alpha(128);
        let blue    = U8RgbaPixel::rgb(0, 0, 255);
        let blended = red.source_over(blue);

        assert!(blended.alpha() == 255);
        assert!((blended.red() as i32 - 128).abs() <= 1);
        assert!((blended.blue() as i32 - 127).abs() <= 1);
    }
}
