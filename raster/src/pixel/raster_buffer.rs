use super::u8_rgba::*;

///
/// A rectangular buffer of pixels, stored a row at a time from the top-left corner
///
/// Accessing a pixel outside of the buffer is a programming error and panics: coordinates are never
/// clamped or wrapped onto the next row.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RasterBuffer {
    width:  usize,
    height: usize,
    pixels: Vec<U8RgbaPixel>,
}

impl RasterBuffer {
    ///
    /// Creates a transparent buffer of the specified size
    ///
    pub fn new(width: usize, height: usize) -> RasterBuffer {
        RasterBuffer::filled(width, height, U8RgbaPixel::TRANSPARENT)
    }

    ///
    /// Creates a buffer where every pixel is set to the same value
    ///
    pub fn filled(width: usize, height: usize, pixel: U8RgbaPixel) -> RasterBuffer {
        RasterBuffer {
            width:  width,
            height: height,
            pixels: vec![pixel; width*height],
        }
    }

    #[inline] pub fn width(&self) -> usize  { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height, "Pixel ({}, {}) is outside of a {}x{} raster", x, y, self.width, self.height);

        y*self.width + x
    }

    ///
    /// Reads the pixel at the specified position
    ///
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> U8RgbaPixel {
        self.pixels[self.index(x, y)]
    }

    ///
    /// Writes the pixel at the specified position
    ///
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: U8RgbaPixel) {
        let idx = self.index(x, y);
        self.pixels[idx] = pixel;
    }

    ///
    /// Swaps the values of two pixels
    ///
    #[inline]
    pub fn swap_pixels(&mut self, a: (usize, usize), b: (usize, usize)) {
        let a = self.index(a.0, a.1);
        let b = self.index(b.0, b.1);

        self.pixels.swap(a, b);
    }

    ///
    /// All of the pixels in this buffer, a row at a time
    ///
    #[inline]
    pub fn pixels(&self) -> &[U8RgbaPixel] {
        &self.pixels
    }

    ///
    /// All of the pixels in this buffer as a mutable slice
    ///
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [U8RgbaPixel] {
        &mut self.pixels
    }

    ///
    /// Iterates over the rows of this buffer
    ///
    pub fn rows(&self) -> impl Iterator<Item=&[U8RgbaPixel]> {
        // chunks() panics on a zero chunk size, and a zero-width buffer has no rows to return anyway
        let width = self.width.max(1);
        self.pixels.chunks(width).take(if self.width == 0 { 0 } else { self.height })
    }

    ///
    /// Returns the pixels in this buffer as RGBA bytes (the format used by `TextureFormat::Rgba`)
    ///
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter()
            .flat_map(|pixel| pixel.get_components().to_vec())
            .collect()
    }

    ///
    /// Mirrors this buffer left-to-right
    ///
    /// For odd widths the middle column stays where it is.
    ///
    pub fn flip_x(&mut self) {
        let width = self.width;

        for y in 0..self.height {
            for x in 0..(width/2) {
                self.swap_pixels((x, y), (width-x-1, y));
            }
        }
    }

    ///
    /// Mirrors this buffer top-to-bottom
    ///
    /// For odd heights the middle row stays where it is.
    ///
    pub fn flip_y(&mut self) {
        let height = self.height;

        for x in 0..self.width {
            for y in 0..(height/2) {
                self.swap_pixels((x, y), (x, height-y-1));
            }
        }
    }
}
