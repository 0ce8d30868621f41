use super::render_context_trait::*;

use crate::pixel::*;

///
/// A render target that composites raster images into a frame buffer in memory
///
/// Images are blended over the existing contents of the frame (using source-over blending) and are
/// clipped to the edges of the frame. If an image is drawn at a different size to its buffer it's
/// scaled using the nearest pixel.
///
#[derive(Clone, Debug, PartialEq)]
pub struct RasterFrame {
    buffer: RasterBuffer,
}

impl RasterFrame {
    ///
    /// Creates a transparent frame of the specified size
    ///
    pub fn new(width: usize, height: usize) -> Self {
        RasterFrame { buffer: RasterBuffer::new(width, height) }
    }

    ///
    /// Creates a frame where every pixel is set to a background colour
    ///
    pub fn with_background(width: usize, height: usize, background: U8RgbaPixel) -> Self {
        RasterFrame { buffer: RasterBuffer::filled(width, height, background) }
    }

    #[inline] pub fn width(&self) -> usize  { self.buffer.width() }
    #[inline] pub fn height(&self) -> usize { self.buffer.height() }

    ///
    /// The pixels that have been rendered to this frame
    ///
    #[inline]
    pub fn buffer(&self) -> &RasterBuffer {
        &self.buffer
    }

    ///
    /// Reads a single pixel of the frame
    ///
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> U8RgbaPixel {
        self.buffer.pixel(x, y)
    }

    ///
    /// Blends a pixel into the frame, ignoring any position that's outside of the frame
    ///
    #[inline]
    fn blend_pixel(&mut self, x: i64, y: i64, pixel: U8RgbaPixel) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }

        let (x, y)  = (x as usize, y as usize);
        let dest    = self.buffer.pixel(x, y);
        self.buffer.set_pixel(x, y, pixel.source_over(dest));
    }
}

impl RenderContext for RasterFrame {
    fn draw_raster(&mut self, raster: &RasterBuffer, x: i32, y: i32, width: usize, height: usize) {
        if raster.width() == 0 || raster.height() == 0 {
            return;
        }

        // Only visit the part of the target rectangle that overlaps the frame
        let min_y = (y as i64).max(0);
        let max_y = (y as i64 + height as i64).min(self.height() as i64);
        let min_x = (x as i64).max(0);
        let max_x = (x as i64 + width as i64).min(self.width() as i64);

        for target_y in min_y..max_y {
            let src_y = (((target_y - y as i64) as usize) * raster.height()) / height;

            for target_x in min_x..max_x {
                let src_x = (((target_x - x as i64) as usize) * raster.width()) / width;

                self.blend_pixel(target_x, target_y, raster.pixel(src_x, src_y));
            }
        }
    }

    fn draw_marker(&mut self, center_x: f64, center_y: f64, diameter: f64, color: U8RgbaPixel) {
        // Midpoint circle algorithm, plotting each point once per octant
        let cx          = center_x.floor() as i64;
        let cy          = center_y.floor() as i64;
        let radius      = (diameter/2.0).round() as i64;

        if radius <= 0 {
            self.blend_pixel(cx, cy, color);
            return;
        }

        let mut x       = radius;
        let mut y       = 0;
        let mut err     = 1 - radius;
        let mut plotted = vec![];

        while x >= y {
            plotted.extend_from_slice(&[
                (cx+x, cy+y), (cx+y, cy+x), (cx-y, cy+x), (cx-x, cy+y),
                (cx-x, cy-y), (cx-y, cy-x), (cx+y, cy-x), (cx+x, cy-y),
            ]);

            y += 1;
            if err < 0 {
                err += 2*y + 1;
            } else {
                x   -= 1;
                err += 2*(y - x) + 1;
            }
        }

        // Octants overlap on the diagonals and axes: blending the same point twice would darken it
        plotted.sort();
        plotted.dedup();

        for (px, py) in plotted {
            self.blend_pixel(px, py, color);
        }
    }
}

#[cfg(feature = "render_png")]
mod render_png {
    use super::*;
    use crate::error::*;

    use std::io::{Write, BufWriter};

    impl RasterFrame {
        ///
        /// Writes this frame to a stream as an 8-bit RGBA PNG file
        ///
        pub fn write_png<TStream>(&self, target: TStream) -> Result<(), RasterError>
        where
            TStream: Write,
        {
            let mut encoder = png::Encoder::new(BufWriter::new(target), self.width() as u32, self.height() as u32);

            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer  = encoder.write_header()?;
            writer.write_image_data(&self.buffer.to_rgba_bytes())?;

            Ok(())
        }
    }
}
