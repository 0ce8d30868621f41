use super::render_context_trait::*;

use crate::pixel::*;

use flo_canvas::*;

use std::sync::*;

///
/// Renders raster images to a `flo_canvas` graphics context
///
/// Each raster that's drawn is uploaded as a new RGBA texture and used to fill a rectangle. Texture
/// IDs are handed out in sequence starting from a base ID: creating a new context with the same base
/// each frame reuses the same textures instead of allocating more. The canvas should be set up with
/// y increasing downwards (for example with `canvas_height(-height)` and a matching `center_region`)
/// so that images appear the same way up as they do in their buffers.
///
pub struct CanvasRenderContext<'a, TGc>
where
    TGc: GraphicsContext,
{
    gc:             &'a mut TGc,
    first_texture:  u64,
    next_texture:   u64,
}

impl<'a, TGc> CanvasRenderContext<'a, TGc>
where
    TGc: GraphicsContext,
{
    ///
    /// Creates a render context that draws to a graphics context, allocating textures from the specified ID upwards
    ///
    pub fn new(gc: &'a mut TGc, first_texture: TextureId) -> Self {
        let TextureId(first_texture) = first_texture;

        CanvasRenderContext {
            gc:             gc,
            first_texture:  first_texture,
            next_texture:   first_texture,
        }
    }

    ///
    /// The number of textures that have been used by this context so far
    ///
    pub fn texture_count(&self) -> u64 {
        self.next_texture - self.first_texture
    }

    fn allocate_texture(&mut self) -> TextureId {
        let texture_id      = TextureId(self.next_texture);
        self.next_texture   += 1;

        texture_id
    }
}

impl<'a, TGc> RenderContext for CanvasRenderContext<'a, TGc>
where
    TGc: GraphicsContext,
{
    fn draw_raster(&mut self, raster: &RasterBuffer, x: i32, y: i32, width: usize, height: usize) {
        if raster.width() == 0 || raster.height() == 0 {
            return;
        }

        let texture_id  = self.allocate_texture();
        let tex_width   = raster.width() as u32;
        let tex_height  = raster.height() as u32;
        let bytes       = Arc::new(raster.to_rgba_bytes());

        let (x1, y1)    = (x as f32, y as f32);
        let (x2, y2)    = (x1 + width as f32, y1 + height as f32);

        self.gc.create_texture(texture_id, tex_width, tex_height, TextureFormat::Rgba);
        self.gc.set_texture_bytes(texture_id, 0, 0, tex_width, tex_height, bytes);

        self.gc.new_path();
        self.gc.rect(x1, y1, x2, y2);
        self.gc.fill_texture(texture_id, x1, y1, x2, y2);
        self.gc.fill();
    }

    fn draw_marker(&mut self, center_x: f64, center_y: f64, diameter: f64, color: U8RgbaPixel) {
        self.gc.new_path();
        self.gc.circle(center_x as f32, center_y as f32, (diameter/2.0) as f32);
        self.gc.stroke_color(color.to_color());
        self.gc.line_width(1.0);
        self.gc.stroke();
    }
}
