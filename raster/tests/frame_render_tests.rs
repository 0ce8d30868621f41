use flo_raster::*;
use flo_raster::canvas::*;

fn red() -> U8RgbaPixel {
    U8RgbaPixel::rgb(255, 0, 0)
}

fn solid(width: usize, height: usize, color: U8RgbaPixel) -> RasterBuffer {
    RasterBuffer::filled(width, height, color)
}

#[test]
pub fn new_frame_is_transparent() {
    let frame = RasterFrame::new(8, 4);

    assert!(frame.width() == 8);
    assert!(frame.height() == 4);
    assert!(frame.buffer().pixels().iter().all(|pixel| pixel.is_transparent()));
}

#[test]
pub fn draw_raster_copies_opaque_pixels() {
    let mut frame = RasterFrame::with_background(10, 10, U8RgbaPixel::rgb(255, 255, 255));

    frame.draw_raster(&solid(3, 2, red()), 4, 5, 3, 2);

    assert!(frame.pixel(4, 5) == red());
    assert!(frame.pixel(6, 6) == red());
    assert!(frame.pixel(7, 5) == U8RgbaPixel::rgb(255, 255, 255));
    assert!(frame.pixel(4, 7) == U8RgbaPixel::rgb(255, 255, 255));
}

#[test]
pub fn transparent_pixels_leave_background() {
    let background  = U8RgbaPixel::rgb(10, 20, 30);
    let mut frame   = RasterFrame::with_background(4, 4, background);

    frame.draw_raster(&RasterBuffer::new(4, 4), 0, 0, 4, 4);

    assert!(frame.buffer().pixels().iter().all(|pixel| *pixel == background));
}

#[test]
pub fn draw_raster_is_clipped() {
    let mut frame = RasterFrame::new(4, 4);

    frame.draw_raster(&solid(4, 4, red()), -2, -2, 4, 4);
    frame.draw_raster(&solid(4, 4, red()), 3, 3, 4, 4);

    assert!(frame.pixel(0, 0) == red());
    assert!(frame.pixel(1, 1) == red());
    assert!(frame.pixel(2, 2) == U8RgbaPixel::TRANSPARENT);
    assert!(frame.pixel(3, 3) == red());
    assert!(frame.pixel(3, 0) == U8RgbaPixel::TRANSPARENT);
}

#[test]
pub fn draw_raster_entirely_outside_frame() {
    let mut frame = RasterFrame::new(4, 4);

    frame.draw_raster(&solid(4, 4, red()), 10, 10, 4, 4);
    frame.draw_raster(&solid(4, 4, red()), -10, 0, 4, 4);

    assert!(frame.buffer().pixels().iter().all(|pixel| pixel.is_transparent()));
}

#[test]
pub fn draw_raster_scales_to_target_size() {
    let mut source  = RasterBuffer::new(2, 1);
    source.set_pixel(0, 0, red());
    source.set_pixel(1, 0, U8RgbaPixel::rgb(0, 0, 255));

    let mut frame   = RasterFrame::new(4, 2);
    frame.draw_raster(&source, 0, 0, 4, 2);

    assert!(frame.pixel(0, 0) == red());
    assert!(frame.pixel(1, 1) == red());
    assert!(frame.pixel(2, 0) == U8RgbaPixel::rgb(0, 0, 255));
    assert!(frame.pixel(3, 1) == U8RgbaPixel::rgb(0, 0, 255));
}

#[test]
pub fn translucent_pixels_are_blended() {
    let mut frame   = RasterFrame::with_background(1, 1, U8RgbaPixel::rgb(0, 0, 255));

    frame.draw_raster(&solid(1, 1, red().with_alpha(128)), 0, 0, 1, 1);

    let pixel       = frame.pixel(0, 0);
    assert!(pixel.alpha() == 255);
    assert!(pixel.red() > 100 && pixel.red() < 155);
    assert!(pixel.blue() > 100 && pixel.blue() < 155);
}

#[test]
pub fn marker_draws_ring() {
    let mut frame = RasterFrame::new(20, 20);

    frame.draw_marker(10.0, 10.0, DEBUG_MARKER_DIAMETER, DEBUG_MARKER_COLOR);

    // Radius 3 ring around (10, 10): the axis points are on the ring and the center is empty
    assert!(frame.pixel(13, 10) == DEBUG_MARKER_COLOR);
    assert!(frame.pixel(7, 10) == DEBUG_MARKER_COLOR);
    assert!(frame.pixel(10, 13) == DEBUG_MARKER_COLOR);
    assert!(frame.pixel(10, 7) == DEBUG_MARKER_COLOR);
    assert!(frame.pixel(10, 10) == U8RgbaPixel::TRANSPARENT);
    assert!(frame.pixel(0, 0) == U8RgbaPixel::TRANSPARENT);
}

#[test]
pub fn translucent_marker_is_blended_once() {
    let mut frame   = RasterFrame::new(20, 20);
    let faint_green = DEBUG_MARKER_COLOR.with_alpha(128);

    frame.draw_marker(10.0, 10.0, 6.0, faint_green);

    // Points shared between octants are only blended once
    assert!(frame.pixel(13, 10) == faint_green);
    assert!(frame.pixel(10, 13) == faint_green);
}

#[test]
pub fn marker_near_edge_is_clipped() {
    let mut frame = RasterFrame::new(4, 4);

    frame.draw_marker(0.0, 0.0, 6.0, DEBUG_MARKER_COLOR);

    assert!(frame.pixel(3, 0) == DEBUG_MARKER_COLOR);
    assert!(frame.pixel(0, 3) == DEBUG_MARKER_COLOR);
}

#[test]
#[cfg(feature = "render_png")]
pub fn write_frame_as_png() {
    let mut frame   = RasterFrame::new(16, 8);
    frame.draw_raster(&solid(4, 4, red()), 2, 2, 4, 4);

    let mut png     = vec![];
    frame.write_png(&mut png).unwrap();

    assert!(png.len() > 8);
    assert!(&png[0..8] == &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
}

#[test]
pub fn canvas_context_fills_with_texture() {
    let mut drawing: Vec<Draw> = vec![];

    {
        let mut context = CanvasRenderContext::new(&mut drawing, TextureId(100));
        context.draw_raster(&solid(3, 3, red()), 10, 20, 3, 3);
        context.draw_raster(&solid(2, 2, red()), 0, 0, 2, 2);

        assert!(context.texture_count() == 2);
    }

    let textures = drawing.iter()
        .filter_map(|draw| match draw {
            Draw::Texture(TextureId(id), _) => Some(*id),
            _                               => None
        })
        .collect::<Vec<_>>();

    assert!(textures.contains(&100));
    assert!(textures.contains(&101));
    assert!(!textures.contains(&102));
    assert!(drawing.iter().filter(|draw| **draw == Draw::Fill).count() == 2);
}

#[test]
pub fn canvas_context_strokes_marker() {
    let mut drawing: Vec<Draw> = vec![];

    {
        let mut context = CanvasRenderContext::new(&mut drawing, TextureId(0));
        context.draw_marker(5.0, 5.0, DEBUG_MARKER_DIAMETER, DEBUG_MARKER_COLOR);

        assert!(context.texture_count() == 0);
    }

    assert!(drawing.contains(&Draw::Stroke));
    assert!(drawing.contains(&Draw::StrokeColor(DEBUG_MARKER_COLOR.to_color())));
    assert!(!drawing.contains(&Draw::Fill));
}

#[test]
pub fn image_renders_through_canvas_context() {
    let image       = RasterImage::from_shape(Rectangle::new(0.0, 0.0, 4.0, 4.0), red(), RenderScale(1.0)).unwrap();
    let mut drawing: Vec<Draw> = vec![];

    image.render(&mut CanvasRenderContext::new(&mut drawing, TextureId(1)), false);

    assert!(drawing.contains(&Draw::Fill));
}
