use flo_skeleton::*;
use flo_skeleton::raster::*;

use tracing::{info};
use tracing_subscriber::{FmtSubscriber};

use std::fs;
use std::sync::*;

///
/// Builds a stick figure, bends its arm a few times and writes each pose to a PNG file
///
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let scale       = RenderScale::new(2.0)?;
    let skin        = U8RgbaPixel::rgb(240, 200, 160);
    let shirt       = U8RgbaPixel::rgb(40, 90, 200);
    let outline     = Arc::new(OutlineFilter::with_color(U8RgbaPixel::rgb(20, 20, 20)));

    // Body with a head above it
    let mut hips    = Joint::new(160.0, 200.0);
    let mut torso   = RasterImage::new(Arc::new(Rectangle::new(0.0, 0.0, 12.0, 40.0)), shirt, scale)?;
    torso.add_filter(outline.clone());
    hips.add_image(torso);

    let neck        = hips.new_child(0.0, -50.0);
    let mut head    = RasterImage::new(Arc::new(Ellipse::circle(0.0, 0.0, 10.0)), skin, scale)?;
    head.add_filter(outline.clone());
    neck.add_image(head);

    // Arm: shoulder, elbow and hand
    let shoulder    = hips.new_child(0.0, -30.0);
    let elbow       = shoulder.new_child(30.0, 0.0);
    let mut forearm = RasterImage::new(Arc::new(Rectangle::new(0.0, 0.0, 24.0, 5.0)), skin, scale)?;
    forearm.add_filter(outline.clone());
    elbow.add_image(forearm);
    elbow.new_child(30.0, 0.0).add_image(RasterImage::new(Arc::new(Ellipse::circle(0.0, 0.0, 4.0)), skin, scale)?);

    fs::create_dir_all("stick_figure")?;

    for frame_num in 0..4 {
        let mut frame = RasterFrame::with_background(320, 320, U8RgbaPixel::rgb(255, 255, 255));
        hips.render_subtree(&mut frame, true);

        let filename = format!("stick_figure/pose_{}.png", frame_num);
        frame.write_png(fs::File::create(&filename)?)?;
        info!(filename = filename.as_str(), "Wrote pose");

        // Raise the arm a little further each frame
        hips.children_mut()[1].rotate(-30.0)?;
    }

    let metrics = RasterMetrics::global().snapshot();
    info!(images = metrics.images_created, rasterizations = metrics.rasterizations, "Finished");

    Ok(())
}
