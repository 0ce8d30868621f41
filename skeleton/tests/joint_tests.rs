use flo_skeleton::*;
use flo_skeleton::raster::*;

use std::sync::*;

fn close(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0-b.0).abs() < 1e-9 && (a.1-b.1).abs() < 1e-9
}

fn bar(width: f64, height: f64) -> RasterImage {
    RasterImage::new(Arc::new(Rectangle::new(0.0, 0.0, width, height)), U8RgbaPixel::rgb(200, 40, 40), RenderScale(1.0)).unwrap()
}

#[test]
pub fn quarter_turn_moves_child_below_pivot() {
    let radius      = 25.0;
    let mut root    = Joint::new(40.0, 60.0);
    root.new_child(radius, 0.0);

    root.rotate(90.0).unwrap();

    assert!(close(root.position(), (40.0, 60.0)));
    assert!(close(root.children()[0].position(), (40.0, 60.0 + radius)));
}

#[test]
pub fn half_turn_moves_child_to_other_side() {
    let mut root    = Joint::new(100.0, 100.0);
    let child       = root.new_child(50.0, 0.0);
    assert!(child.position() == (150.0, 100.0));

    root.rotate(180.0).unwrap();

    assert!(close(root.children()[0].position(), (50.0, 100.0)));
}

#[test]
pub fn whole_chain_rotates_about_root() {
    let mut root    = Joint::new(0.0, 0.0);
    root.new_child(10.0, 0.0)
        .new_child(10.0, 0.0)
        .new_child(10.0, 0.0)
        .new_child(10.0, 0.0);

    root.rotate(90.0).unwrap();

    let mut joint   = &root;
    let mut depth   = 0.0;
    while let Some(child) = joint.children().get(0) {
        depth += 10.0;
        assert!(close(child.position(), (0.0, depth)));
        joint = child;
    }

    assert!(depth == 40.0);
}

#[test]
pub fn rotating_a_child_leaves_parent_alone() {
    let mut root    = Joint::new(0.0, 0.0);
    root.new_child(10.0, 0.0).new_child(10.0, 0.0);

    root.children_mut()[0].rotate(-90.0).unwrap();

    assert!(close(root.position(), (0.0, 0.0)));
    assert!(close(root.children()[0].position(), (10.0, 0.0)));
    assert!(close(root.children()[0].children()[0].position(), (10.0, -10.0)));
}

#[test]
pub fn rotation_regenerates_every_image() {
    let mut root    = Joint::new(50.0, 50.0);
    root.add_image(bar(20.0, 4.0));
    root.new_child(20.0, 0.0).add_image(bar(20.0, 4.0));

    root.rotate(90.0).unwrap();

    let root_image  = &root.images()[0];
    let child_image = &root.children()[0].images()[0];

    assert!((root_image.rotation() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!((child_image.rotation() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!(child_image.height() > child_image.width());
}

///
/// Shape that rasterizes normally until it's rotated, when it collapses to nothing
///
#[derive(Debug)]
struct CollapsesWhenTurned(SharedShape);

impl ShapeGeometry for CollapsesWhenTurned {
    fn contains(&self, x: f64, y: f64) -> bool  { self.0.contains(x, y) }
    fn bounding_box(&self) -> ShapeBounds       { self.0.bounding_box() }

    fn transformed(&self, transform: &Affine2D) -> SharedShape {
        if transform.is_axis_aligned() {
            Arc::new(CollapsesWhenTurned(self.0.transformed(transform)))
        } else {
            Arc::new(Rectangle::new(0.0, 0.0, 0.0, 0.0))
        }
    }
}

#[test]
pub fn failed_image_rotation_leaves_its_joint_in_place() {
    let fragile     = RasterImage::new(Arc::new(CollapsesWhenTurned(Arc::new(Rectangle::new(0.0, 0.0, 6.0, 6.0)))), U8RgbaPixel::rgb(200, 40, 40), RenderScale(1.0)).unwrap();

    let mut root    = Joint::new(0.0, 0.0);
    let elbow       = root.new_child(10.0, 0.0);
    elbow.add_image(bar(8.0, 2.0));
    elbow.new_child(10.0, 0.0).add_image(fragile);

    assert!(match root.rotate(90.0) { Err(RasterError::DegenerateShape { .. }) => true, _ => false });

    // The elbow was visited before the failure, so it's rotated along with its image
    let elbow       = &root.children()[0];
    assert!(close(elbow.position(), (0.0, 10.0)));
    assert!((elbow.images()[0].rotation() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);

    // The hand's image couldn't be regenerated, so neither it nor its joint have moved
    let hand        = &elbow.children()[0];
    assert!(hand.position() == (20.0, 0.0));
    assert!(hand.images()[0].rotation() == 0.0);
    assert!(hand.images()[0].width() == 6);
    assert!(hand.images()[0].height() == 6);
}

#[test]
pub fn render_centers_images_on_joint() {
    let mut joint   = Joint::new(120.0, 80.0);
    joint.add_image(bar(10.0, 6.0));
    joint.add_image(bar(7.0, 3.0));

    let mut frame   = RasterFrame::new(200, 200);
    joint.render(&mut frame, false);

    for image in joint.images() {
        assert!(image.center_x() == 120.0);
        assert!(image.center_y() == 80.0);
    }

    assert!(frame.pixel(120, 80) == U8RgbaPixel::rgb(200, 40, 40));
}

#[test]
pub fn render_after_rotate_recenters_images() {
    let mut root    = Joint::new(100.0, 100.0);
    root.new_child(30.0, 0.0).add_image(bar(12.0, 4.0));

    root.rotate(45.0).unwrap();

    let mut frame   = RasterFrame::new(200, 200);
    root.render_subtree(&mut frame, false);

    let child       = &root.children()[0];
    let image       = &child.images()[0];

    assert!((image.center_x() - child.x()).abs() < 1e-9);
    assert!((image.center_y() - child.y()).abs() < 1e-9);
}

#[test]
pub fn debug_render_draws_marker() {
    let mut joint   = Joint::new(20.0, 20.0);
    let mut frame   = RasterFrame::new(40, 40);

    joint.render(&mut frame, false);
    assert!(frame.buffer().pixels().iter().all(|pixel| pixel.is_transparent()));

    joint.render(&mut frame, true);
    assert!(frame.pixel(23, 20) == DEBUG_MARKER_COLOR);
    assert!(frame.pixel(20, 20) == U8RgbaPixel::TRANSPARENT);
}

#[test]
pub fn render_subtree_draws_children() {
    let mut root    = Joint::new(10.0, 10.0);
    root.new_child(20.0, 0.0).add_image(bar(4.0, 4.0));

    let mut frame   = RasterFrame::new(40, 40);

    root.render(&mut frame, false);
    assert!(frame.pixel(30, 10) == U8RgbaPixel::TRANSPARENT);

    root.render_subtree(&mut frame, false);
    assert!(frame.pixel(30, 10) == U8RgbaPixel::rgb(200, 40, 40));
}

#[test]
pub fn copy_is_deep_and_independent() {
    let mut root    = Joint::new(0.0, 0.0);
    root.add_image(bar(6.0, 2.0));
    root.new_child(10.0, 0.0).new_child(5.0, 5.0).add_image(bar(3.0, 3.0));

    let mut copy    = root.copy();
    assert!(copy.subtree_len() == 3);
    assert!(copy.images().len() == 1);
    assert!(copy.children()[0].children()[0].images().len() == 1);
    assert!(copy.children()[0].offset() == (10.0, 0.0));

    copy.rotate(90.0).unwrap();
    copy.translate(5.0, 5.0);

    assert!(root.position() == (0.0, 0.0));
    assert!(root.children()[0].position() == (10.0, 0.0));
    assert!(root.children()[0].children()[0].position() == (15.0, 5.0));
    assert!(root.images()[0].rotation() == 0.0);
    assert!(root.children()[0].children()[0].images()[0].rotation() == 0.0);
}

#[test]
pub fn translate_is_shallow() {
    let mut root    = Joint::new(0.0, 0.0);
    root.new_child(10.0, 0.0);

    root.translate(3.0, 4.0);

    assert!(root.position() == (3.0, 4.0));
    assert!(root.children()[0].position() == (10.0, 0.0));
}

#[test]
pub fn add_child_keeps_existing_subtree() {
    let mut arm     = Joint::new(5.0, 5.0);
    arm.new_child(0.0, 10.0);

    let mut body    = Joint::new(0.0, 0.0);
    body.add_child(arm);

    assert!(body.subtree_len() == 3);
    assert!(body.children()[0].children()[0].position() == (5.0, 15.0));

    body.rotate(180.0).unwrap();
    assert!(close(body.children()[0].children()[0].position(), (-5.0, -15.0)));
}

#[test]
pub fn joints_are_counted() {
    let before      = SkeletonMetrics::global().snapshot();

    let mut root    = Joint::new(0.0, 0.0);
    root.new_child(1.0, 1.0);
    let _copy       = root.copy();
    root.rotate(10.0).unwrap();

    let after       = SkeletonMetrics::global().snapshot();
    assert!(after.joints_created >= before.joints_created + 4);
    assert!(after.subtree_rotations >= before.subtree_rotations + 1);
}
