use crate::metrics::*;
use crate::rotation::*;

use flo_raster::*;

use tracing::{debug};

///
/// A joint in a 2D skeleton
///
/// Joints form a tree: each joint owns its children and the images that are drawn at its position.
/// Joints store absolute positions, so moving a parent doesn't move its children, but rotating a
/// joint swings every joint below it around the joint's position.
///
#[derive(Debug)]
pub struct Joint {
    /// Position of this joint
    x:          f64,
    y:          f64,

    /// Offset from the parent joint when this joint was created (0, 0 for a root joint)
    x_offset:   f64,
    y_offset:   f64,

    /// The joints attached to this one
    children:   Vec<Joint>,

    /// The images drawn centered on this joint
    images:     Vec<RasterImage>,
}

impl Joint {
    ///
    /// Creates a root joint at the specified position
    ///
    pub fn new(x: f64, y: f64) -> Joint {
        SkeletonMetrics::global().joint_created();

        Joint {
            x:          x,
            y:          y,
            x_offset:   0.0,
            y_offset:   0.0,
            children:   vec![],
            images:     vec![],
        }
    }

    ///
    /// Creates a new joint at an offset from this one and adds it as a child
    ///
    /// The offset is only used to work out the initial position of the child: it's recorded but the
    /// child isn't kept at this offset if the parent is moved later on.
    ///
    pub fn new_child(&mut self, x_offset: f64, y_offset: f64) -> &mut Joint {
        let mut child   = Joint::new(self.x + x_offset, self.y + y_offset);
        child.x_offset  = x_offset;
        child.y_offset  = y_offset;

        let index       = self.children.len();
        self.children.push(child);

        &mut self.children[index]
    }

    ///
    /// Attaches an existing joint (and its subtree) to this one
    ///
    pub fn add_child(&mut self, child: Joint) {
        self.children.push(child);
    }

    ///
    /// Attaches an image to this joint
    ///
    /// The image will be moved so it's centered on the joint whenever the joint is rendered
    ///
    pub fn add_image(&mut self, image: RasterImage) {
        self.images.push(image);
    }

    ///
    /// Moves this joint and the images attached to it
    ///
    /// Child joints are not moved: call `translate` on each joint that should follow.
    ///
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;

        for image in self.images.iter_mut() {
            let (center_x, center_y) = (image.center_x(), image.center_y());

            image.set_x(center_x + dx);
            image.set_y(center_y + dy);
        }
    }

    ///
    /// Rotates this joint's subtree by an angle in degrees, using this joint's position as the pivot
    ///
    /// Every joint below this one is moved around the pivot, and every image attached to this joint or
    /// any joint below it is regenerated at the new angle.
    ///
    pub fn rotate(&mut self, degrees: f64) -> Result<(), RasterError> {
        let pivot = (self.x, self.y);

        debug!(degrees, pivot_x = pivot.0, pivot_y = pivot.1, "Rotating joint subtree");
        SkeletonMetrics::global().subtree_rotated();

        rotate_subtree(self, pivot, degrees)
    }

    ///
    /// Makes a deep copy of this joint, its images and all of the joints below it
    ///
    pub fn copy(&self) -> Joint {
        let mut copy    = Joint::new(self.x, self.y);
        copy.x_offset   = self.x_offset;
        copy.y_offset   = self.y_offset;
        copy.children   = self.children.iter().map(|child| child.copy()).collect();
        copy.images     = self.images.iter().map(|image| image.copy()).collect();

        copy
    }

    ///
    /// Draws the images attached to this joint
    ///
    /// Each image is centered on the joint before it's drawn. Child joints are not drawn (see `render_subtree`).
    /// If `debug` is set, a marker is drawn at the position of the joint.
    ///
    pub fn render<TContext>(&mut self, context: &mut TContext, debug: bool)
    where
        TContext: ?Sized + RenderContext,
    {
        let (x, y) = (self.x, self.y);

        for image in self.images.iter_mut() {
            image.set_x(x);
            image.set_y(y);
            image.render(context, debug);
        }

        if debug {
            context.draw_marker(x, y, DEBUG_MARKER_DIAMETER, DEBUG_MARKER_COLOR);
        }
    }

    ///
    /// Draws this joint followed by every joint below it (parents are drawn underneath their children)
    ///
    pub fn render_subtree<TContext>(&mut self, context: &mut TContext, debug: bool)
    where
        TContext: ?Sized + RenderContext,
    {
        self.render(context, debug);

        for child in self.children.iter_mut() {
            child.render_subtree(context, debug);
        }
    }

    ///
    /// The number of joints in this subtree, including this one
    ///
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(|child| child.subtree_len()).sum::<usize>()
    }

    #[inline] pub fn x(&self) -> f64 { self.x }
    #[inline] pub fn y(&self) -> f64 { self.y }

    /// Moves this joint without moving its images or children
    #[inline] pub fn set_x(&mut self, x: f64) { self.x = x; }

    /// Moves this joint without moving its images or children
    #[inline] pub fn set_y(&mut self, y: f64) { self.y = y; }

    /// The position of this joint as an (x, y) pair
    #[inline] pub fn position(&self) -> (f64, f64) { (self.x, self.y) }

    /// The offset from the parent that this joint was created at
    #[inline] pub fn offset(&self) -> (f64, f64) { (self.x_offset, self.y_offset) }

    #[inline] pub fn children(&self) -> &[Joint] { &self.children }
    #[inline] pub fn children_mut(&mut self) -> &mut [Joint] { &mut self.children }

    #[inline] pub fn images(&self) -> &[RasterImage] { &self.images }
    #[inline] pub fn images_mut(&mut self) -> &mut [RasterImage] { &mut self.images }
}

impl Drop for Joint {
    fn drop(&mut self) {
        SkeletonMetrics::global().joint_dropped();
    }
}
