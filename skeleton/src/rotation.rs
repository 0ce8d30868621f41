use crate::joint::*;

use flo_raster::*;

///
/// Rotates a point about a pivot by an angle in radians
///
/// Positive angles turn counter-clockwise in y-up coordinates, which appears clockwise on a screen
/// where y increases downwards (a point to the right of the pivot will move below it after a quarter
/// turn). Images are rotated with the same convention.
///
#[inline]
pub fn rotate_point(point: (f64, f64), pivot: (f64, f64), radians: f64) -> (f64, f64) {
    let (px, py)    = point;
    let (bx, by)    = pivot;
    let (sin, cos)  = radians.sin_cos();

    let dx          = px - bx;
    let dy          = py - by;

    (bx + dx*cos - dy*sin, by + dx*sin + dy*cos)
}

///
/// Rotates a joint, its images and everything below it about a fixed pivot
///
/// The pivot is the same for the whole subtree: joints further down the tree are not rotated about
/// their own parents. Joints are visited parent-first.
///
/// A joint's images are regenerated before the joint is moved. If an image can't be regenerated, the
/// rotation stops: that image and the joint it's attached to keep their old rotation and position,
/// and joints that were visited earlier are left rotated.
///
pub fn rotate_subtree(joint: &mut Joint, pivot: (f64, f64), degrees: f64) -> Result<(), RasterError> {
    for image in joint.images_mut().iter_mut() {
        image.rotate(degrees)?;
    }

    let (x, y) = rotate_point(joint.position(), pivot, degrees.to_radians());
    joint.set_x(x);
    joint.set_y(y);

    for child in joint.children_mut().iter_mut() {
        rotate_subtree(child, pivot, degrees)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0-b.0).abs() < 1e-9 && (a.1-b.1).abs() < 1e-9
    }

    #[test]
    fn quarter_turn_moves_right_to_down() {
        let rotated = rotate_point((10.0, 0.0), (0.0, 0.0), 90.0_f64.to_radians());

        assert!(close(rotated, (0.0, 10.0)));
    }

    #[test]
    fn pivot_does_not_move() {
        let rotated = rotate_point((3.0, 4.0), (3.0, 4.0), 1.234);

        assert!(rotated == (3.0, 4.0));
    }

    #[test]
    fn rotation_about_offset_pivot() {
        let rotated = rotate_point((150.0, 100.0), (100.0, 100.0), std::f64::consts::PI);

        assert!(close(rotated, (50.0, 100.0)));
    }

    #[test]
    fn grandchildren_use_root_pivot() {
        let mut root = Joint::new(0.0, 0.0);
        root.new_child(10.0, 0.0).new_child(10.0, 0.0);

        rotate_subtree(&mut root, (0.0, 0.0), 90.0).unwrap();

        // Rotating the grandchild about its parent would leave it at (10, 10)
        let grandchild = root.children()[0].children()[0].position();
        assert!(close(grandchild, (0.0, 20.0)));
    }
}
