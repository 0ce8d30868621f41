mod affine;
mod bounds;
mod shape_trait;
mod rectangle;
mod ellipse;
mod polygon;

pub use affine::*;
pub use bounds::*;
pub use shape_trait::*;
pub use rectangle::*;
pub use ellipse::*;
pub use polygon::*;
