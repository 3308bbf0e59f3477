use super::Point;

/// `BoundingBox` defines an axis-aligned rectangular region in user coordinates.
///
/// Geometry kernels report path bounds in this form, as
/// `(min-x, min-y, max-x, max-y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Accumulates points or boxes; `build()` is `None` if nothing was added.
#[derive(Debug, Clone, Default)]
pub struct BoundingBoxBuilder {
    bbox: Option<BoundingBox>,
}

impl BoundingBoxBuilder {
    pub fn new() -> Self {
        Self { bbox: None }
    }

    pub fn extend(&mut self, bbox: BoundingBox) -> &Self {
        if let Some(ref mut b) = self.bbox {
            *b = b.combine(&bbox);
        } else {
            self.bbox = Some(bbox);
        }
        self
    }

    pub fn extend_point(&mut self, (x, y): Point) -> &Self {
        self.extend(BoundingBox::new(x, y, x, y))
    }

    pub fn build(self) -> Option<BoundingBox> {
        self.bbox
    }
}

impl BoundingBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Smallest box containing all the given points
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut builder = BoundingBoxBuilder::new();
        for p in points {
            builder.extend_point(p);
        }
        builder.build()
    }

    pub fn combine(&self, other: &Self) -> Self {
        Self::new(
            self.x1.min(other.x1),
            self.y1.min(other.y1),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
        )
    }
}
