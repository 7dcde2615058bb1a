/// Width/height pair in logical points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square of edge `side`.
    pub const fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// True when either edge is zero, negative or NaN.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Axis-aligned rectangle in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, Size};

    #[test]
    fn degenerate_sizes() {
        assert!(Size::ZERO.is_degenerate());
        assert!(Size::new(10.0, 0.0).is_degenerate());
        assert!(Size::new(f32::NAN, 10.0).is_degenerate());
        assert!(!Size::square(1.0).is_degenerate());
    }

    #[test]
    fn rect_centers() {
        let rect = Rect::new(100.0, 20.0, 50.0, 40.0);
        assert_eq!(rect.center_x(), 125.0);
        assert_eq!(rect.center_y(), 40.0);
        assert_eq!(rect.max_x(), 150.0);
        assert_eq!(rect.size(), Size::new(50.0, 40.0));
    }
}
