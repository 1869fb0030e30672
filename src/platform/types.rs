//! 按值跨越原生边界的几何与颜色记录

use crate::bindings::shape::{NativeReturn, NativeType, Shape, StructLayout};
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 二维点，对应原生侧的 `Vector2`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for Point2D {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2D> for Vec2 {
    fn from(p: Point2D) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// RGBA 颜色，对应原生侧的 `Color`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const RAYWHITE: Self = Self::new(245, 245, 245, 255);
    pub const GRAY: Self = Self::new(130, 130, 130, 255);
    pub const RED: Self = Self::new(255, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

pub const POINT2D_SHAPE: Shape = Shape::Struct(StructLayout::of::<Point2D>("Vector2"));
pub const RGBA_COLOR_SHAPE: Shape = Shape::Struct(StructLayout::of::<RgbaColor>("Color"));

unsafe impl NativeType for Point2D {
    const SHAPE: Shape = POINT2D_SHAPE;
}

unsafe impl NativeReturn for Point2D {
    const SHAPE: Shape = POINT2D_SHAPE;
}

unsafe impl NativeType for RgbaColor {
    const SHAPE: Shape = RGBA_COLOR_SHAPE;
}

unsafe impl NativeReturn for RgbaColor {
    const SHAPE: Shape = RGBA_COLOR_SHAPE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_field_order() {
        let color = RgbaColor::new(1, 2, 3, 4);
        assert_eq!(bytemuck::bytes_of(&color), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_point_layout() {
        assert_eq!(std::mem::size_of::<Point2D>(), 8);
        assert_eq!(std::mem::align_of::<Point2D>(), 4);

        let point = Point2D::new(1.5, -2.0);
        let floats: [f32; 2] = bytemuck::cast(point);
        assert_eq!(floats, [1.5, -2.0]);
    }

    #[test]
    fn test_vec2_conversion() {
        let p = Point2D::from(Vec2::new(400.0, 300.0));
        assert_eq!(p, Point2D::new(400.0, 300.0));
        assert_eq!(Vec2::from(p), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_struct_shapes() {
        assert_eq!(POINT2D_SHAPE.to_string(), "Vector2");
        assert_eq!(RGBA_COLOR_SHAPE.to_string(), "Color");
        assert_ne!(POINT2D_SHAPE, RGBA_COLOR_SHAPE);
    }
}
