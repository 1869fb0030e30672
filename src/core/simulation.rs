//! 圆的运动状态
//!
//! 固定步长积分：每帧 `position += velocity`，不按真实时间缩放。
//! 边界反弹按轴独立处理，只在向外运动时翻转速度，所以越界后的下一帧一定朝内部移动，
//! 同一次越界不会被翻转两次。默认不夹紧位置，允许单帧越界绘制。

use crate::platform::Point2D;
use glam::Vec2;

/// 本帧发生反弹的轴
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    pub fn any(&self) -> bool {
        self.x || self.y
    }

    /// 翻转的速度分量个数
    pub fn count(&self) -> u64 {
        u64::from(self.x) + u64::from(self.y)
    }
}

/// 帧循环独占的运动状态
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl SimulationState {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// 积分一帧
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    /// 对 `[0, bounds]` 做边界反弹检查
    pub fn reflect(&mut self, bounds: Vec2) -> Reflection {
        Reflection {
            x: reflect_axis(self.position.x, &mut self.velocity.x, bounds.x),
            y: reflect_axis(self.position.y, &mut self.velocity.y, bounds.y),
        }
    }

    /// 把位置夹回 `[0, bounds]`
    pub fn clamp_to(&mut self, bounds: Vec2) {
        self.position = self.position.clamp(Vec2::ZERO, bounds);
    }

    /// 一帧完整更新：积分 → 反弹 → 可选夹紧
    pub fn advance(&mut self, bounds: Vec2, clamp: bool) -> Reflection {
        self.integrate();
        let reflection = self.reflect(bounds);
        if clamp {
            self.clamp_to(bounds);
        }
        reflection
    }

    /// 原生绘制使用的圆心
    pub fn center(&self) -> Point2D {
        self.position.into()
    }
}

fn reflect_axis(position: f32, velocity: &mut f32, extent: f32) -> bool {
    let outward = (position >= extent && *velocity > 0.0) || (position <= 0.0 && *velocity < 0.0);
    if outward {
        *velocity = -*velocity;
    }
    outward
}
