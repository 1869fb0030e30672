use super::{ConfigError, ConfigResult};
use crate::impl_default;
use crate::platform::RgbaColor;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 场景配置：背景、静态文字和运动的圆
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// 静态文字
    pub banner: String,

    /// 文字左上角位置
    pub banner_position: [i32; 2],

    pub font_size: i32,

    /// 圆半径（像素）
    pub circle_radius: f32,

    /// 初始位置，未设置时取窗口中心
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_position: Option<Vec2>,

    /// 每帧位移（像素/帧）
    pub initial_velocity: Vec2,

    /// 反弹后是否把位置夹回边界内
    pub clamp_to_bounds: bool,

    /// 清屏颜色
    pub background: RgbaColor,

    pub text_color: RgbaColor,

    pub circle_color: RgbaColor,
}

impl_default!(SceneConfig {
    banner: "Success! raylib is running from Rust.".to_string(),
    banner_position: [190, 200],
    font_size: 20,
    circle_radius: 50.0,
    initial_position: None,
    initial_velocity: Vec2::new(3.0, 3.0),
    clamp_to_bounds: false,
    background: RgbaColor::RAYWHITE,
    text_color: RgbaColor::GRAY,
    circle_color: RgbaColor::RED,
});

impl SceneConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.circle_radius.is_finite() && self.circle_radius > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "Circle radius must be positive, got {}",
                self.circle_radius
            )));
        }
        if self.font_size <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "Font size must be positive, got {}",
                self.font_size
            )));
        }
        if !self.initial_velocity.is_finite() {
            return Err(ConfigError::ValidationError(
                "Initial velocity must be finite".to_string(),
            ));
        }
        if let Some(position) = self.initial_position {
            if !position.is_finite() {
                return Err(ConfigError::ValidationError(
                    "Initial position must be finite".to_string(),
                ));
            }
        }
        if self.banner.contains('\0') {
            return Err(ConfigError::ValidationError(
                "Banner text contains a NUL byte".to_string(),
            ));
        }
        Ok(())
    }
}
