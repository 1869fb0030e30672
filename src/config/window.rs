use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 窗口配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// 宽度（像素），同时是水平反弹边界
    pub width: i32,

    /// 高度（像素），同时是垂直反弹边界
    pub height: i32,

    /// 窗口标题
    pub title: String,

    /// 目标帧率，由原生库负责节流
    pub target_fps: i32,
}

impl_default!(WindowConfig {
    width: 800,
    height: 600,
    title: "raylib loaded at runtime from Rust".to_string(),
    target_fps: 60,
});

impl WindowConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "Invalid window size {}x{}",
                self.width, self.height
            )));
        }
        if self.target_fps <= 0 || self.target_fps > 1000 {
            return Err(ConfigError::ValidationError(format!(
                "Target FPS must be in 1..=1000, got {}",
                self.target_fps
            )));
        }
        if self.title.contains('\0') {
            return Err(ConfigError::ValidationError(
                "Window title contains a NUL byte".to_string(),
            ));
        }
        Ok(())
    }
}
