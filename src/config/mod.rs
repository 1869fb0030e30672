/// 演示程序配置
///
/// 提供TOML/JSON配置文件加载、保存与验证
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub mod scene;
pub mod window;

pub use scene::SceneConfig;
pub use window::WindowConfig;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 主配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// 窗口配置
    pub window: WindowConfig,

    /// 场景配置
    pub scene: SceneConfig,

    /// 日志配置
    pub logging: LoggingConfig,
}

impl DemoConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 按扩展名加载：`.json` 走JSON，其余按TOML解析
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_file(path)
        } else {
            Self::from_toml_file(path)
        }
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.window.validate()?;
        self.scene.validate()?;
        Ok(())
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 未设置 `RUST_LOG` 时使用的日志级别
    pub level: LogLevel,
}

use crate::impl_default;

impl_default!(LoggingConfig {
    level: LogLevel::Info,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}

impl LogLevel {
    /// `EnvFilter` 指令
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::RgbaColor;
    use glam::Vec2;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.target_fps, 60);
        assert_eq!(config.scene.background, RgbaColor::RAYWHITE);
        assert_eq!(config.scene.initial_velocity, Vec2::new(3.0, 3.0));
        assert!(!config.scene.clamp_to_bounds);
    }

    #[test]
    fn test_toml_serialization() {
        let config = DemoConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: DemoConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml() {
        let config = DemoConfig::from_toml_str(
            r#"
            [window]
            width = 1024
            title = "bounce"

            [scene]
            initial_velocity = [-2.0, 5.0]
            circle_color = { r = 0, g = 0, b = 255, a = 255 }

            [logging]
            level = "Debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.title, "bounce");
        assert_eq!(config.scene.initial_velocity, Vec2::new(-2.0, 5.0));
        assert_eq!(config.scene.circle_color, RgbaColor::new(0, 0, 255, 255));
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.json");
        fs::write(&path, r#"{ "window": { "target_fps": 30 } }"#).unwrap();

        let config = DemoConfig::from_file(&path).unwrap();
        assert_eq!(config.window.target_fps, 30);
        assert_eq!(config.window.width, 800);
    }

    #[test]
    fn test_save_and_reload_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.toml");

        let mut config = DemoConfig::default();
        config.scene.initial_position = Some(Vec2::new(10.0, 20.0));
        config.save_toml(&path).unwrap();

        let loaded = DemoConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = DemoConfig::default();
        config.window.width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));

        let mut config = DemoConfig::default();
        config.window.target_fps = -1;
        assert!(config.validate().is_err());

        let mut config = DemoConfig::default();
        config.scene.circle_radius = 0.0;
        assert!(config.validate().is_err());

        let mut config = DemoConfig::default();
        config.scene.banner = "nul\0inside".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = DemoConfig::from_toml_str("[window\nwidth = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
