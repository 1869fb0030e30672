//! 顶层错误类型
//!
//! 绑定层的 `BindingError` 与配置层的 `ConfigError` 都汇总到 `DemoError`，
//! 由 `main` 打印并以退出码 1 结束进程。

use crate::bindings::BindingError;
use crate::config::ConfigError;
use std::ffi::NulError;
use thiserror::Error;

/// 演示程序错误
#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Window initialization failed: {0}")]
    Init(String),

    #[error("Invalid frame loop state: {0}")]
    InvalidState(String),

    #[error("String cannot cross the native boundary: {0}")]
    InvalidString(#[from] NulError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DemoResult<T> = Result<T, DemoError>;
