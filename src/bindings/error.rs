//! 绑定层错误类型
//!
//! 按失败阶段排列：文件定位 → 加载 → 符号绑定 → 卸载

use std::path::PathBuf;
use thiserror::Error;

/// 原生库绑定错误
#[derive(Error, Debug)]
pub enum BindingError {
    /// 解析后的路径上没有文件
    #[error("Native library not found at the expected path: {}", path.display())]
    NotFound { path: PathBuf },

    /// 系统加载器拒绝了该文件（依赖缺失、架构不匹配、文件损坏）
    #[error("Failed to load native library {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// 库中没有该导出符号
    #[error("Symbol '{symbol}' not found in {}: {source}", library.display())]
    SymbolNotFound {
        symbol: String,
        library: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// 请求的函数指针类型与描述符声明的形状不一致
    #[error("Signature mismatch for '{symbol}': declared {declared}, requested {requested}")]
    SignatureMismatch {
        symbol: String,
        declared: String,
        requested: String,
    },

    /// 注册表里没有该名称的描述符
    #[error("No call descriptor registered for '{0}'")]
    UnknownDescriptor(String),

    /// 描述符表本身不合法
    #[error("Invalid call descriptor: {0}")]
    InvalidDescriptor(String),

    /// 句柄已关闭
    #[error("Native library handle for {} is already closed", path.display())]
    HandleClosed { path: PathBuf },

    /// 系统卸载库失败
    #[error("Failed to unload native library {}: {source}", path.display())]
    Unload {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
}

pub type BindingResult<T> = Result<T, BindingError>;
