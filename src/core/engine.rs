//! 程序主入口
//!
//! 按失败从早到晚的顺序串起各阶段：配置 → 定位 → 加载 → 绑定 → 窗口初始化 → 帧循环

use super::error::DemoResult;
use super::frame_loop::{FrameLoop, RunSummary};
use crate::bindings::{
    default_library_relative_path, executable_dir, locate, raylib, LibraryHandle, RaylibApi,
};
use crate::cli::Cli;
use crate::config::{DemoConfig, LoggingConfig};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter, Registry};

/// 全局日志过滤器的重载句柄
static LOG_FILTER: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// 演示程序
///
/// # 生命周期
///
/// 1. **初始化阶段**：加载配置、初始化日志、定位并打开原生库、绑定全部函数
/// 2. **运行阶段**：执行帧循环直到窗口关闭
/// 3. **关闭阶段**：关闭窗口，卸载原生库
pub struct Engine;

impl Engine {
    /// 按命令行参数运行；失败在返回前写入日志
    pub fn run(cli: &Cli) -> DemoResult<()> {
        Self::initialize_logging();

        let result = Self::try_run(cli);
        if let Err(e) = &result {
            tracing::error!(target: "demo", "{}", e);
        }
        result
    }

    fn try_run(cli: &Cli) -> DemoResult<()> {
        let config = Self::load_config(cli.config.as_deref())?;
        Self::apply_logging_config(&config.logging);
        config.validate()?;

        if cli.dump_bindings {
            Self::dump_bindings()?;
            return Ok(());
        }

        let library_path = Self::resolve_library_path(cli.library.as_deref())?;
        let summary = Self::run_with_library(&library_path, &config, cli.frames)?;

        tracing::info!(
            target: "demo",
            "Rendered {} frames ({} reflections)",
            summary.frames,
            summary.reflections
        );
        Ok(())
    }

    /// 打开 `library_path`，绑定 raylib 并运行帧循环
    ///
    /// 窗口在库卸载之前关闭：帧循环借用库句柄，必须先于句柄释放。
    pub fn run_with_library(
        library_path: &Path,
        config: &DemoConfig,
        max_frames: Option<u64>,
    ) -> DemoResult<RunSummary> {
        let mut handle = LibraryHandle::open(library_path)?;
        tracing::info!(
            target: "demo",
            "Successfully loaded native library from: {}",
            library_path.display()
        );

        let api = RaylibApi::bind(&handle)?;
        let mut frame_loop = FrameLoop::new(api, config)?;
        let summary = frame_loop.run(max_frames)?;
        drop(frame_loop);

        handle.close()?;
        Ok(summary)
    }

    /// 初始化日志系统
    ///
    /// 在读取配置之前安装，配置加载失败也能被记录。`RUST_LOG` 优先，
    /// 未设置时先用默认级别，读到配置后再由 [`Self::apply_logging_config`] 调整。
    fn initialize_logging() {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(LoggingConfig::default().level.as_directive()));
        let (filter, handle) = reload::Layer::new(filter);

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .is_ok();
        if installed {
            let _ = LOG_FILTER.set(handle);
        }
        tracing::debug!(target: "demo", "Logging initialized");
    }

    /// 按配置调整日志级别；设置了 `RUST_LOG` 时保持不变
    fn apply_logging_config(logging: &LoggingConfig) {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        if let Some(handle) = LOG_FILTER.get() {
            if let Err(e) = handle.reload(EnvFilter::new(logging.level.as_directive())) {
                tracing::warn!(target: "demo", "Failed to apply log level: {}", e);
            }
        }
    }

    fn load_config(path: Option<&Path>) -> DemoResult<DemoConfig> {
        match path {
            Some(path) => Ok(DemoConfig::from_file(path)?),
            None => Ok(DemoConfig::default()),
        }
    }

    /// 显式路径相对当前目录解析；否则使用程序目录下的构建产物路径
    pub fn resolve_library_path(explicit: Option<&Path>) -> DemoResult<PathBuf> {
        let path = match explicit {
            Some(path) => locate(std::env::current_dir()?, path)?,
            None => locate(executable_dir()?, default_library_relative_path())?,
        };
        Ok(path)
    }

    fn dump_bindings() -> DemoResult<()> {
        let registry = raylib::registry()?;
        for descriptor in registry.iter() {
            println!("{}", descriptor.signature());
        }
        Ok(())
    }
}
