//! 原生库定位与加载
//!
//! `locate` 只做只读的文件存在性检查，`LibraryHandle::open` 才真正调用系统加载器。
//! 句柄独占系统资源，`close` 可重复调用，未显式关闭时在析构中释放。

use super::error::{BindingError, BindingResult};
use libloading::{Library, Symbol};
use std::fs;
use std::path::{Path, PathBuf};

/// 构建产物所在的子目录
pub const BUILD_OUTPUT_DIR: [&str; 2] = ["zig-out", "bin"];

/// 默认加载的库名
pub const DEFAULT_LIBRARY_STEM: &str = "raylib";

/// 在 `base_dir` 下解析 `relative_path`，文件不存在时返回 `NotFound`
///
/// `relative_path` 为绝对路径时直接使用它。
pub fn locate(base_dir: impl AsRef<Path>, relative_path: impl AsRef<Path>) -> BindingResult<PathBuf> {
    let path = base_dir.as_ref().join(relative_path);

    match fs::metadata(&path) {
        Ok(metadata) if metadata.is_file() => {}
        _ => return Err(BindingError::NotFound { path }),
    }

    Ok(fs::canonicalize(&path).unwrap_or(path))
}

/// 平台相关的动态库文件名
///
/// Windows 上的 zig 构建产物不带 `lib` 前缀。
pub fn platform_library_name(stem: &str) -> String {
    #[cfg(target_os = "windows")]
    {
        format!("{}.dll", stem)
    }
    #[cfg(target_os = "macos")]
    {
        format!("lib{}.dylib", stem)
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        format!("lib{}.so", stem)
    }
}

/// 相对于程序目录的默认库路径：`zig-out/bin/<平台库文件名>`
pub fn default_library_relative_path() -> PathBuf {
    let mut path: PathBuf = BUILD_OUTPUT_DIR.iter().collect();
    path.push(platform_library_name(DEFAULT_LIBRARY_STEM));
    path
}

/// 当前可执行文件所在目录
pub fn executable_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// 已加载原生库的独占句柄
pub struct LibraryHandle {
    library: Option<Library>,
    path: PathBuf,
}

impl LibraryHandle {
    /// 打开 `path` 处的动态库
    ///
    /// 加载会执行库的初始化代码，调用方需要信任该文件。
    pub fn open(path: impl AsRef<Path>) -> BindingResult<Self> {
        let path = path.as_ref().to_path_buf();

        // SAFETY: 库的初始化例程在当前进程中运行；路径来自调用方显式给出的构建产物
        let library = unsafe { Library::new(&path) }.map_err(|source| BindingError::Load {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(target: "bindings", "Opened native library {}", path.display());

        Ok(Self {
            library: Some(library),
            path,
        })
    }

    /// 当前进程映像（主程序及其全局依赖，例如 libc）
    #[cfg(unix)]
    pub fn current_process() -> Self {
        Self {
            library: Some(Library::from(libloading::os::unix::Library::this())),
            path: PathBuf::from("<current process>"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.library.is_some()
    }

    /// 查找导出符号
    ///
    /// # Safety
    ///
    /// `F` 必须与导出函数的真实签名一致。
    pub(crate) unsafe fn symbol<F>(&self, name: &str) -> BindingResult<Symbol<'_, F>> {
        let library = self.library.as_ref().ok_or_else(|| BindingError::HandleClosed {
            path: self.path.clone(),
        })?;

        library
            .get::<F>(name.as_bytes())
            .map_err(|source| BindingError::SymbolNotFound {
                symbol: name.to_string(),
                library: self.path.clone(),
                source,
            })
    }

    /// 释放系统句柄；只有第一次调用会真正卸载
    pub fn close(&mut self) -> BindingResult<()> {
        let Some(library) = self.library.take() else {
            return Ok(());
        };

        library.close().map_err(|source| BindingError::Unload {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(target: "bindings", "Closed native library {}", self.path.display());
        Ok(())
    }
}

impl Drop for LibraryHandle {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(target: "bindings", "{}", e);
        }
    }
}

impl std::fmt::Debug for LibraryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibraryHandle")
            .field("path", &self.path)
            .field("open", &self.is_open())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_locate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = locate(dir.path(), default_library_relative_path()).unwrap_err();

        match err {
            BindingError::NotFound { path } => {
                assert!(path.starts_with(dir.path()));
                assert!(path.ends_with(default_library_relative_path()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_locate_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("zig-out").join("bin")).unwrap();

        let err = locate(dir.path(), "zig-out/bin").unwrap_err();
        assert!(matches!(err, BindingError::NotFound { .. }));
    }

    #[test]
    fn test_locate_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let relative = default_library_relative_path();
        let full = dir.path().join(&relative);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(&full, b"not really a library").unwrap();

        let located = locate(dir.path(), &relative).unwrap();
        assert!(located.is_absolute());
        assert!(located.ends_with(&relative));
    }

    #[test]
    fn test_open_rejects_garbage_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a shared object").unwrap();

        let err = LibraryHandle::open(file.path()).unwrap_err();
        match err {
            BindingError::Load { path, source } => {
                assert_eq!(path, file.path());
                assert!(!source.to_string().is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_platform_library_name() {
        let name = platform_library_name("raylib");
        #[cfg(target_os = "windows")]
        assert_eq!(name, "raylib.dll");
        #[cfg(target_os = "macos")]
        assert_eq!(name, "libraylib.dylib");
        #[cfg(target_os = "linux")]
        assert_eq!(name, "libraylib.so");
    }

    #[cfg(unix)]
    #[test]
    fn test_close_is_idempotent() {
        let mut handle = LibraryHandle::current_process();
        assert!(handle.is_open());

        handle.close().unwrap();
        assert!(!handle.is_open());
        handle.close().unwrap();
        assert!(!handle.is_open());
    }

    #[cfg(unix)]
    #[test]
    fn test_symbol_after_close() {
        let mut handle = LibraryHandle::current_process();
        handle.close().unwrap();

        let result = unsafe { handle.symbol::<unsafe extern "C" fn(i32) -> i32>("abs") };
        assert!(matches!(result, Err(BindingError::HandleClosed { .. })));
    }
}
