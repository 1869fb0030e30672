pub mod types;

pub use types::{Point2D, RgbaColor};

use std::ffi::CStr;

// ============================================================================
// Graphics Backend Abstraction
// ============================================================================

/// 帧循环消费的图形后端
///
/// 生产实现是绑定到原生库的 [`crate::bindings::raylib::RaylibApi`]；
/// 测试可以替换为记录调用的实现。字符串在进入后端之前已经转换为 `CStr`。
pub trait GraphicsBackend {
    fn init_window(&mut self, width: i32, height: i32, title: &CStr);
    /// 窗口初始化是否成功
    fn is_window_ready(&mut self) -> bool;
    fn set_target_fps(&mut self, fps: i32);
    /// 终止信号（关闭按钮或 ESC）
    fn should_close(&mut self) -> bool;
    fn close_window(&mut self);

    fn begin_frame(&mut self);
    fn end_frame(&mut self);
    fn clear(&mut self, color: RgbaColor);
    fn draw_text(&mut self, text: &CStr, x: i32, y: i32, font_size: i32, color: RgbaColor);
    fn draw_filled_circle(&mut self, center: Point2D, radius: f32, color: RgbaColor);
}
