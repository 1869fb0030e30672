//! raylib 导出函数表与绑定后的 API
//!
//! 新增一个原生函数：在 `RAYLIB_CALLS` 中加一行描述符，并在 `RaylibApi` 中加一个字段。

use super::descriptor::{BindingRegistry, BoundFn, CallDescriptor};
use super::error::BindingResult;
use super::loader::LibraryHandle;
use super::shape::Shape;
use crate::platform::types::{POINT2D_SHAPE, RGBA_COLOR_SHAPE};
use crate::platform::{GraphicsBackend, Point2D, RgbaColor};
use std::ffi::{c_char, CStr};

/// 帧循环用到的 raylib 导出
pub static RAYLIB_CALLS: &[CallDescriptor] = &[
    CallDescriptor::new("InitWindow", &[Shape::I32, Shape::I32, Shape::CStr], Shape::Void),
    CallDescriptor::new("IsWindowReady", &[], Shape::Bool),
    CallDescriptor::new("WindowShouldClose", &[], Shape::Bool),
    CallDescriptor::new("CloseWindow", &[], Shape::Void),
    CallDescriptor::new("BeginDrawing", &[], Shape::Void),
    CallDescriptor::new("EndDrawing", &[], Shape::Void),
    CallDescriptor::new("ClearBackground", &[RGBA_COLOR_SHAPE], Shape::Void),
    CallDescriptor::new(
        "DrawText",
        &[Shape::CStr, Shape::I32, Shape::I32, Shape::I32, RGBA_COLOR_SHAPE],
        Shape::Void,
    ),
    CallDescriptor::new("DrawCircleV", &[POINT2D_SHAPE, Shape::F32, RGBA_COLOR_SHAPE], Shape::Void),
    CallDescriptor::new("SetTargetFPS", &[Shape::I32], Shape::Void),
];

type InitWindowFn = unsafe extern "C" fn(i32, i32, *const c_char);
type IsWindowReadyFn = unsafe extern "C" fn() -> bool;
type WindowShouldCloseFn = unsafe extern "C" fn() -> bool;
type CloseWindowFn = unsafe extern "C" fn();
type BeginDrawingFn = unsafe extern "C" fn();
type EndDrawingFn = unsafe extern "C" fn();
type ClearBackgroundFn = unsafe extern "C" fn(RgbaColor);
type DrawTextFn = unsafe extern "C" fn(*const c_char, i32, i32, i32, RgbaColor);
type DrawCircleVFn = unsafe extern "C" fn(Point2D, f32, RgbaColor);
type SetTargetFpsFn = unsafe extern "C" fn(i32);

/// 描述符表对应的注册表
pub fn registry() -> BindingResult<BindingRegistry> {
    BindingRegistry::new(RAYLIB_CALLS)
}

/// 全部绑定完成的 raylib 函数集合
#[derive(Debug)]
pub struct RaylibApi<'lib> {
    init_window: BoundFn<'lib, InitWindowFn>,
    is_window_ready: BoundFn<'lib, IsWindowReadyFn>,
    window_should_close: BoundFn<'lib, WindowShouldCloseFn>,
    close_window: BoundFn<'lib, CloseWindowFn>,
    begin_drawing: BoundFn<'lib, BeginDrawingFn>,
    end_drawing: BoundFn<'lib, EndDrawingFn>,
    clear_background: BoundFn<'lib, ClearBackgroundFn>,
    draw_text: BoundFn<'lib, DrawTextFn>,
    draw_circle_v: BoundFn<'lib, DrawCircleVFn>,
    set_target_fps: BoundFn<'lib, SetTargetFpsFn>,
}

impl<'lib> RaylibApi<'lib> {
    /// 绑定表中的全部函数，任何一个缺失或形状不符都立即失败
    pub fn bind(handle: &'lib LibraryHandle) -> BindingResult<Self> {
        let registry = registry()?;
        Self::bind_with(&registry, handle)
    }

    pub fn bind_with(registry: &BindingRegistry, handle: &'lib LibraryHandle) -> BindingResult<Self> {
        let api = Self {
            init_window: registry.bind(handle, "InitWindow")?,
            is_window_ready: registry.bind(handle, "IsWindowReady")?,
            window_should_close: registry.bind(handle, "WindowShouldClose")?,
            close_window: registry.bind(handle, "CloseWindow")?,
            begin_drawing: registry.bind(handle, "BeginDrawing")?,
            end_drawing: registry.bind(handle, "EndDrawing")?,
            clear_background: registry.bind(handle, "ClearBackground")?,
            draw_text: registry.bind(handle, "DrawText")?,
            draw_circle_v: registry.bind(handle, "DrawCircleV")?,
            set_target_fps: registry.bind(handle, "SetTargetFPS")?,
        };

        tracing::debug!(
            target: "bindings",
            "Bound {} raylib functions from {}",
            registry.len(),
            handle.path().display()
        );
        Ok(api)
    }
}

// SAFETY (all methods): every pointer was checked against its descriptor at bind time,
// the borrowed handle keeps the library mapped, and string arguments are NUL-terminated.
impl GraphicsBackend for RaylibApi<'_> {
    fn init_window(&mut self, width: i32, height: i32, title: &CStr) {
        unsafe { (self.init_window.get())(width, height, title.as_ptr()) }
    }

    fn is_window_ready(&mut self) -> bool {
        unsafe { (self.is_window_ready.get())() }
    }

    fn set_target_fps(&mut self, fps: i32) {
        unsafe { (self.set_target_fps.get())(fps) }
    }

    fn should_close(&mut self) -> bool {
        unsafe { (self.window_should_close.get())() }
    }

    fn close_window(&mut self) {
        unsafe { (self.close_window.get())() }
    }

    fn begin_frame(&mut self) {
        unsafe { (self.begin_drawing.get())() }
    }

    fn end_frame(&mut self) {
        unsafe { (self.end_drawing.get())() }
    }

    fn clear(&mut self, color: RgbaColor) {
        unsafe { (self.clear_background.get())(color) }
    }

    fn draw_text(&mut self, text: &CStr, x: i32, y: i32, font_size: i32, color: RgbaColor) {
        unsafe { (self.draw_text.get())(text.as_ptr(), x, y, font_size, color) }
    }

    fn draw_filled_circle(&mut self, center: Point2D, radius: f32, color: RgbaColor) {
        unsafe { (self.draw_circle_v.get())(center, radius, color) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::error::BindingError;

    #[test]
    fn test_table_is_valid() {
        let registry = registry().unwrap();
        assert_eq!(registry.len(), RAYLIB_CALLS.len());
    }

    #[test]
    fn test_table_matches_function_types() {
        let registry = registry().unwrap();
        let check = |name: &str| registry.descriptor(name).unwrap();

        assert!(check("InitWindow").matches::<InitWindowFn>());
        assert!(check("IsWindowReady").matches::<IsWindowReadyFn>());
        assert!(check("WindowShouldClose").matches::<WindowShouldCloseFn>());
        assert!(check("CloseWindow").matches::<CloseWindowFn>());
        assert!(check("BeginDrawing").matches::<BeginDrawingFn>());
        assert!(check("EndDrawing").matches::<EndDrawingFn>());
        assert!(check("ClearBackground").matches::<ClearBackgroundFn>());
        assert!(check("DrawText").matches::<DrawTextFn>());
        assert!(check("DrawCircleV").matches::<DrawCircleVFn>());
        assert!(check("SetTargetFPS").matches::<SetTargetFpsFn>());
    }

    #[test]
    fn test_draw_circle_signature() {
        let registry = registry().unwrap();
        assert_eq!(
            registry.descriptor("DrawCircleV").unwrap().signature(),
            "DrawCircleV(Vector2, f32, Color) -> void"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_bind_fails_fast_without_raylib() {
        let handle = LibraryHandle::current_process();
        let err = RaylibApi::bind(&handle).unwrap_err();

        match err {
            BindingError::SymbolNotFound { symbol, .. } => assert_eq!(symbol, "InitWindow"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
