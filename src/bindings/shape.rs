//! 跨边界调用形状
//!
//! `Shape` 是参数/返回值在 C ABI 上的类型标签。Rust 侧的函数指针类型通过
//! [`NativeSignature`] 推导出自己的形状，绑定时与描述符表中声明的形状逐项比对。

use std::ffi::c_char;
use std::fmt;

/// 按值传递的结构体布局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructLayout {
    /// 原生侧的结构体名称
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
}

impl StructLayout {
    /// 以 `T` 的实际内存布局构造
    pub const fn of<T>(name: &'static str) -> Self {
        Self {
            name,
            size: std::mem::size_of::<T>(),
            align: std::mem::align_of::<T>(),
        }
    }
}

/// 参数或返回值的形状标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// 无返回值，只允许出现在返回位置
    Void,
    Bool,
    I32,
    F32,
    /// 以 NUL 结尾的 UTF-8 字节串
    CStr,
    Struct(StructLayout),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Void => f.write_str("void"),
            Shape::Bool => f.write_str("bool"),
            Shape::I32 => f.write_str("i32"),
            Shape::F32 => f.write_str("f32"),
            Shape::CStr => f.write_str("cstr"),
            Shape::Struct(layout) => f.write_str(layout.name),
        }
    }
}

/// 把参数列表和返回形状格式化成 `(i32, cstr) -> void`
pub fn format_signature(params: &[Shape], returns: Shape) -> String {
    let params = params
        .iter()
        .map(|shape| shape.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("({}) -> {}", params, returns)
}

/// 可以按值跨越 C ABI 的类型
///
/// # Safety
///
/// `SHAPE` 必须准确描述 `Self` 在 C ABI 中的表示；结构体必须是 `#[repr(C)]`。
pub unsafe trait NativeType: Copy {
    const SHAPE: Shape;
}

/// 可以作为原生函数返回值的类型
///
/// # Safety
///
/// 与 [`NativeType`] 相同，`()` 对应 `Shape::Void`。
pub unsafe trait NativeReturn {
    const SHAPE: Shape;
}

macro_rules! impl_native_value {
    ($($ty:ty => $shape:expr),* $(,)?) => {
        $(
            unsafe impl NativeType for $ty {
                const SHAPE: Shape = $shape;
            }

            unsafe impl NativeReturn for $ty {
                const SHAPE: Shape = $shape;
            }
        )*
    };
}

impl_native_value!(
    bool => Shape::Bool,
    i32 => Shape::I32,
    f32 => Shape::F32,
    *const c_char => Shape::CStr,
);

unsafe impl NativeReturn for () {
    const SHAPE: Shape = Shape::Void;
}

/// 原生函数指针类型及其形状
///
/// # Safety
///
/// 只为 `unsafe extern "C" fn` 指针实现，参数与返回值都满足 ABI 约束。
pub unsafe trait NativeSignature: Copy {
    fn params() -> Vec<Shape>;
    fn returns() -> Shape;

    fn describe() -> String {
        format_signature(&Self::params(), Self::returns())
    }
}

macro_rules! impl_native_signature {
    ($($arg:ident),*) => {
        unsafe impl<R: NativeReturn, $($arg: NativeType),*> NativeSignature
            for unsafe extern "C" fn($($arg),*) -> R
        {
            fn params() -> Vec<Shape> {
                vec![$(<$arg as NativeType>::SHAPE),*]
            }

            fn returns() -> Shape {
                R::SHAPE
            }
        }
    };
}

impl_native_signature!();
impl_native_signature!(A);
impl_native_signature!(A, B);
impl_native_signature!(A, B, C);
impl_native_signature!(A, B, C, D);
impl_native_signature!(A, B, C, D, E);
