//! 调用描述符与绑定注册表
//!
//! 描述符表是静态数据：每个原生函数一行 `CallDescriptor`。注册表在构建时校验整张表，
//! 在绑定时先查符号、再比对形状，所有不一致都在进入帧循环之前暴露出来。

use super::error::{BindingError, BindingResult};
use super::loader::LibraryHandle;
use super::shape::{format_signature, NativeSignature, Shape};
use libloading::Symbol;
use std::collections::HashMap;

/// 单个原生函数的调用形状
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallDescriptor {
    pub name: &'static str,
    pub params: &'static [Shape],
    pub returns: Shape,
}

impl CallDescriptor {
    pub const fn new(name: &'static str, params: &'static [Shape], returns: Shape) -> Self {
        Self {
            name,
            params,
            returns,
        }
    }

    /// `(i32, i32, cstr) -> void`
    pub fn shape_string(&self) -> String {
        format_signature(self.params, self.returns)
    }

    /// `InitWindow(i32, i32, cstr) -> void`
    pub fn signature(&self) -> String {
        format!("{}{}", self.name, self.shape_string())
    }

    /// 函数指针类型 `F` 的形状是否与声明完全一致
    pub fn matches<F: NativeSignature>(&self) -> bool {
        F::params() == self.params && F::returns() == self.returns
    }

    fn validate(&self) -> BindingResult<()> {
        if self.name.is_empty() {
            return Err(BindingError::InvalidDescriptor(
                "descriptor name is empty".to_string(),
            ));
        }
        if self.name.contains('\0') {
            return Err(BindingError::InvalidDescriptor(format!(
                "descriptor name {:?} contains a NUL byte",
                self.name
            )));
        }
        if let Some(index) = self.params.iter().position(|shape| *shape == Shape::Void) {
            return Err(BindingError::InvalidDescriptor(format!(
                "{}: parameter {} is void",
                self.name, index
            )));
        }
        Ok(())
    }
}

/// 按名称索引的描述符注册表
#[derive(Debug)]
pub struct BindingRegistry {
    table: &'static [CallDescriptor],
    index: HashMap<&'static str, usize>,
}

impl BindingRegistry {
    /// 校验并索引描述符表
    pub fn new(table: &'static [CallDescriptor]) -> BindingResult<Self> {
        let mut index = HashMap::with_capacity(table.len());

        for (i, descriptor) in table.iter().enumerate() {
            descriptor.validate()?;
            if index.insert(descriptor.name, i).is_some() {
                return Err(BindingError::InvalidDescriptor(format!(
                    "duplicate descriptor for '{}'",
                    descriptor.name
                )));
            }
        }

        Ok(Self { table, index })
    }

    pub fn descriptor(&self, name: &str) -> Option<&'static CallDescriptor> {
        let table = self.table;
        self.index.get(name).map(|&i| &table[i])
    }

    /// 按表中顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &'static CallDescriptor> {
        self.table.iter()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// 将 `name` 绑定为函数指针类型 `F`
    ///
    /// 检查顺序：描述符存在 → 符号存在 → 形状一致。符号缺失总是报告为
    /// `SymbolNotFound`，不会被形状错误掩盖。
    pub fn bind<'lib, F: NativeSignature>(
        &self,
        handle: &'lib LibraryHandle,
        name: &str,
    ) -> BindingResult<BoundFn<'lib, F>> {
        let descriptor = self
            .descriptor(name)
            .ok_or_else(|| BindingError::UnknownDescriptor(name.to_string()))?;

        // SAFETY: 返回前会校验 F 的形状与描述符一致；描述符表是原生头文件声明的镜像
        let symbol = unsafe { handle.symbol::<F>(descriptor.name)? };

        if !descriptor.matches::<F>() {
            return Err(BindingError::SignatureMismatch {
                symbol: descriptor.name.to_string(),
                declared: descriptor.shape_string(),
                requested: F::describe(),
            });
        }

        tracing::trace!(target: "bindings", "Bound {}", descriptor.signature());

        Ok(BoundFn { symbol, descriptor })
    }
}

/// 已校验的原生函数，生命周期受库句柄约束
pub struct BoundFn<'lib, F> {
    symbol: Symbol<'lib, F>,
    descriptor: &'static CallDescriptor,
}

impl<'lib, F: NativeSignature> BoundFn<'lib, F> {
    /// 取出函数指针；调用仍然是 `unsafe` 的
    pub fn get(&self) -> F {
        *self.symbol
    }

    pub fn descriptor(&self) -> &'static CallDescriptor {
        self.descriptor
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }
}

impl<F> std::fmt::Debug for BoundFn<'_, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundFn")
            .field("symbol", &self.descriptor.signature())
            .finish()
    }
}
