//! 核心宏定义

/// 为配置结构体实现Default trait的宏
///
/// 使用示例:
/// ```rust
/// use raybind::impl_default;
///
/// struct Margins {
///     left: i32,
///     label: String,
/// }
///
/// impl_default!(Margins {
///     left: 8,
///     label: String::new(),
/// });
///
/// assert_eq!(Margins::default().left, 8);
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug, PartialEq)]
    struct Extent {
        width: i32,
        label: String,
    }

    impl_default!(Extent {
        width: 800,
        label: "window".to_string(),
    });

    #[test]
    fn test_impl_default() {
        let extent = Extent::default();
        assert_eq!(extent.width, 800);
        assert_eq!(extent.label, "window");
    }
}
