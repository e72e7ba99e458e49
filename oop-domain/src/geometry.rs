//! 几何（geometry）演示：二维向量值对象与运算符重载
//!
//! 组件字段对模块外不可见；点积以同模块自由函数直接读取两个操作数的
//! 组件（同类型可见性，外部调用方只能经由既定操作访问）。加法既提供
//! 编译期类型安全的 `+` 运算符，也提供面向动态操作数的运行时检查路径
//! `checked_add`。
//!
use std::{any::Any, fmt, ops::Add};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// 不可变的二维向量值对象
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 命名工厂：原点向量 (0, 0)
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    /// 面向动态类型操作数的加法；非 Vector 操作数返回 `TypeMismatch`，
    /// 两个操作数均不被改变
    pub fn checked_add<T: Any>(&self, other: &T) -> DomainResult<Self> {
        match (other as &dyn Any).downcast_ref::<Self>() {
            Some(v) => Ok(*self + *v),
            None => Err(DomainError::TypeMismatch {
                expected: "Vector".to_string(),
                found: std::any::type_name::<T>().to_string(),
            }),
        }
    }
}

/// 点积：同模块内直接访问两个操作数的私有组件
pub fn dot_product(v1: &Vector, v2: &Vector) -> f64 {
    v1.x * v2.x + v1.y * v2.y
}

impl Add for Vector {
    type Output = Self;

    /// 逐组件相加，返回新的向量值
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ValueObject for Vector {
    type Error = DomainError;

    /// 组件必须是有限数（按需校验，构造器不强制）
    fn validate(&self) -> Result<(), Self::Error> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(())
        } else {
            Err(DomainError::InvalidValue {
                reason: format!(
                    "vector components must be finite, got ({}, {})",
                    self.x, self.y
                ),
            })
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 测试加法逐组件求和并返回新值
    #[test]
    fn test_add_componentwise() {
        let v3 = Vector::new(5.0, 6.0) + Vector::new(7.0, 8.0);
        assert_eq!(v3, Vector::new(12.0, 14.0));
        assert_eq!(format!("{v3}"), "Vector(12, 14)");
    }

    // 测试加法交换律与结合律
    #[test]
    fn test_add_commutative_associative() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, 4.0);
        let c = Vector::new(5.0, 6.0);

        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
    }

    // 测试点积为逐组件乘积之和
    #[test]
    fn test_dot_product() {
        let v1 = Vector::new(5.0, 6.0);
        let v2 = Vector::new(7.0, 8.0);
        assert_eq!(dot_product(&v1, &v2), 83.0);
    }

    // 测试原点工厂每次返回等于 (0, 0) 的独立实例
    #[test]
    fn test_origin_factory() {
        assert_eq!(Vector::origin(), Vector::new(0.0, 0.0));
        assert_eq!(Vector::origin(), Vector::default());
        assert_eq!(format!("{}", Vector::origin()), "Vector(0, 0)");

        let mut first = Vector::origin();
        first = first + Vector::new(1.0, 1.0);
        assert_eq!(first, Vector::new(1.0, 1.0));
        assert_eq!(Vector::origin(), Vector::new(0.0, 0.0));
    }

    // 测试动态操作数加法的类型检查与操作数不变性
    #[test]
    fn test_checked_add_type_mismatch() {
        let v1 = Vector::new(5.0, 6.0);
        let v2 = Vector::new(7.0, 8.0);
        assert_eq!(v1.checked_add(&v2).unwrap(), Vector::new(12.0, 14.0));

        let operand = 5_i32;
        let err = v1.checked_add(&operand).unwrap_err();
        match err {
            DomainError::TypeMismatch { expected, found } => {
                assert_eq!(expected, "Vector");
                assert_eq!(found, "i32");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(v1, Vector::new(5.0, 6.0));
        assert_eq!(operand, 5);
    }

    // 测试按需校验：有限组件通过，NaN 组件报错
    #[test]
    fn test_validate_finite_components() {
        assert!(Vector::new(1.5, -2.5).validate().is_ok());

        let err = Vector::new(f64::NAN, 0.0).validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { .. }));

        let err = Vector::new(0.0, f64::INFINITY).validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { .. }));
    }

    // 测试序列化和反序列化
    #[test]
    fn test_vector_serde() {
        let v = Vector::new(5.0, 6.0);

        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":5.0,"y":6.0}"#);

        let deserialized: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, v);
    }
}
