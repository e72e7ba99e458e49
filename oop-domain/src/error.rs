//! 领域层统一错误定义
//!
//! 聚焦能力检查、类型匹配、输入解析与数值校验等最小必要集合，
//! 各演示模块统一以 `DomainError` 向调用方暴露失败，不做内部恢复或重试。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 序列化/输入解析 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("parse error: {reason}")]
    Parse { reason: String },
    #[error("missing field: {field}")]
    MissingField { field: String },

    // --- 能力与类型检查 ---
    #[error("operand must be of type {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
    #[error("capability not supported: type={type_name}, operation={operation}")]
    CapabilityNotSupported {
        type_name: &'static str,
        operation: &'static str,
    },

    // --- 数值校验 ---
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
