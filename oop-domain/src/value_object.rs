//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//! 校验是按需操作：构造器不强制调用 `validate`，由调用方在需要时检查。
//!

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 按需校验值对象
    fn validate(&self) -> Result<(), Self::Error>;
}
