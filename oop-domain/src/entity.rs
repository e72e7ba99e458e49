//! 实体（Entity）基础抽象
//!
//! 为具备唯一标识的领域对象提供统一的标识（Id）访问能力；
//! 实体以标识区分彼此，值对象则以值相等为准（见 `value_object`）。
//!
use std::{fmt::Display, str::FromStr};

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可解析、可显示与可克隆
    type Id: FromStr + Clone + Display;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}
