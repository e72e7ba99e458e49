//! 员工（staff）演示：多路构造器与静态校验
//!
//! `Employee` 提供三条等价的构造路径：主构造器 `new`、分隔字符串解析
//! （`FromStr`）与键值映射（`from_map`），同一逻辑数据经任一路径得到
//! 字段完全一致的实例。`is_valid_department` 是独立于实例的纯函数校验，
//! 构造路径有意不调用它：校验按需进行，而非构造期强制。
//!
use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// 允许的部门集合（精确匹配，大小写敏感）
pub const VALID_DEPARTMENTS: [&str; 4] = ["HR", "IT", "Marketing", "Finance"];

/// 校验部门是否在允许集合内；纯函数，不依赖任何实例状态
pub fn is_valid_department(department: &str) -> bool {
    VALID_DEPARTMENTS.contains(&department)
}

/// 员工实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    emp_id: String,
    name: String,
    department: String,
}

impl Employee {
    /// 主构造器；不校验部门合法性
    pub fn new(
        emp_id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            emp_id: emp_id.into(),
            name: name.into(),
            department: department.into(),
        }
    }

    /// 从键值映射构造，要求 `emp_id`、`name`、`department` 三个键齐全
    pub fn from_map(fields: &HashMap<String, String>) -> DomainResult<Self> {
        let field = |key: &'static str| {
            fields.get(key).cloned().ok_or(DomainError::MissingField {
                field: key.to_string(),
            })
        };
        Ok(Self::new(
            field("emp_id")?,
            field("name")?,
            field("department")?,
        ))
    }

    pub fn emp_id(&self) -> &str {
        &self.emp_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    /// 固定格式的单行信息渲染
    pub fn display_info(&self) -> String {
        format!(
            "Employee ID: {}, Name: {}, Department: {}",
            self.emp_id, self.name, self.department
        )
    }

    /// 部门合法性查询，委托给纯函数校验
    pub fn has_valid_department(&self) -> bool {
        is_valid_department(&self.department)
    }
}

impl FromStr for Employee {
    type Err = DomainError;

    /// 解析 `"<id>-<name>-<department>"` 形式的单字符串构造路径；
    /// 分隔出的段数不等于三时报解析错误
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        match parts.as_slice() {
            [emp_id, name, department] => Ok(Self::new(*emp_id, *name, *department)),
            _ => Err(DomainError::Parse {
                reason: format!(
                    "expected \"<id>-<name>-<department>\", got {} part(s) in {s:?}",
                    parts.len()
                ),
            }),
        }
    }
}

impl Entity for Employee {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.emp_id
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_info())
    }
}
