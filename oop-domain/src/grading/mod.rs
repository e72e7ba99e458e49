//! 成绩（grading）演示：抽象契约、模板方法与纯函数计算器
//!
//! `School` 契约要求两项统计量（平均分与 GPA），由各学校按自身的 GPA
//! 刻度实现；共享的报表渲染以契约上的默认方法提供。无状态的计算逻辑
//! 独立为 `calculator` 纯函数模块。
//!
pub mod calculator;
pub mod school;

pub use school::{School, SchoolOne, SchoolTwo};
