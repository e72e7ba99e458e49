//! OOP 概念演示领域层（oop-domain）
//!
//! 以五个互不依赖的小领域模型演示常见的面向对象建模构件：
//! - 能力契约与实例检查（`fleet`）：SchoolBus 具备 Vehicle 能力，Fruit 不具备
//! - 多路构造器与静态校验（`staff`）：Employee 的三条等价构造路径
//! - 抽象契约与模板方法（`grading`）：School 契约、纯函数计算器与两所学校
//! - 值对象与运算符重载（`geometry`）：二维向量的加法、点积与原点工厂
//! - 组合与聚合（`catalog`）：Book 组合 Author、聚合有序章节列表
//!
//! 各领域之间无共享运行时状态；本 crate 不做 I/O，所有渲染均返回字符串或
//! 实现 `Display`，由调用方（demo 可执行文件或示例）负责输出。
//!
pub mod catalog;
pub mod entity;
pub mod error;
pub mod fleet;
pub mod geometry;
pub mod grading;
pub mod staff;
pub mod value_object;
