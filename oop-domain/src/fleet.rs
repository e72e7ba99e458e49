//! 车队（fleet）演示：能力契约、组合复用与实例检查
//!
//! `Vehicle` 是显式的能力契约：实现该 trait 的类型才可被当作车辆多态使用。
//! `Fruit` 不实现它；对其调用车辆专属操作会得到 `CapabilityNotSupported`，
//! 而不是静默无操作。
//!
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// 共享车辆字段，具体车型通过组合完成基础初始化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleBase {
    name: String,
    model: String,
}

impl VehicleBase {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// 车辆能力契约
pub trait Vehicle {
    /// 车辆名称
    fn name(&self) -> &str;

    /// 车辆型号（这里按出厂年份记录）
    fn model(&self) -> &str;

    /// 共享能力：启动引擎
    fn start_engine(&self) -> &'static str {
        "Engine started."
    }

    /// 多态文本渲染，默认给出基础形式
    fn describe(&self) -> String {
        format!("Vehicle({}, {})", self.name(), self.model())
    }
}

/// 车队成员：可渲染，且可显式查询是否具备 Vehicle 能力
pub trait FleetItem: fmt::Display {
    /// 类型标签（用于错误报告与输出）
    fn type_label(&self) -> &'static str;

    /// 若实现了 Vehicle 能力则返回其接口，默认不具备
    fn as_vehicle(&self) -> Option<&dyn Vehicle> {
        None
    }
}

/// 校车：通过组合 `VehicleBase` 复用共享字段，并追加载客量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolBus {
    base: VehicleBase,
    capacity: u32,
}

impl SchoolBus {
    /// 共享字段交由 `VehicleBase::new` 初始化，再设置载客量
    pub fn new(name: impl Into<String>, model: impl Into<String>, capacity: u32) -> Self {
        Self {
            base: VehicleBase::new(name, model),
            capacity,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

impl Vehicle for SchoolBus {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn model(&self) -> &str {
        self.base.model()
    }

    /// 覆写默认渲染，补充载客量信息
    fn describe(&self) -> String {
        format!(
            "INFO: {} School Bus, made in {}, with a capacity of {} passengers.",
            self.name(),
            self.model(),
            self.capacity
        )
    }
}

impl FleetItem for SchoolBus {
    fn type_label(&self) -> &'static str {
        "SchoolBus"
    }

    fn as_vehicle(&self) -> Option<&dyn Vehicle> {
        Some(self)
    }
}

impl fmt::Display for SchoolBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// 与车辆无关的类型，不具备 Vehicle 能力
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    name: String,
    color: String,
}

impl Fruit {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl FleetItem for Fruit {
    fn type_label(&self) -> &'static str {
        "Fruit"
    }
}

impl fmt::Display for Fruit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INFO: {} {}", self.color, self.name)
    }
}

/// 实例检查：对象是否满足 Vehicle 能力契约
pub fn is_vehicle(item: &dyn FleetItem) -> bool {
    item.as_vehicle().is_some()
}

/// 车辆专属操作的显式运行时入口；不具备能力的类型返回错误
pub fn start_engine(item: &dyn FleetItem) -> DomainResult<&'static str> {
    item.as_vehicle()
        .map(Vehicle::start_engine)
        .ok_or(DomainError::CapabilityNotSupported {
            type_name: item.type_label(),
            operation: "start_engine",
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    // 未覆写渲染的测试车型，走契约的默认实现
    struct PlainVehicle {
        base: VehicleBase,
    }

    impl Vehicle for PlainVehicle {
        fn name(&self) -> &str {
            self.base.name()
        }

        fn model(&self) -> &str {
            self.base.model()
        }
    }

    // 测试默认的基础渲染与共享能力
    #[test]
    fn test_default_describe() {
        let v = PlainVehicle {
            base: VehicleBase::new("Truck", "2020"),
        };
        assert_eq!(v.describe(), "Vehicle(Truck, 2020)");
        assert_eq!(v.start_engine(), "Engine started.");
    }

    // 测试校车覆写的多态渲染
    #[test]
    fn test_school_bus_describe() {
        let bus = SchoolBus::new("Mitsubishi L300XV", "2014", 17);
        assert_eq!(
            bus.describe(),
            "INFO: Mitsubishi L300XV School Bus, made in 2014, with a capacity of 17 passengers."
        );
        assert_eq!(format!("{bus}"), bus.describe());
        assert_eq!(bus.capacity(), 17);
    }

    // 测试实例检查：校车满足 Vehicle 契约，水果不满足
    #[test]
    fn test_is_vehicle_membership() {
        let bus = SchoolBus::new("Mitsubishi L300XV", "2014", 17);
        let fruit = Fruit::new("Apple", "Red");

        assert!(is_vehicle(&bus));
        assert!(!is_vehicle(&fruit));
    }

    // 测试对不具备能力的类型调用车辆专属操作
    #[test]
    fn test_start_engine_capability() {
        let bus = SchoolBus::new("Mitsubishi L300XV", "2014", 17);
        assert_eq!(start_engine(&bus).unwrap(), "Engine started.");

        let fruit = Fruit::new("Apple", "Red");
        let err = start_engine(&fruit).unwrap_err();
        match err {
            DomainError::CapabilityNotSupported {
                type_name,
                operation,
            } => {
                assert_eq!(type_name, "Fruit");
                assert_eq!(operation, "start_engine");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    // 测试水果自身的渲染
    #[test]
    fn test_fruit_display() {
        let fruit = Fruit::new("Apple", "Red");
        assert_eq!(format!("{fruit}"), "INFO: Red Apple");
        assert_eq!(fruit.name(), "Apple");
        assert_eq!(fruit.color(), "Red");
    }
}
