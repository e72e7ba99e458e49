//! 学校契约与两所具体学校
//!
//! 两所学校仅在 GPA 刻度常量上不同（25 与 20），统计量经由各自的契约
//! 实现分派，这是本演示中真正的多态分发点。
//!
use serde::{Deserialize, Serialize};

use super::calculator;
use crate::error::DomainResult;

/// 学校抽象契约：两项必须实现的统计量，加上共享的报表渲染
pub trait School {
    /// 学校类型标签（用于报表标题）
    const TYPE: &'static str;

    /// GPA 刻度除数，由具体学校给定
    const GPA_SCALE: f64;

    /// 学校名称
    fn name(&self) -> &str;

    /// 学生成绩序列（可为空）
    fn grades(&self) -> &[f64];

    /// 计算平均分
    fn calculate_average(&self) -> f64;

    /// 计算 GPA；刻度为零时报错而非产生无穷大
    fn calculate_gpa(&self) -> DomainResult<f64>;

    /// 共享报表：无成绩时提前返回提示；否则依次渲染成绩列表、
    /// 平均分明细与 GPA 明细，平均分与 GPA 保留两位小数
    fn display_stats(&self) -> DomainResult<String> {
        if self.grades().is_empty() {
            return Ok(format!(
                "{} - {}: No student data available.",
                Self::TYPE,
                self.name()
            ));
        }

        let mut lines = Vec::new();
        lines.push(format!("{} | {} Student Grades:", Self::TYPE, self.name()));
        for (idx, grade) in self.grades().iter().enumerate() {
            lines.push(format!("  Student {}: {}", idx + 1, grade));
        }

        let total: f64 = self.grades().iter().sum();
        let count = self.grades().len();
        let avg = self.calculate_average();
        lines.push(String::new());
        lines.push("  -- Average Calculation Breakdown --".to_string());
        lines.push(format!("     Sum of grades = {total}"));
        lines.push(format!("     Number of students = {count}"));
        lines.push(format!("     Average = {total} / {count} = {avg:.2}"));

        let gpa = self.calculate_gpa()?;
        lines.push(String::new());
        lines.push("  -- GPA Calculation Breakdown --".to_string());
        lines.push(format!("     Scale divisor = {}", Self::GPA_SCALE));
        lines.push(format!(
            "     GPA = {avg:.2} / {} = {gpa:.2}",
            Self::GPA_SCALE
        ));

        Ok(lines.join("\n"))
    }
}

/// 刻度为 25 的学校
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolOne {
    name: String,
    grades: Vec<f64>,
}

impl SchoolOne {
    pub fn new(name: impl Into<String>, grades: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            grades,
        }
    }
}

impl School for SchoolOne {
    const TYPE: &'static str = "SchoolOne";
    const GPA_SCALE: f64 = 25.0;

    fn name(&self) -> &str {
        &self.name
    }

    fn grades(&self) -> &[f64] {
        &self.grades
    }

    fn calculate_average(&self) -> f64 {
        calculator::average(&self.grades)
    }

    fn calculate_gpa(&self) -> DomainResult<f64> {
        calculator::gpa(&self.grades, Self::GPA_SCALE)
    }
}

/// 刻度为 20 的学校，模拟另一套评分体系
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolTwo {
    name: String,
    grades: Vec<f64>,
}

impl SchoolTwo {
    pub fn new(name: impl Into<String>, grades: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            grades,
        }
    }
}

impl School for SchoolTwo {
    const TYPE: &'static str = "SchoolTwo";
    const GPA_SCALE: f64 = 20.0;

    fn name(&self) -> &str {
        &self.name
    }

    fn grades(&self) -> &[f64] {
        &self.grades
    }

    fn calculate_average(&self) -> f64 {
        calculator::average(&self.grades)
    }

    fn calculate_gpa(&self) -> DomainResult<f64> {
        calculator::gpa(&self.grades, Self::GPA_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 通过契约泛型调用，验证分发走的是各学校自己的实现
    fn stats_of<S: School>(school: &S) -> (f64, f64) {
        (
            school.calculate_average(),
            school.calculate_gpa().unwrap(),
        )
    }

    // 测试两所学校以不同刻度计算 GPA
    #[test]
    fn test_polymorphic_gpa_scales() {
        let one = SchoolOne::new("Greenwood High", vec![88.0, 92.0, 79.0, 85.0, 91.0]);
        let two = SchoolTwo::new("Maple Leaf School", vec![75.0, 84.0, 90.0, 68.0, 82.0]);

        assert_eq!(stats_of(&one), (87.0, 3.48));
        assert_eq!(stats_of(&two), (79.8, 3.99));
    }

    // 测试共享报表的完整渲染
    #[test]
    fn test_display_stats_full() {
        let one = SchoolOne::new("Greenwood High", vec![88.0, 92.0, 79.0, 85.0, 91.0]);
        let report = one.display_stats().unwrap();

        let expected = "\
SchoolOne | Greenwood High Student Grades:
  Student 1: 88
  Student 2: 92
  Student 3: 79
  Student 4: 85
  Student 5: 91

  -- Average Calculation Breakdown --
     Sum of grades = 435
     Number of students = 5
     Average = 435 / 5 = 87.00

  -- GPA Calculation Breakdown --
     Scale divisor = 25
     GPA = 87.00 / 25 = 3.48";
        assert_eq!(report, expected);
    }

    // 测试无成绩时的提前返回提示
    #[test]
    fn test_display_stats_empty() {
        let two = SchoolTwo::new("Maple Leaf School", Vec::new());
        assert_eq!(
            two.display_stats().unwrap(),
            "SchoolTwo - Maple Leaf School: No student data available."
        );
    }

    // 测试空成绩序列的统计量
    #[test]
    fn test_empty_grades_statistics() {
        let one = SchoolOne::new("Greenwood High", Vec::new());
        assert_eq!(one.calculate_average(), 0.0);
        assert_eq!(one.calculate_gpa().unwrap(), 0.0);
    }
}
