//! 成绩计算器：无状态的纯函数集合
//!
use crate::error::{DomainError, DomainResult};

/// 平均分：总分除以人数，空序列定义为 0（避免除零）
pub fn average(grades: &[f64]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    grades.iter().sum::<f64>() / grades.len() as f64
}

/// GPA：平均分除以刻度，四舍五入到两位小数；刻度为零视为非法输入
pub fn gpa(grades: &[f64], scale: f64) -> DomainResult<f64> {
    if scale == 0.0 {
        return Err(DomainError::InvalidValue {
            reason: "gpa scale divisor must be non-zero".to_string(),
        });
    }
    Ok((average(grades) / scale * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 测试空序列的平均分定义为 0
    #[test]
    fn test_average_empty() {
        assert_eq!(average(&[]), 0.0);
    }

    // 测试平均分为总分除以人数（浮点语义）
    #[test]
    fn test_average_exact() {
        assert_eq!(average(&[88.0, 92.0, 79.0, 85.0, 91.0]), 87.0);
        assert_eq!(average(&[75.0, 84.0, 90.0, 68.0, 82.0]), 79.8);
        assert_eq!(average(&[10.0]), 10.0);
    }

    // 测试 GPA 为平均分除以刻度并保留两位小数
    #[test]
    fn test_gpa_rounding() {
        let grades = [88.0, 92.0, 79.0, 85.0, 91.0];
        assert_eq!(gpa(&grades, 25.0).unwrap(), 3.48);

        let grades = [75.0, 84.0, 90.0, 68.0, 82.0];
        assert_eq!(gpa(&grades, 20.0).unwrap(), 3.99);
    }

    // 测试空序列的 GPA 由空平均分推出为 0
    #[test]
    fn test_gpa_empty() {
        assert_eq!(gpa(&[], 25.0).unwrap(), 0.0);
    }

    // 测试刻度为零时报错而不是产生无穷大
    #[test]
    fn test_gpa_zero_scale() {
        let err = gpa(&[88.0], 0.0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { .. }));
    }
}
