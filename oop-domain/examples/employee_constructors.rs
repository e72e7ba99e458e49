//! Employee 多路构造器使用示例
//!
//! 展示同一逻辑数据经三条构造路径得到字段一致的实例，以及按需的部门校验。
//!
//! 运行示例：
//! ```bash
//! cargo run -p oop-domain --example employee_constructors
//! ```

use std::collections::HashMap;

use anyhow::Result;
use oop_domain::staff::{Employee, is_valid_department};

fn main() -> Result<()> {
    println!("=== Employee 多路构造器示例 ===\n");

    // 1. 主构造器
    println!("1. 主构造器");
    let direct = Employee::new("001", "Alice", "IT");
    println!("   {}", direct.display_info());

    // 2. 分隔字符串解析（FromStr）
    println!("\n2. 从分隔字符串解析");
    let parsed: Employee = "001-Alice-IT".parse()?;
    println!("   {}", parsed.display_info());
    println!("   与主构造器结果一致: {}", parsed == direct);

    // 3. 键值映射构造
    println!("\n3. 从键值映射构造");
    let fields = HashMap::from([
        ("emp_id".to_string(), "001".to_string()),
        ("name".to_string(), "Alice".to_string()),
        ("department".to_string(), "IT".to_string()),
    ]);
    let mapped = Employee::from_map(&fields)?;
    println!("   {}", mapped.display_info());
    println!("   与主构造器结果一致: {}", mapped == direct);

    // 4. 畸形输入：段数不对的字符串 / 缺键的映射
    println!("\n4. 畸形输入的失败路径");
    let err = "001-Alice".parse::<Employee>().unwrap_err();
    println!("   段数不足: {err}");

    let mut missing = fields.clone();
    missing.remove("department");
    let err = Employee::from_map(&missing).unwrap_err();
    println!("   缺少键: {err}");

    // 5. 按需的部门校验（构造期不强制）
    println!("\n5. 按需的部门校验");
    for dept in ["IT", "Sales", "it", ""] {
        println!("   '{dept}' 合法: {}", is_valid_department(dept));
    }
    let unchecked = Employee::new("002", "Bob", "Sales");
    println!(
        "   构造期不校验: {} (合法: {})",
        unchecked.display_info(),
        unchecked.has_valid_department()
    );

    println!("\n=== 示例完成 ===");
    Ok(())
}
