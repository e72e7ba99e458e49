//! Vector 值对象使用示例
//!
//! 展示二维向量的加法运算符、点积、原点工厂与动态操作数的类型检查。
//!
//! 运行示例：
//! ```bash
//! cargo run -p oop-domain --example vector_ops
//! ```

use oop_domain::geometry::{Vector, dot_product};
use oop_domain::value_object::ValueObject;

fn main() {
    println!("=== Vector 值对象示例 ===\n");

    // 1. 运算符重载：+ 返回新的不可变值
    println!("1. 加法运算符");
    let v1 = Vector::new(5.0, 6.0);
    let v2 = Vector::new(7.0, 8.0);
    println!("   v1 = {v1}");
    println!("   v2 = {v2}");
    println!("   v1 + v2 = {}", v1 + v2);

    // 2. 点积
    println!("\n2. 点积");
    println!("   dot_product(v1, v2) = {}", dot_product(&v1, &v2));

    // 3. 原点工厂
    println!("\n3. 原点工厂");
    println!("   Vector::origin() = {}", Vector::origin());

    // 4. 动态操作数的运行时类型检查
    println!("\n4. 动态操作数的类型检查");
    match v1.checked_add(&v2) {
        Ok(sum) => println!("   v1.checked_add(&v2) = {sum}"),
        Err(err) => println!("   ERROR: {err}"),
    }
    match v1.checked_add(&5) {
        Ok(sum) => println!("   v1.checked_add(&5) = {sum}"),
        Err(err) => println!("   ERROR: {err}"),
    }

    // 5. 按需校验（构造器不强制）
    println!("\n5. 按需校验");
    println!("   {v1} 校验通过: {}", v1.validate().is_ok());
    let bad = Vector::new(f64::NAN, 0.0);
    match bad.validate() {
        Ok(()) => println!("   {bad} 校验通过"),
        Err(err) => println!("   {bad} 校验失败: {err}"),
    }

    // 6. 序列化和反序列化
    println!("\n6. 序列化和反序列化");
    let json = serde_json::to_string(&v1).unwrap();
    println!("   序列化: {v1} -> {json}");
    let back: Vector = serde_json::from_str(&json).unwrap();
    println!("   反序列化: {json} -> {back}");

    println!("\n=== 示例完成 ===");
}
