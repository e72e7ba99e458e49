//! 五个演示的合并运行入口，按 Q1..Q5 顺序依次执行并打印到标准输出。
//!
//! 运行：
//! ```bash
//! cargo run -p demo
//! ```
use std::collections::HashMap;

use anyhow::Result;
use oop_domain::catalog::{Author, Book, Chapter};
use oop_domain::fleet::{self, Fruit, SchoolBus, Vehicle, is_vehicle};
use oop_domain::geometry::{Vector, dot_product};
use oop_domain::grading::{School, SchoolOne, SchoolTwo};
use oop_domain::staff::{Employee, is_valid_department};

fn main() -> Result<()> {
    run_instance_checks();
    run_multiple_constructors()?;
    run_school_grades()?;
    run_vectors();
    run_book_composition();
    Ok(())
}

// Q1：能力契约与实例检查
fn run_instance_checks() {
    println!("\nQ1: Determine if School bus is also an instance of the Vehicle class");
    println!("___________________________________________________________________");
    println!("------ Testing with a Vehicle instance ------");
    let bus = SchoolBus::new("Mitsubishi L300XV", "2014", 17);
    println!("{}", bus.start_engine());
    println!("{bus}");
    println!(
        "Is {} School Bus an instance of Vehicle? {}",
        bus.name(),
        is_vehicle(&bus)
    );

    println!("\n------ Testing with a Non-Vehicle instance ------");
    let fruit = Fruit::new("Apple", "Red");
    println!("{fruit}");
    println!(
        "Is {} an instance of Vehicle? {}",
        fruit.name(),
        is_vehicle(&fruit)
    );

    // 对不具备 Vehicle 能力的对象调用车辆专属操作会显式报错
    if let Err(err) = fleet::start_engine(&fruit) {
        println!("ERROR: {err}");
    }

    println!("\n==================================================================\n");
}

// Q2：一个主构造器加两条命名构造路径
fn run_multiple_constructors() -> Result<()> {
    println!("Q2: Build a class Employee with multiple constructors");
    println!("___________________________________________________________________");

    println!("\nUsing new:");
    let emp = Employee::new("001", "Alice", "IT");
    println!("{}", emp.display_info());
    println!("METHOD: initialized using new | Employee::new(\"001\", \"Alice\", \"IT\")");

    println!("\nUsing from_str:");
    let emp: Employee = "001-Alice-IT".parse()?;
    println!("{}", emp.display_info());
    println!("METHOD: initialized using parse() | \"001-Alice-IT\".parse::<Employee>()");

    println!("\nUsing from_map:");
    let fields = HashMap::from([
        ("emp_id".to_string(), "001".to_string()),
        ("name".to_string(), "Alice".to_string()),
        ("department".to_string(), "IT".to_string()),
    ]);
    let emp = Employee::from_map(&fields)?;
    println!("{}", emp.display_info());
    println!("METHOD: initialized using from_map() | Employee::from_map({{emp_id, name, department}})");

    println!("\nUsing is_valid_department:");
    let dept_to_check = "IT";
    println!(
        "Department '{}' is valid: {}",
        dept_to_check,
        is_valid_department(dept_to_check)
    );

    println!("\n==================================================================\n");
    Ok(())
}

// Q3：抽象契约与两所学校的成绩报表
fn run_school_grades() -> Result<()> {
    println!("Q3: Build a two class call SchoolOne and SchoolTwo that");
    println!("    display there list of students average grades and GPA.");
    println!("___________________________________________________________________");
    let school_one = SchoolOne::new("Greenwood High", vec![88.0, 92.0, 79.0, 85.0, 91.0]);
    let school_two = SchoolTwo::new("Maple Leaf School", vec![75.0, 84.0, 90.0, 68.0, 82.0]);

    println!("{}\n", school_one.display_stats()?);
    println!("{}\n", school_two.display_stats()?);

    println!("==================================================================\n");
    Ok(())
}

// Q4：运算符重载与动态操作数的类型检查
fn run_vectors() {
    println!("Q4: Operator Overloading Create a Vector class that supports addition");
    println!("    using the + operator, allowing you to add two vectors.");
    println!("___________________________________________________________________");
    let vector1 = Vector::new(5.0, 6.0);
    let vector2 = Vector::new(7.0, 8.0);
    let vector3 = vector1 + vector2;

    println!("vector1: {vector1}");
    println!("vector2: {vector2}");
    println!("\nvector1 + vector2 = {vector3}");

    println!(
        "\nDot Product of vector1 and vector2: {}",
        dot_product(&vector1, &vector2)
    );

    println!("\nOrigin vector: {}", Vector::origin());

    // 类型不匹配在调用点捕获并报告，不终止程序
    println!("\n------ Q4: Testing with non-Vector input ------");
    match vector1.checked_add(&5) {
        Ok(result) => println!("vector1 + 5 = {result}"),
        Err(error) => println!("ERROR: {error}"),
    }

    println!("\n==================================================================\n");
}

// Q5：组合优于继承
fn run_book_composition() {
    println!("Q5: Composition Over Inheritance: Create a Book class with a Author class");
    println!("    included within it, demonstrating composition over inheritance.");
    println!("___________________________________________________________________");
    let author = Author::new("Koyoharu Gotouge");
    let mut book = Book::new("Kimetsu no Yaiba: Volume 1", author);

    book.add_chapter(Chapter::new("Cruelty", 55));
    book.add_chapter(Chapter::new("The Stranger", 25));
    book.add_chapter(Chapter::new("Return by Dawn", 23));
    book.add_chapter(Chapter::new("Tanjiro's Journal, Part One", 19));
    book.add_chapter(Chapter::new("Tanjiro's Journal, Part Two", 19));
    book.add_chapter(Chapter::new("A Mountain of Hands", 19));
    book.add_chapter(Chapter::new("Spirits of the Deceased", 21));

    println!("{book}");

    println!("\n==================================================================");
}
