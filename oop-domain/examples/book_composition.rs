//! Book 组合与聚合使用示例
//!
//! 展示 Book 组合一个 Author、聚合有序章节列表，以及构建器的默认空章节。
//!
//! 运行示例：
//! ```bash
//! cargo run -p oop-domain --example book_composition
//! ```

use oop_domain::catalog::{Author, Book, Chapter};

fn main() {
    println!("=== Book 组合与聚合示例 ===\n");

    // 1. 构建器：未指定章节时默认为空列表
    println!("1. 构建器构造（默认空章节）");
    let book = Book::builder()
        .title("Kimetsu no Yaiba: Volume 1")
        .author(Author::new("Koyoharu Gotouge"))
        .build();
    println!("   章节数: {}", book.chapters().len());

    // 2. 构造后按序追加章节
    println!("\n2. 追加章节（保持插入顺序）");
    let mut book = book;
    book.add_chapter(Chapter::new("Cruelty", 55));
    book.add_chapter(Chapter::new("The Stranger", 25));
    book.add_chapter(Chapter::new("Return by Dawn", 23));
    println!("   章节数: {}", book.chapters().len());

    // 3. 整书渲染
    println!("\n3. 整书渲染");
    println!("{book}");

    println!("\n=== 示例完成 ===");
}
