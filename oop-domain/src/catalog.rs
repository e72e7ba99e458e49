//! 目录（catalog）演示：组合与聚合
//!
//! `Book` 以组合方式直接持有一个 `Author`，以聚合方式维护有序的章节列表。
//! 章节在构造后通过显式操作追加，保持插入顺序，不去重、不排序。
//!
use std::fmt;

use bon::Builder;
use serde::{Deserialize, Serialize};

/// 作者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    name: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Author: {}", self.name)
    }
}

/// 章节：标题与页数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    title: String,
    num_pages: u32,
}

impl Chapter {
    pub fn new(title: impl Into<String>, num_pages: u32) -> Self {
        Self {
            title: title.into(),
            num_pages,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn num_pages(&self) -> u32 {
        self.num_pages
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} pages)", self.title, self.num_pages)
    }
}

/// 书：组合一个作者，聚合有序章节列表
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[builder(into)]
    title: String,
    author: Author,
    /// 构建时未指定则默认为空的有序序列
    #[builder(default)]
    chapters: Vec<Chapter>,
}

impl Book {
    /// 以空章节列表构造
    pub fn new(title: impl Into<String>, author: Author) -> Self {
        Self {
            title: title.into(),
            author,
            chapters: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// 追加章节到列表末尾，保持插入顺序
    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }
}

impl fmt::Display for Book {
    /// 标题行、作者渲染，然后是从 1 开始编号的章节列表
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book: {}\n{}\nChapters:", self.title, self.author)?;
        for (idx, chapter) in self.chapters.iter().enumerate() {
            write!(f, "\n  Chapter {}: {}", idx + 1, chapter)?;
        }
        Ok(())
    }
}
