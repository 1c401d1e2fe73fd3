//! カテゴリ抽出

use crate::catalog::Item;
use serde::Serialize;
use std::collections::BTreeMap;

/// カテゴリ由来のフィールド名
pub const CATEGORY_FIELD: &str = "categories";

/// カテゴリ記述子
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub id: String,
    pub label: String,
    pub field: &'static str,
    pub values: Vec<String>,
}

impl CategoryDescriptor {
    fn new(category: &str) -> Self {
        Self {
            id: category.to_string(),
            label: category.to_string(),
            field: CATEGORY_FIELD,
            values: vec![category.to_string()],
        }
    }
}

/// 全アイテムのカテゴリから重複のないカテゴリ一覧を作る
///
/// 同じカテゴリが複数回現れた場合は最初のものを採用し、上書きしない。
pub fn determine_categories(items: &[Item]) -> BTreeMap<String, CategoryDescriptor> {
    let mut categories = BTreeMap::new();
    for category in items.iter().flat_map(|item| item.categories()) {
        categories
            .entry(category.clone())
            .or_insert_with(|| CategoryDescriptor::new(category));
    }
    categories
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
