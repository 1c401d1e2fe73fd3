//! サイドバーの項目
//!
//! 先頭に「All Items」、続いてカテゴリ、最後に各フィルタ値を並べる。

use crate::filter::FilterField;
use crate::page::TilePage;

/// サイドバーの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEntry {
    AllItems,
    Category(String),
    Filter(FilterField, String),
}

/// タイルページの状態からサイドバーの行を作る
pub fn entries(page: &TilePage) -> Vec<SidebarEntry> {
    let categories = page
        .categories()
        .keys()
        .map(|id| SidebarEntry::Category(id.clone()));
    let filters = page.config().filter_groups.iter().flat_map(|field| {
        page.filter_values(*field)
            .into_iter()
            .map(|d| SidebarEntry::Filter(*field, d.value.clone()))
            .collect::<Vec<_>>()
    });

    std::iter::once(SidebarEntry::AllItems)
        .chain(categories)
        .chain(filters)
        .collect()
}

impl SidebarEntry {
    /// 行を選択したときの操作をページに適用
    pub fn activate(&self, page: &mut TilePage) {
        match self {
            SidebarEntry::AllItems => {
                page.select_category(None);
            }
            SidebarEntry::Category(id) => {
                page.select_category(Some(id.as_str()));
            }
            SidebarEntry::Filter(field, value) => {
                page.toggle_filter(*field, value);
            }
        }
    }

    /// 選択中・有効な状態か
    pub fn is_active(&self, page: &TilePage) -> bool {
        match self {
            SidebarEntry::AllItems => page.selected_category().is_none(),
            SidebarEntry::Category(id) => page.selected_category() == Some(id.as_str()),
            SidebarEntry::Filter(field, value) => page
                .filters()
                .get(field.as_str())
                .and_then(|values| values.get(value))
                .is_some_and(|d| d.active),
        }
    }
}
