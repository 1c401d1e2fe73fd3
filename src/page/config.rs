//! タイルページの設定

use crate::catalog::Item;
use crate::filter::{CategoryDescriptor, FilterField, FilterState};
use std::collections::BTreeMap;

/// アイテムの並べ替え
pub type ItemsSorter = fn(&mut Vec<&Item>);
/// カテゴリ一覧の抽出
pub type CategoryProvider = fn(&[Item]) -> BTreeMap<String, CategoryDescriptor>;
/// 絞り込み候補の構築
pub type FilterProvider = fn(&FilterState, &[Item], &[FilterField]) -> FilterState;
/// キーワード一致判定（キーワードは小文字化済み）
pub type KeywordMatcher = fn(&str, Option<&Item>) -> bool;

/// タイルページに渡す設定
#[derive(Debug, Clone, Copy)]
pub struct TilePageConfig {
    pub items_sorter: ItemsSorter,
    pub get_available_categories: CategoryProvider,
    pub get_available_filters: FilterProvider,
    pub filter_groups: &'static [FilterField],
    pub keyword_compare: KeywordMatcher,
    /// フィルタで全件が除外されたときのメッセージ
    pub empty_state_info: &'static str,
}
