//! タイルページの状態と絞り込み

use super::TilePageConfig;
use crate::catalog::Item;
use crate::filter::{CategoryDescriptor, FilterDescriptor, FilterField, FilterState};
use std::collections::BTreeMap;

/// タイルページの状態
#[derive(Debug, Clone)]
pub struct TilePage {
    config: TilePageConfig,
    categories: BTreeMap<String, CategoryDescriptor>,
    filters: FilterState,
    search: String,
    /// None は「すべてのアイテム」
    selected_category: Option<String>,
}

impl TilePage {
    /// アイテム一覧からカテゴリと絞り込み候補を求めて作成
    pub fn new(config: TilePageConfig, items: &[Item]) -> Self {
        let mut page = Self {
            config,
            categories: BTreeMap::new(),
            filters: FilterState::new(),
            search: String::new(),
            selected_category: None,
        };
        page.refresh(items);
        page
    }

    /// アイテム一覧の変更を反映
    ///
    /// まだ存在する値の active 状態は引き継ぐ。
    /// 選択中のカテゴリが消えた場合は「すべて」に戻す。
    pub fn refresh(&mut self, items: &[Item]) {
        self.categories = (self.config.get_available_categories)(items);

        let mut filters =
            (self.config.get_available_filters)(&FilterState::new(), items, self.config.filter_groups);
        for (field, values) in filters.iter_mut() {
            for (value, descriptor) in values.iter_mut() {
                descriptor.active = self
                    .filters
                    .get(field)
                    .and_then(|old| old.get(value))
                    .is_some_and(|old| old.active);
            }
        }
        self.filters = filters;

        if let Some(category) = &self.selected_category {
            if !self.categories.contains_key(category) {
                self.selected_category = None;
            }
        }
    }

    pub fn config(&self) -> &TilePageConfig {
        &self.config
    }

    pub fn categories(&self) -> &BTreeMap<String, CategoryDescriptor> {
        &self.categories
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// 指定フィールドの絞り込み候補（値の昇順）
    pub fn filter_values(&self, field: FilterField) -> Vec<&FilterDescriptor> {
        self.filters
            .get(field.as_str())
            .map(|values| values.values().collect())
            .unwrap_or_default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// カテゴリを選択（None で「すべて」）
    ///
    /// 存在しないカテゴリは選択できない。
    pub fn select_category(&mut self, category: Option<&str>) -> bool {
        match category {
            None => {
                self.selected_category = None;
                true
            }
            Some(id) if self.categories.contains_key(id) => {
                self.selected_category = Some(id.to_string());
                true
            }
            Some(_) => false,
        }
    }

    /// フィルタ値の active を反転
    ///
    /// 候補にない値なら何もせず false。
    pub fn toggle_filter(&mut self, field: FilterField, value: &str) -> bool {
        match self
            .filters
            .get_mut(field.as_str())
            .and_then(|values| values.get_mut(value))
        {
            Some(descriptor) => {
                descriptor.active = !descriptor.active;
                true
            }
            None => false,
        }
    }

    /// すべてのフィルタを解除し、検索文字列もクリア
    pub fn clear_filters(&mut self) {
        for descriptor in self.filters.values_mut().flat_map(|v| v.values_mut()) {
            descriptor.active = false;
        }
        self.search.clear();
    }

    /// 何らかの絞り込みが効いているか
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || self
                .filters
                .values()
                .flat_map(|v| v.values())
                .any(|d| d.active)
    }

    /// 表示対象のアイテム（並べ替え済み）
    pub fn visible_items<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        let mut sorted: Vec<&Item> = items.iter().collect();
        (self.config.items_sorter)(&mut sorted);

        let keyword = self.search.to_lowercase();
        sorted
            .into_iter()
            .filter(|item| self.in_selected_category(item))
            .filter(|item| self.passes_filter_groups(item))
            .filter(|item| (self.config.keyword_compare)(&keyword, Some(*item)))
            .collect()
    }

    /// カテゴリごとの件数（カテゴリ選択以外の絞り込みを適用）
    pub fn category_counts(&self, items: &[Item]) -> BTreeMap<String, usize> {
        let keyword = self.search.to_lowercase();
        let mut counts: BTreeMap<String, usize> =
            self.categories.keys().map(|k| (k.clone(), 0)).collect();
        let matching = items
            .iter()
            .filter(|item| self.passes_filter_groups(item))
            .filter(|item| (self.config.keyword_compare)(&keyword, Some(*item)));
        for item in matching {
            for category in item.categories() {
                if let Some(count) = counts.get_mut(category) {
                    *count += 1;
                }
            }
        }
        counts
    }

    /// フィルタ値ごとの件数（選択カテゴリとキーワードを適用）
    pub fn filter_counts(&self, items: &[Item], field: FilterField) -> BTreeMap<String, usize> {
        let keyword = self.search.to_lowercase();
        let Some(values) = self.filters.get(field.as_str()) else {
            return BTreeMap::new();
        };
        values
            .values()
            .map(|descriptor| {
                let count = items
                    .iter()
                    .filter(|item| self.in_selected_category(item))
                    .filter(|item| (self.config.keyword_compare)(&keyword, Some(*item)))
                    .filter(|item| {
                        field
                            .raw_value(item)
                            .is_some_and(|raw| descriptor.matches(raw))
                    })
                    .count();
                (descriptor.value.clone(), count)
            })
            .collect()
    }

    /// 絞り込み結果が空のときのメッセージ
    ///
    /// アイテム自体が無い場合や、結果が残っている場合は None。
    pub fn empty_state(&self, items: &[Item]) -> Option<&'static str> {
        if items.is_empty() || !self.visible_items(items).is_empty() {
            None
        } else {
            Some(self.config.empty_state_info)
        }
    }

    fn in_selected_category(&self, item: &Item) -> bool {
        self.selected_category
            .as_ref()
            .and_then(|id| self.categories.get(id))
            .is_none_or(|category| category.values.iter().any(|v| item.in_category(v)))
    }

    /// フィールド間は AND、同じフィールド内の値は OR
    fn passes_filter_groups(&self, item: &Item) -> bool {
        self.config.filter_groups.iter().all(|field| {
            let active: Vec<&FilterDescriptor> = self
                .filters
                .get(field.as_str())
                .map(|values| values.values().filter(|d| d.active).collect())
                .unwrap_or_default();
            if active.is_empty() {
                return true;
            }
            field
                .raw_value(item)
                .is_some_and(|raw| active.iter().any(|d| d.matches(raw)))
        })
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
