//! 絞り込み候補の構築

use super::provider::{get_provider_value, provider_synonyms};
use crate::catalog::Item;
use crate::error::HubError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// 絞り込み可能なフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterField {
    Provider,
}

impl FilterField {
    /// フィールド名
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Provider => "provider",
        }
    }

    /// アイテムから生の値を取り出す
    pub fn raw_value<'a>(&self, item: &'a Item) -> Option<&'a str> {
        match self {
            FilterField::Provider => item.provider.as_deref(),
        }
    }

    /// フィルタ値と同義語一覧を求める
    fn normalize<'a>(&self, raw: Option<&'a str>) -> (Option<&'a str>, Option<Vec<String>>) {
        match self {
            FilterField::Provider => {
                let value = get_provider_value(raw);
                (value, value.map(provider_synonyms))
            }
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "provider" => Ok(FilterField::Provider),
            other => Err(HubError::UnknownFilterField(other.to_string())),
        }
    }
}

/// フィルタ記述子（フィールド・値ごと）
///
/// `active` はタイルページが所有し、ここでは常に false で作る。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterDescriptor {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
    pub value: String,
    pub active: bool,
}

impl FilterDescriptor {
    /// 値そのもの、または同義語のいずれかに一致するか
    pub fn matches(&self, raw: &str) -> bool {
        self.value == raw
            || self
                .synonyms
                .as_ref()
                .is_some_and(|s| s.iter().any(|syn| syn == raw))
    }
}

/// フィールド名 → (値 → 記述子)
pub type FilterState = BTreeMap<String, BTreeMap<String, FilterDescriptor>>;

/// 利用可能なフィルタ値を構築する
///
/// `initial` は参照で受け取り、結合した新しいマップを返す（呼び出し側の状態は変更しない）。
/// 同じ正規化値を持つアイテムが複数あれば後勝ちだが、内容は同じになる。
pub fn determine_available_filters(
    initial: &FilterState,
    items: &[Item],
    filter_groups: &[FilterField],
) -> FilterState {
    let derived = filter_groups.iter().flat_map(|field| {
        items.iter().filter_map(move |item| {
            let (value, synonyms) = field.normalize(field.raw_value(item));
            let value = value.filter(|v| !v.is_empty())?;
            Some((
                field.as_str(),
                FilterDescriptor {
                    label: value.to_string(),
                    synonyms,
                    value: value.to_string(),
                    active: false,
                },
            ))
        })
    });

    derived.fold(initial.clone(), |mut filters, (field, descriptor)| {
        filters
            .entry(field.to_string())
            .or_default()
            .insert(descriptor.value.clone(), descriptor);
        filters
    })
}

#[cfg(test)]
#[path = "available_test.rs"]
mod tests;
