//! カタログファイルの読み込み
//!
//! 拡張子が `.yaml` / `.yml` なら YAML、それ以外は JSON として読む。

use super::{Item, Subscription};
use crate::error::Result;
use serde::de::DeserializeOwned;
use std::path::Path;

/// ファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

fn load_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)?;
    let list = match Format::from_path(path) {
        Format::Json => serde_json::from_str(&content)?,
        Format::Yaml => serde_yaml::from_str(&content)?,
    };
    Ok(list)
}

/// アイテム一覧を読み込む
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let items: Vec<Item> = load_list(path)?;
    tracing::debug!(path = %path.display(), count = items.len(), "loaded items");
    Ok(items)
}

/// Subscription 一覧を読み込む
///
/// パスが指定されていなければ空リスト。
pub fn load_subscriptions(path: Option<&Path>) -> Result<Vec<Subscription>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let subscriptions: Vec<Subscription> = load_list(path)?;
    tracing::debug!(
        path = %path.display(),
        count = subscriptions.len(),
        "loaded subscriptions"
    );
    Ok(subscriptions)
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
