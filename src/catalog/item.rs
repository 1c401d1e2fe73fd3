//! カタログアイテム

use serde::{Deserialize, Serialize};

/// カタログアイテム（タイル1枚に相当）
///
/// `uid` と `name` 以外は欠けていてもよい。欠けた項目は
/// 「表示・絞り込み対象なし」として扱い、エラーにはしない。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// 一意な ID（URL の `details-item` に載る値）
    pub uid: String,
    /// 表示名
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// 元になったパッケージ名（Subscription との突き合わせに使う）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,

    // 詳細オーバーレイ用
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_source: Option<String>,
}

impl Item {
    /// カテゴリ一覧（未設定なら空）
    pub fn categories(&self) -> &[String] {
        self.categories.as_deref().unwrap_or_default()
    }

    /// 指定カテゴリに属するか
    pub fn in_category(&self, category: &str) -> bool {
        self.categories().iter().any(|c| c == category)
    }
}

#[cfg(test)]
impl Item {
    /// テスト用：最小構成のアイテムを作成
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}
