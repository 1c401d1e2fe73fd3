//! Subscription（インストール済みパッケージの記録）

use super::Item;
use serde::{Deserialize, Serialize};

/// Subscription のメタデータ
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubscriptionMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Subscription の spec
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubscriptionSpec {
    /// 購読しているパッケージ名
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Subscription
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub metadata: SubscriptionMeta,
    pub spec: SubscriptionSpec,
}

impl Subscription {
    /// パッケージ名
    pub fn package_name(&self) -> &str {
        &self.spec.name
    }
}

/// アイテムのパッケージ名に一致する Subscription を探す
///
/// アイテム側にパッケージ名が無ければ一致なし。
pub fn find_subscription<'a>(
    subscriptions: &'a [Subscription],
    item: &Item,
) -> Option<&'a Subscription> {
    let package_name = item.package_name.as_deref()?;
    subscriptions
        .iter()
        .find(|sub| sub.package_name() == package_name)
}

#[cfg(test)]
impl Subscription {
    /// テスト用：パッケージ名だけを持つ Subscription を作成
    pub fn for_package(package_name: impl Into<String>) -> Self {
        Self {
            metadata: SubscriptionMeta::default(),
            spec: SubscriptionSpec {
                name: package_name.into(),
                ..Default::default()
            },
        }
    }
}
