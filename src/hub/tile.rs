//! タイル1枚分の表示データ

use super::normalize_icon_class;
use crate::catalog::{find_subscription, Item, Subscription};
use serde::Serialize;

/// タイルウィジェットに渡す表示データ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileProps {
    pub id: String,
    pub title: String,
    pub icon_img: Option<String>,
    pub icon_class: Option<String>,
    /// "provided by {provider}"
    pub vendor: Option<String>,
    pub description: Option<String>,
    /// Subscription があれば "Enabled" バッジを出す
    pub enabled: bool,
}

impl TileProps {
    /// アイテムから表示データを組み立てる
    pub fn from_item(item: &Item, subscriptions: &[Subscription]) -> Self {
        Self {
            id: item.uid.clone(),
            title: item.name.clone(),
            icon_img: item.img_url.clone(),
            icon_class: item
                .icon_class
                .as_deref()
                .filter(|c| !c.is_empty())
                .map(|c| format!("icon {}", normalize_icon_class(c))),
            vendor: item
                .provider
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(|p| format!("provided by {p}")),
            description: item.description.clone(),
            enabled: find_subscription(subscriptions, item).is_some(),
        }
    }

    /// フッターのバッジ文言
    pub fn footer(&self) -> Option<&'static str> {
        self.enabled.then_some("Enabled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_item_has_no_extras() {
        let props = TileProps::from_item(&Item::new("a", "Alpha"), &[]);
        assert_eq!(props.id, "a");
        assert_eq!(props.title, "Alpha");
        assert!(props.icon_class.is_none());
        assert!(props.vendor.is_none());
        assert!(props.footer().is_none());
    }

    #[test]
    fn icon_class_and_vendor_are_formatted() {
        let item = Item {
            icon_class: Some("icon-etcd".to_string()),
            provider: Some("CNCF".to_string()),
            ..Item::new("etcd", "etcd")
        };
        let props = TileProps::from_item(&item, &[]);
        assert_eq!(props.icon_class.as_deref(), Some("icon font-icon icon-etcd"));
        assert_eq!(props.vendor.as_deref(), Some("provided by CNCF"));
    }

    #[test]
    fn empty_icon_class_and_provider_are_dropped() {
        let item = Item {
            icon_class: Some(String::new()),
            provider: Some(String::new()),
            ..Item::new("blank", "Blank")
        };
        let props = TileProps::from_item(&item, &[]);
        assert!(props.icon_class.is_none());
        assert!(props.vendor.is_none());
    }

    #[test]
    fn enabled_iff_package_subscribed() {
        let item = Item {
            package_name: Some("etcd".to_string()),
            ..Item::new("etcd", "etcd")
        };
        let subscribed = TileProps::from_item(&item, &[Subscription::for_package("etcd")]);
        assert!(subscribed.enabled);
        assert_eq!(subscribed.footer(), Some("Enabled"));

        let other = TileProps::from_item(&item, &[Subscription::for_package("mongodb")]);
        assert!(!other.enabled);
    }
}
