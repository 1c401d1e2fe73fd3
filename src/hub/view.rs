//! Operator Hub タイルビューの状態機械
//!
//! 状態は「閉」（詳細アイテムなし）と「開」（詳細アイテムあり）の2つ。
//! 遷移は常に URL を先に書き換え、その後に状態を更新する。

use super::{operator_hub_page_config, TileProps};
use crate::catalog::{find_subscription, Item, Subscription};
use crate::nav::{self, Navigator};
use crate::page::TilePage;

/// 詳細オーバーレイに渡すデータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayProps<'a> {
    pub show: bool,
    pub item: Option<&'a Item>,
    pub subscription: Option<&'a Subscription>,
}

impl OverlayProps<'_> {
    /// 詳細のラベルと値の組（値が無い項目は省く）
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let Some(item) = self.item else {
            return Vec::new();
        };

        let mut rows: Vec<(&'static str, String)> = [
            ("Provider", item.provider.as_ref()),
            ("Version", item.version.as_ref()),
            ("Repository", item.repository.as_ref()),
            ("Container Image", item.container_image.as_ref()),
            ("Created At", item.created_at.as_ref()),
            ("Support", item.support.as_ref()),
            ("Catalog Source", item.catalog_source.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v.clone())))
        .collect();

        let status = match self.subscription {
            Some(sub) => format!("Enabled ({})", sub.package_name()),
            None => "Not enabled".to_string(),
        };
        rows.push(("Status", status));
        rows
    }

    /// 本文（長い説明があればそれ、なければ短い説明）
    pub fn body(&self) -> Option<&str> {
        let item = self.item?;
        item.long_description
            .as_deref()
            .or(item.description.as_deref())
    }
}

/// Operator Hub タイルビュー
pub struct OperatorHubView<N: Navigator> {
    items: Vec<Item>,
    subscriptions: Vec<Subscription>,
    navigator: N,
    page: TilePage,
    /// 開いている詳細アイテム（遷移時点で items から解決したもの）
    details_item: Option<Item>,
}

impl<N: Navigator> OperatorHubView<N> {
    /// マウント：URL の `details-item` から初期状態を決める
    ///
    /// ID が空か items に見つからなければ閉じた状態で始まる。
    pub fn mount(items: Vec<Item>, subscriptions: Vec<Subscription>, navigator: N) -> Self {
        let page = TilePage::new(operator_hub_page_config(), &items);
        let location = navigator.location();
        let requested = nav::details_item_id(&location).filter(|uid| !uid.is_empty());
        let details_item = requested
            .and_then(|uid| items.iter().find(|item| item.uid == uid))
            .cloned();

        match (&details_item, requested) {
            (Some(item), _) => tracing::debug!(uid = %item.uid, "mounted with details overlay open"),
            (None, Some(uid)) => tracing::warn!(uid, "details-item not found in catalog, overlay closed"),
            (None, None) => {}
        }

        Self {
            items,
            subscriptions,
            navigator,
            page,
            details_item,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn page(&self) -> &TilePage {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut TilePage {
        &mut self.page
    }

    /// タイルページで絞り込んだ表示対象
    pub fn visible_items(&self) -> Vec<&Item> {
        self.page.visible_items(&self.items)
    }

    /// ID でアイテムを検索（重複 ID は先勝ち）
    pub fn find_item(&self, uid: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.uid == uid)
    }

    pub fn details_item(&self) -> Option<&Item> {
        self.details_item.as_ref()
    }

    pub fn is_overlay_open(&self) -> bool {
        self.details_item.is_some()
    }

    /// 閉 → 開：URL に ID を書き込み、状態を更新
    pub fn open_overlay(&mut self, item: &Item) {
        nav::open_details(&mut self.navigator, &item.uid);
        tracing::info!(uid = %item.uid, "open details overlay");
        self.details_item = Some(item.clone());
    }

    /// ID 指定で開く。見つからなければ何もせず false
    pub fn open_overlay_by_id(&mut self, uid: &str) -> bool {
        match self.find_item(uid).cloned() {
            Some(item) => {
                self.open_overlay(&item);
                true
            }
            None => false,
        }
    }

    /// 開 → 閉：URL からパラメータを削除し、状態をクリア
    pub fn close_overlay(&mut self) {
        nav::close_details(&mut self.navigator);
        tracing::info!("close details overlay");
        self.details_item = None;
    }

    /// アイテム一覧を差し替える
    ///
    /// 開いている詳細アイテムには触れない。新しい一覧から消えていても
    /// 古いデータのまま表示し続ける。
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.page.refresh(&items);
        self.items = items;
        if let Some(item) = &self.details_item {
            if self.find_item(&item.uid).is_none() {
                tracing::warn!(uid = %item.uid, "open details item no longer in catalog");
            }
        }
    }

    /// タイル1枚分の表示データ（アイテムが無ければ None）
    pub fn render_tile(&self, item: Option<&Item>) -> Option<TileProps> {
        item.map(|item| TileProps::from_item(item, &self.subscriptions))
    }

    /// 開いているアイテムの Subscription
    pub fn details_subscription(&self) -> Option<&Subscription> {
        let item = self.details_item.as_ref()?;
        find_subscription(&self.subscriptions, item)
    }

    /// 詳細オーバーレイの表示データ
    pub fn overlay(&self) -> OverlayProps<'_> {
        OverlayProps {
            show: self.details_item.is_some(),
            item: self.details_item.as_ref(),
            subscription: self.details_subscription(),
        }
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
