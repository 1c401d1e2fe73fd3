//! Operator Hub タイルビュー
//!
//! タイルページにフィルタ関数群を設定し、詳細オーバーレイの開閉を
//! URL と同期させる。
//!
//! - `view`: オーバーレイ状態を持つ `OperatorHubView`
//! - `tile`: タイル1枚分の表示データ
//! - `icon`: アイコンクラスの正規化

mod icon;
mod tile;
mod view;

pub use icon::normalize_icon_class;
pub use tile::TileProps;
pub use view::{OperatorHubView, OverlayProps};

use crate::catalog::Item;
use crate::filter::{determine_available_filters, determine_categories, keyword_compare, FilterField};
use crate::page::TilePageConfig;

/// 絞り込み対象フィールド
pub const OPERATOR_HUB_FILTER_GROUPS: &[FilterField] = &[FilterField::Provider];

/// フィルタで全件除外されたときのメッセージ
pub const EMPTY_STATE_INFO: &str =
    "No Operator Hub items are being shown due to the filters being applied.";

/// 名前順の安定ソート
fn sort_by_name(items: &mut Vec<&Item>) {
    items.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Operator Hub 用のタイルページ設定
pub fn operator_hub_page_config() -> TilePageConfig {
    TilePageConfig {
        items_sorter: sort_by_name,
        get_available_categories: determine_categories,
        get_available_filters: determine_available_filters,
        filter_groups: OPERATOR_HUB_FILTER_GROUPS,
        keyword_compare,
        empty_state_info: EMPTY_STATE_INFO,
    }
}
