//! URL 状態の同期
//!
//! 詳細オーバーレイの開閉状態を、クエリパラメータ `details-item` として
//! 現在の URL に反映する。ブラウザ履歴は `Navigator` として注入する。
//!
//! - `location`: URL（path / query / hash）の表現
//! - `history`: `Navigator` トレイトとインメモリ実装

mod history;
mod location;

pub use history::{MemoryHistory, Navigator};
pub use location::Location;

/// 詳細アイテムを示すクエリパラメータ名
pub const DETAILS_ITEM_PARAM: &str = "details-item";

/// クエリパラメータを差し替えて現在の履歴エントリを置き換える
///
/// path と hash は現在の URL のものを維持する。新しい履歴エントリは積まない。
fn set_url_params<N: Navigator + ?Sized>(navigator: &mut N, query: Vec<(String, String)>) {
    let current = navigator.location();
    let next = Location {
        path: current.path,
        query,
        hash: current.hash,
    };
    navigator.replace(next);
}

/// `details-item` にアイテム ID を設定する
pub fn open_details<N: Navigator + ?Sized>(navigator: &mut N, uid: &str) {
    let mut location = navigator.location();
    location.set_param(DETAILS_ITEM_PARAM, uid);
    set_url_params(navigator, location.query);
}

/// `details-item` を削除する
pub fn close_details<N: Navigator + ?Sized>(navigator: &mut N) {
    let mut location = navigator.location();
    location.delete_param(DETAILS_ITEM_PARAM);
    set_url_params(navigator, location.query);
}

/// URL から詳細アイテム ID を読み取る
pub fn details_item_id(location: &Location) -> Option<&str> {
    location.param(DETAILS_ITEM_PARAM)
}
