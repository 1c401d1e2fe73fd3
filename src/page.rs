//! タイルページ
//!
//! アイテム一覧を並べ替え・カテゴリ・フィルタ・キーワードで絞り込む汎用ページ。
//! 並べ替えや抽出のロジックは `TilePageConfig` として外から受け取り、
//! ページ自身は検索文字列・選択カテゴリ・フィルタの active 状態だけを持つ。

mod config;
mod state;

pub use config::TilePageConfig;
pub use state::TilePage;
