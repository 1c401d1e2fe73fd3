//! フィルタ・検索・カテゴリ分類
//!
//! タイルページに設定として渡す純粋関数群。
//!
//! - `provider`: プロバイダ名の正規化と同義語生成
//! - `category`: カテゴリ一覧の抽出
//! - `available`: 絞り込み候補（フィルタ値）の構築
//! - `keyword`: キーワード検索の一致判定

mod available;
mod category;
mod keyword;
mod provider;

pub use available::{determine_available_filters, FilterDescriptor, FilterField, FilterState};
pub use category::{determine_categories, CategoryDescriptor};
pub use keyword::keyword_compare;
pub use provider::get_provider_value;
