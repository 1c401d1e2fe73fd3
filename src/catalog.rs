//! カタログデータ
//!
//! Operator Hub に並べるアイテムと、インストール状態を示す Subscription の定義。
//! どちらも外部から供給され、読み込み後は変更しない。

mod item;
mod loader;
mod subscription;

pub use item::Item;
pub use loader::{load_items, load_subscriptions};
pub use subscription::{find_subscription, Subscription};
