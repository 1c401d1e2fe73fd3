/// 環境変数ユーティリティ
pub struct EnvVar;

/// アイテム一覧ファイルのパス
pub const ITEMS_VAR: &str = "OPHUB_ITEMS";
/// Subscription 一覧ファイルのパス
pub const SUBSCRIPTIONS_VAR: &str = "OPHUB_SUBSCRIPTIONS";
/// ログフィルタ（EnvFilter 形式）
pub const LOG_VAR: &str = "OPHUB_LOG";

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}
