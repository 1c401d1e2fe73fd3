use thiserror::Error;

/// ophub 統一エラー型
///
/// カタログのフィルタ処理やオーバーレイの状態遷移はエラーを返さない。
/// ここに並ぶのは読み込みや CLI 入力といった周辺レイヤーのエラーのみ。
#[derive(Debug, Error)]
pub enum HubError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Items file not configured. Pass --items or set OPHUB_ITEMS")]
    ItemsNotConfigured,

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Unknown filter field: {0}. Expected 'provider'")]
    UnknownFilterField(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown {field} filter value: {value}")]
    UnknownFilterValue { field: String, value: String },

    #[error("Invalid location: {0}. Expected '/path?query#hash'")]
    InvalidLocation(String),
}

pub type Result<T> = std::result::Result<T, HubError>;

impl HubError {
    /// 設定不足によるエラーかどうか（ヘルプ表示を促す判定に使う）
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            HubError::ItemsNotConfigured | HubError::UnknownFilterField(_)
        )
    }
}
