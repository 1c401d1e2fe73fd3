use owo_colors::OwoColorize;

/// 一覧表示の末尾に出すサマリ行
pub struct ListSummary {
    pub prefix: String,
    pub message: String,
}

impl ListSummary {
    /// 表示件数と全体件数からサマリを作る
    ///
    /// `empty_state` はフィルタで全件除外されたときに出すメッセージ。
    pub fn format(shown: usize, total: usize, empty_state: &str) -> Self {
        match (shown, total) {
            (_, 0) => Self {
                prefix: "•".yellow().to_string(),
                message: "No Operator Hub items available".to_string(),
            },
            (0, _) => Self {
                prefix: "✗".red().to_string(),
                message: empty_state.to_string(),
            },
            (s, t) => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} of {} item(s) shown", s.green(), t),
            },
        }
    }
}

impl std::fmt::Display for ListSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}

/// "Enabled" バッジ（有効でなければ "-"）
pub fn enabled_badge(enabled: bool) -> String {
    if enabled {
        format!("{} Enabled", "✓".green())
    } else {
        "-".to_string()
    }
}
