//! ログ出力の初期化
//!
//! `OPHUB_LOG`（EnvFilter 形式）でレベルを指定する。未指定時は warn。
//! TUI の代替スクリーン上では stderr への出力が画面を乱すため、
//! `browse` では未指定時に出力しない。

use crate::env::{EnvVar, LOG_VAR};
use tracing_subscriber::EnvFilter;

/// 出力先の用途
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// 通常の CLI コマンド
    Cli,
    /// TUI（代替スクリーン）
    Tui,
}

impl LogMode {
    fn default_directive(&self) -> &'static str {
        match self {
            LogMode::Cli => "warn",
            LogMode::Tui => "off",
        }
    }
}

/// サブスクライバを登録する（2回目以降は何もしない）
pub fn init(mode: LogMode) {
    let directive = EnvVar::get(LOG_VAR).unwrap_or_else(|| mode.default_directive().to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(LogMode::Cli.default_directive(), "warn");
        assert_eq!(LogMode::Tui.default_directive(), "off");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(LogMode::Cli);
        init(LogMode::Cli);
    }
}
