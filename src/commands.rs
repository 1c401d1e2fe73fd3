use crate::cli::{Cli, Command};
use crate::catalog::{load_items, load_subscriptions, Item, Subscription};
use crate::env::{EnvVar, ITEMS_VAR, SUBSCRIPTIONS_VAR};
use crate::error::{HubError, Result};
use std::path::PathBuf;

pub mod browse;
pub mod filters;
pub mod list;
pub mod show;

pub fn dispatch(cli: Cli) -> std::result::Result<(), String> {
    match cli.command {
        Command::List(args) => list::run(args),
        Command::Filters(args) => filters::run(args),
        Command::Show(args) => show::run(args),
        Command::Browse(args) => browse::run(args),
    }
}

/// エラーを表示用メッセージに変換
///
/// 設定不足の場合は使い方の案内を添える。
pub(crate) fn error_message(err: HubError) -> String {
    if err.is_configuration() {
        format!("{err}\nRun 'ophub --help' for usage.")
    } else {
        err.to_string()
    }
}

/// カタログファイルの指定（全コマンド共通）
#[derive(Debug, Clone, clap::Args)]
pub struct CatalogArgs {
    /// Items file (JSON or YAML). Defaults to $OPHUB_ITEMS
    #[arg(long)]
    pub items: Option<PathBuf>,

    /// Subscriptions file (JSON or YAML). Defaults to $OPHUB_SUBSCRIPTIONS
    #[arg(long)]
    pub subscriptions: Option<PathBuf>,
}

impl CatalogArgs {
    /// フラグ → 環境変数の順でアイテムファイルを決める
    pub fn items_path(&self) -> Result<PathBuf> {
        self.items_path_from(ITEMS_VAR)
    }

    fn items_path_from(&self, var: &str) -> Result<PathBuf> {
        self.items
            .clone()
            .or_else(|| EnvVar::get(var).map(PathBuf::from))
            .ok_or(HubError::ItemsNotConfigured)
    }

    fn subscriptions_path(&self) -> Option<PathBuf> {
        self.subscriptions
            .clone()
            .or_else(|| EnvVar::get(SUBSCRIPTIONS_VAR).map(PathBuf::from))
    }

    /// アイテムと Subscription を読み込む
    pub fn load(&self) -> Result<(Vec<Item>, Vec<Subscription>)> {
        let items = load_items(&self.items_path()?)?;
        let subscriptions = load_subscriptions(self.subscriptions_path().as_deref())?;
        Ok((items, subscriptions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_path_from_flag() {
        let args = CatalogArgs {
            items: Some(PathBuf::from("catalog.json")),
            subscriptions: None,
        };
        assert_eq!(args.items_path().unwrap(), PathBuf::from("catalog.json"));
    }

    #[test]
    fn test_error_message_adds_hint_for_configuration() {
        let message = error_message(HubError::ItemsNotConfigured);
        assert!(message.contains("ophub --help"));
        let message = error_message(HubError::ItemNotFound("abc".to_string()));
        assert_eq!(message, "Item not found: abc");
    }

    #[test]
    fn test_missing_items_is_error() {
        let args = CatalogArgs {
            items: None,
            subscriptions: None,
        };
        assert!(matches!(
            args.items_path_from("OPHUB_TEST_UNSET_ITEMS_VAR"),
            Err(HubError::ItemsNotConfigured)
        ));
    }

    #[test]
    fn test_items_path_from_env() {
        std::env::set_var("OPHUB_TEST_ITEMS_VAR", "from-env.yaml");
        let args = CatalogArgs {
            items: None,
            subscriptions: None,
        };
        assert_eq!(
            args.items_path_from("OPHUB_TEST_ITEMS_VAR").unwrap(),
            PathBuf::from("from-env.yaml")
        );
        std::env::remove_var("OPHUB_TEST_ITEMS_VAR");
    }
}
