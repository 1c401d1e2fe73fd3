use clap::{Parser, Subcommand};

use crate::commands::{browse, filters, list, show};

#[derive(Debug, Parser)]
#[command(name = "ophub")]
#[command(about = "Operator Hub catalog browser", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// カタログの一覧（フィルタ・検索適用）
    #[command(about = "List catalog items after category, provider and keyword filtering")]
    List(list::Args),

    /// 利用可能なカテゴリとプロバイダフィルタ
    #[command(about = "Show available categories and provider filters")]
    Filters(filters::Args),

    /// 詳細オーバーレイの内容
    #[command(about = "Show the details overlay for an item or a console URL")]
    Show(show::Args),

    /// TUI でカタログを閲覧
    #[command(about = "Browse the catalog as an interactive tile grid")]
    Browse(browse::Args),
}
