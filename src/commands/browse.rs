//! ophub browse コマンド
//!
//! カタログを TUI のタイルグリッドで閲覧する。

use super::show::DEFAULT_LOCATION;
use super::{error_message, CatalogArgs};
use crate::hub::OperatorHubView;
use crate::logging::{self, LogMode};
use crate::nav::{Location, MemoryHistory};
use crate::tui;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Console URL to start from; a details-item parameter opens that item
    #[arg(long, default_value = DEFAULT_LOCATION)]
    pub location: String,
}

pub fn run(args: Args) -> Result<(), String> {
    logging::init(LogMode::Tui);

    let source = args.catalog.items_path().map_err(error_message)?;
    let (items, subscriptions) = args.catalog.load().map_err(error_message)?;
    let location = Location::parse(&args.location).map_err(error_message)?;

    let hub = OperatorHubView::mount(items, subscriptions, MemoryHistory::new(location));
    let mut model = tui::Model::new(hub).with_source(source);
    tui::run(&mut model).map_err(|e| format!("Terminal error: {}", e))?;

    println!("{}", model.hub.navigator().current_url());
    Ok(())
}
