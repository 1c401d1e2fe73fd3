//! ophub show コマンド
//!
//! コンソールの URL（または アイテム ID）から詳細オーバーレイを開き、
//! その内容と遷移後の URL を表示する。

use super::{error_message, CatalogArgs};
use crate::error::{HubError, Result};
use crate::hub::{OperatorHubView, OverlayProps};
use crate::nav::{self, Location, MemoryHistory, Navigator};
use clap::Parser;
use owo_colors::OwoColorize;

/// 既定のコンソール上の位置
pub const DEFAULT_LOCATION: &str = "/operatorhub";

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Item uid to open
    #[arg(required_unless_present = "location")]
    pub uid: Option<String>,

    /// Console URL to mount at, e.g. '/operatorhub?details-item=etcd'
    #[arg(long)]
    pub location: Option<String>,
}

pub fn run(args: Args) -> std::result::Result<(), String> {
    let (items, subscriptions) = args.catalog.load().map_err(error_message)?;
    let location = Location::parse(args.location.as_deref().unwrap_or(DEFAULT_LOCATION))
        .map_err(error_message)?;

    let mut view = OperatorHubView::mount(items, subscriptions, MemoryHistory::new(location));
    resolve(&mut view, args.uid.as_deref()).map_err(error_message)?;

    print_overlay(&view.overlay());
    println!();
    println!("URL: {}", view.navigator().current_url());
    Ok(())
}

/// ID 指定があれば開く。URL だけの場合はマウント結果をそのまま使う
fn resolve(view: &mut OperatorHubView<MemoryHistory>, uid: Option<&str>) -> Result<()> {
    match uid {
        Some(uid) => {
            if view.open_overlay_by_id(uid) {
                Ok(())
            } else {
                Err(HubError::ItemNotFound(uid.to_string()))
            }
        }
        None if view.is_overlay_open() => Ok(()),
        None => {
            let location = view.navigator().location();
            let requested = nav::details_item_id(&location).unwrap_or_default();
            if requested.is_empty() {
                Ok(())
            } else {
                Err(HubError::ItemNotFound(requested.to_string()))
            }
        }
    }
}

fn print_overlay(overlay: &OverlayProps) {
    let Some(item) = overlay.item else {
        println!("{} No details overlay open", "•".yellow());
        return;
    };

    println!("{}", item.name.bold());
    for (label, value) in overlay.detail_rows() {
        println!("  {:<16}{}", format!("{label}:"), value);
    }
    if let Some(body) = overlay.body() {
        println!();
        println!("{body}");
    }
}
