//! ophub list コマンド
//!
//! タイルページと同じ絞り込みを適用したカタログ一覧を表示する。

use super::{error_message, CatalogArgs};
use crate::catalog::{Item, Subscription};
use crate::error::{HubError, Result};
use crate::filter::{get_provider_value, FilterField};
use crate::hub::{operator_hub_page_config, TileProps};
use crate::output::{enabled_badge, ListSummary};
use crate::page::TilePage;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(after_help = "OUTPUT FORMATS:\n  (default)  table\n  --json     JSON array\n  --simple   item names only")]
pub struct Args {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Keyword search (name, description, exact tag)
    #[arg(long)]
    pub search: Option<String>,

    /// Show only items in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Provider filter value; repeat to match any of several providers
    #[arg(long)]
    pub provider: Vec<String>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only item names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

/// JSON 出力用（タイルの表示データ + 絞り込みに使う項目）
#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    #[serde(flatten)]
    tile: TileProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<&'a str>,
    categories: &'a [String],
}

pub fn run(args: Args) -> std::result::Result<(), String> {
    let (items, subscriptions) = args.catalog.load().map_err(error_message)?;
    let page = build_page(&args, &items).map_err(error_message)?;
    let visible = page.visible_items(&items);

    if args.json {
        print_json(&visible, &subscriptions)
    } else if args.simple {
        for item in &visible {
            println!("{}", item.name);
        }
        Ok(())
    } else {
        print_table(&visible, &subscriptions);
        println!(
            "{}",
            ListSummary::format(visible.len(), items.len(), page.config().empty_state_info)
        );
        Ok(())
    }
}

/// 引数の絞り込み条件をタイルページに反映
fn build_page(args: &Args, items: &[Item]) -> Result<TilePage> {
    let mut page = TilePage::new(operator_hub_page_config(), items);

    if let Some(search) = &args.search {
        page.set_search(search.as_str());
    }

    if let Some(category) = &args.category {
        if !page.select_category(Some(category.as_str())) {
            return Err(HubError::UnknownCategory(category.clone()));
        }
    }

    for provider in &args.provider {
        let value = get_provider_value(Some(provider.as_str())).unwrap_or_default();
        if !page.toggle_filter(FilterField::Provider, value) {
            return Err(HubError::UnknownFilterValue {
                field: FilterField::Provider.to_string(),
                value: provider.clone(),
            });
        }
    }

    Ok(page)
}

fn print_json(items: &[&Item], subscriptions: &[Subscription]) -> std::result::Result<(), String> {
    let entries: Vec<ListEntry> = items
        .iter()
        .map(|item| ListEntry {
            tile: TileProps::from_item(item, subscriptions),
            provider: item.provider.as_deref(),
            categories: item.categories(),
        })
        .collect();

    // 空の場合も [] を出力
    serde_json::to_string_pretty(&entries)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize items: {}", e))
}

fn print_table(items: &[&Item], subscriptions: &[Subscription]) {
    if items.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Provider", "Categories", "Status"]);

    for item in items {
        let tile = TileProps::from_item(item, subscriptions);
        let categories = if item.categories().is_empty() {
            "-".to_string()
        } else {
            item.categories().join(", ")
        };
        table.add_row(vec![
            tile.title,
            item.provider.clone().unwrap_or_else(|| "-".to_string()),
            categories,
            enabled_badge(tile.enabled),
        ]);
    }

    println!("{table}");
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
