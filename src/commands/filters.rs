//! ophub filters コマンド
//!
//! カテゴリとフィルタ値の一覧を件数付きで表示する。

use super::{error_message, CatalogArgs};
use crate::filter::{CategoryDescriptor, FilterDescriptor, FilterField};
use crate::hub::{operator_hub_page_config, OPERATOR_HUB_FILTER_GROUPS};
use crate::page::TilePage;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Filter field to show (default: all filter groups)
    #[arg(long)]
    pub field: Vec<FilterField>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CategoryEntry<'a> {
    #[serde(flatten)]
    descriptor: &'a CategoryDescriptor,
    count: usize,
}

#[derive(Debug, Serialize)]
struct FilterEntry<'a> {
    #[serde(flatten)]
    descriptor: &'a FilterDescriptor,
    count: usize,
}

#[derive(Debug, Serialize)]
struct FiltersOutput<'a> {
    categories: Vec<CategoryEntry<'a>>,
    filters: BTreeMap<String, Vec<FilterEntry<'a>>>,
}

pub fn run(args: Args) -> std::result::Result<(), String> {
    let (items, _) = args.catalog.load().map_err(error_message)?;
    let page = TilePage::new(operator_hub_page_config(), &items);

    let fields: &[FilterField] = if args.field.is_empty() {
        OPERATOR_HUB_FILTER_GROUPS
    } else {
        &args.field
    };

    let category_counts = page.category_counts(&items);
    let categories = page
        .categories()
        .values()
        .map(|descriptor| CategoryEntry {
            descriptor,
            count: category_counts.get(&descriptor.id).copied().unwrap_or(0),
        })
        .collect();

    let filters = fields
        .iter()
        .map(|field| {
            let counts = page.filter_counts(&items, *field);
            let entries = page
                .filter_values(*field)
                .into_iter()
                .map(|descriptor| FilterEntry {
                    descriptor,
                    count: counts.get(&descriptor.value).copied().unwrap_or(0),
                })
                .collect();
            (field.to_string(), entries)
        })
        .collect();

    let output = FiltersOutput {
        categories,
        filters,
    };

    if args.json {
        serde_json::to_string_pretty(&output)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize filters: {}", e))
    } else {
        print_tables(&output, items.len());
        Ok(())
    }
}

fn print_tables(output: &FiltersOutput, total: usize) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Category", "Items"]);
    table.add_row(vec!["All Items".to_string(), total.to_string()]);
    for entry in &output.categories {
        table.add_row(vec![entry.descriptor.label.clone(), entry.count.to_string()]);
    }
    println!("{table}");

    for (field, entries) in &output.filters {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![field.as_str(), "Items", "Synonyms"]);
        for entry in entries {
            let synonyms = entry
                .descriptor
                .synonyms
                .as_ref()
                .map(|s| s.join(" | "))
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![
                entry.descriptor.label.clone(),
                entry.count.to_string(),
                synonyms,
            ]);
        }
        println!("{table}");
    }
}
