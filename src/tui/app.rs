//! Operator Hub TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: タイルビュー + グリッド選択 + フォーカス
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: メッセージに応じた状態更新

use super::sidebar::{self, SidebarEntry};
use crate::catalog::load_items;
use crate::hub::OperatorHubView;
use crate::nav::MemoryHistory;
use crossterm::event::KeyCode;
use std::path::PathBuf;

// ============================================================================
// Focus（入力フォーカス）
// ============================================================================

/// 入力フォーカス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Grid,
    Search,
    Sidebar,
}

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// グリッド内の移動
    Left,
    Right,
    Up,
    Down,
    /// 選択中のタイルの詳細を開く
    OpenDetails,
    /// 詳細を閉じる
    CloseDetails,
    /// 検索欄にフォーカス
    SearchFocus,
    /// 検索文字入力
    SearchInput(char),
    /// 検索文字削除
    SearchBackspace,
    /// 検索クリア
    SearchClear,
    /// サイドバーにフォーカス
    SidebarFocus,
    /// サイドバー内の移動
    SidebarUp,
    SidebarDown,
    /// サイドバーの項目を適用
    SidebarActivate,
    /// グリッドにフォーカスを戻す
    GridFocus,
    /// すべての絞り込みを解除
    ClearFilters,
    /// アイテムファイルを再読み込み
    Reload,
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    /// タイルビュー（オーバーレイ状態と URL を保持）
    pub hub: OperatorHubView<MemoryHistory>,
    /// 表示中アイテム内の選択位置
    pub selected: usize,
    /// サイドバーの選択位置
    pub sidebar_selected: usize,
    /// 入力フォーカス
    pub focus: Focus,
    /// グリッドの列数（描画時に更新）
    pub columns: usize,
    /// 再読み込み元のアイテムファイル
    pub source: Option<PathBuf>,
    /// 最後のエラー
    pub last_error: Option<String>,
    /// 終了フラグ
    pub should_quit: bool,
}

impl Model {
    /// 新しいモデルを作成
    ///
    /// マウント時に詳細が開いていれば、そのタイルを選択状態にする。
    pub fn new(hub: OperatorHubView<MemoryHistory>) -> Self {
        let selected = hub
            .details_item()
            .and_then(|open| hub.visible_items().iter().position(|i| i.uid == open.uid))
            .unwrap_or(0);

        Self {
            hub,
            selected,
            sidebar_selected: 0,
            focus: Focus::default(),
            columns: 1,
            source: None,
            last_error: None,
            should_quit: false,
        }
    }

    /// 再読み込み元を設定
    pub fn with_source(mut self, source: PathBuf) -> Self {
        self.source = Some(source);
        self
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        // オーバーレイ表示中は閉じる操作のみ
        if self.hub.is_overlay_open() {
            return match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => Some(Msg::CloseDetails),
                _ => None,
            };
        }

        match self.focus {
            Focus::Search => match key {
                KeyCode::Esc if !self.hub.page().search().is_empty() => Some(Msg::SearchClear),
                KeyCode::Esc | KeyCode::Enter | KeyCode::Down => Some(Msg::GridFocus),
                KeyCode::Backspace => Some(Msg::SearchBackspace),
                KeyCode::Char(c) => Some(Msg::SearchInput(c)),
                _ => None,
            },
            Focus::Sidebar => match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::SidebarUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::SidebarDown),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::SidebarActivate),
                KeyCode::Tab | KeyCode::Esc | KeyCode::Right => Some(Msg::GridFocus),
                KeyCode::Char('/') => Some(Msg::SearchFocus),
                _ => None,
            },
            Focus::Grid => match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Left | KeyCode::Char('h') => Some(Msg::Left),
                KeyCode::Right | KeyCode::Char('l') => Some(Msg::Right),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
                KeyCode::Enter => Some(Msg::OpenDetails),
                KeyCode::Char('/') => Some(Msg::SearchFocus),
                KeyCode::Tab => Some(Msg::SidebarFocus),
                KeyCode::Char('c') => Some(Msg::ClearFilters),
                KeyCode::Char('r') if self.source.is_some() => Some(Msg::Reload),
                _ => None,
            },
        }
    }

    /// 表示中アイテムの件数
    pub fn visible_count(&self) -> usize {
        self.hub.visible_items().len()
    }

    /// サイドバーの行
    pub fn sidebar_entries(&self) -> Vec<SidebarEntry> {
        sidebar::entries(self.hub.page())
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => model.should_quit = true,
        Msg::Left => model.selected = model.selected.saturating_sub(1),
        Msg::Right => move_selection(model, 1),
        Msg::Up => model.selected = model.selected.saturating_sub(model.columns.max(1)),
        Msg::Down => move_selection(model, model.columns.max(1)),
        Msg::OpenDetails => {
            let item = model.hub.visible_items().get(model.selected).map(|i| (*i).clone());
            if let Some(item) = item {
                model.hub.open_overlay(&item);
            }
        }
        Msg::CloseDetails => model.hub.close_overlay(),
        Msg::SearchFocus => model.focus = Focus::Search,
        Msg::SearchInput(c) => {
            let mut search = model.hub.page().search().to_string();
            search.push(c);
            model.hub.page_mut().set_search(search);
            clamp_selection(model);
        }
        Msg::SearchBackspace => {
            let mut search = model.hub.page().search().to_string();
            search.pop();
            model.hub.page_mut().set_search(search);
            clamp_selection(model);
        }
        Msg::SearchClear => {
            model.hub.page_mut().set_search(String::new());
            clamp_selection(model);
        }
        Msg::SidebarFocus => model.focus = Focus::Sidebar,
        Msg::SidebarUp => model.sidebar_selected = model.sidebar_selected.saturating_sub(1),
        Msg::SidebarDown => {
            let last = model.sidebar_entries().len().saturating_sub(1);
            model.sidebar_selected = (model.sidebar_selected + 1).min(last);
        }
        Msg::SidebarActivate => {
            if let Some(entry) = model.sidebar_entries().get(model.sidebar_selected) {
                entry.activate(model.hub.page_mut());
                model.selected = 0;
            }
        }
        Msg::GridFocus => model.focus = Focus::Grid,
        Msg::ClearFilters => {
            model.hub.page_mut().clear_filters();
            model.hub.page_mut().select_category(None);
            clamp_selection(model);
        }
        Msg::Reload => reload(model),
    }
}

/// アイテムファイルを読み直してタイルビューに反映
///
/// 開いている詳細はそのまま（一覧から消えていても閉じない）。
fn reload(model: &mut Model) {
    let Some(path) = model.source.clone() else {
        return;
    };
    match load_items(&path) {
        Ok(items) => {
            model.hub.set_items(items);
            model.last_error = None;
            clamp_selection(model);
            let last = model.sidebar_entries().len().saturating_sub(1);
            model.sidebar_selected = model.sidebar_selected.min(last);
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "reload failed");
            model.last_error = Some(e.to_string());
        }
    }
}

fn move_selection(model: &mut Model, step: usize) {
    let last = model.visible_count().saturating_sub(1);
    model.selected = (model.selected + step).min(last);
}

/// 絞り込み変更後に選択位置を範囲内に収める
fn clamp_selection(model: &mut Model) {
    let last = model.visible_count().saturating_sub(1);
    model.selected = model.selected.min(last);
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
