//! Operator Hub TUI
//!
//! タイルグリッドとカテゴリ・フィルタのサイドバー、詳細オーバーレイ。
//!
//! ## モジュール構成
//!
//! - `app`: Model / Msg / update
//! - `sidebar`: サイドバーの項目
//! - `view`: 画面描画
//! - `common`: 描画ユーティリティ

mod app;
mod common;
mod sidebar;
mod view;

pub use app::Model;

use app::update;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};

/// TUI を実行
pub fn run(model: &mut Model) -> io::Result<()> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, model);

    // エラー時もターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    model: &mut Model,
) -> io::Result<()> {
    while !model.should_quit {
        terminal.draw(|f| view::view(f, model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(msg) = model.key_to_msg(key.code) {
                    update(model, msg);
                }
            }
        }
    }
    Ok(())
}
