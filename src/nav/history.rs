//! 履歴の抽象化

use super::Location;

/// 現在位置の取得と置き換えを提供するトレイト
///
/// オーバーレイは `replace` のみを使い、履歴を積まない。
pub trait Navigator {
    /// 現在の URL
    fn location(&self) -> Location;

    /// 現在の履歴エントリを置き換える
    fn replace(&mut self, location: Location);
}

/// インメモリの履歴
///
/// TUI とテストで使う。エントリは常に1件以上。
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
}

impl MemoryHistory {
    /// 初期位置を指定して作成
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    /// エントリ数
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 現在の URL 文字列
    pub fn current_url(&self) -> String {
        self.location().to_url()
    }

    fn current(&self) -> &Location {
        // new() で1件入れ、以降は置き換えのみ
        &self.entries[self.entries.len() - 1]
    }
}

impl Navigator for MemoryHistory {
    fn location(&self) -> Location {
        self.current().clone()
    }

    fn replace(&mut self, location: Location) {
        tracing::debug!(url = %location, "history replace");
        let last = self.entries.len() - 1;
        self.entries[last] = location;
    }
}
