//! URL の表現

use crate::error::{HubError, Result};
use std::fmt;
use url::form_urlencoded;

/// path / query / hash に分解した URL
///
/// クエリは `application/x-www-form-urlencoded` で解釈し、順序を保持する。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
    /// `#` を除いたフラグメント
    pub hash: Option<String>,
}

impl Location {
    /// 文字列から解析
    ///
    /// `/path?query#hash` 形式か、スキーム付きの絶対 URL を受け付ける。
    pub fn parse(input: &str) -> Result<Self> {
        if input.starts_with('/') {
            return Ok(Self::parse_relative(input));
        }

        let url = url::Url::parse(input).map_err(|_| HubError::InvalidLocation(input.to_string()))?;
        Ok(Self {
            path: url.path().to_string(),
            query: url.query_pairs().into_owned().collect(),
            hash: url.fragment().filter(|f| !f.is_empty()).map(|f| f.to_string()),
        })
    }

    fn parse_relative(input: &str) -> Self {
        let (rest, hash) = match input.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash).filter(|h| !h.is_empty())),
            None => (input, None),
        };
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        Self {
            path: path.to_string(),
            query: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
            hash: hash.map(|h| h.to_string()),
        }
    }

    /// クエリパラメータの最初の値
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// クエリパラメータを設定
    ///
    /// 既存のキーがあれば最初の位置の値を置き換えて残りを削除、なければ末尾に追加。
    pub fn set_param(&mut self, key: &str, value: &str) {
        match self.query.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.query[first].1 = value.to_string();
                let mut index = 0;
                self.query.retain(|(k, _)| {
                    let keep = k != key || index == first;
                    index += 1;
                    keep
                });
            }
            None => self.query.push((key.to_string(), value.to_string())),
        }
    }

    /// クエリパラメータを削除（同名キーはすべて削除）
    pub fn delete_param(&mut self, key: &str) {
        self.query.retain(|(k, _)| k != key);
    }

    /// エンコード済みのクエリ文字列
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.query)
            .finish()
    }

    /// `path?query#hash` 形式に直列化
    ///
    /// クエリが空でも `?` は付ける。
    pub fn to_url(&self) -> String {
        let hash = self
            .hash
            .as_ref()
            .map(|h| format!("#{h}"))
            .unwrap_or_default();
        format!("{}?{}{}", self.path, self.query_string(), hash)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;
