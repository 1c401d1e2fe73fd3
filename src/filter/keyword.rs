//! キーワード検索

use crate::catalog::Item;

/// キーワードにアイテムが一致するか
///
/// `filter_string` は呼び出し側で小文字化済みであること。
///
/// - 空のキーワードは常に一致
/// - アイテムが無ければ一致しない
/// - `name` / `description` は case-insensitive な部分一致
/// - `tags` は要素の完全一致（部分一致ではない）
pub fn keyword_compare(filter_string: &str, item: Option<&Item>) -> bool {
    if filter_string.is_empty() {
        return true;
    }
    let Some(item) = item else {
        return false;
    };

    item.name.to_lowercase().contains(filter_string)
        || item
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(filter_string))
        || item
            .tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == filter_string))
}

#[cfg(test)]
#[path = "keyword_test.rs"]
mod tests;
