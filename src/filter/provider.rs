//! プロバイダ名の正規化

/// 無視する法人格サフィックス
///
/// 先頭から順に判定し、最初に一致したものを採用する（順序が優先度）。
pub const IGNORED_PROVIDER_TAILS: [&str; 6] = [", Inc.", ", Inc", " Inc.", " Inc", ", LLC", " LLC"];

/// プロバイダ名から法人格サフィックスを取り除く
///
/// - 空文字列・`None` はそのまま返す
/// - 一致するサフィックスがなければそのまま返す
pub fn get_provider_value(value: Option<&str>) -> Option<&str> {
    let value = value?;
    if value.is_empty() {
        return Some(value);
    }

    let stripped = IGNORED_PROVIDER_TAILS
        .iter()
        .find_map(|tail| value.strip_suffix(tail));
    Some(stripped.unwrap_or(value))
}

/// 正規化済みプロバイダ名に各サフィックスを付けた同義語一覧
pub fn provider_synonyms(value: &str) -> Vec<String> {
    IGNORED_PROVIDER_TAILS
        .iter()
        .map(|tail| format!("{value}{tail}"))
        .collect()
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod tests;
