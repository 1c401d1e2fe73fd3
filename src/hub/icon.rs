//! アイコンクラスの正規化

/// `icon-` で始まるクラスはフォントアイコンとして扱う
pub fn normalize_icon_class(icon_class: &str) -> String {
    if icon_class.starts_with("icon-") {
        format!("font-icon {icon_class}")
    } else {
        icon_class.to_string()
    }
}
