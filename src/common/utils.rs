/// 判断字符串是否为空或只包含空白字符
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// 按字符逆转字符串
///
/// 以 Unicode 标量值为单位逆转，因此 `reverse(&reverse(s)) == s` 恒成立。
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}
