//! 共通ユーティリティ関数群（ヘッダー検証、環境変数の解釈 等）

use std::env;

/// ヘッダー値に使用可能な文字かを判定（CRLF・制御文字を拒否）
pub fn is_header_value_valid(value: &str) -> bool {
    // 保守的にUS-ASCII可視範囲と空白に限定し、制御文字(0x00-0x1F, 0x7F)およびCR/LFを拒否する
    if value.is_empty() {
        return true;
    }
    value.chars().all(|c| {
        let code = c as u32;
        (code >= 0x20 && code != 0x7F) || c == '\t'
    })
}

/// 真偽値として解釈できる文字列をパース
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// 環境変数を取得（空文字は未設定扱い）
pub fn non_empty_env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
