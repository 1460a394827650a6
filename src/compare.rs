//! 部分一致の比較
//!
//! 大文字小文字・全角半角・ひらがなカタカナを区別しない比較は
//! 両辺を同じ形に畳み込んでから序数比較する。
//!
//! 畳み込みの手順:
//! 1. NFKC 正規化（半角カナ + 濁点を合成、全角英数を半角へ）
//! 2. 小文字化
//! 3. カタカナをひらがなへ

use unicode_normalization::UnicodeNormalization;

/// 部分一致の比較方法
pub trait TextComparer {
    /// `haystack` が `needle` を含むか
    ///
    /// `needle` が空なら常に true。
    fn contains(&self, haystack: &str, needle: &str, ignore_case: bool) -> bool;
}

impl<T: TextComparer + ?Sized> TextComparer for Box<T> {
    fn contains(&self, haystack: &str, needle: &str, ignore_case: bool) -> bool {
        (**self).contains(haystack, needle, ignore_case)
    }
}

/// 日本語向けの既定の比較
#[derive(Debug, Clone, Copy, Default)]
pub struct CultureComparer;

impl TextComparer for CultureComparer {
    fn contains(&self, haystack: &str, needle: &str, ignore_case: bool) -> bool {
        if needle.is_empty() {
            return true;
        }
        if ignore_case {
            fold(haystack).contains(&fold(needle))
        } else {
            haystack.contains(needle)
        }
    }
}

/// 比較用に文字列を畳み込む
pub fn fold(s: &str) -> String {
    s.nfkc()
        .flat_map(char::to_lowercase)
        .map(katakana_to_hiragana)
        .collect()
}

/// カタカナをひらがなへ（対応のない文字はそのまま）
fn katakana_to_hiragana(c: char) -> char {
    match c {
        // ァ..ヶ と ヽヾ はひらがなと同じ並び
        '\u{30A1}'..='\u{30F6}' | '\u{30FD}'..='\u{30FE}' => {
            char::from_u32(c as u32 - 0x60).unwrap_or(c)
        }
        _ => c,
    }
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod tests;
