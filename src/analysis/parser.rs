//! 텍스트 특징 추출
//!
//! 빈도 분석에 쓰이는 언어 요소를 텍스트에서 뽑아냅니다.
//! 모든 추출은 소문자 기준이며, 단어 경계가 필요한 추출은 먼저 악센트를 제거합니다.

use serde::Serialize;

use crate::analysis::stats::letter_gap;
use crate::core::unicode::strip_accents;

/// 단어 통계에 포함되는 최소 단어 길이
pub const MIN_WORD_LEN: usize = 3;

/// 모노그램 토큰 구분 문자 (공백 제외)
const TOKEN_SEPARATORS: &[char] = &[
    '.', ',', ';', '!', '?', '¿', '¡', '"', '(', ')', '[', ']', '{', '}',
];

/// 간격이 표시된 다이그램
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Digram {
    pub digram: String,
    pub gap: u8,
}

/// 간격이 표시된 트라이그램
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trigram {
    pub trigram: String,
    pub gap1: u8,
    pub gap2: u8,
}

fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || TOKEN_SEPARATORS.contains(&c)
}

/// 한 글자 단어(모노그램) 추출
///
/// 글자 사이의 아포스트로피/하이픈은 지워서 한 토큰으로 붙입니다.
/// (l'ecole -> lecole, cannot-do -> cannotdo)
pub fn extract_monograms(text: &str) -> Vec<char> {
    let lower: Vec<char> = text.to_lowercase().chars().collect();

    let mut cleaned = String::with_capacity(lower.len());
    for (i, &c) in lower.iter().enumerate() {
        if c == '\'' || c == '-' {
            let prev = i.checked_sub(1).and_then(|p| lower.get(p));
            let next = lower.get(i + 1);
            if let (Some(p), Some(n)) = (prev, next) {
                if p.is_ascii_lowercase() && n.is_ascii_lowercase() {
                    continue;
                }
            }
        }
        cleaned.push(c);
    }

    cleaned
        .split(is_token_separator)
        .filter_map(|token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_lowercase() => Some(c),
                _ => None,
            }
        })
        .collect()
}

/// 3글자 이상 단어 추출 (악센트 제거 후 a~z 연속 구간)
///
/// 모노그램과 두 글자 단어는 의도적으로 제외됩니다.
pub fn extract_words(text: &str) -> Vec<String> {
    let normalized = strip_accents(&text.to_lowercase());

    let mut words = Vec::new();
    let mut current = String::new();

    for c in normalized.chars() {
        if c.is_ascii_lowercase() {
            current.push(c);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words.retain(|w| w.len() >= MIN_WORD_LEN);
    words
}

/// 모노그램이 아닌 단어(길이 > 1)의 글자만 추출
pub fn extract_letters_excluding_monograms(text: &str) -> Vec<char> {
    extract_words(text)
        .iter()
        .filter(|w| w.len() > 1)
        .flat_map(|w| w.chars())
        .collect()
}

/// 단어 첫 글자 추출
pub fn extract_first_letters(text: &str) -> Vec<char> {
    extract_words(text)
        .iter()
        .filter_map(|w| w.chars().next())
        .collect()
}

/// 단어 끝 글자 추출
pub fn extract_last_letters(text: &str) -> Vec<char> {
    extract_words(text)
        .iter()
        .filter_map(|w| w.chars().last())
        .collect()
}

/// 단어 경계를 무시한 a~z 글자 흐름
fn letter_stream(text: &str) -> Vec<char> {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// 인접한 두 글자 쌍과 간격 추출
pub fn extract_digrams(text: &str) -> Vec<Digram> {
    let letters = letter_stream(text);

    letters
        .windows(2)
        .filter_map(|w| {
            let gap = letter_gap(w[0], w[1])?;
            Some(Digram {
                digram: w.iter().collect(),
                gap,
            })
        })
        .collect()
}

/// 연속한 세 글자와 두 간격 추출
pub fn extract_trigrams(text: &str) -> Vec<Trigram> {
    let letters = letter_stream(text);

    letters
        .windows(3)
        .filter_map(|w| {
            let gap1 = letter_gap(w[0], w[1])?;
            let gap2 = letter_gap(w[1], w[2])?;
            Some(Trigram {
                trigram: w.iter().collect(),
                gap1,
                gap2,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transform::encode;

    #[test]
    fn test_extract_monograms() {
        assert_eq!(extract_monograms("I think a cat is here"), vec!['i', 'a']);
        assert_eq!(extract_monograms("Y, o! a?"), vec!['y', 'o', 'a']);
        assert!(extract_monograms("no single letters here").is_empty());
        assert!(extract_monograms("").is_empty());
    }

    #[test]
    fn test_monograms_fused_tokens() {
        // 아포스트로피/하이픈으로 이어진 조각은 한 토큰
        assert!(extract_monograms("l'ecole").is_empty());
        assert!(extract_monograms("a-t-il").is_empty());
        assert!(extract_monograms("cannot-do").is_empty());
        // 글자 사이가 아니면 붙이지 않음
        assert_eq!(extract_monograms("a- b"), vec!['b']);
    }

    #[test]
    fn test_monograms_ignore_non_ascii() {
        // 악센트 한 글자 단어는 모노그램이 아님
        assert!(extract_monograms("il va à Paris").is_empty());
        assert!(extract_monograms("7 5").is_empty());
    }

    #[test]
    fn test_extract_words() {
        assert_eq!(
            extract_words("The cat, an ox & a dog!"),
            vec!["the", "cat", "dog"]
        );
        assert_eq!(extract_words("L'école élémentaire"), vec!["ecole", "elementaire"]);
        assert!(extract_words("a an to").is_empty());
        // Latin 확장 글자도 단어를 끊지 않음
        assert_eq!(extract_words("mușchi"), vec!["muschi"]);
        assert_eq!(extract_words("Việt Nam"), vec!["viet", "nam"]);
    }

    #[test]
    fn test_letters_first_last() {
        let text = "Hello big world of us";
        assert_eq!(
            extract_letters_excluding_monograms(text).iter().collect::<String>(),
            "hellobigworld"
        );
        assert_eq!(extract_first_letters(text), vec!['h', 'b', 'w']);
        assert_eq!(extract_last_letters(text), vec!['o', 'g', 'd']);
    }

    #[test]
    fn test_extract_digrams() {
        let digrams = extract_digrams("Ab, c");
        assert_eq!(digrams.len(), 2);
        assert_eq!(digrams[0], Digram { digram: "ab".into(), gap: 1 });
        assert_eq!(digrams[1], Digram { digram: "bc".into(), gap: 1 });
        assert!(extract_digrams("a").is_empty());
        assert!(extract_digrams("").is_empty());
    }

    #[test]
    fn test_extract_trigrams() {
        let trigrams = extract_trigrams("the");
        assert_eq!(
            trigrams,
            vec![Trigram { trigram: "the".into(), gap1: 14, gap2: 23 }]
        );
        assert!(extract_trigrams("ab").is_empty());
    }

    #[test]
    fn test_gap_invariance() {
        let text = "The quick brown fox jumps over the lazy dog";
        let mut base: Vec<u8> = extract_digrams(text).iter().map(|d| d.gap).collect();
        base.sort_unstable();

        for shift in 0..26 {
            let encoded = encode(text, shift);
            let mut gaps: Vec<u8> = extract_digrams(&encoded).iter().map(|d| d.gap).collect();
            gaps.sort_unstable();
            assert_eq!(gaps, base, "shift {}", shift);

            let tri_base: Vec<(u8, u8)> =
                extract_trigrams(text).iter().map(|t| (t.gap1, t.gap2)).collect();
            let tri: Vec<(u8, u8)> =
                extract_trigrams(&encoded).iter().map(|t| (t.gap1, t.gap2)).collect();
            assert_eq!(tri, tri_base);
        }
    }
}
