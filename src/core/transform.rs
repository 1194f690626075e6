//! 문자열 단위 카이사르 변환 (인코딩/디코딩/ROT13/전수 대입)

use serde::{Deserialize, Serialize};

use super::shift::{normalize_shift, shift_char};
use crate::error::CipherError;

/// 문자열 전체에 시프트 적용
/// 영문자가 아닌 문자(공백, 구두점, 숫자)는 위치와 값 그대로 유지
pub fn encode(text: &str, shift: i64) -> String {
    let shift = normalize_shift(shift) as i64;
    text.chars().map(|c| shift_char(c, shift)).collect()
}

/// 디코딩 = 음수 시프트 인코딩
///
/// 부호 반전 전에 0~25로 정규화 (i64::MIN 반전 오버플로 방지)
pub fn decode(text: &str, shift: i64) -> String {
    encode(text, -(normalize_shift(shift) as i64))
}

/// ROT13 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rot13Result {
    pub original: String,
    pub encoded: String,
}

/// ROT13 (시프트 13 고정, 자기 역원)
pub fn rot13(text: &str) -> Rot13Result {
    Rot13Result {
        original: text.to_string(),
        encoded: encode(text, 13),
    }
}

/// 시프트 하나에 대한 디코딩 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftedText {
    pub shift: u8,
    pub text: String,
}

/// 0~25 모든 시프트로 디코딩 (시프트 오름차순, 26개)
pub fn brute_force(text: &str) -> Vec<ShiftedText> {
    (0..26u8)
        .map(|shift| ShiftedText {
            shift,
            text: decode(text, shift as i64),
        })
        .collect()
}

/// 인코딩 통계
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeStats {
    /// 영문자 수
    pub letter_count: usize,
    /// 영문자 연속 구간 수
    pub word_count: usize,
    /// 그대로 유지된 문자 수
    pub preserved_chars: usize,
}

/// `encode_text` 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeReport {
    pub original: String,
    pub encoded: String,
    pub shift: u8,
    pub stats: EncodeStats,
}

/// 엄격한 인코딩 진입점
///
/// 빈 텍스트, 1~25 범위 밖 시프트는 거부합니다.
/// 자동 해독 파이프라인은 이 함수 대신 `encode`/`decode`를 사용합니다.
pub fn encode_text(text: &str, shift: i64) -> Result<EncodeReport, CipherError> {
    if text.is_empty() {
        return Err(CipherError::InvalidArgument(
            "Text must be a non-empty string".into(),
        ));
    }
    if !(1..=25).contains(&shift) {
        return Err(CipherError::InvalidArgument(
            "Shift must be a number between 1 and 25".into(),
        ));
    }

    let encoded = encode(text, shift);
    let stats = compute_stats(text);

    Ok(EncodeReport {
        original: text.to_string(),
        encoded,
        shift: shift as u8,
        stats,
    })
}

fn compute_stats(text: &str) -> EncodeStats {
    let mut letter_count = 0;
    let mut word_count = 0;
    let mut total = 0;
    let mut in_word = false;

    for c in text.chars() {
        total += 1;
        if c.is_ascii_alphabetic() {
            letter_count += 1;
            if !in_word {
                word_count += 1;
            }
            in_word = true;
        } else {
            in_word = false;
        }
    }

    EncodeStats {
        letter_count,
        word_count,
        preserved_chars: total - letter_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hello_world() {
        assert_eq!(encode("Hello, World!", 3), "Khoor, Zruog!");
        assert_eq!(decode("Khoor, Zruog!", 3), "Hello, World!");
    }

    #[test]
    fn test_round_trip_all_shifts() {
        let text = "TheQuickBrownFoxJumpsOverTheLazyDog";
        for shift in 0..26 {
            assert_eq!(decode(&encode(text, shift), shift), text);
        }
    }

    #[test]
    fn test_shift_normalization() {
        let text = "Attack at dawn!";
        for shift in -30..30 {
            let expected = encode(text, shift);
            assert_eq!(encode(text, shift + 26), expected);
            assert_eq!(encode(text, shift - 26), expected);
        }
    }

    #[test]
    fn test_extreme_shifts() {
        // i64::MIN ≡ 18 (mod 26), i64::MAX ≡ 7
        assert_eq!(encode("abc", i64::MIN), "stu");
        assert_eq!(decode("stu", i64::MIN), "abc");
        assert_eq!(decode("abc", i64::MIN), "ijk");
        assert_eq!(encode("abc", i64::MAX), "hij");
        assert_eq!(decode("hij", i64::MAX), "abc");
    }

    #[test]
    fn test_identity_shift() {
        assert_eq!(encode("abc XYZ 123 ?!", 0), "abc XYZ 123 ?!");
        assert_eq!(encode("", 7), "");
    }

    #[test]
    fn test_non_letters_preserved() {
        let text = "a1 b2, c3! ~d4";
        for shift in 0..26 {
            let encoded = encode(text, shift);
            for (orig, enc) in text.chars().zip(encoded.chars()) {
                if !orig.is_ascii_alphabetic() {
                    assert_eq!(orig, enc);
                }
            }
            assert_eq!(encoded.chars().count(), text.chars().count());
        }
    }

    #[test]
    fn test_rot13() {
        let result = rot13("Attack at dawn");
        assert_eq!(result.encoded, "Nggnpx ng qnja");
        assert_eq!(result.original, "Attack at dawn");
        assert_eq!(rot13(&result.encoded).encoded, "Attack at dawn");
    }

    #[test]
    fn test_brute_force() {
        let results = brute_force("Khoor");
        assert_eq!(results.len(), 26);
        for (i, entry) in results.iter().enumerate() {
            assert_eq!(entry.shift as usize, i);
            assert_eq!(entry.text, decode("Khoor", i as i64));
        }
        assert_eq!(results[0].text, "Khoor");
        assert_eq!(results[3].text, "Hello");
    }

    #[test]
    fn test_encode_text_stats() {
        let report = encode_text("Hello, World!", 3).unwrap();
        assert_eq!(report.encoded, "Khoor, Zruog!");
        assert_eq!(report.shift, 3);
        assert_eq!(report.stats.letter_count, 10);
        assert_eq!(report.stats.word_count, 2);
        assert_eq!(report.stats.preserved_chars, 3);
    }

    #[test]
    fn test_encode_text_rejects_invalid() {
        assert!(matches!(
            encode_text("", 3),
            Err(CipherError::InvalidArgument(_))
        ));
        assert!(matches!(
            encode_text("abc", 0),
            Err(CipherError::InvalidArgument(_))
        ));
        assert!(matches!(
            encode_text("abc", 26),
            Err(CipherError::InvalidArgument(_))
        ));
    }
}
