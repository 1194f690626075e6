//! 자동 카이사르 해독
//!
//! 여섯 카테고리 순위를 고정 가중치로 합산해 가장 가능성 높은 시프트를 고릅니다.

use std::collections::BTreeMap;

use serde::Serialize;

use super::scorer::{analyze_language, rank_scores, Category, CategoryScores, ShiftScore};
use super::stats::Language;
use crate::core::transform::decode;
use crate::error::CipherError;

/// 후보가 하나도 없을 때 메시지
pub const NO_VALID_SHIFTS: &str = "No valid shifts found";

/// 카테고리 가중치 (합계 1.0)
pub fn category_weight(category: Category) -> f64 {
    match category {
        Category::SingleLetters => 0.25,
        Category::FirstLetters => 0.15,
        Category::LastLetters => 0.15,
        Category::Monograms => 0.20,
        Category::Digrams => 0.15,
        Category::Trigrams => 0.10,
    }
}

/// 소수점 4자리 반올림
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// 카테고리 점수를 가중 합산해 최종 순위 생성
///
/// 어느 카테고리에서도 점수를 받지 못한 시프트는 결과에 나타나지 않습니다.
/// 정렬은 반올림 전 점수 기준이며, 동점은 작은 시프트가 앞에 옵니다.
pub fn combine_scores(categories: &CategoryScores) -> Vec<ShiftScore> {
    let mut totals: BTreeMap<u8, f64> = BTreeMap::new();

    for (category, results) in categories.iter() {
        let weight = category_weight(category);
        for s in results {
            *totals.entry(s.shift).or_insert(0.0) += s.score * weight;
        }
    }

    rank_scores(totals)
        .into_iter()
        .map(|s| ShiftScore {
            shift: s.shift,
            score: round4(s.score),
        })
        .collect()
}

/// 자동 해독 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeOutcome {
    /// 표시 이름 ("English" 등)
    pub language: &'static str,
    pub success: bool,
    pub original: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<u8>,
    /// 1위 시프트의 합산 점수
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_shifts: Option<Vec<ShiftScore>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub possible_shifts_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DecodeOutcome {
    /// 실패 결과를 `CipherError::NoSolution`으로 변환
    pub fn into_result(self) -> Result<Self, CipherError> {
        if self.success {
            Ok(self)
        } else {
            Err(CipherError::NoSolution(
                self.message.unwrap_or_else(|| NO_VALID_SHIFTS.to_string()),
            ))
        }
    }
}

/// 선택한 언어로 자동 해독
///
/// 순위가 비어 있으면 `success: false`, 원문은 그대로 둡니다.
pub fn auto_decode(text: &str, language: Language) -> DecodeOutcome {
    let analysis = analyze_language(text, language);
    let ranked = combine_scores(&analysis.categories);

    let Some(best) = ranked.first().copied() else {
        log::debug!("{}: 유효한 시프트 없음", analysis.language);
        return DecodeOutcome {
            language: analysis.language,
            success: false,
            original: text.to_string(),
            decoded: None,
            shift: None,
            confidence: None,
            all_shifts: None,
            possible_shifts_count: None,
            message: Some(NO_VALID_SHIFTS.to_string()),
        };
    };

    log::debug!(
        "{}: 시프트 {} 선택 (점수 {}, 후보 {}개)",
        analysis.language,
        best.shift,
        best.score,
        ranked.len()
    );

    DecodeOutcome {
        language: analysis.language,
        success: true,
        original: text.to_string(),
        decoded: Some(decode(text, best.shift as i64)),
        shift: Some(best.shift),
        confidence: Some(best.score),
        all_shifts: Some(ranked),
        possible_shifts_count: Some(analysis.possible_shifts_count),
        message: None,
    }
}

/// 언어 식별자("english" 등)로 자동 해독
///
/// 지원하지 않는 언어면 `CipherError::InvalidArgument`
pub fn auto_decode_by_id(text: &str, language_id: &str) -> Result<DecodeOutcome, CipherError> {
    let language = Language::from_id(language_id)?;
    Ok(auto_decode(text, language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transform::{encode, rot13};

    const PANGRAM: &str = "the quick brown fox jumps over the lazy dog";

    #[test]
    fn test_weights_sum_to_one() {
        let sum: f64 = Category::ALL.iter().map(|&c| category_weight(c)).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_combine_scores_sparse() {
        let categories = CategoryScores {
            single_letters: vec![ShiftScore { shift: 3, score: 10.0 }],
            monograms: vec![
                ShiftScore { shift: 7, score: 20.0 },
                ShiftScore { shift: 3, score: 5.0 },
            ],
            ..Default::default()
        };
        let combined = combine_scores(&categories);
        // 3: 10*0.25 + 5*0.2 = 3.5, 7: 20*0.2 = 4.0
        assert_eq!(
            combined,
            vec![
                ShiftScore { shift: 7, score: 4.0 },
                ShiftScore { shift: 3, score: 3.5 },
            ]
        );
    }

    #[test]
    fn test_combine_scores_tie_break_lower_shift() {
        let categories = CategoryScores {
            digrams: vec![
                ShiftScore { shift: 9, score: 2.0 },
                ShiftScore { shift: 2, score: 2.0 },
            ],
            ..Default::default()
        };
        let combined = combine_scores(&categories);
        assert_eq!(combined[0].shift, 2);
        assert_eq!(combined[1].shift, 9);
    }

    #[test]
    fn test_combine_scores_rounding() {
        let categories = CategoryScores {
            trigrams: vec![ShiftScore { shift: 1, score: 0.123456 }],
            ..Default::default()
        };
        // 0.123456 * 0.1 = 0.0123456 -> 0.0123
        assert_eq!(combine_scores(&categories)[0].score, 0.0123);
    }

    #[test]
    fn test_auto_decode_rot13_pangram() {
        let encrypted = rot13(PANGRAM).encoded;
        let outcome = auto_decode(&encrypted, Language::English);

        assert!(outcome.success);
        assert_eq!(outcome.shift, Some(13));
        assert_eq!(outcome.decoded.as_deref(), Some(PANGRAM));
        assert_eq!(outcome.original, encrypted);

        let all = outcome.all_shifts.unwrap();
        assert_eq!(all[0].shift, 13);
        assert_eq!(outcome.confidence, Some(all[0].score));
        assert!(all.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_auto_decode_english_sentence() {
        let plain = "It was the best of times, it was the worst of times, \
                     it was the age of wisdom, it was the age of foolishness";
        for shift in [1, 5, 13, 22] {
            let outcome = auto_decode(&encode(plain, shift), Language::English);
            assert_eq!(outcome.shift, Some(shift as u8), "shift {}", shift);
            assert_eq!(outcome.decoded.as_deref(), Some(plain));
        }
    }

    #[test]
    fn test_auto_decode_empty_text() {
        let outcome = auto_decode("", Language::English);
        assert!(!outcome.success);
        assert_eq!(outcome.message.as_deref(), Some(NO_VALID_SHIFTS));
        assert_eq!(outcome.original, "");
        assert!(outcome.decoded.is_none());
        assert!(matches!(
            outcome.into_result(),
            Err(CipherError::NoSolution(msg)) if msg == NO_VALID_SHIFTS
        ));
    }

    #[test]
    fn test_auto_decode_no_letters() {
        let outcome = auto_decode("123 456 !!!", Language::French);
        assert!(!outcome.success);
        assert_eq!(outcome.language, "French");
    }

    #[test]
    fn test_auto_decode_by_id() {
        let encrypted = rot13(PANGRAM).encoded;
        let outcome = auto_decode_by_id(&encrypted, "english").unwrap();
        assert_eq!(outcome.shift, Some(13));

        assert!(matches!(
            auto_decode_by_id(&encrypted, "latin"),
            Err(CipherError::InvalidArgument(msg)) if msg == "Language 'latin' not supported"
        ));
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = auto_decode("", Language::Spanish);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["language"], "Spanish");
        assert!(json.get("decoded").is_none());
        assert!(json.get("allShifts").is_none());
    }
}
