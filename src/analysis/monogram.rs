//! 모노그램 기반 시프트 후보 축소
//!
//! 한 글자 단어를 근거로 26개 시프트 후보를 줄입니다.
//! 이후 모든 카테고리 스코어러는 여기서 남은 시프트만 평가합니다.

use std::collections::BTreeSet;

use serde::Serialize;

use super::parser::extract_monograms;
use super::stats::LanguageProfile;
use crate::core::shift::shift_between;

/// 후보 축소 방법
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrowingMethod {
    /// 언어에 한 글자 단어가 없음 -> 26개 모두
    NoMonogramsInLanguage,
    /// 텍스트에 한 글자 단어가 없음 -> 26개 모두
    NoMonogramsInText,
    /// 한 글자 단어가 딱 하나
    SingleMonogram,
    /// 여러 개지만 모두 같은 글자
    SingleUniqueMonogram,
    /// 서로 다른 모노그램이 언어 어휘보다 많음 -> 판단 포기, 26개 모두
    TooManyMonograms,
    /// 모노그램별 후보의 교집합
    Intersection,
}

impl NarrowingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            NarrowingMethod::NoMonogramsInLanguage => "no_monograms_in_language",
            NarrowingMethod::NoMonogramsInText => "no_monograms_in_text",
            NarrowingMethod::SingleMonogram => "single_monogram",
            NarrowingMethod::SingleUniqueMonogram => "single_unique_monogram",
            NarrowingMethod::TooManyMonograms => "too_many_monograms",
            NarrowingMethod::Intersection => "intersection",
        }
    }
}

/// 축소 과정 부가 정보
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrowingDetails {
    /// 텍스트의 모노그램 출현 횟수
    pub text_monograms_found: usize,
    /// 언어 모노그램 어휘 크기
    pub language_monograms: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_monograms: Option<usize>,
    /// 유일한 텍스트 모노그램 (single_* 방법에서만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_monogram: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shifts_found: Option<usize>,
}

/// 시프트 후보 축소 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftNarrowing {
    pub possible_shifts: BTreeSet<u8>,
    pub method: NarrowingMethod,
    pub details: NarrowingDetails,
}

impl ShiftNarrowing {
    fn all_shifts(method: NarrowingMethod, details: NarrowingDetails) -> Self {
        Self {
            possible_shifts: (0..26).collect(),
            method,
            details,
        }
    }

    /// 시프트가 후보에 남아 있는지 확인
    pub fn contains(&self, shift: u8) -> bool {
        self.possible_shifts.contains(&shift)
    }

    /// 남은 후보 수
    pub fn len(&self) -> usize {
        self.possible_shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.possible_shifts.is_empty()
    }
}

/// 텍스트 모노그램 하나를 언어 모노그램 중 하나로 옮기는 모든 시프트
fn shifts_for(text_monogram: char, language_monograms: &[char]) -> BTreeSet<u8> {
    language_monograms
        .iter()
        .filter_map(|&lang| shift_between(text_monogram, lang))
        .collect()
}

/// 모노그램 근거로 가능한 시프트 집합 계산
///
/// 우선순위:
/// 1. 언어에 모노그램 없음 -> 26개 모두
/// 2. 텍스트에 모노그램 없음 -> 26개 모두
/// 3. 한 개뿐이거나 모두 같은 글자 -> 그 글자를 언어 모노그램으로 옮기는 시프트
/// 4. 서로 다른 글자가 언어 어휘보다 많음 -> 26개 모두
/// 5. 그 외 -> 글자별 후보의 교집합
pub fn find_possible_shifts(text: &str, profile: &LanguageProfile) -> ShiftNarrowing {
    let text_monograms = extract_monograms(text);
    let valid: Vec<char> = profile.monograms.iter().map(|&(c, _)| c).collect();

    if valid.is_empty() {
        return ShiftNarrowing::all_shifts(
            NarrowingMethod::NoMonogramsInLanguage,
            NarrowingDetails {
                text_monograms_found: text_monograms.len(),
                language_monograms: 0,
                ..Default::default()
            },
        );
    }

    if text_monograms.is_empty() {
        return ShiftNarrowing::all_shifts(
            NarrowingMethod::NoMonogramsInText,
            NarrowingDetails {
                text_monograms_found: 0,
                language_monograms: valid.len(),
                ..Default::default()
            },
        );
    }

    // 첫 출현 순서 유지
    let mut unique: Vec<char> = Vec::new();
    for &m in &text_monograms {
        if !unique.contains(&m) {
            unique.push(m);
        }
    }

    if unique.len() == 1 {
        let method = if text_monograms.len() == 1 {
            NarrowingMethod::SingleMonogram
        } else {
            NarrowingMethod::SingleUniqueMonogram
        };
        let possible_shifts = shifts_for(unique[0], &valid);
        return ShiftNarrowing {
            details: NarrowingDetails {
                text_monograms_found: text_monograms.len(),
                language_monograms: valid.len(),
                text_monogram: Some(unique[0]),
                shifts_found: Some(possible_shifts.len()),
                ..Default::default()
            },
            possible_shifts,
            method,
        };
    }

    if unique.len() > valid.len() {
        return ShiftNarrowing::all_shifts(
            NarrowingMethod::TooManyMonograms,
            NarrowingDetails {
                text_monograms_found: text_monograms.len(),
                language_monograms: valid.len(),
                unique_monograms: Some(unique.len()),
                ..Default::default()
            },
        );
    }

    let mut per_monogram = unique.iter().map(|&m| shifts_for(m, &valid));
    let first = per_monogram.next().unwrap_or_default();
    let possible_shifts = per_monogram.fold(first, |acc, shifts| {
        acc.intersection(&shifts).copied().collect()
    });

    ShiftNarrowing {
        details: NarrowingDetails {
            text_monograms_found: text_monograms.len(),
            language_monograms: valid.len(),
            unique_monograms: Some(unique.len()),
            shifts_found: Some(possible_shifts.len()),
            ..Default::default()
        },
        possible_shifts,
        method: NarrowingMethod::Intersection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stats::{ENGLISH, FRENCH, GERMAN, SPANISH};
    use crate::core::transform::encode;

    #[test]
    fn test_no_monograms_in_language() {
        let result = find_possible_shifts("ich bin a b c", &GERMAN);
        assert_eq!(result.method, NarrowingMethod::NoMonogramsInLanguage);
        assert_eq!(result.len(), 26);
        assert_eq!(result.details.text_monograms_found, 3);
    }

    #[test]
    fn test_no_monograms_in_text() {
        let result = find_possible_shifts("hello world", &ENGLISH);
        assert_eq!(result.method, NarrowingMethod::NoMonogramsInText);
        assert_eq!(result.len(), 26);
    }

    #[test]
    fn test_single_monogram() {
        // 'l'은 i(3) 또는 a(11)
        let result = find_possible_shifts("l think", &ENGLISH);
        assert_eq!(result.method, NarrowingMethod::SingleMonogram);
        assert_eq!(result.possible_shifts, BTreeSet::from([3, 11]));
        assert_eq!(result.details.text_monogram, Some('l'));
    }

    #[test]
    fn test_single_unique_monogram() {
        let result = find_possible_shifts("d cat and d dog", &ENGLISH);
        assert_eq!(result.method, NarrowingMethod::SingleUniqueMonogram);
        // d -> i: 21, d -> a: 3
        assert_eq!(result.possible_shifts, BTreeSet::from([3, 21]));
        assert_eq!(result.details.text_monograms_found, 2);
    }

    #[test]
    fn test_too_many_monograms() {
        let result = find_possible_shifts("x y z", &ENGLISH);
        assert_eq!(result.method, NarrowingMethod::TooManyMonograms);
        assert_eq!(result.len(), 26);
        assert_eq!(result.details.unique_monograms, Some(3));
    }

    #[test]
    fn test_intersection() {
        // "i"와 "a"를 시프트 5로 암호화: n, f
        let result = find_possible_shifts("n hat f dog", &ENGLISH);
        assert_eq!(result.method, NarrowingMethod::Intersection);
        // n -> {i:5, a:13}, f -> {i:23, a:5}
        assert_eq!(result.possible_shifts, BTreeSet::from([5]));
        assert_eq!(result.details.shifts_found, Some(1));
    }

    #[test]
    fn test_intersection_can_be_empty() {
        // b -> {i:19, a:1}, c -> {i:20, a:2}: 교집합 없음
        let result = find_possible_shifts("b c", &ENGLISH);
        assert_eq!(result.method, NarrowingMethod::Intersection);
        assert!(result.is_empty());
    }

    #[test]
    fn test_true_shift_never_excluded() {
        let plain = "I think I saw a cat and a dog while I was out";
        for shift in 0..26 {
            let encoded = encode(plain, shift);
            let result = find_possible_shifts(&encoded, &ENGLISH);
            assert!(
                result.contains(shift as u8),
                "시프트 {}가 후보에서 빠짐 ({:?})",
                shift,
                result.method
            );
        }
    }

    #[test]
    fn test_true_shift_never_excluded_other_languages() {
        let spanish = "Juan y Maria van a la playa o al parque";
        let french = "Il y a un chat qui a faim";
        for shift in 0..26 {
            let es = find_possible_shifts(&encode(spanish, shift), &SPANISH);
            assert!(es.contains(shift as u8));
            let fr = find_possible_shifts(&encode(french, shift), &FRENCH);
            assert!(fr.contains(shift as u8));
        }
    }

    #[test]
    fn test_method_names() {
        assert_eq!(NarrowingMethod::Intersection.as_str(), "intersection");
        assert_eq!(
            serde_json::to_string(&NarrowingMethod::TooManyMonograms).unwrap(),
            "\"too_many_monograms\""
        );
    }
}
