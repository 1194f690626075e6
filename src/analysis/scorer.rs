//! 카테고리별 시프트 스코어링
//!
//! 여섯 가지 언어 요소(글자, 첫 글자, 끝 글자, 모노그램, 다이그램, 트라이그램)마다
//! 독립적으로 (시프트, 점수) 순위를 만듭니다.
//! 후보 축소 단계에서 남은 시프트만 점수를 받습니다.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::monogram::{find_possible_shifts, NarrowingDetails, NarrowingMethod, ShiftNarrowing};
use super::parser;
use super::stats::{Language, LanguageProfile, ProfileIndex};
use crate::core::shift::shift_between;

/// 텍스트/언어 양쪽에서 비교할 상위 기호 수
pub const TOP_N: usize = 5;

/// 언어 요소 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    SingleLetters,
    FirstLetters,
    LastLetters,
    Monograms,
    Digrams,
    Trigrams,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::SingleLetters,
        Category::FirstLetters,
        Category::LastLetters,
        Category::Monograms,
        Category::Digrams,
        Category::Trigrams,
    ];
}

/// 시프트 하나의 점수
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftScore {
    pub shift: u8,
    pub score: f64,
}

/// 점수 내림차순 (시프트, 점수) 목록
///
/// 근거가 전혀 없는 시프트는 0점이 아니라 목록에서 빠집니다.
pub type CategoryResult = Vec<ShiftScore>;

/// 시프트별 점수 누적기 (희소)
#[derive(Debug)]
struct ShiftAccumulator<'a> {
    narrowing: &'a ShiftNarrowing,
    scores: BTreeMap<u8, f64>,
}

impl<'a> ShiftAccumulator<'a> {
    fn new(narrowing: &'a ShiftNarrowing) -> Self {
        Self {
            narrowing,
            scores: BTreeMap::new(),
        }
    }

    /// 후보에 있는 시프트만 누적
    fn add(&mut self, shift: Option<u8>, score: f64) {
        let Some(shift) = shift else {
            return;
        };
        if !self.narrowing.contains(shift) {
            return;
        }
        *self.scores.entry(shift).or_insert(0.0) += score;
    }

    fn into_ranked(self) -> CategoryResult {
        rank_scores(self.scores)
    }
}

/// 시프트 오름차순 맵을 점수 내림차순 목록으로 변환
///
/// 안정 정렬이므로 동점은 작은 시프트가 앞에 옵니다.
pub(crate) fn rank_scores(scores: BTreeMap<u8, f64>) -> Vec<ShiftScore> {
    let mut ranked: Vec<ShiftScore> = scores
        .into_iter()
        .map(|(shift, score)| ShiftScore { shift, score })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// 항목별 출현 횟수 (첫 출현 순서 유지)
pub fn count_frequency<T: Clone + Eq + Hash>(items: &[T]) -> Vec<(T, usize)> {
    let mut positions: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for item in items {
        match positions.get(item) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(item.clone(), counts.len());
                counts.push((item.clone(), 1));
            }
        }
    }

    counts
}

/// 빈도 상위 N개 (동률은 첫 출현 순서)
pub fn top_n<T: Clone>(frequency: &[(T, usize)], n: usize) -> Vec<(T, usize)> {
    let mut sorted = frequency.to_vec();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted.truncate(n);
    sorted
}

/// 순위 기반 매칭: 텍스트 상위 5개 x 언어 상위 5개
///
/// 점수 = 텍스트 출현 수 * (5 - 언어 순위)
fn score_by_rank(
    observed: &[char],
    reference_by_frequency: &[char],
    narrowing: &ShiftNarrowing,
) -> CategoryResult {
    if observed.is_empty() {
        return Vec::new();
    }

    let frequency = count_frequency(observed);
    let top_text = top_n(&frequency, TOP_N);

    let mut acc = ShiftAccumulator::new(narrowing);
    for (text_letter, count) in &top_text {
        for (rank, &lang_letter) in reference_by_frequency.iter().take(TOP_N).enumerate() {
            let score = (*count * (TOP_N - rank)) as f64;
            acc.add(shift_between(*text_letter, lang_letter), score);
        }
    }

    acc.into_ranked()
}

/// 글자 빈도 분석 (모노그램 제외)
pub fn analyze_single_letters(
    text: &str,
    index: &ProfileIndex,
    narrowing: &ShiftNarrowing,
) -> CategoryResult {
    let letters = parser::extract_letters_excluding_monograms(text);
    score_by_rank(&letters, &index.letters_by_frequency, narrowing)
}

/// 단어 첫 글자 분석
pub fn analyze_first_letters(
    text: &str,
    index: &ProfileIndex,
    narrowing: &ShiftNarrowing,
) -> CategoryResult {
    let letters = parser::extract_first_letters(text);
    score_by_rank(&letters, &index.first_letters_by_frequency, narrowing)
}

/// 단어 끝 글자 분석
pub fn analyze_last_letters(
    text: &str,
    index: &ProfileIndex,
    narrowing: &ShiftNarrowing,
) -> CategoryResult {
    let letters = parser::extract_last_letters(text);
    score_by_rank(&letters, &index.last_letters_by_frequency, narrowing)
}

/// 모노그램 분석
///
/// 언어 모노그램 어휘가 작으므로 상위 5개 제한 없이 전부 교차합니다.
/// 점수 = 텍스트 출현 수 * 언어 가중치
pub fn analyze_monograms(
    text: &str,
    profile: &LanguageProfile,
    narrowing: &ShiftNarrowing,
) -> CategoryResult {
    let monograms = parser::extract_monograms(text);
    if monograms.is_empty() {
        return Vec::new();
    }

    let mut acc = ShiftAccumulator::new(narrowing);
    for (text_monogram, count) in count_frequency(&monograms) {
        for &(lang_monogram, weight) in profile.monograms {
            acc.add(shift_between(text_monogram, lang_monogram), count as f64 * weight);
        }
    }

    acc.into_ranked()
}

/// 다이그램 분석 (간격 매칭)
///
/// 같은 간격을 가진 언어 다이그램마다 점수 = 텍스트 출현 수 * 언어 빈도(%)
pub fn analyze_digrams(
    text: &str,
    index: &ProfileIndex,
    narrowing: &ShiftNarrowing,
) -> CategoryResult {
    let digrams = parser::extract_digrams(text);
    if digrams.is_empty() {
        return Vec::new();
    }

    let mut by_gap: BTreeMap<u8, Vec<String>> = BTreeMap::new();
    for d in digrams {
        by_gap.entry(d.gap).or_default().push(d.digram);
    }

    let mut acc = ShiftAccumulator::new(narrowing);
    for (gap, grams) in &by_gap {
        let Some(reference) = index.digrams_by_gap.get(gap) else {
            continue;
        };
        for (text_gram, count) in count_frequency(grams) {
            for lang in reference {
                acc.add(first_letter_shift(&text_gram, lang.gram), count as f64 * lang.frequency);
            }
        }
    }

    acc.into_ranked()
}

/// 트라이그램 분석 (간격 쌍 매칭)
pub fn analyze_trigrams(
    text: &str,
    index: &ProfileIndex,
    narrowing: &ShiftNarrowing,
) -> CategoryResult {
    let trigrams = parser::extract_trigrams(text);
    if trigrams.is_empty() {
        return Vec::new();
    }

    let mut by_gaps: BTreeMap<(u8, u8), Vec<String>> = BTreeMap::new();
    for t in trigrams {
        by_gaps.entry((t.gap1, t.gap2)).or_default().push(t.trigram);
    }

    let mut acc = ShiftAccumulator::new(narrowing);
    for (gaps, grams) in &by_gaps {
        let Some(reference) = index.trigrams_by_gaps.get(gaps) else {
            continue;
        };
        for (text_gram, count) in count_frequency(grams) {
            for lang in reference {
                acc.add(first_letter_shift(&text_gram, lang.gram), count as f64 * lang.frequency);
            }
        }
    }

    acc.into_ranked()
}

/// 두 n-gram 첫 글자 사이의 시프트
fn first_letter_shift(text_gram: &str, lang_gram: &str) -> Option<u8> {
    shift_between(text_gram.chars().next()?, lang_gram.chars().next()?)
}

/// 여섯 카테고리 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub single_letters: CategoryResult,
    pub first_letters: CategoryResult,
    pub last_letters: CategoryResult,
    pub monograms: CategoryResult,
    pub digrams: CategoryResult,
    pub trigrams: CategoryResult,
}

impl CategoryScores {
    /// 카테고리 결과 조회
    pub fn get(&self, category: Category) -> &CategoryResult {
        match category {
            Category::SingleLetters => &self.single_letters,
            Category::FirstLetters => &self.first_letters,
            Category::LastLetters => &self.last_letters,
            Category::Monograms => &self.monograms,
            Category::Digrams => &self.digrams,
            Category::Trigrams => &self.trigrams,
        }
    }

    /// (카테고리, 결과) 순회
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryResult)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// 한 언어에 대한 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageAnalysis {
    /// 표시 이름 ("English" 등)
    pub language: &'static str,
    pub possible_shifts_count: usize,
    /// 오름차순
    pub possible_shifts: Vec<u8>,
    pub method: NarrowingMethod,
    pub details: NarrowingDetails,
    pub categories: CategoryScores,
}

/// 한 언어에 대해 후보 축소 + 여섯 카테고리 스코어링 실행
pub fn analyze_language(text: &str, language: Language) -> LanguageAnalysis {
    let profile = language.profile();
    let index = language.index();
    let narrowing = find_possible_shifts(text, profile);

    log::debug!(
        "{} 후보 축소: {} ({}개)",
        profile.name,
        narrowing.method.as_str(),
        narrowing.len()
    );

    let categories = CategoryScores {
        single_letters: analyze_single_letters(text, index, &narrowing),
        first_letters: analyze_first_letters(text, index, &narrowing),
        last_letters: analyze_last_letters(text, index, &narrowing),
        monograms: analyze_monograms(text, profile, &narrowing),
        digrams: analyze_digrams(text, index, &narrowing),
        trigrams: analyze_trigrams(text, index, &narrowing),
    };

    LanguageAnalysis {
        language: profile.name,
        possible_shifts_count: narrowing.len(),
        possible_shifts: narrowing.possible_shifts.iter().copied().collect(),
        method: narrowing.method,
        details: narrowing.details,
        categories,
    }
}

/// 네 언어 전체 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllLanguagesAnalysis {
    pub english: LanguageAnalysis,
    pub french: LanguageAnalysis,
    pub spanish: LanguageAnalysis,
    pub german: LanguageAnalysis,
}

impl AllLanguagesAnalysis {
    pub fn get(&self, language: Language) -> &LanguageAnalysis {
        match language {
            Language::English => &self.english,
            Language::French => &self.french,
            Language::Spanish => &self.spanish,
            Language::German => &self.german,
        }
    }
}

/// 지원하는 모든 언어로 분석
pub fn analyze_all_languages(text: &str) -> AllLanguagesAnalysis {
    AllLanguagesAnalysis {
        english: analyze_language(text, Language::English),
        french: analyze_language(text, Language::French),
        spanish: analyze_language(text, Language::Spanish),
        german: analyze_language(text, Language::German),
    }
}
