//! 언어별 통계 테이블
//!
//! 영어/프랑스어/스페인어/독일어 네 가지 언어의 기준 빈도 데이터입니다.
//! 각 언어마다 여섯 가지 테이블을 가집니다:
//!
//! 1. 글자 빈도 (%)
//! 2. 한 글자 단어(모노그램)의 상대 가중치
//! 3. 단어 첫 글자 빈도 (%)
//! 4. 단어 끝 글자 빈도 (%)
//! 5. 다이그램(두 글자) 빈도 (%) - 주요 조합만
//! 6. 트라이그램(세 글자) 빈도 (%) - 주요 조합만
//!
//! 테이블은 희소할 수 있으며, 없는 항목은 증거 0으로 취급합니다.
//! 선언 순서는 동률 정렬 시 순서를 결정하므로 의미가 있습니다.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::core::shift::letter_index;
use crate::error::CipherError;

/// 지원 언어
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
    Spanish,
    German,
}

impl Language {
    /// 모든 지원 언어 (분석 순서)
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::French,
        Language::Spanish,
        Language::German,
    ];

    /// 요청에서 쓰는 식별자 ("english" 등)
    pub fn id(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::German => "german",
        }
    }

    /// 식별자로 언어 조회
    pub fn from_id(id: &str) -> Result<Self, CipherError> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.id() == id)
            .ok_or_else(|| CipherError::InvalidArgument(format!("Language '{}' not supported", id)))
    }

    /// 언어 통계 테이블
    pub fn profile(&self) -> &'static LanguageProfile {
        match self {
            Language::English => &ENGLISH,
            Language::French => &FRENCH,
            Language::Spanish => &SPANISH,
            Language::German => &GERMAN,
        }
    }

    /// 미리 계산된 정렬/그룹 인덱스
    pub fn index(&self) -> &'static ProfileIndex {
        // 네 언어 모두 초기화 시 삽입됨
        &PROFILE_INDEXES[*self as usize]
    }
}

impl FromStr for Language {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_id(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().name)
    }
}

/// 언어 통계 (불변 정적 데이터)
#[derive(Debug)]
pub struct LanguageProfile {
    /// 표시 이름 ("English" 등)
    pub name: &'static str,
    pub letter_frequency: &'static [(char, f64)],
    /// 비어 있으면 신뢰할 만한 한 글자 단어가 없는 언어
    pub monograms: &'static [(char, f64)],
    pub first_letters: &'static [(char, f64)],
    pub last_letters: &'static [(char, f64)],
    pub digrams: &'static [(&'static str, f64)],
    pub trigrams: &'static [(&'static str, f64)],
}

/// 빈도 테이블을 내림차순으로 정렬한 기호 목록 (동률은 선언 순서 유지)
pub fn sorted_by_frequency(table: &[(char, f64)]) -> Vec<char> {
    let mut entries: Vec<(char, f64)> = table.to_vec();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries.into_iter().map(|(c, _)| c).collect()
}

/// 두 글자 사이 간격: (code2 - code1 + 26) mod 26
///
/// 시프트 불변값이므로 암호문과 평문에서 같습니다.
pub fn letter_gap(first: char, second: char) -> Option<u8> {
    let a = letter_index(first)?;
    let b = letter_index(second)?;
    Some((b + 26 - a) % 26)
}

/// 기준 n-gram 한 항목
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceGram {
    pub gram: &'static str,
    pub frequency: f64,
}

/// 언어 테이블에서 파생된 인덱스
#[derive(Debug)]
pub struct ProfileIndex {
    pub letters_by_frequency: Vec<char>,
    pub first_letters_by_frequency: Vec<char>,
    pub last_letters_by_frequency: Vec<char>,
    /// 간격별 다이그램
    pub digrams_by_gap: HashMap<u8, Vec<ReferenceGram>>,
    /// (간격1, 간격2)별 트라이그램
    pub trigrams_by_gaps: HashMap<(u8, u8), Vec<ReferenceGram>>,
}

impl ProfileIndex {
    fn build(profile: &LanguageProfile) -> Self {
        let mut digrams_by_gap: HashMap<u8, Vec<ReferenceGram>> = HashMap::new();
        for &(gram, frequency) in profile.digrams {
            let chars: Vec<char> = gram.chars().collect();
            if chars.len() != 2 {
                log::warn!("잘못된 다이그램 항목 무시: {}", gram);
                continue;
            }
            if let Some(gap) = letter_gap(chars[0], chars[1]) {
                digrams_by_gap
                    .entry(gap)
                    .or_default()
                    .push(ReferenceGram { gram, frequency });
            }
        }

        let mut trigrams_by_gaps: HashMap<(u8, u8), Vec<ReferenceGram>> = HashMap::new();
        for &(gram, frequency) in profile.trigrams {
            let chars: Vec<char> = gram.chars().collect();
            if chars.len() != 3 {
                log::warn!("잘못된 트라이그램 항목 무시: {}", gram);
                continue;
            }
            if let (Some(gap1), Some(gap2)) =
                (letter_gap(chars[0], chars[1]), letter_gap(chars[1], chars[2]))
            {
                trigrams_by_gaps
                    .entry((gap1, gap2))
                    .or_default()
                    .push(ReferenceGram { gram, frequency });
            }
        }

        Self {
            letters_by_frequency: sorted_by_frequency(profile.letter_frequency),
            first_letters_by_frequency: sorted_by_frequency(profile.first_letters),
            last_letters_by_frequency: sorted_by_frequency(profile.last_letters),
            digrams_by_gap,
            trigrams_by_gaps,
        }
    }
}

lazy_static! {
    /// `Language` 선언 순서와 같은 순서의 인덱스
    static ref PROFILE_INDEXES: Vec<ProfileIndex> = Language::ALL
        .iter()
        .map(|lang| ProfileIndex::build(lang.profile()))
        .collect();
}

// ============================================================================
// 영어
// ============================================================================

pub static ENGLISH: LanguageProfile = LanguageProfile {
    name: "English",

    // 출처: Oxford English Corpus, practicalcryptography.com
    letter_frequency: &[
        ('e', 12.70), ('t', 9.06), ('a', 8.17), ('o', 7.51), ('i', 6.97),
        ('n', 6.75), ('s', 6.33), ('h', 6.09), ('r', 5.99), ('d', 4.25),
        ('l', 4.03), ('c', 2.78), ('u', 2.76), ('m', 2.41), ('w', 2.36),
        ('f', 2.23), ('g', 2.02), ('y', 1.97), ('p', 1.93), ('b', 1.29),
        ('v', 0.98), ('k', 0.77), ('j', 0.15), ('x', 0.15), ('q', 0.10),
        ('z', 0.07),
    ],

    // "I", "a"
    monograms: &[('i', 55.0), ('a', 45.0)],

    first_letters: &[
        ('t', 15.98), ('a', 11.68), ('o', 7.63), ('s', 7.28), ('w', 6.95),
        ('c', 5.23), ('b', 4.78), ('p', 4.32), ('h', 4.05), ('f', 3.89),
        ('m', 3.76), ('d', 3.45), ('r', 3.12), ('i', 2.98), ('n', 2.67),
        ('l', 2.56), ('e', 2.34), ('g', 2.01), ('u', 1.87), ('y', 1.65),
        ('v', 1.23), ('k', 1.10), ('j', 0.89), ('q', 0.56), ('z', 0.34),
        ('x', 0.12),
    ],

    last_letters: &[
        ('e', 19.74), ('s', 15.67), ('t', 11.23), ('d', 8.94), ('n', 7.89),
        ('r', 6.78), ('y', 5.43), ('l', 4.56), ('o', 3.21), ('g', 2.98),
        ('h', 2.45), ('a', 2.12), ('k', 1.87), ('m', 1.65), ('p', 1.43),
        ('f', 1.21), ('w', 1.09), ('c', 0.98), ('b', 0.76), ('i', 0.67),
        ('v', 0.54), ('x', 0.43), ('u', 0.32), ('z', 0.21), ('j', 0.12),
        ('q', 0.05),
    ],

    // 출처: practicalcryptography.com
    digrams: &[
        ("th", 3.56), ("he", 3.07), ("in", 2.43), ("er", 2.05), ("an", 1.99),
        ("re", 1.85), ("on", 1.76), ("at", 1.49), ("en", 1.45), ("nd", 1.35),
        ("ti", 1.34), ("es", 1.34), ("or", 1.28), ("te", 1.20), ("of", 1.17),
        ("ed", 1.17), ("is", 1.13), ("it", 1.12), ("al", 1.09), ("ar", 1.07),
        ("st", 1.05), ("to", 1.04), ("nt", 1.04), ("ng", 0.95), ("se", 0.93),
        ("ha", 0.93), ("as", 0.87), ("ou", 0.87), ("io", 0.83), ("le", 0.83),
        ("ve", 0.83), ("co", 0.79), ("me", 0.79), ("de", 0.76), ("hi", 0.76),
        ("ri", 0.73), ("ro", 0.73), ("ic", 0.70), ("ne", 0.69), ("ea", 0.69),
        ("ra", 0.69), ("ce", 0.65), ("li", 0.62), ("ch", 0.60), ("ll", 0.58),
        ("be", 0.58), ("ma", 0.57), ("si", 0.55), ("om", 0.55), ("ur", 0.54),
    ],

    trigrams: &[
        ("the", 1.81), ("and", 0.73), ("ing", 0.72), ("ion", 0.42), ("tio", 0.41),
        ("ent", 0.42), ("ati", 0.34), ("for", 0.34), ("her", 0.33), ("ter", 0.32),
        ("hat", 0.30), ("tha", 0.30), ("ere", 0.28), ("ate", 0.27), ("his", 0.27),
        ("con", 0.24), ("res", 0.24), ("ver", 0.24), ("all", 0.23), ("ons", 0.23),
        ("nce", 0.22), ("men", 0.21), ("ith", 0.21), ("ted", 0.21), ("ers", 0.20),
        ("pro", 0.20), ("thi", 0.20), ("wit", 0.20), ("are", 0.19), ("ess", 0.19),
        ("not", 0.19), ("ive", 0.19), ("was", 0.19), ("ect", 0.18), ("rea", 0.18),
        ("com", 0.18), ("eve", 0.18), ("per", 0.17), ("int", 0.17), ("est", 0.17),
        ("sta", 0.17), ("cti", 0.16), ("ica", 0.16), ("ist", 0.16), ("ear", 0.16),
        ("ain", 0.16), ("one", 0.16), ("our", 0.16), ("iti", 0.15), ("rat", 0.15),
    ],
};

// ============================================================================
// 프랑스어
// ============================================================================

pub static FRENCH: LanguageProfile = LanguageProfile {
    name: "French",

    // 출처: apprendre-en-ligne.net (1,050만 글자)
    letter_frequency: &[
        ('e', 14.72), ('s', 7.93), ('a', 7.64), ('i', 7.53), ('t', 7.24),
        ('n', 7.10), ('r', 6.55), ('u', 6.05), ('l', 5.46), ('o', 5.38),
        ('d', 3.67), ('c', 3.18), ('m', 2.97), ('p', 2.80), ('v', 1.64),
        ('q', 1.06), ('f', 1.06), ('b', 1.03), ('g', 1.00), ('h', 0.85),
        ('j', 0.45), ('x', 0.42), ('y', 0.35), ('z', 0.21), ('w', 0.18),
        ('k', 0.02),
    ],

    // "a" (avoir), "y"
    monograms: &[('a', 95.0), ('y', 5.0)],

    first_letters: &[
        ('l', 8.50), ('e', 8.00), ('d', 7.50), ('c', 7.00), ('p', 6.50),
        ('s', 6.00), ('a', 5.80), ('m', 5.50), ('r', 5.20), ('t', 5.00),
        ('n', 4.80), ('i', 4.50), ('f', 4.00), ('v', 3.80), ('q', 3.50),
        ('b', 3.20), ('g', 2.80), ('h', 2.50), ('o', 2.30), ('u', 2.00),
        ('é', 1.80), ('j', 1.50), ('à', 1.20), ('y', 0.80), ('z', 0.50),
        ('x', 0.30), ('w', 0.20), ('k', 0.10),
    ],

    last_letters: &[
        ('e', 19.00), ('s', 16.00), ('t', 9.00), ('r', 7.50), ('n', 7.00),
        ('x', 6.00), ('a', 5.00), ('i', 4.50), ('u', 4.00), ('l', 3.50),
        ('é', 3.00), ('d', 2.80), ('c', 2.50), ('p', 2.00), ('o', 1.80),
        ('m', 1.50), ('f', 1.20), ('g', 1.00), ('z', 0.90), ('h', 0.80),
        ('v', 0.70), ('b', 0.60), ('y', 0.50), ('q', 0.40), ('j', 0.30),
        ('à', 0.20), ('w', 0.10), ('k', 0.05),
    ],

    digrams: &[
        ("es", 3.15), ("le", 2.24), ("de", 2.08), ("en", 1.92), ("re", 1.82),
        ("nt", 1.79), ("on", 1.77), ("er", 1.58), ("te", 1.45), ("el", 1.45),
        ("an", 1.45), ("ou", 1.45), ("et", 1.36), ("se", 1.30), ("ne", 1.29),
        ("ai", 1.29), ("ti", 1.29), ("qu", 1.29), ("la", 1.21), ("it", 1.16),
        ("ns", 1.14), ("ra", 1.14), ("ur", 1.13), ("me", 1.12), ("co", 1.10),
        ("is", 1.09), ("ie", 1.08), ("ar", 1.07), ("un", 1.06), ("ue", 1.04),
        ("us", 1.03), ("em", 1.02), ("as", 1.01), ("ce", 1.00), ("il", 0.99),
        ("io", 0.98), ("pr", 0.97), ("sa", 0.96), ("au", 0.95), ("ma", 0.94),
        ("ec", 0.93), ("di", 0.92), ("po", 0.91), ("pa", 0.90), ("in", 0.89),
        ("ss", 0.88), ("eu", 0.87), ("tr", 0.86), ("li", 0.85), ("ta", 0.84),
    ],

    trigrams: &[
        ("les", 1.22), ("ent", 1.08), ("que", 1.01), ("des", 0.89), ("une", 0.88),
        ("ait", 0.74), ("ion", 0.74), ("tio", 0.73), ("ant", 0.72), ("our", 0.71),
        ("ous", 0.68), ("men", 0.65), ("tre", 0.63), ("qui", 0.63), ("con", 0.62),
        ("dan", 0.61), ("lle", 0.60), ("ela", 0.59), ("eur", 0.59), ("son", 0.58),
        ("nte", 0.58), ("par", 0.57), ("ter", 0.56), ("com", 0.56), ("ans", 0.55),
        ("ers", 0.54), ("est", 0.53), ("sur", 0.52), ("pou", 0.51), ("res", 0.50),
        ("pre", 0.46), ("ver", 0.45), ("ssi", 0.44), ("pro", 0.43), ("mai", 0.42),
        ("enc", 0.41), ("nce", 0.39), ("ens", 0.38), ("air", 0.37), ("ont", 0.36),
        ("eme", 0.35), ("ett", 0.34), ("uer", 0.32), ("ten", 0.30),
    ],
};

// ============================================================================
// 스페인어
// ============================================================================

pub static SPANISH: LanguageProfile = LanguageProfile {
    name: "Spanish",

    // 출처: practicalcryptography.com
    letter_frequency: &[
        ('e', 13.68), ('a', 12.53), ('o', 8.68), ('s', 7.98), ('r', 6.87),
        ('n', 6.71), ('i', 6.25), ('d', 5.86), ('l', 4.97), ('c', 4.68),
        ('t', 4.63), ('u', 3.93), ('m', 3.15), ('p', 2.51), ('b', 1.42),
        ('g', 1.01), ('v', 0.90), ('y', 0.90), ('q', 0.88), ('h', 0.70),
        ('f', 0.69), ('z', 0.52), ('j', 0.44), ('ñ', 0.31), ('x', 0.22),
        ('w', 0.02), ('k', 0.01),
    ],

    // "y" (and), "a" (to), "o" (or)
    monograms: &[('y', 60.0), ('a', 30.0), ('o', 10.0)],

    first_letters: &[
        ('e', 9.50), ('a', 9.00), ('c', 8.50), ('l', 7.00), ('d', 6.50),
        ('p', 6.00), ('s', 5.50), ('m', 5.00), ('t', 4.50), ('r', 4.00),
        ('n', 3.80), ('i', 3.50), ('v', 3.20), ('h', 3.00), ('b', 2.80),
        ('f', 2.50), ('g', 2.20), ('q', 2.00), ('o', 1.80), ('u', 1.50),
        ('j', 1.20), ('y', 1.00), ('z', 0.80), ('ñ', 0.50), ('x', 0.30),
        ('w', 0.10), ('k', 0.05),
    ],

    last_letters: &[
        ('s', 18.00), ('a', 12.00), ('o', 10.00), ('e', 9.00), ('n', 8.00),
        ('r', 7.00), ('d', 5.00), ('l', 4.00), ('z', 3.50), ('t', 3.00),
        ('c', 2.50), ('i', 2.00), ('u', 1.80), ('m', 1.50), ('p', 1.20),
        ('y', 1.00), ('b', 0.90), ('g', 0.80), ('x', 0.70), ('j', 0.60),
        ('v', 0.50), ('f', 0.40), ('h', 0.30), ('ñ', 0.20), ('q', 0.15),
        ('w', 0.10), ('k', 0.05),
    ],

    digrams: &[
        ("de", 2.92), ("es", 2.67), ("en", 2.56), ("el", 2.12), ("la", 1.98),
        ("os", 1.89), ("ar", 1.67), ("al", 1.56), ("er", 1.45), ("as", 1.34),
        ("co", 1.23), ("do", 1.12), ("ra", 1.11), ("an", 1.09), ("re", 1.08),
        ("ue", 1.07), ("or", 1.05), ("ad", 1.04), ("ci", 1.03), ("st", 1.02),
        ("pa", 1.01), ("ta", 1.00), ("se", 0.99), ("te", 0.98), ("on", 0.97),
        ("qu", 0.96), ("ac", 0.95), ("un", 0.94), ("lo", 0.93), ("pr", 0.92),
        ("ec", 0.91), ("ti", 0.90), ("ma", 0.89), ("ro", 0.88), ("ie", 0.87),
        ("ca", 0.86), ("no", 0.85), ("da", 0.84), ("di", 0.83), ("po", 0.82),
        ("io", 0.81), ("to", 0.80), ("tr", 0.79), ("me", 0.78), ("na", 0.77),
        ("le", 0.76), ("li", 0.75), ("nc", 0.74), ("ri", 0.73), ("so", 0.72),
    ],

    trigrams: &[
        ("del", 0.68), ("ent", 0.62), ("los", 0.58), ("que", 0.54), ("las", 0.50),
        ("aci", 0.48), ("est", 0.46), ("con", 0.44), ("par", 0.42), ("ion", 0.40),
        ("des", 0.38), ("ado", 0.37), ("sta", 0.36), ("nte", 0.35), ("ara", 0.34),
        ("ere", 0.33), ("ros", 0.31), ("com", 0.30), ("res", 0.29), ("tar", 0.28),
        ("tra", 0.27), ("era", 0.26), ("una", 0.25), ("tad", 0.24), ("aba", 0.23),
        ("ada", 0.22), ("ora", 0.21), ("ias", 0.20), ("pre", 0.19), ("nci", 0.18),
        ("per", 0.17), ("ica", 0.16), ("men", 0.15), ("ido", 0.14), ("ter", 0.13),
        ("ita", 0.12), ("ant", 0.11), ("enc", 0.10), ("ndo", 0.09), ("pro", 0.08),
        ("ier", 0.06), ("ien", 0.05), ("ran", 0.04), ("cia", 0.02), ("nta", 0.01),
        ("mie", 0.01),
    ],
};

// ============================================================================
// 독일어
// ============================================================================

pub static GERMAN: LanguageProfile = LanguageProfile {
    name: "German",

    // 출처: practicalcryptography.com
    letter_frequency: &[
        ('e', 17.40), ('n', 9.78), ('i', 7.55), ('s', 7.27), ('r', 7.00),
        ('a', 6.51), ('t', 6.15), ('d', 5.08), ('h', 4.76), ('u', 4.35),
        ('l', 3.44), ('c', 3.06), ('g', 3.01), ('m', 2.53), ('o', 2.51),
        ('b', 1.89), ('w', 1.89), ('f', 1.66), ('k', 1.21), ('z', 1.13),
        ('p', 0.79), ('v', 0.67), ('ä', 0.54), ('ü', 0.65), ('ö', 0.30),
        ('j', 0.27), ('y', 0.04), ('x', 0.03), ('q', 0.02),
    ],

    // 독일어에는 한 글자 단어가 사실상 없음
    monograms: &[],

    first_letters: &[
        ('d', 11.00), ('s', 9.50), ('e', 8.00), ('a', 7.50), ('b', 6.50),
        ('g', 6.00), ('w', 5.50), ('m', 5.00), ('v', 4.50), ('k', 4.00),
        ('h', 3.80), ('f', 3.50), ('u', 3.20), ('z', 3.00), ('i', 2.80),
        ('n', 2.50), ('t', 2.30), ('r', 2.00), ('l', 1.80), ('p', 1.50),
        ('o', 1.20), ('c', 1.00), ('ä', 0.80), ('ü', 0.60), ('j', 0.50),
        ('ö', 0.40), ('y', 0.20), ('x', 0.10), ('q', 0.05),
    ],

    last_letters: &[
        ('e', 26.00), ('n', 18.00), ('t', 10.00), ('r', 7.00), ('s', 6.00),
        ('d', 5.00), ('h', 4.00), ('g', 3.50), ('l', 3.00), ('a', 2.50),
        ('k', 2.00), ('m', 1.80), ('z', 1.50), ('u', 1.20), ('i', 1.00),
        ('b', 0.90), ('f', 0.80), ('w', 0.70), ('c', 0.60), ('o', 0.50),
        ('p', 0.40), ('ä', 0.35), ('v', 0.30), ('ü', 0.25), ('ö', 0.20),
        ('x', 0.15), ('y', 0.10), ('j', 0.08), ('q', 0.05),
    ],

    digrams: &[
        ("en", 3.90), ("er", 3.66), ("ch", 2.75), ("de", 2.12), ("ei", 1.90),
        ("nd", 1.83), ("te", 1.77), ("in", 1.68), ("ie", 1.64), ("ge", 1.60),
        ("ne", 1.57), ("es", 1.52), ("be", 1.48), ("an", 1.47), ("un", 1.45),
        ("he", 1.43), ("di", 1.40), ("st", 1.38), ("re", 1.35), ("au", 1.32),
        ("se", 1.30), ("it", 1.28), ("da", 1.25), ("ic", 1.23), ("sc", 1.20),
        ("si", 1.18), ("le", 1.15), ("li", 1.12), ("ve", 1.10), ("nt", 1.08),
        ("el", 1.06), ("ss", 1.04), ("ra", 1.02), ("ta", 1.00), ("ns", 0.98),
        ("em", 0.96), ("zu", 0.94), ("ar", 0.92), ("is", 0.90), ("al", 0.88),
        ("ng", 0.86), ("ht", 0.84), ("ri", 0.82), ("me", 0.80), ("la", 0.78),
        ("on", 0.76), ("as", 0.74), ("wi", 0.72), ("rg", 0.68),
    ],

    trigrams: &[
        ("ein", 0.83), ("der", 1.04), ("ich", 0.75), ("sch", 0.76), ("die", 0.62),
        ("che", 0.58), ("und", 0.48), ("ine", 0.48), ("ten", 0.51), ("nde", 0.72),
        ("end", 0.44), ("ers", 0.42), ("ter", 0.44), ("gen", 0.44), ("cht", 0.41),
        ("ung", 0.39), ("das", 0.38), ("ere", 0.38), ("den", 0.56), ("ste", 0.42),
        ("hen", 0.31), ("ver", 0.34), ("eit", 0.33), ("rde", 0.35), ("ber", 0.36),
        ("ens", 0.36), ("nge", 0.35), ("ren", 0.13), ("ach", 0.08), ("aus", 0.07),
        ("ben", 0.06), ("auf", 0.05), ("ien", 0.04), ("man", 0.03), ("sei", 0.02),
        ("abe", 0.01), ("bes", 0.01), ("ell", 0.01), ("wei", 0.01), ("war", 0.01),
    ],
};
