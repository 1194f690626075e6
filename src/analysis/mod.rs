//! 통계 기반 카이사르 자동 해독
//!
//! 시프트를 모르는 암호문에서 가장 가능성 높은 시프트를 추정합니다.
//!
//! # 개요
//!
//! 4단계 파이프라인으로 동작합니다:
//!
//! 1. **특징 추출**: 글자, 첫/끝 글자, 한 글자 단어, 다이그램, 트라이그램
//! 2. **후보 축소**: 한 글자 단어로 26개 시프트 중 불가능한 것을 제거
//! 3. **카테고리 스코어링**: 언어 통계와 비교해 카테고리별 순위 생성
//! 4. **가중 합산**: 고정 가중치로 합친 뒤 1위 시프트로 디코딩
//!
//! 다이그램/트라이그램은 글자 간격(시프트 불변값)으로 비교하므로
//! 암호문 상태에서도 언어 n-gram과 매칭됩니다.
//!
//! # 사용 예시
//!
//! ```
//! use caesar_toolkit::analysis::{auto_decode, Language};
//! use caesar_toolkit::core::transform::rot13;
//!
//! let plain = "the quick brown fox jumps over the lazy dog";
//! let outcome = auto_decode(&rot13(plain).encoded, Language::English);
//! assert_eq!(outcome.shift, Some(13));
//! assert_eq!(outcome.decoded.as_deref(), Some(plain));
//! ```

pub mod decoder;
pub mod monogram;
pub mod parser;
pub mod scorer;
pub mod stats;

// 공개 인터페이스
pub use decoder::{auto_decode, auto_decode_by_id, combine_scores, DecodeOutcome};
pub use monogram::{find_possible_shifts, NarrowingMethod, ShiftNarrowing};
pub use scorer::{
    analyze_all_languages, analyze_language, AllLanguagesAnalysis, Category, CategoryScores,
    LanguageAnalysis, ShiftScore,
};
pub use stats::{Language, LanguageProfile};
