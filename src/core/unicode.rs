//! 라틴 문자 악센트 제거 유틸리티
//!
//! 단어 추출용 정규화: 정준 분해(NFD) 후 결합 분음 부호를 버립니다.
//! 시프트용 악센트 접기(`core::shift::fold_accent`)와는 별개 경로입니다.

use unicode_normalization::UnicodeNormalization;

/// 결합 분음 부호 영역 시작 (U+0300)
const COMBINING_MARK_START: u32 = 0x0300;
/// 결합 분음 부호 영역 끝 (U+036F)
const COMBINING_MARK_END: u32 = 0x036F;

/// 결합 분음 부호(U+0300 ~ U+036F)인지 확인
pub fn is_combining_mark(c: char) -> bool {
    (COMBINING_MARK_START..=COMBINING_MARK_END).contains(&(c as u32))
}

/// 문자열에서 악센트를 완전히 제거
///
/// 정준 분해가 없는 글자(ß, ø, ł 등)는 그대로 남습니다.
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|&c| !is_combining_mark(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_accents_latin() {
        assert_eq!(strip_accents("école"), "ecole");
        assert_eq!(strip_accents("mañana"), "manana");
        assert_eq!(strip_accents("über"), "uber");
        assert_eq!(strip_accents("ŽLUŤOUČKÝ"), "ZLUTOUCKY");
    }

    #[test]
    fn test_strip_accents_extended_latin() {
        // 루마니아어 쉼표 아래 (U+0219, U+021B)
        assert_eq!(strip_accents("mușchi țară"), "muschi tara");
        // 병음 (U+01CE)
        assert_eq!(strip_accents("mǎ"), "ma");
        // 베트남어: 부호 두 개가 겹친 글자
        assert_eq!(strip_accents("tiễn hệ"), "tien he");
    }

    #[test]
    fn test_strip_accents_combining_marks() {
        // e + U+0301 (분리형)
        assert_eq!(strip_accents("e\u{0301}te\u{0301}"), "ete");
        assert!(is_combining_mark('\u{0308}'));
        assert!(!is_combining_mark('e'));
    }

    #[test]
    fn test_no_decomposition_kept() {
        // 정준 분해가 없는 글자는 그대로
        assert_eq!(strip_accents("straße"), "straße");
        assert_eq!(strip_accents("søren"), "søren");
        assert_eq!(strip_accents("łódź"), "łodz");
    }

    #[test]
    fn test_plain_ascii_unchanged() {
        assert_eq!(strip_accents("hello, world!"), "hello, world!");
        assert_eq!(strip_accents(""), "");
    }
}
