//! 알파벳 시프트 기본 연산
//!
//! 문자 하나를 N칸 이동합니다. 대소문자는 유지하고, 영문자가 아닌 문자는 그대로 통과시킵니다.

/// 알파벳 크기
pub const ALPHABET_SIZE: i64 = 26;

/// 임의의 정수 시프트를 0~25 범위로 정규화
pub fn normalize_shift(shift: i64) -> u8 {
    (((shift % ALPHABET_SIZE) + ALPHABET_SIZE) % ALPHABET_SIZE) as u8
}

/// 소문자 a~z의 알파벳 인덱스 (0~25)
///
/// a~z가 아니면 None
pub fn letter_index(c: char) -> Option<u8> {
    if c.is_ascii_lowercase() {
        Some(c as u8 - b'a')
    } else {
        None
    }
}

/// 암호문 글자를 기준 글자로 옮기는 시프트: (source - target + 26) mod 26
///
/// 두 글자 중 하나라도 a~z가 아니면 None
pub fn shift_between(source: char, target: char) -> Option<u8> {
    let s = letter_index(source.to_ascii_lowercase())?;
    let t = letter_index(target.to_ascii_lowercase())?;
    Some((s + 26 - t) % 26)
}

/// 악센트 문자를 기본 영문자로 변환
///
/// 매핑에 없는 문자는 None 반환
pub fn fold_accent(c: char) -> Option<char> {
    match c {
        // 소문자
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => Some('a'),
        'è' | 'é' | 'ê' | 'ë' => Some('e'),
        'ì' | 'í' | 'î' | 'ï' => Some('i'),
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => Some('o'),
        'ù' | 'ú' | 'û' | 'ü' => Some('u'),
        'ý' | 'ÿ' => Some('y'),
        'ñ' => Some('n'),
        'ç' => Some('c'),
        // 대문자
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => Some('A'),
        'È' | 'É' | 'Ê' | 'Ë' => Some('E'),
        'Ì' | 'Í' | 'Î' | 'Ï' => Some('I'),
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => Some('O'),
        'Ù' | 'Ú' | 'Û' | 'Ü' => Some('U'),
        'Ý' | 'Ÿ' => Some('Y'),
        'Ñ' => Some('N'),
        'Ç' => Some('C'),
        _ => None,
    }
}

/// 문자 하나를 시프트
///
/// - 악센트 문자는 기본 글자로 바꾼 뒤 시프트 (결과에 악센트는 남지 않음)
/// - 영문자가 아니면 원본 그대로 반환
/// - 시프트 값은 0~25로 정규화
pub fn shift_char(c: char, shift: i64) -> char {
    let base = fold_accent(c).unwrap_or(c);

    if !base.is_ascii_alphabetic() {
        return c;
    }

    let is_upper = base.is_ascii_uppercase();
    let code = base.to_ascii_lowercase() as u8 - b'a';
    let shifted = (code + normalize_shift(shift)) % 26;
    let out = (b'a' + shifted) as char;

    if is_upper {
        out.to_ascii_uppercase()
    } else {
        out
    }
}
