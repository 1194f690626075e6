//! 카이사르 암호 기본 연산

pub mod shift;
pub mod transform;
pub mod unicode;
