//! 교차 필드 일관성 규칙
//!
//! 개별적으로 유효한 필드들 사이의 일관성을 평가하는 순수 함수들입니다.
//! 신분증 번호에는 생년월일 8자리(0 기준 6~13번 위치)와 성별 패리티
//! 숫자(16번 위치)가 내장되어 있으며, 홀수면 남성(true), 짝수면
//! 여성(false)으로 해석합니다. 달력 날짜 비교는 시스템 로컬 시간대
//! 기준입니다.

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use thiserror::Error;

use super::violation::Violation;

/// 신분증 번호 불일치 메시지 (고정 문자열, 치환 없음)
pub const IDENTITY_CONSISTENCY_MESSAGE: &str = "신분증 번호가 생일 또는 성별과 일치하지 않습니다";

/// 평가 불가능한 신분증 번호 메시지
pub const MALFORMED_IDENTITY_MESSAGE: &str =
    "신분증 번호가 손상되어 생년월일과 성별을 추출할 수 없습니다";

/// 나이-생년 불일치 메시지
pub const AGE_CONSISTENCY_MESSAGE: &str = "나이가 생년과 일치하지 않습니다";

/// 신분증 번호가 내장 정보를 추출할 수 없는 형태인 경우
///
/// 패턴 검사를 통과한 15자리 번호도 성별 패리티 위치(16)가 없어
/// 여기에 해당합니다. 이 에러는 `validate` 바깥으로 전파되지 않고
/// MalformedInput 위반으로 변환됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("신분증 번호에서 생년월일과 성별을 추출할 수 없습니다")]
pub struct MalformedIdentityNumber;

/// 신분증 번호에서 생년월일과 성별을 추출합니다.
///
/// # 반환값
/// * `Ok((생년월일, 성별))` - 추출 성공
/// * `Err(MalformedIdentityNumber)` - 너무 짧거나 날짜가 파싱되지 않는 경우
pub fn derive_identity_parts(
    identity_number: &str,
) -> Result<(NaiveDate, bool), MalformedIdentityNumber> {
    let chars: Vec<char> = identity_number.chars().collect();
    if chars.len() < 17 {
        return Err(MalformedIdentityNumber);
    }

    let date_digits: String = chars[6..14].iter().collect();
    let birth_date = NaiveDate::parse_from_str(&date_digits, "%Y%m%d")
        .map_err(|_| MalformedIdentityNumber)?;

    let parity_digit = chars[16].to_digit(10).ok_or(MalformedIdentityNumber)?;

    Ok((birth_date, parity_digit % 2 != 0))
}

/// 신분증 번호에 내장된 생년월일/성별이 명시된 값과 일치하는지 검사합니다.
///
/// 전제 조건: 세 필드 모두 개별 검사를 통과한 상태에서만 호출됩니다.
pub fn check_identity_consistency(
    identity_number: &str,
    birth_day: DateTime<Utc>,
    gender: bool,
) -> Option<Violation> {
    match derive_identity_parts(identity_number) {
        Err(_) => Some(Violation::malformed(
            "identityNumber",
            MALFORMED_IDENTITY_MESSAGE,
        )),
        Ok((derived_date, derived_gender)) => {
            let stated_date = birth_day.with_timezone(&Local).date_naive();
            if derived_date != stated_date || derived_gender != gender {
                Some(Violation::constraint(
                    "identityNumber",
                    IDENTITY_CONSISTENCY_MESSAGE,
                ))
            } else {
                None
            }
        }
    }
}

/// 생일의 연도에 나이를 더한 값이 평가 시점의 연도와 같은지 검사합니다.
///
/// 전제 조건: `age`, `birthDay` 모두 개별 검사를 통과한 상태에서만
/// 호출됩니다. 생일 기념일 근처에서만 성립하는 규칙이지만 원 동작
/// 그대로 유지합니다.
pub fn check_age_consistency(
    age: i32,
    birth_day: DateTime<Utc>,
    now: DateTime<Local>,
) -> Option<Violation> {
    let birth_year = birth_day.with_timezone(&Local).year();
    if birth_year + age != now.year() {
        Some(Violation::constraint("age", AGE_CONSISTENCY_MESSAGE))
    } else {
        None
    }
}
