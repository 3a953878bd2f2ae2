//! 사용자 생성 요청 제약 스키마
//!
//! 필드별 제약 조건 디스크립터를 선언 순서대로 정의합니다.
//! 선언 순서가 곧 평가 순서이며, 집계 리포트의 메시지 순서를 결정합니다.
//!
//! ## 그룹 범위 제약
//!
//! `age` 필드는 상호 배타적인 두 범위 쌍을 가집니다:
//! Adult 그룹은 18~35세, Minor 그룹은 7~17세. 필수성 검사는 그룹 태그가
//! 없어 어느 그룹에서도 항상 평가됩니다. Default 그룹에서는 범위 제약이
//! 전부 비활성인데, 이는 의도된 동작입니다.

use rust_decimal::Decimal;

use crate::errors::errors::AppError;

use super::constraint::Constraint;
use super::group::ValidationGroup;

/// 신분증 번호 형식 (15자리, 18자리, 17자리+검증 문자)
pub const IDENTITY_NUMBER_PATTERN: &str = r"(\d{15}$)|(^\d{18}$)|(^\d{17}(\d[Xx])$)";

/// 이메일 형식
pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9_-]+@[a-zA-Z0-9_-]{2,50}\.[a-zA-Z]{2,3}";

/// 사용자 생성 요청에 대한 필드별 제약 스키마
///
/// 엔진 생성 시점에 한 번 구성되며, 이후 모든 검증 호출이 공유합니다.
/// 디스크립터 파라미터 오류(잘못된 정규식, 역전된 경계)는 여기서
/// `ConfigurationError`로 드러나 기동을 중단시킵니다.
#[derive(Debug, Clone)]
pub struct UserSchema {
    pub name: Vec<Constraint>,
    pub age: Vec<Constraint>,
    pub gender: Vec<Constraint>,
    pub birth_day: Vec<Constraint>,
    pub identity_number: Vec<Constraint>,
    pub email: Vec<Constraint>,
    pub friends: Vec<Constraint>,
    pub friend_name: Vec<Constraint>,
    pub friend_hair_number: Vec<Constraint>,
    pub money: Vec<Constraint>,
    pub tags: Vec<Constraint>,
}

impl UserSchema {
    /// 표준 사용자 생성 스키마를 구성합니다.
    ///
    /// # Errors
    /// * `AppError::ConfigurationError` - 디스크립터 파라미터가 잘못된 경우
    pub fn standard() -> Result<Self, AppError> {
        Ok(Self {
            name: vec![
                Constraint::not_blank("이름은 필수 입력 항목입니다"),
                Constraint::length(2, 4, "이름은 2자 이상 4자 이하여야 합니다")?,
            ],
            age: vec![
                Constraint::required("나이는 필수 입력 항목입니다"),
                Constraint::min(18, "나이는 18세 이상이어야 합니다")
                    .with_group(ValidationGroup::Adult),
                Constraint::max(35, "나이는 35세 이하여야 합니다")
                    .with_group(ValidationGroup::Adult),
                Constraint::min(7, "나이는 7세 이상이어야 합니다")
                    .with_group(ValidationGroup::Minor),
                Constraint::max(17, "나이는 17세 이하여야 합니다")
                    .with_group(ValidationGroup::Minor),
            ],
            gender: vec![Constraint::required("성별은 필수 입력 항목입니다")],
            birth_day: vec![
                Constraint::required("생일은 필수 입력 항목입니다"),
                Constraint::past("생일은 과거 날짜여야 합니다"),
            ],
            identity_number: vec![
                Constraint::not_blank("신분증 번호는 필수 입력 항목입니다"),
                Constraint::pattern(
                    IDENTITY_NUMBER_PATTERN,
                    "신분증 번호 형식이 올바르지 않습니다",
                )?,
            ],
            email: vec![
                Constraint::not_blank("이메일은 필수 입력 항목입니다"),
                Constraint::pattern(EMAIL_PATTERN, "이메일 형식이 올바르지 않습니다")?,
            ],
            friends: vec![Constraint::not_empty_list("친구 목록은 비어 있을 수 없습니다")],
            friend_name: vec![Constraint::not_blank("친구 이름은 공백일 수 없습니다")],
            friend_hair_number: vec![Constraint::not_blank(
                "친구 헤어 번호는 공백일 수 없습니다",
            )],
            money: vec![Constraint::decimal_range(
                Decimal::new(1, 2),
                Decimal::from(100_000_000),
                2,
                "금액은 0.01 이상 100000000 이하이며 소수점 둘째 자리까지 허용됩니다",
            )?],
            tags: vec![Constraint::each_not_blank("태그는 공백일 수 없습니다")],
        })
    }
}
