//! 제약 조건 디스크립터와 필드 단위 평가기
//!
//! Spring Validation의 어노테이션(`@NotBlank`, `@Size`, `@Pattern` 등)을
//! 명시적인 디스크립터 객체로 재구현한 모듈입니다. 각 디스크립터는
//! 제약 종류, 파라미터, 선택적 그룹 태그, 메시지를 가지며,
//! 필드 하나에 대한 평가는 항상 전체 집계 방식으로 동작합니다.
//! 실패한 디스크립터가 같은 필드의 다음 디스크립터 평가를 막지 않습니다.
//!
//! ## 부재(null) 값 처리
//!
//! 필수성 디스크립터(`Required`, `NotBlank`, `NotEmptyList`)는 부재를
//! 직접 위반으로 보고하고, 나머지 디스크립터는 값이 없으면 건너뜁니다.
//! 값이 존재하지만 공백인 문자열은 집계 모드에서 NotBlank 위반과
//! 길이/패턴 위반을 동시에 쌓을 수 있습니다.
//!
//! ## 등록 시점 검증
//!
//! 잘못된 정규식이나 역전된 범위 경계는 디스크립터 생성자에서
//! `ConfigurationError`로 보고됩니다. 요청 데이터로는 절대 발생하지 않으며
//! 애플리케이션 기동 시점에 치명적 오류로 처리됩니다.

use chrono::{DateTime, Local, Utc};
use regex::Regex;
use rust_decimal::Decimal;

use crate::errors::errors::AppError;
use crate::utils::string_utils::is_valid_string;

use super::group::ValidationGroup;
use super::violation::Violation;

/// 제약 조건의 종류와 파라미터
#[derive(Debug, Clone)]
pub enum ConstraintKind {
    /// 값이 반드시 존재해야 함
    Required,
    /// 값이 존재하고 공백이 아닌 문자열이어야 함
    NotBlank,
    /// 목록이 존재하고 비어 있지 않아야 함
    NotEmptyList,
    /// 정수 하한 (포함)
    Min(i64),
    /// 정수 상한 (포함)
    Max(i64),
    /// 문자열 길이 범위 (논리 문자 수 기준, 양끝 포함)
    Length { min: usize, max: usize },
    /// 전체 값이 패턴과 일치해야 함 (시작-끝 앵커링)
    Pattern(Regex),
    /// 평가 시점보다 엄격하게 과거인 시각이어야 함
    Past,
    /// 십진수 범위 (양끝 포함) 및 소수 자릿수 상한
    DecimalRange { min: Decimal, max: Decimal, scale: u32 },
    /// 목록의 각 문자열 원소가 공백이 아니어야 함
    EachNotBlank,
}

/// 필드 하나에 선언되는 제약 조건 디스크립터
///
/// 그룹 태그가 없으면 항상 평가되고, 있으면 요청된 그룹과 일치할 때만
/// 평가됩니다. 메시지는 치환 가능한 리터럴 템플릿입니다.
#[derive(Debug, Clone)]
pub struct Constraint {
    kind: ConstraintKind,
    group: Option<ValidationGroup>,
    message: String,
}

impl Constraint {
    fn new(kind: ConstraintKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            group: None,
            message: message.into(),
        }
    }

    /// 필수 값 제약을 생성합니다.
    pub fn required(message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::Required, message)
    }

    /// 공백 아님 제약을 생성합니다.
    pub fn not_blank(message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::NotBlank, message)
    }

    /// 비어 있지 않은 목록 제약을 생성합니다.
    pub fn not_empty_list(message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::NotEmptyList, message)
    }

    /// 정수 하한 제약을 생성합니다 (포함).
    pub fn min(bound: i64, message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::Min(bound), message)
    }

    /// 정수 상한 제약을 생성합니다 (포함).
    pub fn max(bound: i64, message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::Max(bound), message)
    }

    /// 문자열 길이 범위 제약을 생성합니다.
    ///
    /// # Errors
    /// * `AppError::ConfigurationError` - 최소값이 최대값보다 큰 경우
    pub fn length(min: usize, max: usize, message: impl Into<String>) -> Result<Self, AppError> {
        if min > max {
            return Err(AppError::ConfigurationError(format!(
                "문자열 길이 제약의 최소값 {}이(가) 최대값 {}보다 큽니다",
                min, max
            )));
        }
        Ok(Self::new(ConstraintKind::Length { min, max }, message))
    }

    /// 정규식 패턴 제약을 생성합니다.
    ///
    /// 전체 값 일치를 보장하기 위해 패턴을 `^(?:…)$`로 감싸서 컴파일합니다.
    ///
    /// # Errors
    /// * `AppError::ConfigurationError` - 패턴이 컴파일되지 않는 경우
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self, AppError> {
        let anchored = format!("^(?:{})$", pattern);
        let regex = Regex::new(&anchored).map_err(|e| {
            AppError::ConfigurationError(format!("정규식 패턴 컴파일 실패 ({}): {}", pattern, e))
        })?;
        Ok(Self::new(ConstraintKind::Pattern(regex), message))
    }

    /// 과거 시각 제약을 생성합니다.
    pub fn past(message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::Past, message)
    }

    /// 십진수 범위 제약을 생성합니다.
    ///
    /// # Errors
    /// * `AppError::ConfigurationError` - 최소값이 최대값보다 큰 경우
    pub fn decimal_range(
        min: Decimal,
        max: Decimal,
        scale: u32,
        message: impl Into<String>,
    ) -> Result<Self, AppError> {
        if min > max {
            return Err(AppError::ConfigurationError(format!(
                "십진수 범위 제약의 최소값 {}이(가) 최대값 {}보다 큽니다",
                min, max
            )));
        }
        Ok(Self::new(
            ConstraintKind::DecimalRange { min, max, scale },
            message,
        ))
    }

    /// 목록 원소별 공백 아님 제약을 생성합니다.
    pub fn each_not_blank(message: impl Into<String>) -> Self {
        Self::new(ConstraintKind::EachNotBlank, message)
    }

    /// 이 제약 조건에 그룹 태그를 부여합니다.
    pub fn with_group(mut self, group: ValidationGroup) -> Self {
        self.group = Some(group);
        self
    }
}

/// 평가 대상 필드 값에 대한 타입별 뷰
///
/// 요청 DTO의 `Option` 필드를 평가기가 다룰 수 있는 공통 형태로 투영합니다.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// 값 없음 (null 또는 필드 누락)
    Absent,
    /// 문자열 값
    Text(&'a str),
    /// 정수 값
    Int(i64),
    /// 불리언 값
    Bool(bool),
    /// 시각 값
    Instant(DateTime<Utc>),
    /// 문자열 목록
    TextList(&'a [String]),
    /// 길이만 관찰하는 목록 (중첩 엔티티 목록)
    List { len: usize },
}

impl<'a> FieldValue<'a> {
    pub fn of_text(value: &'a Option<String>) -> Self {
        match value {
            Some(text) => FieldValue::Text(text),
            None => FieldValue::Absent,
        }
    }

    pub fn of_int(value: &Option<i32>) -> Self {
        match value {
            Some(number) => FieldValue::Int(i64::from(*number)),
            None => FieldValue::Absent,
        }
    }

    pub fn of_bool(value: &Option<bool>) -> Self {
        match value {
            Some(flag) => FieldValue::Bool(*flag),
            None => FieldValue::Absent,
        }
    }

    pub fn of_instant(value: &Option<DateTime<Utc>>) -> Self {
        match value {
            Some(instant) => FieldValue::Instant(*instant),
            None => FieldValue::Absent,
        }
    }

    pub fn of_text_list(value: &'a Option<Vec<String>>) -> Self {
        match value {
            Some(items) => FieldValue::TextList(items),
            None => FieldValue::Absent,
        }
    }

    pub fn of_list_len(len: Option<usize>) -> Self {
        match len {
            Some(len) => FieldValue::List { len },
            None => FieldValue::Absent,
        }
    }
}

/// 필드 하나를 디스크립터 목록에 대해 평가합니다.
///
/// 활성 그룹에 속한 디스크립터를 선언 순서대로 모두 평가하며,
/// 위반은 선언 순서 그대로 반환됩니다. 필드 수준에서는 모드와 무관하게
/// 항상 전체 집계입니다.
///
/// # 인자
/// * `path` - 위반에 귀속할 필드 경로
/// * `value` - 평가 대상 값
/// * `constraints` - 선언 순서의 디스크립터 목록
/// * `group` - 이 호출에 요청된 검증 그룹
/// * `now` - 평가 시점 (호출당 한 번 읽어 재사용)
pub fn check_field(
    path: &str,
    value: &FieldValue<'_>,
    constraints: &[Constraint],
    group: ValidationGroup,
    now: DateTime<Local>,
) -> Vec<Violation> {
    let now_instant = now.with_timezone(&Utc);
    let mut violations = Vec::new();

    for constraint in constraints {
        if !group.activates(constraint.group) {
            continue;
        }

        match (&constraint.kind, value) {
            (ConstraintKind::Required, FieldValue::Absent) => {
                violations.push(Violation::constraint(path, &constraint.message));
            }
            (ConstraintKind::NotBlank, FieldValue::Absent) => {
                violations.push(Violation::constraint(path, &constraint.message));
            }
            (ConstraintKind::NotBlank, FieldValue::Text(text)) => {
                if !is_valid_string(text) {
                    violations.push(Violation::constraint(path, &constraint.message));
                }
            }
            (ConstraintKind::NotEmptyList, FieldValue::Absent) => {
                violations.push(Violation::constraint(path, &constraint.message));
            }
            (ConstraintKind::NotEmptyList, FieldValue::List { len: 0 }) => {
                violations.push(Violation::constraint(path, &constraint.message));
            }
            (ConstraintKind::Min(bound), FieldValue::Int(number)) => {
                if number < bound {
                    violations.push(Violation::constraint(path, &constraint.message));
                }
            }
            (ConstraintKind::Max(bound), FieldValue::Int(number)) => {
                if number > bound {
                    violations.push(Violation::constraint(path, &constraint.message));
                }
            }
            (ConstraintKind::Length { min, max }, FieldValue::Text(text)) => {
                // 바이트 수가 아닌 논리 문자 수 기준
                let count = text.chars().count();
                if count < *min || count > *max {
                    violations.push(Violation::constraint(path, &constraint.message));
                }
            }
            (ConstraintKind::Pattern(regex), FieldValue::Text(text)) => {
                if !regex.is_match(text) {
                    violations.push(Violation::constraint(path, &constraint.message));
                }
            }
            (ConstraintKind::Past, FieldValue::Instant(instant)) => {
                // 평가 시점과 같은 시각도 위반
                if *instant >= now_instant {
                    violations.push(Violation::constraint(path, &constraint.message));
                }
            }
            (ConstraintKind::DecimalRange { min, max, scale }, FieldValue::Text(text)) => {
                match text.trim().parse::<Decimal>() {
                    Ok(amount) => {
                        if amount.scale() > *scale || amount < *min || amount > *max {
                            violations.push(Violation::constraint(path, &constraint.message));
                        }
                    }
                    Err(_) => {
                        violations.push(Violation::constraint(path, &constraint.message));
                    }
                }
            }
            (ConstraintKind::EachNotBlank, FieldValue::TextList(items)) => {
                for (index, item) in items.iter().enumerate() {
                    if !is_valid_string(item) {
                        violations.push(Violation::constraint(
                            format!("{}[{}]", path, index),
                            &constraint.message,
                        ));
                    }
                }
            }
            // 값이 없거나 종류가 맞지 않는 디스크립터는 건너뜀
            _ => {}
        }
    }

    violations
}
