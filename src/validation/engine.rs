//! 검증 엔진
//!
//! 사용자 생성 요청 하나에 대한 전체 검증 패스를 조율합니다.
//! 스키마 검사(활성 그룹 기준), 중첩 친구 목록의 재귀 검사,
//! 교차 필드 일관성 검사를 선언 순서대로 수행하고 Verdict를 조립합니다.
//!
//! ## 두 가지 검증 전략
//!
//! 같은 필드/규칙 평가기를 공유하면서 제어 정책만 다른 두 모드를
//! 1급 계약으로 제공합니다:
//!
//! | 모드 | 동작 |
//! |------|------|
//! | `Aggregate` | 앞선 실패와 무관하게 모든 필드와 규칙을 평가하고 전체 위반 목록 반환 |
//! | `FailFast` | 선언 순서로 평가하다 첫 위반에서 즉시 중단, 단일 원소 목록 반환 |
//!
//! ## 교차 필드 규칙의 전제 조건
//!
//! 전제 필드가 자체 검사에 실패한 교차 필드 규칙은 건너뜁니다.
//! 형식이 틀린 신분증 번호로 생일 일관성을 따지는 무의미한 2차 에러를
//! 막기 위한 것으로, 집계 모드에서도 나머지 패스는 계속 진행됩니다.
//!
//! ## 동시성
//!
//! 호출 단위로 순수합니다. 공유 가변 상태가 없고 I/O도 없으므로
//! `validate` 호출은 어떤 조합으로든 동시에 실행될 수 있습니다.
//! 시간 의존 입력은 `now` 하나뿐이며, 호출자가 호출당 한 번 읽어
//! 전달하고 패스 내부의 과거 검사와 나이 일관성 검사가 같은 값을
//! 재사용합니다.

use chrono::{DateTime, Local};

use crate::domain::dto::users::request::UserRequest;
use crate::errors::errors::AppError;

use super::constraint::{check_field, FieldValue};
use super::cross_field;
use super::group::ValidationGroup;
use super::schema::UserSchema;
use super::violation::{Verdict, Violation};

/// 검증 패스의 제어 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// 모든 위반을 수집
    Aggregate,
    /// 첫 위반에서 중단
    FailFast,
}

/// 사용자 생성 요청 검증 엔진
///
/// 스키마는 생성 시점에 한 번 구성되어 모든 호출이 공유합니다.
/// 디스크립터 구성 오류는 `new`에서 `ConfigurationError`로 드러나며,
/// 요청 데이터로 인한 오류는 절대 `validate` 밖으로 전파되지 않습니다.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    schema: UserSchema,
}

impl ValidationEngine {
    /// 표준 스키마로 엔진을 생성합니다.
    ///
    /// # Errors
    /// * `AppError::ConfigurationError` - 스키마 디스크립터 구성 오류
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            schema: UserSchema::standard()?,
        })
    }

    /// 요청 하나에 대한 전체 검증 패스를 수행합니다.
    ///
    /// 위반이 있는 Verdict는 정상적인 실행 결과입니다. 평가조차 불가능한
    /// 입력(너무 짧은 신분증 번호 등)도 MalformedInput 위반으로 Verdict에
    /// 담기며, 예외로 전파되지 않습니다.
    ///
    /// # 인자
    /// * `request` - 검증 대상 요청
    /// * `group` - 이 호출에 적용할 검증 그룹
    /// * `mode` - 집계 또는 조기 중단
    /// * `now` - 평가 시점 (호출당 한 번 읽어서 전달)
    pub fn validate(
        &self,
        request: &UserRequest,
        group: ValidationGroup,
        mode: ValidationMode,
        now: DateTime<Local>,
    ) -> Verdict {
        let mut collected: Vec<Violation> = Vec::new();

        // 필드 검사 - 선언 순서대로
        if absorb(
            &mut collected,
            check_field(
                "name",
                &FieldValue::of_text(&request.name),
                &self.schema.name,
                group,
                now,
            ),
            mode,
        ) {
            return Verdict::from_violations(collected);
        }

        let age_violations = check_field(
            "age",
            &FieldValue::of_int(&request.age),
            &self.schema.age,
            group,
            now,
        );
        let age_clean = age_violations.is_empty();
        if absorb(&mut collected, age_violations, mode) {
            return Verdict::from_violations(collected);
        }

        let gender_violations = check_field(
            "gender",
            &FieldValue::of_bool(&request.gender),
            &self.schema.gender,
            group,
            now,
        );
        let gender_clean = gender_violations.is_empty();
        if absorb(&mut collected, gender_violations, mode) {
            return Verdict::from_violations(collected);
        }

        let birth_day_violations = check_field(
            "birthDay",
            &FieldValue::of_instant(&request.birth_day),
            &self.schema.birth_day,
            group,
            now,
        );
        let birth_day_clean = birth_day_violations.is_empty();
        if absorb(&mut collected, birth_day_violations, mode) {
            return Verdict::from_violations(collected);
        }

        let identity_violations = check_field(
            "identityNumber",
            &FieldValue::of_text(&request.identity_number),
            &self.schema.identity_number,
            group,
            now,
        );
        let identity_clean = identity_violations.is_empty();
        if absorb(&mut collected, identity_violations, mode) {
            return Verdict::from_violations(collected);
        }

        if absorb(
            &mut collected,
            check_field(
                "email",
                &FieldValue::of_text(&request.email),
                &self.schema.email,
                group,
                now,
            ),
            mode,
        ) {
            return Verdict::from_violations(collected);
        }

        if absorb(&mut collected, self.check_friends(request, group, now), mode) {
            return Verdict::from_violations(collected);
        }

        if absorb(
            &mut collected,
            check_field(
                "money",
                &FieldValue::of_text(&request.money),
                &self.schema.money,
                group,
                now,
            ),
            mode,
        ) {
            return Verdict::from_violations(collected);
        }

        if absorb(
            &mut collected,
            check_field(
                "tags",
                &FieldValue::of_text_list(&request.tags),
                &self.schema.tags,
                group,
                now,
            ),
            mode,
        ) {
            return Verdict::from_violations(collected);
        }

        // 교차 필드 규칙 - 전제 필드가 전부 개별 검사를 통과한 경우에만
        if identity_clean && birth_day_clean && gender_clean {
            if let (Some(identity_number), Some(birth_day), Some(gender)) = (
                request.identity_number.as_deref(),
                request.birth_day,
                request.gender,
            ) {
                if let Some(violation) =
                    cross_field::check_identity_consistency(identity_number, birth_day, gender)
                {
                    if absorb(&mut collected, vec![violation], mode) {
                        return Verdict::from_violations(collected);
                    }
                }
            }
        }

        if age_clean && birth_day_clean {
            if let (Some(age), Some(birth_day)) = (request.age, request.birth_day) {
                if let Some(violation) = cross_field::check_age_consistency(age, birth_day, now) {
                    if absorb(&mut collected, vec![violation], mode) {
                        return Verdict::from_violations(collected);
                    }
                }
            }
        }

        Verdict::from_violations(collected)
    }

    /// 친구 목록 검사: 존재/비어있음 검사 후 원소별 재귀 검사
    fn check_friends(
        &self,
        request: &UserRequest,
        group: ValidationGroup,
        now: DateTime<Local>,
    ) -> Vec<Violation> {
        let mut violations = check_field(
            "friends",
            &FieldValue::of_list_len(request.friends.as_ref().map(Vec::len)),
            &self.schema.friends,
            group,
            now,
        );

        if let Some(friends) = &request.friends {
            for (index, friend) in friends.iter().enumerate() {
                violations.extend(check_field(
                    &format!("friends[{}].name", index),
                    &FieldValue::of_text(&friend.name),
                    &self.schema.friend_name,
                    group,
                    now,
                ));
                violations.extend(check_field(
                    &format!("friends[{}].hairNumber", index),
                    &FieldValue::of_text(&friend.hair_number),
                    &self.schema.friend_hair_number,
                    group,
                    now,
                ));
            }
        }

        violations
    }
}

/// 필드 하나의 검사 결과를 모드에 따라 수집합니다.
///
/// 집계 모드에서는 전부 수집하고 계속 진행, 조기 중단 모드에서는
/// (항상 전체 집계된 필드 결과 중) 첫 위반만 남기고 중단을 알립니다.
fn absorb(collected: &mut Vec<Violation>, mut found: Vec<Violation>, mode: ValidationMode) -> bool {
    if found.is_empty() {
        return false;
    }
    match mode {
        ValidationMode::Aggregate => {
            collected.append(&mut found);
            false
        }
        ValidationMode::FailFast => {
            collected.push(found.remove(0));
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::create_user_request::UserRequestBuilder;
    use crate::domain::dto::users::request::FriendRequest;
    use crate::validation::cross_field::{
        AGE_CONSISTENCY_MESSAGE, IDENTITY_CONSISTENCY_MESSAGE, MALFORMED_IDENTITY_MESSAGE,
    };
    use crate::validation::violation::ViolationKind;
    use chrono::TimeZone;

    fn engine() -> ValidationEngine {
        ValidationEngine::new().expect("표준 스키마 구성 실패")
    }

    /// 기본 빌더의 생일(1999년)과 나이(23)가 일관되는 고정 평가 시점
    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2022, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_valid_request_passes_in_both_modes() {
        let engine = engine();
        let request = UserRequestBuilder::with_default()
            .with_money(Some("42.50"))
            .with_tags(Some(vec!["첫째", "둘째"]))
            .build();

        for mode in [ValidationMode::Aggregate, ValidationMode::FailFast] {
            let verdict = engine.validate(&request, ValidationGroup::Adult, mode, fixed_now());
            assert!(verdict.is_empty(), "{:?} 모드에서 위반 없음이어야 함", mode);
        }
    }

    #[test]
    fn test_single_violation_is_identical_in_both_modes() {
        let engine = engine();
        let request = UserRequestBuilder::with_default()
            .with_email(Some("not-an-email"))
            .build();

        let aggregate = engine.validate(
            &request,
            ValidationGroup::Adult,
            ValidationMode::Aggregate,
            fixed_now(),
        );
        let fail_fast = engine.validate(
            &request,
            ValidationGroup::Adult,
            ValidationMode::FailFast,
            fixed_now(),
        );

        assert_eq!(aggregate.len(), 1);
        assert_eq!(aggregate, fail_fast);
        assert_eq!(aggregate.violations()[0].field_path, "email");
    }

    #[test]
    fn test_aggregate_collects_all_and_fail_fast_stops_at_first() {
        let engine = engine();
        // 독립적인 위반 세 개: 이름 누락, 이메일 형식, 빈 친구 목록
        let request = UserRequestBuilder::with_default()
            .with_name(None)
            .with_email(Some("잘못된형식"))
            .with_friends(Some(vec![]))
            .build();

        let aggregate = engine.validate(
            &request,
            ValidationGroup::Adult,
            ValidationMode::Aggregate,
            fixed_now(),
        );
        let paths: Vec<&str> = aggregate
            .violations()
            .iter()
            .map(|v| v.field_path.as_str())
            .collect();
        assert_eq!(paths, vec!["name", "email", "friends"]);

        let fail_fast = engine.validate(
            &request,
            ValidationGroup::Adult,
            ValidationMode::FailFast,
            fixed_now(),
        );
        assert_eq!(fail_fast.len(), 1);
        assert_eq!(fail_fast.violations()[0].field_path, "name");
    }

    #[test]
    fn test_validate_is_idempotent_for_fixed_now() {
        let engine = engine();
        let request = UserRequestBuilder::with_default()
            .with_age(Some(99))
            .build();
        let now = fixed_now();

        let first = engine.validate(&request, ValidationGroup::Adult, ValidationMode::Aggregate, now);
        let second = engine.validate(&request, ValidationGroup::Adult, ValidationMode::Aggregate, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_group_switching_changes_active_age_bounds() {
        let engine = engine();
        // 2002년생 20세 - 2022년 평가 시점에 나이-생년 일관성 성립
        let request = UserRequestBuilder::with_default()
            .with_age(Some(20))
            .with_birth_day_ymd(2002, 10, 31)
            .with_identity_number(Some("123456200210310017"))
            .build();

        let adult = engine.validate(
            &request,
            ValidationGroup::Adult,
            ValidationMode::Aggregate,
            fixed_now(),
        );
        assert!(adult.is_empty(), "20세는 성인 그룹을 통과해야 함");

        let minor = engine.validate(
            &request,
            ValidationGroup::Minor,
            ValidationMode::Aggregate,
            fixed_now(),
        );
        assert_eq!(minor.len(), 1);
        assert_eq!(minor.violations()[0].message, "나이는 17세 이하여야 합니다");

        // Default 그룹은 범위 제약이 전부 비활성
        let default = engine.validate(
            &request,
            ValidationGroup::Default,
            ValidationMode::Aggregate,
            fixed_now(),
        );
        assert!(default.is_empty());
    }

    #[test]
    fn test_default_group_still_requires_age_presence() {
        let engine = engine();
        let request = UserRequestBuilder::with_default().with_age(None).build();

        let verdict = engine.validate(
            &request,
            ValidationGroup::Default,
            ValidationMode::Aggregate,
            fixed_now(),
        );
        assert_eq!(verdict.len(), 1);
        assert_eq!(verdict.violations()[0].field_path, "age");
    }

    #[test]
    fn test_identity_consistency_passes_and_flags_shifted_birthday() {
        let engine = engine();

        // 기본 빌더: 신분증 1999-10-31 / 생일 1999-10-31 / 성별 true(홀수)
        let consistent = UserRequestBuilder::with_default().build();
        assert!(engine
            .validate(
                &consistent,
                ValidationGroup::Adult,
                ValidationMode::Aggregate,
                fixed_now(),
            )
            .is_empty());

        // 생일만 하루 앞으로 - 다른 필드는 전부 유효
        let shifted = UserRequestBuilder::with_default()
            .with_birth_day_ymd(1999, 10, 30)
            .build();
        let verdict = engine.validate(
            &shifted,
            ValidationGroup::Adult,
            ValidationMode::Aggregate,
            fixed_now(),
        );
        assert_eq!(verdict.len(), 1);
        assert_eq!(verdict.violations()[0].message, IDENTITY_CONSISTENCY_MESSAGE);
    }

    #[test]
    fn test_age_consistency_flags_mismatched_birth_year() {
        let engine = engine();
        // 1999 + 22 != 2022
        let request = UserRequestBuilder::with_default().with_age(Some(22)).build();

        let verdict = engine.validate(
            &request,
            ValidationGroup::Adult,
            ValidationMode::Aggregate,
            fixed_now(),
        );
        assert_eq!(verdict.len(), 1);
        assert_eq!(verdict.violations()[0].message, AGE_CONSISTENCY_MESSAGE);
    }

    #[test]
    fn test_cross_field_rules_skipped_when_prerequisite_field_invalid() {
        let engine = engine();
        // 신분증 형식 위반 - 일관성 규칙은 평가되지 않아야 함
        let request = UserRequestBuilder::with_default()
            .with_identity_number(Some("형식오류"))
            .build();

        let verdict = engine.validate(
            &request,
            ValidationGroup::Adult,
            ValidationMode::Aggregate,
            fixed_now(),
        );
        assert_eq!(verdict.len(), 1);
        assert_eq!(verdict.violations()[0].field_path, "identityNumber");
        assert_eq!(
            verdict.violations()[0].message,
            "신분증 번호 형식이 올바르지 않습니다"
        );
    }

    #[test]
    fn test_malformed_identity_number_reported_not_raised() {
        let engine = engine();
        // 15자리: 패턴은 통과하지만 패리티 위치가 없어 평가 불가
        let request = UserRequestBuilder::with_default()
            .with_identity_number(Some("123456789012345"))
            .build();

        let aggregate = engine.validate(
            &request,
            ValidationGroup::Adult,
            ValidationMode::Aggregate,
            fixed_now(),
        );
        assert_eq!(aggregate.len(), 1);
        assert_eq!(aggregate.violations()[0].kind, ViolationKind::MalformedInput);
        assert_eq!(aggregate.violations()[0].message, MALFORMED_IDENTITY_MESSAGE);

        // 조기 중단 모드에서도 예외가 아닌 첫 번째이자 유일한 위반
        let fail_fast = engine.validate(
            &request,
            ValidationGroup::Adult,
            ValidationMode::FailFast,
            fixed_now(),
        );
        assert_eq!(fail_fast, aggregate);
    }

    #[test]
    fn test_empty_friends_is_exactly_one_violation() {
        let engine = engine();
        let request = UserRequestBuilder::with_default()
            .with_friends(Some(vec![]))
            .build();

        let verdict = engine.validate(
            &request,
            ValidationGroup::Adult,
            ValidationMode::Aggregate,
            fixed_now(),
        );
        assert_eq!(verdict.len(), 1);
        assert_eq!(verdict.violations()[0].field_path, "friends");
    }

    #[test]
    fn test_nested_friend_violation_carries_element_path() {
        let engine = engine();
        let request = UserRequestBuilder::with_default()
            .with_friends(Some(vec![
                FriendRequest {
                    name: Some("박영희".to_string()),
                    hair_number: Some("1001".to_string()),
                },
                FriendRequest {
                    name: Some("   ".to_string()),
                    hair_number: Some("1002".to_string()),
                },
            ]))
            .build();

        let verdict = engine.validate(
            &request,
            ValidationGroup::Adult,
            ValidationMode::Aggregate,
            fixed_now(),
        );
        assert_eq!(verdict.len(), 1);
        assert_eq!(verdict.violations()[0].field_path, "friends[1].name");
    }

    #[test]
    fn test_optional_money_and_tags() {
        let engine = engine();

        // 부재는 위반이 아님 (기본 빌더가 이미 둘 다 부재)
        let absent = UserRequestBuilder::with_default().build();
        assert!(engine
            .validate(
                &absent,
                ValidationGroup::Adult,
                ValidationMode::Aggregate,
                fixed_now(),
            )
            .is_empty());

        // 소수 셋째 자리와 공백 태그는 위반
        let invalid = UserRequestBuilder::with_default()
            .with_money(Some("0.005"))
            .with_tags(Some(vec!["유효", "  "]))
            .build();
        let verdict = engine.validate(
            &invalid,
            ValidationGroup::Adult,
            ValidationMode::Aggregate,
            fixed_now(),
        );
        let paths: Vec<&str> = verdict
            .violations()
            .iter()
            .map(|v| v.field_path.as_str())
            .collect();
        assert_eq!(paths, vec!["money", "tags[1]"]);
    }
}
