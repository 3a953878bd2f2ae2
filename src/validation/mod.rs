//! # 요청 검증 엔진 모듈
//!
//! 사용자 생성 요청에 대한 검증 경계를 구현하는 핵심 모듈입니다.
//! Spring Validation의 어노테이션 + 그룹 + BindingResult 조합을
//! 선언적 디스크립터 객체와 순수 함수로 재구현했습니다.
//!
//! ## 구성 요소
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//!   engine - 전체 패스 조율, 집계/조기중단 모드
//! ├──────────────────────────────────────────────┤
//!   schema - 필드별 제약 디스크립터 선언
//!   group - 검증 그룹 활성화 규칙
//!   constraint - 디스크립터 종류와 필드 평가기
//!   cross_field - 교차 필드 일관성 규칙
//! ├──────────────────────────────────────────────┤
//!   violation - Verdict / Violation 결과 타입
//!   report - 줄 단위 리포트 렌더링
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## 계약
//!
//! 진입점은 [`ValidationEngine::validate`] 하나입니다. 숨은 입력이
//! 없도록 평가 시점과 그룹을 모두 명시적 인자로 받으므로, 고정된
//! 시계로 사소하게 테스트할 수 있습니다. 요청 데이터가 어떤 형태든
//! `validate`는 패닉하거나 에러를 반환하지 않고 Verdict를 돌려줍니다.

pub mod constraint;
pub mod cross_field;
pub mod engine;
pub mod group;
pub mod report;
pub mod schema;
pub mod violation;

pub use engine::{ValidationEngine, ValidationMode};
pub use group::ValidationGroup;
pub use report::render_report;
pub use violation::{Verdict, Violation, ViolationKind};
