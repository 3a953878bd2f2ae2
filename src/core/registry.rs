//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! Spring Framework의 ApplicationContext 역할을 하는 전역 DI 컨테이너입니다.
//! 애플리케이션 기동 시점에 `main`이 핵심 컴포넌트(검증 엔진, 사용자
//! 서비스)를 등록하고, 핸들러들이 타입 기반으로 조회합니다.
//!
//! | Spring 개념 | 이 시스템 |
//! |-------------|-----------|
//! | `ApplicationContext` | `ServiceLocator` |
//! | `context.getBean(Type.class)` | `ServiceLocator::get::<T>()` |
//! | Bean 등록 | `ServiceLocator::set(instance)` |
//!
//! 모든 인스턴스는 `Arc`로 공유되는 싱글톤이며, 등록 이후 불변입니다.
//! 검증 엔진처럼 생성 시점에 실패할 수 있는 컴포넌트는 등록 전에
//! 구성 오류를 드러내므로, 여기서는 생성자 실행이나 지연 초기화를
//! 하지 않습니다.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

/// 전역 싱글톤 저장소
static REGISTRY: Lazy<RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// 전역 의존성 주입 컨테이너
///
/// Thread-safe하며, 같은 타입을 다시 등록하면 기존 인스턴스를 교체합니다
/// (테스트에서 유용).
pub struct ServiceLocator;

impl ServiceLocator {
    /// 인스턴스를 싱글톤으로 등록합니다.
    pub fn set<T: Send + Sync + 'static>(instance: T) {
        let mut registry = REGISTRY.write().expect("서비스 레지스트리 잠금 실패");
        registry.insert(TypeId::of::<T>(), Arc::new(instance));
    }

    /// 등록된 인스턴스를 조회합니다.
    ///
    /// # 반환값
    /// * `Some(Arc<T>)` - 등록된 인스턴스
    /// * `None` - 해당 타입이 등록되지 않음
    pub fn try_get<T: Send + Sync + 'static>() -> Option<Arc<T>> {
        let registry = REGISTRY.read().expect("서비스 레지스트리 잠금 실패");
        registry
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 등록된 인스턴스를 조회합니다.
    ///
    /// # Panics
    /// 해당 타입이 등록되지 않은 경우. 등록은 기동 시점 `main`의
    /// 책임이므로, 미등록 조회는 배선 누락이라는 프로그래밍 오류입니다.
    pub fn get<T: Send + Sync + 'static>() -> Arc<T> {
        Self::try_get::<T>().unwrap_or_else(|| {
            panic!(
                "Service not found: {}. ServiceLocator::set으로 먼저 등록해야 합니다",
                std::any::type_name::<T>()
            )
        })
    }
}
