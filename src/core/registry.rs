//! # Service Registry
//!
//! 애플리케이션 수명 동안 공유되는 컴포넌트(데이터베이스 핸들, 캐시 클라이언트,
//! 리포지토리, 서비스)를 타입 기준으로 보관하는 레지스트리입니다.
//!
//! `main`에서 의존 순서대로 인스턴스를 생성해 [`ServiceLocator::set`]으로 등록하고,
//! 핸들러는 [`ServiceLocator::resolve`]로 꺼내 씁니다. 등록되지 않은 타입을 조회하면
//! 패닉 대신 `AppError::InternalError`가 반환됩니다.
//!
//! ```rust,ignore
//! ServiceLocator::set(Arc::new(PlaceService::new(place_repo)));
//!
//! let service = ServiceLocator::resolve::<PlaceService>()?;
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::core::errors::AppError;

/// 타입 기반 인스턴스 보관소
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체됩니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());
        log::info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 인스턴스를 조회합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 등록된 인스턴스를 조회하고, 없으면 `InternalError`를 반환합니다.
    pub fn resolve<T: 'static + Send + Sync>() -> Result<Arc<T>, AppError> {
        Self::try_get::<T>().ok_or_else(|| {
            let type_name = Self::extract_clean_type_name(std::any::type_name::<T>());
            log::error!("❌ 등록되지 않은 컴포넌트 조회: {}", type_name);
            AppError::InternalError(format!("{} is not registered", type_name))
        })
    }

    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RegisteredOnlyHere(u32);
    struct NeverRegistered;

    #[test]
    fn test_set_then_resolve_returns_same_instance() {
        let instance = Arc::new(RegisteredOnlyHere(7));
        ServiceLocator::set(instance.clone());

        let resolved = ServiceLocator::resolve::<RegisteredOnlyHere>().unwrap();
        assert!(Arc::ptr_eq(&instance, &resolved));
        assert_eq!(resolved.0, 7);
    }

    #[test]
    fn test_resolve_unregistered_is_internal_error() {
        match ServiceLocator::resolve::<NeverRegistered>() {
            Err(AppError::InternalError(msg)) => assert!(msg.contains("NeverRegistered")),
            _ => panic!("Expected InternalError"),
        }
    }

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("crate::services::places::PlaceService"),
            "PlaceService"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("Plain"), "Plain");
    }
}
