// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - API 계층 오류 타입
// ==========================================
// 역할: 저장소/엔진 오류를 호출자 친화적 오류 메시지로 변환
// ==========================================

use crate::engine::error::EngineError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API 계층 오류 타입
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 입력/업무 규칙 오류
    // ==========================================
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    #[error("대상 없음: {0}")]
    NotFound(String),

    #[error("업무 규칙 위반: {0}")]
    BusinessRuleViolation(String),

    #[error("데이터 검증 실패: {0}")]
    ValidationError(String),

    // ==========================================
    // 데이터 접근 오류
    // ==========================================
    #[error("데이터베이스 오류: {0}")]
    DatabaseError(String),

    #[error("데이터베이스 연결 실패: {0}")]
    DatabaseConnectionError(String),

    // ==========================================
    // 공통 오류
    // ==========================================
    #[error("내부 오류: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// RepositoryError 변환
// 목적: 저장소 계층의 기술 오류를 호출자 친화적 업무 오류로 변환
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // 데이터베이스 오류
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={}) 없음", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("데이터베이스 락 획득 실패: {}", msg))
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("유니크 제약 위반: {}", msg))
            }
            RepositoryError::ForeignKeyViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("외래키 제약 위반: {}", msg))
            }

            // 데이터 품질 오류
            RepositoryError::ValidationError(msg) => ApiError::ValidationError(msg),
            RepositoryError::FieldValueError { field, message } => {
                ApiError::InvalidInput(format!("{} 필드 오류: {}", field, message))
            }

            // 공통 오류
            RepositoryError::Serialization(err) => {
                ApiError::InternalError(format!("직렬화 실패: {}", err))
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
        }
    }
}

// ==========================================
// EngineError 변환
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidStudentInput { reason } => ApiError::InvalidInput(reason),
            EngineError::CatalogLookupFailure { context, source } => match source {
                RepositoryError::NotFound { entity, id } => {
                    ApiError::NotFound(format!("{} 중 {}(id={}) 없음", context, entity, id))
                }
                other => ApiError::DatabaseError(format!("{}: {}", context, other)),
            },
        }
    }
}

/// Result 타입 별칭
pub type ApiResult<T> = Result<T, ApiError>;
