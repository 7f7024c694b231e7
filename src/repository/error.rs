// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 저장소 계층 오류 타입
// ==========================================
// 도구: thiserror 파생 매크로
// ==========================================

use thiserror::Error;

/// 저장소 계층 오류 타입
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 데이터베이스 오류 =====
    #[error("레코드 없음: {entity} (id={id})")]
    NotFound { entity: String, id: String },

    #[error("데이터베이스 연결 실패: {0}")]
    DatabaseConnectionError(String),

    #[error("데이터베이스 락 획득 실패: {0}")]
    LockError(String),

    #[error("데이터베이스 쿼리 실패: {0}")]
    DatabaseQueryError(String),

    #[error("유니크 제약 위반: {0}")]
    UniqueConstraintViolation(String),

    #[error("외래키 제약 위반: {0}")]
    ForeignKeyViolation(String),

    // ===== 데이터 품질 오류 =====
    #[error("데이터 검증 실패: {0}")]
    ValidationError(String),

    #[error("필드 값 오류 (field={field}): {message}")]
    FieldValueError { field: String, message: String },

    // ===== 공통 오류 =====
    #[error("직렬화 실패: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("내부 오류: {0}")]
    InternalError(String),
}

// From<rusqlite::Error> 구현
impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    RepositoryError::UniqueConstraintViolation(msg)
                } else if msg.contains("FOREIGN KEY") {
                    RepositoryError::ForeignKeyViolation(msg)
                } else {
                    RepositoryError::DatabaseQueryError(msg)
                }
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "Unknown".to_string(),
                id: "Unknown".to_string(),
            },
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Result 타입 별칭
pub type RepositoryResult<T> = Result<T, RepositoryError>;
