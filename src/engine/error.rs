// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 엔진 계층 오류 타입
// ==========================================
// 역할: 평가 중단 사유 정의
// 규칙: 부분 리포트 금지. 오류가 나면 평가 전체가 중단됨
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 평가 엔진 오류 타입
#[derive(Error, Debug)]
pub enum EngineError {
    /// 학생 입력이 기본 형태 검증을 통과하지 못함. 평가 시작 전에 반환됨
    #[error("학생 입력 오류: {reason}")]
    InvalidStudentInput { reason: String },

    /// 카탈로그에서 학과 또는 과목 목록을 해석하지 못함. 평가 전체 중단
    #[error("카탈로그 조회 실패 ({context}): {source}")]
    CatalogLookupFailure {
        context: String,
        #[source]
        source: RepositoryError,
    },
}

impl EngineError {
    /// 저장소 오류를 맥락 문자열과 함께 카탈로그 조회 실패로 감쌈
    pub fn catalog_lookup(context: impl Into<String>, source: RepositoryError) -> Self {
        EngineError::CatalogLookupFailure {
            context: context.into(),
            source,
        }
    }
}

/// Result 타입 별칭
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup_error_keeps_context() {
        let err = EngineError::catalog_lookup(
            "전공 과목 풀 조회",
            RepositoryError::NotFound {
                entity: "Major".to_string(),
                id: "7".to_string(),
            },
        );

        let message = err.to_string();
        assert!(message.contains("전공 과목 풀 조회"));
        assert!(message.contains("Major"));
    }
}
