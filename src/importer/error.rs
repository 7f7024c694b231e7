// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 적재 모듈 오류 타입
// ==========================================
// 도구: thiserror 파생 매크로
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 적재 모듈 오류 타입
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 파일 오류 =====
    #[error("파일 없음: {0}")]
    FileNotFound(String),

    #[error("파일 읽기 실패: {0}")]
    FileReadError(String),

    #[error("CSV 파싱 실패: {0}")]
    CsvParseError(String),

    // ===== 데이터 오류 =====
    #[error("행 값 오류 (행 {row}): {reason}")]
    InvalidRow { row: usize, reason: String },

    // ===== 저장소 오류 =====
    #[error("저장소 오류: {0}")]
    Repository(#[from] RepositoryError),

    // ===== 공통 오류 =====
    #[error("내부 오류: {0}")]
    InternalError(String),
}

// From<std::io::Error> 구현
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// From<csv::Error> 구현
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 타입 별칭
pub type ImportResult<T> = Result<T, ImportError>;
