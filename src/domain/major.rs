// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 전공 참조 데이터
// ==========================================
// 역할: 학사 카탈로그에서 조회되는 전공(학과) 스냅샷
// 규칙: 평가 한 번 동안 불변. 판정 분기는 code/college 리터럴 비교로 수행
// ==========================================

use crate::domain::types::{COLLEGE_ART, COLLEGE_ENGINEERING};
use serde::{Deserialize, Serialize};

/// 전공(학과) 참조 데이터
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Major {
    /// 카탈로그 내부 식별자
    pub id: i64,
    /// 학과 코드 (예: "CS", "EE", "IE")
    pub code: String,
    /// 소속 단과대학 명칭 (예: "공과대학")
    pub college: String,
}

impl Major {
    pub fn new(id: i64, code: impl Into<String>, college: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            college: college.into(),
        }
    }

    /// 공과대학 소속 여부. MSC 카테고리 포함 조건
    pub fn is_engineering(&self) -> bool {
        self.college == COLLEGE_ENGINEERING
    }

    /// 미술대학 소속 여부. 전공 브리핑 분기 조건
    pub fn is_art(&self) -> bool {
        self.college == COLLEGE_ART
    }
}
