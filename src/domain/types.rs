// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 도메인 타입 정의
// ==========================================
// 규칙: 요건 카테고리는 8종 고정, 리포트 표기는 학사요람의 한글 명칭 그대로
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 단과대학 명칭 상수
// ==========================================
// 전공(Major) 엔티티의 college 필드와 리터럴 비교에 사용
pub const COLLEGE_ENGINEERING: &str = "공과대학";
pub const COLLEGE_ART: &str = "미술대학";

// ==========================================
// 학과 코드 상수
// ==========================================
// 학과별 특례 판정(MSC 정책, 교과과정 개편)에 사용
pub const MAJOR_CODE_CS: &str = "CS";
pub const MAJOR_CODE_EE: &str = "EE";
pub const MAJOR_CODE_IE: &str = "IE";

// ==========================================
// 졸업요건 카테고리 (Requirement Category)
// ==========================================
// 직렬화 형식: 한글 표기 (리포트 JSON과 동일)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequirementCategory {
    #[serde(rename = "전공기초영어")]
    MajorBasicEnglish,
    #[serde(rename = "기초교양")]
    BasicElective,
    #[serde(rename = "드래곤볼")]
    Dragonball,
    #[serde(rename = "MSC")]
    Msc,
    #[serde(rename = "특성화교양")]
    SpecializedElective,
    #[serde(rename = "전공")]
    MajorCourse,
    #[serde(rename = "전공필수")]
    RequiredMajor,
    #[serde(rename = "전체 수강학점")]
    TotalCredit,
}

impl RequirementCategory {
    /// 리포트에 표기되는 한글 명칭
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementCategory::MajorBasicEnglish => "전공기초영어",
            RequirementCategory::BasicElective => "기초교양",
            RequirementCategory::Dragonball => "드래곤볼",
            RequirementCategory::Msc => "MSC",
            RequirementCategory::SpecializedElective => "특성화교양",
            RequirementCategory::MajorCourse => "전공",
            RequirementCategory::RequiredMajor => "전공필수",
            RequirementCategory::TotalCredit => "전체 수강학점",
        }
    }
}

impl fmt::Display for RequirementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
