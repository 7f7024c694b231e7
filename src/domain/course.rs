// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 과목 값 타입
// ==========================================
// 규칙: 과목 동일성은 (학수번호, 학점) 쌍으로만 판정한다.
//       subject_area(abeek 태그)는 분류 힌트일 뿐 동일성에 관여하지 않는다.
// ==========================================

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// 이수 과목 한 건
///
/// 졸업요건 판정의 기본 단위. "과목 X를 이수했는가"는 전부
/// (number, credit) 완전 일치 비교로 수행된다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// 학수번호 (예: "001011")
    pub number: String,
    /// 학점
    pub credit: u32,
    /// 교양영역 태그 (abeek 태그). 없을 수 있음
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_area: Option<String>,
}

impl Course {
    /// 영역 태그 없는 과목 생성
    pub fn new(number: impl Into<String>, credit: u32) -> Self {
        Self {
            number: number.into(),
            credit,
            subject_area: None,
        }
    }

    /// 영역 태그가 있는 과목 생성
    pub fn with_area(number: impl Into<String>, credit: u32, subject_area: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            credit,
            subject_area: Some(subject_area.into()),
        }
    }
}

// 동일성: (number, credit)만 비교. subject_area 제외
impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.credit == other.credit
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
        self.credit.hash(state);
    }
}
