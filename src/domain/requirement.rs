// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 요건 리포트 타입
// ==========================================
// 역할: 평가 결과 한 줄(Requirement)과 그 하위 집계 버킷(SubField)
// 규칙: SubField.total_credit은 matched_courses 학점 합과 항상 일치해야 한다.
//       적립은 take_course()로만 수행한다
// ==========================================

use crate::domain::course::Course;
use crate::domain::types::RequirementCategory;
use serde::{Deserialize, Serialize};

// ==========================================
// SubField - 하위 집계 버킷
// ==========================================
/// 카테고리 내부의 영역별 집계 버킷
///
/// 한 과목이 여러 카테고리에 동시에 집계될 수 있으나,
/// 버킷 인스턴스 자체는 카테고리 간에 공유되지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubField {
    /// 영역 표시 명칭 (예: "글쓰기", "MSC수학")
    pub label: String,
    /// 이 버킷에 집계된 과목 목록
    pub matched_courses: Vec<Course>,
    /// matched_courses 학점 합계
    pub total_credit: u32,
    /// 버킷 자체 충족 여부 (카테고리별 기준이 정의된 경우)
    pub satisfied: bool,
    /// 이수 가능 과목 조회 경로 힌트 (정보성, 판정 무관)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_hint: Option<String>,
}

impl SubField {
    /// 빈 버킷 생성
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            matched_courses: Vec::new(),
            total_credit: 0,
            satisfied: false,
            reference_hint: None,
        }
    }

    /// 조회 힌트가 있는 빈 버킷 생성
    pub fn with_hint(label: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            matched_courses: Vec::new(),
            total_credit: 0,
            satisfied: false,
            reference_hint: Some(hint.into()),
        }
    }

    /// 과목 한 건을 적립한다. 학점 합계 불변식은 이 메서드가 유지한다
    pub fn take_course(&mut self, course: &Course) {
        self.total_credit += course.credit;
        self.matched_courses.push(course.clone());
    }

    /// "학점 > 1" 기준으로 버킷 충족 여부를 확정한다
    pub fn mark_satisfied_by_min_credit(&mut self) {
        self.satisfied = self.total_credit > 1;
    }
}

// ==========================================
// Requirement - 리포트 한 줄
// ==========================================
/// 졸업요건 카테고리 하나의 평가 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    /// 카테고리 (한글 명칭으로 직렬화)
    pub category: RequirementCategory,
    /// 카테고리 전체 학점 (하위 버킷 합계)
    pub total_credit: u32,
    /// 학사요람 안내 문구. 해당 분기에 문구가 정의되지 않았으면 빈 문자열
    pub briefing: String,
    /// 카테고리 충족 여부
    pub satisfied: bool,
    /// 하위 버킷. 전체 수강학점처럼 버킷이 없는 카테고리는 빈 목록
    pub sub_fields: Vec<SubField>,
}

impl Requirement {
    pub fn new(
        category: RequirementCategory,
        total_credit: u32,
        briefing: impl Into<String>,
        satisfied: bool,
        sub_fields: Vec<SubField>,
    ) -> Self {
        Self {
            category,
            total_credit,
            briefing: briefing.into(),
            satisfied,
            sub_fields,
        }
    }

    /// 버킷 목록의 학점 합
    pub fn sum_sub_field_credits(sub_fields: &[SubField]) -> u32 {
        sub_fields.iter().map(|s| s.total_credit).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_course_keeps_credit_sum_invariant() {
        let mut bucket = SubField::new("글쓰기");
        bucket.take_course(&Course::new("001011", 3));
        bucket.take_course(&Course::new("001012", 2));

        let recomputed: u32 = bucket.matched_courses.iter().map(|c| c.credit).sum();
        assert_eq!(bucket.total_credit, 5);
        assert_eq!(bucket.total_credit, recomputed);
        assert_eq!(bucket.matched_courses.len(), 2);
    }

    #[test]
    fn test_mark_satisfied_by_min_credit_is_strictly_greater_than_one() {
        let mut bucket = SubField::new("영어");
        bucket.take_course(&Course::new("001009", 1));
        bucket.mark_satisfied_by_min_credit();
        assert!(!bucket.satisfied);

        bucket.take_course(&Course::new("001009", 1));
        bucket.mark_satisfied_by_min_credit();
        assert!(bucket.satisfied);
    }

    #[test]
    fn test_sum_sub_field_credits() {
        let mut a = SubField::new("역사와문화");
        a.take_course(&Course::new("010101", 3));
        let mut b = SubField::new("법과생활");
        b.take_course(&Course::new("010201", 2));

        assert_eq!(Requirement::sum_sub_field_credits(&[a, b]), 5);
        assert_eq!(Requirement::sum_sub_field_credits(&[]), 0);
    }

    #[test]
    fn test_requirement_serde_shape() {
        let mut bucket = SubField::with_hint("특성화교양", "/courses?type=grad&keyword=specializedelective");
        bucket.take_course(&Course::new("008751", 2));
        bucket.mark_satisfied_by_min_credit();

        let requirement = Requirement::new(
            RequirementCategory::SpecializedElective,
            bucket.total_credit,
            "특성화교양(디자인씽킹, 창업과 실용법률) 중 한 과목을 반드시 이수하여야 함.",
            true,
            vec![bucket],
        );

        let json = serde_json::to_value(&requirement).unwrap();
        assert_eq!(json["category"], "특성화교양");
        assert_eq!(json["totalCredit"], 2);
        assert_eq!(json["satisfied"], true);
        assert_eq!(json["subFields"][0]["label"], "특성화교양");
        assert_eq!(
            json["subFields"][0]["referenceHint"],
            "/courses?type=grad&keyword=specializedelective"
        );
    }
}
