// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 전체 수강학점 평가기
// ==========================================
// 역할: 분류와 무관하게 수강 과목 전체 학점을 합산하여 하한 대조
// ==========================================

use crate::domain::requirement::Requirement;
use crate::domain::student::Student;
use crate::domain::types::RequirementCategory;

/// 졸업 학점 하한
const MIN_TOTAL_CREDIT: u32 = 132;

const BRIEFING: &str = "총 132학점 이상(일반선택 포함) 이수하여야 함.";

// ==========================================
// TotalCreditEvaluator - 전체 수강학점 평가기
// ==========================================
pub struct TotalCreditEvaluator;

impl TotalCreditEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, student: &Student) -> Requirement {
        let total_credit: u32 = student.taken_courses.iter().map(|c| c.credit).sum();
        let satisfied = total_credit >= MIN_TOTAL_CREDIT;

        // 세부 영역 없이 총합만 보고한다
        Requirement::new(
            RequirementCategory::TotalCredit,
            total_credit,
            BRIEFING,
            satisfied,
            vec![],
        )
    }
}

impl Default for TotalCreditEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
