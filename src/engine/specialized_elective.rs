// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 특성화교양 평가기
// ==========================================
// 역할: 특성화교양 지정 과목 집계와 충족 판정
// 규칙: 19학번 이상에게만 실행됨 (오케스트레이터가 분기)
// ==========================================

use crate::domain::requirement::{Requirement, SubField};
use crate::domain::student::Student;
use crate::domain::types::RequirementCategory;
use crate::engine::classifier::CourseClassifier;

const BRIEFING: &str = "특성화교양(디자인씽킹, 창업과 실용법률) 중 한 과목을 반드시 이수하여야 함.";
const HINT: &str = "/courses?type=grad&keyword=specializedelective";

// ==========================================
// SpecializedElectiveEvaluator - 특성화교양 평가기
// ==========================================
pub struct SpecializedElectiveEvaluator {
    classifier: CourseClassifier,
}

impl SpecializedElectiveEvaluator {
    pub fn new(classifier: CourseClassifier) -> Self {
        Self { classifier }
    }

    pub fn evaluate(&self, student: &Student) -> Requirement {
        let mut bucket = SubField::with_hint("특성화교양", HINT);

        for course in &student.taken_courses {
            if self.classifier.is_specialized_elective(course) {
                bucket.take_course(course);
            }
        }

        bucket.mark_satisfied_by_min_credit();
        let satisfied = bucket.satisfied;
        let total_credit = bucket.total_credit;

        Requirement::new(
            RequirementCategory::SpecializedElective,
            total_credit,
            BRIEFING,
            satisfied,
            vec![bucket],
        )
    }
}

// ==========================================
// 단위 테스트
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rule_tables::RuleTables;
    use crate::domain::course::Course;
    use crate::domain::major::Major;
    use std::sync::Arc;

    fn evaluator() -> SpecializedElectiveEvaluator {
        SpecializedElectiveEvaluator::new(CourseClassifier::new(Arc::new(RuleTables::default())))
    }

    fn student_with(courses: Vec<Course>) -> Student {
        Student::new(19, Major::new(1, "CS", "공과대학"), false, courses)
    }

    #[test]
    fn test_one_designated_course_satisfies() {
        let student = student_with(vec![Course::new("008751", 2)]);
        let requirement = evaluator().evaluate(&student);

        assert!(requirement.satisfied);
        assert_eq!(requirement.total_credit, 2);
        assert_eq!(requirement.sub_fields.len(), 1);
        assert_eq!(
            requirement.sub_fields[0].reference_hint.as_deref(),
            Some("/courses?type=grad&keyword=specializedelective")
        );
    }

    #[test]
    fn test_no_designated_course_fails() {
        let student = student_with(vec![Course::new("001011", 3)]);
        let requirement = evaluator().evaluate(&student);

        assert!(!requirement.satisfied);
        assert_eq!(requirement.total_credit, 0);
    }

    #[test]
    fn test_one_credit_is_below_threshold() {
        let student = student_with(vec![Course::new("008752", 1)]);
        let requirement = evaluator().evaluate(&student);

        assert!(!requirement.satisfied);
        assert_eq!(requirement.total_credit, 1);
    }
}
