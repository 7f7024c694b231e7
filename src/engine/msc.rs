// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - MSC 평가기
// ==========================================
// 역할: MSC수학/MSC과학/MSC전산 집계 + 정책표 기반 충족 판정
// 규칙: 공과대학 학생에게만 실행됨 (오케스트레이터가 분기)
// 규칙: CS 19학번 이하는 MSC전산 버킷 자체가 없음. 해당 과목은 버려짐
// ==========================================

pub mod policy;

use crate::domain::course::Course;
use crate::domain::requirement::{Requirement, SubField};
use crate::domain::student::Student;
use crate::domain::types::{RequirementCategory, MAJOR_CODE_CS};
use crate::engine::classifier::CourseClassifier;
use policy::{
    MscPolicy, RequiredCourseRule, CHEMISTRY_1, CHEMISTRY_2, C_PROGRAMMING, INFORMATION_SYSTEMS,
    OBJECT_ORIENTED_PROGRAMMING, PHYSICS_1, PHYSICS_2, WEB_PROGRAMMING,
};

// ==========================================
// MscEvaluator - MSC 평가기
// ==========================================
pub struct MscEvaluator {
    classifier: CourseClassifier,
}

impl MscEvaluator {
    pub fn new(classifier: CourseClassifier) -> Self {
        Self { classifier }
    }

    pub fn evaluate(&self, student: &Student) -> Requirement {
        let policy = policy::lookup(
            student.is_abeek_certified,
            &student.major.code,
            student.enter_year,
        );

        let mut buckets = self.build_buckets(&student.major.code, student.enter_year);

        for course in &student.taken_courses {
            if !self.classifier.is_abeek_course(course) {
                continue;
            }
            let tag = course.subject_area.as_deref().unwrap_or_default();
            match buckets.iter_mut().find(|bucket| bucket.label == tag) {
                Some(bucket) => bucket.take_course(course),
                None => {
                    // 제거된 전산 버킷 또는 영역 명칭 불일치. 이 카테고리에서 제외
                    tracing::debug!(course_number = %course.number, subject_area = tag, "MSC 버킷 없음, 과목 제외");
                }
            }
        }

        let rules = self.classifier.rules();
        let math_credit = self.bucket_credit(&buckets, &rules.msc_math_area);
        let science_credit = self.bucket_credit(&buckets, &rules.msc_science_area);
        let computer_credit = self.bucket_credit(&buckets, &rules.msc_computer_area);

        self.mark_bucket_verdicts(&mut buckets, &policy);

        let total_credit = Requirement::sum_sub_field_credits(&buckets);
        let satisfied = self.is_satisfied(
            &policy,
            math_credit,
            science_credit,
            computer_credit,
            &student.taken_courses,
        );

        Requirement::new(
            RequirementCategory::Msc,
            total_credit,
            policy.briefing,
            satisfied,
            buckets,
        )
    }

    /// 수학/과학/전산 버킷 생성. CS 19학번 이하는 전산 버킷 제외
    fn build_buckets(&self, major_code: &str, enter_year: i32) -> Vec<SubField> {
        let rules = self.classifier.rules();
        let mut buckets = vec![
            SubField::new(&rules.msc_math_area),
            SubField::new(&rules.msc_science_area),
        ];
        if !(major_code == MAJOR_CODE_CS && enter_year <= 19) {
            buckets.push(SubField::new(&rules.msc_computer_area));
        }
        buckets
    }

    /// 버킷이 없으면 학점 0으로 간주
    fn bucket_credit(&self, buckets: &[SubField], label: &str) -> u32 {
        buckets
            .iter()
            .find(|bucket| bucket.label == label)
            .map(|bucket| bucket.total_credit)
            .unwrap_or(0)
    }

    /// 정책 하한 기준으로 버킷별 충족 여부 확정. 하한이 없는 버킷은 미확정(false) 유지
    fn mark_bucket_verdicts(&self, buckets: &mut [SubField], policy: &MscPolicy) {
        let rules = self.classifier.rules();
        for bucket in buckets.iter_mut() {
            if bucket.label == rules.msc_math_area {
                bucket.satisfied = bucket.total_credit >= policy.min_math;
            } else if bucket.label == rules.msc_science_area {
                bucket.satisfied = bucket.total_credit >= policy.min_science;
            } else if bucket.label == rules.msc_computer_area {
                bucket.satisfied = policy
                    .min_computer
                    .map(|min| bucket.total_credit >= min)
                    .unwrap_or(false);
            }
        }
    }

    /// 학점 하한 검사 후 필수이수과목 규칙 검사
    fn is_satisfied(
        &self,
        policy: &MscPolicy,
        math_credit: u32,
        science_credit: u32,
        computer_credit: u32,
        taken_courses: &[Course],
    ) -> bool {
        if math_credit < policy.min_math || science_credit < policy.min_science {
            return false;
        }
        if let Some(min_computer) = policy.min_computer {
            if computer_credit < min_computer {
                return false;
            }
        }
        if let Some(min_total) = policy.min_total {
            if math_credit + science_credit + computer_credit < min_total {
                return false;
            }
        }

        check_required_courses(policy.required_rule, taken_courses)
    }
}

/// 필수이수과목 규칙 판정
fn check_required_courses(rule: RequiredCourseRule, taken_courses: &[Course]) -> bool {
    match rule {
        // 택일 항은 물리(2)/화학(2). 물리(2)는 필수 항에도 들어 있음
        RequiredCourseRule::EePairs => {
            PHYSICS_2.is_taken(taken_courses)
                && CHEMISTRY_1.is_taken(taken_courses)
                && (PHYSICS_2.is_taken(taken_courses) || CHEMISTRY_2.is_taken(taken_courses))
        }
        RequiredCourseRule::AnyTwoScienceSets => {
            [PHYSICS_1, PHYSICS_2, CHEMISTRY_1, CHEMISTRY_2]
                .iter()
                .filter(|set| set.is_taken(taken_courses))
                .count()
                >= 2
        }
        RequiredCourseRule::CsSoftwareElectives => {
            [INFORMATION_SYSTEMS, OBJECT_ORIENTED_PROGRAMMING, C_PROGRAMMING]
                .iter()
                .filter(|course| policy::has_taken(taken_courses, **course))
                .count()
                >= 2
        }
        RequiredCourseRule::IeSoftwareElectives => {
            [INFORMATION_SYSTEMS, WEB_PROGRAMMING, C_PROGRAMMING]
                .iter()
                .filter(|course| policy::has_taken(taken_courses, **course))
                .count()
                >= 2
        }
        RequiredCourseRule::StandardScienceSets => {
            PHYSICS_1.is_taken(taken_courses)
                && CHEMISTRY_1.is_taken(taken_courses)
                && (PHYSICS_2.is_taken(taken_courses) || CHEMISTRY_2.is_taken(taken_courses))
        }
    }
}
