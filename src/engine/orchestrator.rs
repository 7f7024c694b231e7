// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 평가 엔진 편성기
// ==========================================
// 역할: 8개 카테고리 평가기의 실행 순서 관리
// 규칙: 리포트 줄 순서 = 평가 실행 순서 (고정).
//       MSC는 공과대학만, 특성화교양은 19학번부터 포함한다
// ==========================================

use crate::config::rule_tables::RuleTables;
use crate::domain::requirement::Requirement;
use crate::domain::student::Student;
use crate::engine::basic_elective::BasicElectiveEvaluator;
use crate::engine::classifier::CourseClassifier;
use crate::engine::dragonball::DragonballEvaluator;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::major_basic_english::MajorBasicEnglishEvaluator;
use crate::engine::major_course::MajorCourseEvaluator;
use crate::engine::msc::MscEvaluator;
use crate::engine::required_major::RequiredMajorEvaluator;
use crate::engine::specialized_elective::SpecializedElectiveEvaluator;
use crate::engine::total_credit::TotalCreditEvaluator;
use crate::repository::catalog::CatalogReader;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// 특성화교양 평가가 포함되는 첫 학번
const SPECIALIZED_ELECTIVE_FROM_YEAR: i32 = 19;

// ==========================================
// RequirementEngine - 평가 엔진 편성기
// ==========================================

pub struct RequirementEngine<C>
where
    C: CatalogReader,
{
    major_basic_english: MajorBasicEnglishEvaluator,
    basic_elective: BasicElectiveEvaluator,
    dragonball: DragonballEvaluator,
    msc: MscEvaluator,
    specialized_elective: SpecializedElectiveEvaluator,
    major_course: MajorCourseEvaluator<C>,
    required_major: RequiredMajorEvaluator<C>,
    total_credit: TotalCreditEvaluator,
}

impl<C> RequirementEngine<C>
where
    C: CatalogReader,
{
    /// 편성기 생성
    ///
    /// # 파라미터
    /// - catalog: 학사 카탈로그 조회 창구
    /// - rules: 분류 규칙 테이블 (기동 시 1회 로드)
    pub fn new(catalog: Arc<C>, rules: Arc<RuleTables>) -> Self {
        let classifier = CourseClassifier::new(rules);
        Self {
            major_basic_english: MajorBasicEnglishEvaluator::new(classifier.clone()),
            basic_elective: BasicElectiveEvaluator::new(classifier.clone()),
            dragonball: DragonballEvaluator::new(classifier.clone()),
            msc: MscEvaluator::new(classifier.clone()),
            specialized_elective: SpecializedElectiveEvaluator::new(classifier.clone()),
            major_course: MajorCourseEvaluator::new(Arc::clone(&catalog), classifier),
            required_major: RequiredMajorEvaluator::new(catalog),
            total_credit: TotalCreditEvaluator::new(),
        }
    }

    /// 전체 졸업요건 평가 실행
    ///
    /// # 반환
    /// 카테고리별 평가 결과. 공과대학 19학번 이상이면 8줄,
    /// 조건에 따라 MSC/특성화교양 줄이 빠져 7줄 또는 6줄이 된다
    #[instrument(skip(self, student), fields(
        major_code = %student.major.code,
        enter_year = student.enter_year,
        taken_count = student.taken_courses.len()
    ))]
    pub fn evaluate(&self, student: &Student) -> EngineResult<Vec<Requirement>> {
        validate_student(student)?;

        info!(
            college = %student.major.college,
            is_abeek_certified = student.is_abeek_certified,
            "졸업요건 평가 시작"
        );

        let mut requirements = Vec::with_capacity(8);

        // ==========================================
        // 단계1: 전공기초영어
        // ==========================================
        debug!("단계1: 전공기초영어 평가");
        requirements.push(self.major_basic_english.evaluate(student));

        // ==========================================
        // 단계2: 기초교양
        // ==========================================
        debug!("단계2: 기초교양 평가");
        requirements.push(self.basic_elective.evaluate(student));

        // ==========================================
        // 단계3: 드래곤볼
        // ==========================================
        debug!("단계3: 드래곤볼 평가");
        requirements.push(self.dragonball.evaluate(student));

        // ==========================================
        // 단계4: MSC (공과대학 한정)
        // ==========================================
        if student.major.is_engineering() {
            debug!("단계4: MSC 평가");
            requirements.push(self.msc.evaluate(student));
        } else {
            debug!(college = %student.major.college, "단계4: MSC 평가 제외");
        }

        // ==========================================
        // 단계5: 특성화교양 (19학번부터)
        // ==========================================
        if student.enter_year >= SPECIALIZED_ELECTIVE_FROM_YEAR {
            debug!("단계5: 특성화교양 평가");
            requirements.push(self.specialized_elective.evaluate(student));
        } else {
            debug!(enter_year = student.enter_year, "단계5: 특성화교양 평가 제외");
        }

        // ==========================================
        // 단계6: 전공
        // ==========================================
        debug!("단계6: 전공 학점 평가");
        requirements.push(self.major_course.evaluate(student)?);

        // ==========================================
        // 단계7: 전공필수
        // ==========================================
        debug!("단계7: 전공필수 평가");
        requirements.push(self.required_major.evaluate(student)?);

        // ==========================================
        // 단계8: 전체 수강학점
        // ==========================================
        debug!("단계8: 전체 수강학점 평가");
        requirements.push(self.total_credit.evaluate(student));

        let satisfied_count = requirements.iter().filter(|r| r.satisfied).count();
        info!(
            requirement_count = requirements.len(),
            satisfied_count,
            "졸업요건 평가 완료"
        );

        Ok(requirements)
    }
}

/// 평가 입력 검증. 실패 시 어떤 평가기도 실행하지 않는다
fn validate_student(student: &Student) -> EngineResult<()> {
    if !(0..=99).contains(&student.enter_year) {
        return Err(EngineError::InvalidStudentInput {
            reason: format!("입학년도는 2자리여야 함 (입력값: {})", student.enter_year),
        });
    }

    if student.major.code.trim().is_empty() {
        return Err(EngineError::InvalidStudentInput {
            reason: "학과 코드가 비어 있음".to_string(),
        });
    }

    for (idx, course) in student.taken_courses.iter().enumerate() {
        if course.number.trim().is_empty() {
            return Err(EngineError::InvalidStudentInput {
                reason: format!("학수번호가 비어 있음 (과목 {}번째)", idx + 1),
            });
        }
    }

    Ok(())
}
