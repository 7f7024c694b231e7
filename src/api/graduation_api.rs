// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 졸업요건 진단 API
// ==========================================
// 역할: 진단 요청 검증, 학과 해소, 엔진 실행, 리포트 봉투 작성
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator;
use crate::config::rule_tables::RuleTables;
use crate::domain::course::Course;
use crate::domain::major::Major;
use crate::domain::requirement::Requirement;
use crate::domain::student::Student;
use crate::engine::orchestrator::RequirementEngine;
use crate::repository::catalog::CatalogReader;

// ==========================================
// CourseInput - 이수 과목 입력 DTO
// ==========================================
/// 진단 요청에 실리는 이수 과목 한 건
///
/// credit은 검증 전 단계라 음수가 들어올 수 있어 i64로 받는다
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    pub number: String,
    pub credit: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_area: Option<String>,
}

impl CourseInput {
    /// 검증 통과 후 도메인 과목으로 변환
    pub(crate) fn to_course(&self) -> Course {
        Course {
            number: self.number.clone(),
            credit: self.credit as u32,
            subject_area: self.subject_area.clone(),
        }
    }
}

// ==========================================
// EvaluationRequest - 진단 요청 DTO
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    /// 입학년도 2자리 (예: 21)
    pub enter_year: i32,
    /// 학과 카탈로그 id
    pub major_id: i64,
    /// 공학교육인증(ABEEK) 트랙 여부
    #[serde(default)]
    pub is_abeek_certified: bool,
    /// 이수 과목 전체
    #[serde(default)]
    pub taken_courses: Vec<CourseInput>,
}

// ==========================================
// EvaluationReport - 진단 리포트 봉투
// ==========================================
/// 진단 결과 봉투. requirements의 줄 순서가 곧 리포트 순서
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub evaluation_id: String,
    pub evaluated_at: DateTime<Utc>,
    pub enter_year: i32,
    pub major: Major,
    pub is_abeek_certified: bool,
    pub category_count: usize,
    pub satisfied_count: usize,
    pub requirements: Vec<Requirement>,
}

// ==========================================
// GraduationApi - 졸업요건 진단 API
// ==========================================

/// 졸업요건 진단 API
///
/// 책임:
/// 1. 요청 필드 검증
/// 2. 학과 id를 카탈로그 참조로 해소
/// 3. 평가 엔진 실행과 리포트 봉투 작성
pub struct GraduationApi<C>
where
    C: CatalogReader,
{
    catalog: Arc<C>,
    engine: RequirementEngine<C>,
}

impl<C> GraduationApi<C>
where
    C: CatalogReader,
{
    /// API 인스턴스 생성
    ///
    /// # 파라미터
    /// - catalog: 학사 카탈로그 조회 창구
    /// - rules: 분류 규칙 테이블 (기동 시 1회 로드)
    pub fn new(catalog: Arc<C>, rules: Arc<RuleTables>) -> Self {
        let engine = RequirementEngine::new(Arc::clone(&catalog), rules);
        Self { catalog, engine }
    }

    /// 졸업요건 진단 실행
    ///
    /// # 반환
    /// - Ok(EvaluationReport): 카테고리별 판정이 담긴 리포트
    /// - Err(ApiError): 검증 실패, 학과 없음, 데이터 접근 오류
    pub fn evaluate(&self, request: &EvaluationRequest) -> ApiResult<EvaluationReport> {
        validator::validate_evaluation_request(request)?;

        // 학과 해소. 미등록 id는 여기서 끊는다
        let major = self
            .catalog
            .resolve_major(request.major_id)
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::NotFound(format!("학과(id={}) 없음", request.major_id)))?;

        let taken_courses: Vec<Course> =
            request.taken_courses.iter().map(CourseInput::to_course).collect();
        let student = Student::new(
            request.enter_year,
            major.clone(),
            request.is_abeek_certified,
            taken_courses,
        );

        let requirements = self.engine.evaluate(&student)?;
        let satisfied_count = requirements.iter().filter(|r| r.satisfied).count();

        let report = EvaluationReport {
            evaluation_id: Uuid::new_v4().to_string(),
            evaluated_at: Utc::now(),
            enter_year: request.enter_year,
            major,
            is_abeek_certified: request.is_abeek_certified,
            category_count: requirements.len(),
            satisfied_count,
            requirements,
        };

        info!(
            evaluation_id = %report.evaluation_id,
            major_id = request.major_id,
            category_count = report.category_count,
            satisfied_count = report.satisfied_count,
            "졸업요건 리포트 생성 완료"
        );

        Ok(report)
    }
}

// ==========================================
// 단위 테스트
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::MockCatalog;

    fn api(catalog: MockCatalog) -> GraduationApi<MockCatalog> {
        GraduationApi::new(Arc::new(catalog), Arc::new(RuleTables::default()))
    }

    fn course(number: &str, credit: i64) -> CourseInput {
        CourseInput {
            number: number.to_string(),
            credit,
            subject_area: None,
        }
    }

    #[test]
    fn test_evaluate_builds_full_report_envelope() {
        let catalog = MockCatalog::new().with_major(Major::new(1, "CS", "공과대학"));
        let request = EvaluationRequest {
            enter_year: 21,
            major_id: 1,
            is_abeek_certified: false,
            taken_courses: vec![course("001009", 2)],
        };

        let report = api(catalog).evaluate(&request).unwrap();

        assert!(!report.evaluation_id.is_empty());
        assert_eq!(report.enter_year, 21);
        assert_eq!(report.major.code, "CS");
        assert_eq!(report.category_count, 8);
        assert_eq!(report.requirements.len(), 8);
        assert!(report.satisfied_count <= report.category_count);
    }

    #[test]
    fn test_unknown_major_id_returns_not_found() {
        let request = EvaluationRequest {
            enter_year: 21,
            major_id: 404,
            is_abeek_certified: false,
            taken_courses: vec![],
        };

        let result = api(MockCatalog::new()).evaluate(&request);
        match result {
            Err(ApiError::NotFound(msg)) => assert!(msg.contains("404")),
            other => panic!("Expected NotFound, got {:?}", other.map(|r| r.category_count)),
        }
    }

    #[test]
    fn test_negative_credit_rejected_before_engine_runs() {
        let catalog = MockCatalog::new().with_major(Major::new(1, "CS", "공과대학"));
        let request = EvaluationRequest {
            enter_year: 21,
            major_id: 1,
            is_abeek_certified: false,
            taken_courses: vec![course("001009", -2)],
        };

        let result = api(catalog).evaluate(&request);
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_request_deserializes_from_camel_case_json() {
        let json = r#"{
            "enterYear": 21,
            "majorId": 1,
            "isAbeekCertified": true,
            "takenCourses": [
                {"number": "012101", "credit": 3, "subjectArea": "MSC과학"}
            ]
        }"#;

        let request: EvaluationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.enter_year, 21);
        assert!(request.is_abeek_certified);
        assert_eq!(request.taken_courses[0].subject_area.as_deref(), Some("MSC과학"));
    }

    #[test]
    fn test_report_serializes_with_camel_case_keys() {
        let catalog = MockCatalog::new().with_major(Major::new(9, "FA", "미술대학"));
        let request = EvaluationRequest {
            enter_year: 18,
            major_id: 9,
            is_abeek_certified: false,
            taken_courses: vec![],
        };

        let report = api(catalog).evaluate(&request).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("evaluationId").is_some());
        assert!(json.get("categoryCount").is_some());
        // 미술대학 18학번: MSC/특성화교양 제외 6줄
        assert_eq!(json["requirements"].as_array().unwrap().len(), 6);
    }
}
