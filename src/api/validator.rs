// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 진단 요청 검증기
// ==========================================
// 역할: 진단 요청의 필드 단위 검증. 실패 메시지는 원인 필드를 명시한다
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::graduation_api::{CourseInput, EvaluationRequest};

/// 진단 요청 전체 검증
///
/// # 검증 항목
/// - 입학년도: 2자리 (0..=99)
/// - 학과 id: 양수
/// - 과목: 학수번호 비어 있지 않음, 학점 음수 금지
pub fn validate_evaluation_request(request: &EvaluationRequest) -> ApiResult<()> {
    if !(0..=99).contains(&request.enter_year) {
        return Err(ApiError::InvalidInput(format!(
            "입학년도는 2자리여야 함 (입력값: {})",
            request.enter_year
        )));
    }

    if request.major_id <= 0 {
        return Err(ApiError::InvalidInput(format!(
            "학과 id는 양수여야 함 (입력값: {})",
            request.major_id
        )));
    }

    for (idx, course) in request.taken_courses.iter().enumerate() {
        validate_course_input(idx, course)?;
    }

    Ok(())
}

fn validate_course_input(idx: usize, course: &CourseInput) -> ApiResult<()> {
    if course.number.trim().is_empty() {
        return Err(ApiError::InvalidInput(format!(
            "학수번호가 비어 있음 (과목 {}번째)",
            idx + 1
        )));
    }

    // 음수와 u32 범위 초과를 한 번에 거른다
    if u32::try_from(course.credit).is_err() {
        return Err(ApiError::InvalidInput(format!(
            "학점이 음수이거나 유효 범위를 벗어남 (과목 {}: {})",
            course.number, course.credit
        )));
    }

    Ok(())
}
