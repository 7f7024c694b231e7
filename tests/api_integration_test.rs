// ==========================================
// 졸업요건 진단 API 통합 테스트
// ==========================================
// 역할: 요청 JSON → 검증 → 카탈로그 해소 → 평가 → 리포트 봉투 전 구간 검증
// 구성: 실제 SQLite 카탈로그 + config_kv 규칙표
// ==========================================


use hongik_grad_audit::api::{ApiError, CourseInput, EvaluationRequest, GraduationApi};
use hongik_grad_audit::config::RuleTableManager;
use hongik_grad_audit::domain::types::RequirementCategory;
use hongik_grad_audit::logging;
use hongik_grad_audit::repository::SqliteCatalog;
use std::error::Error;
use std::sync::Arc;

// ==========================================
// 테스트 지원
// ==========================================

struct ApiFixture {
    _temp_file: tempfile::NamedTempFile,
    api: GraduationApi<SqliteCatalog>,
    cs_id: i64,
    ee_id: i64,
    design_id: i64,
}

fn create_api_fixture() -> Result<ApiFixture, Box<dyn Error>> {
    logging::init_test();

    let (temp_file, db_path) = test_helpers::create_test_db()?;
    let catalog = SqliteCatalog::new(&db_path)?;
    let seeded = test_helpers::seed_standard_catalog(&catalog)?;
    test_helpers::seed_rule_defaults(&db_path)?;

    let rules = RuleTableManager::new(&db_path)?.load()?;
    let api = GraduationApi::new(Arc::new(catalog), Arc::new(rules));

    Ok(ApiFixture {
        _temp_file: temp_file,
        api,
        cs_id: seeded.cs_id,
        ee_id: seeded.ee_id,
        design_id: seeded.design_id,
    })
}

fn course(number: &str, credit: i64) -> CourseInput {
    CourseInput {
        number: number.to_string(),
        credit,
        subject_area: None,
    }
}

fn area_course(number: &str, credit: i64, tag: &str) -> CourseInput {
    CourseInput {
        number: number.to_string(),
        credit,
        subject_area: Some(tag.to_string()),
    }
}

/// 전공필수 판정만 남기고 모든 요건을 채운 CS 19학번 수강 목록
fn graduating_cs_courses() -> Vec<CourseInput> {
    let mut courses = vec![
        // 전공기초영어
        course("007114", 2),
        // 기초교양: 글쓰기 + 영어
        course("001011", 3),
        course("001009", 2),
        // 특성화교양
        course("008751", 2),
    ];

    // 드래곤볼: 필수 2개 영역 + 일반 4개 영역
    courses.extend([
        area_course("010101", 2, "예술과디자인"),
        area_course("010201", 2, "제2외국어와한문"),
        area_course("010301", 2, "역사와문화"),
        area_course("010401", 2, "언어와철학"),
        area_course("010501", 2, "사회와경제"),
        area_course("010601", 2, "법과생활"),
    ]);

    // MSC: 물리(1)+화학(1) 필수, 물리(2) 택일, 수학 9학점 (과학 12학점)
    courses.extend([
        area_course("012101", 3, "MSC과학"),
        area_course("012103", 1, "MSC과학"),
        area_course("012107", 3, "MSC과학"),
        area_course("012109", 1, "MSC과학"),
        area_course("012104", 3, "MSC과학"),
        area_course("012106", 1, "MSC과학"),
        area_course("005131", 3, "MSC수학"),
        area_course("005132", 3, "MSC수학"),
        area_course("005133", 3, "MSC수학"),
    ]);

    // 전공: 직접 16과목 + 승계 3과목 = 57학점 (19학번은 전량 풀에 포함)
    for suffix in 10..26 {
        courses.push(course(&format!("0123{:02}", suffix), 3));
    }
    courses.extend([course("004174", 3), course("101810", 3), course("012305", 3)]);

    // 일반선택으로 총 학점 채우기 (99 + 36 = 135)
    for suffix in 1..13 {
        courses.push(course(&format!("0900{:02}", suffix), 3));
    }

    courses
}

// ==========================================
// 테스트 1: 졸업 직전 학생의 전체 리포트
// ==========================================

#[test]
fn test_graduating_cs_student_full_report() {
    let fixture = create_api_fixture().expect("Failed to create fixture");

    let request = EvaluationRequest {
        enter_year: 19,
        major_id: fixture.cs_id,
        is_abeek_certified: false,
        taken_courses: graduating_cs_courses(),
    };

    let report = fixture.api.evaluate(&request).expect("Evaluation should succeed");

    assert_eq!(report.category_count, 8);
    assert_eq!(report.requirements.len(), 8);
    assert_eq!(report.enter_year, 19);
    assert_eq!(report.major.code, "CS");
    assert!(!report.evaluation_id.is_empty());

    // 전공필수 수동 확인 줄만 미충족으로 남는다
    assert_eq!(report.satisfied_count, 7);
    for requirement in &report.requirements {
        if requirement.category == RequirementCategory::RequiredMajor {
            assert!(!requirement.satisfied);
        } else {
            assert!(
                requirement.satisfied,
                "{} 줄이 충족이어야 함",
                requirement.category
            );
        }
    }

    let total_line = report
        .requirements
        .iter()
        .find(|r| r.category == RequirementCategory::TotalCredit)
        .expect("Report should contain total credit line");
    assert_eq!(total_line.total_credit, 135);
    assert_eq!(
        total_line.briefing,
        "총 132학점 이상(일반선택 포함) 이수하여야 함."
    );
}

// ==========================================
// 테스트 2: 리포트 JSON 와이어 형식
// ==========================================

#[test]
fn test_report_json_wire_shape() {
    let fixture = create_api_fixture().expect("Failed to create fixture");

    let request = EvaluationRequest {
        enter_year: 18,
        major_id: fixture.design_id,
        is_abeek_certified: false,
        taken_courses: vec![course("001011", 3)],
    };

    let report = fixture.api.evaluate(&request).expect("Evaluation should succeed");
    let json = serde_json::to_value(&report).expect("Report should serialize");

    // 봉투 필드는 camelCase
    assert!(json.get("evaluationId").is_some());
    assert!(json.get("evaluatedAt").is_some());
    assert!(json.get("enterYear").is_some());
    assert!(json.get("isAbeekCertified").is_some());
    assert!(json.get("satisfiedCount").is_some());

    // 미술대학 18학번: MSC/특성화교양 제외 6줄, 카테고리는 한글 표기
    let requirements = json["requirements"].as_array().expect("requirements array");
    assert_eq!(requirements.len(), 6);
    assert_eq!(requirements[0]["category"], "전공기초영어");
    assert_eq!(requirements[5]["category"], "전체 수강학점");

    // 버킷 키도 camelCase, 글쓰기 과목이 수록돼 있어야 함
    let basic_line = &requirements[1];
    assert_eq!(basic_line["category"], "기초교양");
    assert_eq!(basic_line["subFields"][0]["label"], "글쓰기");
    assert_eq!(basic_line["subFields"][0]["totalCredit"], 3);
    assert_eq!(basic_line["subFields"][0]["matchedCourses"][0]["number"], "001011");
}

// ==========================================
// 테스트 3: 요청 JSON 수문 (검증 계층)
// ==========================================

#[test]
fn test_request_parses_from_raw_json() {
    let fixture = create_api_fixture().expect("Failed to create fixture");

    let raw = format!(
        r#"{{
            "enterYear": 21,
            "majorId": {},
            "isAbeekCertified": false,
            "takenCourses": [
                {{"number": "007114", "credit": 2}},
                {{"number": "012101", "credit": 3, "subjectArea": "MSC과학"}}
            ]
        }}"#,
        fixture.ee_id
    );

    let request: EvaluationRequest =
        serde_json::from_str(&raw).expect("Request should deserialize");
    let report = fixture.api.evaluate(&request).expect("Evaluation should succeed");

    assert_eq!(report.major.code, "EE");
    assert_eq!(report.category_count, 8);
}

#[test]
fn test_unknown_major_id_is_rejected_as_not_found() {
    let fixture = create_api_fixture().expect("Failed to create fixture");

    let request = EvaluationRequest {
        enter_year: 21,
        major_id: 9_999,
        is_abeek_certified: false,
        taken_courses: vec![],
    };

    match fixture.api.evaluate(&request) {
        Err(ApiError::NotFound(msg)) => assert!(msg.contains("9999")),
        other => panic!("Expected NotFound, got {:?}", other.map(|r| r.category_count)),
    }
}

#[test]
fn test_invalid_inputs_are_rejected_before_evaluation() {
    let fixture = create_api_fixture().expect("Failed to create fixture");

    // 4자리 입학년도
    let request = EvaluationRequest {
        enter_year: 2021,
        major_id: fixture.cs_id,
        is_abeek_certified: false,
        taken_courses: vec![],
    };
    assert!(matches!(
        fixture.api.evaluate(&request),
        Err(ApiError::InvalidInput(_))
    ));

    // 음수 학점
    let request = EvaluationRequest {
        enter_year: 21,
        major_id: fixture.cs_id,
        is_abeek_certified: false,
        taken_courses: vec![course("001009", -2)],
    };
    match fixture.api.evaluate(&request) {
        Err(ApiError::InvalidInput(msg)) => assert!(msg.contains("유효 범위")),
        other => panic!("Expected InvalidInput, got {:?}", other.map(|r| r.category_count)),
    }

    // 빈 학수번호
    let request = EvaluationRequest {
        enter_year: 21,
        major_id: fixture.cs_id,
        is_abeek_certified: false,
        taken_courses: vec![course("  ", 3)],
    };
    assert!(matches!(
        fixture.api.evaluate(&request),
        Err(ApiError::InvalidInput(_))
    ));
}

// ==========================================
// 테스트 4: ABEEK 트랙 분기가 API까지 전달되는지
// ==========================================

#[test]
fn test_abeek_flag_changes_msc_policy() {
    let fixture = create_api_fixture().expect("Failed to create fixture");

    // 비인증 EE 판정을 통과하는 수강 목록 (수학 9 / 과학 9 / 전산 6)
    let courses = vec![
        area_course("012104", 3, "MSC과학"),
        area_course("012106", 1, "MSC과학"),
        area_course("012107", 3, "MSC과학"),
        area_course("012109", 1, "MSC과학"),
        area_course("012198", 1, "MSC과학"),
        area_course("005131", 3, "MSC수학"),
        area_course("005132", 3, "MSC수학"),
        area_course("005133", 3, "MSC수학"),
        area_course("012301", 3, "MSC전산"),
        area_course("012302", 3, "MSC전산"),
    ];

    let mut request = EvaluationRequest {
        enter_year: 21,
        major_id: fixture.ee_id,
        is_abeek_certified: false,
        taken_courses: courses,
    };

    let report = fixture.api.evaluate(&request).expect("Evaluation should succeed");
    let msc_line = report
        .requirements
        .iter()
        .find(|r| r.category == RequirementCategory::Msc)
        .expect("Report should contain MSC line");
    assert!(msc_line.satisfied);

    // 같은 수강 목록이라도 인증 트랙은 합계 30학점 조건에 걸려 미충족
    request.is_abeek_certified = true;
    let report = fixture.api.evaluate(&request).expect("Evaluation should succeed");
    let msc_line = report
        .requirements
        .iter()
        .find(|r| r.category == RequirementCategory::Msc)
        .expect("Report should contain MSC line");
    assert!(!msc_line.satisfied);
    assert!(msc_line.briefing.contains("30학점"));
}
