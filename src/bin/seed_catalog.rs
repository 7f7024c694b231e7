// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 개발용 카탈로그 시드
// ==========================================
// 사용법: seed_catalog [db_path]
// 학과/전공과목/전공계층/분류규칙 기본값을 한 번에 심는다
// ==========================================

use rusqlite::Connection;
use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

use hongik_grad_audit::config::RuleTableManager;
use hongik_grad_audit::db::{get_default_db_path, init_catalog_schema, open_sqlite_connection};
use hongik_grad_audit::repository::{NewMajorCourse, SqliteCatalog};

fn main() -> Result<(), Box<dyn Error>> {
    let db_path = std::env::args().nth(1).unwrap_or_else(get_default_db_path);

    let conn = open_sqlite_connection(&db_path)?;
    init_catalog_schema(&conn)?;
    let conn = Arc::new(Mutex::new(conn));

    let catalog = SqliteCatalog::from_connection(Arc::clone(&conn));

    let major_ids = seed_majors(&catalog)?;
    seed_major_courses(&catalog, &major_ids)?;
    seed_hierarchy(&catalog, &major_ids)?;

    let seeded = RuleTableManager::from_connection(Arc::clone(&conn))?.seed_defaults()?;
    eprintln!("분류 규칙 기본값 {}건 시드", seeded);

    print_quick_counts(&conn)?;
    eprintln!("시드 완료: {}", db_path);

    Ok(())
}

/// 학과 시드. code → id 매핑을 돌려준다
fn seed_majors(catalog: &SqliteCatalog) -> Result<HashMap<&'static str, i64>, Box<dyn Error>> {
    let majors: [(&str, &str, &str); 7] = [
        ("CS", "공과대학", "컴퓨터공학과"),
        ("CE", "공과대학", "컴퓨터공학전공(구)"),
        ("EE", "공과대학", "전자전기공학부"),
        ("IE", "공과대학", "산업데이터공학과"),
        ("ME", "공과대학", "기계시스템디자인공학과"),
        ("DA", "미술대학", "디자인학부"),
        ("BA", "경영대학", "경영학부"),
    ];

    let mut ids = HashMap::new();
    for (code, college, name) in majors {
        let id = catalog.major_repo.upsert_major(code, college, Some(name))?;
        ids.insert(code, id);
    }

    eprintln!("학과 {}건 시드", ids.len());
    Ok(ids)
}

/// 전공 과목 시드
///
/// CS에는 20학번 개편에서 빠지는 3과목(004174/101810/012305)을 포함해
/// 입학년도 분기를 바로 확인할 수 있게 한다
fn seed_major_courses(
    catalog: &SqliteCatalog,
    major_ids: &HashMap<&'static str, i64>,
) -> Result<(), Box<dyn Error>> {
    let course_sets: [(&str, &[(&str, u32, bool)]); 5] = [
        (
            "CS",
            &[
                ("012310", 3, true),  // 자료구조및알고리즘
                ("012317", 3, true),  // 운영체제
                ("012318", 3, true),  // 컴퓨터구조
                ("012320", 3, false), // 데이터베이스
                ("012321", 3, false), // 컴퓨터네트워크
                ("012322", 3, false), // 소프트웨어공학
                ("004174", 3, false), // 이산수학 (20학번부터 전공 제외)
                ("101810", 3, false), // C프로그래밍 (20학번부터 전공 제외)
                ("012305", 3, false), // 객체지향프로그래밍 (20학번부터 전공 제외)
            ],
        ),
        (
            "CE",
            &[
                ("012330", 3, false), // 구 교과과정 잔여 과목
                ("012331", 3, false),
            ],
        ),
        (
            "EE",
            &[
                ("012340", 3, true), // 회로이론
                ("012341", 3, true), // 전자기학
                ("012342", 3, false),
            ],
        ),
        (
            "IE",
            &[
                ("012350", 3, true), // 생산관리
                ("012351", 3, false),
            ],
        ),
        (
            "DA",
            &[
                ("013010", 3, true), // 기초디자인
                ("013011", 3, false),
            ],
        ),
    ];

    for (code, rows) in course_sets {
        let major_id = major_ids[code];
        let new_rows: Vec<NewMajorCourse> = rows
            .iter()
            .map(|(number, credit, is_required)| NewMajorCourse {
                number: number.to_string(),
                credit: *credit,
                is_required: *is_required,
            })
            .collect();
        let count = catalog
            .major_course_repo
            .batch_insert_major_courses(major_id, &new_rows)?;
        eprintln!("{} 과목 {}건 시드", code, count);
    }

    Ok(())
}

/// 전공 계층 시드. CS가 구 교과과정(CE) 과목을 승계한다
fn seed_hierarchy(
    catalog: &SqliteCatalog,
    major_ids: &HashMap<&'static str, i64>,
) -> Result<(), Box<dyn Error>> {
    catalog
        .hierarchy_repo
        .add_hierarchy(major_ids["CS"], major_ids["CE"])?;
    eprintln!("전공 계층 1건 시드 (CS → CE)");
    Ok(())
}

fn print_quick_counts(conn: &Arc<Mutex<Connection>>) -> Result<(), Box<dyn Error>> {
    let conn = conn.lock().map_err(|e| format!("잠금 획득 실패: {}", e))?;

    let majors: i64 = conn.query_row("SELECT COUNT(*) FROM major", [], |r| r.get(0))?;
    let courses: i64 = conn.query_row("SELECT COUNT(*) FROM major_course", [], |r| r.get(0))?;
    let edges: i64 = conn.query_row("SELECT COUNT(*) FROM major_hierarchy", [], |r| r.get(0))?;
    let configs: i64 = conn.query_row("SELECT COUNT(*) FROM config_kv", [], |r| r.get(0))?;

    println!(
        "major={} major_course={} major_hierarchy={} config_kv={}",
        majors, courses, edges, configs
    );
    Ok(())
}
