// ==========================================
// 저장소 계층 통합 테스트
// ==========================================
// 역할: 파일 DB 위에서 학과/과목/계층 저장소의 협력 동작 검증
// 핵심: 계층 승계 풀의 합집합 + (number, credit) 중복 제거
// ==========================================


use hongik_grad_audit::db::{read_schema_version, CURRENT_SCHEMA_VERSION};
use hongik_grad_audit::domain::course::Course;
use hongik_grad_audit::logging;
use hongik_grad_audit::repository::{CatalogReader, SqliteCatalog};

#[test]
fn test_schema_version_is_stamped_on_init() {
    logging::init_test();
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");

    let conn = test_helpers::open_test_connection(&db_path).expect("Failed to open db");
    let version = read_schema_version(&conn).expect("Failed to read schema version");
    assert_eq!(version, Some(CURRENT_SCHEMA_VERSION));
}

#[test]
fn test_effective_pool_unions_master_and_slave_courses() {
    logging::init_test();
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let catalog = SqliteCatalog::new(&db_path).expect("Failed to open catalog");
    let seeded = test_helpers::seed_standard_catalog(&catalog).expect("Failed to seed");

    // id 기준과 코드 기준 조회가 같은 유효 풀을 돌려줘야 한다
    let by_id = catalog
        .hierarchy_repo
        .find_all_major_courses_by_master_id(seeded.cs_id)
        .expect("Failed to query by id");
    let by_code = catalog
        .major_courses_by_master_code("CS")
        .expect("Failed to query by code");
    assert_eq!(by_id, by_code);
    assert_eq!(by_id.len(), 19);

    // 직접 과목과 승계 과목이 모두 포함
    assert!(by_id.contains(&Course::new("012310", 3)));
    assert!(by_id.contains(&Course::new("004174", 3)));

    // slave 학과 자신의 풀에는 승계가 없다
    let legacy_pool = catalog
        .hierarchy_repo
        .find_all_major_courses_by_master_id(seeded.legacy_cs_id)
        .expect("Failed to query legacy pool");
    assert_eq!(legacy_pool.len(), 3);
}

#[test]
fn test_effective_pool_dedupes_same_number_and_credit() {
    logging::init_test();
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let catalog = SqliteCatalog::new(&db_path).expect("Failed to open catalog");
    let seeded = test_helpers::seed_standard_catalog(&catalog).expect("Failed to seed");

    // CS 직접 풀에 이미 있는 (012310, 3)을 구 교과과정에도 넣는다
    catalog
        .major_course_repo
        .insert_major_course(seeded.legacy_cs_id, "012310", 3, false)
        .expect("Failed to insert duplicate");

    let pool = catalog
        .major_courses_by_master_code("CS")
        .expect("Failed to query pool");
    let duplicates = pool
        .iter()
        .filter(|c| c.number == "012310" && c.credit == 3)
        .count();
    assert_eq!(duplicates, 1);
    assert_eq!(pool.len(), 19);

    // 학점이 다르면 별개 과목으로 남는다
    catalog
        .major_course_repo
        .insert_major_course(seeded.legacy_cs_id, "012310", 2, false)
        .expect("Failed to insert variant");
    let pool = catalog
        .major_courses_by_master_code("CS")
        .expect("Failed to query pool");
    assert_eq!(pool.len(), 20);
}

#[test]
fn test_required_courses_are_direct_only() {
    logging::init_test();
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let catalog = SqliteCatalog::new(&db_path).expect("Failed to open catalog");
    let seeded = test_helpers::seed_standard_catalog(&catalog).expect("Failed to seed");

    // 구 교과과정에 전공필수를 지정해도 master의 전공필수로 올라오지 않는다
    catalog
        .major_course_repo
        .insert_major_course(seeded.legacy_cs_id, "004999", 3, true)
        .expect("Failed to insert required course");

    let cs = catalog
        .resolve_major(seeded.cs_id)
        .expect("Failed to resolve major")
        .expect("Seeded major should exist");
    let required = catalog
        .required_major_courses(&cs)
        .expect("Failed to query required courses");

    assert_eq!(required.len(), 3);
    assert!(!required.contains(&Course::new("004999", 3)));
}

#[test]
fn test_upsert_major_keeps_id_and_updates_fields() {
    logging::init_test();
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let catalog = SqliteCatalog::new(&db_path).expect("Failed to open catalog");

    let first_id = catalog
        .major_repo
        .upsert_major("GD", "미술대학", Some("게임디자인전공"))
        .expect("Failed to upsert");
    let second_id = catalog
        .major_repo
        .upsert_major("GD", "게임대학", Some("게임디자인전공"))
        .expect("Failed to re-upsert");

    assert_eq!(first_id, second_id);
    let major = catalog
        .major_repo
        .find_major_by_code("GD")
        .expect("Failed to query major")
        .expect("Major should exist");
    assert_eq!(major.college, "게임대학");

    // 미등록 id/코드 조회는 None
    assert!(catalog
        .resolve_major(first_id + 1_000)
        .expect("Failed to query")
        .is_none());
    assert!(catalog
        .find_major_by_code("ZZ")
        .expect("Failed to query")
        .is_none());
}

#[test]
fn test_list_majors_orders_by_code() {
    logging::init_test();
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let catalog = SqliteCatalog::new(&db_path).expect("Failed to open catalog");
    test_helpers::seed_standard_catalog(&catalog).expect("Failed to seed");

    let majors = catalog.major_repo.list_majors().expect("Failed to list majors");
    let codes: Vec<&str> = majors.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, vec!["CE", "CS", "DA", "EE"]);
}
