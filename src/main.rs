// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - CLI 주 진입점
// ==========================================
// 사용법:
//   hongik-grad-audit evaluate <request.json> [db_path]
//   hongik-grad-audit import <csv_dir> [db_path]
// ==========================================

use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use hongik_grad_audit::api::GraduationApi;
use hongik_grad_audit::config::RuleTableManager;
use hongik_grad_audit::db::{
    get_default_db_path, init_catalog_schema, open_sqlite_connection, read_schema_version,
    CURRENT_SCHEMA_VERSION,
};
use hongik_grad_audit::importer::CatalogImporter;
use hongik_grad_audit::logging;
use hongik_grad_audit::repository::SqliteCatalog;
use hongik_grad_audit::EvaluationRequest;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    tracing::info!("{} v{}", hongik_grad_audit::APP_NAME, hongik_grad_audit::VERSION);

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str);

    match command {
        Some("evaluate") => {
            let request_path = args.get(2).ok_or_else(usage)?;
            let db_path = args.get(3).cloned().unwrap_or_else(get_default_db_path);
            run_evaluate(request_path, &db_path)
        }
        Some("import") => {
            let csv_dir = args.get(2).ok_or_else(usage)?;
            let db_path = args.get(3).cloned().unwrap_or_else(get_default_db_path);
            run_import(csv_dir, &db_path)
        }
        _ => Err(usage()),
    }
}

fn usage() -> Box<dyn Error> {
    "사용법: hongik-grad-audit evaluate <request.json> [db_path] | import <csv_dir> [db_path]"
        .into()
}

/// 진단 요청 JSON을 평가하고 리포트를 표준 출력으로 내보낸다
fn run_evaluate(request_path: &str, db_path: &str) -> Result<(), Box<dyn Error>> {
    tracing::info!(db_path = %db_path, request = %request_path, "진단 실행");

    let conn = open_db(db_path)?;

    // 분류 규칙은 기동 시 1회 로드
    let rules = Arc::new(RuleTableManager::from_connection(Arc::clone(&conn))?.load()?);
    let catalog = Arc::new(SqliteCatalog::from_connection(conn));
    let api = GraduationApi::new(catalog, rules);

    let raw = fs::read_to_string(request_path)
        .map_err(|e| format!("요청 파일 읽기 실패 ({}): {}", request_path, e))?;
    let request: EvaluationRequest = serde_json::from_str(&raw)
        .map_err(|e| format!("요청 JSON 파싱 실패: {}", e))?;

    let report = api.evaluate(&request)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// 카탈로그 CSV 디렉터리를 DB에 적재하고 요약을 출력한다
fn run_import(csv_dir: &str, db_path: &str) -> Result<(), Box<dyn Error>> {
    tracing::info!(db_path = %db_path, csv_dir = %csv_dir, "카탈로그 적재 실행");

    let conn = open_db(db_path)?;
    let importer = CatalogImporter::new(SqliteCatalog::from_connection(conn));

    let report = importer.import_catalog_dir(Path::new(csv_dir))?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// DB를 열고 스키마를 보장한다. 버전 불일치는 경고만 남긴다
fn open_db(db_path: &str) -> Result<Arc<Mutex<rusqlite::Connection>>, Box<dyn Error>> {
    let conn = open_sqlite_connection(db_path)?;
    init_catalog_schema(&conn)?;

    match read_schema_version(&conn)? {
        Some(version) if version != CURRENT_SCHEMA_VERSION => {
            tracing::warn!(
                found = version,
                expected = CURRENT_SCHEMA_VERSION,
                "schema_version 불일치"
            );
        }
        None => tracing::warn!("schema_version 테이블 없음"),
        _ => {}
    }

    Ok(Arc::new(Mutex::new(conn)))
}
