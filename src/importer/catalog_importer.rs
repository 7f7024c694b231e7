// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 카탈로그 CSV 적재기
// ==========================================
// 역할: 학과/전공과목/전공계층 CSV 3종을 카탈로그 DB에 적재
// 흐름: 파싱 → 행 검증 → 코드 해소 → 저장
// 규칙: 깨진 행은 건너뛰고 사유를 리포트에 남긴다. 파일 단위 실패만 중단
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::importer::error::{ImportError, ImportResult};
use crate::repository::catalog::SqliteCatalog;
use crate::repository::major_course_repo::NewMajorCourse;

/// 학과 파일명
pub const MAJORS_FILE: &str = "majors.csv";
/// 전공 과목 파일명
pub const MAJOR_COURSES_FILE: &str = "major_courses.csv";
/// 전공 계층 파일명
pub const MAJOR_HIERARCHY_FILE: &str = "major_hierarchy.csv";

// ==========================================
// CSV 행 구조
// ==========================================

#[derive(Debug, Deserialize)]
struct MajorRow {
    code: String,
    college: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MajorCourseRow {
    major_code: String,
    number: String,
    credit: u32,
    #[serde(default)]
    required: u8,
}

#[derive(Debug, Deserialize)]
struct MajorHierarchyRow {
    master_code: String,
    slave_code: String,
}

// ==========================================
// ImportIssue / ImportReport - 적재 결과
// ==========================================

/// 건너뛴 행 한 건의 사유
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportIssue {
    pub file: String,
    pub row: usize,
    pub reason: String,
}

/// 적재 결과 요약
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub batch_id: String,
    pub imported_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub total_rows: usize,
    pub imported_rows: usize,
    pub skipped_rows: usize,
    pub issues: Vec<ImportIssue>,
}

// ==========================================
// CatalogImporter - 카탈로그 CSV 적재기
// ==========================================

pub struct CatalogImporter {
    catalog: SqliteCatalog,
}

impl CatalogImporter {
    pub fn new(catalog: SqliteCatalog) -> Self {
        Self { catalog }
    }

    /// 디렉터리의 카탈로그 CSV 3종을 순서대로 적재
    ///
    /// 학과 → 과목 → 계층 순서. 과목/계층 행의 학과 코드는
    /// 같은 실행에서 적재된 학과를 포함해 DB 기준으로 해소된다
    ///
    /// # 반환
    /// - Ok(ImportReport): 적재 요약 (건너뛴 행 사유 포함)
    /// - Err(ImportError): 파일 단위 실패
    #[instrument(skip(self, dir), fields(batch_id))]
    pub fn import_catalog_dir(&self, dir: &Path) -> ImportResult<ImportReport> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        info!(batch_id = %batch_id, dir = %dir.display(), "카탈로그 적재 시작");

        let mut total_rows = 0usize;
        let mut imported_rows = 0usize;
        let mut issues = Vec::new();

        // === 단계 1: 학과 적재 ===
        debug!("단계 1: 학과 적재");
        let (rows, imported) = self.import_majors(&dir.join(MAJORS_FILE), &mut issues)?;
        total_rows += rows;
        imported_rows += imported;
        info!(rows, imported, "학과 적재 완료");

        // === 단계 2: 전공 과목 적재 ===
        debug!("단계 2: 전공 과목 적재");
        let (rows, imported) =
            self.import_major_courses(&dir.join(MAJOR_COURSES_FILE), &mut issues)?;
        total_rows += rows;
        imported_rows += imported;
        info!(rows, imported, "전공 과목 적재 완료");

        // === 단계 3: 전공 계층 적재 ===
        debug!("단계 3: 전공 계층 적재");
        let (rows, imported) =
            self.import_major_hierarchy(&dir.join(MAJOR_HIERARCHY_FILE), &mut issues)?;
        total_rows += rows;
        imported_rows += imported;
        info!(rows, imported, "전공 계층 적재 완료");

        let elapsed = start_time.elapsed();
        let report = ImportReport {
            batch_id: batch_id.clone(),
            imported_at: Utc::now(),
            elapsed_ms: elapsed.as_millis() as u64,
            total_rows,
            imported_rows,
            skipped_rows: issues.len(),
            issues,
        };

        info!(
            batch_id = %batch_id,
            total = report.total_rows,
            imported = report.imported_rows,
            skipped = report.skipped_rows,
            elapsed_ms = report.elapsed_ms,
            "카탈로그 적재 완료"
        );

        Ok(report)
    }

    /// majors.csv 적재 (code 충돌 시 college/name 갱신)
    fn import_majors(
        &self,
        path: &Path,
        issues: &mut Vec<ImportIssue>,
    ) -> ImportResult<(usize, usize)> {
        let mut reader = open_csv(path)?;
        let mut total = 0usize;
        let mut imported = 0usize;

        for (idx, result) in reader.deserialize::<MajorRow>().enumerate() {
            let row_number = idx + 2; // 1행은 헤더
            total += 1;

            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    skip_row(issues, MAJORS_FILE, row_number, format!("파싱 실패: {}", e));
                    continue;
                }
            };

            let code = row.code.trim();
            let college = row.college.trim();
            if code.is_empty() || college.is_empty() {
                skip_row(
                    issues,
                    MAJORS_FILE,
                    row_number,
                    "code/college는 비어 있을 수 없음".to_string(),
                );
                continue;
            }

            self.catalog
                .major_repo
                .upsert_major(code, college, row.name.as_deref().map(str::trim))?;
            imported += 1;
        }

        Ok((total, imported))
    }

    /// major_courses.csv 적재. 학과별로 모아 트랜잭션 단위로 넣는다
    fn import_major_courses(
        &self,
        path: &Path,
        issues: &mut Vec<ImportIssue>,
    ) -> ImportResult<(usize, usize)> {
        let mut reader = open_csv(path)?;
        let mut resolver = MajorCodeResolver::new(&self.catalog);
        let mut total = 0usize;
        let mut grouped: HashMap<i64, Vec<NewMajorCourse>> = HashMap::new();

        for (idx, result) in reader.deserialize::<MajorCourseRow>().enumerate() {
            let row_number = idx + 2;
            total += 1;

            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    skip_row(issues, MAJOR_COURSES_FILE, row_number, format!("파싱 실패: {}", e));
                    continue;
                }
            };

            let number = row.number.trim();
            if number.is_empty() {
                skip_row(
                    issues,
                    MAJOR_COURSES_FILE,
                    row_number,
                    "학수번호는 비어 있을 수 없음".to_string(),
                );
                continue;
            }

            let major_id = match resolver.resolve(row.major_code.trim())? {
                Some(id) => id,
                None => {
                    skip_row(
                        issues,
                        MAJOR_COURSES_FILE,
                        row_number,
                        format!("미등록 학과 코드: {}", row.major_code.trim()),
                    );
                    continue;
                }
            };

            grouped.entry(major_id).or_default().push(NewMajorCourse {
                number: number.to_string(),
                credit: row.credit,
                is_required: row.required != 0,
            });
        }

        let mut imported = 0usize;
        for (major_id, rows) in grouped {
            imported += self
                .catalog
                .major_course_repo
                .batch_insert_major_courses(major_id, &rows)?;
        }

        Ok((total, imported))
    }

    /// major_hierarchy.csv 적재 (master → slave 승계 간선)
    fn import_major_hierarchy(
        &self,
        path: &Path,
        issues: &mut Vec<ImportIssue>,
    ) -> ImportResult<(usize, usize)> {
        let mut reader = open_csv(path)?;
        let mut resolver = MajorCodeResolver::new(&self.catalog);
        let mut total = 0usize;
        let mut imported = 0usize;

        for (idx, result) in reader.deserialize::<MajorHierarchyRow>().enumerate() {
            let row_number = idx + 2;
            total += 1;

            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    skip_row(issues, MAJOR_HIERARCHY_FILE, row_number, format!("파싱 실패: {}", e));
                    continue;
                }
            };

            let master_code = row.master_code.trim();
            let slave_code = row.slave_code.trim();
            if master_code == slave_code {
                skip_row(
                    issues,
                    MAJOR_HIERARCHY_FILE,
                    row_number,
                    format!("자기 자신 승계 불가: {}", master_code),
                );
                continue;
            }

            let master_id = resolver.resolve(master_code)?;
            let slave_id = resolver.resolve(slave_code)?;
            match (master_id, slave_id) {
                (Some(master_id), Some(slave_id)) => {
                    self.catalog.hierarchy_repo.add_hierarchy(master_id, slave_id)?;
                    imported += 1;
                }
                _ => {
                    let missing = if master_id.is_none() { master_code } else { slave_code };
                    skip_row(
                        issues,
                        MAJOR_HIERARCHY_FILE,
                        row_number,
                        format!("미등록 학과 코드: {}", missing),
                    );
                }
            }
        }

        Ok((total, imported))
    }
}

// ==========================================
// 보조 구성요소
// ==========================================

/// 학과 코드 → id 해소기. 같은 코드의 반복 조회를 캐시한다
struct MajorCodeResolver<'a> {
    catalog: &'a SqliteCatalog,
    cache: HashMap<String, Option<i64>>,
}

impl<'a> MajorCodeResolver<'a> {
    fn new(catalog: &'a SqliteCatalog) -> Self {
        Self {
            catalog,
            cache: HashMap::new(),
        }
    }

    fn resolve(&mut self, code: &str) -> ImportResult<Option<i64>> {
        if let Some(cached) = self.cache.get(code) {
            return Ok(*cached);
        }
        let id = self
            .catalog
            .major_repo
            .find_major_by_code(code)?
            .map(|m| m.id);
        self.cache.insert(code.to_string(), id);
        Ok(id)
    }
}

fn open_csv(path: &Path) -> ImportResult<csv::Reader<std::fs::File>> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(csv::Reader::from_path(path)?)
}

fn skip_row(issues: &mut Vec<ImportIssue>, file: &str, row: usize, reason: String) {
    warn!(file, row, reason = %reason, "행 건너뜀");
    issues.push(ImportIssue {
        file: file.to_string(),
        row,
        reason,
    });
}
