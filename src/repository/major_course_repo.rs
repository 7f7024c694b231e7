use crate::db::open_sqlite_connection;
use crate::domain::course::Course;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

/// 전공 과목 insert용 행
#[derive(Debug, Clone)]
pub struct NewMajorCourse {
    pub number: String,
    pub credit: u32,
    pub is_required: bool,
}

// ==========================================
// MajorCourseRepository - 전공별 과목 저장소
// ==========================================
/// 전공별 과목 저장소
/// 역할: major_course 테이블 CRUD (전공 학점 풀 + 전공필수 지정)
/// 규칙: 비즈니스 로직 금지, 데이터 접근만 담당
pub struct MajorCourseRepository {
    conn: Arc<Mutex<Connection>>,
}

impl MajorCourseRepository {
    /// 새 MajorCourseRepository 인스턴스 생성
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 기존 연결로 저장소 인스턴스 생성
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 과목 행 일괄 upsert
    ///
    /// # 반환
    /// - Ok(usize): 반영된 행 수
    ///
    /// (major_id, number, credit)이 이미 있으면 is_required를 갱신한다.
    /// 트랜잭션으로 원자성을 보장한다.
    pub fn batch_insert_major_courses(
        &self,
        major_id: i64,
        rows: &[NewMajorCourse],
    ) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        let mut count = 0;
        for row in rows {
            tx.execute(
                r#"
                INSERT INTO major_course (major_id, number, credit, is_required)
                VALUES (?1, ?2, ?3, ?4)
                ON CONFLICT(major_id, number, credit) DO UPDATE SET
                    is_required = excluded.is_required
                "#,
                params![major_id, row.number, row.credit, row.is_required as i64],
            )?;
            count += 1;
        }

        tx.commit()?;
        Ok(count)
    }

    /// 과목 행 한 건 upsert
    pub fn insert_major_course(
        &self,
        major_id: i64,
        number: &str,
        credit: u32,
        is_required: bool,
    ) -> RepositoryResult<()> {
        self.batch_insert_major_courses(
            major_id,
            &[NewMajorCourse {
                number: number.to_string(),
                credit,
                is_required,
            }],
        )?;
        Ok(())
    }

    /// 전공의 과목 전체 조회 (전공필수 포함)
    pub fn find_courses_by_major(&self, major_id: i64) -> RepositoryResult<Vec<Course>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT number, credit FROM major_course
            WHERE major_id = ?1
            ORDER BY number, credit
            "#,
        )?;
        Self::collect_course_rows(&mut stmt, params![major_id])
    }

    /// 전공필수로 지정된 과목 조회
    pub fn find_required_courses_by_major(&self, major_id: i64) -> RepositoryResult<Vec<Course>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT number, credit FROM major_course
            WHERE major_id = ?1 AND is_required = 1
            ORDER BY number, credit
            "#,
        )?;
        Self::collect_course_rows(&mut stmt, params![major_id])
    }

    /// 전공의 과목 행 수
    pub fn count_courses(&self, major_id: i64) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM major_course WHERE major_id = ?1",
            params![major_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    fn collect_course_rows(
        stmt: &mut rusqlite::Statement<'_>,
        params: impl rusqlite::Params,
    ) -> RepositoryResult<Vec<Course>> {
        let rows = stmt.query_map(params, |row| {
            Ok(Course {
                number: row.get(0)?,
                credit: row.get(1)?,
                subject_area: None,
            })
        })?;

        let mut courses = Vec::new();
        for row in rows {
            courses.push(row?);
        }
        Ok(courses)
    }
}
