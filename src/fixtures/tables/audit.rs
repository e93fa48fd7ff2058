// fixtures/tables/audit.rs
//
// The temporary audit table the integration tests run against. The table
// only exists between a scope's setup and teardown; nothing outside a
// scope may rely on it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::fixtures::TestTable;

/// A row of the audit test table, as read back by the tests
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AuditRow {
    pub id: i32,
    pub name: String,
    pub value: i32,
    pub created_at: NaiveDateTime,
}

pub struct AuditTable;

impl TestTable for AuditTable {
    const NAME: &'static str = "_dbmasta_audit_test";

    fn setup_sql() -> &'static [&'static str] {
        &[r#"
            CREATE TABLE IF NOT EXISTS `_dbmasta_audit_test` (
                id INT AUTO_INCREMENT PRIMARY KEY,
                name VARCHAR(255) NOT NULL UNIQUE,
                value INT DEFAULT 0,
                created_at DATETIME(6) DEFAULT CURRENT_TIMESTAMP(6)
            )
        "#]
    }
}
