// fixtures/tables/text_limits.rs
//
// Table covering every MySQL text column width (TINYTEXT through
// LONGTEXT) plus a json-like LONGTEXT payload column. Used by the tests
// that check column provisioning for the text-handling code paths.

use crate::fixtures::TestTable;

pub struct TextLimitsTable;

impl TestTable for TextLimitsTable {
    const NAME: &'static str = "_dbmasta_audit_text_limits";

    fn setup_sql() -> &'static [&'static str] {
        &[r#"
            CREATE TABLE IF NOT EXISTS `_dbmasta_audit_text_limits` (
                id INT AUTO_INCREMENT PRIMARY KEY,
                payload_json LONGTEXT COMMENT 'json-like payload',
                txt_tiny TINYTEXT,
                txt_text TEXT,
                txt_medium MEDIUMTEXT,
                txt_long LONGTEXT
            )
        "#]
    }
}
