//! V001: Initial schema — controls and measurements.

pub const MIGRATION_SQL: &str = r#"
-- Control configurations: one row per analyte.
CREATE TABLE IF NOT EXISTS controls (
    analyte_id TEXT PRIMARY KEY,
    display_name TEXT NOT NULL,
    mean REAL NOT NULL,
    sd REAL NOT NULL,
    unit TEXT NOT NULL
) STRICT;

-- Measurements: raw values plus cached classification columns.
-- Classification columns are derived; the repository rewrites them on
-- every store after re-evaluation.
CREATE TABLE IF NOT EXISTS measurements (
    id TEXT PRIMARY KEY,
    analyte_id TEXT NOT NULL REFERENCES controls(analyte_id) ON DELETE CASCADE,
    date TEXT NOT NULL,              -- ISO-8601 day, sorts chronologically
    value REAL NOT NULL,
    z_score REAL,
    status TEXT,
    rules TEXT NOT NULL DEFAULT '[]', -- JSON array of rule codes
    comment TEXT
) STRICT;

-- Evaluation order: date ascending, ties by id.
CREATE INDEX IF NOT EXISTS idx_measurements_analyte_date
    ON measurements(analyte_id, date, id);
"#;
