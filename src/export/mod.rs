//! Spreadsheet export of a planner session.
//!
//! The workbook has one sheet per table from [`crate::report::session_tables`]:
//! holidays, proposals, personal days, custom intervals, and the PTO summary.
//! The XLSX writer is behind the default `xlsx` feature; builds without it
//! report [`PlannerError::ExportUnavailable`](crate::error::PlannerError::ExportUnavailable).

#[cfg(feature = "xlsx")]
mod xlsx;

use tracing::info;

use crate::error::PlannerResult;
use crate::models::PlannerWarning;
use crate::report::session_tables;
use crate::session::PlannerSession;

/// MIME type of the exported workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A rendered export ready to be downloaded.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// File name, derived from the planning year.
    pub file_name: String,
    /// MIME type of `bytes`.
    pub content_type: &'static str,
    /// The workbook contents.
    pub bytes: Vec<u8>,
    /// Warnings of the exported session; the summary sheet lists them too.
    pub warnings: Vec<PlannerWarning>,
}

/// Returns the export file name for a year.
///
/// # Example
///
/// ```
/// use vacation_planner::export::export_file_name;
///
/// assert_eq!(export_file_name(2026), "vacation_plan_2026.xlsx");
/// ```
pub fn export_file_name(year: i32) -> String {
    format!("vacation_plan_{}.xlsx", year)
}

/// Returns `true` if this build can write spreadsheets.
pub fn export_available() -> bool {
    cfg!(feature = "xlsx")
}

/// Renders the session as a multi-sheet workbook.
///
/// # Errors
///
/// - [`PlannerError::ExportUnavailable`](crate::error::PlannerError::ExportUnavailable)
///   if the writer is not compiled in
/// - [`PlannerError::ExportFailed`](crate::error::PlannerError::ExportFailed)
///   if the writer rejects the workbook
pub fn export_workbook(session: &PlannerSession) -> PlannerResult<ExportArtifact> {
    let tables = session_tables(session);
    let bytes = render(&tables)?;

    let file_name = export_file_name(session.year());
    info!(
        file_name = %file_name,
        sheets = tables.len(),
        warnings = session.warnings().len(),
        bytes = bytes.len(),
        "Workbook exported"
    );

    Ok(ExportArtifact {
        file_name,
        content_type: XLSX_CONTENT_TYPE,
        bytes,
        warnings: session.warnings().to_vec(),
    })
}

#[cfg(feature = "xlsx")]
fn render(tables: &[crate::report::Table]) -> PlannerResult<Vec<u8>> {
    xlsx::render_to_bytes(tables)
}

#[cfg(not(feature = "xlsx"))]
fn render(_tables: &[crate::report::Table]) -> PlannerResult<Vec<u8>> {
    Err(crate::error::PlannerError::ExportUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_deterministic() {
        assert_eq!(export_file_name(2026), export_file_name(2026));
        assert_eq!(export_file_name(2027), "vacation_plan_2027.xlsx");
    }

    #[test]
    fn test_export_available_matches_feature() {
        assert_eq!(export_available(), cfg!(feature = "xlsx"));
    }
}
