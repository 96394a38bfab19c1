//! XLSX rendering of report tables.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use crate::error::{PlannerError, PlannerResult};
use crate::report::{Cell, Table};

struct SheetFormats {
    header: Format,
    text: Format,
    integer: Format,
    date: Format,
}

impl SheetFormats {
    fn new() -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_align(FormatAlign::Center)
                .set_background_color(0x4472C4)
                .set_font_color(0xFFFFFF)
                .set_border(FormatBorder::Thin),
            text: Format::new().set_border(FormatBorder::Thin),
            integer: Format::new()
                .set_num_format("0")
                .set_border(FormatBorder::Thin),
            date: Format::new()
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin),
        }
    }
}

/// Writes one worksheet per table and returns the workbook bytes.
pub(super) fn render_to_bytes(tables: &[Table]) -> PlannerResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let formats = SheetFormats::new();

    for table in tables {
        let sheet = workbook.add_worksheet();
        write_table(sheet, table, &formats)?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| export_failed(format!("Failed to create workbook: {e}")))
}

fn write_table(sheet: &mut Worksheet, table: &Table, formats: &SheetFormats) -> PlannerResult<()> {
    sheet
        .set_name(table.name.as_str())
        .map_err(|e| export_failed(e.to_string()))?;

    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();

    for (col, header) in table.headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, header.as_str(), &formats.header)
            .map_err(|e| export_failed(e.to_string()))?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = row_idx as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let col_num = col as u16;
            let written = match cell {
                Cell::Text(text) => {
                    sheet.write_with_format(row_num, col_num, text.as_str(), &formats.text)
                }
                Cell::Integer(value) => {
                    sheet.write_with_format(row_num, col_num, *value as f64, &formats.integer)
                }
                Cell::Date(date) => {
                    let text = date.format("%Y-%m-%d").to_string();
                    sheet.write_with_format(row_num, col_num, text.as_str(), &formats.date)
                }
                Cell::Bool(flag) => {
                    sheet.write_with_format(row_num, col_num, *flag, &formats.text)
                }
            };
            written.map_err(|e| export_failed(e.to_string()))?;

            if let Some(width) = widths.get_mut(col) {
                *width = (*width).max(cell_width(cell));
            }
        }
    }

    for (col, width) in widths.iter().enumerate() {
        // Keep long rationale columns readable.
        let width = (*width).clamp(8, 60) as f64 + 2.0;
        sheet
            .set_column_width(col as u16, width)
            .map_err(|e| export_failed(e.to_string()))?;
    }

    Ok(())
}

fn cell_width(cell: &Cell) -> usize {
    match cell {
        Cell::Text(text) => text.chars().count(),
        Cell::Integer(value) => value.to_string().len(),
        Cell::Date(_) => 10,
        Cell::Bool(_) => 5,
    }
}

fn export_failed(message: String) -> PlannerError {
    PlannerError::ExportFailed { message }
}
