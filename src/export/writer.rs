//! XLSX writer
//!
//! Renders a `WorkbookModel` with rust_xlsxwriter. The file is built fully
//! in memory and only then moved into place, so a failed export never
//! leaves a half-written spreadsheet behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};

use crate::error::Result;

use super::workbook::{Cell, WorkbookModel};

/// Header fill used on the main sheet
const HEADER_FILL: u32 = 0x007BFF;

/// Render the model into xlsx bytes
pub fn render_workbook(model: &WorkbookModel) -> Result<Vec<u8>> {
    let header = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center);

    let mut workbook = Workbook::new();

    for sheet in &model.sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (col, width) in sheet.column_widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width)?;
        }

        for (row_index, row) in sheet.rows.iter().enumerate() {
            let is_header = sheet.header_rows.contains(&row_index);
            let row_num = row_index as u32;

            for (col, cell) in row.iter().enumerate() {
                let col_num = col as u16;
                match (cell, is_header) {
                    (Cell::Text(text), true) => {
                        worksheet.write_string_with_format(row_num, col_num, text, &header)?;
                    }
                    (Cell::Text(text), false) => {
                        worksheet.write_string(row_num, col_num, text)?;
                    }
                    (Cell::Number(value), true) => {
                        worksheet.write_number_with_format(row_num, col_num, *value, &header)?;
                    }
                    (Cell::Number(value), false) => {
                        worksheet.write_number(row_num, col_num, *value)?;
                    }
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Render and write the model to `path`
pub fn write_workbook(model: &WorkbookModel, path: &Path) -> Result<()> {
    let bytes = render_workbook(model)?;

    let tmp_path = path.with_extension("xlsx.tmp");
    let written = (|| -> std::io::Result<()> {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    Ok(())
}
