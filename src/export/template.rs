// src/export/template.rs

use crate::core::import::{OPTIONAL_COLUMNS, REQUIRED_COLUMNS};
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::export::xlsx::to_app_error;
use crate::models::enums::{Gender, StudentStatus};
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::path::Path;

pub const TEMPLATE_FILE_NAME: &str = "template_import_siswa.xlsx";

const SAMPLE_ROWS: [[&str; 7]; 2] = [
    [
        "0012345678",
        "Budi Santoso",
        "Laki-Laki",
        "Siswa Baru",
        "2024-07-15",
        "X Rekayasa Perangkat Lunak",
        "6281234567890",
    ],
    [
        "0012345679",
        "Citra Lestari",
        "Perempuan",
        "Siswa Pindahan",
        "2024-07-15",
        "XI TJKT 1",
        "6289876543210",
    ],
];

/// Write the student import template: a data sheet with the expected
/// columns and two sample rows, and a guide sheet listing allowed values
/// and the existing class names.
pub fn write_student_template(state: &AppState, path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let columns: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .chain(OPTIONAL_COLUMNS.iter())
        .copied()
        .collect();

    // ---------------------------
    // Data sheet
    // ---------------------------
    {
        let ws = workbook.add_worksheet();
        ws.set_name("Data Siswa").map_err(to_app_error)?;

        for (col, h) in columns.iter().enumerate() {
            ws.write_with_format(0, col as u16, *h, &header_format)
                .map_err(to_app_error)?;
            ws.set_column_width(col as u16, h.len() as f64 + 5.0)
                .map_err(to_app_error)?;
        }

        for (r, sample) in SAMPLE_ROWS.iter().enumerate() {
            for (col, value) in sample.iter().enumerate() {
                ws.write_string((r + 1) as u32, col as u16, *value)
                    .map_err(to_app_error)?;
            }
        }
    }

    // ---------------------------
    // Guide sheet
    // ---------------------------
    {
        let ws = workbook.add_worksheet();
        ws.set_name("Panduan").map_err(to_app_error)?;

        let bold = Format::new().set_bold();
        let gender = format!("Wajib diisi. Pilih salah satu: {}", Gender::allowed());
        let status = format!("Wajib diisi. Pilih salah satu: {}", StudentStatus::allowed());

        let guide: [[&str; 3]; 7] = [
            ["nisn", "Wajib diisi. Harus unik.", "0012345678"],
            ["name", "Wajib diisi. Nama lengkap siswa.", "Budi Contoh"],
            ["gender", gender.as_str(), "Laki-Laki"],
            ["status", status.as_str(), "Siswa Baru"],
            ["entryDate", "Wajib diisi. Format: YYYY-MM-DD.", "2024-07-15"],
            [
                "className",
                "Wajib diisi. Nama kelas harus sesuai dengan yang ada di sistem.",
                "X Rekayasa Perangkat Lunak",
            ],
            ["whatsapp", "Opsional. Format internasional diawali 62.", "6281234567890"],
        ];

        ws.write_with_format(0, 0, "Panduan Pengisian Template Import Siswa", &bold)
            .map_err(to_app_error)?;

        for (col, h) in ["Kolom", "Keterangan", "Contoh Nilai Valid"].iter().enumerate() {
            ws.write_with_format(2, col as u16, *h, &header_format)
                .map_err(to_app_error)?;
        }

        for (i, line) in guide.iter().enumerate() {
            for (col, value) in line.iter().enumerate() {
                ws.write_string(3 + i as u32, col as u16, *value)
                    .map_err(to_app_error)?;
            }
        }

        let mut row = 3 + guide.len() as u32 + 1;
        ws.write_with_format(row, 0, "Daftar Nama Kelas yang Tersedia:", &bold)
            .map_err(to_app_error)?;
        for class in &state.classes {
            row += 1;
            ws.write_string(row, 0, class.name.as_str())
                .map_err(to_app_error)?;
        }

        ws.set_column_width(0, 20).map_err(to_app_error)?;
        ws.set_column_width(1, 50).map_err(to_app_error)?;
        ws.set_column_width(2, 30).map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;
    notify_export_success("Template", path);
    Ok(())
}
