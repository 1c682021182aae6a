// src/export/model.rs

use crate::core::recap::{StudentRecapRow, TeacherRecapRow};
use crate::utils::date::DateRange;
use crate::utils::formatting::percent;

pub(crate) const STUDENT_HEADERS: [&str; 8] =
    ["No", "NISN", "Nama Siswa", "Kelas", "Hadir", "Sakit", "Izin", "Alpa"];

pub(crate) const TEACHER_HEADERS: [&str; 5] = [
    "No",
    "Nama Guru",
    "Pertemuan Seharusnya",
    "Pertemuan Dihadiri",
    "Persentase Kehadiran (%)",
];

/// A computed recap, ready to be written in any export format.
#[derive(Debug, Clone)]
pub enum RecapExport {
    Students(Vec<StudentRecapRow>),
    Teachers(Vec<TeacherRecapRow>),
}

impl RecapExport {
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            RecapExport::Students(_) => &STUDENT_HEADERS,
            RecapExport::Teachers(_) => &TEACHER_HEADERS,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RecapExport::Students(rows) => rows.is_empty(),
            RecapExport::Teachers(rows) => rows.is_empty(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RecapExport::Students(_) => "Rekap Kehadiran Siswa",
            RecapExport::Teachers(_) => "Rekap Kehadiran Guru",
        }
    }

    /// `rekap_kehadiran_<start>_<end>.<ext>` (with `_guru` for teachers).
    pub fn default_file_name(&self, range: DateRange, ext: &str) -> String {
        let prefix = match self {
            RecapExport::Students(_) => "rekap_kehadiran",
            RecapExport::Teachers(_) => "rekap_kehadiran_guru",
        };
        format!(
            "{prefix}_{}_{}.{ext}",
            range.start.format("%Y-%m-%d"),
            range.end.format("%Y-%m-%d")
        )
    }

    /// Rows as text, numbered from 1, in header order.
    pub(crate) fn table(&self) -> Vec<Vec<String>> {
        match self {
            RecapExport::Students(rows) => rows
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    vec![
                        (i + 1).to_string(),
                        r.nisn.clone(),
                        r.name.clone(),
                        r.class_name.clone(),
                        r.summary.present.to_string(),
                        r.summary.sick.to_string(),
                        r.summary.excused.to_string(),
                        r.summary.absent.to_string(),
                    ]
                })
                .collect(),
            RecapExport::Teachers(rows) => rows
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    vec![
                        (i + 1).to_string(),
                        r.name.clone(),
                        r.expected.to_string(),
                        r.attended.to_string(),
                        percent(r.percentage),
                    ]
                })
                .collect(),
        }
    }
}
