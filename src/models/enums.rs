//! Closed string sets used by the school records.
//!
//! Each enum serializes to the exact value stored by earlier versions of the
//! application, so persisted collections and imported spreadsheets share one
//! vocabulary.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $variant:ident => $value:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Persisted value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            /// Case-insensitive lookup on the persisted value (and aliases).
            pub fn from_value(s: &str) -> Option<Self> {
                let needle = s.trim().to_lowercase();
                $(
                    if needle == $value.to_lowercase() $(|| needle == $alias)* {
                        return Some($name::$variant);
                    }
                )+
                None
            }

            /// Case-insensitive lookup on the persisted value only.
            pub fn from_persisted(s: &str) -> Option<Self> {
                let needle = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().to_lowercase() == needle)
            }

            /// Like `from_value`, with an error listing the allowed values.
            pub fn parse(s: &str) -> AppResult<Self> {
                Self::from_value(s).ok_or_else(|| AppError::InvalidValue {
                    field: $field,
                    value: s.to_string(),
                    allowed: Self::allowed(),
                })
            }

            pub fn allowed() -> String {
                Self::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    Gender, "gender" {
        Male => "Laki-Laki" | "l" | "male",
        Female => "Perempuan" | "p" | "female",
    }
}

string_enum! {
    TeacherStatus, "teacher status" {
        Asn => "ASN",
        NonAsn => "NON-ASN" | "non asn" | "nonasn",
    }
}

string_enum! {
    SchoolLevel, "school level" {
        Sd => "SD",
        Smp => "SMP",
        Sma => "SMA",
        Smk => "SMK",
    }
}

string_enum! {
    SchoolDays, "school days" {
        Five => "5 Hari" | "5",
        Six => "6 Hari" | "6",
    }
}

string_enum! {
    CalendarStatus, "calendar status" {
        Holiday => "Libur",
        Ineffective => "Tidak Efektif",
        Active => "Aktif",
    }
}

string_enum! {
    StudentStatus, "student status" {
        New => "Siswa Baru",
        Transfer => "Siswa Pindahan",
        Inactive => "Keluar/Pindah",
    }
}

string_enum! {
    /// Daily attendance code: Hadir, Sakit, Ijin, Alpa.
    AttendanceStatus, "attendance status" {
        Present => "H" | "hadir",
        Sick => "S" | "sakit",
        Excused => "I" | "ijin" | "izin",
        Absent => "A" | "alpa",
    }
}

string_enum! {
    TransferReason, "transfer reason" {
        Moved => "Pindah Sekolah" | "pindah",
        DroppedOut => "Keluar",
    }
}

string_enum! {
    AchievementLevel, "achievement level" {
        School => "Sekolah",
        District => "Kecamatan",
        Regency => "Kabupaten/Kota" | "kabupaten" | "kota",
        Province => "Provinsi",
        National => "Nasional",
        International => "Internasional",
    }
}

string_enum! {
    ViolationLevel, "violation level" {
        Minor => "Ringan",
        Moderate => "Sedang",
        Severe => "Berat",
    }
}

string_enum! {
    Sanction, "sanction" {
        VerbalWarning => "Peringatan Lisan",
        WrittenWarning => "Peringatan Tertulis",
        Sp1 => "SP1",
        Sp2 => "SP2",
        Sp3 => "SP3",
        Suspension => "Skorsing",
        Expulsion => "Dikeluarkan",
    }
}

impl StudentStatus {
    pub fn is_active(&self) -> bool {
        !matches!(self, StudentStatus::Inactive)
    }
}
