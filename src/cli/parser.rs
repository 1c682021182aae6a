use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for LAPKES
/// School administration: staff, classes, students, attendance and recaps
#[derive(Parser)]
#[command(
    name = "lapkes",
    version = env!("CARGO_PKG_VERSION"),
    about = "LAPKES: school administration and attendance recaps on a local SQLite store",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Work offline: changes are queued but never synchronized
    #[arg(global = true, long = "offline")]
    pub offline: bool,

    /// Run in test mode (no config file update, no sync latency)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        #[arg(long = "demo", help = "Load the sample school data")]
        demo: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in as administrator
    Login {
        #[arg(short, long)]
        username: Option<String>,

        #[arg(short, long)]
        password: Option<String>,
    },

    /// Close the current session
    Logout,

    /// Summary of the school and of the sync queue
    Dashboard,

    /// School identity
    School {
        #[command(subcommand)]
        action: SchoolAction,
    },

    /// Teachers
    Teacher {
        #[command(subcommand)]
        action: TeacherAction,
    },

    /// Subjects
    Subject {
        #[command(subcommand)]
        action: SubjectAction,
    },

    /// Classes
    Class {
        #[command(subcommand)]
        action: ClassAction,
    },

    /// Teaching assignments (teacher × subject × class)
    Assignment {
        #[command(subcommand)]
        action: AssignmentAction,
    },

    /// Students, spreadsheet import and import template
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Student transfers out of the school
    Transfer {
        #[command(subcommand)]
        action: TransferAction,
    },

    /// Student achievements
    Achievement {
        #[command(subcommand)]
        action: AchievementAction,
    },

    /// Student violations
    Violation {
        #[command(subcommand)]
        action: ViolationAction,
    },

    /// Application users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Academic calendar
    Calendar {
        #[command(subcommand)]
        action: CalendarAction,
    },

    /// Daily student attendance and teacher meetings
    Attendance {
        #[command(subcommand)]
        action: AttendanceAction,
    },

    /// Attendance recaps, optionally exported
    Recap {
        #[command(subcommand)]
        action: RecapAction,
    },

    /// Connectivity and the offline change queue
    Sync {
        #[command(subcommand)]
        action: SyncAction,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Backup the database to a file
    Backup {
        #[arg(long = "file", help = "Destination file")]
        file: String,

        #[arg(long = "compress", help = "Compress the backup as .zip")]
        compress: bool,

        #[arg(long = "force", help = "Overwrite an existing destination")]
        force: bool,
    },
}

// ---------------------------
// Shared arguments
// ---------------------------

#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Record id
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// Period: YYYY, YYYY-MM, YYYY-MM-DD or start:end of the same shape
    #[arg(long, conflicts_with_all = ["this_week", "this_month"])]
    pub range: Option<String>,

    /// Current week
    #[arg(long = "this-week", conflicts_with = "this_month")]
    pub this_week: bool,

    /// Current month (default)
    #[arg(long = "this-month")]
    pub this_month: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Write the recap to this file
    #[arg(long)]
    pub file: Option<String>,

    /// Export format (csv, json, xlsx)
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Overwrite the output file without asking
    #[arg(long)]
    pub force: bool,
}

// ---------------------------
// School
// ---------------------------

#[derive(Subcommand)]
pub enum SchoolAction {
    Show,
    /// Update the school identity (only the given fields change)
    Set {
        #[arg(long)]
        npsn: Option<String>,
        #[arg(long)]
        name: Option<String>,
        /// SD, SMP, SMA or SMK
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        headmaster: Option<String>,
        #[arg(long = "vice-headmaster")]
        vice_headmaster: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        logo: Option<String>,
        /// "5 Hari" or "6 Hari"
        #[arg(long)]
        format: Option<String>,
    },
}

// ---------------------------
// Staff
// ---------------------------

#[derive(Subcommand)]
pub enum TeacherAction {
    List(PageArgs),
    Add {
        #[arg(long)]
        name: String,
        /// Laki-Laki or Perempuan
        #[arg(long)]
        gender: String,
        /// ASN or NON-ASN
        #[arg(long)]
        status: String,
        #[arg(long)]
        nip: Option<String>,
    },
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        nip: Option<String>,
    },
    Del(DeleteArgs),
}

#[derive(Subcommand)]
pub enum SubjectAction {
    List(PageArgs),
    Add {
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
    },
    Edit {
        id: i64,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
    Del(DeleteArgs),
}

#[derive(Subcommand)]
pub enum ClassAction {
    List(PageArgs),
    Add {
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
        /// Homeroom teacher id
        #[arg(long)]
        homeroom: i64,
    },
    Edit {
        id: i64,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        homeroom: Option<i64>,
    },
    Del(DeleteArgs),
}

#[derive(Subcommand)]
pub enum AssignmentAction {
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        teacher: Option<i64>,
        #[arg(long)]
        class: Option<i64>,
    },
    Add {
        #[arg(long)]
        teacher: i64,
        #[arg(long)]
        subject: i64,
        #[arg(long)]
        class: i64,
        /// Meetings per week
        #[arg(long)]
        meetings: u32,
    },
    Edit {
        id: i64,
        #[arg(long)]
        teacher: Option<i64>,
        #[arg(long)]
        subject: Option<i64>,
        #[arg(long)]
        class: Option<i64>,
        #[arg(long)]
        meetings: Option<u32>,
    },
    Del(DeleteArgs),
}

// ---------------------------
// Students
// ---------------------------

#[derive(Subcommand)]
pub enum StudentAction {
    List {
        #[command(flatten)]
        page: PageArgs,
        /// Only students of this class id
        #[arg(long)]
        class: Option<i64>,
        /// Name or NISN fragment
        #[arg(long)]
        search: Option<String>,
    },
    Add {
        #[arg(long)]
        nisn: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        gender: String,
        /// Siswa Baru (default) or Siswa Pindahan
        #[arg(long)]
        status: Option<String>,
        /// YYYY-MM-DD
        #[arg(long = "entry-date")]
        entry_date: String,
        #[arg(long)]
        class: i64,
        #[arg(long)]
        whatsapp: Option<String>,
        #[arg(long)]
        photo: Option<String>,
    },
    Edit {
        id: i64,
        #[arg(long)]
        nisn: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long = "entry-date")]
        entry_date: Option<String>,
        #[arg(long)]
        class: Option<i64>,
        #[arg(long)]
        whatsapp: Option<String>,
        #[arg(long)]
        photo: Option<String>,
    },
    Del(DeleteArgs),
    /// Import students from an .xlsx or .csv file
    Import {
        #[arg(long)]
        file: String,
    },
    /// Write the .xlsx import template
    Template {
        #[arg(long)]
        file: Option<String>,
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TransferAction {
    List(PageArgs),
    Add {
        #[arg(long)]
        student: i64,
        /// YYYY-MM-DD
        #[arg(long = "exit-date")]
        exit_date: String,
        /// "Pindah Sekolah" or "Keluar"
        #[arg(long)]
        reason: String,
        #[arg(long)]
        notes: Option<String>,
    },
    Edit {
        id: i64,
        #[arg(long = "exit-date")]
        exit_date: Option<String>,
        #[arg(long)]
        reason: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    Del(DeleteArgs),
}

#[derive(Subcommand)]
pub enum AchievementAction {
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        student: Option<i64>,
    },
    Add {
        #[arg(long)]
        student: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        level: String,
        #[arg(long)]
        date: String,
    },
    Edit {
        id: i64,
        #[arg(long)]
        student: Option<i64>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    Del(DeleteArgs),
}

#[derive(Subcommand)]
pub enum ViolationAction {
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        student: Option<i64>,
    },
    Add {
        #[arg(long)]
        student: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        level: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        sanction: String,
    },
    Edit {
        id: i64,
        #[arg(long)]
        student: Option<i64>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        sanction: Option<String>,
    },
    Del(DeleteArgs),
}

// ---------------------------
// Users and calendar
// ---------------------------

#[derive(Subcommand)]
pub enum UserAction {
    List(PageArgs),
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        username: Option<String>,
        /// New password; the current one is kept when omitted
        #[arg(long)]
        password: Option<String>,
    },
    Del(DeleteArgs),
}

#[derive(Subcommand)]
pub enum CalendarAction {
    List(PageArgs),
    Add {
        #[arg(long)]
        date: String,
        #[arg(long)]
        title: String,
        /// Libur, Tidak Efektif or Aktif
        #[arg(long)]
        status: String,
        #[arg(long)]
        description: Option<String>,
    },
    Edit {
        id: i64,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Del(DeleteArgs),
}

// ---------------------------
// Attendance and recaps
// ---------------------------

#[derive(Subcommand)]
pub enum AttendanceAction {
    /// Record one meeting of a class; everyone is present unless --set
    Submit {
        #[arg(long)]
        class: i64,
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        #[arg(long, default_value_t = 1)]
        meeting: u32,
        /// Per-student status, e.g. --set 4=S --set 7=alpa
        #[arg(long = "set", value_name = "STUDENT_ID=STATUS")]
        set: Vec<String>,
    },
    /// Attendance recorded on a day
    List {
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        class: Option<i64>,
    },
    /// Log meetings taught by a teacher
    TeacherLog {
        #[arg(long)]
        teacher: i64,
        #[arg(long)]
        subject: i64,
        #[arg(long)]
        class: i64,
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        meetings: u32,
    },
    TeacherList {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        teacher: Option<i64>,
    },
    TeacherDel(DeleteArgs),
}

#[derive(Subcommand)]
pub enum RecapAction {
    Students {
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long)]
        class: Option<i64>,
        #[command(flatten)]
        export: ExportArgs,
    },
    Teachers {
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long)]
        teacher: Option<i64>,
        #[command(flatten)]
        export: ExportArgs,
    },
}

#[derive(Subcommand)]
pub enum SyncAction {
    Status,
    /// Push the queued changes now
    Now,
}
