use anyhow::Result;
use clap::{Parser, Subcommand};

use ccrm::cli::{
    handle_backup_command, handle_course_command, handle_data_command,
    handle_instructor_command, handle_report_command, handle_student_command,
};
use ccrm::config::{CcrmPaths, Settings};
use ccrm::logging::init_logger;
use ccrm::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ccrm",
    version,
    about = "Campus Course & Records Manager",
    long_about = "CCRM keeps student, course and enrollment records for a campus. \
                  It enforces enrollment rules, records grades, computes GPAs and \
                  stores everything as plain CSV files that can be backed up."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Student management commands
    #[command(subcommand)]
    Student(ccrm::cli::StudentCommands),

    /// Course management commands
    #[command(subcommand)]
    Course(ccrm::cli::CourseCommands),

    /// Instructor commands
    #[command(subcommand)]
    Instructor(ccrm::cli::InstructorCommands),

    /// CSV import and export
    #[command(subcommand)]
    Data(ccrm::cli::DataCommands),

    /// Backup commands
    #[command(subcommand)]
    Backup(ccrm::cli::BackupCommands),

    /// Reports
    #[command(subcommand)]
    Report(ccrm::cli::ReportCommands),

    /// Create the data directories and a default config file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let paths = CcrmPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone(), &settings)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Student(cmd)) => handle_student_command(&storage, cmd)?,
        Some(Commands::Course(cmd)) => handle_course_command(&storage, cmd)?,
        Some(Commands::Instructor(cmd)) => handle_instructor_command(&storage, cmd)?,
        Some(Commands::Data(cmd)) => handle_data_command(&storage, cmd)?,
        Some(Commands::Backup(cmd)) => handle_backup_command(&storage, &paths, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, cmd)?,
        Some(Commands::Init) => {
            println!("Initializing CCRM at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!(
                "Add instructors to {} and run 'ccrm student add' to get started.",
                paths.settings_file().display()
            );
        }
        Some(Commands::Config) => {
            println!("CCRM Configuration");
            println!("==================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Date format:      {}", settings.date_format);
            println!("  Students file:    {}", settings.files.students);
            println!("  Courses file:     {}", settings.files.courses);
            println!("  Enrollments file: {}", settings.files.enrollments);
            println!("  Instructors:      {}", settings.instructors.len());
        }
        None => {
            println!("CCRM - Campus Course & Records Manager");
            println!();
            println!("Run 'ccrm --help' for usage information.");
        }
    }

    Ok(())
}
