//! Console entry point: menu loop and line-oriented prompts.
//!
//! # Responsibility
//! - Parse the command line (username, password, data file, log dir).
//! - Run the blocking menu loop and dispatch to session operations.
//! - Keep recoverable errors inside the loop; exit non-zero on fatal ones.

use anyhow::Result;
use clap::Parser;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::path::PathBuf;
use studenthub_core::{
    core_version, default_log_level, init_logging, CalendarUpdate, JsonStore, MenuChoice, Session,
    SessionError,
};

#[derive(Debug, Parser)]
#[command(name = "studenthub")]
#[command(about = "College student resource management console")]
struct Cli {
    /// Student's username.
    username: String,
    /// Student's password.
    password: String,
    /// Backing file for the record store.
    #[arg(long, default_value = "student_data.json")]
    data_file: PathBuf,
    /// Directory for rolling log files; file logging is off when absent.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

/// Dispatch-level error: a session operation failure or a console failure.
#[derive(Debug)]
enum CliError {
    Session(SessionError),
    Console(io::Error),
}

impl CliError {
    fn is_fatal(&self) -> bool {
        match self {
            Self::Session(err) => err.is_fatal(),
            Self::Console(_) => true,
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Session(err) => write!(f, "{err}"),
            Self::Console(err) => write!(f, "console input/output failed: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Session(err) => Some(err),
            Self::Console(err) => Some(err),
        }
    }
}

impl From<SessionError> for CliError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Console(value)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("warning: {err}");
        }
    }
    info!(
        "event=app_start module=cli status=ok core_version={}",
        core_version()
    );

    let store = JsonStore::new(&cli.data_file);
    let mut session = Session::new(cli.username, cli.password);

    loop {
        print_menu();
        let input = match prompt("Enter option (1-10): ")? {
            Some(line) => line,
            // EOF on stdin ends the session like an explicit exit.
            None => break,
        };

        let choice = match MenuChoice::parse(&input) {
            Ok(choice) => choice,
            Err(err) => {
                println!("{err}. Please try again.");
                continue;
            }
        };

        if choice == MenuChoice::Exit {
            break;
        }

        if let Err(err) = dispatch(choice, &mut session, &store) {
            if err.is_fatal() {
                eprintln!("{err}");
                return Err(err.into());
            }
            println!("{err}. Please try again.");
        }
    }

    Ok(())
}

fn dispatch(choice: MenuChoice, session: &mut Session, store: &JsonStore) -> Result<(), CliError> {
    match choice {
        MenuChoice::LogIn => {
            let name = session.login(store)?;
            println!("Welcome back, {name}!");
        }
        MenuChoice::UpdateProfile => update_profile(session)?,
        MenuChoice::UpdateAcademicCalendar => update_academic_calendar(session)?,
        MenuChoice::UpdateGradeTracker => {
            let gpa = prompt_field("Enter your GPA: ")?;
            let goals = prompt_field("Enter your academic goals: ")?;
            session.update_grade_tracker(&gpa, &goals)?;
            println!("Grade tracker updated successfully.");
        }
        MenuChoice::UpdateTaskManager => {
            let task = prompt_field("Enter task: ")?;
            let errand = prompt_field("Enter errand: ")?;
            session.update_task_manager(&task, &errand);
            println!("Task manager updated successfully.");
        }
        MenuChoice::UpdateEventCalendar => {
            let gym = prompt_field("Enter gym details: ")?;
            let meeting = prompt_field("Enter meeting details: ")?;
            let other = prompt_field("Enter other event details: ")?;
            session.update_event_calendar(&gym, &meeting, &other);
            println!("Event calendar updated successfully.");
        }
        MenuChoice::UpdateFinancialManagement => {
            let weekly = prompt_field("Enter your weekly budget: ")?;
            let monthly = prompt_field("Enter your monthly budget: ")?;
            let item = prompt_field("Enter expense item: ")?;
            let price = prompt_field("Enter expense price: ")?;
            session.update_financial_management(&weekly, &monthly, &item, &price)?;
            println!("Financial management updated successfully.");
        }
        MenuChoice::ViewHome => println!("\n{}", session.view()),
        MenuChoice::BackupData => {
            session.backup(store)?;
            println!("Data backed up successfully.");
        }
        MenuChoice::Exit => {}
    }
    Ok(())
}

fn update_profile(session: &mut Session) -> Result<(), CliError> {
    // Only unset fields are prompted for; set fields are write-once.
    let name = if session.profile().name.is_empty() {
        prompt_field("Enter your name: ")?
    } else {
        String::new()
    };
    let dob = if session.profile().dob.is_empty() {
        prompt_field("Enter your date of birth (MM/DD): ")?
    } else {
        String::new()
    };
    let preferences = if session.profile().preferences.is_empty() {
        prompt_field("Enter your preferences: ")?
    } else {
        String::new()
    };
    session.update_profile(&name, &dob, &preferences)?;
    Ok(())
}

fn update_academic_calendar(session: &mut Session) -> Result<(), CliError> {
    println!("1. Link Canvas Calendar");
    println!("2. Manually Enter Class/Assignment Details");
    let choice = prompt_field("Choose an option (1 or 2): ")?;

    let (course, deadline) = if choice.trim() == "2" {
        (
            prompt_field("Enter course name: ")?,
            prompt_field("Enter assignment deadline (MM-DD-YY): ")?,
        )
    } else {
        (String::new(), String::new())
    };

    match session.update_academic_calendar(&choice, &course, &deadline)? {
        CalendarUpdate::LinkStub => println!("Linking Canvas calendar..."),
        CalendarUpdate::ManualEntry => println!("Academic calendar updated successfully."),
    }
    Ok(())
}

fn print_menu() {
    println!("\n===== College Student Resource Management System =====");
    println!("1. Log In/Sign Up");
    println!("2. Update Profile");
    println!("3. Update Academic Calendar");
    println!("4. Update Grade Tracker");
    println!("5. Update Task Manager");
    println!("6. Update Event Calendar");
    println!("7. Update Financial Management");
    println!("8. View Home Screen");
    println!("9. Backup Data");
    println!("10. Exit");
}

/// Reads one trimmed line from stdin. `None` means end of input.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Reads one field line; end of input mid-operation is a console failure.
fn prompt_field(label: &str) -> Result<String, CliError> {
    match prompt(label)? {
        Some(line) => Ok(line),
        None => Err(CliError::Console(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed mid-operation",
        ))),
    }
}
