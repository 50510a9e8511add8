// ==========================================
// Employee Registry - command-line entry point
// ==========================================
// Every command prints JSON on stdout; logs go to stderr
// ==========================================

use std::path::PathBuf;

use anyhow::{bail, Context as _};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use employee_registry::app::{get_default_db_path, AppState};
use employee_registry::config::{config_keys, RegistryConfigReader};
use employee_registry::domain::EmployeeDraft;

#[derive(Parser)]
#[command(author, version, about = "Employee registry")]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "EMPLOYEE_REGISTRY_DB_PATH")]
    db: Option<String>,

    /// Name written to the audit fields (default: configured system actor)
    #[arg(long, global = true)]
    actor: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List non-deleted employees
    List {
        #[arg(long)]
        department: Option<String>,
        /// "Active" selects active employees, any other value inactive ones
        #[arg(long)]
        status: Option<String>,
        /// Case-insensitive substring of the name
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one employee
    Get { id: i64 },
    /// Create an employee
    Create(EmployeeArgs),
    /// Overwrite an employee
    Update {
        id: i64,
        #[command(flatten)]
        fields: EmployeeArgs,
    },
    /// Soft-delete an employee
    Delete { id: i64 },
    /// Distinct department names
    Departments,
    /// Employee count per department
    DepartmentCounts,
    /// Bulk import from an .xlsx file
    Import { file: PathBuf },
    /// Read or change settings
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Args)]
struct EmployeeArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    department: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    active: bool,
}

impl From<EmployeeArgs> for EmployeeDraft {
    fn from(args: EmployeeArgs) -> Self {
        EmployeeDraft::new(args.name, args.department, args.email, args.active)
    }
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Store a setting
    Set { key: String, value: String },
    /// Print every stored setting
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    employee_registry::logging::init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let cli = Cli::parse();
    let db_path = cli.db.clone().unwrap_or_else(get_default_db_path);
    tracing::debug!(db_path = %db_path, version = employee_registry::VERSION, "starting");

    let state = AppState::new(db_path.clone())
        .with_context(|| format!("failed to open database at {db_path}"))?;

    let actor = match cli.actor.as_deref().map(str::trim) {
        Some(actor) if !actor.is_empty() => actor.to_string(),
        _ => state.config_manager.get_system_actor().await?,
    };

    match cli.command {
        Command::List {
            department,
            status,
            search,
        } => {
            let employees = state
                .employee_api
                .list_employees(department.as_deref(), status.as_deref(), search.as_deref())
                .await?;
            print_json(&employees)?;
        }
        Command::Get { id } => {
            print_json(&state.employee_api.get_by_id(id).await?)?;
        }
        Command::Create(fields) => {
            let employee_id = state.employee_api.create(fields.into(), &actor).await?;
            print_json(&serde_json::json!({ "employee_id": employee_id }))?;
        }
        Command::Update { id, fields } => {
            let updated = state.employee_api.update(id, fields.into(), &actor).await?;
            print_json(&serde_json::json!({ "updated": updated }))?;
        }
        Command::Delete { id } => {
            let deleted = state.employee_api.delete(id, &actor).await?;
            print_json(&serde_json::json!({ "deleted": deleted }))?;
        }
        Command::Departments => {
            print_json(&state.employee_api.list_departments().await?)?;
        }
        Command::DepartmentCounts => {
            print_json(&state.employee_api.department_counts().await?)?;
        }
        Command::Import { file } => {
            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("failed to read {}", file.display()))?;
            let file_name = file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();

            let result = state.import_api.import(&bytes, &file_name, &actor).await?;
            print_json(&result)?;
        }
        Command::Config { action } => match action {
            ConfigCommand::Set { key, value } => {
                if !config_keys::ALL.contains(&key.as_str()) {
                    bail!(
                        "unknown config key '{key}' (expected one of: {})",
                        config_keys::ALL.join(", ")
                    );
                }
                state.config_manager.set_global_config_value(&key, &value)?;
                print_json(&serde_json::json!({ "key": key, "value": value }))?;
            }
            ConfigCommand::Show => {
                println!("{}", state.config_manager.get_config_snapshot()?);
            }
        },
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
