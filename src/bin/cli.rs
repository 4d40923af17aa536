//! retiretrack CLI
//!
//! Command-line front end over a file-backed workspace.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args as ClapArgs, Parser, Subcommand};
use retiretrack::export::ExportOptions;
use retiretrack::query::{FilterCriteria, SortConfig, SortDirection, SortField, StatusFilter};
use retiretrack::validation::{PhotoUpload, TeacherForm};
use retiretrack::{Config, ProgressStatus, Result, Teacher, TeacherPatch, TrackerError, Workspace};
use tracing_subscriber::{fmt, EnvFilter};

/// retiretrack CLI
#[derive(Parser, Debug)]
#[command(name = "retiretrack")]
#[command(about = "Track teacher retirement submissions")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./retiretrack_data")]
    data_dir: PathBuf,

    /// Directory spreadsheets are written to
    #[arg(short, long, default_value = ".")]
    export_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a teacher record
    Add {
        /// Photo file (JPG, PNG or WebP)
        #[arg(long)]
        photo: PathBuf,

        #[arg(long)]
        name: String,

        #[arg(long)]
        nip: String,

        #[arg(long)]
        position: String,

        #[arg(long)]
        school: String,

        /// Retirement date (YYYY-MM-DD)
        #[arg(long)]
        retirement_date: String,

        /// Link to supporting documents
        #[arg(long, default_value = "")]
        document_link: String,
    },

    /// List records
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Sort field (name, nip, school, retirementDate, ...)
        #[arg(long)]
        sort: Option<SortField>,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Edit fields of a record
    Update {
        /// Record id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        nip: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long)]
        school: Option<String>,

        #[arg(long)]
        retirement_date: Option<NaiveDate>,

        #[arg(long)]
        status: Option<ProgressStatus>,

        #[arg(long, conflicts_with = "clear_link")]
        document_link: Option<String>,

        /// Remove the document link
        #[arg(long)]
        clear_link: bool,
    },

    /// Set the status of one or more records
    SetStatus {
        /// New status ("Dalam Proses", "approved", ...)
        status: ProgressStatus,

        /// Record ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Delete one or more records
    Delete {
        /// Record ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Show summary statistics
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export records to an .xlsx spreadsheet
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output filename (defaults to a timestamped name)
        #[arg(short, long)]
        output: Option<String>,

        /// Leave out the document link column
        #[arg(long)]
        no_links: bool,
    },
}

/// Filter criteria shared by list, stats and export
#[derive(ClapArgs, Debug, Default)]
struct FilterArgs {
    /// Free-text search over name, NIP, position, school and status
    #[arg(short, long, default_value = "")]
    search: String,

    /// Earliest retirement date (inclusive)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Latest retirement date (inclusive)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Only this status
    #[arg(long)]
    status: Option<ProgressStatus>,
}

impl FilterArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_text: self.search.clone(),
            start_date: self.from,
            end_date: self.to,
            status: self.status.map_or(StatusFilter::All, StatusFilter::Only),
        }
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,retiretrack=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("retiretrack v{}", retiretrack::VERSION);
    tracing::debug!("Data directory: {}", args.data_dir.display());

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .export_dir(&args.export_dir)
        .build();

    let mut workspace = match Workspace::open(config) {
        Ok(w) => w,
        Err(e) => {
            tracing::error!("Failed to open workspace: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut workspace, args.command) {
        match e {
            TrackerError::Validation(report) => {
                for (field, message) in report.errors() {
                    eprintln!("{}: {}", field, message);
                }
            }
            TrackerError::Export(_) => {
                eprintln!("Gagal mengekspor data. Silakan coba lagi.");
            }
            other => tracing::error!("{}", other),
        }
        std::process::exit(1);
    }
}

fn run(workspace: &mut Workspace<retiretrack::storage::FileStorage>, command: Commands) -> Result<()> {
    match command {
        Commands::Add {
            photo,
            name,
            nip,
            position,
            school,
            retirement_date,
            document_link,
        } => {
            let form = TeacherForm {
                photo: Some(PhotoUpload::from_path(&photo)?),
                name,
                nip,
                position,
                school,
                retirement_date,
                document_link,
            };

            if workspace.nip_exists(form.nip.trim(), None) {
                eprintln!("Peringatan: NIP {} sudah terdaftar", form.nip.trim());
            }

            let teacher = workspace.submit(form)?;
            println!("{}", teacher.id);
        }

        Commands::List { filter, sort, desc } => {
            workspace.set_filters(filter.criteria());
            workspace.set_sort(SortConfig {
                field: sort,
                direction: if desc { SortDirection::Desc } else { SortDirection::Asc },
            });

            let view = workspace.view();
            for teacher in &view {
                print_row(teacher);
            }
            eprintln!("{} of {} records", view.len(), workspace.records().len());
        }

        Commands::Update {
            id,
            name,
            nip,
            position,
            school,
            retirement_date,
            status,
            document_link,
            clear_link,
        } => {
            let patch = TeacherPatch {
                photo: None,
                name: name.map(|v| v.trim().to_string()),
                nip: nip.map(|v| v.trim().to_string()),
                position: position.map(|v| v.trim().to_string()),
                school: school.map(|v| v.trim().to_string()),
                retirement_date,
                progress_status: status,
                document_link: if clear_link {
                    Some(None)
                } else {
                    document_link.map(|v| Some(v.trim().to_string()))
                },
            };

            if let Some(nip) = &patch.nip {
                if workspace.nip_exists(nip, Some(&id)) {
                    eprintln!("Peringatan: NIP {} sudah terdaftar", nip);
                }
            }

            match workspace.update(&id, patch) {
                Some(teacher) => print_row(&teacher),
                None => return Err(TrackerError::NotFound(id)),
            }
        }

        Commands::SetStatus { status, ids } => {
            let count = workspace.update_many(&ids, status);
            println!("{} records set to {}", count, status);
        }

        Commands::Delete { ids } => {
            let count = workspace.delete_many(&ids);
            println!("{} records deleted", count);
        }

        Commands::Stats { filter } => {
            workspace.set_filters(filter.criteria());
            let stats = workspace.statistics(Local::now().date_naive());

            println!("Total:              {}", stats.total);
            println!("Filtered:           {}", stats.filtered);
            println!("Retiring this year: {}", stats.retiring_this_year);
            for (status, count) in &stats.status_counts {
                println!("  {:<16} {}", status.label(), count);
            }
        }

        Commands::Export {
            filter,
            output,
            no_links,
        } => {
            let criteria = filter.criteria();
            let filtered = criteria.is_active();
            workspace.set_filters(criteria);

            let mut options = ExportOptions::from_config(workspace.config());
            if no_links {
                options = options.with_document_links(false);
            }
            if let Some(name) = output {
                options = options.with_filename(name);
            }

            let path = if filtered {
                workspace.export_view(&options)?
            } else {
                workspace.export_all(&options)?
            };
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn print_row(teacher: &Teacher) {
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        teacher.id,
        teacher.name,
        teacher.nip,
        teacher.position,
        teacher.school,
        teacher.retirement_date,
        teacher.progress_status,
    );
}
