//! freesql CLI
//!
//! Renders a single INSERT, UPDATE, DELETE or template statement and prints
//! the SQL together with the number of positional parameters it expects.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use freesql_core::{BuilderOptions, BuiltSql, Dialect, FreeSqlBuilder};

/// Free-form SQL statement assembler.
#[derive(Parser)]
#[command(name = "freesql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target dialect: generic, mysql, sqlserver, oracle, postgresql or sqlite.
    #[arg(short, long, env = "FREESQL_DIALECT")]
    dialect: Option<Dialect>,

    /// Reject statement calls made out of order.
    #[arg(long)]
    strict: bool,

    /// JSON file with builder options. Flags take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the statement as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// INSERT INTO table (columns...) VALUES (?...)
    Insert {
        /// Table name.
        #[arg(short, long)]
        table: String,

        /// Comma-separated column names.
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,
    },

    /// UPDATE table SET column=?... [where]
    Update {
        /// Table name.
        #[arg(short, long)]
        table: String,

        /// Comma-separated column names to assign.
        #[arg(short, long, value_delimiter = ',')]
        set: Vec<String>,

        /// Raw WHERE clause, appended verbatim (`WHERE id IN ?`).
        #[arg(short = 'w', long = "where")]
        filter: Option<String>,
    },

    /// DELETE FROM table [where]
    Delete {
        /// Table name.
        #[arg(short, long)]
        table: String,

        /// Raw WHERE clause, appended verbatim.
        #[arg(short = 'w', long = "where")]
        filter: Option<String>,
    },

    /// Raw SQL template, appended verbatim.
    Template {
        /// The SQL text.
        sql: String,
    },
}

fn read_options(path: &Path) -> anyhow::Result<BuilderOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

fn load_options(cli: &Cli) -> anyhow::Result<BuilderOptions> {
    let mut options = match &cli.config {
        Some(path) => read_options(path)?,
        None => BuilderOptions::default(),
    };
    if let Some(dialect) = cli.dialect {
        options.dialect = dialect;
    }
    if cli.strict {
        options.strict = true;
    }
    Ok(options)
}

fn assemble(command: &Commands, options: BuilderOptions) -> freesql_core::Result<BuiltSql> {
    let mut b = FreeSqlBuilder::with_options(options);
    match command {
        Commands::Insert { table, columns } => {
            b.insert_into(table)?.values(columns)?;
        }
        Commands::Update { table, set, filter } => {
            b.update(table)?.set(set)?;
            if let Some(filter) = filter {
                b.set_template(filter.as_str());
            }
        }
        Commands::Delete { table, filter } => {
            b.delete_from(table)?;
            if let Some(filter) = filter {
                b.set_template(filter.as_str());
            }
        }
        Commands::Template { sql } => {
            b.set_template(sql.as_str());
        }
    }
    b.build()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = load_options(&cli)?;
    debug!(dialect = %options.dialect, strict = options.strict, "builder options");

    let built = assemble(&cli.command, options)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&built)?);
    } else {
        println!("{}", built.sql);
        println!("-- placeholders: {}", built.placeholder_count);
    }
    Ok(())
}
