use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use worktrack::auth::{TokenSigner, generate_password};
use worktrack::config::ServerConfig;
use worktrack::server::{AppState, create_router};
use worktrack::store::{AdminSeed, DEFAULT_ADMIN_MAIL, SqliteStore, Store, seed};

#[derive(Parser)]
#[command(name = "worktrack")]
#[command(about = "A REST backend for tracking work schedules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Administrative commands
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Start the server
    Serve {
        /// TOML config file; flags override its values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long, short)]
        port: Option<u16>,

        /// Data directory for the database
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Drop every table and reseed before serving
        #[arg(long)]
        fresh: bool,

        /// Lifetime of session tokens in hours
        #[arg(long)]
        token_ttl_hours: Option<i64>,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// Initialize the database and create the administrator account
    Init {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: PathBuf,

        /// Mail of the administrator account
        #[arg(long, default_value = DEFAULT_ADMIN_MAIL)]
        admin_mail: String,

        /// Password of the administrator account. Prompted or generated when absent.
        #[arg(long)]
        admin_password: Option<String>,

        /// Drop every existing table first
        #[arg(long)]
        fresh: bool,

        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,
    },
}

fn prompt_password() -> anyhow::Result<String> {
    let password = inquire::Password::new("Administrator password:")
        .with_validator(|input: &str| {
            if input.is_empty() {
                Err("Password cannot be empty".into())
            } else {
                Ok(inquire::validator::Validation::Valid)
            }
        })
        .prompt()?;
    Ok(password)
}

fn print_generated_password(mail: &str, password: &str) {
    println!();
    println!("========================================");
    println!("Administrator {mail} password (save this, it won't be shown again):");
    println!();
    println!("  {password}");
    println!();
    println!("========================================");
    println!();
}

fn run_init(
    data_dir: PathBuf,
    admin_mail: String,
    admin_password: Option<String>,
    fresh: bool,
    non_interactive: bool,
) -> anyhow::Result<()> {
    fs::create_dir_all(&data_dir)?;

    let config = ServerConfig {
        data_dir,
        ..ServerConfig::default()
    };
    let store = SqliteStore::new(config.db_path())?;

    if fresh {
        store.reset()?;
    } else {
        store.initialize()?;
        if store.get_vacation_project()?.is_some() {
            bail!(
                "Database already initialized at {}. Use --fresh to start over.",
                config.db_path().display()
            );
        }
    }

    let (password, generated) = match admin_password {
        Some(password) => (password, false),
        None if !non_interactive => (prompt_password()?, false),
        None => (generate_password(), true),
    };

    seed(
        &store,
        &AdminSeed {
            mail: admin_mail.clone(),
            password: password.clone(),
        },
    )?;

    println!("Initialized database at {}", config.db_path().display());
    if generated {
        print_generated_password(&admin_mail, &password);
    }

    Ok(())
}

async fn run_serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;
    fs::create_dir_all(&config.data_dir)?;

    let store = SqliteStore::new(config.db_path())?;

    if config.fresh {
        info!("Resetting database at {}", config.db_path().display());
        store.reset()?;

        let password = generate_password();
        seed(
            &store,
            &AdminSeed {
                mail: config.admin_mail.clone(),
                password: password.clone(),
            },
        )?;
        print_generated_password(&config.admin_mail, &password);
    } else {
        store.initialize()?;
    }

    if store.get_vacation_project()?.is_none() {
        bail!("Database not initialized. Run 'worktrack admin init' first.");
    }

    let state = Arc::new(AppState::new(
        Arc::new(store),
        TokenSigner::random(config.token_ttl()),
    ));

    let app = create_router(state);
    let addr = config.socket_addr()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("worktrack=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Admin { command } => match command {
            AdminCommands::Init {
                data_dir,
                admin_mail,
                admin_password,
                fresh,
                non_interactive,
            } => {
                run_init(data_dir, admin_mail, admin_password, fresh, non_interactive)?;
            }
        },
        Commands::Serve {
            config,
            host,
            port,
            data_dir,
            fresh,
            token_ttl_hours,
        } => {
            let mut config = match config {
                Some(path) => ServerConfig::from_file(&path)?,
                None => ServerConfig::default(),
            };

            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(data_dir) = data_dir {
                config.data_dir = data_dir;
            }
            if let Some(hours) = token_ttl_hours {
                config.token_ttl_hours = hours;
            }
            config.fresh |= fresh;

            run_serve(config).await?;
        }
    }

    Ok(())
}
