//! Audit tool for readingroom's route table and session stores.
//!
//! Three checks that otherwise only happen inside a running client:
//! what each role's navigation resolves to, whether the builtin route
//! table holds its structural invariants, and what a given session
//! store snapshot would do on startup.
//!
//! Configuration comes from CLI arguments first, then `AUDIT_*`
//! environment variables.

mod config;
mod error;
mod store_file;

use clap::{Parser, Subcommand};
use crate::config::AuditConfig;
use readingroom_core::Role;
use readingroom_navigation::{RouteEntry, RouteTable, authorized_routes};
use readingroom_session::{
    AuthState, HOME_PATH, NavigateOptions, Navigator, Rehydration, Session, SessionRehydrator,
    is_public_entry,
};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "readingroom-audit",
    about = "Audit readingroom navigation and session state"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the navigation each role resolves to.
    Routes {
        /// Restrict output to a single role.
        #[arg(long)]
        role: Option<String>,

        /// Emit JSON instead of a text listing.
        #[arg(long)]
        json: bool,
    },

    /// Validate the builtin route table's structural invariants.
    Check,

    /// Inspect a session store snapshot and replay startup rehydration.
    Session {
        /// Path to the snapshot (also: AUDIT_STORE_PATH).
        #[arg(long)]
        store: Option<PathBuf>,

        /// Path the client would be on when rehydrating.
        #[arg(long, default_value = "/")]
        path: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Routes { role, json } => run_routes(role.as_deref(), json),
        Command::Check => run_check(),
        Command::Session { store, path } => run_session(store, &path),
    }
}

fn run_routes(role_arg: Option<&str>, json: bool) -> ExitCode {
    let table = RouteTable::builtin();

    match role_arg {
        Some(name) => match name.parse::<Role>() {
            Ok(role) => print_role_routes(role, table.routes_for(role), json),
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        None => {
            if json {
                let mut map = serde_json::Map::new();
                for role in Role::ALL {
                    match serde_json::to_value(table.routes_for(role)) {
                        Ok(routes) => {
                            map.insert(role.as_str().to_string(), routes);
                        }
                        Err(e) => {
                            eprintln!("failed to serialize routes: {e}");
                            return ExitCode::FAILURE;
                        }
                    }
                }
                match serde_json::to_string_pretty(&serde_json::Value::Object(map)) {
                    Ok(out) => println!("{out}"),
                    Err(e) => {
                        eprintln!("failed to serialize routes: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                for role in Role::ALL {
                    print!("{}", render_role_routes(role, table.routes_for(role)));
                }
            }
            ExitCode::SUCCESS
        }
    }
}

fn print_role_routes(role: Role, routes: &[RouteEntry], json: bool) -> ExitCode {
    if json {
        match serde_json::to_string_pretty(routes) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("failed to serialize routes: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", render_role_routes(role, routes));
    }
    ExitCode::SUCCESS
}

fn render_role_routes(role: Role, routes: &[RouteEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{role} ({} entries)", routes.len());
    for entry in routes {
        let _ = writeln!(
            out,
            "  {:<18} {:<16} [{}]",
            entry.path(),
            entry.name(),
            entry.icon()
        );
        for sub in entry.sub_routes() {
            let _ = writeln!(
                out,
                "    {:<16} {:<16} [{}]",
                sub.path(),
                sub.name(),
                sub.icon()
            );
        }
    }
    out
}

fn run_check() -> ExitCode {
    let table = RouteTable::builtin();

    if let Err(e) = table.validate() {
        eprintln!("route table invalid: {e}");
        return ExitCode::FAILURE;
    }

    // Every role's list must end in the shared settings group.
    for role in Role::ALL {
        let tail_ok = table
            .routes_for(role)
            .last()
            .is_some_and(|entry| entry.is_group() && entry.path() == "/settings");
        if !tail_ok {
            eprintln!("role '{role}' does not end in the shared settings group");
            return ExitCode::FAILURE;
        }
    }

    println!("route table is structurally valid");
    for role in Role::ALL {
        let routes = table.routes_for(role);
        let paths: usize = routes.iter().map(|e| e.flattened_paths().len()).sum();
        println!("  {role}: {} entries ({paths} paths)", routes.len());
    }
    ExitCode::SUCCESS
}

/// Navigator standing in for the client's router during replay. The
/// rehydration outcome carries everything worth reporting, so
/// navigations need no recording here.
struct ProbeNavigator {
    path: String,
}

impl Navigator for ProbeNavigator {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn navigate(&self, _path: &str, _options: NavigateOptions) {}
}

fn run_session(store_arg: Option<PathBuf>, path: &str) -> ExitCode {
    let env_config = match AuditConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(store_path) = store_arg.or(env_config.store_path) else {
        eprintln!("no store snapshot given; pass --store or set AUDIT_STORE_PATH");
        return ExitCode::FAILURE;
    };

    tracing::debug!(snapshot = %store_path.display(), "loading store snapshot");

    let store = match store_file::load_store(&store_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let session = Session::load(&store);

    println!("store: {}", store_path.display());
    println!(
        "path: {path} ({})",
        if is_public_entry(path) {
            "public entry page"
        } else {
            "protected"
        }
    );
    println!(
        "token: {}",
        if session.is_active() { "present" } else { "absent" }
    );
    println!("user: {}", describe_user(&session));
    match session.role() {
        Some(role) => println!(
            "role: {role} ({} authorized routes)",
            authorized_routes(Some(role)).len()
        ),
        None => println!("role: none (0 authorized routes)"),
    }

    let navigator = ProbeNavigator {
        path: path.to_string(),
    };
    let rehydrator = SessionRehydrator::new(store, AuthState::new(), navigator);
    println!("rehydration: {}", describe_rehydration(rehydrator.observe()));

    ExitCode::SUCCESS
}

fn describe_user(session: &Session) -> String {
    match session.user() {
        Some(user) if !user.name().is_empty() => format!("{} <{}>", user.name(), user.email()),
        Some(_) => "unnamed".to_string(),
        None => "none".to_string(),
    }
}

fn describe_rehydration(outcome: Rehydration) -> String {
    match outcome {
        Rehydration::NoSession => "no persisted session; nothing touched".to_string(),
        Rehydration::Restored { redirected: true } => {
            format!("restored, redirected to {HOME_PATH}")
        }
        Rehydration::Restored { redirected: false } => "restored in place".to_string(),
    }
}
