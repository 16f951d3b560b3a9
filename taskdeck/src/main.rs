//! `TaskDeck` — single-user task tracker.
//!
//! A thin command-line surface over the state stores: each invocation
//! builds the app, restores persisted state, dispatches one operation,
//! and prints a plain-text result.
//!
//! ```bash
//! # Track some work
//! taskdeck add "Fix login bug" --priority high --category work
//! taskdeck list --scope today --view active
//! taskdeck stats
//!
//! # Demo accounts: john@example.com / jane@example.com, password123
//! taskdeck login john@example.com password123
//!
//! # Weather readout (needs an API key and coordinates)
//! OPENWEATHER_API_KEY=... taskdeck weather --latitude 37.77 --longitude -122.42
//! ```

use std::sync::Arc;

use chrono::{Local, NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand};

use taskdeck::app::App;
use taskdeck::auth::MockDirectory;
use taskdeck::config::{CliArgs, ClientConfig};
use taskdeck::storage::FileStorage;
use taskdeck::view::{visible_tasks, Completion, Scope, TaskFilter, TaskStats};
use taskdeck::weather::{OpenWeatherProvider, StaticLocator};
use taskdeck_model::{Priority, Task, TaskId, UserPatch};

#[derive(Parser)]
#[command(version, about = "Single-user task tracker with derived views and local weather")]
struct Cli {
    #[command(flatten)]
    args: CliArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a task.
    Add {
        /// Task text.
        text: String,
        /// Priority: low, medium, or high.
        #[arg(long, default_value = "medium")]
        priority: Priority,
        /// Due date (YYYY-MM-DD).
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Category label; may be given multiple times.
        #[arg(long = "category")]
        categories: Vec<String>,
    },
    /// List tasks through the view pipeline.
    List {
        /// Scope: all, today, upcoming, or favorites.
        #[arg(long, default_value = "all")]
        scope: Scope,
        /// Completion filter: all, active, or completed.
        #[arg(long = "view", default_value = "all")]
        completion: Completion,
        /// Free-text search query.
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Toggle a task's completed flag.
    Toggle {
        /// Task id.
        id: String,
    },
    /// Delete a task.
    Rm {
        /// Task id.
        id: String,
    },
    /// Change a task's priority.
    Priority {
        /// Task id.
        id: String,
        /// New priority: low, medium, or high.
        priority: Priority,
    },
    /// Toggle a task's favorite flag.
    Fav {
        /// Task id.
        id: String,
    },
    /// Show aggregate counters.
    Stats,
    /// Log in with email and password.
    Login {
        /// Account email.
        email: String,
        /// Account password.
        password: String,
    },
    /// Register a new account (logged in immediately).
    Register {
        /// Display name.
        name: String,
        /// Account email.
        email: String,
        /// Account password.
        password: String,
    },
    /// Log out and forget the persisted session.
    Logout,
    /// Show the current session.
    Whoami,
    /// Update profile fields of the logged-in user.
    Profile {
        /// New display name.
        #[arg(long)]
        name: Option<String>,
        /// New email address.
        #[arg(long)]
        email: Option<String>,
        /// New biography.
        #[arg(long)]
        bio: Option<String>,
        /// New location.
        #[arg(long)]
        location: Option<String>,
        /// New phone number.
        #[arg(long)]
        phone: Option<String>,
        /// New avatar URL.
        #[arg(long)]
        avatar: Option<String>,
    },
    /// Fetch and show the local weather.
    Weather,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ClientConfig::load(&cli.args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let weather_configured = config.to_weather_setup().is_some();
    let (locator, provider) = config.to_weather_setup().unwrap_or_else(|| {
        // Placeholder wiring; the weather command refuses to run with it.
        (
            StaticLocator::new(0.0, 0.0),
            OpenWeatherProvider::with_endpoint(
                config.weather_endpoint.clone(),
                String::new(),
                config.weather_units.clone(),
            ),
        )
    });

    let storage = Arc::new(FileStorage::new(&config.storage_dir));
    let mut app = App::with_geo_timeout(
        storage,
        MockDirectory::seeded(),
        locator,
        provider,
        config.geolocation_timeout,
    );
    app.restore();

    if let Err(message) = run(&mut app, cli.command, weather_configured).await {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

/// Dispatches one command against the restored app. Returns a
/// user-facing message on failure.
#[allow(clippy::too_many_lines)]
async fn run<S, D, G, P>(
    app: &mut App<S, D, G, P>,
    command: Command,
    weather_configured: bool,
) -> Result<(), String>
where
    S: taskdeck::storage::StorageAdapter,
    D: taskdeck::auth::CredentialDirectory,
    G: taskdeck::weather::Geolocator,
    P: taskdeck::weather::WeatherProvider,
{
    let today = Local::now().date_naive();

    match command {
        Command::Add {
            text,
            priority,
            due,
            categories,
        } => {
            let mut task = Task::new(text, priority);
            task.due_date = due.and_then(|d| {
                d.and_hms_opt(0, 0, 0)
                    .map(|dt| Utc.from_utc_datetime(&dt))
            });
            if !categories.is_empty() {
                task.categories = Some(categories);
            }
            let id = task.id.clone();
            app.tasks.add(task).map_err(|e| e.to_string())?;
            println!("added {id}");
        }
        Command::List {
            scope,
            completion,
            search,
        } => {
            let filter = TaskFilter {
                scope,
                completion,
                query: search,
            };
            let visible = visible_tasks(app.tasks.tasks(), &filter, today);
            if visible.is_empty() {
                println!("no matching tasks");
            }
            for task in visible {
                println!("{}", format_task(task));
            }
        }
        Command::Toggle { id } => {
            app.tasks
                .toggle_completed(&TaskId::new(id))
                .map_err(|e| e.to_string())?;
        }
        Command::Rm { id } => {
            app.tasks
                .delete(&TaskId::new(id))
                .map_err(|e| e.to_string())?;
        }
        Command::Priority { id, priority } => {
            app.tasks
                .set_priority(&TaskId::new(id), priority)
                .map_err(|e| e.to_string())?;
        }
        Command::Fav { id } => {
            app.tasks
                .toggle_favorite(&TaskId::new(id))
                .map_err(|e| e.to_string())?;
        }
        Command::Stats => {
            let stats = TaskStats::compute(app.tasks.tasks(), today);
            println!("total:          {}", stats.total);
            println!("pending:        {}", stats.pending);
            println!("completed:      {}", stats.completed);
            println!("high priority:  {}", stats.high_priority);
            println!("today:          {} ({} done)", stats.today, stats.today_completed);
            println!("completion:     {:.0}%", stats.completion_rate * 100.0);
        }
        Command::Login { email, password } => {
            let user = app
                .auth
                .login(&email, &password)
                .await
                .map_err(|e| e.to_string())?;
            println!("logged in as {} <{}>", user.name, user.email);
        }
        Command::Register {
            name,
            email,
            password,
        } => {
            let user = app
                .auth
                .register(&name, &email, &password)
                .await
                .map_err(|e| e.to_string())?;
            println!("registered and logged in as {} <{}>", user.name, user.email);
        }
        Command::Logout => {
            app.auth.logout();
            println!("logged out");
        }
        Command::Whoami => match app.auth.user() {
            Some(user) => {
                println!("{} <{}>", user.name, user.email);
                if let Some(bio) = &user.bio {
                    println!("  {bio}");
                }
                if let Some(location) = &user.location {
                    println!("  {location}");
                }
            }
            None => println!("not logged in"),
        },
        Command::Profile {
            name,
            email,
            bio,
            location,
            phone,
            avatar,
        } => {
            let patch = UserPatch {
                name,
                email,
                bio,
                location,
                phone,
                avatar,
            };
            let user = app.auth.update_user(&patch).await.map_err(|e| e.to_string())?;
            println!("profile updated for {} <{}>", user.name, user.email);
        }
        Command::Weather => {
            if !weather_configured {
                return Err(
                    "weather is not configured: set an API key and coordinates".to_string()
                );
            }
            app.weather.fetch().await.map_err(|e| e.to_string())?;
            if let Some(snapshot) = app.weather.data() {
                println!("{}: {:.0}°, {}", snapshot.location, snapshot.temperature, snapshot.description);
                println!("feels like {:.0}°, humidity {}%", snapshot.feels_like, snapshot.humidity);
            }
        }
    }
    Ok(())
}

/// One-line task rendering for `list`.
fn format_task(task: &Task) -> String {
    let check = if task.completed { "x" } else { " " };
    let star = if task.favorite { " *" } else { "" };
    let categories = task
        .categories
        .as_ref()
        .map(|c| format!(" [{}]", c.join(", ")))
        .unwrap_or_default();
    format!(
        "[{check}] {}  {} ({}){categories}{star}",
        task.id, task.text, task.priority
    )
}
