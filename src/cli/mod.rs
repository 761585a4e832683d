//! Command-line interface for the cultural calendar.
//!
//! Each invocation is one session: submitted events and bookings live only
//! for the duration of the command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::booking::{BookOutcome, PaymentFields};
use crate::catalog::{parse_day, EventView, ALL_CATEGORIES};
use crate::config;
use crate::domain::{AudienceMode, Event, EventId, TravelerRecord};
use crate::session::Session;
use crate::submission::{PendingUpload, SubmissionForm};

/// cultural-calendar - Monastery event calendar and booking
#[derive(Parser, Debug)]
#[command(name = "cultural-calendar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List events, optionally filtered by date or category
    Events {
        /// Show only events on this day (YYYY-MM-DD); overrides --category
        #[arg(short, long)]
        date: Option<String>,

        /// Category id (e.g. festival, ritual) or free text
        #[arg(short, long, default_value = ALL_CATEGORIES)]
        category: String,

        /// Audience mode used for prices
        #[arg(short, long, value_enum)]
        mode: Option<AudienceArg>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show how many events each category holds
    Categories,

    /// Submit an event from a YAML form
    Submit {
        /// Form file (details/schedule/pricing/add_ons sections)
        form: PathBuf,

        /// Image to attach
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Audience mode used to pick the stored price
        #[arg(short, long, value_enum)]
        mode: Option<AudienceArg>,

        /// Also export the resulting catalog
        #[arg(long)]
        export: bool,
    },

    /// Book one or more events (payment is simulated)
    Book {
        /// Event IDs
        #[arg(required = true)]
        event_ids: Vec<EventId>,

        /// Traveler name
        #[arg(short, long)]
        name: String,

        /// Traveler email
        #[arg(short, long)]
        email: String,

        /// Traveler phone
        #[arg(short, long, default_value = "")]
        phone: String,
    },

    /// Export the catalog as an ICS file
    Export {
        /// Output directory (defaults to the configured export directory)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Forms to submit before exporting
        #[arg(short, long)]
        form: Vec<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Audience mode for CLI (maps to AudienceMode)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AudienceArg {
    /// Regular visitor
    Tourist,

    /// Research access
    Researcher,
}

impl From<AudienceArg> for AudienceMode {
    fn from(a: AudienceArg) -> Self {
        match a {
            AudienceArg::Tourist => AudienceMode::Tourist,
            AudienceArg::Researcher => AudienceMode::Researcher,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Events {
                date,
                category,
                mode,
                json,
            } => list_events(date, category, mode, json).await,
            Commands::Categories => list_categories().await,
            Commands::Submit {
                form,
                image,
                mode,
                export,
            } => submit_event(&form, image, mode, export).await,
            Commands::Book {
                event_ids,
                name,
                email,
                phone,
            } => book_events(&event_ids, name, email, phone).await,
            Commands::Export { out, stdout, form } => export_calendar(out, stdout, &form).await,
            Commands::Config => show_config().await,
        }
    }
}

/// Mode from the flag, falling back to the configured default
fn resolve_mode(mode: Option<AudienceArg>) -> Result<AudienceMode> {
    match mode {
        Some(m) => Ok(m.into()),
        None => Ok(config::config()?.default_mode),
    }
}

/// Load a submission form from YAML
fn load_form(path: &Path) -> Result<SubmissionForm> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse form: {}", path.display()))
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let cut: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

fn print_events(events: &[&Event], mode: AudienceMode) {
    println!(
        "{:<4} {:<11} {:<34} {:<24} {:<12} {:<10}",
        "ID", "DATE", "TITLE", "MONASTERY", "SEATS", "PRICE"
    );
    println!("{}", "-".repeat(100));

    for event in events {
        println!(
            "{:<4} {:<11} {:<34} {:<24} {:<12} {:<10}",
            event.id.to_string(),
            event.date.to_string(),
            truncate(&event.title, 34),
            truncate(&event.monastery, 24),
            format!("{}/{}", event.seats_left(), event.capacity),
            event.price(mode)
        );
    }
}

/// List events under a date or category view
async fn list_events(
    date: Option<String>,
    category: String,
    mode: Option<AudienceArg>,
    json: bool,
) -> Result<()> {
    let mode = resolve_mode(mode)?;
    let mut session = Session::new();

    let view = match date {
        Some(text) => {
            let day = parse_day(&text).with_context(|| format!("Invalid date: {}", text))?;
            EventView::on_date(day)
        }
        None => EventView::in_category(category),
    };
    session.set_view(view);

    let events = session.visible_events();

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("No events match this view");
        return Ok(());
    }

    print_events(&events, mode);
    println!("\nShowing {} of {} events", events.len(), session.catalog().len());

    Ok(())
}

/// Show category counts for the whole catalog
async fn list_categories() -> Result<()> {
    let session = Session::new();

    println!("{:<10} {:<18} {:>5}", "ID", "LABEL", "COUNT");
    println!("{}", "-".repeat(35));
    for entry in session.category_counts() {
        println!("{:<10} {:<18} {:>5}", entry.id, entry.label, entry.count);
    }

    Ok(())
}

/// Submit one event form, then show the updated listing
async fn submit_event(
    form_path: &Path,
    image: Option<PathBuf>,
    mode: Option<AudienceArg>,
    export: bool,
) -> Result<()> {
    let mode = resolve_mode(mode)?;
    let mut form = load_form(form_path)?;
    if let Some(path) = image {
        form.attach_image(PendingUpload::new(path));
    }

    let mut session = Session::new();
    let event = session.submit(form, mode)?;

    println!("Submitted event {} - {}", event.id, event.title);
    println!("  When:  {} {}", event.date, event.time);
    println!("  Where: {}, {}", event.monastery, event.location);
    println!("  Price: {}", event.price(mode));
    if !event.tags.is_empty() {
        println!("  Tags:  {}", event.tags.join(", "));
    }
    println!();
    print_events(&session.visible_events(), mode);

    if export {
        let cfg = config::config()?;
        let path = session.export(&cfg.export).write_to(&cfg.export_dir).await?;
        eprintln!("\n[Calendar written to {}]", path.display());
    }

    Ok(())
}

/// Book each event with the same traveler, confirming immediately
async fn book_events(
    event_ids: &[EventId],
    name: String,
    email: String,
    phone: String,
) -> Result<()> {
    let mut session = Session::new();
    let traveler = TravelerRecord {
        phone,
        ..TravelerRecord::new(name.clone(), email)
    };

    for &event_id in event_ids {
        match session.book_now(event_id) {
            Ok(BookOutcome::AlreadyBooked(id)) => {
                println!("Event {} is already booked", id);
                continue;
            }
            Ok(BookOutcome::FormOpened { .. }) => {
                if let Some(event) = session.catalog().get(event_id) {
                    if event.is_sold_out() {
                        println!("Note: event {} is listed as full", event_id);
                    }
                }
            }
            Err(e) => {
                println!("Cannot book event {}: {}", event_id, e);
                continue;
            }
        }

        if let Some(draft) = session.booking_mut().draft_mut() {
            draft.traveler = traveler.clone();
            draft.payment = PaymentFields {
                card_holder: name.clone(),
                card_number: "4111111111111111".to_string(),
                expiry: "12/30".to_string(),
                cvv: "000".to_string(),
            };
        }

        let ready = session.booking().draft().map(|d| d.validate());
        match ready {
            Some(Ok(())) => {
                let id = session.booking_mut().confirm_booking()?;
                println!("Booked event {}", id);
            }
            Some(Err(e)) => {
                session.booking_mut().cancel();
                println!("Cannot book event {}: {}", event_id, e);
            }
            None => {}
        }
    }

    let booked: Vec<String> = session
        .booking()
        .booked()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("\nBooked events: [{}]", booked.join(", "));

    Ok(())
}

/// Export the catalog, after submitting any given forms
async fn export_calendar(out: Option<PathBuf>, stdout: bool, forms: &[PathBuf]) -> Result<()> {
    let cfg = config::config()?;
    let mut session = Session::new();

    for path in forms {
        let form = load_form(path)?;
        session
            .submit(form, cfg.default_mode)
            .with_context(|| format!("Rejected form: {}", path.display()))?;
    }

    let file = session.export(&cfg.export);

    if stdout {
        println!("{}", file.body());
        return Ok(());
    }

    let dir = out.unwrap_or_else(|| cfg.export_dir.clone());
    let path = file.write_to(&dir).await?;
    eprintln!(
        "[Exported {} events to {} ({})]",
        session.catalog().len(),
        path.display(),
        file.mime_type()
    );

    Ok(())
}

async fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("Cultural Calendar Configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Audience:");
    println!("  Default mode:    {}", cfg.default_mode);
    println!();
    println!("Export:");
    println!("  Directory:       {}", cfg.export_dir.display());
    println!("  Product ID:      {}", cfg.export.product_id);
    println!("  Time convention: {:?}", cfg.export.time_convention);

    Ok(())
}
