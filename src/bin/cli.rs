//! SportsBet CLI - bet tracker and sports calculators

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::path::PathBuf;
use tracing_subscriber::FmtSubscriber;

use sportsbet::core::{ActualAverageForm, CostanzaForm, ExpectedRunsForm};
use sportsbet::shell::APP_TITLE;
use sportsbet::storage::FileStore;
use sportsbet::{AppConfig, Bet, BetForm, BetStore, Destination};

#[derive(Parser)]
#[command(name = "sportsbet")]
#[command(author, version, about = "Bet tracker and sports calculators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// Path to the storage file (overrides SPORTSBET_STORE)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the menu destinations
    Menu,

    /// Expected runs from team averages and wind
    ExpectedRuns {
        /// Home team offense average
        #[arg(long, default_value = "")]
        offense_home: String,

        /// Home team defense average
        #[arg(long, default_value = "")]
        defense_home: String,

        /// Away team offense average
        #[arg(long, default_value = "")]
        offense_away: String,

        /// Away team defense average
        #[arg(long, default_value = "")]
        defense_away: String,

        /// Wind speed
        #[arg(long, default_value = "")]
        wind_speed: String,

        /// Wind gust
        #[arg(long, default_value = "")]
        wind_gust: String,

        /// Wind direction: in, out, or cross
        #[arg(long, default_value = "")]
        wind_direction: String,
    },

    /// Per-game value of a per-48-minute stat
    ActualAverage {
        /// Average minutes played per game
        #[arg(long, default_value = "")]
        minutes: String,

        /// Stat per 48 minutes
        #[arg(long, default_value = "")]
        stat_per_48: String,
    },

    /// Pick the opposite of your prediction
    Costanza {
        #[arg(long, default_value = "")]
        team_one: String,

        #[arg(long, default_value = "")]
        team_two: String,

        /// Your predicted winner
        #[arg(long, default_value = "")]
        prediction: String,
    },

    /// Record and list bets
    Bet {
        #[command(subcommand)]
        action: BetAction,
    },

    /// Show bet count and total staked
    Profile,
}

#[derive(Subcommand)]
enum BetAction {
    /// Add a bet
    Add {
        #[arg(short, long, default_value = "")]
        team: String,

        /// Bet amount
        #[arg(short, long, default_value = "")]
        amount: String,

        /// Predicted outcome
        #[arg(short, long, default_value = "")]
        outcome: String,
    },

    /// List recorded bets
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env().with_verbosity(cli.verbose);
    if let Some(path) = cli.store {
        config.store_path = path;
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    println!("{}", APP_TITLE.cyan().bold());
    println!();

    if cli.interactive {
        run_interactive(&config)?;
    } else if let Some(command) = cli.command {
        match command {
            Commands::Menu => list_destinations(),
            Commands::ExpectedRuns {
                offense_home,
                defense_home,
                offense_away,
                defense_away,
                wind_speed,
                wind_gust,
                wind_direction,
            } => {
                let form = ExpectedRunsForm {
                    offense_home,
                    defense_home,
                    offense_away,
                    defense_away,
                    wind_speed,
                    wind_gust,
                    wind_direction,
                };
                print_result(Destination::BaseballTools, &form.calculate());
            }
            Commands::ActualAverage {
                minutes,
                stat_per_48,
            } => {
                let form = ActualAverageForm {
                    minutes_played: minutes,
                    stat_per_48,
                };
                print_result(Destination::BasketballTool, &form.calculate());
            }
            Commands::Costanza {
                team_one,
                team_two,
                prediction,
            } => {
                let form = CostanzaForm {
                    team_one,
                    team_two,
                    prediction,
                };
                print_result(Destination::Costanza, &form.calculate());
            }
            Commands::Bet { action } => {
                let mut store = open_store(&config)?;
                match action {
                    BetAction::Add {
                        team,
                        amount,
                        outcome,
                    } => {
                        let mut form = BetForm::new(team, amount, outcome);
                        add_bet(&mut store, &mut form);
                    }
                    BetAction::List => print_bets(store.bets()),
                }
            }
            Commands::Profile => {
                let store = open_store(&config)?;
                print_profile(&store);
            }
        }
    } else {
        println!("Use --help for usage information or --interactive for interactive mode.");
    }

    Ok(())
}

fn open_store(config: &AppConfig) -> Result<BetStore<FileStore>> {
    let storage = FileStore::open(&config.store_path)
        .with_context(|| format!("Failed to open storage {:?}", config.store_path))?;
    Ok(BetStore::with_key(storage, config.storage_key.clone()))
}

fn list_destinations() {
    println!("{}", "Destinations:".yellow().bold());
    for (i, destination) in Destination::ALL.iter().enumerate() {
        println!("{:>3}. {}", i + 1, destination);
    }
}

fn print_result(destination: Destination, result: &str) {
    println!("{}", destination.title().yellow().bold());
    println!("{}", result);
}

fn add_bet(store: &mut BetStore<FileStore>, form: &mut BetForm) {
    let amount_text = form.amount_text.clone();
    match form.submit(store) {
        Some(bet) => println!(
            "{} {} (${:.2})",
            "Added bet:".green(),
            bet.team_name,
            bet.amount
        ),
        None => println!(
            "{}",
            format!("Bet amount {:?} is not a number; nothing added.", amount_text).red()
        ),
    }
}

fn print_bets(bets: &[Bet]) {
    println!("{}", Destination::BetTracker.title().yellow().bold());

    if bets.is_empty() {
        println!("{}", "No bets recorded yet.".dimmed());
        return;
    }

    for bet in bets {
        println!("{}", bet.team_name.bold());
        println!("  Bet Amount: ${:.2}", bet.amount);
        println!("  Predicted Outcome: {}", bet.predicted_outcome);
    }
}

fn print_profile(store: &BetStore<FileStore>) {
    let summary = store.summary();
    println!("{}", Destination::UserProfile.title().yellow().bold());
    println!("Bets recorded: {}", summary.bet_count);
    println!("Total staked: ${:.2}", summary.total_amount);
    println!("{}", format!("Saved in {:?}", store.storage().path()).dimmed());
}

fn run_interactive(config: &AppConfig) -> Result<()> {
    println!("{}", "Interactive mode".green().bold());
    println!();

    let theme = ColorfulTheme::default();
    let mut store = open_store(config)?;

    let mut options: Vec<&str> = Destination::ALL.iter().map(|d| d.title()).collect();
    options.push("Quit");

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("Where to?")
            .items(&options)
            .default(0)
            .interact()?;

        let Some(destination) = Destination::ALL.get(selection).copied() else {
            println!("Goodbye!");
            break;
        };

        println!();
        match destination {
            Destination::BaseballTools => {
                let form = ExpectedRunsForm {
                    offense_home: prompt(&theme, "Home team offense average")?,
                    defense_home: prompt(&theme, "Home team defense average")?,
                    offense_away: prompt(&theme, "Away team offense average")?,
                    defense_away: prompt(&theme, "Away team defense average")?,
                    wind_speed: prompt(&theme, "Wind speed")?,
                    wind_gust: prompt(&theme, "Wind gust")?,
                    wind_direction: prompt(&theme, "Wind direction (in/out/cross)")?,
                };
                print_result(destination, &form.calculate());
            }
            Destination::BasketballTool => {
                let form = ActualAverageForm {
                    minutes_played: prompt(&theme, "Average minutes played per game")?,
                    stat_per_48: prompt(&theme, "Stat per 48 minutes")?,
                };
                print_result(destination, &form.calculate());
            }
            Destination::Costanza => {
                let form = CostanzaForm {
                    team_one: prompt(&theme, "Team one")?,
                    team_two: prompt(&theme, "Team two")?,
                    prediction: prompt(&theme, "Your predicted winner")?,
                };
                print_result(destination, &form.calculate());
            }
            Destination::BetTracker => run_bet_tracker(&theme, &mut store)?,
            Destination::UserProfile => print_profile(&store),
        }
        println!();
    }

    Ok(())
}

fn run_bet_tracker(theme: &ColorfulTheme, store: &mut BetStore<FileStore>) -> Result<()> {
    loop {
        print_bets(store.bets());
        println!();

        let choice = Select::with_theme(theme)
            .with_prompt("Bet Tracker")
            .items(&["Add bet", "Back"])
            .default(0)
            .interact()?;

        if choice != 0 {
            return Ok(());
        }

        let mut form = BetForm::new(
            prompt(theme, "Team Name")?,
            prompt(theme, "Bet Amount")?,
            prompt(theme, "Predicted Outcome")?,
        );
        add_bet(store, &mut form);
        println!();
    }
}

/// Free text prompt that accepts an empty answer
fn prompt(theme: &ColorfulTheme, label: &str) -> Result<String> {
    let value: String = Input::with_theme(theme)
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
