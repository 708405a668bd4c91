use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use deck::{CoinFlipOracle, Decision, SwipeDeck};
use profiles::DeveloperProfile;
use session::{FeedEvent, FeedSession};
use std::path::PathBuf;
use std::time::Duration;

/// GitMate - swipe-deck engine for developer matching
#[derive(Parser)]
#[command(name = "gitmate")]
#[command(about = "Swipe-deck matching engine demo", long_about = None)]
struct Cli {
    /// Path to a JSON deck file (defaults to the built-in sample deck)
    #[arg(short, long)]
    deck: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the candidates in the deck
    Show,

    /// Replay a gesture script against a feed session
    Replay {
        /// Whitespace-separated tokens: drag:<offset>, skip, connect,
        /// superlike, restart
        #[arg(long)]
        gestures: String,

        /// Seed for the match oracle (omit for a random session)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Measure the observed match rate over many connect decisions
    Simulate {
        /// Number of connect decisions to resolve
        #[arg(long, default_value = "10000")]
        trials: usize,

        /// Seed for the match oracle
        #[arg(long)]
        seed: Option<u64>,

        /// Match probability for the oracle
        #[arg(long, default_value = "0.5")]
        probability: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let candidates = match &cli.deck {
        Some(path) => profiles::load_profiles(path)
            .with_context(|| format!("Failed to load deck from {}", path.display()))?,
        None => profiles::sample_profiles(),
    };

    match cli.command {
        Commands::Show => handle_show(&candidates),
        Commands::Replay { gestures, seed } => handle_replay(candidates, &gestures, seed).await?,
        Commands::Simulate {
            trials,
            seed,
            probability,
        } => handle_simulate(candidates, trials, seed, probability)?,
    }

    Ok(())
}

/// Handle the 'show' command
fn handle_show(candidates: &[DeveloperProfile]) {
    println!("{}", format!("Deck ({} candidates):", candidates.len()).bold().blue());
    for (position, profile) in candidates.iter().enumerate() {
        println!("{}. {}", (position + 1).to_string().green(), profile.summary());
        println!("   {} — {}", profile.location, profile.top_languages.join(", "));
    }
}

/// Handle the 'replay' command
async fn handle_replay(
    candidates: Vec<DeveloperProfile>,
    gestures: &str,
    seed: Option<u64>,
) -> Result<()> {
    let oracle = match seed {
        Some(seed) => CoinFlipOracle::with_seed(seed, 0.5),
        None => CoinFlipOracle::default(),
    };
    let (mut session, mut events) =
        FeedSession::new(candidates, profiles::sample_viewer(), Box::new(oracle));

    for token in gestures.split_whitespace() {
        if session.deck().is_exhausted() && token != "restart" {
            println!("{} deck exhausted; '{}' skipped", "!".yellow(), token);
            continue;
        }
        let focused = session
            .deck()
            .current()
            .map(|p| p.username.clone())
            .unwrap_or_default();

        match parse_gesture(token)? {
            Gesture::Drag(offset) => {
                session.begin_drag();
                session.update_drag(offset);
                match session.swipe(offset)? {
                    Some(resolution) => println!(
                        "{} drag {:+.0} on @{} -> {}",
                        "✓".green(),
                        offset,
                        focused,
                        resolution.decision.name()
                    ),
                    None => println!("{} drag {:+.0} on @{} -> snap-back", "·".cyan(), offset, focused),
                }
            }
            Gesture::Press(kind) => match session.press(kind)? {
                Some(_) => println!("{} {} @{}", "✓".green(), kind.name(), focused),
                None => println!("{} superlike @{} (coming soon)", "★".yellow(), focused),
            },
            Gesture::Restart => {
                session.restart()?;
                println!("{} restarted the deck", "↺".cyan());
            }
        }
    }

    // Let any pending match reveal fire before draining events.
    tokio::time::sleep(session::MATCH_REVEAL_DELAY + Duration::from_millis(50)).await;
    while let Ok(event) = events.try_recv() {
        if let FeedEvent::MatchFound { profile } = event {
            println!(
                "{} It's a match! You and {} both want to connect",
                "♥".green().bold(),
                profile.name.bold()
            );
        }
    }

    Ok(())
}

enum Gesture {
    Drag(f32),
    Press(Decision),
    Restart,
}

fn parse_gesture(token: &str) -> Result<Gesture> {
    if let Some(offset) = token.strip_prefix("drag:") {
        let offset: f32 = offset
            .parse()
            .with_context(|| format!("Invalid drag offset in '{token}'"))?;
        return Ok(Gesture::Drag(offset));
    }
    match token {
        "skip" => Ok(Gesture::Press(Decision::Skip)),
        "connect" => Ok(Gesture::Press(Decision::Connect)),
        "superlike" => Ok(Gesture::Press(Decision::Superlike)),
        "restart" => Ok(Gesture::Restart),
        _ => bail!("Unknown gesture token '{token}'"),
    }
}

/// Handle the 'simulate' command
fn handle_simulate(
    candidates: Vec<DeveloperProfile>,
    trials: usize,
    seed: Option<u64>,
    probability: f64,
) -> Result<()> {
    if candidates.is_empty() {
        bail!("Cannot simulate on an empty deck");
    }
    if !(0.0..=1.0).contains(&probability) {
        bail!("Probability must be within [0, 1], got {probability}");
    }

    let mut deck = SwipeDeck::new(candidates);
    let mut oracle = match seed {
        Some(seed) => CoinFlipOracle::with_seed(seed, probability),
        None => CoinFlipOracle::new(probability),
    };

    let mut matches = 0usize;
    for _ in 0..trials {
        if deck.is_exhausted() {
            deck.restart()?;
        }
        deck.decide(Decision::Connect)?;
        if deck.resolve_with(&mut oracle)?.matched {
            matches += 1;
        }
    }

    let rate = matches as f64 / trials as f64;
    println!("{}", "Simulation results:".bold().blue());
    println!("Trials: {trials}");
    println!("Matches: {matches}");
    println!(
        "Observed match rate: {} (oracle probability {probability})",
        format!("{rate:.4}").green()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drag_token() {
        assert!(matches!(parse_gesture("drag:150").unwrap(), Gesture::Drag(o) if o == 150.0));
        assert!(matches!(parse_gesture("drag:-80").unwrap(), Gesture::Drag(o) if o == -80.0));
    }

    #[test]
    fn test_parse_action_tokens() {
        assert!(matches!(
            parse_gesture("connect").unwrap(),
            Gesture::Press(Decision::Connect)
        ));
        assert!(matches!(
            parse_gesture("skip").unwrap(),
            Gesture::Press(Decision::Skip)
        ));
        assert!(matches!(parse_gesture("restart").unwrap(), Gesture::Restart));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_gesture("drag:fast").is_err());
        assert!(parse_gesture("flip").is_err());
    }
}
