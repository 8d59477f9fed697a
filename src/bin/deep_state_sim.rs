//! Deep State headless simulation
//! Plays a full game with a scripted player against the rival AI

use std::path::PathBuf;

use clap::Parser;
use deep_state::catalog::OperationDef;
use deep_state::engine::rival::pick_affordable_operation;
use deep_state::engine::OperationAttempt;
use deep_state::{Agency, Catalogs, Game, RulesConfig, TurnOutcome};

/// Deep State - run a seeded game with a scripted player
#[derive(Parser, Debug)]
#[command(name = "deep_state_sim")]
#[command(about = "Simulate a game of Deep State from the command line")]
struct Args {
    /// Random seed for reproducible runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Maximum turns before calling the game a stalemate
    #[arg(long, default_value_t = 50)]
    turns: u32,

    /// Agency the scripted player controls
    #[arg(long, default_value = "CIA")]
    agency: Agency,

    /// Directory holding catalog TOML files (built-in data when omitted)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// TOML file overriding rule constants
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Write the final state to this JSON file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Only print the final summary
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

/// Visibility above which the script plays it safe
const CAUTIOUS_VISIBILITY: u32 = 50;
/// Agents the script stops recruiting at
const MAX_AGENTS: u32 = 3;

fn main() -> deep_state::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    let catalogs = match &args.data_dir {
        Some(dir) => Catalogs::load_dir(dir)?,
        None => Catalogs::builtin()?,
    };
    let rules = match &args.rules {
        Some(path) => RulesConfig::load(path)?,
        None => RulesConfig::default(),
    };

    let mut game = Game::new(args.agency, catalogs, rules, args.seed)?;
    let mut printed = 0;

    println!("=== DEEP STATE ===");
    println!("Agency: {}  Seed: {}  Max turns: {}", args.agency, args.seed, args.turns);

    let mut outcome = TurnOutcome::Continue { turn: game.state().turn };
    while game.state().turn <= args.turns {
        play_scripted_turn(&mut game)?;
        outcome = game.end_turn()?;

        if !args.quiet {
            printed = print_new_entries(&game, printed);
        }
        if outcome.is_finished() {
            break;
        }
    }

    println!();
    println!("{}", game.state().resource_summary());
    println!();
    println!("{}", game.state().visibility_report());
    println!();
    println!("{}", game.state().influence_report());
    println!();
    match outcome {
        TurnOutcome::Victory(victory) => println!("Result: {} on turn {}", victory, game.state().turn),
        TurnOutcome::Defeat => println!("Result: exposed on turn {}", game.state().turn - 1),
        TurnOutcome::Continue { turn } => println!("Result: stalemate after {} turns", turn - 1),
    }

    if let Some(path) = &args.save {
        game.save(path)?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}

/// Recruit, research, then spend every free agent on the focus country
fn play_scripted_turn(game: &mut Game) -> deep_state::Result<()> {
    let player = game.state().player_state();
    if player.agents < MAX_AGENTS && player.can_afford(game.rules().recruit_budget_cost, game.rules().recruit_capital_cost) {
        game.recruit_agent()?;
    }

    let research_points = game.state().player_state().research_points;
    let next_tech = game
        .available_technologies()
        .into_iter()
        .find(|t| t.cost <= research_points)
        .map(|t| t.name.clone());
    if let Some(tech) = next_tech {
        game.research(&tech)?;
    }

    while game.state().agents_available() > 0 {
        let Some(country) = focus_country(game) else {
            break;
        };
        let Some(operation) = choose_operation(game) else {
            break;
        };
        match game.perform_operation(&operation, &country)? {
            OperationAttempt::Resolved(_) => {}
            OperationAttempt::NoAgentsAvailable | OperationAttempt::InsufficientResources => break,
        }
    }

    Ok(())
}

/// Country closest to domination that is not dominated yet
fn focus_country(game: &Game) -> Option<String> {
    let state = game.state();
    let threshold = game.rules().domination_influence;

    let mut best: Option<(&str, u32)> = None;
    for country in &state.countries {
        let influence = country.influence_of(state.player);
        if influence >= threshold {
            continue;
        }
        if best.map_or(true, |(_, b)| influence > b) {
            best = Some((country.name.as_str(), influence));
        }
    }
    best.map(|(name, _)| name.to_string())
}

/// Most expensive affordable operation, or the quietest one when exposed
fn choose_operation(game: &Game) -> Option<String> {
    let player = game.state().player_state();
    let catalog = &game.catalogs().player_operations;

    if player.visibility < CAUTIOUS_VISIBILITY {
        return pick_affordable_operation(catalog, player.budget, player.political_capital)
            .map(|op| op.name.clone());
    }

    catalog
        .iter()
        .filter(|op| op.is_affordable(player.budget, player.political_capital))
        .min_by_key(|op: &&OperationDef| op.visibility_on_success())
        .map(|op| op.name.clone())
}

fn print_new_entries(game: &Game, from: usize) -> usize {
    let entries = &game.log().entries;
    for entry in &entries[from..] {
        println!("[T{:>3}] {}", entry.turn, entry.message);
    }
    entries.len()
}
