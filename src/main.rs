mod console;
mod settings;

use color_eyre::eyre::WrapErr;
use database::JsonStorage;
use env_logger::Env;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ranking::utils::TimeEstimation;
use ranking::{Ranker, RankerConfig, Selection, SessionState, UserDecision};
use settings::AppSettings;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type SharedRanker = Arc<Mutex<Ranker<JsonStorage>>>;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = AppSettings::from_env()?;

    let storage = JsonStorage::new(&settings.players_file, &settings.feedback_file, &settings.model_file);

    let (players, estimated) = TimeEstimation::estimate(|| storage.load_players());
    let players = players
        .wrap_err_with(|| format!("could not load players from {}", settings.players_file.display()))?;

    info!("players loaded: {} ({} ms)", players.len(), estimated);

    let state = SessionState::new(storage.load_feedback(), storage.load_model());
    let prior_ratings = state.history.len();

    info!(
        "previous ratings: {}, saved model: {}",
        prior_ratings,
        if state.model.is_some() { "yes" } else { "no" }
    );

    let config = RankerConfig::default().with_retrain_policy(settings.retrain_policy);
    let ranker: SharedRanker = Arc::new(Mutex::new(Ranker::new(players, state, config, storage)));

    console::print_banner();
    if prior_ratings > 0 {
        console::print_loaded(prior_ratings);
        console::print_progress(&lock(&ranker).progress());
    }
    console::print_introduction();

    let seed = settings.seed.unwrap_or_else(rand::random);
    debug!("sampling seed: {}", seed);

    let session = tokio::task::spawn_blocking({
        let ranker = Arc::clone(&ranker);
        move || run_session(&ranker, &mut StdRng::seed_from_u64(seed))
    });

    let interrupted = tokio::select! {
        joined = session => {
            joined.wrap_err("rating session stopped unexpectedly")?.wrap_err("failed to read input")?;
            false
        }
        signal = tokio::signal::ctrl_c() => {
            signal.wrap_err("failed to listen for ctrl+c")?;
            console::print_interrupted();
            true
        }
    };

    {
        let mut ranker = lock(&ranker);
        ranker.persist_all();
        console::print_summary(
            ranker.history().len(),
            &settings.players_file,
            ranker.final_distribution().as_ref(),
        );
    }

    info!("session finished");

    if interrupted {
        // the input reader is still blocked on stdin and would keep the runtime alive
        std::process::exit(0);
    }

    Ok(())
}

/// Present, read, record until the user quits or nobody is left to rate.
/// The ranker is locked per step and never while waiting for input.
fn run_session(ranker: &Mutex<Ranker<JsonStorage>>, rng: &mut StdRng) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    loop {
        let (index, player) = {
            let ranker = lock(ranker);

            match ranker.next_player(rng) {
                Selection::Exhausted => {
                    console::print_exhausted();
                    return Ok(());
                }
                Selection::Next(index) => match ranker.player(index) {
                    Some(player) => (index, player.clone()),
                    None => return Ok(()),
                },
            }
        };

        console::render_player(&player);

        match console::read_decision(&mut input, &mut output)? {
            UserDecision::Quit => return Ok(()),
            UserDecision::Skip => continue,
            UserDecision::Rate(rating) => {
                let mut ranker = lock(ranker);

                if let Some(outcome) = ranker.record_feedback(index, rating) {
                    console::print_outcome(&outcome);

                    if let Some(retrain) = &outcome.retrain {
                        console::print_retrain(retrain, ranker.players().len());
                    }

                    if ranker.is_progress_due() {
                        console::print_progress(&ranker.progress());
                    }
                }
            }
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
