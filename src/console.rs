use ranking::{
    DifficultyCategory, DifficultyDistribution, FeedbackMatch, FeedbackOutcome, PlayerRecord, ProgressReport,
    RetrainOutcome, RuleScorer, UserDecision,
};
use std::io::{self, BufRead, Write};
use std::path::Path;

const RULE: &str = "======================================================================";

pub fn print_banner() {
    println!("NFL Player College Difficulty Ranking");
    println!("{}", RULE);
    println!("4-tier rating system:");
    print_categories();
    println!("{}", RULE);
}

pub fn print_introduction() {
    println!();
    println!("Rate how hard it is for you to guess each player's college.");
    println!("The ranking adapts to your knowledge as you go.");
    println!();
    println!("Press Ctrl+C at any time to save and quit.");
}

fn print_categories() {
    for category in DifficultyCategory::ALL {
        println!("  {} = {}", category.value(), category.label());
    }
}

pub fn render_player(player: &PlayerRecord) {
    let predicted = player
        .difficulty_category()
        .unwrap_or_else(|| RuleScorer::category(player));

    println!();
    println!("{}", RULE);
    println!("RATE THIS PLAYER");
    println!("{}", RULE);
    println!("Name: {}", player.player_name);
    println!(
        "Team: {} | Position: {} | Age: {}",
        player.team,
        player.position,
        player.age.map(|age| age.to_string()).unwrap_or_else(|| "?".to_string())
    );
    println!(
        "Experience: {} years | Games: {} played, {} started",
        player.years_experience, player.games_played, player.games_started
    );
    println!("Draft: {}", draft_line(player));
    println!("Accolades: {}", accolades_line(player));
    println!();
    println!("Current prediction: {}", predicted);
    println!();
    println!("College: {}", player.college.join(", "));
    println!();
    println!("{}", RULE);
    println!("HOW DIFFICULT IS IT TO GUESS THIS PLAYER'S COLLEGE?");
    println!("{}", RULE);
    print_categories();
}

fn draft_line(player: &PlayerRecord) -> String {
    let year = player
        .draft_year
        .map(|year| year.to_string())
        .unwrap_or_else(|| "?".to_string());

    match player.draft_round() {
        Some(round) => format!("Round {} ({})", round, year),
        None => format!("Undrafted ({})", year),
    }
}

fn accolades_line(player: &PlayerRecord) -> String {
    let mut accolades = Vec::new();

    if player.pro_bowls > 0 {
        accolades.push(format!("{} Pro Bowl{}", player.pro_bowls, plural(player.pro_bowls)));
    }
    if player.all_pros > 0 {
        accolades.push(format!("{} All-Pro{}", player.all_pros, plural(player.all_pros)));
    }
    accolades.extend(player.awards.iter().cloned());

    if accolades.is_empty() {
        "None".to_string()
    } else {
        accolades.join(", ")
    }
}

fn plural(count: u32) -> &'static str {
    if count > 1 { "s" } else { "" }
}

/// Prompts until the answer parses. End of input counts as quitting.
pub fn read_decision<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<UserDecision> {
    loop {
        write!(output, "\nYour rating (1-4, or 'skip'/'quit'): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(UserDecision::Quit);
        }

        match UserDecision::parse(&line) {
            Ok(decision) => return Ok(decision),
            Err(e) => writeln!(output, "{}", capitalize(&e.to_string()))?,
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn print_outcome(outcome: &FeedbackOutcome) {
    let icon = match outcome.record.match_kind() {
        FeedbackMatch::Exact => "✓",
        FeedbackMatch::Close => "~",
        FeedbackMatch::Miss => "✗",
    };

    println!(
        "{} Recorded: You={}, Algorithm={:.0}, Error={:.1}",
        icon, outcome.record.actual_difficulty, outcome.record.predicted_difficulty, outcome.record.error
    );
}

pub fn print_retrain(retrain: &RetrainOutcome, players: usize) {
    let report = &retrain.report;

    println!();
    println!("Model trained on {} ratings", report.samples);
    println!("   Exact match accuracy: {:.1}%", report.exact_accuracy * 100.0);
    println!("   Within 1 category: {:.1}%", report.within_one_accuracy * 100.0);
    println!("   Average error: {:.2}", report.mean_error);

    let predictors: Vec<String> = report.top_predictors.iter().map(|p| p.to_string()).collect();
    println!("   Top predictors: {}", predictors.join(", "));

    if !retrain.replaced {
        println!("   Kept the previous model, it fits your ratings better");
    }

    println!("Updated difficulty scores for all {} players", players);
}

pub fn print_loaded(ratings: usize) {
    println!();
    println!("Loaded {} previous ratings", ratings);
}

pub fn print_progress(report: &ProgressReport) {
    println!();
    println!("{}", RULE);
    println!(
        "PROGRESS: {}/{} players rated ({:.1}%)",
        report.rated, report.total, report.percent
    );

    if report.rated > 0 {
        println!();
        println!("Your rating distribution:");
        for share in &report.ratings {
            println!(
                "  {} ({}): {} ({:.1}%) {}",
                share.category.value(),
                share.category.label(),
                share.count,
                share.percent,
                bar(share.percent)
            );
        }

        if let Some(error) = report.recent_error {
            println!();
            println!("   Recent prediction accuracy: ±{:.2} categories", error);
        }
    }

    println!("{}", RULE);
}

fn bar(percent: f64) -> String {
    "█".repeat((percent / 2.0) as usize)
}

pub fn print_exhausted() {
    println!("You've rated every player. The ranking is fully trained.");
}

pub fn print_interrupted() {
    println!();
    println!("Session interrupted");
}

pub fn print_summary(ratings: usize, players_file: &Path, distribution: Option<&DifficultyDistribution>) {
    println!();
    println!("Training session complete!");
    println!("   Total ratings: {}", ratings);
    println!("   Data saved to: {}", players_file.display());

    if let Some(distribution) = distribution {
        println!();
        println!("Final difficulty distribution:");
        for share in &distribution.shares {
            println!(
                "   {} ({}): {} players ({:.1}%)",
                share.category.value(),
                share.category.label(),
                share.count,
                share.percent
            );
        }
    }
}
