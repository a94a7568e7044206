//! `classkit quiz`: interactive arithmetic quiz on stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use classkit_quiz::{Outcome, QuizReport, QuizSession, RankConvention, Tier};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;

pub fn execute(
    tier: String,
    seed: Option<u64>,
    raw_rank: bool,
    report: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let tier: Tier = tier.parse().map_err(|e: String| anyhow!(e))?;
    let config = Config::load(config.as_deref())?;

    let mut quiz_config = config.quiz_config();
    if raw_rank {
        quiz_config.rank_convention = RankConvention::RawScore;
    }

    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut session = QuizSession::new(tier, quiz_config);
    println!(
        "Quiz: {} tier, {} questions, {} lives. Type 'quit' to stop.",
        session.tier(),
        session.config().max_questions,
        session.config().max_lives
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_finished() {
        let problem = session.pose(&mut rng)?;
        loop {
            print!(
                "Question {} of {}: {} = ",
                session.attempted() + 1,
                session.config().max_questions,
                problem
            );
            io::stdout().flush().context("failed to flush stdout")?;

            let Some(line) = lines.next() else {
                println!();
                println!("Quiz abandoned.");
                return Ok(());
            };
            let input = line.context("failed to read answer")?;
            if input.trim().eq_ignore_ascii_case("quit") {
                println!("Quiz abandoned.");
                return Ok(());
            }

            match session.submit(&input)? {
                Outcome::Invalid => {
                    println!("That is not a whole number, try again.");
                }
                Outcome::Correct { points, attempt } => {
                    if attempt == 1 {
                        println!("Correct! +{points} points.");
                    } else {
                        println!("Correct on the second try! +{points} points.");
                    }
                    break;
                }
                Outcome::Retry { attempts_left } => {
                    println!("Wrong, {attempts_left} attempt(s) left.");
                }
                Outcome::Missed { answer, lives_left } => {
                    println!("Wrong again. The answer was {answer}. Lives left: {lives_left}.");
                    break;
                }
            }
        }
        println!("Score: {}", session.score());
    }

    let rank = session
        .rank()
        .ok_or_else(|| anyhow!("finished session has no rank"))?;
    println!();
    if session.lives() == 0 {
        println!("Out of lives!");
    }
    println!(
        "Final score: {} after {} question(s). Rank: {} ({})",
        session.score(),
        session.attempted(),
        rank,
        rank.caption()
    );

    if let Some(path) = report {
        let report = QuizReport::from_session(&session)
            .ok_or_else(|| anyhow!("finished session produced no report"))?;
        report.save_json(&path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
