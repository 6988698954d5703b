//! Sample command - compare observed move frequencies with the exact distribution

use std::collections::BTreeMap;

use anyhow::{Context, Result, ensure};
use clap::Parser;

use crate::{
    cli::{
        config::TeacherArgs,
        output::{
            create_sampling_progress, format_number, print_kv, print_section, print_subsection,
        },
    },
    teacher::{HeuristicTeacher, MoveSource},
    tictactoe::{Board, Coord},
};

#[derive(Parser, Debug)]
#[command(about = "Run many independent choices on one board")]
pub struct SampleArgs {
    /// Board cells in row-major order, e.g. "XO-/OX-/---"
    pub board: String,

    #[command(flatten)]
    pub teacher: TeacherArgs,

    /// Number of independent choices
    #[arg(long, short = 't', default_value_t = 10_000)]
    pub trials: usize,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

/// Tally of a sampling run
#[derive(Debug, Default)]
pub struct SampleSummary {
    pub trials: usize,
    pub by_cell: BTreeMap<Coord, usize>,
    pub by_source: BTreeMap<String, usize>,
}

/// Draw `trials` moves from the teacher
pub fn run_trials<R: rand::Rng + ?Sized>(
    teacher: &HeuristicTeacher,
    board: &Board,
    trials: usize,
    rng: &mut R,
    mut on_trial: impl FnMut(usize),
) -> crate::Result<SampleSummary> {
    let mut summary = SampleSummary {
        trials,
        ..Default::default()
    };
    for i in 0..trials {
        let decision = teacher.choose_move_explained(board, rng)?;
        *summary.by_cell.entry(decision.coord).or_default() += 1;
        let source = match decision.source {
            MoveSource::SkillGate => "skill gate".to_string(),
            MoveSource::Rule(rule) => rule.to_string(),
        };
        *summary.by_source.entry(source).or_default() += 1;
        on_trial(i);
    }
    Ok(summary)
}

pub fn execute(args: SampleArgs) -> Result<()> {
    ensure!(args.trials > 0, "--trials must be at least 1");

    let config = args.teacher.resolve()?;
    let teacher = HeuristicTeacher::new(config)?;
    let board = Board::parse_sized(config.board_size, &args.board)
        .with_context(|| format!("parsing board '{}'", args.board))?;
    let expected = teacher.move_distribution(&board)?;
    let mut rng = args.teacher.rng();

    let progress = if args.quiet {
        None
    } else {
        Some(create_sampling_progress(args.trials as u64)?)
    };
    let summary = run_trials(&teacher, &board, args.trials, &mut rng, |_| {
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    })?;
    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }

    print_section("Sampling summary");
    print_kv("Board", &board.to_string().replace('\n', "/"));
    print_kv("Teacher mark", &teacher.mark().to_string());
    print_kv("Skill level", &format!("{:.2}", teacher.skill_level()));
    print_kv("Trials", &format_number(summary.trials));

    print_subsection("Per cell (observed vs exact)");
    let total = summary.trials as f64;
    for (coord, probability) in &expected {
        let count = summary.by_cell.get(coord).copied().unwrap_or(0);
        println!(
            "  {:10} {:>8}  {:>6.3}  {:>6.3}",
            coord.to_string(),
            format_number(count),
            count as f64 / total,
            probability
        );
    }

    print_subsection("Per source");
    for (source, count) in &summary.by_source {
        print_kv(source, &format_number(*count));
    }
    Ok(())
}
