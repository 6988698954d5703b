//! Choose command - ask the teacher for a single move

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::TeacherArgs,
        output::{print_board_with_highlight, print_kv, print_section},
    },
    teacher::{HeuristicTeacher, MoveSource},
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Pick a move for a board")]
pub struct ChooseArgs {
    /// Board cells in row-major order, e.g. "XO-/OX-/---"
    pub board: String,

    #[command(flatten)]
    pub teacher: TeacherArgs,

    /// Also report which rule produced the move
    #[arg(long)]
    pub explain: bool,
}

pub fn execute(args: ChooseArgs) -> Result<()> {
    let config = args.teacher.resolve()?;
    let teacher = HeuristicTeacher::new(config)?;
    let board = Board::parse_sized(config.board_size, &args.board)
        .with_context(|| format!("parsing board '{}'", args.board))?;
    let mut rng = args.teacher.rng();

    let decision = teacher
        .choose_move_explained(&board, &mut rng)
        .context("teacher could not choose a move")?;

    if !args.explain {
        println!("{} {}", decision.coord.row, decision.coord.col);
        return Ok(());
    }

    print_section(&format!("Teacher move for {}", teacher.mark()));
    print_board_with_highlight(&board, Some(decision.coord));
    println!();
    print_kv("Move", &decision.coord.to_string());
    let reason = match decision.source {
        MoveSource::SkillGate => "random (skill draw failed)".to_string(),
        MoveSource::Rule(rule) => format!("rule '{rule}'"),
    };
    print_kv("Reason", &reason);
    print_kv("Skill level", &format!("{:.2}", teacher.skill_level()));
    Ok(())
}
