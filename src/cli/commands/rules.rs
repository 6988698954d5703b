//! Rules command - list the decision hierarchy

use anyhow::Result;
use clap::Parser;

use crate::{cli::output::print_section, teacher::Rule};

#[derive(Parser, Debug)]
#[command(about = "List the teacher's rules in priority order")]
pub struct RulesArgs {}

pub fn execute(_args: RulesArgs) -> Result<()> {
    print_section("Decision hierarchy");
    for (rank, rule) in Rule::HIERARCHY.iter().enumerate() {
        println!("  {}. {}", rank + 1, rule);
    }
    println!("\nWith probability 1 - skill the teacher skips the list and plays at random.");
    Ok(())
}
