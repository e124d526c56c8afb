use std::path::Path;
use std::process::ExitCode;

use burnlog_burndown::{
    BoardListConfig, BoardSnapshotBuilder, BurndownOrchestrator, ListAggregator, RunReport,
    SystemClock,
};
use burnlog_core::StoryPointParser;

use crate::render;

/// Every board was updated.
const EXIT_OK: u8 = 0;
/// At least one board failed; the others were written.
const EXIT_BOARD_FAILED: u8 = 1;
/// Fatal configuration problems; nothing was processed.
const EXIT_CONFIG: u8 = 2;

pub fn execute(
    config: Option<&Path>,
    board_list: &Path,
    output: &Path,
    default_points: u32,
) -> anyhow::Result<ExitCode> {
    Ok(ExitCode::from(run(config, board_list, output, default_points)))
}

fn run(config: Option<&Path>, board_list: &Path, output: &Path, default_points: u32) -> u8 {
    let boards = match BoardListConfig::load(board_list) {
        Ok(boards) => boards,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_CONFIG;
        }
    };
    let client = match crate::connect(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return EXIT_CONFIG;
        }
    };

    let parser = StoryPointParser::with_default(default_points);
    let report = BurndownOrchestrator::new(client, SystemClock)
        .with_builder(BoardSnapshotBuilder::new(ListAggregator::new(parser)))
        .with_output_base(output)
        .run(&boards);
    print!("{}", render::run_report(&report));
    exit_status(&report)
}

fn exit_status(report: &RunReport) -> u8 {
    if report.is_success() {
        EXIT_OK
    } else {
        EXIT_BOARD_FAILED
    }
}
