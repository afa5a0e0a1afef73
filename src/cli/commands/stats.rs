use crate::cli::commands::load_dataset;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::ui::messages::header;

/// Handle the `stats` command: the two "best employee" summaries.
///
/// With neither flag both summaries are shown.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        filters,
        most_hours,
        most_efficient,
    } = cmd
    {
        let records = load_dataset(cfg);
        let report = Core::build_report(&records, &filters.to_filters());
        let both = !*most_hours && !*most_efficient;

        if *most_hours || both {
            header("Employee with Most Hours");
            println!("{}\n", Core::describe_most_hours(&report.most_hours));
        }

        if *most_efficient || both {
            header("Most Efficient Employee");
            println!("{}\n", Core::describe_most_efficient(&report.most_efficient));
        }
    }
    Ok(())
}
