use crate::cli::commands::load_dataset;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Core, Page};
use crate::errors::AppResult;
use crate::models::{DisplayRow, ShiftRecord, TotalRow};
use crate::ui::messages::{header, warning};
use crate::utils::colors::{CYAN, RESET, color_for_row, colorize_total, paint};
use crate::utils::table::{Column, Table};

/// Columns covered by the merged label of a subtotal row.
const TOTAL_SPAN: usize = 5;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        filters,
        page,
        page_size,
        all,
    } = cmd
    {
        let records = load_dataset(cfg);
        let report = Core::build_report(&records, &filters.to_filters());

        if report.grouped.is_empty() {
            warning("No shifts match the current filters.");
            println!("Total 0");
            return Ok(());
        }

        let size = page_size.unwrap_or(cfg.page_size);
        let view = if *all {
            Page {
                number: 1,
                size: report.grouped.len(),
                rows: &report.grouped,
                total: report.total(),
            }
        } else {
            Core::paginate(&report, *page, size)?
        };

        header("Payroll");
        print!("{}", render_rows(view.rows));
        print_footer(&view, report.grouped.len(), *all);
    }
    Ok(())
}

fn columns() -> Vec<Column> {
    vec![
        Column::left("Employee Name", 16),
        Column::left("Date", 10),
        Column::left("Property Name", 13),
        Column::left("Check In", 8),
        Column::left("Check Out", 9),
        Column::right("Time Worked", 16),
        Column::right("No of Units", 11),
        Column::right("Avg. sec/unit", 13),
    ]
}

/// Render grouped rows; subtotals become one wide merged cell.
pub fn render_rows(rows: &[DisplayRow]) -> String {
    let mut table = Table::new(columns());
    let mut stripe = 0;

    for row in rows {
        match row {
            DisplayRow::Shift { record, .. } => {
                table.add_row(shift_cells(record, color_for_row(stripe)));
                stripe += 1;
            }
            DisplayRow::Total(total) => {
                let (label, cells) = total_cells(total);
                table.add_merged_row(TOTAL_SPAN, label, cells);
                stripe = 0;
            }
        }
    }

    table.render()
}

fn shift_cells(r: &ShiftRecord, color: &str) -> Vec<String> {
    let units = r.no_of_units.to_string();
    let cells: [&str; 8] = [
        &r.employee_name,
        &r.date,
        &r.property_name,
        &r.check_in,
        &r.check_out,
        &r.time_worked,
        &units,
        &r.avg_sec_per_unit,
    ];
    cells.iter().map(|v| paint(v, color)).collect()
}

fn total_cells(t: &TotalRow) -> (String, Vec<String>) {
    let label = colorize_total(&format!("{} · TOTAL TIME WORKED", t.employee_name));
    let cells = vec![
        colorize_total(&t.total_time_worked),
        colorize_total(&t.total_units.to_string()),
        colorize_total(&t.avg_sec_per_unit),
    ];
    (label, cells)
}

fn print_footer(view: &Page<'_>, grouped_len: usize, all: bool) {
    if all {
        println!("\n{CYAN}Total {}{RESET}", view.total);
        return;
    }
    let pages = grouped_len.div_ceil(view.size).max(1);
    println!(
        "\n{CYAN}Total {}{RESET} | page {} of {} ({} rows per page)",
        view.total, view.number, pages, view.size
    );
}
