//! Task listing with the projected colors.
//!
//! The projection decides labels and color names; this command only
//! maps those names onto terminal attributes. Color names without a
//! terminal equivalent fall back to the default pair.

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::due;
use crate::libs::messages::Message;
use crate::libs::palette::Palette;
use crate::libs::task::Partition;
use crate::libs::view::{self, Projection};
use crate::{msg_debug, msg_info};
use anyhow::Result;
use clap::Args;
use prettytable::{color, Attr, Cell, Row, Table};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show the trash bin instead of the active tasks
    #[arg(short, long)]
    archived: bool,
    /// LIKE pattern matched against text, team, milestone, project and due date
    #[arg(short, long, default_value = "%")]
    filter: String,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let partition = if args.archived { Partition::Archived } else { Partition::Active };
    let tasks = Tasks::new()?.list(partition, &args.filter)?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    if args.archived {
        msg_debug!(Message::DisplayingTrash);
    } else {
        msg_debug!(Message::DisplayingTasks);
    }

    let palette = Palette::load(&config)?;
    let projection = view::project(&tasks, args.archived, &palette, due::today());
    print_rows(&projection);

    if args.filter != "%" {
        msg_info!(Message::TasksFiltered(args.filter));
    }
    Ok(())
}

fn print_rows(projection: &Projection) {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("#"), Cell::new("ID"), Cell::new("TASK")]));

    for row in &projection.rows {
        let mut cell = Cell::new(&row.label);
        if let Some(fg) = term_color(&row.foreground) {
            cell = cell.with_style(Attr::ForegroundColor(fg));
        }
        // White backgrounds are the terminal default; painting them
        // would produce solid blocks on dark terminals.
        if row.background != "white" {
            if let Some(bg) = term_color(&row.background) {
                cell = cell.with_style(Attr::BackgroundColor(bg));
            }
        }

        table.add_row(Row::new(vec![
            Cell::new(&row.index.to_string()),
            Cell::new(&row.id.to_string()),
            cell,
        ]));
    }
    table.printstd();
}

// Palette colors are tkinter-era names; map the known ones onto the
// eight-color terminal space.
fn term_color(name: &str) -> Option<color::Color> {
    match name {
        "black" => Some(color::BLACK),
        "white" => Some(color::WHITE),
        "red" => Some(color::RED),
        "blue" => Some(color::BLUE),
        "green" | "darkgreen" => Some(color::GREEN),
        "orange" | "yellow" => Some(color::YELLOW),
        "lightyellow" => Some(color::BRIGHT_YELLOW),
        "grey" | "gray" => Some(color::BRIGHT_BLACK),
        _ => None,
    }
}
