use clap::Args;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use panefit_core::{ProcessManager, ProcessRecord, Result};

/// Arguments for the `list` subcommand.
#[derive(Args)]
pub struct ListArgs {
    /// Include every process with a visible window (no filtering or grouping)
    #[arg(long)]
    all: bool,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn execute(args: &ListArgs) -> Result<()> {
    let records = panefit_windows::with_service(|service| {
        if args.all {
            service.list_all_windowed_processes()
        } else {
            service.list_application_processes()
        }
    })?;

    if args.json {
        if !super::print_json(to_json(&records)) {
            std::process::exit(1);
        }
        return Ok(());
    }

    println!("{}", table(&records));
    let kind = if args.all {
        "processes with windows"
    } else {
        "application processes"
    };
    println!("\nFound {} {kind}", records.len());
    Ok(())
}

fn to_json(records: &[ProcessRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

fn table(records: &[ProcessRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("PID").set_alignment(CellAlignment::Right),
            Cell::new("Image"),
            Cell::new("Session"),
            Cell::new("Memory").set_alignment(CellAlignment::Right),
            Cell::new("Windows").set_alignment(CellAlignment::Right),
            Cell::new("Title"),
        ]);

    for record in records {
        table.add_row(vec![
            Cell::new(record.pid).set_alignment(CellAlignment::Right),
            Cell::new(&record.image_name),
            Cell::new(format!("{} ({})", record.session_name, record.session_id)),
            Cell::new(&record.memory_usage).set_alignment(CellAlignment::Right),
            Cell::new(record.window_count).set_alignment(CellAlignment::Right),
            Cell::new(record.title()),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notepad() -> ProcessRecord {
        ProcessRecord {
            image_name: "notepad.exe".into(),
            pid: 2000,
            session_name: "Console".into(),
            session_id: 1,
            memory_usage: "14,000 K".into(),
            memory_bytes: 14_336_000,
            window_title: Some("Untitled - Notepad".into()),
            window_count: 2,
            has_window: true,
        }
    }

    #[test]
    fn table_lists_each_record() {
        let rendered = table(&[notepad()]).to_string();

        assert!(rendered.contains("notepad.exe"));
        assert!(rendered.contains("Untitled - Notepad"));
        assert!(rendered.contains("Console (1)"));
    }

    #[test]
    fn json_uses_camel_case_fields() {
        let json = to_json(&[notepad()]).unwrap();

        assert!(json.contains("\"imageName\": \"notepad.exe\""));
        assert!(json.contains("\"windowCount\": 2"));
    }
}
