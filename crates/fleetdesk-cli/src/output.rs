//! Output formatting module

use fleetdesk_app::SubmitOutcome;
use fleetdesk_domain::ValidationResult;
use fleetdesk_types::{OutputFormat, Result, Truck, TruckStatus};

/// Print the truck list as a table or JSON array
pub fn output_trucks(output_format: OutputFormat, trucks: &[Truck]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(trucks)?);
        return Ok(());
    }

    if trucks.is_empty() {
        println!("No trucks.");
        return Ok(());
    }

    println!("{}", format_table(trucks));
    println!("{} truck(s)", trucks.len());
    Ok(())
}

fn status_cell(truck: &Truck) -> String {
    match truck.status() {
        Some(status) => status.label().to_string(),
        None => format!("?{}", truck.status),
    }
}

/// Render trucks as a fixed-width table
pub fn format_table(trucks: &[Truck]) -> String {
    let rows: Vec<[String; 4]> = trucks
        .iter()
        .map(|t| {
            [
                t.id.clone().unwrap_or_else(|| "-".to_string()),
                t.code.clone(),
                t.name.clone(),
                status_cell(t),
            ]
        })
        .collect();

    let header = ["ID", "CODE", "NAME", "STATUS"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(header)];
    lines.push(render(widths.map(|w| "-".repeat(w)).each_ref().map(String::as_str)));
    for row in &rows {
        lines.push(render(row.each_ref().map(String::as_str)));
    }
    lines.join("\n")
}

pub fn output_submit(output_format: OutputFormat, outcome: &SubmitOutcome) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    let verb = match outcome {
        SubmitOutcome::Created(_) => "Created",
        SubmitOutcome::Updated(_) => "Updated",
    };
    let truck = outcome.truck();
    println!(
        "{} truck {} ({} - {})",
        verb,
        truck.id.as_deref().unwrap_or("-"),
        truck.code,
        truck.name
    );
    Ok(())
}

pub fn output_validation(output_format: OutputFormat, result: &ValidationResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else if result.is_valid {
        println!("Valid");
    } else {
        println!("Invalid fields: {}", result.errors.join(", "));
    }
    Ok(())
}

pub fn output_statuses(output_format: OutputFormat) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&TruckStatus::ALL)?);
    } else {
        for status in TruckStatus::ALL {
            println!("{:<12} {}", status.as_str(), status.label());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table_aligns_columns() {
        let trucks = vec![
            Truck::new("T-1", "Tipper", TruckStatus::Active).with_id("1"),
            Truck::new("T-200", "Hauler", TruckStatus::Maintenance).with_id("22"),
        ];

        let table = format_table(&trucks);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "ID  CODE   NAME    STATUS");
        assert_eq!(lines[1], "--  -----  ------  -----------");
        assert_eq!(lines[2], "1   T-1    Tipper  Active");
        assert_eq!(lines[3], "22  T-200  Hauler  Maintenance");
    }

    #[test]
    fn test_unknown_status_is_marked() {
        let mut truck = Truck::new("T-1", "Tipper", TruckStatus::Active);
        truck.status = "retired".to_string();
        assert_eq!(status_cell(&truck), "?retired");
    }
}
