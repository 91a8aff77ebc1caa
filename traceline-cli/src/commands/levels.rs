//! `traceline levels` - print the severity table.

use traceline::severity::Severity;

use crate::error::CliError;

/// Render the severity table as an aligned text listing.
fn render_table() -> String {
    let mut out = String::new();
    for severity in Severity::ALL {
        out.push_str(&format!(
            "{:>5}  {:<10} {}\n",
            severity.value(),
            severity.name(),
            severity.description()
        ));
    }
    out
}

/// Print the severity table to standard output.
pub fn run() -> Result<(), CliError> {
    print!("{}", render_table());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_level_once() {
        let table = render_table();
        assert_eq!(table.lines().count(), 9);
        for severity in Severity::ALL {
            assert!(table.contains(severity.name()));
        }
    }

    #[test]
    fn table_starts_at_default_and_ends_at_emergency() {
        let table = render_table();
        let first = table.lines().next().unwrap();
        let last = table.lines().last().unwrap();
        assert!(first.contains("DEFAULT"));
        assert!(last.contains("EMERGENCY"));
    }
}
