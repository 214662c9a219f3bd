//! Text and JSON rendering of a plan.

use crate::domain::Plan;
use std::io::{self, Write};

/// Print every missing target with the places that reference it.
pub fn write_missing<W: Write>(out: &mut W, plan: &Plan) -> io::Result<()> {
    writeln!(out, "Missing files:")?;
    for (target, locations) in &plan.missing {
        writeln!(out, "{target}.{} is referenced in:", plan.extension)?;
        for loc in locations {
            writeln!(out, "  - {} (line {})", loc.source, loc.line)?;
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, plan: &Plan) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, plan)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Location, MissingLinks};
    use std::path::PathBuf;

    fn sample_plan() -> Plan {
        let mut missing = MissingLinks::new();
        missing.insert(
            "c".to_string(),
            vec![
                Location { source: "a.md".into(), line: 3 },
                Location { source: "notes/d.md".into(), line: 10 },
            ],
        );
        Plan {
            root: PathBuf::from("vault"),
            extension: "md".to_string(),
            documents_scanned: 2,
            links_found: 3,
            missing,
        }
    }

    #[test]
    fn text_report_lists_occurrences() {
        let mut out = Vec::new();
        write_missing(&mut out, &sample_plan()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Missing files:\nc.md is referenced in:\n  - a.md (line 3)\n  - notes/d.md (line 10)\n"
        );
    }

    #[test]
    fn json_report_carries_locations() {
        let mut out = Vec::new();
        write_json(&mut out, &sample_plan()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["missing"]["c"][1]["source"], "notes/d.md");
        assert_eq!(value["missing"]["c"][1]["line"], 10);
        assert_eq!(value["documents_scanned"], 2);
    }
}
