use ssbond::core::io::report::{
    BondRow, NO_CONFIDENCE_INTERVAL_BONDS_NOTICE, NO_STRICT_BONDS_NOTICE, bond_rows,
};
use ssbond::workflows::detect::DetectionResult;
use std::fmt::Write;

const HEADERS: [&str; 5] = ["Bond", "Cys1", "Cys2", "Distance", "Dihedral Angle"];
const STRICT_HEADING: &str = "The following potential disulfide bonds have been detected:";
const CONFIDENCE_INTERVAL_HEADING: &str =
    "The following disulfide bonds do not meet the requirements but should be reviewed:";
const NOTICE_RULE: &str = " --------------------------------- ";

fn cells(row: &BondRow) -> [String; 5] {
    [
        row.bond.to_string(),
        row.cys1.clone(),
        row.cys2.clone(),
        format!("{:.3}", row.distance),
        format!("{:.2}", row.dihedral_angle),
    ]
}

/// Renders rows as a boxed table with centered cells.
pub fn render_table(rows: &[BondRow]) -> String {
    let body: Vec<[String; 5]> = rows.iter().map(cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &body {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths
        .iter()
        .fold(String::from("+"), |mut acc, &w| {
            acc.push_str(&"-".repeat(w + 2));
            acc.push('+');
            acc
        });
    let format_line = |cells: &[&str]| {
        cells
            .iter()
            .zip(&widths)
            .fold(String::from("|"), |mut acc, (cell, &w)| {
                let _ = write!(acc, " {:^w$} |", cell, w = w);
                acc
            })
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", border);
    let _ = writeln!(out, "{}", format_line(&HEADERS));
    let _ = writeln!(out, "{}", border);
    for line in &body {
        let refs: Vec<&str> = line.iter().map(String::as_str).collect();
        let _ = writeln!(out, "{}", format_line(&refs));
    }
    out.push_str(&border);
    out
}

/// A table under `heading`, or the framed `notice` when there are no rows.
pub fn render_section(heading: &str, notice: &str, rows: &[BondRow]) -> String {
    if rows.is_empty() {
        format!("\n{}\n{}\n{}", NOTICE_RULE, notice, NOTICE_RULE)
    } else {
        format!("\n{}\n{}", heading, render_table(rows))
    }
}

/// Both tier reports, strict first.
pub fn render_result(result: &DetectionResult) -> String {
    let strict = render_section(
        STRICT_HEADING,
        NO_STRICT_BONDS_NOTICE,
        &bond_rows(&result.strict),
    );
    let confidence_interval = render_section(
        CONFIDENCE_INTERVAL_HEADING,
        NO_CONFIDENCE_INTERVAL_BONDS_NOTICE,
        &bond_rows(&result.confidence_interval),
    );
    format!("{}\n{}", strict, confidence_interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssbond::core::models::origin::StructureOrigin;
    use ssbond::engine::bond::BondSet;

    fn row(bond: usize, cys1: &str, cys2: &str, distance: f64, angle: f64) -> BondRow {
        BondRow {
            bond,
            cys1: cys1.to_string(),
            cys2: cys2.to_string(),
            distance,
            dihedral_angle: angle,
        }
    }

    #[test]
    fn table_has_aligned_borders() {
        let table = render_table(&[
            row(1, "CYS A:6", "CYS A:127", 2.0312, 91.456),
            row(2, "CYS B:30", "CYS B:115", 2.1, 87.0),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| l.chars().count() == lines[0].chars().count()));
        assert!(lines[1].contains("Dihedral Angle"));
        assert!(lines[3].contains("CYS A:127"));
        assert!(lines[3].contains("2.031"));
        assert!(lines[3].contains("91.46"));
        assert_eq!(lines[0], lines[5]);
    }

    #[test]
    fn empty_section_prints_the_notice() {
        let text = render_section(STRICT_HEADING, NO_STRICT_BONDS_NOTICE, &[]);
        assert!(text.contains(NO_STRICT_BONDS_NOTICE));
        assert!(!text.contains('+'));
        assert!(!text.contains(STRICT_HEADING));
    }

    #[test]
    fn populated_section_prints_heading_and_table() {
        let text = render_section(
            CONFIDENCE_INTERVAL_HEADING,
            NO_CONFIDENCE_INTERVAL_BONDS_NOTICE,
            &[row(1, "CYS A:3", "CYS A:40", 2.6, 90.0)],
        );
        assert!(text.contains(CONFIDENCE_INTERVAL_HEADING));
        assert!(text.contains("2.600"));
        assert!(!text.contains(NO_CONFIDENCE_INTERVAL_BONDS_NOTICE));
    }

    #[test]
    fn result_without_bonds_prints_both_notices() {
        let result = DetectionResult {
            origin: StructureOrigin::Experimental,
            cysteines_found: 1,
            cysteines_retained: 1,
            strict: BondSet::default(),
            confidence_interval: BondSet::default(),
        };
        let text = render_result(&result);

        assert!(text.contains(NO_STRICT_BONDS_NOTICE));
        assert!(text.contains(NO_CONFIDENCE_INTERVAL_BONDS_NOTICE));
        let strict_at = text.find(NO_STRICT_BONDS_NOTICE).unwrap();
        let ci_at = text.find(NO_CONFIDENCE_INTERVAL_BONDS_NOTICE).unwrap();
        assert!(strict_at < ci_at);
        assert!(!text.contains('+'));
        assert!(!text.contains(STRICT_HEADING));
        assert!(!text.contains(CONFIDENCE_INTERVAL_HEADING));
    }
}
