//! Tabular datasets for the two bond tiers.
//!
//! Rows are plain data; rendering them as text is left to the caller. The
//! CSV writer puts both tiers in one file, distinguished by a `tier` column.

use crate::core::models::residue::{CYSTEINE_CODE, ResidueKey};
use crate::engine::bond::{BondSet, Tier};
use serde::Serialize;
use std::io::Write;

pub const NO_STRICT_BONDS_NOTICE: &str = "No potential disulfide bond has been detected.";
pub const NO_CONFIDENCE_INTERVAL_BONDS_NOTICE: &str =
    "There are no additional disulfide bonds that need to be checked.";

/// One line of a bond report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondRow {
    /// 1-based position within its tier.
    pub bond: usize,
    pub cys1: String,
    pub cys2: String,
    pub distance: f64,
    pub dihedral_angle: f64,
}

#[derive(Serialize)]
struct CsvRecord<'a> {
    tier: Tier,
    bond: usize,
    cys1: &'a str,
    cys2: &'a str,
    distance: f64,
    dihedral_angle: f64,
}

/// Printable descriptor of a cysteine, e.g. `CYS A:10`.
pub fn cysteine_descriptor(key: &ResidueKey) -> String {
    format!("{} {}", CYSTEINE_CODE, key)
}

pub fn bond_rows(bonds: &BondSet) -> Vec<BondRow> {
    bonds
        .iter()
        .enumerate()
        .map(|(index, bond)| BondRow {
            bond: index + 1,
            cys1: cysteine_descriptor(&bond.cys1.key),
            cys2: cysteine_descriptor(&bond.cys2.key),
            distance: bond.distance,
            dihedral_angle: bond.dihedral_angle,
        })
        .collect()
}

/// Writes both tiers as CSV with a header row; strict bonds first.
pub fn write_csv<W: Write>(
    writer: W,
    strict: &BondSet,
    confidence_interval: &BondSet,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut wrote_any = false;
    for (tier, set) in [
        (Tier::Strict, strict),
        (Tier::ConfidenceInterval, confidence_interval),
    ] {
        for row in bond_rows(set) {
            csv_writer.serialize(CsvRecord {
                tier,
                bond: row.bond,
                cys1: &row.cys1,
                cys2: &row.cys2,
                distance: row.distance,
                dihedral_angle: row.dihedral_angle,
            })?;
            wrote_any = true;
        }
    }
    if !wrote_any {
        csv_writer.write_record([
            "tier",
            "bond",
            "cys1",
            "cys2",
            "distance",
            "dihedral_angle",
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
