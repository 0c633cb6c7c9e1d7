use crate::core::io::traits::MolecularFile;
use crate::core::models::builder::{AtomRecord, MolecularSystemBuilder};
use crate::core::models::origin::StructureOrigin;
use crate::core::models::system::MolecularSystem;
use nalgebra::Point3;
use pdbtbx::{Format, PDBError, ReadOptions, StrictnessLevel};
use std::io::{self, BufRead, BufReader};
use thiserror::Error;
use tracing::debug;

/// File-level information collected while reading a structure file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbMetadata {
    /// Classification, date and ID code from the HEADER record
    /// (`_struct_keywords.pdbx_keywords` for mmCIF).
    pub header: String,
    /// Concatenated TITLE continuation lines (`_struct.title` for mmCIF).
    pub title: String,
    /// Concatenated COMPND continuation lines.
    pub compound: String,
    /// Number of models in the file; only the first is read.
    pub models_seen: usize,
    /// Atoms skipped because another conformer of the same atom was already read.
    pub alternate_locations_skipped: usize,
}

impl PdbMetadata {
    /// Text scanned for prediction-tool markers: HEADER and TITLE.
    pub fn descriptive_text(&self) -> String {
        [self.header.as_str(), self.title.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Decides whether the structure was predicted, from its header text.
    pub fn detect_origin<S: AsRef<str>>(&self, markers: &[S]) -> StructureOrigin {
        StructureOrigin::from_header_text(&self.descriptive_text(), markers)
    }
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Structure could not be parsed: {0}")]
    Parse(String),
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

impl PdbError {
    fn from_pdbtbx(errors: &[PDBError]) -> Self {
        PdbError::Parse(
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    line.get(start..end).unwrap_or("").trim()
}

fn append_continuation(target: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}

/// mmCIF files open with a `data_` block; anything else is read as PDB.
fn sniff_format(text: &str) -> Format {
    let first = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'));
    match first {
        Some(line) if line.starts_with("data_") => Format::Mmcif,
        _ => Format::Pdb,
    }
}

/// Collects the descriptive records the structure crate does not keep.
fn scan_descriptive_records(text: &str, format: &Format, metadata: &mut PdbMetadata) {
    for line in text.lines() {
        match format {
            Format::Mmcif => {
                let mut parts = line.trim().splitn(2, char::is_whitespace);
                let key = parts.next().unwrap_or("");
                let value = parts.next().unwrap_or("").trim().trim_matches(['\'', '"']);
                match key {
                    "_struct.title" => append_continuation(&mut metadata.title, value),
                    "_struct_keywords.pdbx_keywords" => metadata.header = value.to_string(),
                    _ => {}
                }
            }
            _ => match slice_and_trim(line, 0, 6) {
                "HEADER" => metadata.header = slice_and_trim(line, 10, 66).to_string(),
                "TITLE" => append_continuation(&mut metadata.title, slice_and_trim(line, 10, 80)),
                "COMPND" => {
                    append_continuation(&mut metadata.compound, slice_and_trim(line, 10, 80))
                }
                _ => {}
            },
        }
    }
}

/// Reader for PDB and mmCIF files, backed by `pdbtbx`.
///
/// Only the first model is read. When a residue carries alternate
/// locations, the first conformer encountered for each atom name is kept.
pub struct PdbFile;

impl MolecularFile for PdbFile {
    type Metadata = PdbMetadata;
    type Error = PdbError;

    fn read_from(
        reader: &mut impl BufRead,
    ) -> Result<(MolecularSystem, Self::Metadata), Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let format = sniff_format(&text);
        let mut metadata = PdbMetadata::default();
        scan_descriptive_records(&text, &format, &mut metadata);

        let (pdb, warnings) = ReadOptions::new()
            .set_format(format)
            .set_level(StrictnessLevel::Loose)
            .read_raw(BufReader::new(text.as_bytes()))
            .map_err(|errors| PdbError::from_pdbtbx(&errors))?;
        for warning in &warnings {
            debug!(%warning, "Structure reader warning.");
        }

        metadata.models_seen = pdb.model_count();
        let model = pdb
            .models()
            .next()
            .ok_or_else(|| PdbError::MissingRecord("ATOM/HETATM records".into()))?;

        let mut builder = MolecularSystemBuilder::new();
        let mut atom_count = 0usize;

        for chain in model.chains() {
            builder.start_chain(chain.id().chars().next().unwrap_or(' '));

            for residue in chain.residues() {
                let Some(first_conformer) = residue.conformers().next() else {
                    continue;
                };
                let insertion_code = residue.insertion_code().and_then(|code| code.chars().next());
                builder
                    .start_residue(residue.serial_number(), insertion_code, first_conformer.name())
                    .ok_or_else(|| {
                        PdbError::Inconsistency(format!(
                            "residue {} could not be added to chain '{}'",
                            residue.serial_number(),
                            chain.id()
                        ))
                    })?;

                for conformer in residue.conformers() {
                    let alternate = conformer.alternative_location().is_some();
                    for atom in conformer.atoms() {
                        if alternate && builder.current_residue_has_atom(atom.name()) {
                            metadata.alternate_locations_skipped += 1;
                            continue;
                        }

                        let (x, y, z) = atom.pos();
                        builder
                            .add_atom(AtomRecord {
                                serial: atom.serial_number(),
                                name: atom.name(),
                                position: Point3::new(x, y, z),
                                occupancy: atom.occupancy(),
                                quality: atom.b_factor(),
                                element: atom.element().map_or("", |element| element.symbol()),
                            })
                            .ok_or_else(|| {
                                PdbError::Inconsistency(format!(
                                    "atom {} outside of a residue",
                                    atom.serial_number()
                                ))
                            })?;
                        atom_count += 1;
                    }
                }
            }
        }

        if atom_count == 0 {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }
        Ok((builder.build(), metadata))
    }
}
