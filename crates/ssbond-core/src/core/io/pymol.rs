//! PyMOL script generation for detected disulfide bonds.
//!
//! The script loads the analysed structure, then for every bond selects the
//! S_γ, C_β and C_α atoms of both cysteines, draws the CA–CB–SG–SG–CB–CA
//! path as sticks, measures the S–S distance and the torsion, and labels
//! both sulfurs. It ends by zooming on the first sulfur of the first bond.

use crate::core::models::residue::ResidueKey;
use crate::engine::bond::BondCandidate;
use crate::engine::geometry::{ALPHA_CARBON, BETA_CARBON, GAMMA_SULFUR};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const SCRIPT_EXTENSION: &str = "py";

const SIDE_CHAIN_ATOMS: [&str; 3] = [GAMMA_SULFUR, BETA_CARBON, ALPHA_CARBON];

/// A generated PyMOL script, one command per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PymolScript {
    lines: Vec<String>,
}

impl PymolScript {
    /// Builds the script for `bonds`, drawn in the given order.
    ///
    /// `structure_path` becomes a Python string literal in the `cmd.load` call; pass an
    /// absolute path if the script may be run from another directory.
    pub fn generate(structure_path: &Path, bonds: &[BondCandidate]) -> Self {
        let mut lines = vec![
            "from pymol import cmd".to_string(),
            format!(
                "cmd.load({})",
                python_string_literal(&structure_path.to_string_lossy())
            ),
        ];

        for bond in bonds {
            push_bond_commands(&mut lines, &bond.cys1.key, &bond.cys2.key);
        }

        if let Some(first) = bonds.first() {
            lines.push(format!(
                "cmd.zoom('{}')",
                selection_name(GAMMA_SULFUR, &first.cys1.key)
            ));
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()
    }
}

fn push_bond_commands(lines: &mut Vec<String>, first: &ResidueKey, second: &ResidueKey) {
    for key in [first, second] {
        for atom in SIDE_CHAIN_ATOMS {
            lines.push(format!(
                "cmd.select('{}', '{}')",
                selection_name(atom, key),
                selection_expression(atom, key)
            ));
        }
    }

    let path = [
        selection_name(ALPHA_CARBON, first),
        selection_name(BETA_CARBON, first),
        selection_name(GAMMA_SULFUR, first),
        selection_name(GAMMA_SULFUR, second),
        selection_name(BETA_CARBON, second),
        selection_name(ALPHA_CARBON, second),
    ];
    for pair in path.windows(2) {
        lines.push(format!("cmd.bond('{}', '{}')", pair[0], pair[1]));
        lines.push(format!("cmd.show('sticks', '{} or {}')", pair[0], pair[1]));
    }

    let tag = format!("{}_{}", residue_tag(first), residue_tag(second));
    lines.push(format!(
        "cmd.distance('dist_{}', '{}', '{}')",
        tag, path[2], path[3]
    ));
    lines.push(format!(
        "cmd.dihedral('dihe_{}', '{}', '{}', '{}', '{}')",
        tag, path[1], path[2], path[3], path[4]
    ));

    for sulfur in [&path[2], &path[3]] {
        lines.push(format!(
            "cmd.label('{}', '\"{}-CYS%s\" % resi')",
            sulfur, GAMMA_SULFUR
        ));
    }
}

/// Double-quoted Python string literal for `text`.
///
/// Only the quote, the backslash and control characters are escaped; every
/// other character, combining marks included, is written as UTF-8, which is
/// the encoding Python 3 assumes for source files.
fn python_string_literal(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for c in text.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => literal.push_str(&format!("\\u{:04x}", c as u32)),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

/// Selection name such as `SG_A10`; chain-qualified so homodimer bonds between
/// equally numbered residues stay distinct.
pub fn selection_name(atom: &str, key: &ResidueKey) -> String {
    format!("{}_{}", atom, residue_tag(key))
}

fn residue_tag(key: &ResidueKey) -> String {
    if key.has_chain() {
        format!("{}{}", key.chain_id, key.resi())
    } else {
        key.resi()
    }
}

fn selection_expression(atom: &str, key: &ResidueKey) -> String {
    if key.has_chain() {
        format!("chain {} and resi {} and name {}", key.chain_id, key.resi(), atom)
    } else {
        format!("resi {} and name {}", key.resi(), atom)
    }
}

/// Where the script for `structure_path` goes: `<output_dir>/<basename>.py`.
///
/// The basename is the file name up to its first `.`, so `1abc.pdb.gz`
/// becomes `1abc.py`. A non-empty `output_dir` is created if absent; an
/// empty one means the current directory.
pub fn script_output_path(output_dir: &Path, structure_path: &Path) -> io::Result<PathBuf> {
    let file_name = structure_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' does not name a file", structure_path.display()),
            )
        })?;
    let basename = file_name.split('.').next().unwrap_or_default();
    if basename.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("cannot derive a script name from '{}'", file_name),
        ));
    }

    if !output_dir.as_os_str().is_empty() {
        fs::create_dir_all(output_dir)?;
    }
    Ok(output_dir.join(format!("{}.{}", basename, SCRIPT_EXTENSION)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ids::ResidueId;
    use crate::engine::bond::{CysteineRef, Tier};
    use slotmap::KeyData;
    use tempfile::tempdir;

    fn bond(a: ResidueKey, b: ResidueKey) -> BondCandidate {
        BondCandidate {
            cys1: CysteineRef {
                id: ResidueId::from(KeyData::from_ffi(1)),
                key: a,
            },
            cys2: CysteineRef {
                id: ResidueId::from(KeyData::from_ffi(2)),
                key: b,
            },
            distance: 2.03,
            dihedral_angle: 91.2,
            tier: Tier::Strict,
        }
    }

    #[test]
    fn empty_bond_list_only_loads_the_structure() {
        let script = PymolScript::generate(Path::new("/data/1abc.pdb"), &[]);
        assert_eq!(
            script.lines(),
            &["from pymol import cmd", "cmd.load(\"/data/1abc.pdb\")"]
        );
    }

    #[test]
    fn load_path_is_a_valid_python_literal() {
        let script = PymolScript::generate(Path::new("/data/cafe\u{301}/1abc.pdb"), &[]);
        assert_eq!(script.lines()[1], "cmd.load(\"/data/cafe\u{301}/1abc.pdb\")");
        assert!(!script.lines()[1].contains("\\u{"));
    }

    #[test]
    fn quotes_backslashes_and_control_characters_are_escaped() {
        assert_eq!(
            python_string_literal(r#"C:\runs\"a"\1abc.pdb"#),
            r#""C:\\runs\\\"a\"\\1abc.pdb""#
        );
        assert_eq!(python_string_literal("a\tb\u{7}"), r#""a\tb\u0007""#);
        assert_eq!(python_string_literal("/données/ß.pdb"), "\"/données/ß.pdb\"");
    }

    #[test]
    fn one_bond_produces_the_full_command_block() {
        let script = PymolScript::generate(
            Path::new("/data/1abc.pdb"),
            &[bond(ResidueKey::new('A', 10), ResidueKey::new('A', 45))],
        );
        let lines = script.lines();

        let count = |prefix: &str| lines.iter().filter(|l| l.starts_with(prefix)).count();
        assert_eq!(count("cmd.load("), 1);
        assert_eq!(count("cmd.select("), 6);
        assert_eq!(count("cmd.bond("), 5);
        assert_eq!(count("cmd.show('sticks'"), 5);
        assert_eq!(count("cmd.distance("), 1);
        assert_eq!(count("cmd.dihedral("), 1);
        assert_eq!(count("cmd.label("), 2);
        assert_eq!(count("cmd.zoom("), 1);

        assert!(lines.contains(&"cmd.select('SG_A10', 'chain A and resi 10 and name SG')".to_string()));
        assert!(lines.contains(&"cmd.bond('SG_A10', 'SG_A45')".to_string()));
        assert!(lines.contains(
            &"cmd.dihedral('dihe_A10_A45', 'CB_A10', 'SG_A10', 'SG_A45', 'CB_A45')".to_string()
        ));
        assert!(lines.contains(&"cmd.label('SG_A45', '\"SG-CYS%s\" % resi')".to_string()));
        assert_eq!(lines.last().unwrap(), "cmd.zoom('SG_A10')");
    }

    #[test]
    fn bonds_are_drawn_in_order_and_zoom_targets_the_first() {
        let script = PymolScript::generate(
            Path::new("x.pdb"),
            &[
                bond(ResidueKey::new('B', 7), ResidueKey::new('B', 30)),
                bond(ResidueKey::new('A', 2), ResidueKey::new('A', 9)),
            ],
        );
        let lines = script.lines();
        let first = lines.iter().position(|l| l.contains("SG_B7")).unwrap();
        let second = lines.iter().position(|l| l.contains("SG_A2")).unwrap();
        assert!(first < second);
        assert_eq!(lines.last().unwrap(), "cmd.zoom('SG_B7')");
        assert_eq!(lines.iter().filter(|l| l.starts_with("cmd.zoom(")).count(), 1);
    }

    #[test]
    fn homodimer_bond_keeps_both_ends_distinct() {
        let script = PymolScript::generate(
            Path::new("dimer.pdb"),
            &[bond(ResidueKey::new('A', 10), ResidueKey::new('B', 10))],
        );
        assert!(script.lines().contains(&"cmd.bond('SG_A10', 'SG_B10')".to_string()));
    }

    #[test]
    fn blank_chain_and_insertion_codes_are_handled() {
        let mut key = ResidueKey::new(' ', 52);
        key.insertion_code = Some('A');
        assert_eq!(selection_name(GAMMA_SULFUR, &key), "SG_52A");
        assert_eq!(selection_expression(GAMMA_SULFUR, &key), "resi 52A and name SG");
    }

    #[test]
    fn output_path_uses_basename_before_first_dot() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("scripts/nested");
        let path = script_output_path(&out, Path::new("/some/where/1abc.pdb.gz")).unwrap();
        assert_eq!(path, out.join("1abc.py"));
        assert!(out.is_dir());
    }

    #[test]
    fn empty_output_dir_means_current_directory() {
        let path = script_output_path(Path::new(""), Path::new("model.cif.pdb")).unwrap();
        assert_eq!(path, PathBuf::from("model.py"));
    }

    #[test]
    fn hidden_file_without_stem_is_rejected() {
        assert!(script_output_path(Path::new(""), Path::new(".pdb")).is_err());
    }

    #[test]
    fn written_file_matches_lines() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("out.py");
        let script = PymolScript::generate(
            Path::new("/data/1abc.pdb"),
            &[bond(ResidueKey::new('A', 1), ResidueKey::new('A', 2))],
        );
        script.write_to_path(&target).unwrap();

        let content = std::fs::read_to_string(&target).unwrap();
        let read_back: Vec<&str> = content.lines().collect();
        assert_eq!(read_back, script.lines());
    }
}
