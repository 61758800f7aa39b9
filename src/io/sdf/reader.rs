use crate::io::{Format, error::Error, util};
use crate::model::{
    atom::Atom,
    molecule::{Bond, Molecule},
};
use std::io::BufRead;

/// Reads the first record of an MDL SDF/MOL (V2000) stream.
pub fn read<R: BufRead>(reader: R) -> Result<Molecule, Error> {
    let lines = collect_first_block(reader)?;
    if lines.len() < 4 {
        return Err(Error::parse(
            Format::Sdf,
            lines.len().max(1),
            "SDF block must contain at least a header and counts line",
        ));
    }

    let counts_line_no = lines[3].0;
    let counts_line = &lines[3].1;
    if counts_line.contains("V3000") {
        return Err(Error::parse(
            Format::Sdf,
            counts_line_no,
            "V3000 is not supported",
        ));
    }

    let (atom_count, bond_count) = parse_counts(counts_line, counts_line_no)?;
    let atom_start = 4;
    let bond_start = atom_start + atom_count;

    if lines.len() < bond_start + bond_count {
        return Err(Error::parse(
            Format::Sdf,
            lines.last().map(|(ln, _)| *ln).unwrap_or(counts_line_no),
            "SDF block ended before atoms/bonds were fully specified",
        ));
    }

    let mut molecule = Molecule::new();
    molecule.atoms = parse_atoms(&lines[atom_start..bond_start])?;
    molecule.bonds = parse_bonds(&lines[bond_start..bond_start + bond_count], atom_count)?;

    for bond in &molecule.bonds {
        if bond.order.is_aromatic() {
            molecule.atoms[bond.i].aromatic = true;
            molecule.atoms[bond.j].aromatic = true;
        }
    }

    apply_properties(&lines[bond_start + bond_count..], &mut molecule)?;

    Ok(molecule)
}

fn collect_first_block<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>, Error> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let content = line.map_err(|e| Error::Io { source: e })?;
        let ln = i + 1;
        if content.trim() == "$$$$" && !lines.is_empty() {
            break;
        }
        lines.push((ln, content));
    }
    Ok(lines)
}

fn parse_counts(line: &str, line_no: usize) -> Result<(usize, usize), Error> {
    if !line.is_ascii() {
        return Err(Error::parse(Format::Sdf, line_no, "counts line must be plain ASCII"));
    }
    let padded = format!("{line:<6}");
    let atoms = padded[0..3]
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Sdf, line_no, "invalid atom count"))?;
    let bonds = padded[3..6]
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Sdf, line_no, "invalid bond count"))?;
    Ok((atoms, bonds))
}

fn int_field(padded: &str, range: std::ops::Range<usize>) -> Option<i32> {
    let field = padded.get(range)?.trim();
    if field.is_empty() {
        Some(0)
    } else {
        field.parse().ok()
    }
}

fn parse_atoms(lines: &[(usize, String)]) -> Result<Vec<Atom>, Error> {
    let mut atoms = Vec::with_capacity(lines.len());
    for (ln, raw) in lines {
        if !raw.is_ascii() {
            return Err(Error::parse(Format::Sdf, *ln, "atom line must be plain ASCII"));
        }
        let padded = format!("{raw:<48}");

        for (axis, range) in [("x", 0..10), ("y", 10..20), ("z", 20..30)] {
            padded[range].trim().parse::<f64>().map_err(|_| {
                Error::parse(Format::Sdf, *ln, format!("invalid {axis} coordinate in atom line"))
            })?;
        }

        let element_token = padded[31..34].trim();
        let element = util::guess_element_symbol(element_token)
            .ok_or_else(|| Error::parse(Format::Sdf, *ln, "unable to infer element symbol"))?;

        let charge = int_field(&padded, 36..39)
            .and_then(util::charge_from_ctfile)
            .ok_or_else(|| Error::parse(Format::Sdf, *ln, "invalid charge field in atom line"))?;
        let parity = int_field(&padded, 39..42)
            .and_then(util::atom_parity_from_ctfile)
            .ok_or_else(|| Error::parse(Format::Sdf, *ln, "invalid parity field in atom line"))?;

        atoms.push(Atom::new(element).with_charge(charge).with_parity(parity));
    }
    Ok(atoms)
}

fn parse_bonds(lines: &[(usize, String)], atom_count: usize) -> Result<Vec<Bond>, Error> {
    let mut bonds = Vec::with_capacity(lines.len());
    for (ln, raw) in lines {
        if !raw.is_ascii() {
            return Err(Error::parse(Format::Sdf, *ln, "bond line must be plain ASCII"));
        }
        let padded = format!("{raw:<12}");

        let a1 = padded[0..3]
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::parse(Format::Sdf, *ln, "invalid first atom index"))?;
        let a2 = padded[3..6]
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::parse(Format::Sdf, *ln, "invalid second atom index"))?;
        let order_val = padded[6..9]
            .trim()
            .parse::<i32>()
            .map_err(|_| Error::parse(Format::Sdf, *ln, "invalid bond order value"))?;
        let stereo = int_field(&padded, 9..12)
            .ok_or_else(|| Error::parse(Format::Sdf, *ln, "invalid bond stereo value"))?;

        let order = util::bond_order_from_ctfile(order_val)
            .ok_or_else(|| Error::parse(Format::Sdf, *ln, "unsupported bond order in bond line"))?;

        if a1 == 0 || a2 == 0 || a1 > atom_count || a2 > atom_count {
            return Err(Error::parse(
                Format::Sdf,
                *ln,
                "bond references atom outside declared range",
            ));
        }
        if a1 == a2 {
            return Err(Error::parse(Format::Sdf, *ln, "bond joins an atom to itself"));
        }

        bonds.push(
            Bond::new(a1 - 1, a2 - 1, order)
                .with_parity(util::bond_parity_from_ctfile(order, stereo)),
        );
    }
    Ok(bonds)
}

/// Applies `M  CHG` entries. When present they replace every charge given
/// in the atom block.
fn apply_properties(lines: &[(usize, String)], molecule: &mut Molecule) -> Result<(), Error> {
    let mut reset = false;

    for (ln, raw) in lines {
        if raw.starts_with("M  END") {
            break;
        }
        let Some(rest) = raw.strip_prefix("M  CHG") else {
            continue;
        };

        if !reset {
            for atom in &mut molecule.atoms {
                atom.formal_charge = 0;
            }
            reset = true;
        }

        let values: Vec<i32> = rest
            .split_whitespace()
            .map(|t| t.parse::<i32>())
            .collect::<Result<_, _>>()
            .map_err(|_| Error::parse(Format::Sdf, *ln, "invalid M  CHG entry"))?;
        let Some((&count, pairs)) = values.split_first() else {
            return Err(Error::parse(Format::Sdf, *ln, "empty M  CHG entry"));
        };
        if usize::try_from(count).ok() != Some(pairs.len() / 2) || pairs.len() % 2 != 0 {
            return Err(Error::parse(
                Format::Sdf,
                *ln,
                "M  CHG count does not match its entries",
            ));
        }

        for pair in pairs.chunks_exact(2) {
            let atom = usize::try_from(pair[0])
                .ok()
                .filter(|&a| a >= 1 && a <= molecule.atom_count())
                .ok_or_else(|| {
                    Error::parse(Format::Sdf, *ln, "M  CHG references atom outside declared range")
                })?;
            let charge = i8::try_from(pair[1])
                .map_err(|_| Error::parse(Format::Sdf, *ln, "M  CHG charge out of range"))?;
            molecule.atoms[atom - 1].formal_charge = charge;
        }
    }

    Ok(())
}
