//! Column names of the atom and bond feature vectors.

use super::config::{AtomFeatureOptions, BondFeatureOptions};
use super::tables;

/// Names of the atom feature columns, in column order.
pub fn atom_columns(options: &AtomFeatureOptions) -> Vec<String> {
    let mut names = Vec::with_capacity(options.feature_len());

    names.extend(tables::ELEMENT_LABELS.iter().map(|e| format!("element={e}")));
    names.extend(tables::DEGREES.iter().map(|d| format!("heavy_degree={d}")));
    names.extend(tables::CHARGES.iter().map(|q| format!("formal_charge={q:+}")));
    names.push("in_ring".to_owned());
    names.push("aromatic".to_owned());
    names.push("mass_scaled".to_owned());
    names.push("vdw_radius_scaled".to_owned());
    names.push("covalent_radius_scaled".to_owned());

    if options.include_stereo {
        names.extend(tables::ATOM_PARITIES.iter().map(|p| format!("parity={p}")));
    }
    if options.include_implicit_hydrogens {
        names.extend(
            tables::HYDROGEN_COUNTS
                .iter()
                .map(|h| format!("implicit_h={h}")),
        );
    }

    names
}

/// Names of the bond feature columns, in column order.
pub fn bond_columns(options: &BondFeatureOptions) -> Vec<String> {
    let mut names = Vec::with_capacity(options.feature_len());

    names.extend(tables::BOND_ORDERS.iter().map(|o| format!("order={o}")));
    names.push("order=aromatic".to_owned());
    names.push("conjugated".to_owned());
    names.push("in_ring".to_owned());

    if options.include_stereo {
        names.extend(tables::BOND_PARITIES.iter().map(|p| format!("parity={p}")));
    }

    names
}
