use crate::model::types::{AtomParity, BondOrder, BondParity, Element};
use std::str::FromStr;

/// Interprets an element field that may be in any letter case.
///
/// Deuterium and tritium labels map to hydrogen.
pub fn guess_element_symbol(token: &str) -> Option<Element> {
    let token = token.trim();
    let mut chars = token.chars();
    let first = chars.next()?;
    let normalized: String = std::iter::once(first.to_ascii_uppercase())
        .chain(chars.map(|c| c.to_ascii_lowercase()))
        .collect();

    match normalized.as_str() {
        "D" | "T" => Some(Element::H),
        other => Element::from_str(other).ok(),
    }
}

pub fn bond_order_from_ctfile(value: i32) -> Option<BondOrder> {
    match value {
        1 => Some(BondOrder::Single),
        2 => Some(BondOrder::Double),
        3 => Some(BondOrder::Triple),
        4 => Some(BondOrder::Aromatic),
        _ => None,
    }
}

/// Decodes the atom-block charge field (`0` none, `1..=3` → +3..+1,
/// `4` doublet radical, `5..=7` → -1..-3).
pub fn charge_from_ctfile(code: i32) -> Option<i8> {
    match code {
        0 | 4 => Some(0),
        1 => Some(3),
        2 => Some(2),
        3 => Some(1),
        5 => Some(-1),
        6 => Some(-2),
        7 => Some(-3),
        _ => None,
    }
}

pub fn atom_parity_from_ctfile(code: i32) -> Option<AtomParity> {
    match code {
        0 => Some(AtomParity::None),
        1 => Some(AtomParity::Odd),
        2 => Some(AtomParity::Even),
        3 => Some(AtomParity::Unknown),
        _ => None,
    }
}

/// Bond stereo field; only the "either" mark on double bonds carries a
/// parity, wedges on single bonds do not.
pub fn bond_parity_from_ctfile(order: BondOrder, code: i32) -> BondParity {
    match (order, code) {
        (BondOrder::Double, 3) => BondParity::Unknown,
        _ => BondParity::None,
    }
}
