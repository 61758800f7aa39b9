//! Vocabularies and normalization constants shared by the feature
//! extractors.
//!
//! All data here is `const`; nothing is initialized or mutated at runtime.

/// Atomic numbers of the element vocabulary, in column order.
///
/// The trailing `0` is the "Other" slot: no real element has atomic number
/// zero, so everything not listed before it lands there.
pub const ELEMENTS: [u8; 11] = [6, 7, 8, 16, 9, 15, 17, 35, 53, 5, 0];

/// Symbols matching [`ELEMENTS`], used for column names.
pub const ELEMENT_LABELS: [&str; 11] = ["C", "N", "O", "S", "F", "P", "Cl", "Br", "I", "B", "Other"];

pub const DEGREES: [usize; 5] = [0, 1, 2, 3, 4];
pub const MAX_DEGREE: usize = 4;

pub const CHARGES: [i32; 7] = [-3, -2, -1, 0, 1, 2, 3];
pub const MIN_CHARGE: i32 = -3;
pub const MAX_CHARGE: i32 = 3;

pub const ATOM_PARITIES: [u8; 4] = [0, 1, 2, 3];
/// Parity code used when a structure leaves atom stereo undefined.
pub const UNDEFINED_ATOM_PARITY: u8 = 0;

pub const HYDROGEN_COUNTS: [u8; 5] = [0, 1, 2, 3, 4];
pub const MAX_HYDROGENS: u8 = 4;

pub const BOND_ORDERS: [u8; 3] = [1, 2, 3];
pub const MAX_BOND_ORDER: u8 = 3;

/// Bond stereo codes in column order. The order is not numeric and must
/// stay as it is.
pub const BOND_PARITIES: [u8; 4] = [1, 2, 0, 3];
/// Parity code used when a structure leaves bond stereo undefined.
pub const UNDEFINED_BOND_PARITY: u8 = 3;

/// Affine scaling of a tabulated physical property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    pub mean: f64,
    pub scale: f64,
    /// Raw value used for atomic numbers missing from the table.
    pub fallback: f64,
}

impl Scaling {
    #[inline]
    pub fn apply(&self, raw: Option<f64>) -> f64 {
        (raw.unwrap_or(self.fallback) - self.mean) / self.scale
    }
}

pub const MASS_SCALING: Scaling = Scaling {
    mean: 10.812,
    scale: 116.092,
    fallback: 0.0,
};

pub const VDW_SCALING: Scaling = Scaling {
    mean: 1.5,
    scale: 0.6,
    fallback: 1.5,
};

pub const COVALENT_SCALING: Scaling = Scaling {
    mean: 0.64,
    scale: 0.76,
    fallback: 0.64,
};

/// Rounded mass of the most abundant (or longest-lived) isotope, indexed by
/// atomic number minus one.
static MASSES: [f64; 118] = [
    1.0, 4.0, 7.0, 9.0, 11.0, 12.0, 14.0, 16.0, 19.0, 20.0,
    23.0, 24.0, 27.0, 28.0, 31.0, 32.0, 35.0, 40.0, 39.0, 40.0,
    45.0, 48.0, 51.0, 52.0, 55.0, 56.0, 59.0, 58.0, 63.0, 64.0,
    69.0, 74.0, 75.0, 80.0, 79.0, 84.0, 85.0, 88.0, 89.0, 90.0,
    93.0, 98.0, 98.0, 102.0, 103.0, 106.0, 107.0, 114.0, 115.0, 120.0,
    121.0, 130.0, 127.0, 132.0, 133.0, 138.0, 139.0, 140.0, 141.0, 142.0,
    145.0, 152.0, 153.0, 158.0, 159.0, 164.0, 165.0, 166.0, 169.0, 174.0,
    175.0, 180.0, 181.0, 184.0, 187.0, 192.0, 193.0, 195.0, 197.0, 202.0,
    205.0, 208.0, 209.0, 209.0, 210.0, 222.0, 223.0, 226.0, 227.0, 232.0,
    231.0, 238.0, 237.0, 244.0, 243.0, 247.0, 247.0, 251.0, 252.0, 257.0,
    258.0, 259.0, 262.0, 267.0, 268.0, 269.0, 270.0, 269.0, 278.0, 281.0,
    282.0, 285.0, 286.0, 289.0, 290.0, 293.0, 294.0, 294.0,
];

/// Van der Waals radii in Å.
static VDW_RADII: [(u8, f64); 10] = [
    (1, 1.2),
    (6, 1.7),
    (7, 1.55),
    (8, 1.52),
    (9, 1.47),
    (15, 1.8),
    (16, 1.8),
    (17, 1.75),
    (35, 1.85),
    (53, 1.98),
];

/// Covalent radii in Å.
static COVALENT_RADII: [(u8, f64); 10] = [
    (1, 0.31),
    (6, 0.76),
    (7, 0.71),
    (8, 0.66),
    (9, 0.57),
    (15, 1.07),
    (16, 1.05),
    (17, 1.02),
    (35, 1.2),
    (53, 1.39),
];

fn lookup(table: &[(u8, f64)], atomic_number: u8) -> Option<f64> {
    table
        .iter()
        .find(|&&(z, _)| z == atomic_number)
        .map(|&(_, v)| v)
}

pub fn mass(atomic_number: u8) -> Option<f64> {
    usize::from(atomic_number)
        .checked_sub(1)
        .and_then(|idx| MASSES.get(idx))
        .copied()
}

pub fn vdw_radius(atomic_number: u8) -> Option<f64> {
    lookup(&VDW_RADII, atomic_number)
}

pub fn covalent_radius(atomic_number: u8) -> Option<f64> {
    lookup(&COVALENT_RADII, atomic_number)
}
