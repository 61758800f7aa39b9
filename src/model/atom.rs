use super::types::{AtomParity, Element};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub element: Element,
    pub formal_charge: i8,
    pub aromatic: bool,
    pub parity: AtomParity,
    /// Hydrogen count fixed by the input (bracket atoms); `None` defers
    /// to the default valence model during perception.
    pub hydrogens: Option<u8>,
}

impl Atom {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            formal_charge: 0,
            aromatic: false,
            parity: AtomParity::None,
            hydrogens: None,
        }
    }

    pub fn with_charge(mut self, formal_charge: i8) -> Self {
        self.formal_charge = formal_charge;
        self
    }

    pub fn with_aromatic(mut self, aromatic: bool) -> Self {
        self.aromatic = aromatic;
        self
    }

    pub fn with_parity(mut self, parity: AtomParity) -> Self {
        self.parity = parity;
        self
    }

    pub fn with_hydrogens(mut self, hydrogens: u8) -> Self {
        self.hydrogens = Some(hydrogens);
        self
    }
}
