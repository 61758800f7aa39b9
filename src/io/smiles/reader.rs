use crate::io::{Format, error::Error};
use crate::model::{
    atom::Atom,
    molecule::{Bond, Molecule},
    types::{AtomParity, BondOrder, BondParity, Element},
};
use std::collections::HashMap;
use std::io::BufRead;
use std::str::FromStr;

/// Reads the first SMILES string found in `reader`.
///
/// Blank lines are skipped; anything after the first whitespace on the
/// SMILES line is treated as a title and ignored.
pub fn read<R: BufRead>(reader: R) -> Result<Molecule, Error> {
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            return parse(&line);
        }
    }
    Err(Error::parse_at(Format::Smiles, 1, "input contains no SMILES"))
}

/// Parses one SMILES string.
pub fn parse(smiles: &str) -> Result<Molecule, Error> {
    let token = smiles.split_whitespace().next().unwrap_or("");
    if token.is_empty() {
        return Err(Error::parse_at(Format::Smiles, 1, "empty SMILES"));
    }
    if !token.is_ascii() {
        return Err(Error::parse_at(
            Format::Smiles,
            1,
            "SMILES must be plain ASCII",
        ));
    }
    Parser::new(token).run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BondSymbol {
    Single,
    Double,
    Triple,
    Quadruple,
    Aromatic,
    Up,
    Down,
}

impl BondSymbol {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'-' => Some(BondSymbol::Single),
            b'=' => Some(BondSymbol::Double),
            b'#' => Some(BondSymbol::Triple),
            b'$' => Some(BondSymbol::Quadruple),
            b':' => Some(BondSymbol::Aromatic),
            b'/' => Some(BondSymbol::Up),
            b'\\' => Some(BondSymbol::Down),
            _ => None,
        }
    }

    fn order(self) -> BondOrder {
        match self {
            BondSymbol::Single | BondSymbol::Up | BondSymbol::Down => BondOrder::Single,
            BondSymbol::Double => BondOrder::Double,
            BondSymbol::Triple => BondOrder::Triple,
            BondSymbol::Quadruple => BondOrder::Quadruple,
            BondSymbol::Aromatic => BondOrder::Aromatic,
        }
    }

    /// `+1` for `/`, `-1` for `\`, relative to the written direction.
    fn direction(self) -> Option<i8> {
        match self {
            BondSymbol::Up => Some(1),
            BondSymbol::Down => Some(-1),
            _ => None,
        }
    }
}

struct RingOpening {
    atom: usize,
    symbol: Option<BondSymbol>,
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    mol: Molecule,
    prev: Option<usize>,
    branches: Vec<(Option<usize>, usize)>,
    pending: Option<(BondSymbol, usize)>,
    rings: HashMap<u32, RingOpening>,
    /// Direction marks of `/` and `\` bonds, relative to `bond.i → bond.j`.
    directions: Vec<Option<i8>>,
}

impl<'a> Parser<'a> {
    fn new(smiles: &'a str) -> Self {
        Self {
            bytes: smiles.as_bytes(),
            pos: 0,
            mol: Molecule::new(),
            prev: None,
            branches: Vec::new(),
            pending: None,
            rings: HashMap::new(),
            directions: Vec::new(),
        }
    }

    fn error(&self, column: usize, details: impl Into<String>) -> Error {
        Error::parse_at(Format::Smiles, column + 1, details)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn run(mut self) -> Result<Molecule, Error> {
        while let Some(b) = self.peek() {
            let start = self.pos;
            match b {
                b'(' => {
                    if self.prev.is_none() {
                        return Err(self.error(start, "branch opened before any atom"));
                    }
                    if self.pending.is_some() {
                        return Err(self.error(start, "bond symbol before branch"));
                    }
                    self.branches.push((self.prev, start));
                    self.pos += 1;
                }
                b')' => {
                    if self.pending.is_some() {
                        return Err(self.error(start, "branch ends with a bond symbol"));
                    }
                    let (prev, _) = self
                        .branches
                        .pop()
                        .ok_or_else(|| self.error(start, "unmatched ')'"))?;
                    self.prev = prev;
                    self.pos += 1;
                }
                b'.' => {
                    if self.pending.is_some() {
                        return Err(self.error(start, "bond symbol before '.'"));
                    }
                    self.prev = None;
                    self.pos += 1;
                }
                b'0'..=b'9' | b'%' => self.ring_bond()?,
                b'[' => {
                    let atom = self.bracket_atom()?;
                    self.attach(atom, start)?;
                }
                _ => {
                    if let Some(symbol) = BondSymbol::from_byte(b) {
                        if self.pending.is_some() {
                            return Err(self.error(start, "two consecutive bond symbols"));
                        }
                        if self.prev.is_none() {
                            return Err(self.error(start, "bond symbol without a preceding atom"));
                        }
                        self.pending = Some((symbol, start));
                        self.pos += 1;
                    } else {
                        let atom = self.organic_atom()?;
                        self.attach(atom, start)?;
                    }
                }
            }
        }

        if let Some((_, at)) = self.pending {
            return Err(self.error(at, "SMILES ends with a bond symbol"));
        }
        if let Some(&(_, at)) = self.branches.last() {
            return Err(self.error(at, "unclosed branch"));
        }
        if let Some(id) = self.rings.keys().min() {
            return Err(self.error(self.bytes.len(), format!("unclosed ring bond {id}")));
        }
        if self.mol.is_empty() {
            return Err(self.error(0, "SMILES contains no atoms"));
        }

        assign_double_bond_parities(&mut self.mol, &self.directions);
        Ok(self.mol)
    }

    fn attach(&mut self, atom: Atom, start: usize) -> Result<(), Error> {
        let idx = self.mol.add_atom(atom);
        let pending = self.pending.take().map(|(s, _)| s);

        match self.prev {
            Some(prev) => self.connect(prev, idx, pending),
            None if pending.is_some() => {
                return Err(self.error(start, "bond symbol without a preceding atom"));
            }
            None => {}
        }

        self.prev = Some(idx);
        Ok(())
    }

    fn connect(&mut self, a: usize, b: usize, symbol: Option<BondSymbol>) {
        let order = match symbol {
            Some(s) => s.order(),
            None if self.mol.atoms[a].aromatic && self.mol.atoms[b].aromatic => BondOrder::Aromatic,
            None => BondOrder::Single,
        };
        self.mol.add_bond(Bond::new(a, b, order));
        self.directions.push(symbol.and_then(BondSymbol::direction));
    }

    fn ring_bond(&mut self) -> Result<(), Error> {
        let start = self.pos;
        let id = if self.peek() == Some(b'%') {
            let digits = self.bytes.get(start + 1..start + 3);
            let id = digits
                .filter(|d| d.iter().all(u8::is_ascii_digit))
                .and_then(|d| std::str::from_utf8(d).ok())
                .and_then(|d| d.parse::<u32>().ok())
                .ok_or_else(|| self.error(start, "'%' must be followed by two digits"))?;
            self.pos += 3;
            id
        } else {
            let id = u32::from(self.bytes[start] - b'0');
            self.pos += 1;
            id
        };

        let Some(atom) = self.prev else {
            return Err(self.error(start, "ring bond without a preceding atom"));
        };
        let symbol = self.pending.take().map(|(s, _)| s);

        match self.rings.remove(&id) {
            None => {
                self.rings.insert(id, RingOpening { atom, symbol });
            }
            Some(opening) => {
                if opening.atom == atom {
                    return Err(self.error(start, format!("ring bond {id} closes on its own atom")));
                }
                let symbol = match (opening.symbol, symbol) {
                    (Some(a), Some(b)) if a.order() != b.order() => {
                        return Err(self.error(start, format!("conflicting bond symbols on ring bond {id}")));
                    }
                    (Some(a), _) => Some(a),
                    // A mark written at the closing atom points the other way.
                    (None, Some(b)) => Some(match b {
                        BondSymbol::Up => BondSymbol::Down,
                        BondSymbol::Down => BondSymbol::Up,
                        other => other,
                    }),
                    (None, None) => None,
                };
                self.connect(opening.atom, atom, symbol);
            }
        }
        Ok(())
    }

    fn organic_atom(&mut self) -> Result<Atom, Error> {
        let start = self.pos;
        let rest = &self.bytes[start..];

        let (element, aromatic, len) = match rest {
            [b'C', b'l', ..] => (Element::Cl, false, 2),
            [b'B', b'r', ..] => (Element::Br, false, 2),
            [b'B', ..] => (Element::B, false, 1),
            [b'C', ..] => (Element::C, false, 1),
            [b'N', ..] => (Element::N, false, 1),
            [b'O', ..] => (Element::O, false, 1),
            [b'P', ..] => (Element::P, false, 1),
            [b'S', ..] => (Element::S, false, 1),
            [b'F', ..] => (Element::F, false, 1),
            [b'I', ..] => (Element::I, false, 1),
            [b'b', ..] => (Element::B, true, 1),
            [b'c', ..] => (Element::C, true, 1),
            [b'n', ..] => (Element::N, true, 1),
            [b'o', ..] => (Element::O, true, 1),
            [b'p', ..] => (Element::P, true, 1),
            [b's', ..] => (Element::S, true, 1),
            [b'*', ..] => return Err(self.error(start, "wildcard atoms are not supported")),
            _ => {
                return Err(self.error(
                    start,
                    format!("unexpected character '{}'", char::from(rest[0])),
                ));
            }
        };

        self.pos += len;
        Ok(Atom::new(element).with_aromatic(aromatic))
    }

    fn bracket_atom(&mut self) -> Result<Atom, Error> {
        let open = self.pos;
        let close = self.bytes[open..]
            .iter()
            .position(|&b| b == b']')
            .map(|off| open + off)
            .ok_or_else(|| self.error(open, "unclosed '['"))?;

        let body = &self.bytes[open + 1..close];
        let mut cur = 0;
        let at = |cur: usize| open + 1 + cur;

        // Isotope is accepted but not kept.
        while cur < body.len() && body[cur].is_ascii_digit() {
            cur += 1;
        }

        let (element, aromatic, len) = bracket_symbol(&body[cur..])
            .ok_or_else(|| self.error(at(cur), "unknown element symbol in bracket atom"))?;
        cur += len;

        let mut parity = AtomParity::None;
        if body.get(cur) == Some(&b'@') {
            cur += 1;
            parity = if body.get(cur) == Some(&b'@') {
                cur += 1;
                AtomParity::Even
            } else if body
                .get(cur..cur + 2)
                .is_some_and(|c| c.iter().all(u8::is_ascii_uppercase))
            {
                // @TH1, @SP2, @OH12 and friends.
                cur += 2;
                cur += digits(&body[cur..]).1;
                AtomParity::Unknown
            } else {
                AtomParity::Odd
            };
        }

        let mut hydrogens = 0u8;
        if body.get(cur) == Some(&b'H') {
            cur += 1;
            let (count, used) = digits(&body[cur..]);
            hydrogens = match used {
                0 => 1,
                _ => u8::try_from(count)
                    .map_err(|_| self.error(at(cur), "hydrogen count out of range"))?,
            };
            cur += used;
        }

        let mut charge = 0i32;
        if let Some(&sign @ (b'+' | b'-')) = body.get(cur) {
            let unit = if sign == b'+' { 1 } else { -1 };
            cur += 1;
            let (count, used) = digits(&body[cur..]);
            if used > 0 {
                charge = unit * i32::try_from(count).unwrap_or(i32::MAX);
                cur += used;
            } else {
                charge = unit;
                while body.get(cur) == Some(&sign) {
                    charge += unit;
                    cur += 1;
                }
            }
        }
        let charge = i8::try_from(charge)
            .ok()
            .filter(|q| (-15..=15).contains(q))
            .ok_or_else(|| self.error(at(cur), "formal charge out of range"))?;

        if body.get(cur) == Some(&b':') {
            cur += 1;
            let (_, used) = digits(&body[cur..]);
            if used == 0 {
                return Err(self.error(at(cur), "atom class must be a number"));
            }
            cur += used;
        }

        if cur != body.len() {
            return Err(self.error(at(cur), "unexpected content in bracket atom"));
        }

        self.pos = close + 1;
        Ok(Atom::new(element)
            .with_aromatic(aromatic)
            .with_charge(charge)
            .with_parity(parity)
            .with_hydrogens(hydrogens))
    }
}

/// Element symbol at the start of a bracket atom body.
fn bracket_symbol(body: &[u8]) -> Option<(Element, bool, usize)> {
    let first = *body.first()?;
    let two = body
        .get(..2)
        .filter(|s| s[1].is_ascii_lowercase())
        .and_then(|s| std::str::from_utf8(s).ok());
    let one = std::str::from_utf8(&body[..1]).ok()?;

    if first.is_ascii_uppercase() {
        if let Some(e) = two.and_then(|s| Element::from_str(s).ok()) {
            return Some((e, false, 2));
        }
        Element::from_str(one).ok().map(|e| (e, false, 1))
    } else {
        if let Some(e) = two.and_then(Element::from_aromatic_symbol) {
            return Some((e, true, 2));
        }
        Element::from_aromatic_symbol(one).map(|e| (e, true, 1))
    }
}

/// Parses leading ASCII digits; returns the value and the number consumed.
fn digits(bytes: &[u8]) -> (u32, usize) {
    let used = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let value = bytes[..used]
        .iter()
        .fold(0u32, |acc, &d| acc.saturating_mul(10).saturating_add(u32::from(d - b'0')));
    (value, used)
}

/// Assigns E/Z parities to double bonds flanked by `/` or `\` bonds.
///
/// Each flanking mark is turned into a side (+1/-1) of its substituent as
/// seen from the double-bond atom. Substituents on opposite sides give E.
fn assign_double_bond_parities(mol: &mut Molecule, directions: &[Option<i8>]) {
    let side = |mol: &Molecule, center: usize, skip: usize| -> Option<i8> {
        mol.bonds
            .iter()
            .zip(directions)
            .enumerate()
            .filter(|&(b, _)| b != skip)
            .find_map(|(_, (bond, dir))| {
                let dir = (*dir)?;
                if bond.j == center {
                    Some(dir)
                } else if bond.i == center {
                    Some(-dir)
                } else {
                    None
                }
            })
    };

    let parities: Vec<(usize, BondParity)> = mol
        .bonds
        .iter()
        .enumerate()
        .filter(|(_, bond)| bond.order == BondOrder::Double)
        .filter_map(|(b, bond)| {
            let left = side(mol, bond.i, b)?;
            let right = side(mol, bond.j, b)?;
            let parity = if left == right {
                BondParity::Z
            } else {
                BondParity::E
            };
            Some((b, parity))
        })
        .collect();

    for (b, parity) in parities {
        mol.bonds[b].parity = parity;
    }
}
