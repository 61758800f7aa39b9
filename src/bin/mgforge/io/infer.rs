use std::path::Path;

use crate::cli::InputFormat;

pub fn input(path: &Path) -> Option<InputFormat> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "smi" | "smiles" | "txt" => Some(InputFormat::Smiles),
        "sdf" | "mol" => Some(InputFormat::Sdf),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_from_extension() {
        assert_eq!(input(Path::new("set.smi")), Some(InputFormat::Smiles));
        assert_eq!(input(Path::new("SET.SMILES")), Some(InputFormat::Smiles));
        assert_eq!(input(Path::new("ligand.mol")), Some(InputFormat::Sdf));
        assert_eq!(input(Path::new("ligand.sdf")), Some(InputFormat::Sdf));
        assert_eq!(input(Path::new("graphs.json")), None);
        assert_eq!(input(Path::new("noext")), None);
    }
}
