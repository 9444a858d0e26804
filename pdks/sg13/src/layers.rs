//! The set of SG13 layers drawn by the generators in this crate.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// An SG13 drawing layer.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sg13Layer {
    /// N-well.
    #[serde(rename = "NWell")]
    NWell,
    /// P+ source/drain implant.
    #[serde(rename = "pSD")]
    PSd,
    /// Active area.
    #[serde(rename = "Activ")]
    Activ,
    /// First metal.
    #[serde(rename = "Metal1")]
    Metal1,
    /// Contact from Activ to Metal1.
    #[serde(rename = "Cont")]
    Cont,
}

impl Sg13Layer {
    /// Every layer in this set.
    pub const ALL: [Sg13Layer; 5] = [
        Sg13Layer::NWell,
        Sg13Layer::PSd,
        Sg13Layer::Activ,
        Sg13Layer::Metal1,
        Sg13Layer::Cont,
    ];

    /// The technology's name for the layer.
    pub const fn name(&self) -> &'static str {
        match self {
            Sg13Layer::NWell => "NWell",
            Sg13Layer::PSd => "pSD",
            Sg13Layer::Activ => "Activ",
            Sg13Layer::Metal1 => "Metal1",
            Sg13Layer::Cont => "Cont",
        }
    }

    /// The GDS layer and datatype of the drawing purpose.
    pub const fn gds(&self) -> (u16, u16) {
        match self {
            Sg13Layer::Activ => (1, 0),
            Sg13Layer::Cont => (6, 0),
            Sg13Layer::Metal1 => (8, 0),
            Sg13Layer::PSd => (14, 0),
            Sg13Layer::NWell => (31, 0),
        }
    }
}

impl Display for Sg13Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn gds_numbers_are_distinct() {
        let gds: HashSet<_> = Sg13Layer::ALL.iter().map(|l| l.gds()).collect();
        assert_eq!(gds.len(), Sg13Layer::ALL.len());
        assert_eq!(Sg13Layer::PSd.gds(), (14, 0));
    }

    #[test]
    fn names_match_serialized_form() {
        for layer in Sg13Layer::ALL {
            let s = toml::Value::try_from(layer).unwrap();
            assert_eq!(s.as_str(), Some(layer.name()));
            assert_eq!(layer.to_string(), layer.name());
        }
    }
}
