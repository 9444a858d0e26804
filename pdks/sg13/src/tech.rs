//! Technology parameters (design rules) for the SG13 process family.
//!
//! Field names follow Rust conventions; the serialized keys match the
//! keys used by the SG13 technology parameter tables, so existing rule
//! decks can be loaded directly. Unknown keys are ignored.

use std::path::Path;

use arcstr::ArcStr;
use geometry::snap::DEFAULT_GRID;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Design rules and defaults for one SG13 technology variant.
///
/// All lengths are in micrometers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechParams {
    /// The technology name, such as `SG13G2`.
    #[serde(rename = "techName")]
    pub tech_name: String,
    /// The version of the parameter tables this deck was taken from.
    #[serde(rename = "CDFVersion", default)]
    pub cdf_version: String,
    /// Manufacturing grid resolution.
    ///
    /// Zero means "unspecified"; see [`TechParams::effective_grid`].
    pub grid: f64,
    /// Metal1 endcap enclosure of Cont (`M1.c1`).
    #[serde(rename = "M1_c1")]
    pub m1_endcap: f64,
    /// Cont size (`Cnt.a`).
    #[serde(rename = "Cnt_a")]
    pub cont_size: f64,
    /// Cont to Cont spacing (`Cnt.b`).
    #[serde(rename = "Cnt_b")]
    pub cont_space: f64,
    /// pSD minimum width (`pSD.a`).
    #[serde(rename = "pSD_a")]
    pub psd_min_width: f64,
    /// pSD enclosure of Activ (`pSD.c1`).
    #[serde(rename = "pSD_c1")]
    pub psd_activ_enclosure: f64,
    /// nSD block minimum width (`nSDB.a`).
    #[serde(rename = "nSDB_a")]
    pub nsd_min_width: f64,
    /// nSD block enclosure of Activ (`nSDB.e`).
    #[serde(rename = "nSDB_e")]
    pub nsd_activ_enclosure: f64,
    /// Contact bar minimum width (`CntB.a`).
    #[serde(rename = "CntB_a")]
    pub contbar_min_width: f64,
    /// Default guard ring length.
    #[serde(rename = "gring_defL")]
    pub gring_default_l: f64,
    /// Default guard ring width.
    #[serde(rename = "gring_defW")]
    pub gring_default_w: f64,
}

impl TechParams {
    /// The built-in SG13G2 rule deck.
    ///
    /// Identical to `tech/sg13g2.toml` in this crate.
    pub fn sg13g2() -> Self {
        Self {
            tech_name: "SG13G2".to_string(),
            cdf_version: "8.0".to_string(),
            grid: 0.005,
            m1_endcap: 0.05,
            cont_size: 0.16,
            cont_space: 0.18,
            psd_min_width: 0.48,
            psd_activ_enclosure: 0.03,
            nsd_min_width: 0.48,
            nsd_activ_enclosure: 0.03,
            contbar_min_width: 0.16,
            gring_default_l: 5.0,
            gring_default_w: 5.0,
        }
    }

    /// Parses and validates technology parameters from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let params: Self = toml::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    /// Reads, parses, and validates technology parameters from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading technology parameters");
        let s = std::fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Serializes the parameters as a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that every rule is a non-negative, finite length,
    /// that the default dimensions are positive,
    /// and that the grid is zero or positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.rules() {
            if !value.is_finite() || value < 0. {
                return Err(Error::InvalidRule { name, value });
            }
        }
        for (name, value) in [
            ("gring_defL", self.gring_default_l),
            ("gring_defW", self.gring_default_w),
        ] {
            if !value.is_finite() || value <= 0. {
                return Err(Error::InvalidRule { name, value });
            }
        }
        if !self.grid.is_finite() || self.grid < 0. {
            return Err(Error::InvalidGrid(self.grid));
        }
        Ok(())
    }

    /// The grid resolution to snap generated coordinates to.
    ///
    /// A grid of exactly zero is replaced by [`DEFAULT_GRID`].
    /// Negative or non-finite grids are rejected.
    pub fn effective_grid(&self) -> Result<f64> {
        if self.grid == 0. {
            tracing::warn!(
                tech = %self.tech_name,
                default = DEFAULT_GRID,
                "technology grid is zero, using default grid"
            );
            Ok(DEFAULT_GRID)
        } else if self.grid.is_finite() && self.grid > 0. {
            Ok(self.grid)
        } else {
            Err(Error::InvalidGrid(self.grid))
        }
    }

    /// The suffix identifying the technology generation.
    ///
    /// `G2` for SG13G2 variants, `G3` for SG13G3 variants,
    /// and empty for anything else.
    pub fn suffix(&self) -> &'static str {
        if self.tech_name.contains("SG13G3") {
            "G3"
        } else if self.tech_name.contains("SG13G2") {
            "G2"
        } else {
            ""
        }
    }

    /// Appends the generation suffix to a cell base name.
    ///
    /// # Example
    ///
    /// ```
    /// # use sg13::TechParams;
    /// let tech = TechParams::sg13g2();
    /// assert_eq!(tech.cell_name("gring").as_str(), "gring_G2");
    /// ```
    pub fn cell_name(&self, base: &str) -> ArcStr {
        match self.suffix() {
            "" => ArcStr::from(base),
            suffix => arcstr::format!("{}_{}", base, suffix),
        }
    }

    /// The named length rules, keyed by their technology names.
    fn rules(&self) -> [(&'static str, f64); 8] {
        [
            ("M1_c1", self.m1_endcap),
            ("Cnt_a", self.cont_size),
            ("Cnt_b", self.cont_space),
            ("pSD_a", self.psd_min_width),
            ("pSD_c1", self.psd_activ_enclosure),
            ("nSDB_a", self.nsd_min_width),
            ("nSDB_e", self.nsd_activ_enclosure),
            ("CntB_a", self.contbar_min_width),
        ]
    }
}

impl Default for TechParams {
    fn default() -> Self {
        Self::sg13g2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SG13G2_TOML: &str = include_str!("../tech/sg13g2.toml");

    #[test]
    fn shipped_deck_matches_builtin() {
        let tech = TechParams::from_toml_str(SG13G2_TOML).unwrap();
        assert_eq!(tech, TechParams::sg13g2());
    }

    #[test]
    fn toml_round_trip() {
        let tech = TechParams::sg13g2();
        let s = tech.to_toml_string().unwrap();
        assert!(s.contains("pSD_a"));
        assert_eq!(TechParams::from_toml_str(&s).unwrap(), tech);
    }

    #[test]
    fn suffix_follows_tech_name() {
        let mut tech = TechParams::sg13g2();
        assert_eq!(tech.suffix(), "G2");
        tech.tech_name = "SG13G3_extended".to_string();
        assert_eq!(tech.suffix(), "G3");
        assert_eq!(tech.cell_name("gring").as_str(), "gring_G3");
        tech.tech_name = "other".to_string();
        assert_eq!(tech.suffix(), "");
        assert_eq!(tech.cell_name("gring").as_str(), "gring");
    }

    #[test]
    fn zero_grid_uses_default() {
        let tech = TechParams {
            grid: 0.,
            ..TechParams::sg13g2()
        };
        assert_eq!(tech.effective_grid().unwrap(), DEFAULT_GRID);
        assert!(tech.validate().is_ok());
    }

    #[test]
    fn negative_grid_is_rejected() {
        let tech = TechParams {
            grid: -0.005,
            ..TechParams::sg13g2()
        };
        assert!(matches!(tech.effective_grid(), Err(Error::InvalidGrid(_))));
        assert!(tech.validate().is_err());
    }

    #[test]
    fn invalid_rule_is_named() {
        let tech = TechParams {
            m1_endcap: f64::NAN,
            ..TechParams::sg13g2()
        };
        match tech.validate() {
            Err(Error::InvalidRule { name, .. }) => assert_eq!(name, "M1_c1"),
            other => panic!("expected invalid rule error, got {other:?}"),
        }
    }

    #[test]
    fn missing_key_fails_to_parse() {
        let s = SG13G2_TOML.replace("M1_c1 = 0.05", "");
        assert!(matches!(
            TechParams::from_toml_str(&s),
            Err(Error::TomlParse(_))
        ));
    }
}
