//! The guard ring generator.
//!
//! A guard ring is a closed ring of diffusion, contacted to Metal1,
//! that biases the substrate (or an n-well) around the region it encloses.
//!
//! The ring spans `(0, 0)` to `(l, w)`. Each ring layer is drawn as the
//! difference of two concentric rectangles, and a row of contact squares
//! runs along the middle of each side.

use std::fmt::Display;
use std::str::FromStr;

use derive_builder::Builder;
use geometry::prelude::*;
use layir::Cell;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layers::Sg13Layer;
use crate::tech::TechParams;

mod contacts;
mod points;

pub use contacts::{CONT_MIN_SPACING, CONT_SIZE};
pub use points::{calculate_points_on_line, PointsOnLine};

use contacts::ContactRing;

/// Added to the implant minimum width to get the width of the implant ring.
const SD_RING_MARGIN: f64 = 0.05;

/// The kind of region a guard ring ties down.
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Well {
    /// A p+ ring tying down the p-substrate.
    #[default]
    #[serde(rename = "sub")]
    Sub,
    /// An n+ ring inside an n-well.
    #[serde(rename = "nwell")]
    NWell,
}

impl Display for Well {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sub => write!(f, "sub"),
            Self::NWell => write!(f, "nwell"),
        }
    }
}

impl FromStr for Well {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sub" => Ok(Self::Sub),
            "nwell" => Ok(Self::NWell),
            _ => Err(Error::InvalidWell(s.to_string())),
        }
    }
}

/// Guard ring parameters.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct GuardRingParams {
    /// The outer width (y extent) of the ring, in micrometers.
    pub w: f64,
    /// The outer length (x extent) of the ring, in micrometers.
    pub l: f64,
    /// The well type.
    #[builder(default)]
    #[serde(default)]
    pub well: Well,
}

impl GuardRingParams {
    /// Creates a new [`GuardRingParamsBuilder`].
    #[inline]
    pub fn builder() -> GuardRingParamsBuilder {
        GuardRingParamsBuilder::default()
    }

    /// The technology's default guard ring: a substrate ring of the default size.
    pub fn defaults(tech: &TechParams) -> Self {
        Self {
            w: tech.gring_default_w,
            l: tech.gring_default_l,
            well: Well::default(),
        }
    }

    /// Checks that both dimensions are positive, finite lengths.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("w", self.w), ("l", self.l)] {
            if !value.is_finite() || value <= 0. {
                return Err(Error::InvalidDimension { name, value });
            }
        }
        Ok(())
    }

    /// Draws the guard ring. See [`draw_guard_ring`].
    #[inline]
    pub fn draw(self, tech: &TechParams) -> Result<Cell<Sg13Layer>> {
        draw_guard_ring(tech, self)
    }
}

/// The implant rules that size a ring of the given well type.
#[derive(Debug, Copy, Clone, PartialEq)]
struct ImplantRules {
    /// Width of the implant ring.
    min_sd: f64,
    /// Implant enclosure of Activ.
    activ_enclosure: f64,
}

impl ImplantRules {
    fn new(tech: &TechParams, well: Well) -> Self {
        match well {
            Well::Sub => Self {
                min_sd: tech.psd_min_width + SD_RING_MARGIN,
                activ_enclosure: tech.psd_activ_enclosure,
            },
            Well::NWell => Self {
                min_sd: tech.nsd_min_width + SD_RING_MARGIN,
                activ_enclosure: tech.nsd_activ_enclosure,
            },
        }
    }
}

/// One ring layer, as insets of its outer and inner boundaries from the cell boundary.
#[derive(Debug, Copy, Clone, PartialEq)]
struct RingLayer {
    layer: Sg13Layer,
    outer_inset: f64,
    inner_inset: f64,
}

impl RingLayer {
    /// Subtracts the inner boundary from the outer boundary.
    ///
    /// Returns [`None`] if either boundary is empty or the inner boundary
    /// is not strictly inside the outer one.
    fn ring(&self, bounds: Rect) -> Option<Ring> {
        let outer = bounds.try_shrink_all(self.outer_inset)?;
        let inner = bounds.try_shrink_all(self.inner_inset)?;
        outer.cutout(inner)
    }
}

fn ring_layers(tech: &TechParams, well: Well, rules: ImplantRules) -> Vec<RingLayer> {
    let ImplantRules {
        min_sd,
        activ_enclosure,
    } = rules;
    let metal_half_width = tech.contbar_min_width / 2. + tech.m1_endcap;

    let mut layers = Vec::with_capacity(3);
    if well == Well::Sub {
        layers.push(RingLayer {
            layer: Sg13Layer::PSd,
            outer_inset: 0.,
            inner_inset: min_sd,
        });
    }
    layers.push(RingLayer {
        layer: Sg13Layer::Activ,
        outer_inset: activ_enclosure,
        inner_inset: min_sd - activ_enclosure,
    });
    layers.push(RingLayer {
        layer: Sg13Layer::Metal1,
        outer_inset: min_sd / 2. - metal_half_width,
        inner_inset: min_sd / 2. + metal_half_width,
    });
    layers
}

/// Draws a guard ring of the given parameters.
///
/// A substrate ring is drawn on pSD, Activ and Metal1; an n-well ring is
/// drawn on Activ and Metal1 inside an NWell rectangle covering the whole
/// cell. Both have contact squares on Cont all the way around.
///
/// Every ring is validated before any shape is drawn: dimensions too
/// small for some ring to have a hole yield [`Error::DimensionTooSmall`].
pub fn draw_guard_ring(tech: &TechParams, params: GuardRingParams) -> Result<Cell<Sg13Layer>> {
    let GuardRingParams { w, l, well } = params;
    let _guard = tracing::debug_span!("draw_guard_ring", w, l, %well).entered();

    params.validate()?;
    tech.validate()?;
    let grid = tech.effective_grid()?;
    if tech.cont_size != CONT_SIZE {
        tracing::warn!(
            tech_cont_size = tech.cont_size,
            cont_size = CONT_SIZE,
            "technology Cont size differs from guard ring contact size"
        );
    }

    let rules = ImplantRules::new(tech, well);
    let bounds = Rect::from_sides(0., 0., l, w);

    let rings = ring_layers(tech, well, rules)
        .into_iter()
        .map(|rl| match rl.ring(bounds) {
            Some(ring) => Ok((rl.layer, ring)),
            None => {
                tracing::error!(layer = %rl.layer, "guard ring too small for layer");
                Err(Error::DimensionTooSmall {
                    layer: rl.layer,
                    w,
                    l,
                })
            }
        })
        .collect::<Result<Vec<_>>>()?;

    // Contacts are centered in the implant ring of the selected well type,
    // so an n-well ring uses the nSD block rules here as well.
    let contacts = ContactRing {
        l,
        w,
        min_sd: rules.min_sd,
        edge: rules.min_sd / 2. - tech.contbar_min_width / 2.,
        grid,
    }
    .squares();

    let mut cell = Cell::new(tech.cell_name("gring"));
    if well == Well::NWell {
        cell.draw(Sg13Layer::NWell, bounds);
    }
    for (layer, ring) in rings {
        tracing::debug!(%layer, outer = ?ring.outer(), inner = ?ring.inner(), "drawing ring");
        cell.draw(layer, ring);
    }
    tracing::debug!(count = contacts.len(), "drawing contacts");
    for square in contacts {
        cell.draw(Sg13Layer::Cont, square);
    }

    Ok(cell)
}
