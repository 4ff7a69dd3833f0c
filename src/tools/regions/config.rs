use std::fs::File;
use std::io::{
    BufReader,
    Read,
};
use std::path::Path;

use log::debug;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::PosType;
use crate::with_field_fn;

/// Tolerances of the region derivation stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Bases intergenic gaps extend into their flanking footprints.
    pub intergenic_overlap: PosType,
    /// Bases allowed between consecutive genes of one operon.
    pub operon_overlap:     PosType,
    /// Bases allowed between consecutive genes of one operon when deriving
    /// promoters.
    pub coding_overlap:     PosType,
    /// Bases promoter gaps extend into their flanking operons.
    pub nc_overlap:         PosType,
}

impl RegionConfig {
    with_field_fn!(intergenic_overlap, PosType);
    with_field_fn!(operon_overlap, PosType);
    with_field_fn!(coding_overlap, PosType);
    with_field_fn!(nc_overlap, PosType);

    pub fn new(
        intergenic_overlap: PosType,
        operon_overlap: PosType,
        coding_overlap: PosType,
        nc_overlap: PosType,
    ) -> Self {
        Self {
            intergenic_overlap,
            operon_overlap,
            coding_overlap,
            nc_overlap,
        }
    }

    /// Reads a config from JSON. Missing fields take their default values.
    pub fn from_json_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_reader(BufReader::new(reader))?;
        config.validate()?;
        debug!("Loaded region config: {:?}", config);
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let file = File::open(path.as_ref()).map_err(|e| {
            anyhow::anyhow!(
                "Could not open config {}: {}",
                path.as_ref().display(),
                e
            )
        })?;
        Self::from_json_reader(file)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that no tolerance is negative.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("intergenic_overlap", self.intergenic_overlap),
            ("operon_overlap", self.operon_overlap),
            ("coding_overlap", self.coding_overlap),
            ("nc_overlap", self.nc_overlap),
        ] {
            anyhow::ensure!(value >= 0, "{} must be non-negative, got {}", name, value);
        }
        Ok(())
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            intergenic_overlap: 0,
            operon_overlap:     1,
            coding_overlap:     1,
            nc_overlap:         0,
        }
    }
}
