use crate::{
    catalog::{Package, Tier},
    types::Money,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    packages: Vec<Package>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelcoConfig {
    /// Directory holding `<phone>_account.txt` and `<phone>_complaints.txt`.
    pub data_dir: PathBuf,
    pub packages: Vec<Package>,
    pub top_up_denominations: Vec<Money>,
}

impl Default for TelcoConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            packages: standard_packages(),
            top_up_denominations: vec![100.0, 200.0, 500.0, 1000.0],
        }
    }
}

impl TelcoConfig {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Replace the package list with the one in a JSON catalog file.
    pub fn load_catalog(mut self, path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&content)?;
        if file.packages.is_empty() {
            anyhow::bail!("Catalog {} lists no packages", path.display());
        }
        if let Some(bad) = file.packages.iter().find(|p| p.cost.is_nan() || p.cost < 0.0) {
            anyhow::bail!("Package '{}' has invalid cost {}", bad.name, bad.cost);
        }
        self.packages = file.packages;
        Ok(self)
    }
}

/// The six built-in packages, in the order they are offered before sorting.
pub fn standard_packages() -> Vec<Package> {
    let pkg = |name: &str, tier, cost, gb, minutes, offnet, sms| Package {
        name: name.to_string(),
        tier,
        cost,
        gb,
        minutes,
        offnet,
        sms,
    };
    vec![
        pkg("Mega Offer",   Tier::Monthly, 1000.0, 60, 150, 100, 1000),
        pkg("Super Offer",  Tier::Monthly,  800.0, 40, 100, 100,  800),
        pkg("Rare Offer",   Tier::Weekly,   500.0, 30,  80,  80,  500),
        pkg("Common Offer", Tier::Weekly,   300.0, 25,  50,  50,  250),
        pkg("Day Offer",    Tier::Daily,    200.0, 20,  30,  30,  200),
        pkg("Night Offer",  Tier::Daily,    100.0, 10,  10,  10,  100),
    ]
}
