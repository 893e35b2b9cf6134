//! Package catalog — the fixed list of prepaid bundles on offer.
//!
//! RULE: The catalog is built once per session and never mutated.
//! Display order is ascending cost; ties keep their input order.

use crate::types::{Money, Quota};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Daily   => "Daily",
            Tier::Weekly  => "Weekly",
            Tier::Monthly => "Monthly",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name:    String,
    /// Informational only; does not affect expiry or pricing.
    pub tier:    Tier,
    pub cost:    Money,
    pub gb:      Quota,
    pub minutes: Quota,
    pub offnet:  Quota,
    pub sms:     Quota,
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Rs.{} | {}GB, {} min, {} offnet, {} SMS",
            self.name, self.cost, self.gb, self.minutes, self.offnet, self.sms
        )
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    packages: Vec<Package>,
}

impl Catalog {
    pub fn new(mut packages: Vec<Package>) -> Self {
        // Vec::sort_by is stable.
        packages.sort_by(|a, b| a.cost.total_cmp(&b.cost));
        Self { packages }
    }

    pub fn standard() -> Self {
        Self::new(crate::config::standard_packages())
    }

    /// Look up a package by its 1-based menu number.
    pub fn get(&self, number: usize) -> Option<&Package> {
        number.checked_sub(1).and_then(|i| self.packages.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
