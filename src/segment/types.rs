use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CriteriaError;

/// Strategic procurement segment assigned to a supplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentType {
    TrustedSuppliers,
    SwitchCandidates,
    CommodityPartnerships,
    InnovativePartnerships,
    ProprietaryInformation,
    SupplierIntegration,
}

impl SegmentType {
    /// Catalog order, used for listings and per-segment counts
    pub const ALL: [SegmentType; 6] = [
        SegmentType::TrustedSuppliers,
        SegmentType::SwitchCandidates,
        SegmentType::CommodityPartnerships,
        SegmentType::InnovativePartnerships,
        SegmentType::ProprietaryInformation,
        SegmentType::SupplierIntegration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentType::TrustedSuppliers => "trusted_suppliers",
            SegmentType::SwitchCandidates => "switch_candidates",
            SegmentType::CommodityPartnerships => "commodity_partnerships",
            SegmentType::InnovativePartnerships => "innovative_partnerships",
            SegmentType::ProprietaryInformation => "proprietary_information",
            SegmentType::SupplierIntegration => "supplier_integration",
        }
    }

    /// Human-readable name used in reasoning text
    pub fn label(&self) -> &'static str {
        match self {
            SegmentType::TrustedSuppliers => "Trusted Suppliers",
            SegmentType::SwitchCandidates => "Switch Candidates",
            SegmentType::CommodityPartnerships => "Commodity Partnerships",
            SegmentType::InnovativePartnerships => "Innovative Partnerships",
            SegmentType::ProprietaryInformation => "Proprietary Information",
            SegmentType::SupplierIntegration => "Supplier Integration",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SegmentType::TrustedSuppliers => "Reliable partners with proven track record",
            SegmentType::SwitchCandidates => "Underperforming suppliers to be replaced",
            SegmentType::CommodityPartnerships => "Standard suppliers for routine purchases",
            SegmentType::InnovativePartnerships => "Suppliers driving innovation and development",
            SegmentType::ProprietaryInformation => "Suppliers with access to sensitive information",
            SegmentType::SupplierIntegration => "Deeply integrated operational partners",
        }
    }

    pub fn characteristics(&self) -> &'static str {
        match self {
            SegmentType::TrustedSuppliers => "High performance, low risk, established relationship",
            SegmentType::SwitchCandidates => "Poor performance, high cost, relationship issues",
            SegmentType::CommodityPartnerships => {
                "Standard products, market pricing, transactional"
            }
            SegmentType::InnovativePartnerships => {
                "High innovation potential, collaborative, strategic value"
            }
            SegmentType::ProprietaryInformation => {
                "High confidentiality, specialized knowledge, security critical"
            }
            SegmentType::SupplierIntegration => {
                "Process integration, mutual dependency, strategic alignment"
            }
        }
    }

    /// Recommended way to manage suppliers in this segment
    pub fn management(&self) -> &'static str {
        match self {
            SegmentType::TrustedSuppliers => {
                "Maintain strong relationships, regular performance reviews"
            }
            SegmentType::SwitchCandidates => "Active replacement, performance improvement plans",
            SegmentType::CommodityPartnerships => "Cost optimization, competitive bidding",
            SegmentType::InnovativePartnerships => {
                "Joint development, long-term contracts, knowledge sharing"
            }
            SegmentType::ProprietaryInformation => {
                "Strict contracts, security protocols, limited access"
            }
            SegmentType::SupplierIntegration => {
                "Partnership governance, shared planning, integration management"
            }
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a snake_case segment name, ignoring case and surrounding whitespace
impl FromStr for SegmentType {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SegmentType::ALL
            .into_iter()
            .find(|segment| segment.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CriteriaError::UnknownValue {
                field: "segment_type",
                value: s.to_string(),
                expected: SegmentType::ALL
                    .iter()
                    .map(|segment| segment.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
