use super::EvaluatedSupplier;
use crate::segment::SegmentType;

/// Narrowing applied to a ranked supplier list before display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierFilter {
    /// Case-insensitive substring of the name or category
    pub search: Option<String>,
    /// Computed segment to keep
    pub segment: Option<SegmentType>,
}

impl SupplierFilter {
    fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.search_term().is_none() && self.segment.is_none()
    }

    pub fn matches(&self, supplier: &EvaluatedSupplier) -> bool {
        let matches_search = match self.search_term() {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                supplier.record.name.to_lowercase().contains(&term)
                    || supplier.record.category.to_lowercase().contains(&term)
            }
        };
        let matches_segment = match self.segment {
            None => true,
            Some(segment) => supplier.recommendation.segment == segment,
        };

        matches_search && matches_segment
    }
}

/// Keep only suppliers the filter accepts, preserving rank order
pub fn filter_suppliers(
    suppliers: Vec<EvaluatedSupplier>,
    filter: &SupplierFilter,
) -> Vec<EvaluatedSupplier> {
    suppliers.into_iter().filter(|s| filter.matches(s)).collect()
}
