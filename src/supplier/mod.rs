mod record;
mod risk;

pub use record::SupplierRecord;
pub use risk::RiskLevel;
