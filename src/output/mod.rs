pub mod formatter;

pub use formatter::{
    format_json, format_rejected, format_score, format_scored_table, format_segment_catalog,
    format_summary, format_supplier_detail, format_tsv, should_use_colors,
};
