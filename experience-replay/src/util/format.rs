use num_format::{CustomFormat, Grouping};

/// Grouped number format for log output, e.g. `1_000_000`
pub fn number_format() -> CustomFormat {
    CustomFormat::builder()
        .grouping(Grouping::Standard)
        .minus_sign("-")
        .separator("_")
        .build()
        .unwrap_or_default()
}
