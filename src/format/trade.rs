use crate::format::consts::EXACT_MATCH;

/// Renders a trade distance given in billions of USD, e.g. `$320M`, `$240.5B`, `$1.2T`.
/// Zero is an exact trade match; tiny positive values still read as a difference.
pub fn format_trade_distance(trade_distance: f64) -> String {
    assert!(
        trade_distance.is_finite() && trade_distance >= 0.0,
        "Trade distance must be a finite non-negative number, got {trade_distance}."
    );
    if trade_distance == 0.0 {
        EXACT_MATCH.to_string()
    } else if trade_distance < 0.0005 {
        String::from("<$1M")
    } else if trade_distance < 0.9995 {
        format!("${:.0}M", trade_distance * 1_000.0)
    } else if trade_distance < 999.95 {
        format!("${:.1}B", trade_distance)
    } else {
        format!("${:.1}T", trade_distance / 1_000.0)
    }
}
