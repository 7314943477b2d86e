/// Largest calorie difference from the goal that still counts as green.
pub const GREEN_BAND_MAX: f64 = 200.0;

/// Largest calorie difference from the goal that counts as yellow.
/// Anything further away is red.
pub const YELLOW_BAND_MAX: f64 = 400.0;

/// Marker that opens the observations section.
pub const OBSERVATIONS_MARKER: &str = "💡";

/// Separator stripped from numbers before conversion ("1,200" -> 1200).
pub const THOUSANDS_SEPARATOR: char = ',';
