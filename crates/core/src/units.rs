//! Units handling
//!
//! Linear parameters are stored in millimeters. Values read or written while
//! the machine is in inch mode are converted at the accessor boundary.
//! Rotary parameters are always degrees and never converted.

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Inches per millimeter
pub const INCH_PER_MM: f32 = 1.0 / MM_PER_INCH;

/// Active units mode (G20 / G21)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitsMode {
    /// G20
    Inches = 0,
    /// G21
    Millimeters = 1,
    /// Rotary axes only
    Degrees = 2,
}

impl UnitsMode {
    /// Numeric code reported by the `unit` parameter
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a stored units code; unknown codes fall back to millimeters
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => UnitsMode::Inches,
            2 => UnitsMode::Degrees,
            _ => UnitsMode::Millimeters,
        }
    }

    /// Name reported as the string value of the `unit` parameter
    pub fn name(self) -> &'static str {
        match self {
            UnitsMode::Inches => "inch",
            UnitsMode::Millimeters => "mm",
            UnitsMode::Degrees => "deg",
        }
    }

    /// Suffix used when printing a value in this unit
    pub fn suffix(self) -> &'static str {
        match self {
            UnitsMode::Inches => " in",
            UnitsMode::Millimeters => " mm",
            UnitsMode::Degrees => " deg",
        }
    }

    /// Convert a canonical (mm) value for presentation in this mode
    pub fn from_mm(self, value: f32) -> f32 {
        match self {
            UnitsMode::Inches => value * INCH_PER_MM,
            _ => value,
        }
    }

    /// Convert a presented value back to canonical millimeters
    pub fn to_mm(self, value: f32) -> f32 {
        match self {
            UnitsMode::Inches => value * MM_PER_INCH,
            _ => value,
        }
    }
}
