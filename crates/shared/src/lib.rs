use serde::{Deserialize, Serialize};

pub mod fit;
pub mod placement;

pub use fit::{
    clearance, evaluate_fit, fits, overflowing_axes, FitReport, DOES_NOT_FIT_MESSAGE, FITS_MESSAGE,
};
pub use placement::{anchor_inner, secondary_position, Position, OUTER_POSITION};

/// Ось кубоида
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Width,
    Height,
    Depth,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Width, Axis::Height, Axis::Depth];

    pub fn name(&self) -> &'static str {
        match self {
            Axis::Width => "width",
            Axis::Height => "height",
            Axis::Depth => "depth",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Роль кубоида в сцене
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxRole {
    /// Большой кубоид, в который проверяется вложение
    Outer,
    /// Редактируемый кубоид
    Inner,
    /// Вспомогательный кубоид (только для отображения)
    Secondary,
}

impl BoxRole {
    pub const ALL: [BoxRole; 3] = [BoxRole::Outer, BoxRole::Inner, BoxRole::Secondary];
}

/// Размеры кубоида (ширина, высота, глубина) в одних единицах
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl BoxDimensions {
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Extent along a single axis
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
            Axis::Depth => self.depth,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.width, self.height, self.depth]
    }

    /// Parse three raw text fields into dimensions.
    ///
    /// Fails on the first field that is not a finite real number.
    pub fn parse(width: &str, height: &str, depth: &str) -> Result<Self, DimensionParseError> {
        Ok(Self {
            width: parse_extent(Axis::Width, width)?,
            height: parse_extent(Axis::Height, height)?,
            depth: parse_extent(Axis::Depth, depth)?,
        })
    }
}

/// Размеры по умолчанию
pub const DEFAULT_OUTER: BoxDimensions = BoxDimensions::new(2.35, 2.39, 12.03);
pub const DEFAULT_INNER: BoxDimensions = BoxDimensions::new(2.35, 0.5, 2.0);
pub const DEFAULT_SECONDARY: BoxDimensions = BoxDimensions::new(1.5, 1.0, 3.0);

/// Ошибка разбора размера из текстового поля
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid {axis} value: {input:?}")]
pub struct DimensionParseError {
    pub axis: Axis,
    pub input: String,
}

/// Parse a single extent from the leading number of `input`.
///
/// Leading whitespace is skipped and anything after the number is ignored,
/// so `"2.5cm"` reads as 2.5. Text without a leading number, NaN and
/// infinities are rejected.
pub fn parse_extent(axis: Axis, input: &str) -> Result<f64, DimensionParseError> {
    leading_number(input.trim_start())
        .and_then(|number| number.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| DimensionParseError {
            axis,
            input: input.to_string(),
        })
}

/// Longest prefix of the form `[+-]digits[.digits][(e|E)[+-]digits]`
fn leading_number(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    Some(&s[..end])
}
