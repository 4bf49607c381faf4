use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{GraphError, GraphResult};

pub const DEFAULT_LINE_STROKE: f64 = 3.0;
pub const DEFAULT_CIRCLE_SIZE: f64 = 10.0;
pub const DEFAULT_CIRCLE_STROKE: f64 = 3.0;
pub const DEFAULT_TOOLTIP_OFFSET: f64 = 40.0;

/// Appearance parameters, all expressed in CSS pixels.
///
/// Missing fields in serialized form keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    pub line_stroke: f64,
    pub circle_size: f64,
    pub circle_stroke: f64,
    pub tooltip_offset: f64,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            line_stroke: DEFAULT_LINE_STROKE,
            circle_size: DEFAULT_CIRCLE_SIZE,
            circle_stroke: DEFAULT_CIRCLE_STROKE,
            tooltip_offset: DEFAULT_TOOLTIP_OFFSET,
        }
    }
}

impl GraphSettings {
    #[must_use]
    pub fn with_line_stroke(mut self, line_stroke: f64) -> Self {
        self.line_stroke = line_stroke;
        self
    }

    #[must_use]
    pub fn with_circle_size(mut self, circle_size: f64) -> Self {
        self.circle_size = circle_size;
        self
    }

    #[must_use]
    pub fn with_circle_stroke(mut self, circle_stroke: f64) -> Self {
        self.circle_stroke = circle_stroke;
        self
    }

    #[must_use]
    pub fn with_tooltip_offset(mut self, tooltip_offset: f64) -> Self {
        self.tooltip_offset = tooltip_offset;
        self
    }

    fn fields(self) -> [SettingField; 4] {
        [
            SettingField::positive("line_stroke", self.line_stroke, DEFAULT_LINE_STROKE),
            SettingField::non_negative("circle_size", self.circle_size, DEFAULT_CIRCLE_SIZE),
            SettingField::non_negative("circle_stroke", self.circle_stroke, DEFAULT_CIRCLE_STROKE),
            SettingField::positive("tooltip_offset", self.tooltip_offset, DEFAULT_TOOLTIP_OFFSET),
        ]
    }

    /// Strict check for hosts that prefer an error over silent fallback.
    pub fn validate(self) -> GraphResult<Self> {
        for field in self.fields() {
            if !field.is_valid() {
                let bound = if field.allow_zero { ">= 0" } else { "> 0" };
                return Err(GraphError::InvalidConfig(format!(
                    "setting `{}` must be finite and {bound}",
                    field.name
                )));
            }
        }
        Ok(self)
    }

    /// Replaces non-positive or non-finite fields with their defaults.
    ///
    /// The circle geometry may be zero: a zero-sized circle is a valid
    /// degenerate layout. A zero line stroke or tooltip offset is not.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let [line_stroke, circle_size, circle_stroke, tooltip_offset] =
            self.fields().map(|field| {
                if field.is_valid() {
                    field.value
                } else {
                    warn!(
                        setting = field.name,
                        value = field.value,
                        default = field.default,
                        "falling back to default setting"
                    );
                    field.default
                }
            });
        Self {
            line_stroke,
            circle_size,
            circle_stroke,
            tooltip_offset,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SettingField {
    name: &'static str,
    value: f64,
    default: f64,
    allow_zero: bool,
}

impl SettingField {
    fn positive(name: &'static str, value: f64, default: f64) -> Self {
        Self {
            name,
            value,
            default,
            allow_zero: false,
        }
    }

    fn non_negative(name: &'static str, value: f64, default: f64) -> Self {
        Self {
            name,
            value,
            default,
            allow_zero: true,
        }
    }

    fn is_valid(self) -> bool {
        self.value.is_finite() && (self.value > 0.0 || (self.allow_zero && self.value == 0.0))
    }
}
