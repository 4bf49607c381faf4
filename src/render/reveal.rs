use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::format_number;
use crate::error::GraphResult;
use crate::render::{DrawSurface, SurfaceElement, TRANSITION_CLASS, style};

/// Phase of the one-shot line drawing animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum RevealPhase {
    /// No layout has been applied yet.
    #[default]
    Pending,
    /// Dash pattern hides the whole stroke; waiting for the next tick.
    Hidden { total_length: f64 },
    /// Transition enabled and the stroke fully drawn.
    Revealed { total_length: f64 },
}

/// Drives the `hidden -> revealed` dash animation of the line.
///
/// The reveal must be applied on a later tick than the hide so the renderer
/// observes both dash patterns and animates between them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealAnimator {
    phase: RevealPhase,
}

impl RevealAnimator {
    #[must_use]
    pub fn phase(self) -> RevealPhase {
        self.phase
    }

    /// Hides the stroke ahead of the reveal. Only the first call has an effect.
    pub fn hide<S: DrawSurface>(&mut self, surface: &mut S, total_length: f64) -> GraphResult<()> {
        if self.phase != RevealPhase::Pending {
            return Ok(());
        }
        surface.set_style(
            SurfaceElement::Line,
            style::STROKE_DASHARRAY,
            hidden_dash(total_length),
        )?;
        self.phase = RevealPhase::Hidden { total_length };
        Ok(())
    }

    /// Runs the reveal if it is due. Returns `true` when the line was revealed.
    pub fn on_tick<S: DrawSurface>(&mut self, surface: &mut S) -> GraphResult<bool> {
        let RevealPhase::Hidden { total_length } = self.phase else {
            return Ok(false);
        };
        surface.add_class(SurfaceElement::Line, TRANSITION_CLASS)?;
        surface.set_style(
            SurfaceElement::Line,
            style::STROKE_DASHARRAY,
            visible_dash(total_length),
        )?;
        self.phase = RevealPhase::Revealed { total_length };
        debug!(total_length, "line revealed");
        Ok(true)
    }

    /// Keeps the current phase after the path length changed, without
    /// replaying the transition.
    pub fn refresh_length<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        total_length: f64,
    ) -> GraphResult<()> {
        match self.phase {
            RevealPhase::Pending => Ok(()),
            RevealPhase::Hidden { .. } => {
                surface.set_style(
                    SurfaceElement::Line,
                    style::STROKE_DASHARRAY,
                    hidden_dash(total_length),
                )?;
                self.phase = RevealPhase::Hidden { total_length };
                Ok(())
            }
            RevealPhase::Revealed { .. } => {
                surface.set_style(
                    SurfaceElement::Line,
                    style::STROKE_DASHARRAY,
                    visible_dash(total_length),
                )?;
                self.phase = RevealPhase::Revealed { total_length };
                Ok(())
            }
        }
    }
}

fn hidden_dash(total_length: f64) -> String {
    format!("0, {}", format_number(total_length))
}

fn visible_dash(total_length: f64) -> String {
    format!("{}, 0", format_number(total_length))
}
