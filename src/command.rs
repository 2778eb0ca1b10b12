//! Typed command contract between the upstream parser and the engine.
//!
//! The upstream layer turns natural-language requests into one
//! [`AnnotationCommand`]; this module resolves it into validated
//! planning parameters. Lengths arrive either in internal units or in
//! millimetres; everything downstream is internal units.

use std::fmt;

use crate::error::{ParameterError, Result};
use crate::log::debug;
use crate::math::units;
use crate::operations::DimensionParameters;

/// Operation requested by the upstream command parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operation {
    CreateDimensions,
    CreateTags,
    ReadElements,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDimensions => write!(f, "create_dimensions"),
            Self::CreateTags => write!(f, "create_tags"),
            Self::ReadElements => write!(f, "read_elements"),
        }
    }
}

/// Which host elements a command applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetScope {
    /// Host element category, e.g. `"room"` or `"door"`.
    pub element_type: String,
    /// Free-form filter the query layer interprets, e.g. a name pattern.
    #[cfg_attr(feature = "serde", serde(default))]
    pub filter_criteria: Option<String>,
    /// Restricts the scope to one level when set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub level_name: Option<String>,
}

/// Raw numeric parameters as the upstream layer supplies them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CommandParameters {
    /// Dimension line offset in internal units. Wins over `offset_mm`.
    pub offset_distance: Option<f64>,
    /// Dimension line offset in millimetres.
    pub offset_mm: Option<f64>,
    /// Host dimension style name.
    pub style: Option<String>,
    /// Minimum wall length worth dimensioning, in internal units.
    pub min_segment_length: Option<f64>,
}

/// One fully parsed annotation command.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotationCommand {
    pub operation: Operation,
    pub target: TargetScope,
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: CommandParameters,
    /// Questions the parser wants answered before execution.
    #[cfg_attr(feature = "serde", serde(default))]
    pub clarifications: Vec<String>,
}

impl AnnotationCommand {
    /// Whether the parser flagged open questions that block execution.
    #[must_use]
    pub fn needs_clarification(&self) -> bool {
        !self.clarifications.is_empty()
    }

    /// Resolves the command into validated dimension parameters.
    ///
    /// `offset_distance` wins when both offset fields are present;
    /// millimetres are converted to internal units.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` for a non-dimension command,
    /// `MissingField` when the offset or style is absent, and the
    /// parameter validation errors for out-of-range values.
    pub fn dimension_parameters(&self) -> Result<DimensionParameters> {
        if self.operation != Operation::CreateDimensions {
            return Err(ParameterError::UnsupportedOperation(self.operation.to_string()).into());
        }

        let offset = match (self.parameters.offset_distance, self.parameters.offset_mm) {
            (Some(internal), _) => internal,
            (None, Some(mm)) => {
                let internal = units::mm_to_internal(mm);
                debug!(mm, internal, "converted offset from millimetres");
                internal
            }
            (None, None) => return Err(ParameterError::MissingField("offset_distance").into()),
        };
        let style = self
            .parameters
            .style
            .as_deref()
            .ok_or(ParameterError::MissingField("style"))?;

        let mut resolved = DimensionParameters::new(offset, style)?;
        if let Some(min) = self.parameters.min_segment_length {
            resolved = resolved.with_min_segment_length(min)?;
        }
        Ok(resolved)
    }
}
