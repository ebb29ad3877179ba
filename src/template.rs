//! Template model — the structured workshop plan.
//!
//! DESIGN
//! ======
//! A `Template` is created once by the generator and never mutated after.
//! Field names on the wire match the JSON shape the completion backend is
//! asked to produce, plus `id` and `createdAt` stamped locally. A
//! `TemplateDraft` is that same shape before identity is assigned.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while parsing or validating template JSON.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The input contained no JSON object at all.
    #[error("no JSON object found in input")]
    NoJsonObject,

    /// The JSON did not match the template shape.
    #[error("template JSON parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The JSON parsed but is missing content required to run a session.
    #[error("template is incomplete: {0}")]
    Incomplete(&'static str),
}

// =============================================================================
// STRUCTURE
// =============================================================================

/// A named visual grouping on the board, holding sticky-note elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub elements: Vec<String>,
}

/// Frames plus free-text descriptions of how they connect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    #[serde(default)]
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub connections: Vec<String>,
}

/// One step of the facilitation script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub step: u32,
    pub action: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub coaching_tip: String,
}

// =============================================================================
// TEMPLATE
// =============================================================================

/// A complete, identified workshop template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub title: String,
    pub objective: String,
    pub participants: Vec<String>,
    pub duration: String,
    pub materials: Vec<String>,
    pub structure: Structure,
    pub facilitation: Vec<Step>,
    pub coaching_tips: Vec<String>,
    pub variations: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Template {
    /// Parse a template previously serialized with [`Template::to_json_pretty`].
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Parse`] if the JSON does not match the shape.
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Parse`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total number of sticky-note elements across all frames.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.structure.frames.iter().map(|f| f.elements.len()).sum()
    }
}

// =============================================================================
// DRAFT
// =============================================================================

/// Template content without identity, as produced by a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDraft {
    pub title: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub structure: Structure,
    #[serde(default)]
    pub facilitation: Vec<Step>,
    #[serde(default)]
    pub coaching_tips: Vec<String>,
    #[serde(default)]
    pub variations: Vec<String>,
}

impl TemplateDraft {
    /// Parse a raw completion string into a validated draft.
    ///
    /// Models sometimes wrap the object in prose or code fences despite being
    /// told not to, so the outermost `{ ... }` span is extracted first.
    ///
    /// # Errors
    ///
    /// Returns an error if no object is found, the JSON does not match the
    /// template shape, or the result fails [`TemplateDraft::validate`].
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        let json = extract_object(raw).ok_or(TemplateError::NoJsonObject)?;
        let draft: Self = serde_json::from_str(json)?;
        draft.validate()?;
        Ok(draft)
    }

    /// Reject drafts that cannot drive a session.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Incomplete`] naming the first missing part.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.title.trim().is_empty() {
            return Err(TemplateError::Incomplete("title is empty"));
        }
        if self.structure.frames.is_empty() {
            return Err(TemplateError::Incomplete("structure has no frames"));
        }
        if self.facilitation.is_empty() {
            return Err(TemplateError::Incomplete("facilitation has no steps"));
        }
        Ok(())
    }

    /// Stamp identity onto the draft.
    #[must_use]
    pub fn into_template(self, id: String, created_at: String) -> Template {
        Template {
            id,
            title: self.title,
            objective: self.objective,
            participants: self.participants,
            duration: self.duration,
            materials: self.materials,
            structure: self.structure,
            facilitation: self.facilitation,
            coaching_tips: self.coaching_tips,
            variations: self.variations,
            created_at,
        }
    }
}

/// Slice from the first `{` to the last `}` inclusive.
fn extract_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

#[cfg(test)]
#[path = "template_test.rs"]
mod tests;
