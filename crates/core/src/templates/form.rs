//! Input form state for filling in a template's variables.
//!
//! The form owns the value mapping. Whenever the template text changes the
//! field list is re-derived from the extractor and previously entered
//! values are reconciled against it.

use crate::vars::extract_variable_names;

use super::engine::{RenderContext, all_values_empty, render_string};

/// Message shown instead of the preview while every field is blank.
pub const PREVIEW_PLACEHOLDER: &str = "Fill in the variables to see the final prompt.";

/// What the preview area should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// No value has been entered yet.
    Empty,
    /// The substituted template.
    Rendered(String),
}

impl Preview {
    /// Text to display, falling back to [`PREVIEW_PLACEHOLDER`].
    pub fn display_text(&self) -> &str {
        match self {
            Preview::Empty => PREVIEW_PLACEHOLDER,
            Preview::Rendered(text) => text,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VariableForm {
    template: String,
    names: Vec<String>,
    values: RenderContext,
}

impl VariableForm {
    pub fn new(template: impl Into<String>) -> Self {
        let mut form = Self::default();
        form.set_template(template);
        form
    }

    /// Replace the template and reconcile held values.
    ///
    /// Values for names still present are kept, values for names that
    /// disappeared are dropped, and new names start out empty.
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
        self.names = extract_variable_names(&self.template);

        let mut reconciled = RenderContext::with_capacity(self.names.len());
        for name in &self.names {
            let value = self.values.remove(name).unwrap_or_default();
            reconciled.insert(name.clone(), value);
        }
        self.values = reconciled;
    }

    /// Set the value of a field.
    ///
    /// Returns `false` (and stores nothing) when the template has no such
    /// variable. The name is trimmed before lookup.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(name.trim()) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Set several values at once, ignoring names the template lacks.
    ///
    /// Returns the names that were not accepted.
    pub fn set_values<'a, I>(&mut self, pairs: I) -> Vec<String>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut rejected = Vec::new();
        for (name, value) in pairs {
            if !self.set_value(name, value) {
                rejected.push(name.to_string());
            }
        }
        rejected
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name.trim()).map(String::as_str)
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Variable names in extraction order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// `(name, value)` pairs in extraction order, one per input field.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.names.iter().map(|name| {
            let value = self.values.get(name).map(String::as_str).unwrap_or("");
            (name.as_str(), value)
        })
    }

    pub fn values(&self) -> &RenderContext {
        &self.values
    }

    /// Names whose value is still empty.
    pub fn missing(&self) -> Vec<&str> {
        self.fields().filter(|(_, v)| v.is_empty()).map(|(n, _)| n).collect()
    }

    /// Substitute the current values into the template.
    pub fn rendered(&self) -> String {
        render_string(&self.template, &self.values)
    }

    pub fn preview(&self) -> Preview {
        if all_values_empty(&self.values) {
            Preview::Empty
        } else {
            Preview::Rendered(self.rendered())
        }
    }
}
