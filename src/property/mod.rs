//! Properties and their parameters.
//!
//! A property renders as one unfolded content line:
//! `NAME;PARAM=value;...:VALUE`. Folding happens in the generator.

use crate::{Name, PARAM_DELIMITER, PARAM_NAME_DELIMITER, VALUE_DELIMITER, Value, ValueError};

/// A parameter further qualifying a property value, e.g. `VALUE=DATE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: Name,
    pub value: Value,
}

impl Parameter {
    pub fn new(name: impl Into<Name>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Render as `NAME=value`
    pub fn encode(&self) -> Result<String, ValueError> {
        Ok(format!(
            "{}{PARAM_NAME_DELIMITER}{}",
            self.name,
            self.value.encode()?
        ))
    }
}

/// A named attribute of a component.
///
/// The value is optional, properties without one are rendered without the
/// trailing `:value` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: Name,
    value: Option<Value>,
    params: Vec<Parameter>,
}

impl Property {
    pub fn new(name: impl Into<Name>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            params: Vec::new(),
        }
    }

    /// A property without value, parameters can be attached afterwards
    pub fn bare(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            value: None,
            params: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    #[inline]
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = Some(value.into());
    }

    /// Attach a parameter. Parameters are rendered in the order they were added,
    /// duplicates included.
    pub fn add_parameter(&mut self, name: impl Into<Name>, value: impl Into<Value>) {
        self.params.push(Parameter::new(name, value));
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<Name>, value: impl Into<Value>) -> Self {
        self.add_parameter(name, value);
        self
    }

    /// Render the unfolded content line, without line terminator
    pub fn encode(&self) -> Result<String, ValueError> {
        let mut line = self.name.normalized();
        for param in &self.params {
            line.push(PARAM_DELIMITER);
            line += &param.encode()?;
        }
        if let Some(value) = &self.value {
            line.push(VALUE_DELIMITER);
            line += &value.encode()?;
        }
        Ok(line)
    }
}
