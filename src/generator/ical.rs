use super::{Emitter, GeneratorError, GeneratorOptions, fold};
use crate::{CRLF, Component, Property};

impl Emitter for Property {
    fn try_generate_with(&self, options: &GeneratorOptions) -> Result<String, GeneratorError> {
        let line = self
            .encode()
            .map_err(|source| GeneratorError::InvalidValue {
                property: self.name().normalized(),
                source,
            })?;
        Ok(fold(&line, options.max_line_length).into_owned() + CRLF)
    }

    fn generate_with(&self, options: &GeneratorOptions) -> String {
        self.try_generate_with(options).unwrap_or_else(|err| {
            tracing::error!(%err, "skipping property");
            String::new()
        })
    }
}

impl Emitter for Component {
    fn try_generate_with(&self, options: &GeneratorOptions) -> Result<String, GeneratorError> {
        let name = self.name();
        let mut text = format!("BEGIN:{name}{CRLF}");
        for prop in self.properties() {
            text += &prop.try_generate_with(options)?;
        }
        for comp in self.components() {
            text += &comp.try_generate_with(options)?;
        }
        Ok(text + "END:" + &name.normalized() + CRLF)
    }

    fn generate_with(&self, options: &GeneratorOptions) -> String {
        let name = self.name();
        format!(
            "BEGIN:{name}{CRLF}{props}{comps}END:{name}{CRLF}",
            props = self
                .properties()
                .iter()
                .map(|prop| prop.generate_with(options))
                .collect::<String>(),
            comps = self
                .components()
                .iter()
                .map(|comp| comp.generate_with(options))
                .collect::<String>(),
        )
    }
}
