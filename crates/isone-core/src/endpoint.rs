use crate::error::Error;

/// Static pairing of a relative URL path template and the record path locating
/// the array of records inside the JSON body it returns.
///
/// The record path is a traversal path, not a set: order matters, and it is
/// non-empty for any endpoint whose response is a list of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiEndpoint {
    path_template: &'static str,
    record_path: &'static [&'static str],
}

/// Daily generation fuel mix, one record per fuel category per interval.
pub const DAILY_FUEL_MIX: ApiEndpoint =
    ApiEndpoint::new("genfuelmix/day/{day}", &["GenFuelMixes", "GenFuelMix"]);

impl ApiEndpoint {
    pub const fn new(path_template: &'static str, record_path: &'static [&'static str]) -> Self {
        Self {
            path_template,
            record_path,
        }
    }

    pub const fn path_template(self) -> &'static str {
        self.path_template
    }

    pub const fn record_path(self) -> &'static [&'static str] {
        self.record_path
    }

    /// Substitutes named parameters into the path template, producing a
    /// concrete relative path. Pure, no I/O.
    pub fn resolve(self, params: &[(&str, &str)]) -> Result<String, Error> {
        let mut resolved = String::with_capacity(self.path_template.len());
        let mut rest = self.path_template;

        while let Some(start) = rest.find('{') {
            resolved.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                return Err(self.template_error(after));
            };
            let placeholder = &after[..end];
            let value = params
                .iter()
                .find(|(name, _)| *name == placeholder)
                .map(|(_, value)| *value)
                .ok_or_else(|| self.template_error(placeholder))?;
            resolved.push_str(value);
            rest = &after[end + 1..];
        }

        resolved.push_str(rest);
        Ok(resolved)
    }

    fn template_error(self, placeholder: &str) -> Error {
        Error::Template {
            placeholder: placeholder.to_owned(),
            template: self.path_template.to_owned(),
        }
    }
}
