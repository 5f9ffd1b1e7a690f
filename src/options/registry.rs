//! Canonical-name registry built from the caller's options.
use std::collections::{HashMap, HashSet};

use super::{SetupDefinition, SetupOption};
use crate::error::ConfigError;

/// Name lookup for one invocation.
///
/// Every canonical and alternate name of every selectable option maps to the
/// option's canonical name.  Construction fails instead of letting a later
/// entry silently win when two entries claim the same name.
#[derive(Debug)]
pub struct Registry<'a> {
    options: Vec<&'a SetupOption>,
    defaults: Vec<&'a SetupOption>,
    resolver: HashMap<&'a str, &'a str>,
}

impl<'a> Registry<'a> {
    /// Build the registry for `definition`.
    ///
    /// Default entries take part in the conflict check but are not
    /// resolvable by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateOption`] if two entries share a
    /// canonical name, or [`ConfigError::DuplicateName`] if an alternate name
    /// is claimed by two distinct entries.
    pub fn new(definition: &'a SetupDefinition) -> Result<Self, ConfigError> {
        let entries = || definition.options.iter().chain(&definition.defaults);

        let mut canonical: HashSet<&str> = HashSet::new();
        for entry in entries() {
            if !canonical.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateOption {
                    name: entry.name.clone(),
                });
            }
        }

        let mut owners: HashMap<&'a str, &'a str> = HashMap::new();
        for entry in entries() {
            for name in entry.names() {
                match owners.get(name) {
                    Some(&owner) if owner != entry.name => {
                        return Err(ConfigError::DuplicateName {
                            name: name.to_string(),
                            first: owner.to_string(),
                            second: entry.name.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        owners.insert(name, entry.name.as_str());
                    }
                }
            }
        }

        let resolver = definition
            .options
            .iter()
            .flat_map(|option| option.names().map(move |name| (name, option.name.as_str())))
            .collect();

        Ok(Self {
            options: definition.options.iter().collect(),
            defaults: definition.defaults.iter().collect(),
            resolver,
        })
    }

    /// Canonical name for `name`, if it names a selectable option.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&'a str> {
        self.resolver.get(name).copied()
    }

    /// Selectable option with canonical name `name`.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&'a SetupOption> {
        self.options.iter().copied().find(|o| o.name == name)
    }

    /// Selectable options in caller order.
    #[must_use]
    pub fn options(&self) -> &[&'a SetupOption] {
        &self.options
    }

    /// Always-applied entries in caller order.
    #[must_use]
    pub fn defaults(&self) -> &[&'a SetupOption] {
        &self.defaults
    }
}
