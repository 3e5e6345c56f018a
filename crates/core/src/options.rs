/// Options for a single [`Normalizer::normalize`] call.
///
/// [`Normalizer::normalize`]: crate::Normalizer::normalize
pub struct NormalizeOptions<'a> {
    /// Bypass the curated-table substitution stage. The consistency checker
    /// sets this to see what the algorithmic stages produce on their own.
    pub skip_hardcoded_mapping: bool,

    /// Delete any non-ASCII content surviving to the final stage. When
    /// false, leftovers stay in the returned string.
    pub remove_leftovers: bool,

    /// Diagnostics hook, called once with the concatenation of all
    /// non-ASCII runs remaining just before the final strip. Not called
    /// when nothing is left; never affects the returned string.
    pub on_leftovers: Option<&'a mut dyn FnMut(&str)>,
}

impl Default for NormalizeOptions<'_> {
    fn default() -> Self {
        Self {
            skip_hardcoded_mapping: false,
            remove_leftovers: true,
            on_leftovers: None,
        }
    }
}

impl<'a> NormalizeOptions<'a> {
    /// Builder: bypass the curated-table stage
    #[must_use]
    pub fn skip_hardcoded_mapping(mut self, skip: bool) -> Self {
        self.skip_hardcoded_mapping = skip;
        self
    }

    /// Builder: keep or remove non-ASCII leftovers
    #[must_use]
    pub fn remove_leftovers(mut self, remove: bool) -> Self {
        self.remove_leftovers = remove;
        self
    }

    /// Builder: set the leftover diagnostics hook
    #[must_use]
    pub fn on_leftovers(mut self, hook: &'a mut dyn FnMut(&str)) -> Self {
        self.on_leftovers = Some(hook);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = NormalizeOptions::default();
        assert!(!options.skip_hardcoded_mapping);
        assert!(options.remove_leftovers);
        assert!(options.on_leftovers.is_none());
    }

    #[test]
    fn test_builder() {
        let options = NormalizeOptions::default()
            .skip_hardcoded_mapping(true)
            .remove_leftovers(false);
        assert!(options.skip_hardcoded_mapping);
        assert!(!options.remove_leftovers);
    }
}
