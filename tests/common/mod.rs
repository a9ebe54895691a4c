pub mod fixtures;

/// Builds a concrete location from path components, the shape every
/// evaluator call site passes around.
pub fn location(components: &[&str]) -> Vec<String> {
    components.iter().map(|component| component.to_string()).collect()
}
