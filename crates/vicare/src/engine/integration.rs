use super::entity::Entity;

/// Registration interface handed to integrations during setup.
///
/// Integrations build their entities and pass them here in the order they
/// should appear to consumers.
pub trait EntitySink {
    fn add_entities(&mut self, entities: Vec<Box<dyn Entity>>);
}

impl EntitySink for Vec<Box<dyn Entity>> {
    fn add_entities(&mut self, entities: Vec<Box<dyn Entity>>) {
        self.extend(entities);
    }
}
