use crate::store::TopicStore;

#[derive(Clone, Debug, Default)]
pub struct ApiState {
    pub store: TopicStore,
}

impl ApiState {
    pub fn new(store: TopicStore) -> Self {
        Self { store }
    }
}
