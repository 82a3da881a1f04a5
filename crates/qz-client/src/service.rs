use std::future::Future;

use crate::{
    error::TransportError,
    model::{Topic, TopicDraft, TopicId},
};

/// Operations on the topics resource.
///
/// Every call is a single request. Nothing is retried and a failure is
/// reported exactly once to the caller.
pub trait TopicService {
    /// Fetch every topic, in the order the server returns them
    fn list_topics(&self) -> impl Future<Output = Result<Vec<Topic>, TransportError>> + Send;

    /// Fetch one topic
    fn get_topic(&self, id: TopicId)
    -> impl Future<Output = Result<Topic, TransportError>> + Send;

    /// Create a topic. The assigned id is only visible through a later list.
    fn create_topic(
        &self,
        draft: &TopicDraft,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Overwrite the editable fields of an existing topic
    fn update_topic(
        &self,
        id: TopicId,
        draft: &TopicDraft,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Remove a topic
    fn delete_topic(&self, id: TopicId)
    -> impl Future<Output = Result<(), TransportError>> + Send;
}
