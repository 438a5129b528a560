pub mod message_list_response;
#[allow(clippy::module_inception)]
pub mod messages;
pub mod publish_response;
