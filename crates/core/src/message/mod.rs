mod error;
mod requests;
mod types;
mod validation;

pub use error::ValidationError;
pub use requests::{
    CreateMessageRequest, CreateMessageResponse, DeleteMessageResponse, ErrorResponse, NewMessage,
    MESSAGE_DELETED,
};
pub use types::{sort_newest_first, Message, MessageId};
pub use validation::{
    parse_create_body, parse_message_id, validate_create_request, validation_error_to_status_code,
};
