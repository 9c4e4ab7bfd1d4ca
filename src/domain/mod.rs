mod access_code;
mod conversation;
mod course;
mod dashboard;
mod grade;
mod ids;
mod message;
mod patient_persona;
mod reply_pool;
mod sender;
mod tab;

pub use access_code::{ACCESS_CODE_LENGTH, AccessCode, AccessCodeError};
pub use conversation::Conversation;
pub use course::{Course, CourseId};
pub use dashboard::{Dashboard, NavigationCard};
pub use grade::{Grade, GradeBand, GradeReport};
pub use ids::{MessageId, SessionId};
pub use message::Message;
pub use patient_persona::{PATIENT_NAME, PATIENT_OPENING_LINE, PATIENT_REPLIES};
pub use reply_pool::{ReplyPool, ReplyPoolError};
pub use sender::Sender;
pub use tab::Tab;
