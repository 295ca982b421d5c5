//! Page components for Sweetheart.

mod question;
mod success;

pub use question::QuestionPage;
pub use success::SuccessPage;
