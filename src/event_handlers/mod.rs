// Modules
mod greetings;
mod serenity;

pub use self::serenity::{handle_event, on_ready};
