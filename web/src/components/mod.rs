pub mod content_button;

pub use content_button::{ContentButton, CONTENT_TEST_ID, TEST_ID};
