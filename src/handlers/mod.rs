pub mod download_handler;
pub mod generate_handler;
pub mod health_handler;
pub mod session;
pub mod task_handler;

pub use download_handler::download_pdf;
pub use generate_handler::{generate_mcqs, generate_quiz, generate_summary, generate_tutorial};
pub use health_handler::health_check;
pub use task_handler::get_task_status;
