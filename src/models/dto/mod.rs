pub mod request;
pub mod response;

pub use request::{
    GenerateMcqRequest, GenerateQuizRequest, GenerateSummaryRequest, GenerateTutorialRequest,
};
pub use response::{TaskAccepted, TaskStatusResponse};
