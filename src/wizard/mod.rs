mod session;
mod types;

pub use session::{Step, WizardSession};
pub use types::{
    Archetype, CareerReport, EnvironmentFit, Job, Rating, Recommendation, SessionRecord, Task,
    TaskRating, TopTask,
};
