mod error;
pub use error::{InvalidDate, InvalidId, ParseEnumError};

mod ids;
pub use ids::{TaskId, UserId};

mod task_status;
pub use task_status::TaskStatus;

mod task_priority;
pub use task_priority::TaskPriority;

mod task_date;
pub use task_date::TaskDate;

mod task;
pub use task::{Classified, Task, TaskDraft};

mod task_filter;
pub use task_filter::{TaskFilter, filter};

mod session;
pub use session::{AccessToken, Session, User};
