mod field_errors;
pub use field_errors::FieldErrors;

mod task_form;
pub use task_form::{TaskField, TaskForm, ValidationResult, validate};

mod credentials;
pub use credentials::{Credentials, LoginField, LoginForm, validate_credentials};
