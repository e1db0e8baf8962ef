mod create;
mod delete;
mod login;
mod password_reset;
mod profile;
mod service;
mod update;

pub use create::CreateUserCommand;
pub use login::{LoginCommand, LoginResult};
pub use password_reset::{ForgotPasswordCommand, ResetPasswordCommand};
pub use profile::UpdateProfileCommand;
pub use service::UserCommandService;
pub use update::UpdateUserCommand;
