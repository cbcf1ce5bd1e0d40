pub mod drafter;
pub mod executor;
pub mod validator;
