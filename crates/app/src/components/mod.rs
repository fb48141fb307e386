pub mod connectivity_badge;
pub mod credentials_prompt;
pub mod login_form;
pub mod menu_list;
pub mod top_bar;

pub use connectivity_badge::ConnectivityStatus;
pub use credentials_prompt::CredentialsPrompt;
pub use login_form::LoginForm;
pub use menu_list::MenuList;
pub use top_bar::TopBar;
