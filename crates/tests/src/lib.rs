#[cfg(test)]
mod common;

#[cfg(test)]
mod session_login_tests;

#[cfg(test)]
mod session_logout_tests;

#[cfg(test)]
mod session_restore_tests;


#[cfg(test)]
mod connectivity_tests;

#[cfg(test)]
mod credentials_tests;
