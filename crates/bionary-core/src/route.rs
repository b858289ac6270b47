//! Navigation targets shared by the clients

use std::fmt;

/// A view the user can be sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Public search page
    Chat,
    /// Admin sign-in
    Login,
    /// Token-gated event form
    Admin,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Route::Chat => "/",
            Route::Login => "/login",
            Route::Admin => "/admin",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::Chat.path(), "/");
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Admin.to_string(), "/admin");
    }
}
