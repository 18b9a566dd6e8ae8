use tf_types::UserProfile;

/// What the navbar knows about the signed-in user.
///
/// Flags are only changed through [`Session::apply_profile`] and
/// [`Session::log_out`], which keeps `is_admin` implying `is_logged_in`.
/// Display fields are not cleared on logout; once the flags are down nothing
/// renders them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    is_logged_in: bool,
    is_admin: bool,
    name: String,
    email: String,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn apply_profile(&mut self, profile: &UserProfile) {
        self.is_logged_in = true;
        self.is_admin = profile.is_admin;
        self.name = profile.name.clone();
        self.email = profile.email.clone();
    }

    pub fn log_out(&mut self) {
        self.is_logged_in = false;
        self.is_admin = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_logged_out() {
        let session = Session::default();
        assert!(!session.is_logged_in());
        assert!(!session.is_admin());
    }

    #[test]
    fn apply_then_log_out_keeps_display_fields() {
        let mut session = Session::default();
        session.apply_profile(&UserProfile::new("Ada", "a@x.com", true));
        assert!(session.is_logged_in());
        assert!(session.is_admin());

        session.log_out();
        assert!(!session.is_logged_in());
        assert!(!session.is_admin());
        assert_eq!(session.name(), "Ada");
        assert_eq!(session.email(), "a@x.com");
    }

    #[test]
    fn non_admin_profile_clears_previous_admin() {
        let mut session = Session::default();
        session.apply_profile(&UserProfile::new("Ada", "a@x.com", true));
        session.apply_profile(&UserProfile::new("Bob", "b@x.com", false));
        assert!(session.is_logged_in());
        assert!(!session.is_admin());
        assert_eq!(session.name(), "Bob");
    }
}
