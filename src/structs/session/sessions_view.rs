use crate::structs::session::session::Session;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionsView {
    pub sessions: Vec<Session>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionsView {
    pub fn find(&self, name: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.name == name)
    }

    /// Overwrite the entry with the same name. Unknown names leave the list as is.
    pub fn replace(&mut self, session: Session) -> bool {
        match self.sessions.iter_mut().find(|s| s.name == session.name) {
            Some(existing) => {
                *existing = session;
                true
            }
            None => false,
        }
    }

    pub fn upsert(&mut self, session: Session) {
        if !self.replace(session.clone()) {
            self.sessions.push(session);
        }
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.name != name);
        before != self.sessions.len()
    }

    pub fn names(&self) -> Vec<String> {
        self.sessions.iter().map(|s| s.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::session_status::SessionStatus;

    fn session(name: &str, status: SessionStatus) -> Session {
        Session::new(name, name, status)
    }

    #[test]
    fn upsert_never_duplicates() {
        let mut view = SessionsView::default();
        view.upsert(session("a", SessionStatus::Stopped));
        view.upsert(session("b", SessionStatus::Stopped));
        view.upsert(session("a", SessionStatus::Working));

        assert_eq!(view.names(), vec!["a", "b"]);
        assert_eq!(view.find("a").unwrap().status, SessionStatus::Working);
    }

    #[test]
    fn replace_ignores_unknown_names() {
        let mut view = SessionsView::default();
        view.upsert(session("a", SessionStatus::Stopped));
        assert!(!view.replace(session("zzz", SessionStatus::Working)));
        assert_eq!(view.sessions.len(), 1);
    }

    #[test]
    fn remove_only_matching_entry() {
        let mut view = SessionsView::default();
        view.upsert(session("a", SessionStatus::Stopped));
        view.upsert(session("b", SessionStatus::Working));

        assert!(view.remove("a"));
        assert!(!view.remove("a"));
        assert_eq!(view.names(), vec!["b"]);
    }
}
