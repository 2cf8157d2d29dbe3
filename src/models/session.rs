use uuid::Uuid;

/// Identity the store runs under. Guest sessions never touch the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<Uuid>,
    pub is_guest: bool,
}

impl Session {
    pub fn guest() -> Self {
        Self {
            user_id: None,
            is_guest: true,
        }
    }

    pub fn authenticated(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            is_guest: false,
        }
    }
}
