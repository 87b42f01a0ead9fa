use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{SavedEvent, SavedEventCompositeKey, Session, User};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub users: Arc<Mutex<HashMap<String, User>>>,
        pub sessions: Arc<Mutex<HashMap<String, Session>>>,
        pub saved_events: Arc<Mutex<HashMap<SavedEventCompositeKey, SavedEvent>>>,
    }
);
