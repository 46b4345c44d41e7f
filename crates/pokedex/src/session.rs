use crate::prelude::*;
use pokedex_core::catalog::Catalog;
use pokedex_core::filter::FilterCriteria;
use pokedex_core::partition::{
    build_view, capture_item, release_item, CaptureOutcome, CapturedSet, PokedexView,
    ReleaseOutcome,
};
use pokedex_core::persist::CapturedStore;

/// One user session: a loaded catalog plus the state restored from a store
///
/// Mutations persist before returning, so the next view always reflects them.
pub struct Session {
    catalog: Catalog,
    store: Box<dyn CapturedStore>,
    captured: CapturedSet,
    filter: FilterCriteria,
}

impl Session {
    pub fn open(catalog: Catalog, mut store: Box<dyn CapturedStore>) -> Self {
        let captured = store.load();
        let filter = store.load_filter().unwrap_or_default();

        log::debug!(
            "Opened session with {} pokemon, {} captured ({} store)",
            catalog.len(),
            captured.len(),
            store.name()
        );

        Self {
            catalog,
            store,
            captured,
            filter,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn captured(&self) -> &CapturedSet {
        &self.captured
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    pub fn location(&self) -> Option<String> {
        self.store.location()
    }

    /// Capture a pokemon; unknown ids are ignored with a warning
    ///
    /// The session state only changes once the store has accepted the write.
    pub fn capture(&mut self, id: u64) -> std::result::Result<CaptureOutcome, Error> {
        let mut next = self.captured.clone();
        let outcome = capture_item(&self.catalog, &mut next, id);

        match outcome {
            CaptureOutcome::Captured => self.commit(next)?,
            CaptureOutcome::AlreadyCaptured => log::debug!("Pokemon {} already captured", id),
            CaptureOutcome::UnknownItem => log::warn!("Pokemon {} is not in the catalog", id),
        }

        Ok(outcome)
    }

    pub fn release(&mut self, id: u64) -> std::result::Result<ReleaseOutcome, Error> {
        let mut next = self.captured.clone();
        let outcome = release_item(&mut next, id);

        if outcome.changed() {
            self.commit(next)?;
        } else {
            log::debug!("Pokemon {} was not captured", id);
        }

        Ok(outcome)
    }

    /// Replace the filter; stores that carry filters persist it first
    pub fn set_filter(&mut self, criteria: FilterCriteria) -> std::result::Result<(), Error> {
        self.store.save_filter(&criteria)?;
        self.filter = criteria;
        Ok(())
    }

    pub fn view(&self) -> PokedexView {
        build_view(&self.catalog, &self.captured, &self.filter)
    }

    /// View with a one-off filter that is not stored in the session
    pub fn view_with(&self, criteria: &FilterCriteria) -> PokedexView {
        build_view(&self.catalog, &self.captured, criteria)
    }

    fn commit(&mut self, next: CapturedSet) -> std::result::Result<(), Error> {
        self.store.save(&next)?;
        self.captured = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStore, UrlStore};
    use pokedex_core::catalog::Item;
    use pokedex_core::persist::{MemoryStore, StoreError};
    use std::sync::{Arc, Mutex};

    fn item(id: u64, name: &str, tags: &[&str]) -> Item {
        Item {
            id,
            name: name.to_string(),
            category_tags: tags.iter().map(|t| t.to_string()).collect(),
            image_ref: String::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            item(1, "pikachu", &["electric"]),
            item(2, "charmander", &["fire"]),
            item(3, "bulbasaur", &["grass", "poison"]),
        ])
        .unwrap()
    }

    /// Memory store that records how often it was written
    #[derive(Clone, Default)]
    struct CountingStore {
        saves: Arc<Mutex<Vec<Vec<u64>>>>,
    }

    impl CapturedStore for CountingStore {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn load(&mut self) -> CapturedSet {
            CapturedSet::new()
        }

        fn save(&mut self, captured: &CapturedSet) -> std::result::Result<(), StoreError> {
            self.saves.lock().unwrap().push(captured.ids().to_vec());
            Ok(())
        }
    }

    /// Store that starts from a fixed set and rejects every write
    struct FailingStore {
        initial: Vec<u64>,
    }

    impl CapturedStore for FailingStore {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn load(&mut self) -> CapturedSet {
            self.initial.iter().copied().collect()
        }

        fn save(&mut self, _captured: &CapturedSet) -> std::result::Result<(), StoreError> {
            Err(StoreError::Io("disk full".to_string()))
        }

        fn save_filter(
            &mut self,
            _criteria: &FilterCriteria,
        ) -> std::result::Result<(), StoreError> {
            Err(StoreError::Io("disk full".to_string()))
        }
    }

    fn view_ids(items: &[pokedex_core::partition::ItemOutput]) -> Vec<u64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_capture_moves_item_between_views() {
        let mut session = Session::open(catalog(), Box::new(MemoryStore::new()));

        session.capture(1).unwrap();
        let view = session.view();

        assert_eq!(view_ids(&view.available), vec![2, 3]);
        assert_eq!(view_ids(&view.captured), vec![1]);

        session.release(1).unwrap();
        let view = session.view();

        assert_eq!(view_ids(&view.available), vec![1, 2, 3]);
        assert!(view.captured.is_empty());
    }

    #[test]
    fn test_only_real_changes_are_persisted() {
        let store = CountingStore::default();
        let saves = store.saves.clone();
        let mut session = Session::open(catalog(), Box::new(store));

        assert_eq!(session.capture(2).unwrap(), CaptureOutcome::Captured);
        assert_eq!(session.capture(2).unwrap(), CaptureOutcome::AlreadyCaptured);
        assert_eq!(session.capture(99).unwrap(), CaptureOutcome::UnknownItem);
        assert_eq!(session.release(3).unwrap(), ReleaseOutcome::NotCaptured);
        assert_eq!(session.release(2).unwrap(), ReleaseOutcome::Released);

        assert_eq!(*saves.lock().unwrap(), vec![vec![2], vec![]]);
    }

    #[test]
    fn test_store_failure_surfaces() {
        let mut session = Session::open(catalog(), Box::new(FailingStore { initial: vec![] }));

        let err = session.capture(1).unwrap_err();
        assert!(matches!(err, Error::Store(_)));
    }

    #[test]
    fn test_failed_capture_leaves_state_untouched() {
        let mut session = Session::open(catalog(), Box::new(FailingStore { initial: vec![] }));

        assert!(session.capture(1).is_err());

        assert!(!session.captured().contains(1));
        assert!(session.view().captured.is_empty());
        assert_eq!(view_ids(&session.view().available), vec![1, 2, 3]);
    }

    #[test]
    fn test_failed_release_leaves_state_untouched() {
        let mut session = Session::open(catalog(), Box::new(FailingStore { initial: vec![2] }));

        assert!(session.release(2).is_err());

        assert_eq!(session.captured().ids(), &[2]);
        assert_eq!(view_ids(&session.view().captured), vec![2]);
        assert_eq!(view_ids(&session.view().available), vec![1, 3]);
    }

    #[test]
    fn test_failed_set_filter_keeps_previous_filter() {
        let mut session = Session::open(catalog(), Box::new(FailingStore { initial: vec![] }));

        assert!(session.set_filter(FilterCriteria::new("char", "")).is_err());

        assert!(session.filter().is_empty());
        assert_eq!(view_ids(&session.view().available), vec![1, 2, 3]);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        let mut session = Session::open(catalog(), Box::new(FileStore::new(temp_dir.path())));
        session.capture(3).unwrap();
        session.capture(1).unwrap();
        drop(session);

        let reopened = Session::open(catalog(), Box::new(FileStore::new(temp_dir.path())));
        assert_eq!(reopened.captured().ids(), &[3, 1]);
        assert_eq!(view_ids(&reopened.view().captured), vec![1, 3]);
    }

    #[test]
    fn test_url_session_restores_filter_and_captures() {
        let store = UrlStore::parse("http://localhost/?captured=1,x&name=saur").unwrap();
        let session = Session::open(catalog(), Box::new(store));

        let view = session.view();

        assert_eq!(session.filter(), &FilterCriteria::new("saur", ""));
        assert_eq!(view_ids(&view.available), vec![3]);
        assert_eq!(view_ids(&view.captured), vec![1]);
    }

    #[test]
    fn test_url_session_set_filter_updates_location() {
        let store = UrlStore::parse("http://localhost/?captured=2").unwrap();
        let mut session = Session::open(catalog(), Box::new(store));

        session
            .set_filter(FilterCriteria::new("", "grass"))
            .unwrap();

        let location = session.location().unwrap();
        assert_eq!(location, "http://localhost/?captured=2&type=grass");
        assert_eq!(view_ids(&session.view().available), vec![3]);
    }

    #[test]
    fn test_view_with_does_not_change_filter() {
        let session = Session::open(catalog(), Box::new(MemoryStore::new()));

        let view = session.view_with(&FilterCriteria::new("char", ""));

        assert_eq!(view_ids(&view.available), vec![2]);
        assert!(session.filter().is_empty());
    }

    #[test]
    fn test_empty_catalog_ignores_captures() {
        let mut session = Session::open(Catalog::empty(), Box::new(MemoryStore::new()));

        assert_eq!(session.capture(1).unwrap(), CaptureOutcome::UnknownItem);
        assert!(session.view().is_catalog_empty());
    }
}
