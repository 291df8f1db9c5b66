use contracts::shared::resource::Resource;

/// State slice for one resource collection.
///
/// `items` always holds a vector: a failed fetch replaces it with the
/// empty fallback rather than leaving stale records on screen. `error`
/// keeps the last failure message until the next operation starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCollection<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ResourceCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error: None,
        }
    }
}

impl<T: Resource> ResourceCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation starts here: loading flag on, previous failure
    /// cleared.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn resolve_fetch(&mut self, outcome: Result<Vec<T>, String>) {
        match outcome {
            Ok(items) => {
                self.items = items;
            }
            Err(message) => {
                self.items = Vec::new();
                self.error = Some(message);
            }
        }
        self.is_loading = false;
    }

    pub fn resolve_add(&mut self, outcome: Result<T, String>) {
        match outcome {
            Ok(record) => self.items.push(record),
            Err(message) => self.error = Some(message),
        }
        self.is_loading = false;
    }

    /// Replaces the item whose id matches the saved record. A record the
    /// collection does not hold is NOT inserted; the server accepted the
    /// write either way.
    pub fn resolve_update(&mut self, outcome: Result<T, String>) {
        match outcome {
            Ok(record) => {
                if let Some(existing) = self.items.iter_mut().find(|i| i.id() == record.id()) {
                    *existing = record;
                }
            }
            Err(message) => self.error = Some(message),
        }
        self.is_loading = false;
    }

    pub fn resolve_remove(&mut self, id: i32, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => self.items.retain(|i| i.id() != id),
            Err(message) => self.error = Some(message),
        }
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_currency::Currency;

    fn peso() -> Currency {
        serde_json::from_str(r#"{"ID":1,"Code":"PHP","Name":"Philippine Peso"}"#).unwrap()
    }

    fn dollar() -> Currency {
        serde_json::from_str(r#"{"ID":2,"Code":"USD","Name":"US Dollar"}"#).unwrap()
    }

    #[test]
    fn successful_fetch_replaces_items_and_clears_state() {
        let mut c = ResourceCollection::<Currency>::new();
        c.begin();
        assert!(c.is_loading);
        c.resolve_fetch(Ok(vec![peso()]));
        assert_eq!(c.items, vec![peso()]);
        assert!(!c.is_loading);
        assert_eq!(c.error, None);
    }

    #[test]
    fn failed_fetch_keeps_no_stale_items() {
        let mut c = ResourceCollection::<Currency>::new();
        c.resolve_fetch(Ok(vec![peso(), dollar()]));
        c.begin();
        c.resolve_fetch(Err("HTTP 502".to_string()));
        assert!(c.items.is_empty());
        assert_eq!(c.error.as_deref(), Some("HTTP 502"));
        assert!(!c.is_loading);
    }

    #[test]
    fn begin_clears_the_previous_failure() {
        let mut c = ResourceCollection::<Currency>::new();
        c.begin();
        c.resolve_fetch(Err("HTTP 502".to_string()));
        c.begin();
        assert_eq!(c.error, None);
        assert!(c.is_loading);
    }

    #[test]
    fn add_appends_exactly_one_record() {
        let mut c = ResourceCollection::<Currency>::new();
        c.resolve_fetch(Ok(vec![peso()]));
        c.begin();
        c.resolve_add(Ok(dollar()));
        assert_eq!(c.items.len(), 2);
        assert!(c.items.contains(&dollar()));
    }

    #[test]
    fn failed_add_leaves_items_untouched() {
        let mut c = ResourceCollection::<Currency>::new();
        c.resolve_fetch(Ok(vec![peso()]));
        c.begin();
        c.resolve_add(Err("Internal Server Error".to_string()));
        assert_eq!(c.items, vec![peso()]);
        assert_eq!(c.error.as_deref(), Some("Internal Server Error"));
    }

    #[test]
    fn update_replaces_the_matching_record_only() {
        let mut c = ResourceCollection::<Currency>::new();
        c.resolve_fetch(Ok(vec![peso(), dollar()]));
        let renamed: Currency =
            serde_json::from_str(r#"{"ID":1,"Code":"PHP","Name":"Piso ng Pilipinas"}"#).unwrap();
        c.begin();
        c.resolve_update(Ok(renamed.clone()));
        assert_eq!(c.items[0], renamed);
        assert_eq!(c.items[1], dollar());
    }

    #[test]
    fn update_for_an_unknown_id_is_a_noop() {
        let mut c = ResourceCollection::<Currency>::new();
        c.resolve_fetch(Ok(vec![peso()]));
        let stranger: Currency =
            serde_json::from_str(r#"{"ID":9,"Code":"JPY","Name":"Japanese Yen"}"#).unwrap();
        c.begin();
        c.resolve_update(Ok(stranger));
        assert_eq!(c.items, vec![peso()]);
    }

    #[test]
    fn remove_drops_the_record_and_tolerates_absent_ids() {
        let mut c = ResourceCollection::<Currency>::new();
        c.resolve_fetch(Ok(vec![peso(), dollar()]));
        c.begin();
        c.resolve_remove(2, Ok(()));
        assert_eq!(c.items, vec![peso()]);
        c.begin();
        c.resolve_remove(777, Ok(()));
        assert_eq!(c.items, vec![peso()]);
    }

    // Two overlapping fetches: whichever resolves last owns the state.
    #[test]
    fn overlapping_fetches_resolve_last_write_wins() {
        let mut c = ResourceCollection::<Currency>::new();
        c.begin();
        c.begin();
        c.resolve_fetch(Ok(vec![peso()]));
        c.resolve_fetch(Ok(vec![dollar()]));
        assert_eq!(c.items, vec![dollar()]);
        assert!(!c.is_loading);
    }
}
