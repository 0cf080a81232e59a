use std::rc::Rc;
use yew::functional::Reducible;

use super::data_uri::DataUri;

/// Position of a batch relative to every other batch of the session.
/// Issued when a submission starts, before any of its files are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BatchTicket(u64);

#[derive(Default, Debug)]
pub struct BatchSequence {
    next: u64,
}

impl BatchSequence {
    pub fn issue(&mut self) -> BatchTicket {
        let ticket = BatchTicket(self.next);
        self.next += 1;
        ticket
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Batch {
    ticket: BatchTicket,
    images: Vec<DataUri>,
}

/// Newest-first image collection shown in the "Recent Work" gallery.
///
/// Batches are kept whole and sorted by ticket, newest first, so a slow
/// batch that commits after a later one still lands behind it and never
/// splits it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryStore {
    batches: Vec<Batch>,
}

impl GalleryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a finished batch. Returns how many images were added.
    pub fn commit(&mut self, ticket: BatchTicket, images: Vec<DataUri>) -> usize {
        if images.is_empty() {
            return 0;
        }
        let added = images.len();
        let at = self
            .batches
            .iter()
            .position(|b| b.ticket < ticket)
            .unwrap_or(self.batches.len());
        self.batches.insert(at, Batch { ticket, images });
        added
    }

    pub fn images(&self) -> impl Iterator<Item = &DataUri> + '_ {
        self.batches.iter().flat_map(|b| b.images.iter())
    }

    pub fn len(&self) -> usize {
        self.batches.iter().map(|b| b.images.len()).sum()
    }
}

pub enum GalleryAction {
    Commit {
        ticket: BatchTicket,
        images: Vec<DataUri>,
    },
}

impl Reducible for GalleryStore {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            GalleryAction::Commit { ticket, images } => {
                if images.is_empty() {
                    return self;
                }
                let mut next = (*self).clone();
                let added = next.commit(ticket, images);
                log::info!("Added {} photos to the gallery ({} total)", added, next.len());
                next.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(name: &str) -> DataUri {
        DataUri::encode("image/png", name, name.as_bytes())
    }

    fn names(store: &GalleryStore) -> Vec<DataUri> {
        store.images().cloned().collect()
    }

    #[test]
    fn batches_are_prepended_in_order() {
        let mut seq = BatchSequence::default();
        let mut store = GalleryStore::new();

        store.commit(seq.issue(), vec![img("a"), img("b")]);
        assert_eq!(names(&store), vec![img("a"), img("b")]);

        store.commit(seq.issue(), vec![img("c")]);
        assert_eq!(names(&store), vec![img("c"), img("a"), img("b")]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn late_batch_lands_behind_newer_one() {
        let mut seq = BatchSequence::default();
        let mut store = GalleryStore::new();
        store.commit(seq.issue(), vec![img("old")]);

        let first = seq.issue();
        let second = seq.issue();
        store.commit(second, vec![img("s2a"), img("s2b")]);
        store.commit(first, vec![img("s1a"), img("s1b")]);

        assert_eq!(
            names(&store),
            vec![img("s2a"), img("s2b"), img("s1a"), img("s1b"), img("old")]
        );
    }

    #[test]
    fn empty_commit_changes_nothing() {
        let mut seq = BatchSequence::default();
        let mut store = GalleryStore::new();
        store.commit(seq.issue(), vec![img("a")]);
        let before = store.clone();

        assert_eq!(store.commit(seq.issue(), Vec::new()), 0);
        assert_eq!(store, before);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut seq = BatchSequence::default();
        let mut store = GalleryStore::new();
        store.commit(seq.issue(), vec![img("same"), img("same")]);
        store.commit(seq.issue(), vec![img("same")]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn reducer_skips_empty_batches() {
        let mut seq = BatchSequence::default();
        let store = Rc::new(GalleryStore::new());
        let after = store.clone().reduce(GalleryAction::Commit {
            ticket: seq.issue(),
            images: Vec::new(),
        });
        assert!(Rc::ptr_eq(&store, &after));

        let after = after.reduce(GalleryAction::Commit {
            ticket: seq.issue(),
            images: vec![img("a")],
        });
        assert_eq!(names(&after), vec![img("a")]);
    }
}
