use futures::future::join_all;

use super::data_uri::DataUri;
use super::reader::ImageSource;

/// Reads at most `limit` sources concurrently and returns the ones that
/// succeeded, in selection order.
///
/// Resolves only after every started read has finished. A failed read is
/// logged and dropped from the batch; it never fails the whole load.
pub async fn load_batch<S: ImageSource>(selection: Vec<S>, limit: usize) -> Vec<DataUri> {
    if selection.len() > limit {
        log::debug!(
            "Upload of {} files truncated to the first {}",
            selection.len(),
            limit
        );
    }

    let reads = selection.iter().take(limit).map(|source| {
        let name = source.name();
        let read = source.read();
        async move { (name, read.await) }
    });

    join_all(reads)
        .await
        .into_iter()
        .filter_map(|(name, result)| match result {
            Ok(uri) => {
                log::debug!("Read {} as {}", name, uri.mime());
                Some(uri)
            }
            Err(e) => {
                log::warn!("Skipping gallery image {}: {}", name, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::reader::ReadError;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::{join, LocalBoxFuture};
    use futures::FutureExt;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct FakeFile {
        name: String,
        ok: bool,
        started: Rc<Cell<usize>>,
    }

    impl FakeFile {
        fn ok(name: &str, started: &Rc<Cell<usize>>) -> Self {
            FakeFile { name: name.to_string(), ok: true, started: started.clone() }
        }

        fn broken(name: &str, started: &Rc<Cell<usize>>) -> Self {
            FakeFile { name: name.to_string(), ok: false, started: started.clone() }
        }
    }

    impl ImageSource for FakeFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn read(&self) -> LocalBoxFuture<'static, Result<DataUri, ReadError>> {
            self.started.set(self.started.get() + 1);
            let result = if self.ok {
                Ok(png(&self.name))
            } else {
                Err(ReadError::Unreadable {
                    name: self.name.clone(),
                    message: "NotReadable".to_string(),
                })
            };
            futures::future::ready(result).boxed_local()
        }
    }

    /// Completes only when the test sends on the paired channel.
    struct GatedFile {
        name: &'static str,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl ImageSource for GatedFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn read(&self) -> LocalBoxFuture<'static, Result<DataUri, ReadError>> {
            let gate = self.gate.borrow_mut().take().expect("read twice");
            let name = self.name;
            async move {
                gate.await.map_err(|_| ReadError::Unreadable {
                    name: name.to_string(),
                    message: "cancelled".to_string(),
                })?;
                Ok(DataUri::encode("image/jpeg", name, name.as_bytes()))
            }
            .boxed_local()
        }
    }

    fn png(name: &str) -> DataUri {
        DataUri::encode("image/png", name, name.as_bytes())
    }

    #[test]
    fn keeps_selection_order() {
        let started = Rc::new(Cell::new(0));
        let files = vec![FakeFile::ok("a.png", &started), FakeFile::ok("b.png", &started)];
        let images = block_on(load_batch(files, 24));
        assert_eq!(images, vec![png("a.png"), png("b.png")]);
    }

    #[test]
    fn empty_selection_reads_nothing() {
        let images = block_on(load_batch(Vec::<FakeFile>::new(), 24));
        assert!(images.is_empty());
    }

    #[test]
    fn files_past_the_limit_are_never_started() {
        let started = Rc::new(Cell::new(0));
        let files: Vec<FakeFile> = (0..30)
            .map(|i| FakeFile::ok(&format!("{}.png", i), &started))
            .collect();

        let images = block_on(load_batch(files, 24));

        assert_eq!(started.get(), 24);
        assert_eq!(images.len(), 24);
        assert_eq!(images.first(), Some(&png("0.png")));
        assert_eq!(images.last(), Some(&png("23.png")));
    }

    #[test]
    fn failed_reads_are_dropped_and_the_rest_kept() {
        let started = Rc::new(Cell::new(0));
        let files = vec![
            FakeFile::ok("a.png", &started),
            FakeFile::broken("corrupt.png", &started),
            FakeFile::ok("c.png", &started),
        ];
        let images = block_on(load_batch(files, 24));
        assert_eq!(images, vec![png("a.png"), png("c.png")]);
    }

    #[test]
    fn all_failed_batch_is_empty() {
        let started = Rc::new(Cell::new(0));
        let files = vec![FakeFile::broken("x", &started), FakeFile::broken("y", &started)];
        assert!(block_on(load_batch(files, 24)).is_empty());
    }

    #[test]
    fn out_of_order_completion_keeps_selection_order() {
        let (tx_first, rx_first) = oneshot::channel();
        let (tx_second, rx_second) = oneshot::channel();
        let files = vec![
            GatedFile { name: "first.jpg", gate: RefCell::new(Some(rx_first)) },
            GatedFile { name: "second.jpg", gate: RefCell::new(Some(rx_second)) },
        ];

        let release = async move {
            tx_second.send(()).unwrap();
            tx_first.send(()).unwrap();
        };
        let (images, ()) = block_on(join(load_batch(files, 24), release));

        assert_eq!(
            images,
            vec![
                DataUri::encode("image/jpeg", "first.jpg", b"first.jpg"),
                DataUri::encode("image/jpeg", "second.jpg", b"second.jpg"),
            ]
        );
    }
}
