use futures::future::LocalBoxFuture;
use futures::FutureExt;
use thiserror::Error;

use super::data_uri::DataUri;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("Failed to read {name}: {message}")]
    Unreadable { name: String, message: String },
}

/// Anything the gallery can turn into a displayable image.
pub trait ImageSource {
    fn name(&self) -> String;

    /// Starts reading. Nothing happens until this is called, so sources
    /// past the upload limit are never touched.
    fn read(&self) -> LocalBoxFuture<'static, Result<DataUri, ReadError>>;
}

impl ImageSource for gloo_file::File {
    fn name(&self) -> String {
        gloo_file::File::name(self)
    }

    fn read(&self) -> LocalBoxFuture<'static, Result<DataUri, ReadError>> {
        let file = self.clone();
        async move {
            let name = file.name();
            let bytes = gloo_file::futures::read_as_bytes(&file)
                .await
                .map_err(|e| ReadError::Unreadable {
                    name: name.clone(),
                    message: format!("{:?}", e),
                })?;
            Ok(DataUri::encode(&file.raw_mime_type(), &name, &bytes))
        }
        .boxed_local()
    }
}

/// Collects the files of a `<input type="file">` into owned handles.
pub fn files_from_input(input: &web_sys::HtmlInputElement) -> Vec<gloo_file::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(gloo_file::File::from)
        .collect()
}
