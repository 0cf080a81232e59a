use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::gallery::{files_from_input, DataUri};

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    /// Newest first.
    pub images: Vec<DataUri>,
    pub on_upload: Callback<Vec<gloo_file::File>>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let onchange = {
        let on_upload = props.on_upload.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files = files_from_input(&input);
            // Clear so picking the same files again still fires a change.
            input.set_value("");
            if !files.is_empty() {
                on_upload.emit(files);
            }
        })
    };

    let total = props.images.len();

    html! {
        <section id="gallery" class="page-section">
            <div class="gallery-header">
                <h2>{"Recent Work"}</h2>
                <label class="upload-label">
                    <input type="file" accept="image/*" multiple=true class="hidden-input" {onchange} />
                    <span class="upload-button">
                        <i class="fa-solid fa-cloud-arrow-up"></i>{" Upload photos"}
                    </span>
                </label>
            </div>
            if props.images.is_empty() {
                <div class="gallery-empty">
                    <i class="fa-solid fa-image gallery-empty-icon"></i>
                    <p>{"Drop in your best before/after shots and completed installs. They’ll appear here."}</p>
                </div>
            } else {
                <div class="gallery-grid">
                    { for props.images.iter().enumerate().map(|(i, src)| html! {
                        // Counted from the oldest image so keys survive prepends.
                        <img
                            key={(total - i).to_string()}
                            src={src.as_str().to_owned()}
                            alt={format!("Gallery {}", i + 1)}
                            class="gallery-image"
                        />
                    }) }
                </div>
            }
        </section>
    }
}
