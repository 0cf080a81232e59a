use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Vehicle,
    Message,
}

/// What the visitor has typed so far. Never sent anywhere.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub vehicle: String,
    pub message: String,
}

impl ContactDraft {
    pub fn with(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Phone => next.phone = value,
            ContactField::Vehicle => next.vehicle = value,
            ContactField::Message => next.message = value,
        }
        next
    }

    pub fn has_required_fields(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);

    let input_for = |field: ContactField| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(draft.with(field, input.value()));
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(draft.with(ContactField::Message, area.value()));
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!(
                "Contact form submitted (required fields present: {}); message delivery is not configured",
                draft.has_required_fields()
            );
        })
    };

    html! {
        <div class="card">
            <h3 class="card-title">{"Send us a message"}</h3>
            <form class="contact-form" {onsubmit}>
                <input placeholder="Name" required=true value={draft.name.clone()}
                    oninput={input_for(ContactField::Name)} />
                <div class="contact-form-row">
                    <input placeholder="Email" type="email" required=true value={draft.email.clone()}
                        oninput={input_for(ContactField::Email)} />
                    <input placeholder="Phone" value={draft.phone.clone()}
                        oninput={input_for(ContactField::Phone)} />
                </div>
                <input placeholder="Vehicle (Year / Make / Model)" value={draft.vehicle.clone()}
                    oninput={input_for(ContactField::Vehicle)} />
                <textarea rows="4" placeholder="How can we help?" value={draft.message.clone()}
                    oninput={on_message} />
                <button type="submit" class="primary-button">{"Send Message"}</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_one_field_leaves_the_rest() {
        let draft = ContactDraft::default()
            .with(ContactField::Name, "Dana".into())
            .with(ContactField::Vehicle, "2020 Civic".into());
        assert_eq!(draft.name, "Dana");
        assert_eq!(draft.vehicle, "2020 Civic");
        assert!(draft.email.is_empty());
    }

    #[test]
    fn name_and_email_are_required() {
        let draft = ContactDraft::default().with(ContactField::Name, "Dana".into());
        assert!(!draft.has_required_fields());
        let draft = draft.with(ContactField::Email, "dana@example.com".into());
        assert!(draft.has_required_fields());
        let blank = draft.with(ContactField::Name, "   ".into());
        assert!(!blank.has_required_fields());
    }
}
