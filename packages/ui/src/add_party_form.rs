use dioxus::prelude::*;
use store::{FormError, NewParty};

/// Raw input of the add-party form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartyFormFields {
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
}

impl PartyFormFields {
    /// Turn the input into a [`NewParty`], clearing every field on success.
    /// On error the input is left as typed.
    pub fn submit(&mut self) -> Result<NewParty, FormError> {
        let party = NewParty::from_form(&self.name, &self.description, &self.date, &self.location)?;
        *self = Self::default();
        Ok(party)
    }
}

/// Form for creating a new party.
///
/// Every field is required. The date input yields `YYYY-MM-DD`, which
/// [`NewParty::from_form`] turns into an ISO-8601 timestamp before
/// `on_submit` sees it.
#[component]
pub fn AddPartyForm(on_submit: EventHandler<NewParty>) -> Element {
    let mut fields = use_signal(PartyFormFields::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = fields.write().submit();
        match result {
            Ok(party) => on_submit.call(party),
            Err(e) => tracing::warn!("Not adding party: {e}"),
        }
    };

    let current = fields();

    rsx! {
        form {
            onsubmit: handle_submit,
            label { r#for: "name", "Name" }
            input {
                r#type: "text",
                name: "name",
                id: "name",
                required: true,
                value: current.name,
                oninput: move |evt: FormEvent| fields.write().name = evt.value(),
            }
            label { r#for: "description", "Description" }
            input {
                r#type: "text",
                name: "description",
                id: "description",
                required: true,
                value: current.description,
                oninput: move |evt: FormEvent| fields.write().description = evt.value(),
            }
            label { r#for: "date", "Date" }
            input {
                r#type: "date",
                name: "date",
                id: "date",
                required: true,
                value: current.date,
                oninput: move |evt: FormEvent| fields.write().date = evt.value(),
            }
            label { r#for: "location", "Location" }
            input {
                r#type: "text",
                name: "location",
                id: "location",
                required: true,
                value: current.location,
                oninput: move |evt: FormEvent| fields.write().location = evt.value(),
            }
            button { r#type: "submit", "Add Party" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_to_string;

    fn app() -> Element {
        rsx! {
            AddPartyForm { on_submit: move |_: NewParty| {} }
        }
    }

    fn filled(name: &str, description: &str, date: &str, location: &str) -> PartyFormFields {
        PartyFormFields {
            name: name.to_string(),
            description: description.to_string(),
            date: date.to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn test_valid_submit_yields_party_and_clears_fields() {
        let mut fields = filled("A", "B", "2024-01-01", "C");

        let party = fields.submit().unwrap();

        assert_eq!(
            party,
            NewParty {
                name: "A".to_string(),
                description: "B".to_string(),
                date: "2024-01-01T00:00:00.000Z".to_string(),
                location: "C".to_string(),
            }
        );
        assert_eq!(fields, PartyFormFields::default());
    }

    #[test]
    fn test_rejected_submit_keeps_fields() {
        let mut fields = filled("A", "B", "", "C");
        assert_eq!(fields.submit(), Err(FormError::MissingField("date")));
        assert_eq!(fields, filled("A", "B", "", "C"));

        let mut fields = filled("A", "B", "not-a-date", "C");
        assert!(matches!(fields.submit(), Err(FormError::InvalidDate(_))));
        assert_eq!(fields.date, "not-a-date");
    }

    #[test]
    fn test_form_has_required_fields() {
        let html = render_to_string(app);
        for field in ["name", "description", "date", "location"] {
            assert!(html.contains(&format!(r#"id="{field}""#)), "missing {field}");
        }
        assert_eq!(html.matches("required").count(), 4);
        assert!(html.contains(r#"type="date""#));
        assert!(html.contains("Add Party"));
    }
}
